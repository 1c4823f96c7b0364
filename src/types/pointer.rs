use super::Point;

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        meta: false,
        shift: false,
    };

    /// True when any modifier key is held.
    pub const fn any(self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }
}

/// Pointer button, numbered the way `MouseEvent.button` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// A pointer event as seen by the interaction controllers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// Screen-space position; drives the dragged border.
    pub screen: Point,
    /// Position relative to the padding box of the cell the listener is on.
    pub offset: Point,
    /// True when the event's direct target is that cell rather than a
    /// descendant of it.
    pub on_target: bool,
}

impl PointerEvent {
    /// Primary button, no modifiers, targeted at the cell.
    pub fn primary(screen: Point, offset: Point) -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            screen,
            offset,
            on_target: true,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub fn off_target(mut self) -> Self {
        self.on_target = false;
        self
    }

    /// Primary button with no modifier keys: the only gesture that resizes.
    pub fn is_plain_primary(&self) -> bool {
        self.button == PointerButton::Primary && !self.modifiers.any()
    }
}

/// What the host should do with the native event after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventOutcome {
    /// Handler did nothing; let the event through untouched.
    pub const IGNORED: EventOutcome = EventOutcome {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Handler acted and owns the event.
    pub const CONSUMED: EventOutcome = EventOutcome {
        prevent_default: true,
        stop_propagation: true,
    };

    /// Handler acted; suppress the default action but keep propagating.
    pub const PREVENTED: EventOutcome = EventOutcome {
        prevent_default: true,
        stop_propagation: false,
    };

    pub const fn is_ignored(self) -> bool {
        !self.prevent_default && !self.stop_propagation
    }
}

/// Advisory cursor shown while hovering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// The configured default cursor.
    #[default]
    Default,
    RowResize,
    ColResize,
}

impl CursorHint {
    /// CSS `cursor` value, with `default` substituted for [`CursorHint::Default`].
    pub fn css<'a>(self, default: &'a str) -> &'a str {
        match self {
            CursorHint::Default => default,
            CursorHint::RowResize => "row-resize",
            CursorHint::ColResize => "col-resize",
        }
    }
}
