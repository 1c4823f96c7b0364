//! Logical grid model: span-aware indexing, border hit testing and shared
//! border resolution.

pub mod border;
pub mod index;
pub mod span;

pub use border::classify;
pub use index::{normalize_span, CellId, GridIndex, IndexCache, Placement};
pub use span::participants;
