//! **wayfield-paths** — A* shortest-path search over a wayfield [`Field`].
//!
//! The search never touches the field's cells: all per-search bookkeeping
//! (costs, back-pointers, closed flags) lives in a [`PathBuffer`], a
//! generation-stamped node arena that is lazily invalidated per query, so
//! repeated searches over one field stay correct and allocation-free after
//! warm-up.
//!
//! - [`PathFinder::find_path`] — search between a field's Start and End
//!   markers, returning the interior waypoints.
//! - [`PathBuffer::astar_path`] — the underlying search over any
//!   [`Pather`], returning the full endpoint-inclusive path.
//!
//! [`Field`]: wayfield_core::Field

mod astar;
mod distance;
mod finder;
mod pathbuffer;
mod traits;

pub use distance::manhattan;
pub use finder::PathFinder;
pub use pathbuffer::PathBuffer;
pub use traits::Pather;
