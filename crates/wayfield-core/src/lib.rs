//! **wayfield-core** — Bordered 2D field of stateful cells.
//!
//! This crate provides the data model for grid pathfinding: geometry
//! primitives, the cell state machine with its one-level undo slot, and the
//! [`Field`] container that owns all cells and enforces the placement rules
//! (immutable Border ring, at most one Start and one End marker).

pub mod cell;
pub mod field;
pub mod geom;

pub use cell::{Cell, CellState};
pub use field::Field;
pub use geom::{Point, Range};
