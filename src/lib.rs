//! # robot-simulation
//!
//! A robot moving around a square table.
//!
//! The [`Robot`] is a small state machine: it starts off the table, is put on it
//! with `place`, then moves and turns without ever leaving it. Moves that would
//! fall off an edge are ignored rather than rejected. The [`CommandInterpreter`]
//! drives a robot from `PLACE X,Y,F` / `MOVE` / `LEFT` / `RIGHT` / `REPORT`
//! lines.

pub mod config;
pub mod heading;
pub mod interpreter;
pub mod robot;
pub mod table;

pub use config::*;
pub use heading::*;
pub use interpreter::*;
pub use robot::*;
pub use table::*;
