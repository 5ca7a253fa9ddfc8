//! Core simulation and configuration logic for the drift particle
//! background.
//!
//! These modules intentionally avoid referencing platform-specific APIs so
//! the whole crate compiles and tests on the host. The web frontend consumes
//! them to drive an HTML canvas; any other surface that can draw discs and
//! line segments would do.

pub mod color;
pub mod config;
pub mod driver;
pub mod engine;
pub mod field;
pub mod links;

pub use color::*;
pub use config::*;
pub use driver::*;
pub use engine::*;
pub use field::*;
pub use links::*;
