// rfcval/src/commands/mod.rs
//! Command runners for the rfcval CLI.

pub mod batch;
pub mod check;
pub mod sample;
