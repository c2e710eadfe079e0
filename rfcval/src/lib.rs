// rfcval/src/lib.rs
//! # rfcval CLI Application
//!
//! This crate provides the command-line interface for the `rfcval-core`
//! validation library: single-value checks, bulk batch reports and sample
//! identifier generation.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
