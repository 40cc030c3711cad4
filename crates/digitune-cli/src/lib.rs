//! Digitune CLI library.
//!
//! This crate provides the core functionality for the Digitune CLI: input
//! resolution (digits, presets, styles, tuning files) and the command
//! implementations.

pub mod commands;
pub mod input;
