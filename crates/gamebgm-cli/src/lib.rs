//! gamebgm CLI library.
//!
//! This crate provides the core functionality for the gamebgm CLI: request
//! loading and the `generate`, `validate` and `inspect` commands. The engine
//! itself never touches the filesystem; all file I/O lives here.

pub mod commands;
pub mod input;
