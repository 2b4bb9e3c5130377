//! Common utilities for the stylesnap crates.
//!
//! This crate provides shared infrastructure used by the CSS and serializer crates:
//! - **Warning System** - colored terminal output for input we recover from or drop

pub mod warning;
