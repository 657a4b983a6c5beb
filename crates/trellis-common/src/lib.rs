//! Common utilities for the Trellis crates.
//!
//! This crate provides shared infrastructure used by every component:
//! - **Warning System** - colored, de-duplicated terminal output for input
//!   that is accepted but probably not what the caller meant

pub mod warning;
