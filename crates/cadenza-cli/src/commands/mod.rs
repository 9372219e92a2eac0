//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod best30;
pub mod best40;
pub mod decode;
