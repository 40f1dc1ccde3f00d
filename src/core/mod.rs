//! Core data types and structures
//!
//! This module contains the plain data types shared by the command line
//! layer and the report generators.

pub mod types;

pub use types::*;
