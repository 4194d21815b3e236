//! Command implementations for the notepack CLI.

pub mod convert;
