//! The computational core of `dynfib`, shared between the binary and its
//! tests.

/// The iterative Fibonacci calculator.
pub mod fibonacci;

/// Reading the requested index from an input stream.
pub mod input;

/// Optional declarative configuration, read from a toml file.
pub mod config;

/// Common file operations
pub mod file_system;

/// The error handling for `dynfib`.
pub mod error;

/// Constant values.
pub mod constants;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
