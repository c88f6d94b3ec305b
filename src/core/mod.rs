/// Core module for the scanner
///
/// This module contains the Thai text pattern, the per-file scanner and its
/// error types.

pub mod error;
pub mod patterns;
pub mod scanner;
