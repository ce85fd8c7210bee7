//! Error types and error handling for the parser.
//!
//! This module defines the errors a parse can end with. It includes:
//!
//! - Error structures with source position information
//! - The two parse failure variants (unexpected token, missing delimiter)
//! - Error names and suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
