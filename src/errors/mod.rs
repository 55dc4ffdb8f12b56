//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors the parser accumulates. It includes:
//!
//! - Error structures carrying the offending token
//! - Specific error variants for each way a parse can fail
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
