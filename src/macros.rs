//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The macro expects `Token` to be in scope at the call site.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text, anything convertible into a `String`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: String::from($value),
        }
    };
}
