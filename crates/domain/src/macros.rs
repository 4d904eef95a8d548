//! Macro for implementing Display and FromStr for unit-variant enums
//!
//! Configuration values such as the classification mode travel through
//! environment variables and config files as plain strings. This macro gives
//! such enums a single canonical spelling for `Display` and case-insensitive
//! parsing for `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use graphlist_domain::impl_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum WriteKind {
//!     Create,
//!     Update,
//! }
//!
//! impl_string_conversions!(WriteKind {
//!     Create => "create",
//!     Update => "update",
//! });
//!
//! assert_eq!("UPDATE".parse::<WriteKind>().unwrap(), WriteKind::Update);
//! ```

/// Implements Display and FromStr traits for unit-variant enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
