//! Macro for implementing Display and FromStr for unit enums
//!
//! Generates both conversions from one variant/string table. Parsing is
//! case-insensitive and ignores surrounding whitespace.
//!
//! # Example
//!
//! ```rust
//! use tessera_domain::impl_enum_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum LogFormat {
//!     Text,
//!     Json,
//! }
//!
//! impl_enum_string_conversions!(LogFormat {
//!     Text => "text",
//!     Json => "json",
//! });
//!
//! assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
//! ```

/// Implements Display and FromStr traits for unit enums
///
/// * `$enum_name` - The enum type
/// * `$variant => $str` - Variant to lowercase string mapping
#[macro_export]
macro_rules! impl_enum_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
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
