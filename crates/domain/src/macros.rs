//! Macro for implementing Display and FromStr for wire-value enums
//!
//! Several request parameters are closed sets of lowercase strings
//! (`overview=full`, image format `png`, ...). This macro provides a single
//! implementation of both Display and FromStr for such enums, with
//! case-insensitive parsing and a consistent lowercase representation.
//!
//! # Example
//!
//! ```rust
//! use olamaps_domain::impl_wire_value_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum TravelMode {
//!     Driving,
//!     Walking,
//! }
//!
//! impl_wire_value_conversions!(TravelMode {
//!     Driving => "driving",
//!     Walking => "walking",
//! });
//!
//! assert_eq!(TravelMode::Driving.to_string(), "driving");
//! assert_eq!("WALKING".parse::<TravelMode>().unwrap(), TravelMode::Walking);
//! ```

/// Implements Display and FromStr traits for wire-value enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire values
#[macro_export]
macro_rules! impl_wire_value_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::OlaMapsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::OlaMapsError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
