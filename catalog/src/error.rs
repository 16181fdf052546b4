//! Errors raised when DOM-provided strings are parsed into typed selections.

/// Error returned by the `FromStr` impls of [`crate::AgeGroup`] and
/// [`crate::Weekday`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not one of the age tokens offered by the catalog filter.
    #[error("unknown age token: {0}")]
    UnknownAge(String),
    /// The value is not one of the weekday tokens offered by the catalog filter.
    #[error("unknown weekday token: {0}")]
    UnknownWeekday(String),
}
