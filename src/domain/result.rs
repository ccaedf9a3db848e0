//! Result type alias for phi-surrogates
//!
//! This module provides a convenient Result type alias that uses
//! [`SurrogateError`] as the error type.

use super::errors::SurrogateError;

/// Result type alias for library operations
///
/// # Examples
///
/// ```
/// use phi_surrogates::domain::result::Result;
/// use phi_surrogates::domain::errors::SurrogateError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SurrogateError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SurrogateError>;
