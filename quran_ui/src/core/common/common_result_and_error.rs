// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on the error handling approach used here, see:
//! <https://developerlife.com/2024/06/10/rust-miette-error-handling/>

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`], [`crate::ReaderUiError`], and any other type
///   of error.
pub type CommonResult<T> = miette::Result<T>;

/// Catch-all error for failures that don't deserve their own
/// [`crate::ReaderUiError`] variant.
///
/// # Example
///
/// ```
/// use quran_ui::{CommonError, CommonErrorType, CommonResult};
///
/// fn parse_page(arg: &str) -> CommonResult<usize> {
///     match arg.parse::<usize>() {
///         Ok(page) => Ok(page),
///         Err(_) => CommonError::new_error_result(
///             CommonErrorType::ParsingError,
///             &format!("Not a page number: {arg}"),
///         ),
///     }
/// }
///
/// assert!(parse_page("3").is_ok());
/// assert!(parse_page("three").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    /// Setup failures with no better category, eg: installing a second global tracing
    /// subscriber.
    #[default]
    General,
    ParsingError,
}

impl Error for CommonError {}

/// Same as the derived [`Debug`] implementation.
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// # Errors
    ///
    /// Always returns the `Err` variant.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }
}
