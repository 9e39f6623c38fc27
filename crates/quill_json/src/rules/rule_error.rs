use alloc::borrow::Cow;

use thiserror::Error;

/// The failure of a rule to be created or invoked.
///
/// The engine wraps it into [`SerializeError::ValidatorFailed`] or
/// [`SerializeError::Conversion`] together with the field name.
///
/// [`SerializeError::ValidatorFailed`]: crate::SerializeError::ValidatorFailed
/// [`SerializeError::Conversion`]: crate::SerializeError::Conversion
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleError {
    #[error("rule expected an object of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl RuleError {
    /// Creates a [`RuleError::Custom`] from a message.
    ///
    /// ```
    /// use quill_json::rules::RuleError;
    ///
    /// let err = RuleError::custom("no clock available");
    /// assert_eq!(err.to_string(), "no clock available");
    /// ```
    #[inline]
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(message.into())
    }
}
