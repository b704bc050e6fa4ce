use thiserror::Error;

use crate::locale::Locale;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown cleaner: {0}")]
    UnknownCleaner(String),

    #[error("cannot name '{value}' in {locale}: {reason}")]
    UnsupportedNumeral {
        value: String,
        locale: Locale,
        reason: String,
    },
}

impl NormalizeError {
    pub(crate) fn unsupported(value: &str, locale: Locale, reason: impl Into<String>) -> Self {
        NormalizeError::UnsupportedNumeral {
            value: value.to_string(),
            locale,
            reason: reason.into(),
        }
    }
}
