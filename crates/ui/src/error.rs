use std::fmt;

/// Categorization of library errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorKind {
    /// Configuration file could not be read or parsed.
    Config,
    /// A token or variant key that is not declared.
    UnknownKey,
    /// A browser script failed to run or reported an error.
    Script,
}

impl fmt::Display for UiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiErrorKind::Config => write!(f, "Config"),
            UiErrorKind::UnknownKey => write!(f, "UnknownKey"),
            UiErrorKind::Script => write!(f, "Script"),
        }
    }
}

/// Error surfaced at the library boundary. Rendering never fails; these only
/// come from configuration loading, strict key parsing and host scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl UiError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn unknown_key(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::UnknownKey,
            message: message.into(),
        }
    }

    pub fn script(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::Script,
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for UiError {}
