//! Error type definitions for comparison and verification

/// Primary error type for cteq operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Authentication failed error
    ///
    /// Raised when a tag, key or digest does not match its expected value.
    /// Carries no information about where the inputs differed.
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cteq operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Authentication failure with an empty message
    pub fn authentication(context: &'static str) -> Self {
        Self::AuthenticationFailed {
            context,
            #[cfg(feature = "std")]
            message: String::new(),
        }
    }

    /// The static context this error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. } | Self::AuthenticationFailed { context, .. } => {
                *context
            }
        }
    }

    /// Add context to an existing error
    ///
    /// Replaces the context and clears any message; length details survive.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::AuthenticationFailed { context, message } if !message.is_empty() => {
                write!(f, "Authentication failed: {}: {}", context, message)
            }
            Self::AuthenticationFailed { context, .. } => {
                write!(f, "Authentication failed: {}", context)
            }
        }
    }
}
