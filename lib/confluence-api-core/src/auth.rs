//! Authentication credentials.
//!
//! Confluence accepts either HTTP basic authentication or, since 7.9, a
//! personal access token sent as a bearer token.

use std::fmt;

use base64::Engine;

use crate::ConfigError;

/// Length of a Confluence personal access token, in bytes.
pub const TOKEN_LENGTH: usize = 44;

/// Credential sent in the `Authorization` header of every request.
///
/// # Example
///
/// ```
/// use confluence_api_core::Credential;
///
/// let credential = Credential::basic("JohnDoe", "Test1234!");
/// assert!(credential.validate().is_ok());
/// assert_eq!(credential.header_value(), "Basic Sm9obkRvZTpUZXN0MTIzNCE=");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// User name and password.
    Basic {
        /// User name.
        user: String,
        /// Password.
        password: String,
    },
    /// Personal access token.
    Token(String),
}

impl Credential {
    /// Create a basic credential.
    #[must_use]
    pub fn basic(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Create a personal access token credential.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Check the credential shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Basic { user, .. } if user.is_empty() => Err(ConfigError::EmptyUser),
            Self::Basic { password, .. } if password.is_empty() => Err(ConfigError::EmptyPassword),
            Self::Token(token) if token.is_empty() => Err(ConfigError::EmptyToken),
            Self::Token(token) if token.len() != TOKEN_LENGTH => Err(ConfigError::TokenLength {
                actual: token.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { user, password } => {
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
                format!("Basic {encoded}")
            }
            Self::Token(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}
