//! Credential provider for the GitHub API
//!
//! The GitHub endpoints work unauthenticated at a low rate limit; a personal
//! access token raises it. The executor applies whichever configuration the
//! embedding application supplies.

use reqwest::RequestBuilder;

/// Environment variable the default token is read from
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Authentication configuration for outgoing requests
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication; requests go out anonymously
    #[default]
    None,

    /// Bearer token authentication (GitHub personal access token)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Create a bearer-token configuration
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Read a token from `GITHUB_TOKEN`, falling back to anonymous access
    pub fn from_env() -> Self {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Self::Bearer { token },
            _ => Self::None,
        }
    }

    /// Apply this configuration to an outgoing request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => req,
            Self::Bearer { token } => req.bearer_auth(token),
        }
    }

    /// Whether a credential is configured
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Bearer { .. })
    }
}

// Token values stay out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("AuthConfig::None"),
            Self::Bearer { .. } => f.write_str("AuthConfig::Bearer { token: \"***\" }"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        assert!(!AuthConfig::default().is_authenticated());
    }

    #[test]
    fn test_bearer_is_authenticated() {
        assert!(AuthConfig::bearer("ghp_abc123").is_authenticated());
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = AuthConfig::bearer("ghp_secret");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("***"));
    }
}
