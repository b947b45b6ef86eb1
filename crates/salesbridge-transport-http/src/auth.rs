//! Bearer token authentication shared by both surfaces.

use axum::http::{header, HeaderMap};

/// Per-surface authentication, decided once when the router is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthPolicy {
    /// No credential required.
    #[default]
    Open,
    /// `Authorization: Bearer <token>` must carry exactly this token.
    Bearer(String),
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    InvalidFormat,
    InvalidToken,
}

impl AuthRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing token",
            Self::InvalidFormat => "invalid format",
            Self::InvalidToken => "invalid token",
        }
    }
}

impl AuthPolicy {
    /// An absent or empty token leaves the surface open.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Bearer(t),
            _ => Self::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Checks the `Authorization` header against this policy.
    ///
    /// The scheme is matched case-insensitively, the token exactly.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthRejection`] describing the failure.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), AuthRejection> {
        let Self::Bearer(expected) = self else {
            return Ok(());
        };

        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthRejection::MissingHeader)?
            .to_str()
            .map_err(|_| AuthRejection::InvalidFormat)?;

        match value.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
                if token == expected {
                    Ok(())
                } else {
                    Err(AuthRejection::InvalidToken)
                }
            }
            _ => Err(AuthRejection::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    fn policy() -> AuthPolicy {
        AuthPolicy::Bearer("secret123".into())
    }

    #[test]
    fn valid_bearer_passes() {
        assert!(policy().check(&headers("Bearer secret123")).is_ok());
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(policy().check(&headers("bearer secret123")).is_ok());
        assert!(policy().check(&headers("BEARER secret123")).is_ok());
    }

    #[test]
    fn token_is_case_sensitive() {
        assert_eq!(
            policy().check(&headers("Bearer SECRET123")),
            Err(AuthRejection::InvalidToken)
        );
    }

    #[test]
    fn missing_header_rejected() {
        assert_eq!(
            policy().check(&HeaderMap::new()),
            Err(AuthRejection::MissingHeader)
        );
    }

    #[test]
    fn basic_auth_scheme_rejected() {
        assert_eq!(
            policy().check(&headers("Basic secret123")),
            Err(AuthRejection::InvalidFormat)
        );
    }

    #[test]
    fn open_policy_ignores_headers() {
        assert!(AuthPolicy::Open.check(&HeaderMap::new()).is_ok());
    }

    #[test]
    fn empty_token_means_open() {
        assert!(AuthPolicy::from_token(Some(String::new())).is_open());
        assert!(AuthPolicy::from_token(None).is_open());
        assert_eq!(
            AuthPolicy::from_token(Some("t".into())),
            AuthPolicy::Bearer("t".into())
        );
    }
}
