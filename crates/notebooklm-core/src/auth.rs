//! Session credentials captured outside this crate.
//!
//! Browser login, cookie capture, and token refresh all live elsewhere;
//! this module only carries the captured values into requests. Values are
//! read from environment variables and never logged.

use thiserror::Error;

use crate::http_client::HttpAuth;

/// Environment variable holding the `Cookie` header value.
pub const COOKIE_ENV: &str = "NOTEBOOKLM_COOKIES";
/// Environment variable holding the CSRF (`at`) token.
pub const CSRF_ENV: &str = "NOTEBOOKLM_AT";
/// Environment variable holding the session id (`f.sid`).
pub const SESSION_ENV: &str = "NOTEBOOKLM_SID";
/// Environment variable holding the frontend build label (`bl`).
pub const BUILD_LABEL_ENV: &str = "NOTEBOOKLM_BL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("environment variable {name} is not set: capture session cookies first")]
    MissingCookies { name: &'static str },
}

/// Captured session tokens. Only cookies are mandatory; calls degrade
/// gracefully without the CSRF token or session id, though most
/// mutations will be rejected upstream without the CSRF token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub cookie_header: String,
    pub csrf_token: Option<String>,
    pub session_id: Option<String>,
    pub build_label: Option<String>,
}

impl AuthTokens {
    pub fn new(cookie_header: impl Into<String>) -> Self {
        Self {
            cookie_header: cookie_header.into(),
            csrf_token: None,
            session_id: None,
            build_label: None,
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_build_label(mut self, build_label: impl Into<String>) -> Self {
        self.build_label = Some(build_label.into());
        self
    }

    /// Reads tokens from the environment.
    pub fn from_env() -> Result<Self, AuthError> {
        let cookie_header = std::env::var(COOKIE_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingCookies { name: COOKIE_ENV })?;

        let optional = |name: &str| std::env::var(name).ok().filter(|value| !value.is_empty());

        Ok(Self {
            cookie_header,
            csrf_token: optional(CSRF_ENV),
            session_id: optional(SESSION_ENV),
            build_label: optional(BUILD_LABEL_ENV),
        })
    }

    pub fn http_auth(&self) -> HttpAuth {
        HttpAuth::Cookie(self.cookie_header.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_tokens() {
        let auth = AuthTokens::new("SID=abc")
            .with_csrf_token("csrf-1")
            .with_session_id("-99")
            .with_build_label("boq_labs-tailwind_20250101");

        assert_eq!(auth.cookie_header, "SID=abc");
        assert_eq!(auth.csrf_token.as_deref(), Some("csrf-1"));
        assert_eq!(auth.session_id.as_deref(), Some("-99"));
        assert_eq!(
            auth.build_label.as_deref(),
            Some("boq_labs-tailwind_20250101")
        );
    }

    #[test]
    fn http_auth_is_cookie_based() {
        let auth = AuthTokens::new("SID=abc");
        assert_eq!(auth.http_auth(), HttpAuth::Cookie(String::from("SID=abc")));
    }
}
