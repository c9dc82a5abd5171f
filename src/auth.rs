use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Контекст авторизации. Передается явно в каждый вызов, которому нужен токен.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_token(token: Option<String>) -> Self {
        token.map(|t| Self::new(t)).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Значение заголовка Authorization: "Bearer <token>"
    pub fn bearer(&self) -> Option<Result<HeaderValue, InvalidHeaderValue>> {
        self.token
            .as_deref()
            .map(|t| HeaderValue::from_str(&format!("Bearer {}", t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_anonymous() {
        assert!(!AuthContext::new("").is_authenticated());
        assert!(!AuthContext::from_token(None).is_authenticated());
        assert!(AuthContext::anonymous().bearer().is_none());
    }

    #[test]
    fn bearer_header_value() {
        let auth = AuthContext::new("abc.def");
        assert!(auth.is_authenticated());
        let header = auth.bearer().unwrap().unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer abc.def");
    }

    #[test]
    fn token_with_newline_is_rejected_as_header() {
        let auth = AuthContext::new("bad\ntoken");
        assert!(auth.bearer().unwrap().is_err());
    }
}
