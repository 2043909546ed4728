use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::navigation::OperatorCard;
use crate::{Error, Result};

/// Where the console lands after signing in.
pub const HOME_ROUTE: &str = "/";

/// Who is operating the console. Credentials are never verified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Session {
    #[default]
    Anonymous,
    Admin { email: String },
    Guest,
}

impl Session {
    pub fn is_read_only(&self) -> bool {
        matches!(self, Session::Guest)
    }

    pub fn operator_card(&self) -> OperatorCard {
        match self {
            Session::Admin { email } => OperatorCard {
                name: "Admin User".to_string(),
                detail: email.clone(),
            },
            Session::Guest => OperatorCard {
                name: "Guest".to_string(),
                detail: "read-only".to_string(),
            },
            Session::Anonymous => OperatorCard {
                name: "Admin User".to_string(),
                detail: "admin@ai-news.com".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Accepts any non-empty email/password pair.
    pub fn sign_in(&self) -> Result<Session> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::required("Email"));
        }
        if self.password.trim().is_empty() {
            return Err(Error::required("Password"));
        }
        debug!("signing in {} without verification", email);
        Ok(Session::Admin { email: email.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_any_non_empty_credentials_sign_in() {
        let session = form("someone@example.org", "x").sign_in().unwrap();
        assert_eq!(session, Session::Admin { email: "someone@example.org".to_string() });
        assert!(!session.is_read_only());
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        assert!(form("", "secret").sign_in().is_err());
        assert!(form("a@b.c", "   ").sign_in().is_err());
    }

    #[test]
    fn test_guest_is_read_only() {
        assert!(Session::Guest.is_read_only());
        assert_eq!(Session::Guest.operator_card().name, "Guest");
    }

    #[test]
    fn test_session_serializes_with_mode_tag() {
        let json = serde_json::to_value(Session::Admin { email: "a@b.c".to_string() }).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "admin", "email": "a@b.c"}));
    }
}
