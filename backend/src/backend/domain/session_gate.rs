use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

use super::page_router::Page;
use crate::backend::storage::{KeyValueStore, SESSION_KEY};

pub const LOGIN_ERROR_MESSAGE: &str = "Invalid username or password";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to update admin session: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Decides whether a username/password pair opens an admin session
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured username/password pair
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Used when no admin account is configured; every login is rejected
pub struct NoCredentials;

impl CredentialVerifier for NoCredentials {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        warn!("Admin login attempted but no admin credentials are configured");
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Session flag set; continue to the dashboard
    Authenticated { redirect: Page },
    /// Flag untouched; show `message` inline on the login form
    Rejected { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAccess {
    Granted,
    /// Not logged in; go here before doing any other work
    Redirect(Page),
}

/// Service for the admin login flag
///
/// The flag lives in a session-scoped store so it disappears with the
/// browser session (or with the CLI process).
#[derive(Clone)]
pub struct SessionGate {
    session_store: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionGate {
    pub fn new(session_store: Arc<dyn KeyValueStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            session_store,
            verifier,
        }
    }

    /// Check credentials and open the session if they match
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        if !self.verifier.verify(username, password) {
            info!("Admin login rejected for user '{}'", username);
            return Ok(LoginOutcome::Rejected {
                message: LOGIN_ERROR_MESSAGE.to_string(),
            });
        }

        self.session_store.set(SESSION_KEY, "true")?;
        info!("Admin session opened for user '{}'", username);
        Ok(LoginOutcome::Authenticated {
            redirect: Page::TailorDashboard,
        })
    }

    /// Whether the session flag is set; an unreadable store counts as logged out
    pub fn is_authenticated(&self) -> bool {
        match self.session_store.get(SESSION_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Failed to read admin session flag: {}", e);
                false
            }
        }
    }

    /// Dashboard entry check
    pub fn enter_dashboard(&self) -> DashboardAccess {
        if self.is_authenticated() {
            DashboardAccess::Granted
        } else {
            info!("Unauthenticated dashboard access, redirecting to login");
            DashboardAccess::Redirect(Page::TailorLogin)
        }
    }

    /// Clear the flag; returns the public page to go to
    pub fn logout(&self) -> Result<Page> {
        self.session_store.remove(SESSION_KEY)?;
        info!("Admin session closed");
        Ok(Page::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::{TestEnvironment, TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME};
    use crate::backend::storage::MemoryStore;

    #[test]
    fn test_correct_credentials_open_session() {
        let env = TestEnvironment::new();
        let gate = &env.backend.session_gate;

        let outcome = gate.login(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD).unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                redirect: Page::TailorDashboard
            }
        );
        assert_eq!(env.session_store.get(SESSION_KEY).unwrap(), Some("true".to_string()));
        assert_eq!(gate.enter_dashboard(), DashboardAccess::Granted);
    }

    #[test]
    fn test_wrong_credentials_leave_flag_unset() {
        let env = TestEnvironment::new();
        let gate = &env.backend.session_gate;

        let cases = [
            (TEST_ADMIN_USERNAME, "wrong"),
            ("wrong", TEST_ADMIN_PASSWORD),
            ("", ""),
            (TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME),
        ];
        for (username, password) in cases {
            let outcome = gate.login(username, password).unwrap();
            assert_eq!(
                outcome,
                LoginOutcome::Rejected {
                    message: LOGIN_ERROR_MESSAGE.to_string()
                }
            );
        }

        assert_eq!(env.session_store.get(SESSION_KEY).unwrap(), None);
        assert_eq!(
            gate.enter_dashboard(),
            DashboardAccess::Redirect(Page::TailorLogin)
        );
    }

    #[test]
    fn test_credentials_are_matched_exactly() {
        let verifier = StaticCredentials::new("Admin", "Secret");
        assert!(verifier.verify("Admin", "Secret"));
        assert!(!verifier.verify("admin", "Secret"));
        assert!(!verifier.verify(" Admin", "Secret"));
        assert!(!verifier.verify("Admin", "Secret "));
    }

    #[test]
    fn test_only_literal_true_counts_as_logged_in() {
        let env = TestEnvironment::new();
        env.session_store.set(SESSION_KEY, "yes").unwrap();
        assert!(!env.backend.session_gate.is_authenticated());

        env.session_store.set(SESSION_KEY, "true").unwrap();
        assert!(env.backend.session_gate.is_authenticated());
    }

    #[test]
    fn test_logout_clears_flag() {
        let env = TestEnvironment::new();
        let gate = &env.backend.session_gate;
        gate.login(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD).unwrap();

        assert_eq!(gate.logout().unwrap(), Page::Home);
        assert!(!gate.is_authenticated());
        assert_eq!(gate.logout().unwrap(), Page::Home);
    }

    #[test]
    fn test_no_credentials_rejects_everything() {
        let gate = SessionGate::new(Arc::new(MemoryStore::new()), Arc::new(NoCredentials));
        assert!(matches!(
            gate.login("", "").unwrap(),
            LoginOutcome::Rejected { .. }
        ));
        assert!(!gate.is_authenticated());
    }
}
