//! Connection settings: server and user from flags or environment, password from the keyring.

use jira_api::JiraConfig;

use crate::error::AppError;
use crate::secrets::SecretStore;

pub const SERVER_ENV: &str = "JIRA_SERVER";
pub const USER_ENV: &str = "JIRA_USER";

/// Everything needed to authenticate against a Jira server.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub server: String,
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn client_config(&self) -> JiraConfig {
        JiraConfig::new(self.server.clone(), self.user.clone(), self.password.clone())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server", &self.server)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Resolves server, user and password. Server and user are checked before the store is touched.
pub fn resolve_credentials(
    server: Option<&str>,
    user: Option<&str>,
    store: &dyn SecretStore,
) -> Result<Credentials, AppError> {
    let server = non_blank(server).ok_or(AppError::MissingServer)?;
    let user = non_blank(user).ok_or(AppError::MissingUser)?;
    let password = store
        .password(server, user)?
        .ok_or_else(|| AppError::MissingPassword {
            server: server.to_string(),
            user: user.to_string(),
        })?;
    Ok(Credentials {
        server: server.to_string(),
        user: user.to_string(),
        password,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::resolve_credentials;
    use crate::error::AppError;
    use crate::secrets::SecretStore;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: HashMap<(String, String), String>,
        lookups: Cell<usize>,
    }

    impl MemoryStore {
        fn with(server: &str, user: &str, password: &str) -> Self {
            let mut store = Self::default();
            store
                .entries
                .insert((server.to_string(), user.to_string()), password.to_string());
            store
        }
    }

    impl SecretStore for MemoryStore {
        fn password(&self, service: &str, account: &str) -> Result<Option<String>, AppError> {
            self.lookups.set(self.lookups.get() + 1);
            Ok(self
                .entries
                .get(&(service.to_string(), account.to_string()))
                .cloned())
        }
    }

    #[test]
    fn resolves_password_for_server_and_user() {
        let store = MemoryStore::with("https://jira.example.com", "alice", "secret");
        let credentials =
            resolve_credentials(Some("https://jira.example.com"), Some("alice"), &store).unwrap();
        assert_eq!(credentials.server, "https://jira.example.com");
        assert_eq!(credentials.user, "alice");
        assert_eq!(credentials.password, "secret");
        assert_eq!(
            credentials.client_config().api_root(),
            "https://jira.example.com/rest/api/2/"
        );
    }

    #[test]
    fn missing_server_fails_before_store_lookup() {
        let store = MemoryStore::default();
        let err = resolve_credentials(None, Some("alice"), &store).unwrap_err();
        assert!(matches!(err, AppError::MissingServer));
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Please set JIRA_SERVER or provide --jira-server argument"
        );
        assert_eq!(store.lookups.get(), 0);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let store = MemoryStore::default();
        let err = resolve_credentials(Some("  "), Some("alice"), &store).unwrap_err();
        assert!(matches!(err, AppError::MissingServer));

        let err = resolve_credentials(Some("https://jira.example.com"), Some(""), &store).unwrap_err();
        assert!(matches!(err, AppError::MissingUser));
        assert_eq!(
            err.to_string(),
            "Please set JIRA_USER or provide --jira-user argument"
        );
        assert_eq!(store.lookups.get(), 0);
    }

    #[test]
    fn missing_password_explains_how_to_store_it() {
        let store = MemoryStore::with("https://jira.example.com", "bob", "secret");
        let err = resolve_credentials(Some("https://jira.example.com"), Some("alice"), &store)
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Please add password to keyring (run \"keyring set https://jira.example.com alice\")"
        );
    }

    #[test]
    fn debug_output_hides_password() {
        let store = MemoryStore::with("https://jira.example.com", "alice", "hunter2");
        let credentials =
            resolve_credentials(Some("https://jira.example.com"), Some("alice"), &store).unwrap();
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
