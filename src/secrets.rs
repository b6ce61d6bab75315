use keyring::{Entry, Error as KeyringError};
use log::debug;

use crate::error::AppError;

/// Read-only lookup of passwords keyed by (service, account).
pub trait SecretStore {
    fn password(&self, service: &str, account: &str) -> Result<Option<String>, AppError>;
}

/// Secret store backed by the platform keyring. Entries are keyed by Jira server and user,
/// matching what `keyring set <server> <user>` writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl SecretStore for KeyringStore {
    fn password(&self, service: &str, account: &str) -> Result<Option<String>, AppError> {
        let entry = Entry::new(service, account)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(KeyringError::NoEntry) => {
                debug!("No keyring entry for {} at {}", account, service);
                Ok(None)
            }
            Err(err) => Err(AppError::Keyring(err)),
        }
    }
}
