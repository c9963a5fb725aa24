//! Persistence of the registered bank account under `bankAccount`.

use anyhow::{Context, Result};
use log::{info, warn};
use shared::{BankAccount, BANK_ACCOUNT_STORAGE_KEY};

use crate::backend::storage::traits::KeyValueStore;

/// Load the registered bank account, if any.
///
/// A missing record means "not registered". Unreadable storage, malformed
/// JSON or a bank/account type outside the fixed option sets are treated the
/// same way and logged.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<BankAccount> {
    let raw = match store.get(BANK_ACCOUNT_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No bank account registered");
            return None;
        }
        Err(e) => {
            warn!("Failed to read saved bank account: {:#}", e);
            return None;
        }
    };

    match serde_json::from_str::<BankAccount>(&raw) {
        Ok(account) => {
            info!("Loaded bank account at {}", account.bank);
            Some(account)
        }
        Err(e) => {
            warn!("Error loading saved bank account: {}", e);
            None
        }
    }
}

/// Persist `account`, replacing any previously registered one
pub fn save<S: KeyValueStore + ?Sized>(store: &S, account: &BankAccount) -> Result<()> {
    let json = serde_json::to_string(account).context("Failed to serialize bank account")?;
    store
        .set(BANK_ACCOUNT_STORAGE_KEY, &json)
        .context("Failed to persist bank account")?;
    Ok(())
}

/// Forget the registered bank account
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
    store
        .remove(BANK_ACCOUNT_STORAGE_KEY)
        .context("Failed to remove bank account")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::InMemoryStore;
    use shared::{AccountType, Bank};

    fn sample_account() -> BankAccount {
        BankAccount {
            bank: Bank::Santander,
            account_type: AccountType::Corriente,
            account_number: "0-000-12-34567-8".to_string(),
        }
    }

    #[test]
    fn test_load_without_record_is_not_registered() {
        assert_eq!(load(&InMemoryStore::new()), None);
    }

    #[test]
    fn test_load_corrupted_record_is_not_registered() {
        let store = InMemoryStore::with_entries([(BANK_ACCOUNT_STORAGE_KEY, "{bank:")]);
        assert_eq!(load(&store), None);
    }

    #[test]
    fn test_load_unknown_bank_is_not_registered() {
        let store = InMemoryStore::with_entries([(
            BANK_ACCOUNT_STORAGE_KEY,
            r#"{"bank":"Banco Inventado","accountType":"Cuenta RUT","accountNumber":"1"}"#,
        )]);
        assert_eq!(load(&store), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = InMemoryStore::new();

        save(&store, &sample_account()).unwrap();

        assert_eq!(load(&store), Some(sample_account()));
        let raw = store.get(BANK_ACCOUNT_STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""accountType":"Cuenta Corriente""#));
    }

    #[test]
    fn test_clear_removes_record() {
        let store = InMemoryStore::new();
        save(&store, &sample_account()).unwrap();

        clear(&store).unwrap();

        assert_eq!(load(&store), None);
        assert!(store.is_empty());
    }
}
