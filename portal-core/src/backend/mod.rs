//! # Backend Module
//!
//! Contains all non-UI logic for the student portal.
//!
//! This module brings together:
//! - **Domain**: profile state, validation, notifications and simulated actions
//! - **Storage**: the key-value abstraction and its backends
//!
//! The backend is UI-agnostic: the Yew frontend and the `portal-profile` CLI
//! drive the same [`AppState`], each over its own storage backend.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend, CLI)
//!     ↓
//! AppState (turns outcomes into notifications)
//!     ↓
//! Domain Layer (ProfileStateManager, TaskScheduler)
//!     ↓
//! Storage Layer (KeyValueStore)
//! ```

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::Notification;
use std::time::Duration;

use crate::config::PortalConfig;

pub use domain::*;
pub use storage::*;

/// Main application state shared by every front end
pub struct AppState<S: KeyValueStore> {
    pub profile: ProfileStateManager<S>,
    pub notifications: NotificationCenter,
    pub scheduler: TaskScheduler<Notification>,
    pub delays: ActionDelays,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load profile state from `store` with default limits and delays
    pub fn new(store: S) -> Self {
        Self::with_settings(store, NotificationCenter::default(), ActionDelays::default())
    }

    pub fn with_settings(store: S, notifications: NotificationCenter, delays: ActionDelays) -> Self {
        Self {
            profile: ProfileStateManager::load(store),
            notifications,
            scheduler: TaskScheduler::new(),
            delays,
        }
    }

    /// Commit the profile dialog and show the matching toast.
    /// Returns `true` when the dialog closed.
    pub fn save_profile(&mut self) -> bool {
        match self.profile.commit_profile() {
            Ok(ack) => {
                self.notifications.push(save_notification(&ack));
                true
            }
            Err(e) => {
                self.notifications.push(edit_error_notification(&e));
                false
            }
        }
    }

    /// Commit the bank account dialog and show the matching toast.
    /// Returns `true` when the dialog closed.
    pub fn save_bank_account(&mut self) -> bool {
        match self.profile.commit_bank_account() {
            Ok(ack) => {
                self.notifications.push(save_notification(&ack));
                true
            }
            Err(e) => {
                self.notifications.push(edit_error_notification(&e));
                false
            }
        }
    }

    /// Show the action's toast now and schedule its follow-up, if any
    pub fn run_quick_action(&mut self, action: &QuickAction) -> Option<TaskId> {
        info!("Running quick action: {:?}", action);
        let plan = action.plan(&self.delays);
        self.notifications.push(plan.immediate);
        plan.follow_up
            .map(|(delay, notification)| self.scheduler.schedule(delay, notification))
    }

    /// Advance virtual time and show every follow-up that came due
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let fired = self.scheduler.advance(elapsed);
        let count = fired.len();
        for notification in fired {
            self.notifications.push(notification);
        }
        count
    }

    /// Drop pending follow-ups, e.g. when the hosting view is torn down
    pub fn shutdown(&mut self) -> usize {
        self.scheduler.cancel_all()
    }
}

/// Initialize the backend over the JSON-file store in the configured directory
pub fn initialize_backend(config: &PortalConfig) -> Result<AppState<JsonFileStore>> {
    info!("Setting up storage in {}", config.data_directory.display());
    let store = JsonFileStore::new(&config.data_directory)?;

    info!("Loading profile state");
    let app_state = AppState::with_settings(
        store,
        NotificationCenter::new(config.notification_limit),
        config.action_delays(),
    );

    Ok(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AccountType, Bank};
    use tempfile::TempDir;

    #[test]
    fn test_failed_save_shows_error_and_keeps_dialog_open() {
        let mut state = AppState::new(InMemoryStore::new());
        state.profile.open_profile_editor();
        state.profile.edit_profile(ContactEdit::Email("foo@bar".to_string()));

        assert!(!state.save_profile());

        let toast = state.notifications.latest().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.description, "Por favor ingresa un correo electrónico válido.");
        assert!(state.profile.profile_session().is_open());
    }

    #[test]
    fn test_bank_registration_then_update_toasts() {
        let mut state = AppState::new(InMemoryStore::new());

        state.profile.open_bank_editor();
        state.profile.edit_bank_account(BankAccountEdit::Bank(Some(Bank::Bice)));
        state.profile.edit_bank_account(BankAccountEdit::AccountType(Some(AccountType::Corriente)));
        state.profile.edit_bank_account(BankAccountEdit::AccountNumber("1".to_string()));
        assert!(state.save_bank_account());
        assert_eq!(state.notifications.latest().unwrap().title, "Cuenta bancaria registrada");

        state.profile.open_bank_editor();
        assert!(state.save_bank_account());
        assert_eq!(state.notifications.latest().unwrap().title, "Cuenta bancaria actualizada");
    }

    #[test]
    fn test_save_without_open_dialog_reports_error() {
        let mut state = AppState::new(InMemoryStore::new());
        assert!(!state.save_bank_account());
        assert!(state.notifications.latest().unwrap().is_error());
    }

    #[test]
    fn test_certificate_download_completes_after_delay() {
        let mut state = AppState::new(InMemoryStore::new());

        let task = state.run_quick_action(&QuickAction::DownloadCertificates);
        assert!(task.is_some());
        assert_eq!(state.notifications.latest().unwrap().title, "Descargando certificados");

        assert_eq!(state.tick(Duration::from_millis(1000)), 0);
        assert_eq!(state.tick(Duration::from_millis(500)), 1);
        assert_eq!(state.notifications.latest().unwrap().title, "Certificados listos");
    }

    #[test]
    fn test_shutdown_cancels_pending_follow_ups() {
        let mut state = AppState::new(InMemoryStore::new());
        state.run_quick_action(&QuickAction::ConfirmPayment {
            concept: "Seguro Estudiantil 2024".to_string(),
            amount: 25_000,
        });
        assert!(state.run_quick_action(&QuickAction::ChangePassword).is_none());

        assert_eq!(state.shutdown(), 1);
        assert_eq!(state.tick(Duration::from_secs(10)), 0);
        assert_eq!(state.notifications.latest().unwrap().title, "Cambiar contraseña");
    }

    #[test]
    fn test_initialize_backend_uses_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = PortalConfig {
            data_directory: temp_dir.path().join("portal"),
            notification_limit: 1,
            ..PortalConfig::default()
        };

        let mut state = initialize_backend(&config).unwrap();
        state.profile.open_profile_editor();
        state.profile.edit_profile(ContactEdit::Phone("+56 9 1111 2222".to_string()));
        assert!(state.save_profile());

        assert!(temp_dir.path().join("portal").join("studentProfile.json").exists());
        assert_eq!(state.notifications.len(), 1);
    }
}
