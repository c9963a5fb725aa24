use log::{error, info};
use shared::{BankAccount, ContactInfo, StudentProfile};

use super::edit_session::{EditError, EditSession};
use super::models::{BankAccountDraft, BankAccountEdit, ContactEdit};
use super::validation::{validate_bank_account, validate_contact};
use crate::backend::storage::repositories::{bank_account_repository, profile_repository};
use crate::backend::storage::traits::KeyValueStore;

/// Which record a save acknowledgement refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedRecord {
    Profile,
    BankAccount,
}

/// Whether a save created the record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Registered,
    Updated,
}

/// Returned by a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAcknowledgement {
    pub record: SavedRecord,
    pub outcome: SaveOutcome,
}

/// Owns the student's profile and bank account, keeps them in sync with the
/// store, and mediates the two edit dialogs.
pub struct ProfileStateManager<S: KeyValueStore> {
    store: S,
    profile: StudentProfile,
    bank_account: Option<BankAccount>,
    profile_session: EditSession<ContactInfo>,
    bank_session: EditSession<BankAccountDraft>,
}

impl<S: KeyValueStore> ProfileStateManager<S> {
    /// Load both records from `store`, falling back to defaults/absence
    pub fn load(store: S) -> Self {
        let profile = profile_repository::load(&store);
        let bank_account = bank_account_repository::load(&store);

        info!(
            "Profile state loaded (bank account registered: {})",
            bank_account.is_some()
        );

        Self {
            store,
            profile,
            bank_account,
            profile_session: EditSession::Closed,
            bank_session: EditSession::Closed,
        }
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub fn bank_account(&self) -> Option<&BankAccount> {
        self.bank_account.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Profile dialog

    pub fn profile_session(&self) -> &EditSession<ContactInfo> {
        &self.profile_session
    }

    /// Open the profile dialog with the committed contact fields as draft
    pub fn open_profile_editor(&mut self) {
        self.profile_session.open(self.profile.contact());
    }

    pub fn edit_profile(&mut self, edit: ContactEdit) -> bool {
        self.profile_session.edit(edit)
    }

    /// Validate the draft and, if it passes, make it the committed contact
    /// info and persist it. Profile saves always report `Updated`.
    pub fn commit_profile(&mut self) -> Result<SaveAcknowledgement, EditError> {
        let contact = self
            .profile_session
            .commit(|draft| validate_contact(draft).map(|_| draft.clone()))?;

        self.profile.apply_contact(contact);
        info!("Profile contact fields updated");
        self.persist_profile();

        Ok(SaveAcknowledgement {
            record: SavedRecord::Profile,
            outcome: SaveOutcome::Updated,
        })
    }

    pub fn discard_profile(&mut self) {
        if self.profile_session.discard().is_some() {
            info!("Profile edit discarded");
        }
    }

    // Bank account dialog

    pub fn bank_session(&self) -> &EditSession<BankAccountDraft> {
        &self.bank_session
    }

    /// Open the bank dialog with the registered account, or an empty form
    pub fn open_bank_editor(&mut self) {
        let initial = self
            .bank_account
            .as_ref()
            .map(BankAccountDraft::from)
            .unwrap_or_default();
        self.bank_session.open(initial);
    }

    pub fn edit_bank_account(&mut self, edit: BankAccountEdit) -> bool {
        self.bank_session.edit(edit)
    }

    /// Validate the draft and, if complete, replace the registered account
    pub fn commit_bank_account(&mut self) -> Result<SaveAcknowledgement, EditError> {
        let account = self.bank_session.commit(validate_bank_account)?;

        let outcome = if self.bank_account.is_some() {
            SaveOutcome::Updated
        } else {
            SaveOutcome::Registered
        };

        info!("Bank account {:?} at {}", outcome, account.bank);
        self.bank_account = Some(account);
        self.persist_bank_account();

        Ok(SaveAcknowledgement {
            record: SavedRecord::BankAccount,
            outcome,
        })
    }

    pub fn discard_bank_account(&mut self) {
        if self.bank_session.discard().is_some() {
            info!("Bank account edit discarded");
        }
    }

    /// Forget the registered bank account, in memory and in storage
    pub fn remove_bank_account(&mut self) -> bool {
        if self.bank_account.take().is_none() {
            return false;
        }
        self.bank_session.discard();
        if let Err(e) = bank_account_repository::clear(&self.store) {
            error!("{:#}", e);
        }
        info!("Bank account removed");
        true
    }

    // Write failures are logged and otherwise ignored

    fn persist_profile(&self) {
        if let Err(e) = profile_repository::save(&self.store, &self.profile) {
            error!("{:#}", e);
        }
    }

    fn persist_bank_account(&self) {
        if let Some(account) = &self.bank_account {
            if let Err(e) = bank_account_repository::save(&self.store, account) {
                error!("{:#}", e);
            }
        }
    }
}
