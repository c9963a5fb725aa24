//! Two-phase edit protocol shared by the profile and bank account dialogs.
//!
//! A session is either closed or open with a draft. Opening copies the
//! committed value into the draft; edits only ever touch the draft; the caller
//! decides whether a draft becomes the committed value.

use super::models::Draft;
use super::validation::ValidationError;

/// Why a commit did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("No edit dialog is open")]
    NotEditing,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Dialog state for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession<T> {
    Closed,
    Open { draft: T },
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        EditSession::Closed
    }
}

impl<T: Draft> EditSession<T> {
    /// Open (or restart) the session with `initial` as the draft
    pub fn open(&mut self, initial: T) {
        *self = EditSession::Open { draft: initial };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            EditSession::Open { draft } => Some(draft),
            EditSession::Closed => None,
        }
    }

    /// Apply a single-field change to the draft. Returns `false` when closed.
    pub fn edit(&mut self, edit: T::Edit) -> bool {
        match self {
            EditSession::Open { draft } => {
                draft.apply(edit);
                true
            }
            EditSession::Closed => false,
        }
    }

    /// Run `validate` on the draft; on success close the session and return
    /// its output. On failure the session stays open with the draft intact.
    pub fn commit<R, F>(&mut self, validate: F) -> Result<R, EditError>
    where
        F: FnOnce(&T) -> Result<R, ValidationError>,
    {
        let draft = self.draft().ok_or(EditError::NotEditing)?;
        let committed = validate(draft)?;
        *self = EditSession::Closed;
        Ok(committed)
    }

    /// Close the session and abandon the draft
    pub fn discard(&mut self) -> Option<T> {
        match std::mem::take(self) {
            EditSession::Open { draft } => Some(draft),
            EditSession::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::ContactEdit;
    use crate::backend::domain::validation::validate_contact;
    use shared::ContactInfo;

    fn valid_contact() -> ContactInfo {
        ContactInfo {
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
            address: "X".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_closed() {
        let session: EditSession<ContactInfo> = EditSession::default();
        assert!(!session.is_open());
        assert_eq!(session.draft(), None);
    }

    #[test]
    fn test_edit_while_closed_is_ignored() {
        let mut session: EditSession<ContactInfo> = EditSession::default();
        assert!(!session.edit(ContactEdit::Email("x".to_string())));
        assert_eq!(session, EditSession::Closed);
    }

    #[test]
    fn test_successful_commit_closes_session() {
        let mut session = EditSession::default();
        session.open(valid_contact());

        let committed = session
            .commit(|draft| validate_contact(draft).map(|_| draft.clone()))
            .unwrap();

        assert_eq!(committed, valid_contact());
        assert!(!session.is_open());
    }

    #[test]
    fn test_failed_commit_keeps_draft() {
        let mut session = EditSession::default();
        session.open(valid_contact());
        session.edit(ContactEdit::Email("foo".to_string()));

        let result = session.commit(|draft| validate_contact(draft).map(|_| draft.clone()));

        assert_eq!(result, Err(EditError::Validation(ValidationError::InvalidEmail)));
        assert_eq!(session.draft().map(|d| d.email.as_str()), Some("foo"));
    }

    #[test]
    fn test_commit_while_closed_fails() {
        let mut session: EditSession<ContactInfo> = EditSession::default();
        let result = session.commit(|draft| Ok(draft.clone()));
        assert_eq!(result, Err(EditError::NotEditing));
    }

    #[test]
    fn test_reopen_restarts_from_new_initial_value() {
        let mut session = EditSession::default();
        session.open(valid_contact());
        session.edit(ContactEdit::Phone("999".to_string()));

        session.open(valid_contact());

        assert_eq!(session.draft(), Some(&valid_contact()));
    }

    #[test]
    fn test_discard_returns_abandoned_draft() {
        let mut session = EditSession::default();
        session.open(valid_contact());

        assert_eq!(session.discard(), Some(valid_contact()));
        assert_eq!(session.discard(), None);
        assert!(!session.is_open());
    }
}
