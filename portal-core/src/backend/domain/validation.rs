//! Validation rules for the two edit dialogs.
//!
//! A field counts as empty only when it holds no characters at all.
//! For the profile, the completion check runs before the email check, so a
//! form with an empty field always reports `IncompleteFields`.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::{BankAccount, ContactInfo};

use super::models::BankAccountDraft;

/// `local-part@domain.tld`: no whitespace or extra `@`, and a dot inside the domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// User-correctable problems with a draft. The messages are shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor completa todos los campos.")]
    IncompleteFields,
    #[error("Por favor ingresa un correo electrónico válido.")]
    InvalidEmail,
}

fn is_blank(value: &str) -> bool {
    value.is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a profile contact draft
pub fn validate_contact(draft: &ContactInfo) -> Result<(), ValidationError> {
    if is_blank(&draft.email) || is_blank(&draft.phone) || is_blank(&draft.address) {
        return Err(ValidationError::IncompleteFields);
    }

    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a bank account draft and turn it into a complete account
pub fn validate_bank_account(draft: &BankAccountDraft) -> Result<BankAccount, ValidationError> {
    match (draft.bank, draft.account_type) {
        (Some(bank), Some(account_type)) if !is_blank(&draft.account_number) => Ok(BankAccount {
            bank,
            account_type,
            account_number: draft.account_number.clone(),
        }),
        _ => Err(ValidationError::IncompleteFields),
    }
}
