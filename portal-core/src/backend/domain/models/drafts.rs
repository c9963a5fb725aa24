use serde::{Deserialize, Serialize};
use shared::{AccountType, Bank, BankAccount, ContactInfo};

/// An in-progress copy of an entity that can be changed one field at a time
pub trait Draft: Clone {
    /// A single-field change
    type Edit;

    fn apply(&mut self, edit: Self::Edit);
}

/// Single-field edits of the profile contact draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEdit {
    Email(String),
    Phone(String),
    Address(String),
}

impl Draft for ContactInfo {
    type Edit = ContactEdit;

    fn apply(&mut self, edit: ContactEdit) {
        match edit {
            ContactEdit::Email(email) => self.email = email,
            ContactEdit::Phone(phone) => self.phone = phone,
            ContactEdit::Address(address) => self.address = address,
        }
    }
}

/// Bank account form contents. `None` is an unselected option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDraft {
    pub bank: Option<Bank>,
    pub account_type: Option<AccountType>,
    pub account_number: String,
}

impl From<&BankAccount> for BankAccountDraft {
    fn from(account: &BankAccount) -> Self {
        Self {
            bank: Some(account.bank),
            account_type: Some(account.account_type),
            account_number: account.account_number.clone(),
        }
    }
}

/// Single-field edits of the bank account draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccountEdit {
    Bank(Option<Bank>),
    AccountType(Option<AccountType>),
    AccountNumber(String),
}

impl Draft for BankAccountDraft {
    type Edit = BankAccountEdit;

    fn apply(&mut self, edit: BankAccountEdit) {
        match edit {
            BankAccountEdit::Bank(bank) => self.bank = bank,
            BankAccountEdit::AccountType(account_type) => self.account_type = account_type,
            BankAccountEdit::AccountNumber(number) => self.account_number = number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_edits_touch_one_field() {
        let mut draft = ContactInfo::default();

        draft.apply(ContactEdit::Email("a@b.com".to_string()));
        draft.apply(ContactEdit::Address("Valparaíso".to_string()));

        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.address, "Valparaíso");
    }

    #[test]
    fn test_bank_draft_from_account_selects_options() {
        let account = BankAccount {
            bank: Bank::Ripley,
            account_type: AccountType::Vista,
            account_number: "987".to_string(),
        };

        let mut draft = BankAccountDraft::from(&account);
        assert_eq!(draft.bank, Some(Bank::Ripley));
        assert_eq!(draft.account_type, Some(AccountType::Vista));

        draft.apply(BankAccountEdit::Bank(None));
        assert_eq!(draft.bank, None);
        assert_eq!(draft.account_number, "987");
    }
}
