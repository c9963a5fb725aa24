pub mod drafts;

pub use drafts::{BankAccountDraft, BankAccountEdit, ContactEdit, Draft};
