pub mod bank_account_modal;
pub mod profile_modal;
pub mod quick_actions;
pub mod toast_list;

pub use bank_account_modal::BankAccountModal;
pub use profile_modal::ProfileModal;
pub use quick_actions::QuickActions;
pub use toast_list::ToastList;
