//! # Domain Module
//!
//! Business rules for the student's profile and bank account, independent of
//! any UI framework or storage backend.
//!
//! ## Module Organization
//!
//! - **models**: draft types and their single-field edits
//! - **validation**: completion and email rules for both dialogs
//! - **edit_session**: the open/edit/commit/discard protocol
//! - **profile_state**: the Profile State Manager owning both records
//! - **notifications**: toast copy and the visible toast queue
//! - **scheduler**: virtual-time delayed completions
//! - **quick_actions**: simulated acknowledgements (downloads, payments)
//!
//! ## Business Rules
//!
//! - Only the contact fields of a profile can change
//! - A bank account is replaced wholesale, never patched
//! - Rejected commits leave committed state untouched and the dialog open
//! - Every successful commit is persisted exactly once

pub mod edit_session;
pub mod models;
pub mod notifications;
pub mod profile_state;
pub mod quick_actions;
pub mod scheduler;
pub mod validation;

pub use edit_session::*;
pub use models::*;
pub use notifications::*;
pub use profile_state::*;
pub use quick_actions::*;
pub use scheduler::*;
pub use validation::*;
