//! Toast notifications: the user-facing copy for every outcome, and the
//! bounded queue of toasts currently on screen.

use log::debug;
use shared::Notification;
use std::collections::VecDeque;
use uuid::Uuid;

use super::edit_session::EditError;
use super::profile_state::{SaveAcknowledgement, SaveOutcome, SavedRecord};

/// Default number of toasts kept on screen at once
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 3;

/// Success toast for a save
pub fn save_notification(ack: &SaveAcknowledgement) -> Notification {
    match (ack.record, ack.outcome) {
        (SavedRecord::Profile, _) => Notification::info(
            "Perfil actualizado",
            "Tus datos de contacto se han actualizado correctamente.",
        ),
        (SavedRecord::BankAccount, SaveOutcome::Registered) => Notification::info(
            "Cuenta bancaria registrada",
            "Los cambios se han guardado correctamente.",
        ),
        (SavedRecord::BankAccount, SaveOutcome::Updated) => Notification::info(
            "Cuenta bancaria actualizada",
            "Los cambios se han guardado correctamente.",
        ),
    }
}

/// Destructive toast for a rejected commit
pub fn edit_error_notification(err: &EditError) -> Notification {
    match err {
        EditError::Validation(validation) => Notification::error(validation.to_string()),
        EditError::NotEditing => Notification::error("No hay cambios pendientes para guardar."),
    }
}

/// The queue of visible toasts, newest last
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    limit: usize,
    visible: VecDeque<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_LIMIT)
    }
}

impl NotificationCenter {
    /// A limit of zero is treated as one
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            visible: VecDeque::new(),
        }
    }

    /// Show a toast, dropping the oldest ones beyond the limit
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        debug!("Notification: {} - {}", notification.title, notification.description);
        self.visible.push_back(notification);
        while self.visible.len() > self.limit {
            self.visible.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.visible.back()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
