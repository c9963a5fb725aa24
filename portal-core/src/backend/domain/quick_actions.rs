//! Simulated acknowledgements for actions that have no real backend.
//!
//! Each action produces an immediate toast and, for the simulated downloads
//! and payments, a follow-up toast after a fixed delay.

use shared::Notification;
use std::time::Duration;

/// Delays used for follow-up toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDelays {
    pub download: Duration,
    pub payment: Duration,
}

impl Default for ActionDelays {
    fn default() -> Self {
        Self {
            download: Duration::from_millis(1500),
            payment: Duration::from_millis(1000),
        }
    }
}

/// Actions offered from the profile, payment and scholarship pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAction {
    ChangePassword,
    UpdateContactInfo,
    NotificationSettings,
    DownloadCertificates,
    DownloadReceipt { receipt: String, concept: String },
    ConfirmPayment { concept: String, amount: u64 },
    DownloadScholarshipCertificate { scholarship: String },
    ViewRequestStatus { scholarship: String },
}

/// What an action shows now and what it shows later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPlan {
    pub immediate: Notification,
    pub follow_up: Option<(Duration, Notification)>,
}

impl QuickAction {
    pub fn plan(&self, delays: &ActionDelays) -> ActionPlan {
        match self {
            QuickAction::ChangePassword => ActionPlan {
                immediate: Notification::info(
                    "Cambiar contraseña",
                    "Redirigiendo al formulario de cambio de contraseña...",
                ),
                follow_up: None,
            },
            QuickAction::UpdateContactInfo => ActionPlan {
                immediate: Notification::info(
                    "Actualizar datos de contacto",
                    "Abre el formulario de edición de perfil para actualizar tus datos de contacto.",
                ),
                follow_up: None,
            },
            QuickAction::NotificationSettings => ActionPlan {
                immediate: Notification::info(
                    "Configuración de notificaciones",
                    "Redirigiendo a la configuración de notificaciones...",
                ),
                follow_up: None,
            },
            QuickAction::DownloadCertificates => ActionPlan {
                immediate: Notification::info(
                    "Descargando certificados",
                    "Se están preparando tus certificados para descargar...",
                ),
                follow_up: Some((
                    delays.download,
                    Notification::info(
                        "Certificados listos",
                        "Los certificados se han descargado correctamente.",
                    ),
                )),
            },
            QuickAction::DownloadReceipt { receipt, concept } => ActionPlan {
                immediate: Notification::info(
                    "Descargando boleta",
                    format!("Se está descargando la boleta {} para {}.", receipt, concept),
                ),
                follow_up: Some((
                    delays.download,
                    Notification::info(
                        "Boleta descargada",
                        format!("La boleta {} se ha descargado correctamente.", receipt),
                    ),
                )),
            },
            QuickAction::ConfirmPayment { concept, amount } => ActionPlan {
                immediate: Notification::info(
                    "Pago procesado",
                    format!(
                        "El pago de {} por {} ha sido procesado exitosamente.",
                        concept,
                        format_clp(*amount)
                    ),
                ),
                follow_up: Some((
                    delays.payment,
                    Notification::info(
                        "Pago confirmado",
                        "Recibirás un comprobante por correo electrónico.",
                    ),
                )),
            },
            QuickAction::DownloadScholarshipCertificate { scholarship } => ActionPlan {
                immediate: Notification::info(
                    "Descargando certificado",
                    format!("Se está descargando el certificado de {}.", scholarship),
                ),
                follow_up: Some((
                    delays.download,
                    Notification::info(
                        "Certificado descargado",
                        "El certificado se ha descargado correctamente.",
                    ),
                )),
            },
            QuickAction::ViewRequestStatus { scholarship } => ActionPlan {
                immediate: Notification::info(
                    "Estado de solicitud",
                    format!(
                        "La solicitud de {} está en proceso de revisión. Te notificaremos cuando haya actualizaciones.",
                        scholarship
                    ),
                ),
                follow_up: None,
            },
        }
    }
}

/// Format a peso amount the Chilean way: `$1.234.567`
pub fn format_clp(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clp_groups_thousands() {
        assert_eq!(format_clp(0), "$0");
        assert_eq!(format_clp(999), "$999");
        assert_eq!(format_clp(25_000), "$25.000");
        assert_eq!(format_clp(420_000), "$420.000");
        assert_eq!(format_clp(2_100_000), "$2.100.000");
    }

    #[test]
    fn test_redirect_actions_have_no_follow_up() {
        let delays = ActionDelays::default();
        for action in [
            QuickAction::ChangePassword,
            QuickAction::UpdateContactInfo,
            QuickAction::NotificationSettings,
            QuickAction::ViewRequestStatus {
                scholarship: "Beca Vocación de Profesor".to_string(),
            },
        ] {
            assert!(action.plan(&delays).follow_up.is_none());
        }
    }

    #[test]
    fn test_request_status_names_scholarship() {
        let plan = QuickAction::ViewRequestStatus {
            scholarship: "Beca Bicentenario".to_string(),
        }
        .plan(&ActionDelays::default());

        assert_eq!(plan.immediate.title, "Estado de solicitud");
        assert_eq!(
            plan.immediate.description,
            "La solicitud de Beca Bicentenario está en proceso de revisión. Te notificaremos cuando haya actualizaciones."
        );
    }

    #[test]
    fn test_receipt_download_mentions_receipt() {
        let plan = QuickAction::DownloadReceipt {
            receipt: "BOL-2024-09-00152".to_string(),
            concept: "Arancel - Cuota 2/10".to_string(),
        }
        .plan(&ActionDelays::default());

        assert_eq!(
            plan.immediate.description,
            "Se está descargando la boleta BOL-2024-09-00152 para Arancel - Cuota 2/10."
        );
        let (delay, follow_up) = plan.follow_up.unwrap();
        assert_eq!(delay, Duration::from_millis(1500));
        assert_eq!(follow_up.title, "Boleta descargada");
    }

    #[test]
    fn test_payment_uses_payment_delay_and_clp_amount() {
        let delays = ActionDelays {
            download: Duration::from_millis(1500),
            payment: Duration::from_millis(250),
        };
        let plan = QuickAction::ConfirmPayment {
            concept: "Matrícula Semestre 2024-1".to_string(),
            amount: 800_000,
        }
        .plan(&delays);

        assert!(plan.immediate.description.contains("$800.000"));
        assert_eq!(plan.follow_up.map(|(d, _)| d), Some(Duration::from_millis(250)));
    }
}
