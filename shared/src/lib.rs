use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Storage key under which the student's contact fields are persisted
pub const PROFILE_STORAGE_KEY: &str = "studentProfile";

/// Storage key under which the registered bank account is persisted
pub const BANK_ACCOUNT_STORAGE_KEY: &str = "bankAccount";

/// Full student profile as displayed on the "Mi Perfil" page.
///
/// Only the contact fields (`email`, `phone`, `address`) change after
/// construction; every other field is a fixed academic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    /// Chilean national ID, read-only
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub career: String,
    pub enrollment: String,
    pub admission_year: String,
    pub current_semester: String,
    /// Academic standing, e.g. "Regular"
    pub status: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "María José González Pérez".to_string(),
            rut: "20.420.676-0".to_string(),
            email: "maria.gonzalez@sansano.usm.cl".to_string(),
            phone: "+56 9 8765 4321".to_string(),
            address: "Rancagua, Chile".to_string(),
            career: "Ingeniería Civil Informática".to_string(),
            enrollment: "202001234".to_string(),
            admission_year: "2020".to_string(),
            current_semester: "12".to_string(),
            status: "Regular".to_string(),
        }
    }
}

impl StudentProfile {
    /// The mutable contact fields of this profile
    pub fn contact(&self) -> ContactInfo {
        ContactInfo {
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Replace the contact fields, leaving the academic record untouched
    pub fn apply_contact(&mut self, contact: ContactInfo) {
        self.email = contact.email;
        self.phone = contact.phone;
        self.address = contact.address;
    }
}

/// The editable subset of a profile. This is exactly what gets persisted
/// under [`PROFILE_STORAGE_KEY`], and it doubles as the profile edit draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A registered bank account, persisted under [`BANK_ACCOUNT_STORAGE_KEY`].
/// Replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank: Bank,
    pub account_type: AccountType,
    pub account_number: String,
}

/// Error returned when a label does not name one of the fixed options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Chilean financial institutions accepted for payment deposits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    #[serde(rename = "Banco de Chile")]
    BancoDeChile,
    #[serde(rename = "Banco Internacional")]
    BancoInternacional,
    #[serde(rename = "Banco del Estado de Chile (BancoEstado)")]
    BancoEstado,
    #[serde(rename = "Scotiabank Sud Americano")]
    Scotiabank,
    #[serde(rename = "Banco de Crédito e Inversiones (BCI)")]
    Bci,
    #[serde(rename = "Banco Do Brasil S.A.")]
    BancoDoBrasil,
    #[serde(rename = "Corpbanca (Banco Itaú Chile)")]
    Corpbanca,
    #[serde(rename = "Banco BICE")]
    Bice,
    #[serde(rename = "HSBC Bank (Chile)")]
    Hsbc,
    #[serde(rename = "Banco Santander-Chile")]
    Santander,
    #[serde(rename = "Banco Itaú Chile")]
    Itau,
    #[serde(rename = "JP Morgan Chase Bank, N.A.")]
    JpMorganChase,
    #[serde(rename = "Banco Security")]
    Security,
    #[serde(rename = "Banco Falabella")]
    Falabella,
    #[serde(rename = "Banco BTG Pactual Chile")]
    BtgPactual,
    #[serde(rename = "Banco Consorcio")]
    Consorcio,
    #[serde(rename = "Banco Ripley")]
    Ripley,
    #[serde(rename = "ABCdin Banco")]
    AbcDin,
}

impl Bank {
    /// Every bank, in the order they are offered in the select box
    pub const ALL: [Bank; 18] = [
        Bank::BancoDeChile,
        Bank::BancoInternacional,
        Bank::BancoEstado,
        Bank::Scotiabank,
        Bank::Bci,
        Bank::BancoDoBrasil,
        Bank::Corpbanca,
        Bank::Bice,
        Bank::Hsbc,
        Bank::Santander,
        Bank::Itau,
        Bank::JpMorganChase,
        Bank::Security,
        Bank::Falabella,
        Bank::BtgPactual,
        Bank::Consorcio,
        Bank::Ripley,
        Bank::AbcDin,
    ];

    /// Display label, identical to the persisted value
    pub fn label(&self) -> &'static str {
        match self {
            Bank::BancoDeChile => "Banco de Chile",
            Bank::BancoInternacional => "Banco Internacional",
            Bank::BancoEstado => "Banco del Estado de Chile (BancoEstado)",
            Bank::Scotiabank => "Scotiabank Sud Americano",
            Bank::Bci => "Banco de Crédito e Inversiones (BCI)",
            Bank::BancoDoBrasil => "Banco Do Brasil S.A.",
            Bank::Corpbanca => "Corpbanca (Banco Itaú Chile)",
            Bank::Bice => "Banco BICE",
            Bank::Hsbc => "HSBC Bank (Chile)",
            Bank::Santander => "Banco Santander-Chile",
            Bank::Itau => "Banco Itaú Chile",
            Bank::JpMorganChase => "JP Morgan Chase Bank, N.A.",
            Bank::Security => "Banco Security",
            Bank::Falabella => "Banco Falabella",
            Bank::BtgPactual => "Banco BTG Pactual Chile",
            Bank::Consorcio => "Banco Consorcio",
            Bank::Ripley => "Banco Ripley",
            Bank::AbcDin => "ABCdin Banco",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Bank {
    type Err = UnknownOptionError;

    /// Matches a label exactly, ignoring surrounding whitespace and case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Bank::ALL
            .iter()
            .copied()
            .find(|bank| bank.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOptionError {
                kind: "bank",
                value: s.to_string(),
            })
    }
}

/// Kinds of account a deposit can be made into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "Cuenta Corriente")]
    Corriente,
    #[serde(rename = "Cuenta RUT")]
    Rut,
    #[serde(rename = "Cuenta Vista")]
    Vista,
    #[serde(rename = "Cuenta de Ahorros")]
    Ahorros,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Corriente,
        AccountType::Rut,
        AccountType::Vista,
        AccountType::Ahorros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Corriente => "Cuenta Corriente",
            AccountType::Rut => "Cuenta RUT",
            AccountType::Vista => "Cuenta Vista",
            AccountType::Ahorros => "Cuenta de Ahorros",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountType {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AccountType::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOptionError {
                kind: "account type",
                value: s.to_string(),
            })
    }
}

/// Visual style of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Errors the user has to act on
    Destructive,
}

/// A transient toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_account_uses_camel_case_keys() {
        let account = BankAccount {
            bank: Bank::BancoEstado,
            account_type: AccountType::Rut,
            account_number: "12345678".to_string(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["bank"], "Banco del Estado de Chile (BancoEstado)");
        assert_eq!(json["accountType"], "Cuenta RUT");
        assert_eq!(json["accountNumber"], "12345678");
    }

    #[test]
    fn test_bank_labels_match_serialized_names() {
        for bank in Bank::ALL {
            let json = serde_json::to_string(&bank).unwrap();
            assert_eq!(json, format!("\"{}\"", bank.label()));
        }
        for kind in AccountType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn test_parse_options_from_labels() {
        assert_eq!("Banco Falabella".parse::<Bank>().unwrap(), Bank::Falabella);
        assert_eq!("  banco bice ".parse::<Bank>().unwrap(), Bank::Bice);
        assert_eq!("Cuenta Vista".parse::<AccountType>().unwrap(), AccountType::Vista);

        let err = "Banco Inventado".parse::<Bank>().unwrap_err();
        assert_eq!(err.to_string(), "unknown bank: 'Banco Inventado'");
        assert!("".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_unknown_option_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(
            "Cuenta Dorada".parse::<AccountType>().unwrap_err(),
        );
        assert_eq!(err.to_string(), "unknown account type: 'Cuenta Dorada'");
    }

    #[test]
    fn test_contact_round_trips_through_profile() {
        let mut profile = StudentProfile::default();
        let contact = ContactInfo {
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
            address: "X".to_string(),
        };

        profile.apply_contact(contact.clone());

        assert_eq!(profile.contact(), contact);
        assert_eq!(profile.rut, "20.420.676-0");
        assert_eq!(profile.name, "María José González Pérez");
    }

    #[test]
    fn test_error_notification_is_destructive() {
        let notification = Notification::error("Por favor completa todos los campos.");
        assert!(notification.is_error());
        assert_eq!(notification.title, "Error");
        assert!(!Notification::info("Perfil actualizado", "").is_error());
    }
}
