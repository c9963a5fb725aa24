//! `portal-profile`: inspect and edit the student's profile and bank account
//! stored in the portal data directory.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::info;
use shared::{AccountType, Bank};
use std::path::PathBuf;

use student_portal::backend::{BankAccountEdit, ContactEdit, JsonFileStore};
use student_portal::{initialize_backend, AppState, PortalConfig};

#[derive(Debug, Parser)]
#[command(name = "portal-profile", version, about = "Student portal profile tools")]
struct Cli {
    /// Data directory (defaults to $STUDENT_PORTAL_DATA_DIR or ~/Documents/Portal Estudiantil)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the profile and the registered bank account
    Show,
    /// Update contact fields; omitted fields keep their current value
    EditContact {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Register or replace the bank account
    RegisterBank {
        /// Bank name, e.g. "Banco de Chile"
        #[arg(long)]
        bank: Bank,
        /// Account type, e.g. "Cuenta RUT"
        #[arg(long)]
        account_type: AccountType,
        #[arg(long)]
        account_number: String,
    },
    /// Forget the registered bank account
    RemoveBank,
    /// List the accepted banks
    Banks,
    /// List the accepted account types
    AccountTypes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PortalConfig::load(cli.data_dir.clone())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    info!("Using data directory {}", config.data_directory.display());

    match cli.command {
        Command::Banks => {
            for bank in Bank::ALL {
                println!("{}", bank);
            }
            Ok(())
        }
        Command::AccountTypes => {
            for kind in AccountType::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
        command => {
            let mut state = initialize_backend(&config)?;
            run(&mut state, command)
        }
    }
}

fn run(state: &mut AppState<JsonFileStore>, command: Command) -> Result<()> {
    match command {
        Command::Show => {
            print_state(state);
            Ok(())
        }
        Command::EditContact {
            email,
            phone,
            address,
        } => {
            state.profile.open_profile_editor();
            if let Some(email) = email {
                state.profile.edit_profile(ContactEdit::Email(email));
            }
            if let Some(phone) = phone {
                state.profile.edit_profile(ContactEdit::Phone(phone));
            }
            if let Some(address) = address {
                state.profile.edit_profile(ContactEdit::Address(address));
            }
            let saved = state.save_profile();
            finish(state, saved)
        }
        Command::RegisterBank {
            bank,
            account_type,
            account_number,
        } => {
            state.profile.open_bank_editor();
            state.profile.edit_bank_account(BankAccountEdit::Bank(Some(bank)));
            state
                .profile
                .edit_bank_account(BankAccountEdit::AccountType(Some(account_type)));
            state
                .profile
                .edit_bank_account(BankAccountEdit::AccountNumber(account_number));
            let saved = state.save_bank_account();
            finish(state, saved)
        }
        Command::RemoveBank => {
            if state.profile.remove_bank_account() {
                println!("Cuenta bancaria eliminada");
            } else {
                println!("No hay cuenta bancaria registrada");
            }
            Ok(())
        }
        Command::Banks | Command::AccountTypes => Ok(()),
    }
}

/// Print the toast a save produced; a rejected save becomes the error
fn finish(state: &AppState<JsonFileStore>, saved: bool) -> Result<()> {
    let toast = state
        .notifications
        .latest()
        .ok_or_else(|| anyhow!("save produced no notification"))?;
    if saved {
        println!("{}: {}", toast.title, toast.description);
        Ok(())
    } else {
        Err(anyhow!("{}", toast.description))
    }
}

fn print_state(state: &AppState<JsonFileStore>) {
    let profile = state.profile.profile();
    println!("{} (RUT {})", profile.name, profile.rut);
    println!(
        "  {} · Semestre {} · {}",
        profile.career, profile.current_semester, profile.status
    );
    println!("  Matrícula {} · Ingreso {}", profile.enrollment, profile.admission_year);
    println!("  Correo:    {}", profile.email);
    println!("  Teléfono:  {}", profile.phone);
    println!("  Dirección: {}", profile.address);

    match state.profile.bank_account() {
        Some(account) => {
            println!("Cuenta bancaria");
            println!("  Banco:  {}", account.bank);
            println!("  Tipo:   {}", account.account_type);
            println!("  Número: {}", account.account_number);
        }
        None => println!("No hay cuenta bancaria registrada"),
    }
}
