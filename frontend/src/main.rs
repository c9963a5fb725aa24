use log::LevelFilter;
use shared::{BankAccount, StudentProfile};
use student_portal::backend::QuickAction;
use web_sys::MouseEvent;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{BankAccountModal, ProfileModal, QuickActions, ToastList};
use hooks::use_portal;

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    profile: StudentProfile,
    on_edit: Callback<()>,
}

#[function_component(ProfileCard)]
fn profile_card(props: &ProfileCardProps) -> Html {
    let p = &props.profile;
    let row = |label: &'static str, value: String| {
        html! {
            <div class="profile-field">
                <span class="profile-label">{label}</span>
                <span class="profile-value">{value}</span>
            </div>
        }
    };

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{&p.name}</h2>
                <span class="badge">{&p.status}</span>
            </div>
            {row("RUT", p.rut.clone())}
            {row("Carrera", p.career.clone())}
            {row("Matrícula", p.enrollment.clone())}
            {row("Año de ingreso", p.admission_year.to_string())}
            {row("Semestre actual", p.current_semester.to_string())}
            {row("Correo electrónico", p.email.clone())}
            {row("Teléfono", p.phone.clone())}
            {row("Dirección", p.address.clone())}
            <button
                type="button"
                class="btn btn-primary"
                onclick={props.on_edit.reform(|_: MouseEvent| ())}
            >
                {"Editar perfil"}
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BankAccountCardProps {
    account: Option<BankAccount>,
    on_edit: Callback<()>,
}

#[function_component(BankAccountCard)]
fn bank_account_card(props: &BankAccountCardProps) -> Html {
    let on_edit = props.on_edit.reform(|_: MouseEvent| ());

    html! {
        <section class="card">
            <h3 class="section-title">{"Cuenta bancaria"}</h3>
            {match &props.account {
                Some(account) => html! {
                    <>
                        <div class="profile-field">
                            <span class="profile-label">{"Banco"}</span>
                            <span class="profile-value">{account.bank.label()}</span>
                        </div>
                        <div class="profile-field">
                            <span class="profile-label">{"Tipo de cuenta"}</span>
                            <span class="profile-value">{account.account_type.label()}</span>
                        </div>
                        <div class="profile-field">
                            <span class="profile-label">{"Número de cuenta"}</span>
                            <span class="profile-value">{&account.account_number}</span>
                        </div>
                        <button type="button" class="btn btn-outline" onclick={on_edit}>
                            {"Editar cuenta"}
                        </button>
                    </>
                },
                None => html! {
                    <>
                        <p class="muted">{"No tienes una cuenta bancaria registrada."}</p>
                        <button type="button" class="btn btn-primary" onclick={on_edit}>
                            {"Registrar cuenta bancaria"}
                        </button>
                    </>
                },
            }}
        </section>
    }
}

/// Pending charges and scholarships shown under the profile
fn account_actions() -> Vec<(&'static str, QuickAction)> {
    vec![
        (
            "Pagar Seguro Estudiantil 2024",
            QuickAction::ConfirmPayment {
                concept: "Seguro Estudiantil 2024".to_string(),
                amount: 25_000,
            },
        ),
        (
            "Descargar boleta BOL-2024-09-00152",
            QuickAction::DownloadReceipt {
                receipt: "BOL-2024-09-00152".to_string(),
                concept: "Arancel - Cuota 2/10".to_string(),
            },
        ),
        (
            "Certificado Beca Excelencia Académica",
            QuickAction::DownloadScholarshipCertificate {
                scholarship: "Beca Excelencia Académica".to_string(),
            },
        ),
        (
            "Estado solicitud Beca Alimentación",
            QuickAction::ViewRequestStatus {
                scholarship: "Beca de Alimentación (BAES)".to_string(),
            },
        ),
    ]
}

#[function_component(App)]
fn app() -> Html {
    let portal = use_portal();

    let (profile, account, contact_draft, bank_draft, notifications) = portal.with(|state| {
        (
            state.profile.profile().clone(),
            state.profile.bank_account().cloned(),
            state.profile.profile_session().draft().cloned(),
            state.profile.bank_session().draft().cloned(),
            state.notifications.iter().cloned().collect::<Vec<_>>(),
        )
    });

    let open_profile = portal.callback(|state, ()| state.profile.open_profile_editor());
    let edit_profile = portal.callback(|state, edit| {
        state.profile.edit_profile(edit);
    });
    let save_profile = portal.callback(|state, ()| {
        state.save_profile();
    });
    let cancel_profile = portal.callback(|state, ()| state.profile.discard_profile());

    let open_bank = portal.callback(|state, ()| state.profile.open_bank_editor());
    let edit_bank = portal.callback(|state, edit| {
        state.profile.edit_bank_account(edit);
    });
    let save_bank = portal.callback(|state, ()| {
        state.save_bank_account();
    });
    let cancel_bank = portal.callback(|state, ()| state.profile.discard_bank_account());

    let run_action = portal.callback(|state, action: QuickAction| {
        state.run_quick_action(&action);
    });
    let dismiss = portal.callback(|state, id| {
        state.notifications.dismiss(id);
    });

    html! {
        <main class="portal">
            <h1>{"Mi perfil"}</h1>
            <ProfileCard profile={profile} on_edit={open_profile} />
            <BankAccountCard account={account.clone()} on_edit={open_bank} />
            <QuickActions on_action={run_action.clone()} />

            <section class="card">
                <h4 class="section-title">{"Pagos y becas"}</h4>
                { for account_actions().into_iter().map(|(label, action)| html! {
                    <button
                        type="button"
                        class="btn btn-outline"
                        onclick={run_action.reform(move |_: MouseEvent| action.clone())}
                    >
                        {label}
                    </button>
                }) }
            </section>

            <ProfileModal
                draft={contact_draft}
                on_edit={edit_profile}
                on_save={save_profile}
                on_cancel={cancel_profile}
            />
            <BankAccountModal
                draft={bank_draft}
                registered={account.is_some()}
                on_edit={edit_bank}
                on_save={save_bank}
                on_cancel={cancel_bank}
            />
            <ToastList notifications={notifications} on_dismiss={dismiss} />
        </main>
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
