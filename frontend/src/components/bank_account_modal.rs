use shared::{AccountType, Bank};
use student_portal::backend::{BankAccountDraft, BankAccountEdit};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BankAccountModalProps {
    /// Current draft; `None` keeps the dialog closed
    pub draft: Option<BankAccountDraft>,
    /// Whether an account is already registered, for the dialog title
    pub registered: bool,
    pub on_edit: Callback<BankAccountEdit>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn selected_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[function_component(BankAccountModal)]
pub fn bank_account_modal(props: &BankAccountModalProps) -> Html {
    let Some(draft) = props.draft.as_ref() else {
        return html! {};
    };

    // The placeholder option has an empty value and parses to `None`
    let on_bank_change = props
        .on_edit
        .reform(|e: Event| BankAccountEdit::Bank(selected_value(&e).parse::<Bank>().ok()));

    let on_type_change = props.on_edit.reform(|e: Event| {
        BankAccountEdit::AccountType(selected_value(&e).parse::<AccountType>().ok())
    });

    let on_number_input = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        BankAccountEdit::AccountNumber(input.value())
    });

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let title = if props.registered {
        "Editar cuenta bancaria"
    } else {
        "Registrar cuenta bancaria"
    };

    html! {
        <div class="profile-modal-backdrop" onclick={on_backdrop_click}>
            <div class="profile-modal" onclick={on_modal_click}>
                <div class="profile-modal-content">
                    <h3 class="profile-title">{title}</h3>

                    <div class="profile-field">
                        <label class="profile-label" for="bank-name">{"Banco"}</label>
                        <select id="bank-name" class="form-input" onchange={on_bank_change}>
                            <option value="" selected={draft.bank.is_none()}>{"Selecciona un banco"}</option>
                            { for Bank::ALL.iter().map(|bank| html! {
                                <option value={bank.label()} selected={draft.bank == Some(*bank)}>
                                    {bank.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="profile-field">
                        <label class="profile-label" for="account-type">{"Tipo de cuenta"}</label>
                        <select id="account-type" class="form-input" onchange={on_type_change}>
                            <option value="" selected={draft.account_type.is_none()}>{"Selecciona el tipo de cuenta"}</option>
                            { for AccountType::ALL.iter().map(|kind| html! {
                                <option value={kind.label()} selected={draft.account_type == Some(*kind)}>
                                    {kind.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    <div class="profile-field">
                        <label class="profile-label" for="account-number">{"Número de cuenta"}</label>
                        <input
                            id="account-number"
                            type="text"
                            class="form-input"
                            placeholder="Ej: 12345678"
                            value={draft.account_number.clone()}
                            oninput={on_number_input}
                        />
                    </div>

                    <div class="profile-buttons">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                        >
                            {"Cancelar"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            onclick={props.on_save.reform(|_: MouseEvent| ())}
                        >
                            {"Guardar"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
