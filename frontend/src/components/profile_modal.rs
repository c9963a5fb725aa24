use shared::ContactInfo;
use student_portal::backend::ContactEdit;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    /// Current draft; `None` keeps the dialog closed
    pub draft: Option<ContactInfo>,
    pub on_edit: Callback<ContactEdit>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    let Some(draft) = props.draft.as_ref() else {
        return html! {};
    };

    let field_input = |make: fn(String) -> ContactEdit| {
        props.on_edit.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            make(input.value())
        })
    };

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

    html! {
        <div class="profile-modal-backdrop" onclick={on_backdrop_click}>
            <div class="profile-modal" onclick={on_modal_click}>
                <div class="profile-modal-content">
                    <h3 class="profile-title">{"Editar datos de contacto"}</h3>

                    <div class="profile-field">
                        <label class="profile-label" for="contact-email">{"Correo electrónico"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            class="form-input"
                            value={draft.email.clone()}
                            oninput={field_input(ContactEdit::Email)}
                        />
                    </div>

                    <div class="profile-field">
                        <label class="profile-label" for="contact-phone">{"Teléfono"}</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            class="form-input"
                            value={draft.phone.clone()}
                            oninput={field_input(ContactEdit::Phone)}
                        />
                    </div>

                    <div class="profile-field">
                        <label class="profile-label" for="contact-address">{"Dirección"}</label>
                        <input
                            id="contact-address"
                            type="text"
                            class="form-input"
                            value={draft.address.clone()}
                            oninput={field_input(ContactEdit::Address)}
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
                            {"Guardar cambios"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
