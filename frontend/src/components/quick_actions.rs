use student_portal::backend::QuickAction;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuickActionsProps {
    pub on_action: Callback<QuickAction>,
}

fn action_buttons() -> Vec<(&'static str, QuickAction)> {
    vec![
        ("Cambiar contraseña", QuickAction::ChangePassword),
        ("Actualizar datos de contacto", QuickAction::UpdateContactInfo),
        ("Configurar notificaciones", QuickAction::NotificationSettings),
        ("Descargar certificados", QuickAction::DownloadCertificates),
    ]
}

#[function_component(QuickActions)]
pub fn quick_actions(props: &QuickActionsProps) -> Html {
    html! {
        <div class="quick-actions">
            <h4 class="section-title">{"Acciones rápidas"}</h4>
            { for action_buttons().into_iter().map(|(label, action)| html! {
                <button
                    type="button"
                    class="btn btn-outline"
                    onclick={props.on_action.reform(move |_: MouseEvent| action.clone())}
                >
                    {label}
                </button>
            }) }
        </div>
    }
}
