use shared::Notification;
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(ToastList)]
pub fn toast_list(props: &ToastListProps) -> Html {
    html! {
        <div class="toast-list" role="status">
            { for props.notifications.iter().map(|toast| {
                let id = toast.id;
                let class = if toast.is_error() { "toast toast-error" } else { "toast" };
                html! {
                    <div key={id.to_string()} class={class}>
                        <div class="toast-title">{&toast.title}</div>
                        <div class="toast-description">{&toast.description}</div>
                        <button
                            type="button"
                            class="toast-close"
                            onclick={props.on_dismiss.reform(move |_: MouseEvent| id)}
                        >
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
