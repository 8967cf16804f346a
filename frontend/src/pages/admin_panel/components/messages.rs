use crate::{
    components::layout::{ErrorMessage, InfoMessage, SuccessMessage},
    pages::admin_panel::utils::MessageState,
};
use leptos::*;

#[component]
pub fn PanelMessages(messages: RwSignal<MessageState>) -> impl IntoView {
    view! {
        <div aria-live="polite">
            <Show when=move || messages.get().error.is_some()>
                <ErrorMessage message={messages.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message={messages.get().success.unwrap_or_default()} />
            </Show>
            <Show when=move || messages.get().info.is_some()>
                <InfoMessage message={messages.get().info.unwrap_or_default()} />
            </Show>
        </div>
    }
}
