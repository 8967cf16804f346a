use leptos::{ev, *};

#[component]
pub fn AddAdminForm(
    input: RwSignal<String>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{"Add administrator"}</h2>
                <p class="text-sm text-fg-muted">
                    {"Enter the UID of the user to promote. The user must already be registered on the platform."}
                </p>
            </div>
            <form class="flex flex-col gap-3 md:flex-row" on:submit=submit>
                <input
                    class="flex-1 border rounded px-2 py-1 font-mono"
                    placeholder="User UID"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Adding..." } else { "Add" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn add_form_renders_registration_hint() {
        let html = render_to_string(move || {
            view! {
                <AddAdminForm
                    input=create_rw_signal("u9".to_string())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_: ()| {})
                />
            }
        });
        assert!(html.contains("Add administrator"));
        assert!(html.contains("must already be registered"));
    }
}
