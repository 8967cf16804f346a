use crate::pages::admin_panel::utils::Role;
use leptos::*;

#[component]
pub fn CopyButton(
    identity: String,
    copied: Signal<bool>,
    on_copy: Callback<String>,
) -> impl IntoView {
    let on_click = move |_| on_copy.call(identity.clone());
    view! {
        <button
            type="button"
            class="text-xs px-2 py-1 rounded border border-border text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
            on:click=on_click
        >
            {move || if copied.get() { "Copied" } else { "Copy" }}
        </button>
    }
}

/// The caller's own identity, with role-specific copy.
#[component]
pub fn IdentityCard(
    identity: String,
    role: Role,
    copied: Signal<bool>,
    on_copy: Callback<String>,
) -> impl IntoView {
    let description = if role.is_super_admin() {
        "As a super-admin you can add and remove administrators. Share this UID only with people you trust."
    } else {
        "Share this UID with a super-admin if someone needs to verify your administrator access."
    };
    let display = identity.clone();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-2">
            <h2 class="text-lg font-medium text-fg">{"Your UID"}</h2>
            <div class="flex items-center gap-3">
                <code class="text-sm font-mono text-fg break-all">{display}</code>
                <CopyButton identity=identity copied=copied on_copy=on_copy />
            </div>
            <p class="text-sm text-fg-muted">{description}</p>
        </div>
    }
}
