use crate::components::layout::LoadingSpinner;
use leptos::*;

#[component]
pub fn CheckingPermissions() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <LoadingSpinner label="Checking permissions..." />
        </div>
    }
}

#[component]
pub fn AccessDeniedMessage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-2">
                <h1 class="text-xl font-semibold text-fg">{"Access denied"}</h1>
                <p class="text-sm text-fg">
                    {"You do not have permission to access this page. Only administrators can view the administrator list."}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn AdminPanelFrame(is_super_admin: bool, children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <div class="flex items-center gap-3">
                    <h1 class="text-2xl font-bold text-fg">{"Administrator management"}</h1>
                    <Show when=move || is_super_admin>
                        <span class="text-xs font-semibold px-2 py-1 rounded bg-status-warning-bg text-status-warning-text">
                            {"SUPERADMIN"}
                        </span>
                    </Show>
                </div>
                <p class="mt-1 text-sm text-fg-muted">
                    {if is_super_admin {
                        "Review, add and remove forum administrators."
                    } else {
                        "Review the current forum administrators."
                    }}
                </p>
            </div>
            {children()}
        </div>
    }
}
