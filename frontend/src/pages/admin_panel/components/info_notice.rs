use crate::pages::admin_panel::utils::{info_bullets, Role};
use leptos::*;

#[component]
pub fn InfoNotice(role: Role) -> impl IntoView {
    view! {
        <div class="bg-status-info-bg border border-status-info-border rounded-lg p-4">
            <h3 class="text-sm font-semibold text-status-info-text">{"About administrators"}</h3>
            <ul class="mt-2 list-disc list-inside text-sm text-status-info-text space-y-1">
                {info_bullets(role)
                    .into_iter()
                    .map(|bullet| view! { <li>{bullet}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
