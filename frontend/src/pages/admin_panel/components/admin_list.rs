use crate::{
    api::AdminRecord,
    components::layout::ErrorMessage,
    pages::admin_panel::{components::identity_card::CopyButton, utils::format_added_date},
};
use leptos::*;

#[component]
pub fn AdminList(
    admins: Signal<Vec<AdminRecord>>,
    load_error: Signal<Option<String>>,
    can_mutate: Signal<bool>,
    self_identity: Option<String>,
    copied: Callback<String, bool>,
    pending: Signal<bool>,
    on_copy: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{"Administrators"}</h2>
                <p class="text-sm text-fg-muted">
                    {move || format!("{} registered", admins.get().len())}
                </p>
            </div>

            <Show when=move || load_error.get().is_some()>
                <ErrorMessage message={load_error.get().unwrap_or_default()} />
            </Show>
            <Show when=move || admins.get().is_empty()>
                <p class="text-sm text-fg-muted">{"No administrators registered"}</p>
            </Show>
            <ul class="divide-y divide-border">
                <For
                    each=move || admins.get()
                    key=|record| record.id.clone()
                    children=move |record: AdminRecord| {
                        let is_self = self_identity.as_deref() == Some(record.id.as_str());
                        let copy_id = record.id.clone();
                        let remove_id = record.id.clone();
                        let row_copied = Signal::derive(move || copied.call(copy_id.clone()));
                        let show_remove = move || can_mutate.get() && !is_self;
                        view! {
                            <li class="flex items-center justify-between gap-3 py-3">
                                <div class="min-w-0 space-y-1">
                                    <div class="flex items-center gap-2">
                                        <code class="text-sm font-mono text-fg break-all">
                                            {record.id.clone()}
                                        </code>
                                        <Show when=move || is_self>
                                            <span class="text-xs px-2 py-0.5 rounded-full bg-action-primary-bg text-action-primary-text">
                                                {"You"}
                                            </span>
                                        </Show>
                                    </div>
                                    <p class="text-xs text-fg-muted">
                                        {format!("Added {}", format_added_date(&record))}
                                    </p>
                                </div>
                                <div class="flex items-center gap-2">
                                    <CopyButton identity=record.id.clone() copied=row_copied on_copy=on_copy />
                                    <Show when=show_remove>
                                        {
                                            let remove_id = remove_id.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class="text-xs px-2 py-1 rounded text-status-error-text hover:bg-status-error-bg disabled:opacity-50"
                                                    disabled=move || pending.get()
                                                    on:click=move |_| on_remove.call(remove_id.clone())
                                                >
                                                    {"Remove"}
                                                </button>
                                            }
                                        }
                                    </Show>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
