use crate::{
    components::layout::Layout,
    state::auth::{use_auth, AuthState, SessionContext},
};
use leptos::*;

use super::{
    components::{
        add_form::AddAdminForm, admin_list::AdminList, identity_card::IdentityCard,
        info_notice::InfoNotice, messages::PanelMessages,
    },
    controller::PanelState,
    layout::{AccessDeniedMessage, AdminPanelFrame, CheckingPermissions},
    view_model::{use_admin_panel_view_model, AdminPanelViewModel},
};

/// The settled session, or `None` while the bootstrap is running. Only
/// changes when the session itself does.
fn panel_session(auth: ReadSignal<AuthState>) -> Memo<Option<SessionContext>> {
    create_memo(move |_| {
        auth.with(|state| (!state.loading).then(|| state.session.clone()))
    })
}

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let session = panel_session(auth);

    view! {
        <Layout>
            {move || match session.get() {
                Some(session) => view! { <AdminPanelContent session=session /> }.into_view(),
                None => view! { <CheckingPermissions /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
fn AdminPanelContent(session: SessionContext) -> impl IntoView {
    let vm = use_admin_panel_view_model(session);
    {
        let vm = vm.clone();
        create_effect(move |_| vm.mount());
    }
    view! { <AdminPanelView vm=vm /> }
}

#[component]
pub fn AdminPanelView(vm: AdminPanelViewModel) -> impl IntoView {
    let snapshot = vm.snapshot;
    let messages = vm.messages;
    let loading = create_memo(move |_| snapshot.with(|s| s.state == PanelState::Loading));
    let role = create_memo(move |_| snapshot.with(|s| s.state.role()));

    let body = move || {
        if loading.get() {
            return view! { <CheckingPermissions /> }.into_view();
        }
        let role = role.get();
        if !role.is_admin() {
            return view! { <AccessDeniedMessage /> }.into_view();
        }

        let identity = snapshot.with_untracked(|s| s.identity.clone());
        let admins = Signal::derive(move || {
            snapshot.with(|s| {
                s.state
                    .directory()
                    .map(|d| d.admins.clone())
                    .unwrap_or_default()
            })
        });
        let load_error = Signal::derive(move || {
            snapshot.with(|s| s.state.directory().and_then(|d| d.load_error.clone()))
        });
        let can_mutate = Signal::derive(move || snapshot.with(|s| s.state.can_mutate()));
        let pending = vm.pending;
        let pending = Signal::derive(move || pending.get());
        let copied = Callback::new(move |id: String| snapshot.with(|s| s.is_copied(&id)));
        let own_copied = {
            let own = identity.clone().unwrap_or_default();
            Signal::derive(move || snapshot.with(|s| s.is_copied(&own)))
        };
        let on_copy = {
            let vm = vm.clone();
            Callback::new(move |id: String| vm.copy(id))
        };
        let on_remove = {
            let vm = vm.clone();
            Callback::new(move |id: String| vm.remove(id))
        };
        let on_submit = {
            let vm = vm.clone();
            Callback::new(move |_: ()| vm.submit_add())
        };

        view! {
            <AdminPanelFrame is_super_admin=role.is_super_admin()>
                <IdentityCard
                    identity=identity.clone().unwrap_or_default()
                    role=role
                    copied=own_copied
                    on_copy=on_copy
                />
                {role.is_super_admin().then(|| view! {
                    <AddAdminForm input=vm.add_input pending=pending on_submit=on_submit />
                })}
                <AdminList
                    admins=admins
                    load_error=load_error
                    can_mutate=can_mutate
                    self_identity=identity
                    copied=copied
                    pending=pending
                    on_copy=on_copy
                    on_remove=on_remove
                />
                <InfoNotice role=role />
            </AdminPanelFrame>
        }
        .into_view()
    };

    view! {
        <div class="space-y-4">
            <PanelMessages messages=messages />
            {body}
        </div>
    }
}
