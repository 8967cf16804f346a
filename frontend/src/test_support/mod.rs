#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fakes;

#[cfg(test)]
pub mod helpers {
    use crate::api::AdminRecord;
    use crate::pages::admin_panel::{
        collaborators::SignalNotifier,
        controller::{AdminPanel, PanelCollaborators},
        repository::InMemoryAdminDirectory,
        utils::{MessageState, Role},
        view_model::AdminPanelViewModel,
    };
    use crate::state::auth::{AuthState, SessionContext};
    use crate::test_support::fakes::{FakeClipboard, FixedRole, ScriptedConfirmer};
    use chrono::{TimeZone, Utc};
    use leptos::*;
    use std::rc::Rc;

    pub fn admin_record(id: &str, day: u32) -> AdminRecord {
        AdminRecord {
            id: id.into(),
            added_at: Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap(),
        }
    }

    pub fn provide_session(
        identity: &str,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session: SessionContext::new(identity, "test-token"),
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// View model over in-memory collaborators; confirmations are accepted.
    /// Must be called inside a reactive runtime.
    pub fn fake_view_model(
        identity: &str,
        role: Role,
        store: InMemoryAdminDirectory,
    ) -> AdminPanelViewModel {
        let messages = create_rw_signal(MessageState::default());
        let deps = PanelCollaborators {
            permissions: Rc::new(FixedRole::new(role)),
            directory: Rc::new(store),
            confirmer: Rc::new(ScriptedConfirmer::answering(true)),
            notifier: Rc::new(SignalNotifier::new(messages)),
            clipboard: Rc::new(FakeClipboard::default()),
        };
        AdminPanelViewModel::new(
            AdminPanel::new(SessionContext::new(identity, "test-token"), deps),
            messages,
        )
    }
}
