use chrono::Utc;
use futures::{lock::Mutex, Future};
use leptos::*;
use std::rc::Rc;

use super::{
    collaborators::{BrowserClipboard, SignalNotifier, WindowConfirmer},
    controller::{AdminPanel, PanelCollaborators, PanelState},
    repository::{ApiAdminDirectory, ApiPermissionQuery},
    utils::{CopiedToken, MessageState, COPY_FEEDBACK_MS},
};
use crate::{api::ApiClient, state::auth::SessionContext};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub state: PanelState,
    pub identity: Option<String>,
    pub copied: Option<CopiedToken>,
}

impl PanelSnapshot {
    fn from_panel(panel: &AdminPanel) -> Self {
        Self {
            state: panel.state().clone(),
            identity: panel.session().identity().map(str::to_string),
            copied: panel.copied().cloned(),
        }
    }

    /// Expiry is driven by the view model's timer, which republishes the
    /// snapshot without the token.
    pub fn is_copied(&self, identity: &str) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|token| token.identity == identity)
    }

    pub fn is_self(&self, identity: &str) -> bool {
        self.identity.as_deref() == Some(identity)
    }
}

#[derive(Clone)]
pub struct AdminPanelViewModel {
    pub snapshot: RwSignal<PanelSnapshot>,
    pub messages: RwSignal<MessageState>,
    pub add_input: RwSignal<String>,
    pub pending: RwSignal<bool>,
    panel: Rc<Mutex<AdminPanel>>,
}

impl AdminPanelViewModel {
    pub fn new(panel: AdminPanel, messages: RwSignal<MessageState>) -> Self {
        let snapshot = create_rw_signal(PanelSnapshot::from_panel(&panel));
        Self {
            snapshot,
            messages,
            add_input: create_rw_signal(String::new()),
            pending: create_rw_signal(false),
            panel: Rc::new(Mutex::new(panel)),
        }
    }

    fn publish(&self, panel: &AdminPanel) {
        self.snapshot.set(PanelSnapshot::from_panel(panel));
        if let Some(input) = panel.state().add_input() {
            self.add_input.set(input.to_string());
        }
    }

    pub async fn run_mount(&self) {
        let mut panel = self.panel.lock().await;
        self.pending.set(true);
        self.publish(&panel);
        panel.mount().await;
        self.publish(&panel);
        self.pending.set(false);
    }

    pub async fn run_submit_add(&self) {
        let mut panel = self.panel.lock().await;
        self.pending.set(true);
        panel.set_add_input(self.add_input.get_untracked());
        let _ = panel.submit_add().await;
        self.publish(&panel);
        self.pending.set(false);
    }

    pub async fn run_remove(&self, identity: String) {
        let mut panel = self.panel.lock().await;
        self.pending.set(true);
        let _ = panel.remove_admin(&identity).await;
        self.publish(&panel);
        self.pending.set(false);
    }

    /// Copies `identity`; returns whether the "copied" acknowledgement is showing.
    pub async fn run_copy(&self, identity: String) -> bool {
        let mut panel = self.panel.lock().await;
        let copied = panel.copy_identity(&identity, Utc::now()).await.is_ok();
        self.publish(&panel);
        copied
    }

    pub async fn run_expire_copy(&self) {
        let mut panel = self.panel.lock().await;
        if panel.clear_expired_copy(Utc::now()) {
            self.publish(&panel);
        }
    }

    pub fn mount(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.run_mount().await });
    }

    /// Marks a mutation as in flight. Returns false while another one is
    /// still pending, so repeated clicks queue nothing.
    fn claim(&self) -> bool {
        if self.pending.get_untracked() {
            log::debug!("admin panel busy; ignoring repeated action");
            return false;
        }
        self.pending.set(true);
        true
    }

    pub fn start_submit_add(&self) -> Option<impl Future<Output = ()>> {
        if !self.claim() {
            return None;
        }
        let vm = self.clone();
        Some(async move { vm.run_submit_add().await })
    }

    pub fn start_remove(&self, identity: String) -> Option<impl Future<Output = ()>> {
        if !self.claim() {
            return None;
        }
        let vm = self.clone();
        Some(async move { vm.run_remove(identity).await })
    }

    pub fn submit_add(&self) {
        if let Some(task) = self.start_submit_add() {
            spawn_local(task);
        }
    }

    pub fn remove(&self, identity: String) {
        if let Some(task) = self.start_remove(identity) {
            spawn_local(task);
        }
    }

    pub fn copy(&self, identity: String) {
        let vm = self.clone();
        spawn_local(async move {
            if vm.run_copy(identity).await {
                gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS as u32).await;
                vm.run_expire_copy().await;
            }
        });
    }
}

pub fn use_admin_panel_view_model(session: SessionContext) -> AdminPanelViewModel {
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let messages = create_rw_signal(MessageState::default());

    let deps = PanelCollaborators {
        permissions: Rc::new(ApiPermissionQuery::new_with_client(api.clone())),
        directory: Rc::new(ApiAdminDirectory::new_with_client(api, session.clone())),
        confirmer: Rc::new(WindowConfirmer),
        notifier: Rc::new(SignalNotifier::new(messages)),
        clipboard: Rc::new(BrowserClipboard),
    };

    AdminPanelViewModel::new(AdminPanel::new(session, deps), messages)
}
