use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use crate::{
    api::AdminRecord,
    error::PanelError,
    pages::admin_panel::{
        collaborators::{Clipboard, Confirmer, Notifier},
        repository::{AdminDirectory, InMemoryAdminDirectory, PermissionQuery},
        utils::{NoticeLevel, Role},
    },
    state::auth::SessionContext,
};

pub struct FixedRole {
    role: Cell<Role>,
    calls: Cell<usize>,
}

impl FixedRole {
    pub fn new(role: Role) -> Self {
        Self {
            role: Cell::new(role),
            calls: Cell::new(0),
        }
    }

    pub fn set_role(&self, role: Role) {
        self.role.set(role);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl PermissionQuery for FixedRole {
    async fn resolve_role(&self, _session: &SessionContext) -> Role {
        self.calls.set(self.calls.get() + 1);
        self.role.get()
    }
}

/// Counts every call that reaches the wrapped directory.
pub struct SpyDirectory {
    inner: InMemoryAdminDirectory,
    calls: Cell<usize>,
    list_failure: RefCell<Option<String>>,
    removed: RefCell<Vec<String>>,
}

impl SpyDirectory {
    pub fn new(inner: InMemoryAdminDirectory) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            list_failure: RefCell::new(None),
            removed: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Identities exactly as they reached `remove`.
    pub fn removed(&self) -> Vec<String> {
        self.removed.borrow().clone()
    }

    pub fn fail_next_list(&self, reason: &str) {
        *self.list_failure.borrow_mut() = Some(reason.to_string());
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[async_trait(?Send)]
impl AdminDirectory for SpyDirectory {
    async fn list(&self) -> Result<Vec<AdminRecord>, PanelError> {
        self.record_call();
        let failure = self.list_failure.borrow_mut().take();
        if let Some(reason) = failure {
            return Err(PanelError::TransientFailure(reason));
        }
        self.inner.list().await
    }

    async fn add(&self, identity: &str) -> Result<AdminRecord, PanelError> {
        self.record_call();
        self.inner.add(identity).await
    }

    async fn remove(&self, identity: &str) -> Result<(), PanelError> {
        self.record_call();
        self.removed.borrow_mut().push(identity.to_string());
        self.inner.remove(identity).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(NoticeLevel, String)> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

pub struct ScriptedConfirmer {
    answer: Cell<bool>,
    prompts: Cell<usize>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            prompts: Cell::new(0),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn prompts(&self) -> usize {
        self.prompts.get()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.prompts.set(self.prompts.get() + 1);
        self.answer.get()
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    contents: RefCell<Option<String>>,
    denied: Cell<bool>,
}

impl FakeClipboard {
    pub fn deny(&self) {
        self.denied.set(true);
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        if self.denied.get() {
            return Err("permission denied".to_string());
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
