//! Role-gated orchestration for the admin panel.
//!
//! [`AdminPanel`] owns the view state machine (`Loading` → `Denied` |
//! `AdminView` | `SuperAdminView`) and runs every user action against the
//! permission and directory collaborators. Each action reports its outcome
//! through the [`Notifier`] and also returns it, so nothing propagates past the
//! action boundary unreported.

use chrono::{DateTime, Utc};
use std::rc::Rc;

use super::{
    collaborators::{Clipboard, Confirmer, Notifier},
    repository::{AdminDirectory, PermissionQuery},
    utils::{normalize_identity, CopiedToken, NoticeLevel, Role},
};
use crate::{api::AdminRecord, error::PanelError, state::auth::SessionContext};

pub const REMOVE_CONFIRM_PROMPT: &str = "Are you sure you want to remove this administrator?";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    pub admins: Vec<AdminRecord>,
    pub load_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Loading,
    Denied,
    AdminView {
        directory: DirectoryView,
    },
    /// The only state carrying the add-form input, so mutation controls
    /// cannot exist for other roles.
    SuperAdminView {
        directory: DirectoryView,
        add_input: String,
    },
}

impl PanelState {
    pub fn role(&self) -> Role {
        match self {
            PanelState::Loading | PanelState::Denied => Role::None,
            PanelState::AdminView { .. } => Role::Admin,
            PanelState::SuperAdminView { .. } => Role::SuperAdmin,
        }
    }

    pub fn directory(&self) -> Option<&DirectoryView> {
        match self {
            PanelState::AdminView { directory } | PanelState::SuperAdminView { directory, .. } => {
                Some(directory)
            }
            PanelState::Loading | PanelState::Denied => None,
        }
    }

    fn directory_mut(&mut self) -> Option<&mut DirectoryView> {
        match self {
            PanelState::AdminView { directory } | PanelState::SuperAdminView { directory, .. } => {
                Some(directory)
            }
            PanelState::Loading | PanelState::Denied => None,
        }
    }

    pub fn add_input(&self) -> Option<&str> {
        match self {
            PanelState::SuperAdminView { add_input, .. } => Some(add_input.as_str()),
            _ => None,
        }
    }

    pub fn can_mutate(&self) -> bool {
        matches!(self, PanelState::SuperAdminView { .. })
    }
}

#[derive(Clone)]
pub struct PanelCollaborators {
    pub permissions: Rc<dyn PermissionQuery>,
    pub directory: Rc<dyn AdminDirectory>,
    pub confirmer: Rc<dyn Confirmer>,
    pub notifier: Rc<dyn Notifier>,
    pub clipboard: Rc<dyn Clipboard>,
}

pub struct AdminPanel {
    session: SessionContext,
    deps: PanelCollaborators,
    state: PanelState,
    copied: Option<CopiedToken>,
}

impl AdminPanel {
    pub fn new(session: SessionContext, deps: PanelCollaborators) -> Self {
        Self {
            session,
            deps,
            state: PanelState::Loading,
            copied: None,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn copied(&self) -> Option<&CopiedToken> {
        self.copied.as_ref()
    }

    /// Resolves the role and enters the matching view. Re-entry starts over
    /// from `Loading`.
    pub async fn mount(&mut self) -> Role {
        self.state = PanelState::Loading;
        let role = self.deps.permissions.resolve_role(&self.session).await;
        log::info!("admin panel resolved role: {:?}", role);

        self.state = match role {
            Role::None => PanelState::Denied,
            Role::Admin => PanelState::AdminView {
                directory: DirectoryView::default(),
            },
            Role::SuperAdmin => PanelState::SuperAdminView {
                directory: DirectoryView::default(),
                add_input: String::new(),
            },
        };
        self.reload().await;
        role
    }

    /// Re-fetches the whole directory. No-op outside the role views.
    pub async fn reload(&mut self) {
        if self.state.directory().is_none() {
            return;
        }
        let result = self.deps.directory.list().await;
        let view = match result {
            Ok(admins) => {
                log::debug!("loaded {} admin records", admins.len());
                DirectoryView {
                    admins,
                    load_error: None,
                }
            }
            Err(err) => {
                let message = format!("Error loading administrators: {}", err);
                self.deps.notifier.notify(NoticeLevel::Error, &message);
                DirectoryView {
                    admins: Vec::new(),
                    load_error: Some(message),
                }
            }
        };
        if let Some(directory) = self.state.directory_mut() {
            *directory = view;
        }
    }

    /// Updates the add-form input; ignored unless the add form exists.
    pub fn set_add_input(&mut self, value: impl Into<String>) -> bool {
        match &mut self.state {
            PanelState::SuperAdminView { add_input, .. } => {
                *add_input = value.into();
                true
            }
            _ => false,
        }
    }

    /// Submits the current add-form input.
    pub async fn submit_add(&mut self) -> Result<AdminRecord, PanelError> {
        let input = self.state.add_input().unwrap_or_default().to_string();
        self.add_admin(&input).await
    }

    pub async fn add_admin(&mut self, input: &str) -> Result<AdminRecord, PanelError> {
        let result = self.try_add(input).await;
        match &result {
            Ok(record) => {
                log::info!("granted admin to {}", record.id);
                self.deps
                    .notifier
                    .notify(NoticeLevel::Success, "Administrator added successfully");
                self.set_add_input(String::new());
                self.reload().await;
            }
            Err(err) => {
                self.deps
                    .notifier
                    .notify(NoticeLevel::Error, &add_failure_message(err));
            }
        }
        result
    }

    async fn try_add(&self, input: &str) -> Result<AdminRecord, PanelError> {
        let identity = normalize_identity(input)?;
        if !self.state.can_mutate() {
            return Err(PanelError::PermissionDenied(
                "only super-admins can add administrators".to_string(),
            ));
        }
        self.deps.directory.add(&identity).await
    }

    /// Removes a grant after confirmation. `Ok(false)` means the prompt was
    /// declined and nothing was sent.
    pub async fn remove_admin(&mut self, identity: &str) -> Result<bool, PanelError> {
        let result = self.try_remove(identity).await;
        match &result {
            Ok(true) => {
                log::info!("revoked admin from {}", identity);
                self.deps
                    .notifier
                    .notify(NoticeLevel::Success, "Administrator removed successfully");
                self.reload().await;
            }
            Ok(false) => log::debug!("removal of {} cancelled", identity),
            Err(err) => {
                self.deps
                    .notifier
                    .notify(NoticeLevel::Error, &remove_failure_message(err));
            }
        }
        result
    }

    async fn try_remove(&self, identity: &str) -> Result<bool, PanelError> {
        if !self.state.can_mutate() {
            return Err(PanelError::PermissionDenied(
                "only super-admins can remove administrators".to_string(),
            ));
        }
        let identity = normalize_identity(identity)?;
        if self.session.is_self(&identity) {
            return Err(PanelError::SelfRemoval);
        }
        if !self.deps.confirmer.confirm(REMOVE_CONFIRM_PROMPT) {
            return Ok(false);
        }
        self.deps.directory.remove(&identity).await?;
        Ok(true)
    }

    pub async fn copy_identity(
        &mut self,
        identity: &str,
        now: DateTime<Utc>,
    ) -> Result<(), PanelError> {
        match self.deps.clipboard.write_text(identity).await {
            Ok(()) => {
                self.copied = Some(CopiedToken::new(identity, now));
                self.deps
                    .notifier
                    .notify(NoticeLevel::Success, "UID copied to clipboard");
                Ok(())
            }
            Err(reason) => {
                self.deps
                    .notifier
                    .notify(NoticeLevel::Error, "Error copying UID");
                Err(PanelError::ClipboardFailure(reason))
            }
        }
    }

    pub fn is_copied(&self, identity: &str, now: DateTime<Utc>) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|token| token.is_active_for(identity, now))
    }

    /// Drops the copied token once it has expired. Returns whether it changed.
    pub fn clear_expired_copy(&mut self, now: DateTime<Utc>) -> bool {
        match &self.copied {
            Some(token) if now >= token.expires_at => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }
}

fn add_failure_message(err: &PanelError) -> String {
    match err {
        PanelError::PermissionDenied(_) => "Only super-admins can add administrators".to_string(),
        PanelError::InvalidInput(_) => "Enter the UID of the user to promote".to_string(),
        PanelError::AlreadyExists(id) => format!("'{}' is already an administrator", id),
        other => format!("Error adding administrator: {}", other),
    }
}

fn remove_failure_message(err: &PanelError) -> String {
    match err {
        PanelError::PermissionDenied(_) => {
            "Only super-admins can remove administrators".to_string()
        }
        PanelError::SelfRemoval => "You cannot remove yourself as an administrator".to_string(),
        PanelError::NotFound(id) => format!("'{}' is not an administrator", id),
        other => format!("Error removing administrator: {}", other),
    }
}
