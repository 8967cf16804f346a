use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use super::utils::{normalize_identity, sort_admins, Role};
use crate::{
    api::{AdminRecord, ApiClient},
    error::PanelError,
    state::auth::SessionContext,
};

/// Resolves the caller's role. Failures resolve to [`Role::None`].
#[async_trait(?Send)]
pub trait PermissionQuery {
    async fn resolve_role(&self, session: &SessionContext) -> Role;
}

/// Set of admin grants.
///
/// `list` is ordered by `added_at`, then by id. `add` rejects empty
/// identifiers with `InvalidInput` and duplicates with `AlreadyExists`;
/// `remove` reports `NotFound` for identities that hold no grant.
#[async_trait(?Send)]
pub trait AdminDirectory {
    async fn list(&self) -> Result<Vec<AdminRecord>, PanelError>;
    async fn add(&self, identity: &str) -> Result<AdminRecord, PanelError>;
    async fn remove(&self, identity: &str) -> Result<(), PanelError>;
}

#[derive(Clone)]
pub struct ApiPermissionQuery {
    client: Rc<ApiClient>,
}

impl ApiPermissionQuery {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl PermissionQuery for ApiPermissionQuery {
    async fn resolve_role(&self, session: &SessionContext) -> Role {
        if !session.is_authenticated() {
            log::debug!("no authenticated session; role resolves to none");
            return Role::None;
        }
        match self.client.get_role_flags(session).await {
            Ok(flags) => Role::from_flags(flags.is_admin, flags.is_super_admin),
            Err(err) => {
                log::warn!("role lookup failed, denying access: {}", err);
                Role::None
            }
        }
    }
}

#[derive(Clone)]
pub struct ApiAdminDirectory {
    client: Rc<ApiClient>,
    session: SessionContext,
}

impl ApiAdminDirectory {
    pub fn new_with_client(client: Rc<ApiClient>, session: SessionContext) -> Self {
        Self { client, session }
    }
}

#[async_trait(?Send)]
impl AdminDirectory for ApiAdminDirectory {
    async fn list(&self) -> Result<Vec<AdminRecord>, PanelError> {
        let mut admins = self.client.list_admins(&self.session).await?;
        sort_admins(&mut admins);
        Ok(admins)
    }

    async fn add(&self, identity: &str) -> Result<AdminRecord, PanelError> {
        let identity = normalize_identity(identity)?;
        self.client.add_admin(&self.session, &identity).await
    }

    async fn remove(&self, identity: &str) -> Result<(), PanelError> {
        let identity = normalize_identity(identity)?;
        self.client.remove_admin(&self.session, &identity).await
    }
}

/// Directory kept in memory; grant timestamps come from the injected clock.
#[derive(Clone)]
pub struct InMemoryAdminDirectory {
    records: Rc<RefCell<BTreeMap<String, DateTime<Utc>>>>,
    clock: Rc<dyn Fn() -> DateTime<Utc>>,
}

impl Default for InMemoryAdminDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAdminDirectory {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        Self {
            records: Rc::new(RefCell::new(BTreeMap::new())),
            clock: Rc::new(clock),
        }
    }

    pub fn seeded(records: impl IntoIterator<Item = AdminRecord>) -> Self {
        let directory = Self::new();
        directory.records.borrow_mut().extend(
            records
                .into_iter()
                .map(|record| (record.id, record.added_at)),
        );
        directory
    }

    pub fn snapshot(&self) -> Vec<AdminRecord> {
        let mut admins: Vec<AdminRecord> = self
            .records
            .borrow()
            .iter()
            .map(|(id, added_at)| AdminRecord {
                id: id.clone(),
                added_at: *added_at,
            })
            .collect();
        sort_admins(&mut admins);
        admins
    }
}

#[async_trait(?Send)]
impl AdminDirectory for InMemoryAdminDirectory {
    async fn list(&self) -> Result<Vec<AdminRecord>, PanelError> {
        Ok(self.snapshot())
    }

    async fn add(&self, identity: &str) -> Result<AdminRecord, PanelError> {
        let identity = normalize_identity(identity)?;
        let mut records = self.records.borrow_mut();
        if records.contains_key(&identity) {
            return Err(PanelError::AlreadyExists(identity));
        }
        let added_at = (self.clock)();
        records.insert(identity.clone(), added_at);
        Ok(AdminRecord {
            id: identity,
            added_at,
        })
    }

    async fn remove(&self, identity: &str) -> Result<(), PanelError> {
        let identity = normalize_identity(identity)?;
        match self.records.borrow_mut().remove(&identity) {
            Some(_) => Ok(()),
            None => Err(PanelError::NotFound(identity)),
        }
    }
}
