use crate::api::{ApiClient, ApiError};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Authenticated session handed to the permission and directory layers.
///
/// Created once the identity provider has confirmed the user and dropped at
/// logout; nothing reads auth state from globals after that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    identity: Option<String>,
    access_token: Option<String>,
}

impl SessionContext {
    pub fn new(identity: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            access_token: Some(access_token.into()),
        }
    }

    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            identity: None,
            access_token: Some(access_token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.access_token.is_some()
    }

    pub fn is_self(&self, identity: &str) -> bool {
        self.identity() == Some(identity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: SessionContext,
    pub loading: bool,
}

fn stored_access_token() -> Option<String> {
    crate::utils::storage::local_storage()
        .ok()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let session = match stored_access_token() {
            Some(token) => match check_auth_status(&api_client, token).await {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("session bootstrap failed: {}", err);
                    SessionContext::anonymous()
                }
            },
            None => SessionContext::anonymous(),
        };
        set_auth_state.update(|state| {
            state.session = session;
            state.loading = false;
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn check_auth_status(
    api_client: &ApiClient,
    token: String,
) -> Result<SessionContext, ApiError> {
    let probe = SessionContext::with_token(token.clone());
    let me = api_client.get_me(&probe).await?;
    Ok(SessionContext::new(me.id, token))
}
