use chrono::{DateTime, Duration, Utc};

use crate::{api::AdminRecord, error::PanelError};

pub const COPY_FEEDBACK_MS: i64 = 2_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    None,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn from_flags(is_admin: bool, is_super_admin: bool) -> Self {
        if is_super_admin {
            Role::SuperAdmin
        } else if is_admin {
            Role::Admin
        } else {
            Role::None
        }
    }

    pub fn is_admin(self) -> bool {
        !matches!(self, Role::None)
    }

    pub fn is_super_admin(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::None => "user",
            Role::Admin => "administrator",
            Role::SuperAdmin => "super-admin",
        }
    }
}

pub fn normalize_identity(input: &str) -> Result<String, PanelError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(PanelError::InvalidInput(
            "enter the user's UID".to_string(),
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn sort_admins(admins: &mut [AdminRecord]) {
    admins.sort_by(|a, b| a.added_at.cmp(&b.added_at).then_with(|| a.id.cmp(&b.id)));
}

/// Short-lived "copied" acknowledgement for one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedToken {
    pub identity: String,
    pub expires_at: DateTime<Utc>,
}

impl CopiedToken {
    pub fn new(identity: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            identity: identity.into(),
            expires_at: now + Duration::milliseconds(COPY_FEEDBACK_MS),
        }
    }

    pub fn is_active_for(&self, identity: &str, now: DateTime<Utc>) -> bool {
        self.identity == identity && now < self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
        self.info = None;
    }

    pub fn set(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.clear();
        let message = Some(message.into());
        match level {
            NoticeLevel::Success => self.success = message,
            NoticeLevel::Error => self.error = message,
            NoticeLevel::Info => self.info = message,
        }
    }
}

pub fn info_bullets(role: Role) -> Vec<&'static str> {
    let mut bullets = vec!["Administrators can delete any topic or message in the forums"];
    if role.is_super_admin() {
        bullets.extend([
            "Only super-admins can add or remove administrators",
            "Only add trusted users as administrators",
            "To add an administrator you need their exact UID",
        ]);
    }
    bullets.push("The user must be registered on the platform");
    bullets
}

pub fn format_added_date(record: &AdminRecord) -> String {
    record.added_at.format("%Y-%m-%d").to_string()
}
