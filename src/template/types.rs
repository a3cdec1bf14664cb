//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned by the injected persistence backend.
///
/// The template core never interprets these; they pass through to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Store rejected the write: {0}")]
    Rejected(String),

    #[error("Store read failed: {0}")]
    ReadFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Available email template types.
///
/// The catalog carries canned default content for each variant;
/// `General` doubles as the fallback for unrecognized type values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    Invitation,
    PasswordReset,
    Welcome,
    Notification,
    General,
}

impl TemplateType {
    /// All types in stable enumeration order, with display labels for UI
    /// population.
    pub const ALL: [(TemplateType, &'static str); 5] = [
        (TemplateType::Invitation, "User Invitation"),
        (TemplateType::PasswordReset, "Password Reset"),
        (TemplateType::Welcome, "Welcome Message"),
        (TemplateType::Notification, "Notification"),
        (TemplateType::General, "General"),
    ];

    /// The stored string value for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Invitation => "invitation",
            TemplateType::PasswordReset => "password_reset",
            TemplateType::Welcome => "welcome",
            TemplateType::Notification => "notification",
            TemplateType::General => "general",
        }
    }

    /// Parse a stored type value. Returns `None` for unrecognized values;
    /// callers needing strict validation check this before hitting the
    /// catalog's silent `general` fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "invitation" => Some(TemplateType::Invitation),
            "password_reset" => Some(TemplateType::PasswordReset),
            "welcome" => Some(TemplateType::Welcome),
            "notification" => Some(TemplateType::Notification),
            "general" => Some(TemplateType::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored email template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Unique template identifier
    pub id: Uuid,

    /// Human-readable template name
    pub name: String,

    /// Subject line with {{placeholder}} tokens
    pub subject: String,

    /// HTML body with {{placeholder}} tokens
    pub html_content: String,

    /// Optional plain-text body with {{placeholder}} tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Template description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Active flag, reserved; not enforced by any engine operation
    #[serde(default = "default_is_active")]
    pub is_active: bool,

    /// User who created this template
    pub creator_id: Uuid,

    /// Template type, selects default content when auto-provisioning
    pub template_type: TemplateType,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_is_active() -> bool {
    true
}

impl EmailTemplate {
    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        if self.subject.is_empty() || self.subject.len() > 1024 {
            return Err(TemplateError::InvalidTemplate(
                "Subject must be 1-1024 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// A persistable template draft, before the store assigns an ID and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    /// Human-readable template name
    pub name: String,

    /// Subject line with {{placeholder}} tokens
    pub subject: String,

    /// HTML body with {{placeholder}} tokens
    pub html_content: String,

    /// Optional plain-text body
    pub text_content: Option<String>,

    /// Template description (optional)
    pub description: Option<String>,

    /// Active flag
    pub is_active: bool,

    /// User creating this template
    pub creator_id: Uuid,

    /// Template type
    pub template_type: TemplateType,
}

/// The output of compiling a template against a variable map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledEmail {
    /// Compiled subject line
    pub subject: String,

    /// Compiled HTML body
    pub html_content: String,

    /// Compiled plain-text body; `None` when the source template has no
    /// text variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}
