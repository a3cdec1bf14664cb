//! Canned default content per template type.
//!
//! The catalog is a static lookup table keyed by [`TemplateType`]; the
//! `general` entry doubles as the fallback for unrecognized type values,
//! so lookups never fail.

use uuid::Uuid;

use super::store::TemplateStore;
use super::types::{EmailTemplate, NewTemplate, PersistenceError, TemplateType};

/// Canned content record for one template type.
#[derive(Debug, Clone, Copy)]
pub struct DefaultContent {
    pub name: &'static str,
    pub subject: &'static str,
    pub html_content: &'static str,
    pub text_content: &'static str,
}

const INVITATION: DefaultContent = DefaultContent {
    name: "Default User Invitation",
    subject: "You're invited to join {{app_name}}",
    html_content: "<h2>Welcome!</h2><p>Hello {{user_name}},</p><p>You have been invited to join {{app_name}}.</p><p>Please click <a href=\"{{invitation_url}}\">here</a> to accept the invitation.</p>",
    text_content: "Hello {{user_name}},\n\nYou have been invited to join {{app_name}}.\n\nPlease click the following link to accept the invitation:\n{{invitation_url}}\n\nBest regards,\n{{app_name}} Team",
};

const PASSWORD_RESET: DefaultContent = DefaultContent {
    name: "Default Password Reset",
    subject: "Reset Your {{app_name}} Password",
    html_content: "<h2>Password Reset</h2><p>Hello {{user_name}},</p><p>You are receiving this email because we received a password reset request for your account.</p><p><a href=\"{{reset_url}}\">Reset Password</a></p>",
    text_content: "Hello {{user_name}},\n\nYou are receiving this email because we received a password reset request for your account.\n\nPlease click the following link to reset your password:\n{{reset_url}}\n\nIf you did not request a password reset, no further action is required.\n\nBest regards,\n{{app_name}} Team",
};

const WELCOME: DefaultContent = DefaultContent {
    name: "Default Welcome Message",
    subject: "Welcome to {{app_name}}!",
    html_content: "<h2>Welcome!</h2><p>Hello {{user_name}},</p><p>Welcome to {{app_name}}! We're excited to have you on board.</p><p><a href=\"{{app_url}}\">Visit Dashboard</a></p>",
    text_content: "Hello {{user_name}},\n\nWelcome to {{app_name}}! We're excited to have you on board.\n\nYou can access your dashboard at: {{app_url}}\n\nIf you have any questions, please don't hesitate to contact us.\n\nBest regards,\n{{app_name}} Team",
};

const NOTIFICATION: DefaultContent = DefaultContent {
    name: "Default Notification",
    subject: "New Notification from {{app_name}}",
    html_content: "<h2>{{notification_title}}</h2><p>Hello {{user_name}},</p><p>You have a new notification:</p><div>{{notification_content}}</div>",
    text_content: "Hello {{user_name}},\n\nYou have a new notification:\n\n{{notification_title}}\n{{notification_content}}\n\nYou can view all your notifications at: {{app_url}}/notifications\n\nBest regards,\n{{app_name}} Team",
};

const GENERAL: DefaultContent = DefaultContent {
    name: "Default General Template",
    subject: "Message from {{app_name}}",
    html_content: "<p>Hello {{user_name}},</p><p>{{message}}</p><p>Best regards,<br>{{app_name}} Team</p>",
    text_content: "Hello {{user_name}},\n\n{{message}}\n\nBest regards,\n{{app_name}} Team",
};

/// Stable ordered enumeration of the supported types, with display labels
/// for UI population.
pub fn available_types() -> &'static [(TemplateType, &'static str)] {
    &TemplateType::ALL
}

/// Canned content for a known type.
pub fn content_for(template_type: TemplateType) -> &'static DefaultContent {
    match template_type {
        TemplateType::Invitation => &INVITATION,
        TemplateType::PasswordReset => &PASSWORD_RESET,
        TemplateType::Welcome => &WELCOME,
        TemplateType::Notification => &NOTIFICATION,
        TemplateType::General => &GENERAL,
    }
}

/// Canned content for a stored type value. Unrecognized values fall back
/// to the `general` entry; this never errors.
pub fn default_content_for(type_value: &str) -> &'static DefaultContent {
    content_for(TemplateType::parse(type_value).unwrap_or(TemplateType::General))
}

/// Build a template from the canned content for `type_value` and hand it
/// to the store for persistence.
///
/// Unrecognized type values degrade to `general` (both content and stored
/// type). The only failure surface is the store's; its error propagates
/// unchanged.
pub async fn create_default_template(
    store: &dyn TemplateStore,
    type_value: &str,
    creator_id: Uuid,
) -> Result<EmailTemplate, PersistenceError> {
    let template_type = TemplateType::parse(type_value).unwrap_or(TemplateType::General);
    let content = content_for(template_type);

    tracing::info!(
        requested = %type_value,
        resolved = %template_type,
        creator = %creator_id,
        "Provisioning default template"
    );

    let draft = NewTemplate {
        name: content.name.to_string(),
        subject: content.subject.to_string(),
        html_content: content.html_content.to_string(),
        text_content: Some(content.text_content.to_string()),
        description: None,
        is_active: true,
        creator_id,
        template_type,
    };

    store.persist(draft).await
}
