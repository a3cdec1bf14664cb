//! Placeholder-based email template compilation.
//!
//! Given a stored template (subject, HTML body, optional plain-text body)
//! containing `{{name}}` tokens, this crate resolves those tokens against
//! caller-supplied variables merged over a fixed set of system defaults
//! and produces ready-to-send text. It also supports introspection
//! (which placeholders a template uses), validation (which required
//! placeholders a variable map is missing), type-scoped default-template
//! provisioning, and per-type usage statistics.
//!
//! The engine is pure: it receives a template record and a variable map
//! and returns compiled text. It does not fetch data, send mail, or
//! render UI; persistence is an injected [`template::TemplateStore`]
//! capability.

// Supporting modules
pub mod config;

// Domain layer (business logic)
pub mod template;
