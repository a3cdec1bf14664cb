//! Email template system.
//!
//! This module provides:
//! - Template records with {{placeholder}} tokens in subject, HTML body,
//!   and optional plain-text body
//! - A placeholder engine for extraction, validation, and compilation
//! - A catalog of canned default content per template type
//! - A persistence hook trait with an in-memory reference store, plus
//!   per-type usage statistics
//!
//! # Example
//!
//! ```ignore
//! let system = SystemVariables::new("Analytics Hub", "https://hub.example.com", Utc::now());
//!
//! let variables = HashMap::from([
//!     ("{{user_name}}".to_string(), "Ada".to_string()),
//! ]);
//!
//! let compiled = compile(&template, &variables, &system);
//! // Unresolved tokens pass through verbatim; compilation never fails.
//! ```

pub mod catalog;
mod store;
mod substitution;
mod types;

pub use catalog::{available_types, create_default_template, default_content_for, DefaultContent};
pub use store::{get_statistics, MemoryTemplateStore, TemplateStatistics, TemplateStore};
pub use substitution::{
    collect_placeholders, compile, compile_text, extract_placeholders, missing_placeholders,
    SystemVariables,
};
pub use types::{
    CompiledEmail, EmailTemplate, NewTemplate, PersistenceError, TemplateError, TemplateResult,
    TemplateType,
};
