//! Placeholder extraction and substitution engine for email templates.
//!
//! Placeholders are `{{name}}` tokens where the name is any run of
//! characters not containing `}`. Names are neither trimmed nor
//! case-normalized. Substitution is literal string replacement in a single
//! left-to-right pass over the original text: replacement values are never
//! re-scanned for further tokens, so recursive expansion cannot occur.
//! Tokens with no matching variable pass through verbatim; compilation
//! never fails on missing data.

use std::collections::HashMap;
use std::ops::Range;

use chrono::{DateTime, Utc};

use super::types::{CompiledEmail, EmailTemplate};

/// System-provided variables available to every compilation.
///
/// Resolved by the caller (normally from [`Settings`](crate::config::Settings)
/// and the process clock) and passed in explicitly, so tests can pin the
/// application identity and the clock.
#[derive(Debug, Clone)]
pub struct SystemVariables {
    pub app_name: String,
    pub app_url: String,
    pub now: DateTime<Utc>,
}

impl SystemVariables {
    pub fn new(
        app_name: impl Into<String>,
        app_url: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_url: app_url.into(),
            now,
        }
    }

    /// The default variable map, keyed by fully-bracketed placeholder keys
    /// so it shares a vocabulary with caller-supplied maps.
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("{{app_name}}".to_string(), self.app_name.clone()),
            ("{{app_url}}".to_string(), self.app_url.clone()),
            (
                "{{current_year}}".to_string(),
                self.now.format("%Y").to_string(),
            ),
            (
                "{{current_date}}".to_string(),
                self.now.format("%B %-d, %Y").to_string(),
            ),
        ])
    }
}

/// Walk `text` for non-overlapping `{{name}}` tokens and invoke `on_token`
/// with the captured name and the byte range of the full token. Malformed
/// or unterminated tokens are skipped.
fn scan_tokens(text: &str, mut on_token: impl FnMut(&str, Range<usize>)) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            let start = i + 2;
            let mut j = start;
            while j < bytes.len() && bytes[j] != b'}' {
                j += 1;
            }
            // Name must be non-empty and closed by a literal "}}".
            if j > start && j + 1 < bytes.len() && bytes[j + 1] == b'}' {
                on_token(&text[start..j], i..j + 2);
                i = j + 2;
                continue;
            }
        }
        i += 1;
    }
}

/// Single-pass substitution over the original text snapshot. `resolve` maps
/// a bare placeholder name to its replacement; `None` leaves the token
/// verbatim.
fn substitute(text: &str, mut resolve: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    scan_tokens(text, |name, range| {
        if let Some(value) = resolve(name) {
            out.push_str(&text[copied..range.start]);
            out.push_str(&value);
            copied = range.end;
        }
    });
    out.push_str(&text[copied..]);
    out
}

fn apply_map(text: &str, variables: &HashMap<String, String>) -> String {
    substitute(text, |name| {
        variables.get(&format!("{{{{{name}}}}}")).cloned()
    })
}

/// Extract the distinct placeholder names from arbitrary text, in
/// first-seen order. Order is an implementation detail, not a contract.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    scan_tokens(text, |name, _| {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    });
    names
}

/// Placeholder names used anywhere in a template. A name appearing in
/// several of subject/html/text is reported once.
pub fn collect_placeholders(template: &EmailTemplate) -> Vec<String> {
    let content = format!(
        "{} {} {}",
        template.subject,
        template.html_content,
        template.text_content.as_deref().unwrap_or("")
    );
    extract_placeholders(&content)
}

/// The placeholder names a template requires that the given variable map
/// does not supply. Presence of the bracketed key is what is checked; an
/// empty value still satisfies a placeholder. An empty result means the
/// map fully resolves the template.
pub fn missing_placeholders(
    template: &EmailTemplate,
    variables: &HashMap<String, String>,
) -> Vec<String> {
    collect_placeholders(template)
        .into_iter()
        .filter(|name| !variables.contains_key(&format!("{{{{{name}}}}}")))
        .collect()
}

/// Compile a template against caller variables merged over system defaults.
///
/// Caller entries win on key collision. Unresolved tokens are left as
/// literal `{{name}}` text; this never fails. An absent plain-text body
/// stays absent in the output.
pub fn compile(
    template: &EmailTemplate,
    variables: &HashMap<String, String>,
    system: &SystemVariables,
) -> CompiledEmail {
    let mut effective = system.to_map();
    for (key, value) in variables {
        effective.insert(key.clone(), value.clone());
    }

    tracing::debug!(
        template = %template.name,
        variables = effective.len(),
        "Compiling template"
    );

    CompiledEmail {
        subject: apply_map(&template.subject, &effective),
        html_content: apply_map(&template.html_content, &effective),
        text_content: template
            .text_content
            .as_deref()
            .map(|text| apply_map(text, &effective)),
    }
}

/// Substitute placeholders in arbitrary text outside the stored catalog.
///
/// `data` uses bare keys; the engine adds the `{{ }}` wrapping per key.
/// Same single-pass literal replacement as [`compile`].
pub fn compile_text(text: &str, data: &HashMap<String, String>) -> String {
    substitute(text, |name| data.get(name).cloned())
}
