//! Environment placeholders in raw config text.
//!
//! Before a document is parsed, every `${NAME}` and `${NAME=default}` token in its
//! text is replaced:
//!
//! | Token | `NAME` set | `NAME` unset |
//! |-------|------------|--------------|
//! | `${NAME}` | its value | empty string |
//! | `${NAME=fallback}` | its value (even if empty) | `fallback`, trimmed |
//!
//! Substitution is textual and knows nothing about the document's structure. Only
//! `${...}` tokens are targets: a lone `$`, `$NAME`, an unterminated `${` and an
//! empty `${}` are copied through unchanged.

use std::collections::{BTreeMap, HashMap};

/// Read-only variable lookup used by [`substitute`].
///
/// Implemented for the process environment ([`ProcessEnv`]), for string maps, and
/// for closures, so tests can pass synthetic data instead of touching
/// `std::env`.
pub trait Env {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // A value that isn't valid UTF-8 counts as unset.
        std::env::var(name).ok()
    }
}

impl Env for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Env for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<F> Env for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Expand `${NAME}` and `${NAME=default}` tokens in `input` against `env`.
pub fn substitute(input: &str, env: &impl Env) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find('}') else {
            // Unterminated: the remainder is literal text.
            result.push_str(&rest[start..]);
            return result;
        };

        let token = &after_open[..end];
        match expand_token(token, env) {
            Some(value) => result.push_str(&value),
            None => result.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after_open[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Resolve the inside of one `${...}`. `None` means "not a placeholder, keep it".
fn expand_token(token: &str, env: &impl Env) -> Option<String> {
    let (name, fallback) = match token.split_once('=') {
        Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
        None => (token.trim(), None),
    };
    if name.is_empty() {
        return None;
    }

    let value = env
        .var(name)
        .unwrap_or_else(|| fallback.unwrap_or_default().to_string());
    Some(value)
}
