//! Placeholder token substitution for rename targets and generated bodies.
//! Tokens have the form `{{identifier}}`; substitution is single-pass and
//! non-recursive, so a substituted value is never re-scanned for further
//! tokens.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given parameter values.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `values` - Parameter values keyed by identifier
    ///
    /// # Returns
    /// * `Result<String>` - Rendered string
    fn render(&self, template: &str, values: &IndexMap<String, String>) -> Result<String>;
}

/// Regex-based `{{token}}` rendering engine.
///
/// Identifiers follow `[A-Za-z_][A-Za-z0-9_]*`; whitespace inside the braces
/// is tolerated. Anything that does not match the token grammar is left
/// untouched.
pub struct TokenRenderer {
    token: Regex,
}

impl TokenRenderer {
    /// Creates a new TokenRenderer with the standard token grammar.
    pub fn new() -> Self {
        let token = Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("token pattern is a valid regex");
        Self { token }
    }
}

impl Default for TokenRenderer {
    fn default() -> Self {
        TokenRenderer::new()
    }
}

impl TemplateRenderer for TokenRenderer {
    /// Replaces every `{{identifier}}` token exactly once.
    ///
    /// # Errors
    /// * `Error::UnresolvedParameter` if a token has no value in `values`.
    ///   This is a hard error rather than a pass-through: an unresolved
    ///   token in a filename or file body would corrupt the output.
    fn render(&self, template: &str, values: &IndexMap<String, String>) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for caps in self.token.captures_iter(template) {
            let (Some(whole), Some(identifier)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let value = values.get(identifier.as_str()).ok_or_else(|| {
                Error::UnresolvedParameter { name: identifier.as_str().to_string() }
            })?;

            rendered.push_str(&template[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }

        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}
