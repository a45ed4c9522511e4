//! Template manifest model.
//! A manifest declares an ordered sequence of source actions plus the named
//! parameters those actions may reference. Descriptors are immutable once
//! constructed; all shape problems surface at load time as
//! `Error::MalformedDescriptor`, never during action execution.

use crate::constants::MANIFEST_FILES;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// What to do with a source file when materializing a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Render the source as text through parameter substitution
    Generate,
    /// Copy the source bytes unchanged
    Copy,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Generate => write!(f, "generate"),
            ActionKind::Copy => write!(f, "copy"),
        }
    }
}

/// A single entry in a manifest's `sources` sequence.
///
/// `location` is resolved against the template root (a leading `/` is
/// root-relative, not filesystem-absolute). `rename` is the destination
/// path and may contain `{{token}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceAction {
    pub location: String,
    pub action: ActionKind,
    pub rename: String,
}

/// A named parameter a template accepts, with an optional default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterSpec {
    pub key: String,
    #[serde(default, rename = "defaultValue", alias = "default")]
    pub default_value: Option<String>,
}

/// Immutable description of a template: identity plus the ordered actions
/// that materialize it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateDescriptor {
    pub name: String,
    pub description: String,
    pub sources: Vec<SourceAction>,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl TemplateDescriptor {
    /// Validates the descriptor shape beyond what deserialization enforces.
    ///
    /// # Errors
    /// * `Error::MalformedDescriptor` for an empty name, an empty
    ///   `location`/`rename`, or duplicate parameter keys
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MalformedDescriptor {
                reason: "'name' must not be empty".to_string(),
            });
        }

        for (index, source) in self.sources.iter().enumerate() {
            if source.location.trim().is_empty() {
                return Err(Error::MalformedDescriptor {
                    reason: format!("action {} has an empty 'location'", index),
                });
            }
            if source.rename.trim().is_empty() {
                return Err(Error::MalformedDescriptor {
                    reason: format!("action {} has an empty 'rename'", index),
                });
            }
        }

        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if !seen.insert(parameter.key.as_str()) {
                return Err(Error::MalformedDescriptor {
                    reason: format!("duplicate parameter key '{}'", parameter.key),
                });
            }
        }

        Ok(())
    }
}

/// Parses manifest content, trying JSON first and YAML as a fallback.
///
/// # Arguments
/// * `content` - Raw manifest content as string
///
/// # Returns
/// * `Result<TemplateDescriptor>` - Validated descriptor
///
/// # Errors
/// * `Error::MalformedDescriptor` if neither format parses or validation fails
pub fn parse_manifest(content: &str) -> Result<TemplateDescriptor> {
    let descriptor: TemplateDescriptor = match serde_json::from_str(content) {
        Ok(descriptor) => descriptor,
        Err(_) => serde_yaml::from_str(content).map_err(|e| Error::MalformedDescriptor {
            reason: format!("invalid manifest format: {}", e),
        })?,
    };

    descriptor.validate()?;
    Ok(descriptor)
}

/// Loads a manifest from a template directory, trying multiple file names.
/// Supports: template.json, template.yml, template.yaml
///
/// # Arguments
/// * `template_dir` - Directory containing the template manifest
///
/// # Returns
/// * `Result<TemplateDescriptor>` - Descriptor from the first found manifest
///
/// # Errors
/// * `Error::MalformedDescriptor` if no manifest file exists or parsing fails
pub fn load_manifest<P: AsRef<Path>>(template_dir: P) -> Result<TemplateDescriptor> {
    for file in MANIFEST_FILES {
        let manifest_path = template_dir.as_ref().join(file);
        if manifest_path.exists() {
            debug!("Loading manifest from {}", manifest_path.display());
            let content = std::fs::read_to_string(&manifest_path).map_err(Error::IoError)?;
            return parse_manifest(&content);
        }
    }

    Err(Error::MalformedDescriptor {
        reason: format!("no manifest file found (tried: {})", MANIFEST_FILES.join(", ")),
    })
}
