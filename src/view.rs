//! View descriptor shape consumed by an external rendering host.
//! Stencil only produces and validates this shape; rendering belongs to the
//! host.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Immutable metadata identifying a UI view contributed to a rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewDescriptor {
    pub id: String,
    pub name: String,
    pub factory: String,
    pub region: String,
    pub label: String,
    pub link: String,
}

impl ViewDescriptor {
    /// Parses a view descriptor from JSON and validates it.
    ///
    /// # Errors
    /// * `Error::MalformedDescriptor` if the shape is invalid
    pub fn from_json(content: &str) -> Result<Self> {
        let descriptor: ViewDescriptor =
            serde_json::from_str(content).map_err(|e| Error::MalformedDescriptor {
                reason: format!("invalid view descriptor: {}", e),
            })?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validates that the identifying fields are present.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in
            [("id", &self.id), ("name", &self.name), ("link", &self.link)]
        {
            if value.trim().is_empty() {
                return Err(Error::MalformedDescriptor {
                    reason: format!("view descriptor field '{}' must not be empty", field),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_descriptor_from_json() {
        let content = r#"{
            "id": "extensionPoints",
            "name": "ExtensionPoints",
            "factory": "frame",
            "region": "center-top",
            "label": "Extension Points",
            "link": "../ide-extensions/views/extensionPoints/index.html"
        }"#;

        let view = ViewDescriptor::from_json(content).unwrap();
        assert_eq!(view.id, "extensionPoints");
        assert_eq!(view.region, "center-top");
    }

    #[test]
    fn test_view_descriptor_missing_field() {
        let content = r#"{ "id": "v", "name": "View" }"#;
        match ViewDescriptor::from_json(content) {
            Err(Error::MalformedDescriptor { .. }) => (),
            other => panic!("Expected MalformedDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_view_descriptor_empty_id() {
        let view = ViewDescriptor {
            id: "".to_string(),
            name: "View".to_string(),
            factory: "frame".to_string(),
            region: "center".to_string(),
            label: "View".to_string(),
            link: "index.html".to_string(),
        };
        assert!(view.validate().is_err());
    }
}
