//! Common constants used throughout the Stencil application.

/// Supported manifest file names, probed in order
pub const MANIFEST_FILES: [&str; 3] = ["template.json", "template.yml", "template.yaml"];

/// Stencil's ignore file name
pub const IGNORE_FILE: &str = ".stencilignore";
