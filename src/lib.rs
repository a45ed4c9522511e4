//! Stencil is a manifest-driven scaffolding engine.
//! A template directory carries a declarative manifest listing source actions
//! (render-with-substitution or byte-for-byte copy) and named parameters;
//! executing the manifest materializes a project into a destination root.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Common constants (manifest file names, ignore file name)
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Ignore patterns applied during template discovery
/// Processes .stencilignore files to exclude specific paths
pub mod ignore;

/// Template loading from the local filesystem or git repositories
pub mod loader;

/// Template manifest model
/// Supports JSON and YAML formats (template.json, template.yml, template.yaml)
pub mod manifest;

/// Parameter answer collection from CLI arguments, stdin and prompts
pub mod parser;

/// Action planning and execution
/// Resolves each manifest action and materializes it into the output root
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Lazily-populated descriptor registry with at-most-one construction per id
pub mod registry;

/// Placeholder token substitution
/// Replaces {{identifier}} tokens in rename targets and generated bodies
pub mod renderer;

/// View descriptor shape consumed by an external rendering host
pub mod view;
