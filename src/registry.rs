//! Lazily-populated descriptor registry.
//! Maps identifier strings to descriptor objects constructed on first
//! lookup and cached for the lifetime of the registry. The cache lock is
//! held across construction, so concurrent callers racing on the same
//! uncached id trigger at most one factory invocation.

use crate::constants::{IGNORE_FILE, MANIFEST_FILES};
use crate::error::{Error, Result};
use crate::ignore::parse_ignore_file;
use crate::manifest::{self, TemplateDescriptor};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use walkdir::WalkDir;

/// Trait for factories producing a descriptor on demand.
/// Closures of type `Fn() -> Result<D>` implement it directly.
pub trait DescriptorFactory<D>: Send + Sync {
    fn create(&self) -> Result<D>;
}

impl<D, F> DescriptorFactory<D> for F
where
    F: Fn() -> Result<D> + Send + Sync,
{
    fn create(&self) -> Result<D> {
        self()
    }
}

/// Read-mostly cache of descriptors keyed by identifier.
///
/// Factories are registered up front; descriptors are realized lazily by
/// `get` and never mutated after first load. A failed construction is not
/// cached, so a later call retries the factory.
pub struct Registry<D> {
    factories: HashMap<String, Box<dyn DescriptorFactory<D>>>,
    cache: Mutex<HashMap<String, Arc<D>>>,
}

impl<D> Registry<D> {
    pub fn new() -> Self {
        Self { factories: HashMap::new(), cache: Mutex::new(HashMap::new()) }
    }

    /// Registers a factory for an identifier, replacing any previous one.
    pub fn register<S: Into<String>>(
        &mut self,
        id: S,
        factory: impl DescriptorFactory<D> + 'static,
    ) {
        self.factories.insert(id.into(), Box::new(factory));
    }

    /// Returns whether a factory is registered for the identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the descriptor for an identifier, constructing it on first
    /// call and serving the cached value afterwards.
    ///
    /// # Errors
    /// * `Error::UnknownDescriptor` if no factory is registered for `id`
    /// * Whatever the factory returns on construction failure
    pub fn get(&self, id: &str) -> Result<Arc<D>> {
        // Cached values are immutable once inserted, so a poisoned lock is
        // still safe to read through.
        let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(descriptor) = cache.get(id) {
            return Ok(descriptor.clone());
        }

        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| Error::UnknownDescriptor { id: id.to_string() })?;

        let descriptor = Arc::new(factory.create()?);
        cache.insert(id.to_string(), descriptor.clone());
        Ok(descriptor)
    }
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Registry::new()
    }
}

/// Factory realizing a template descriptor from its manifest on disk.
pub struct ManifestFactory {
    template_dir: PathBuf,
}

impl ManifestFactory {
    pub fn new<P: Into<PathBuf>>(template_dir: P) -> Self {
        Self { template_dir: template_dir.into() }
    }
}

impl DescriptorFactory<TemplateDescriptor> for ManifestFactory {
    fn create(&self) -> Result<TemplateDescriptor> {
        manifest::load_manifest(&self.template_dir)
    }
}

/// Builds a template registry by scanning a templates root.
///
/// Every direct subdirectory carrying a manifest file is registered under
/// its directory name; manifests are not parsed until first `get`.
/// Directories matching `.stencilignore` patterns at the root are skipped.
///
/// # Arguments
/// * `templates_root` - Directory containing one template per subdirectory
pub fn discover_templates<P: AsRef<Path>>(
    templates_root: P,
) -> Result<Registry<TemplateDescriptor>> {
    let templates_root = templates_root.as_ref();
    let ignored = parse_ignore_file(templates_root.join(IGNORE_FILE))?;

    let mut registry = Registry::new();
    for entry in WalkDir::new(templates_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if ignored.is_match(name) {
            debug!("Skipping ignored template directory '{}'", name);
            continue;
        }

        if MANIFEST_FILES.iter().any(|file| entry.path().join(file).exists()) {
            debug!("Discovered template '{}'", name);
            registry.register(name, ManifestFactory::new(entry.path()));
        }
    }

    Ok(registry)
}
