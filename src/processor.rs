//! Action planning and execution.
//! A `Processor` resolves every manifest action up front (the plan phase)
//! and only then touches the output root, so a manifest that fails to
//! resolve produces zero destination files. Execution runs strictly in
//! manifest order; later actions may intentionally overwrite earlier
//! outputs, and the first failure aborts the remainder.

use crate::error::{Error, Result};
use crate::manifest::{ActionKind, SourceAction, TemplateDescriptor};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use log::{debug, error};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// What to do when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace the existing file
    Overwrite,
    /// Abort with `Error::DestinationExists`
    Fail,
    /// Ask through the prompter; declining aborts
    Ask,
}

/// A fully resolved file operation, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Copy source bytes unchanged to the target
    Copy { source: PathBuf, target: PathBuf },
    /// Write rendered content to the target
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    /// Destination path of this operation.
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::Copy { target, .. } => target,
            FileOperation::Write { target, .. } => target,
        }
    }
}

/// One manifest action resolved against the template and output roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAction {
    pub index: usize,
    pub kind: ActionKind,
    pub operation: FileOperation,
}

/// Executes a descriptor's actions against a template root and output root.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    template_root: &'a Path,
    output_root: &'a Path,
    policy: OverwritePolicy,
    answers: &'a IndexMap<String, String>,
}

/// Normalizes a manifest path to a relative path under a root.
///
/// Leading `/` and `.` components are dropped (manifest paths are
/// root-relative by convention). Returns `None` when the path is empty or
/// would escape the root through a `..` component; escapes must be rejected,
/// not clamped.
fn sanitize_relative(raw: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => sanitized.push(part),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            Component::ParentDir => return None,
        }
    }

    if sanitized.as_os_str().is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        template_root: &'a Path,
        output_root: &'a Path,
        policy: OverwritePolicy,
        answers: &'a IndexMap<String, String>,
    ) -> Self {
        Self { renderer, prompt, template_root, output_root, policy, answers }
    }

    fn resolve_source(&self, index: usize, location: &str) -> Result<PathBuf> {
        let not_found = || Error::SourceNotFound { index, location: location.to_string() };

        let relative = sanitize_relative(location).ok_or_else(not_found)?;
        let source = self.template_root.join(relative);
        if !source.is_file() {
            return Err(not_found());
        }
        Ok(source)
    }

    fn resolve_target(&self, index: usize, rename: &str, rendered: &str) -> Result<PathBuf> {
        let relative = sanitize_relative(rendered).ok_or_else(|| {
            Error::DestinationPathInvalid { index, rename: rename.to_string() }
        })?;
        Ok(self.output_root.join(relative))
    }

    fn plan_action(&self, index: usize, source_action: &SourceAction) -> Result<PlannedAction> {
        let source = self.resolve_source(index, &source_action.location)?;
        let rendered_rename = self.renderer.render(&source_action.rename, self.answers)?;
        let target = self.resolve_target(index, &source_action.rename, &rendered_rename)?;

        debug!(
            "Planned action {}: {} '{}' -> '{}'",
            index,
            source_action.action,
            source_action.location,
            target.display()
        );

        let operation = match source_action.action {
            ActionKind::Copy => FileOperation::Copy { source, target },
            ActionKind::Generate => {
                let raw = fs::read_to_string(&source).map_err(Error::IoError)?;
                let content = self.renderer.render(&raw, self.answers)?;
                FileOperation::Write { target, content }
            }
        };

        Ok(PlannedAction { index, kind: source_action.action, operation })
    }

    /// Resolves every action of the descriptor without writing anything.
    ///
    /// # Errors
    /// The first action that fails to resolve aborts planning;
    /// `Error::SourceNotFound` and `Error::DestinationPathInvalid` carry the
    /// action index, and any other failure is logged with it.
    pub fn plan(&self, descriptor: &TemplateDescriptor) -> Result<Vec<PlannedAction>> {
        descriptor.validate()?;

        let mut planned = Vec::with_capacity(descriptor.sources.len());
        for (index, source_action) in descriptor.sources.iter().enumerate() {
            let action = self.plan_action(index, source_action).map_err(|e| {
                error!("Action {} ('{}') failed: {}", index, source_action.location, e);
                e
            })?;
            planned.push(action);
        }
        Ok(planned)
    }

    fn check_existing(&self, target: &Path) -> Result<()> {
        if !target.exists() {
            return Ok(());
        }

        let replace = match self.policy {
            OverwritePolicy::Overwrite => true,
            OverwritePolicy::Fail => false,
            OverwritePolicy::Ask => self.prompt.confirm(
                false,
                format!("File '{}' already exists. Overwrite it?", target.display()),
            )?,
        };

        if replace {
            debug!("Overwriting existing file '{}'", target.display());
            Ok(())
        } else {
            Err(Error::DestinationExists { path: target.display().to_string() })
        }
    }

    /// Executes a single planned action, creating parent directories as
    /// needed.
    pub fn execute(&self, planned: &PlannedAction) -> Result<()> {
        let target = planned.operation.target();
        self.check_existing(target)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        match &planned.operation {
            FileOperation::Copy { source, target } => {
                fs::copy(source, target).map(|_| ()).map_err(Error::IoError)
            }
            FileOperation::Write { target, content } => {
                fs::write(target, content).map_err(Error::IoError)
            }
        }
    }

    /// Plans and executes the whole descriptor in manifest order.
    ///
    /// # Returns
    /// * `Result<Vec<PlannedAction>>` - The executed plan, in order
    pub fn run(&self, descriptor: &TemplateDescriptor) -> Result<Vec<PlannedAction>> {
        let planned = self.plan(descriptor)?;
        for action in &planned {
            self.execute(action)?;
        }
        Ok(planned)
    }
}
