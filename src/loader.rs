//! Template loading for Stencil.
//! A template argument is either a local filesystem path or a git
//! repository URL; git templates are cloned into the working directory
//! before the manifest is read.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Represents the source location of a template.
#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Returns whether the string names a git repository rather than a path.
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "https" || url.scheme() == "git" {
                return true;
            }
        }
        s.starts_with("git@")
    }

    /// Creates a TemplateSource from a string path or URL.
    pub fn from_string(s: &str) -> Self {
        if Self::is_git_url(s) {
            Self::Git(s.to_string())
        } else {
            Self::FileSystem(PathBuf::from(s))
        }
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Loads the template and returns the local directory containing it.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<std::path::Path>> {
    path: P,
}

impl<P: AsRef<std::path::Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<std::path::Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path does not exist
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(path.to_path_buf())
    }
}

/// Loader for templates from git repositories.
pub struct GitLoader<'a, S: AsRef<str>> {
    prompt: &'a dyn Prompter,
    repo: S,
    skip_overwrite_check: bool,
}

impl<'a, S: AsRef<str>> GitLoader<'a, S> {
    pub fn new(prompt: &'a dyn Prompter, repo: S, skip_overwrite_check: bool) -> Self {
        Self { prompt, repo, skip_overwrite_check }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<'_, S> {
    /// Loads a template by cloning a git repository.
    ///
    /// An existing checkout with the same name is either replaced (after
    /// confirmation) or reused.
    ///
    /// # Errors
    /// * `Error::Git2Error` if the clone fails
    fn load(&self) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();

        debug!("Cloning repository '{}'", repo_url);

        let repo_name =
            repo_url.split('/').next_back().unwrap_or("template").trim_end_matches(".git");
        let clone_path = PathBuf::from(repo_name);

        if clone_path.exists() {
            let response = self.prompt.confirm(
                self.skip_overwrite_check,
                format!("Directory '{}' already exists. Replace it?", repo_name),
            )?;
            if response {
                fs::remove_dir_all(&clone_path).map_err(Error::IoError)?;
            } else {
                debug!("Using existing directory '{}'", clone_path.display());
                return Ok(clone_path);
            }
        }

        debug!("Cloning to '{}'", clone_path.display());

        // Set up authentication callbacks
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let home = std::env::var("HOME").unwrap_or_default();
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                std::path::Path::new(&format!("{}/.ssh/id_rsa", home)),
                None,
            )
        });

        // Configure fetch options with callbacks
        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(repo_url, &clone_path) {
            Ok(_) => Ok(clone_path),
            Err(e) => Err(Error::Git2Error(e)),
        }
    }
}

/// Returns the template directory for the given template argument.
pub fn load_template<S: Into<String>>(
    prompt: &dyn Prompter,
    template: S,
    skip_overwrite_check: bool,
) -> Result<PathBuf> {
    let template: String = template.into();
    let template_source = TemplateSource::from_string(&template);

    println!("Using template from the {}", template_source);

    let loader: Box<dyn TemplateLoader> = match template_source {
        TemplateSource::Git(repo) => {
            Box::new(GitLoader::new(prompt, repo, skip_overwrite_check))
        }
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}
