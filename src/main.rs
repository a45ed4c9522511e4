//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, manifest resolution and
//! materialization, and coordinates interactions between different modules.

use std::path::{Path, PathBuf};

use stencil::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    loader::load_template,
    manifest::load_manifest,
    parser::{get_answers, get_answers_from, parse_param_args},
    processor::{OverwritePolicy, Processor},
    prompt::DialoguerPrompter,
    renderer::TokenRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Ensures the output directory is safe to write to.
///
/// # Arguments
/// * `output_dir` - Target directory path for generated output
/// * `force` - Whether to overwrite an existing directory
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and force
///   is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the output directory
/// 2. Loads the template (local path or git clone)
/// 3. Loads and validates the manifest
/// 4. Collects parameter answers (CLI, stdin, prompts, defaults)
/// 5. Plans every action, then executes them in manifest order
fn run(args: Args) -> Result<()> {
    let renderer = TokenRenderer::new();
    let prompt = DialoguerPrompter::new();

    let output_root = get_output_dir(args.output_dir, args.force)?;
    let template_root = load_template(&prompt, args.template, args.skip_overwrite_check)?;
    let descriptor = load_manifest(&template_root)?;

    println!("Scaffolding '{}': {}", descriptor.name, descriptor.description);

    let overrides = parse_param_args(&args.params)?;
    let preloaded_answers = get_answers_from(args.stdin)?;
    let answers = get_answers(&prompt, &descriptor.parameters, preloaded_answers, overrides)?;

    let policy = if args.fail_existing {
        OverwritePolicy::Fail
    } else if args.skip_overwrite_check {
        OverwritePolicy::Overwrite
    } else {
        OverwritePolicy::Ask
    };

    let processor =
        Processor::new(&renderer, &prompt, &template_root, &output_root, policy, &answers);

    // Resolve everything before the first write so a bad manifest leaves
    // the output root untouched.
    let planned = processor.plan(&descriptor)?;
    for action in &planned {
        processor.execute(action)?;
        println!("{}: '{}'", action.kind, action.operation.target().display());
    }

    println!("Scaffolding completed successfully in {}.", output_root.display());
    Ok(())
}
