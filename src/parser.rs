//! Parameter answer collection.
//! Values come from `--param KEY=VALUE` arguments, a JSON object on stdin,
//! an interactive prompt, or the declared default, in that precedence order.
//! The final answer map only ever contains declared parameter keys, so the
//! substitution context matches the manifest's parameter list.

use crate::error::{Error, Result};
use crate::manifest::ParameterSpec;
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::warn;
use std::io::Read;

/// Parses repeated `KEY=VALUE` CLI arguments into an ordered map.
///
/// # Errors
/// * `Error::InvalidParameter` if an argument contains no `=`
pub fn parse_param_args(pairs: &[String]) -> Result<IndexMap<String, String>> {
    let mut values = IndexMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::InvalidParameter { arg: pair.clone() })?;
        values.insert(key.trim().to_string(), value.to_string());
    }
    Ok(values)
}

/// Reads a JSON object of preloaded answers from stdin.
pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let out = buffer.trim().to_string();
    Ok(serde_json::from_str(&out).unwrap_or(serde_json::Value::Null))
}

/// Returns preloaded answers from stdin when requested, `Null` otherwise.
pub fn get_answers_from(take_from_stdin: bool) -> Result<serde_json::Value> {
    if take_from_stdin {
        load_from_stdin()
    } else {
        Ok(serde_json::Value::Null)
    }
}

fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolves a value for every declared parameter, in declaration order.
///
/// # Arguments
/// * `prompt` - Prompter used when no non-interactive source has a value
/// * `parameters` - Declared parameter specs from the manifest
/// * `preloaded_answers` - JSON object of answers (stdin), or `Null`
/// * `overrides` - CLI `--param` values
///
/// # Returns
/// * `Result<IndexMap<String, String>>` - Answers keyed by parameter key
///
/// # Notes
/// Override keys that are not declared in `parameters` are ignored with a
/// warning instead of entering the substitution context.
pub fn get_answers(
    prompt: &dyn Prompter,
    parameters: &[ParameterSpec],
    preloaded_answers: serde_json::Value,
    overrides: IndexMap<String, String>,
) -> Result<IndexMap<String, String>> {
    let mut overrides = overrides;
    let mut answers = IndexMap::new();

    for parameter in parameters {
        let value = if let Some(value) = overrides.shift_remove(&parameter.key) {
            value
        } else if let Some(value) = preloaded_answers.get(&parameter.key) {
            value_to_string(value)
        } else {
            prompt.text(parameter.key.clone(), parameter.default_value.clone())?
        };
        answers.insert(parameter.key.clone(), value);
    }

    for key in overrides.keys() {
        warn!("Ignoring value for undeclared parameter '{}'", key);
    }

    Ok(answers)
}
