//! Configuration file upgrades: detect keys missing from an older file and
//! rewrite it with defaults filled in, keeping every existing value.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns `Ok(false)` when the file was already complete.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut changed = false;
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            current.insert(k, v);
            changed = true;
        }
    }

    if changed {
        // make sure the result still parses before overwriting
        let merged: Config = serde_yaml::from_value(Value::Mapping(current))?;
        fs::write(path, merged.to_yaml()?)?;
    }

    Ok(changed)
}
