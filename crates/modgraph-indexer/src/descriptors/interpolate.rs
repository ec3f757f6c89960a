//! `${...}` placeholder resolution for descriptor values

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
});

/// Property values available to placeholders, keyed by property name.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Properties::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Register a model field under `project.<field>`, `pom.<field>` and `<field>`.
    pub fn insert_model_field(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            for key in [format!("project.{field}"), format!("pom.{field}"), field.to_string()] {
                self.values.entry(key).or_insert_with(|| value.to_string());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Replace every known placeholder in `value`. Unknown placeholders stay as written.
    pub fn interpolate(&self, value: &str) -> String {
        if !value.contains("${") {
            return value.to_string();
        }
        PLACEHOLDER
            .replace_all(value, |caps: &Captures| match self.get(caps[1].trim()) {
                Some(resolved) => resolved.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
