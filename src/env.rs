//! Environment variable lookup with an injectable backing map.
//!
//! The config loader reads `USERVIEW_*` overrides through [`Env`] so tests
//! can supply values without touching the process environment.

use std::collections::HashMap;
use std::env::VarError;

/// Environment variable reader.
///
/// Empty values are reported as absent, so `USERVIEW_BASE_URL=` does not
/// blank out a configured base URL.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read from explicit key-value pairs only.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent)?,
            None => std::env::var(name)?,
        };
        if value.is_empty() {
            return Err(VarError::NotPresent);
        }
        Ok(value)
    }
}
