// Static environment: a process-wide key/value table read by downstream runtime code.
//
// Purpose
// - Give the propagator a sink to write into without touching the real process environment.
//
// Boundaries
// - The table is populated once at startup. Consumers receive a `StaticEnv` snapshot.

use serde::Serialize;
use std::collections::BTreeMap;
use std::process::Command;
use thiserror::Error;

pub const TZ_KEY: &str = "TZ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StaticEnvError {
    #[error("invalid static env key: {0:?}")]
    InvalidKey(String),

    #[error("invalid value for static env key {key}")]
    InvalidValue { key: String },

    #[error("backend error: {0}")]
    Backend(String),
}

pub trait StaticEnvSink: Send + Sync {
    fn set_static_env(&self, key: &str, value: &str) -> Result<(), StaticEnvError>;
}

/// Checks that `key` and `value` can be handed to a child process environment.
pub fn validate_entry(key: &str, value: &str) -> Result<(), StaticEnvError> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(StaticEnvError::InvalidKey(key.to_string()));
    }
    if value.contains('\0') {
        return Err(StaticEnvError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Snapshot of the static environment, handed to whatever forwards it into a runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn apply_to<'c>(&self, command: &'c mut Command) -> &'c mut Command {
        command.envs(self.iter())
    }
}

impl From<BTreeMap<String, String>> for StaticEnv {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

pub mod in_memory;

#[cfg(test)]
mod static_env_tests {
    use super::*;
    use rstest::rstest;
    use std::ffi::OsString;

    #[rstest]
    #[case("TZ", "Europe/Berlin")]
    #[case("LANG", "")]
    #[case("X", " spaced value ")]
    fn it_should_accept_valid_entries(#[case] key: &str, #[case] value: &str) {
        assert!(validate_entry(key, value).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("T=Z")]
    #[case("T\0Z")]
    fn it_should_reject_invalid_keys(#[case] key: &str) {
        assert_eq!(
            validate_entry(key, "UTC"),
            Err(StaticEnvError::InvalidKey(key.to_string()))
        );
    }

    #[rstest]
    fn it_should_reject_values_with_nul() {
        assert_eq!(
            validate_entry("TZ", "Europe\0Berlin"),
            Err(StaticEnvError::InvalidValue { key: "TZ".into() })
        );
    }

    #[rstest]
    fn it_should_expose_entries_in_key_order() {
        let env = StaticEnv::from(BTreeMap::from([
            ("TZ".to_string(), "Asia/Tokyo".to_string()),
            ("LANG".to_string(), "ja-JP".to_string()),
        ]));
        let entries: Vec<_> = env.iter().collect();
        assert_eq!(entries, vec![("LANG", "ja-JP"), ("TZ", "Asia/Tokyo")]);
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("TZ"), Some("Asia/Tokyo"));
        assert_eq!(env.get("HOME"), None);
    }

    #[rstest]
    fn it_should_serialize_as_a_flat_object() {
        let env = StaticEnv::from(BTreeMap::from([(
            "TZ".to_string(),
            "America/New_York".to_string(),
        )]));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({ "TZ": "America/New_York" }));
    }

    #[rstest]
    fn it_should_forward_entries_into_a_command() {
        let env = StaticEnv::from(BTreeMap::from([("TZ".to_string(), "UTC".to_string())]));
        let mut command = Command::new("true");
        env.apply_to(&mut command);
        let forwarded: Vec<_> = command
            .get_envs()
            .map(|(k, v)| (k.to_owned(), v.map(|v| v.to_owned())))
            .collect();
        assert_eq!(
            forwarded,
            vec![(OsString::from("TZ"), Some(OsString::from("UTC")))]
        );
    }
}
