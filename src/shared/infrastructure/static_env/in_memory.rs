use crate::shared::infrastructure::static_env::{
    StaticEnv, StaticEnvError, StaticEnvSink, validate_entry,
};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct StaticEnvTable {
    vars: Mutex<BTreeMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    is_offline: bool,
}

impl StaticEnvTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Every accepted write, in order. Overwrites show up as separate entries.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn snapshot(&self) -> StaticEnv {
        let vars = self.vars.lock().unwrap_or_else(PoisonError::into_inner);
        StaticEnv::from(vars.clone())
    }
}

impl StaticEnvSink for StaticEnvTable {
    fn set_static_env(&self, key: &str, value: &str) -> Result<(), StaticEnvError> {
        if self.is_offline {
            return Err(StaticEnvError::Backend("Static env offline".into()));
        }
        validate_entry(key, value)?;
        let mut vars = self
            .vars
            .lock()
            .map_err(|e| StaticEnvError::Backend(e.to_string()))?;
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| StaticEnvError::Backend(e.to_string()))?;
        vars.insert(key.to_string(), value.to_string());
        writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
