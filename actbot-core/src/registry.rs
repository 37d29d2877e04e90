//! Action registry: process-wide name-to-action mapping, populated at startup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ActbotError, Result};
use crate::types::{Action, ActionInfo};

/// A source of actions for [`ActionRegistry::discover`]. Replaces runtime module
/// scanning: an action set implements this and yields its actions explicitly.
pub trait ActionSource {
    fn actions(&self) -> Vec<Action>;
}

/// Mapping from action name to [`Action`]. Mutated only during startup registration;
/// read-only during request handling, so concurrent reads need no locking.
#[derive(Default, Clone)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action. Re-registering a name overwrites silently (last write wins).
    pub fn register(&mut self, action: Action) -> Result<()> {
        if action.name.trim().is_empty() {
            return Err(ActbotError::Config(
                "action name must not be empty".to_string(),
            ));
        }
        debug!(action = %action.name, "registering action");
        self.actions.insert(action.name.clone(), Arc::new(action));
        Ok(())
    }

    /// Registers every action a source yields. Zero actions is not an error.
    pub fn discover(&mut self, source: &dyn ActionSource) -> Result<()> {
        let actions = source.actions();
        info!(count = actions.len(), "discovering actions");
        for action in actions {
            self.register(action)?;
        }
        Ok(())
    }

    /// Looks up an action by name.
    pub fn get(&self, name: &str) -> Result<Arc<Action>> {
        self.actions
            .get(name)
            .cloned()
            .ok_or_else(|| ActbotError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Snapshot copy of the catalog for introspection and prompt construction.
    /// Mutating the returned value does not affect the registry.
    pub fn all(&self) -> Vec<ActionInfo> {
        let mut infos: Vec<ActionInfo> = self.actions.values().map(|a| a.info()).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Names of the required parameters of an action; empty for an unknown action.
    pub fn required_parameters(&self, name: &str) -> Vec<String> {
        match self.actions.get(name) {
            Some(action) => action
                .parameters
                .iter()
                .filter(|p| p.required && p.default.is_none())
                .map(|p| p.name.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
