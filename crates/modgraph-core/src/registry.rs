//! Module registry keyed by module identity

use crate::model::{Module, ModuleId};
use std::collections::HashMap;

/// Deduplicated modules, iterated in first-insertion order.
///
/// Registering a module whose id is already present replaces the stored
/// module but keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: Vec<Module>,
    /// id -> index into `modules`
    index: HashMap<ModuleId, usize>,
    replaced: usize,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Insert a module. Returns the module it replaced, if any.
    pub fn insert(&mut self, module: Module) -> Option<Module> {
        match self.index.get(&module.id) {
            Some(&slot) => {
                tracing::debug!("Replacing module {} with {}", self.modules[slot].id, module.id);
                self.replaced += 1;
                Some(std::mem::replace(&mut self.modules[slot], module))
            }
            None => {
                self.index.insert(module.id.clone(), self.modules.len());
                self.modules.push(module);
                None
            }
        }
    }

    /// Look up a module by identity. Versions are ignored.
    pub fn get(&self, id: &ModuleId) -> Option<&Module> {
        self.index.get(id).map(|&slot| &self.modules[slot])
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// How many insertions overwrote an existing identity.
    pub fn replaced_count(&self) -> usize {
        self.replaced
    }
}

impl FromIterator<Module> for Registry {
    fn from_iter<I: IntoIterator<Item = Module>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for module in iter {
            registry.insert(module);
        }
        registry
    }
}
