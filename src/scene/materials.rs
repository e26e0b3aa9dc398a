use rustc_hash::FxHashMap;

use super::{ComponentId, MaterialHost};
use crate::post::Material;

/// In-memory [`MaterialHost`] keyed by component and slot.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    slots: FxHashMap<(ComponentId, usize), Material>,
}

impl MaterialTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that assigns `material` to `component` slot 0.
    #[must_use]
    pub fn with(mut self, component: ComponentId, material: Material) -> Self {
        self.set_material(component, 0, Some(material));
        self
    }

    /// Number of assigned slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl MaterialHost for MaterialTable {
    fn material(
        &self,
        component: ComponentId,
        slot: usize,
    ) -> Option<Material> {
        self.slots.get(&(component, slot)).cloned()
    }

    fn set_material(
        &mut self,
        component: ComponentId,
        slot: usize,
        material: Option<Material>,
    ) {
        match material {
            Some(material) => {
                let _ = self.slots.insert((component, slot), material);
            }
            None => {
                let _ = self.slots.remove(&(component, slot));
            }
        }
    }
}
