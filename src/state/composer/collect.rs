//! Collect settings of the draft.

use crate::models::{CollectModule, CollectModuleType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectModuleStore {
    pub collect_module: CollectModule,
}

impl CollectModuleStore {
    pub fn set_type(&mut self, kind: Option<CollectModuleType>) {
        self.collect_module.kind = kind;
    }

    pub fn reset(&mut self) {
        self.collect_module = CollectModule::default();
    }
}
