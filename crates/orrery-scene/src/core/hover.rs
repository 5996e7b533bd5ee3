use std::collections::HashMap;

use crate::api::types::RegionName;
use crate::input::queue::InputEvent;

/// Per-region hover flags. Unset reads as `false`.
///
/// Owned by the scene; only enter/leave change it, and each write simply
/// overwrites the region's flag, so repeated events are harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    flags: HashMap<RegionName, bool>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered `region`. Returns whether the flag changed.
    pub fn enter(&mut self, region: RegionName) -> bool {
        self.set(region, true)
    }

    /// Pointer left `region`. Returns whether the flag changed.
    pub fn leave(&mut self, region: RegionName) -> bool {
        self.set(region, false)
    }

    fn set(&mut self, region: RegionName, hovered: bool) -> bool {
        let previous = self.flags.insert(region, hovered).unwrap_or(false);
        previous != hovered
    }

    /// Apply one input event. Returns whether any flag changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerEnter { region } => self.enter(region),
            InputEvent::PointerLeave { region } => self.leave(region),
        }
    }

    pub fn is_hovered(&self, region: RegionName) -> bool {
        self.flags.get(&region).copied().unwrap_or(false)
    }

    /// Regions currently hovered, innermost first.
    pub fn hovered(&self) -> Vec<RegionName> {
        RegionName::ALL
            .into_iter()
            .filter(|r| self.is_hovered(*r))
            .collect()
    }

    /// Forget every flag, as on page reload.
    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
