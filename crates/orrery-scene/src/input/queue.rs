use crate::api::types::RegionName;

/// Pointer events a host delivers for region groups.
/// Neither carries a payload beyond the region it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The pointer entered a region's group.
    PointerEnter { region: RegionName },
    /// The pointer left a region's group.
    PointerLeave { region: RegionName },
}

impl InputEvent {
    pub fn region(&self) -> RegionName {
        match *self {
            InputEvent::PointerEnter { region } | InputEvent::PointerLeave { region } => region,
        }
    }
}

/// Hover events waiting for the next render.
///
/// The bridge pushes one event per pointer enter/leave on a region group;
/// `Scene::apply_input` drains them in arrival order, so when a region gets
/// several events between renders the last one decides its flag.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take every pending event, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
