//! Drag-and-drop plumbing between project cards and project lists.

/// Payload type used for project ids.
pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
}

/// Data carried by a drag gesture, keyed by payload type.
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any earlier data of the same type.
    pub fn set_data(&mut self, format: &str, data: &str) {
        if let Some(entry) = self.items.iter_mut().find(|(f, _)| f == format) {
            entry.1 = data.to_string();
        } else {
            self.items.push((format.to_string(), data.to_string()));
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.as_str())
    }

    /// Payload types in the order they were set.
    pub fn types(&self) -> Vec<&str> {
        self.items.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// Something that can be picked up and dragged.
pub trait Draggable {
    fn drag_start(&self, transfer: &mut DataTransfer);
    fn drag_end(&self, transfer: &DataTransfer);
}

/// Something a dragged card can be dropped on.
pub trait DragTarget {
    /// Returns true when the target accepts the payload.
    fn drag_over(&self, transfer: &DataTransfer) -> bool;
    fn drag_leave(&self);
    /// Returns true when the drop changed anything.
    fn drop_payload(&self, transfer: &DataTransfer) -> bool;
}
