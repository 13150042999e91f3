use crate::entity::Project;

use super::drag::{DataTransfer, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
use super::Component;

/// A single card on a project list.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    /// 1-based position on the board, in creation order.
    pub position: usize,
    pub project: Project,
}

impl ProjectItem {
    pub fn new(position: usize, project: Project) -> Self {
        Self { position, project }
    }

    /// Drag this card onto `target`: start, hover, drop, end.
    /// Returns true when the target accepted the card and changed something.
    pub fn drag_to(&self, target: &impl DragTarget) -> bool {
        let mut transfer = DataTransfer::new();
        self.drag_start(&mut transfer);

        let moved = if target.drag_over(&transfer) {
            let moved = target.drop_payload(&transfer);
            target.drag_leave();
            moved
        } else {
            target.drag_leave();
            false
        };

        self.drag_end(&transfer);
        moved
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, &self.project.id);
        transfer.effect_allowed = DropEffect::Move;
    }

    fn drag_end(&self, _transfer: &DataTransfer) {
        tracing::debug!(id = %self.project.id, "drag end");
    }
}

impl Component for ProjectItem {
    fn render(&self) -> String {
        format!(
            "  {:>3}. {} ({})\n       {} assigned\n       {}\n",
            self.position,
            self.project.title,
            self.project.short_id(),
            self.project.persons_label(),
            self.project.description
        )
    }
}
