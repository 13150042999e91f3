//! Text views over a shared [`ProjectStore`](crate::state::ProjectStore).
//!
//! Views never own projects. Lists subscribe to the store and keep the
//! snapshots they are handed; the form and drag targets write back through
//! the store's mutation methods.

mod drag;
mod input;
mod item;
mod list;

pub use drag::{DataTransfer, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
pub use input::{ProjectDraft, ProjectInput};
pub use item::ProjectItem;
pub use list::ProjectList;

/// Anything that renders itself as terminal text.
pub trait Component {
    fn render(&self) -> String;
}
