use std::cell::RefCell;
use std::rc::Rc;

use crate::entity::{Project, ProjectStatus};
use crate::state::{ListenerId, ProjectStore};

use super::drag::{DataTransfer, DragTarget, TEXT_PLAIN};
use super::item::ProjectItem;
use super::Component;

#[derive(Debug, Default)]
struct ListState {
    items: Vec<ProjectItem>,
    droppable: bool,
    renders: usize,
}

/// One column of the board, showing the projects of a single status.
pub struct ProjectList {
    category: ProjectStatus,
    store: Rc<ProjectStore>,
    state: Rc<RefCell<ListState>>,
    listener: ListenerId,
}

impl ProjectList {
    /// Subscribes to `store` right away; the list fills on the next change.
    pub fn new(category: ProjectStatus, store: Rc<ProjectStore>) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));

        let listener = {
            let state = Rc::clone(&state);
            store.add_listener(move |projects: Vec<Project>| {
                let items = assigned_items(category, projects);
                let mut state = state.borrow_mut();
                tracing::trace!(%category, count = items.len(), "list re-rendered");
                state.items = items;
                state.renders += 1;
            })
        };

        Self {
            category,
            store,
            state,
            listener,
        }
    }

    pub fn category(&self) -> ProjectStatus {
        self.category
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.category.to_string().to_uppercase())
    }

    /// Projects currently shown, in board order.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.state
            .borrow()
            .items
            .iter()
            .map(|item| item.project.clone())
            .collect()
    }

    pub fn item(&self, id: &str) -> Option<ProjectItem> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.project.id == id)
            .cloned()
    }

    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    /// How many times the listener has rebuilt this list.
    pub fn render_count(&self) -> usize {
        self.state.borrow().renders
    }
}

fn assigned_items(category: ProjectStatus, projects: Vec<Project>) -> Vec<ProjectItem> {
    projects
        .into_iter()
        .enumerate()
        .filter(|(_, p)| p.status == category)
        .map(|(i, p)| ProjectItem::new(i + 1, p))
        .collect()
}

impl DragTarget for ProjectList {
    fn drag_over(&self, transfer: &DataTransfer) -> bool {
        let accepts = transfer.types().first() == Some(&TEXT_PLAIN);
        if accepts {
            self.state.borrow_mut().droppable = true;
        }
        accepts
    }

    fn drag_leave(&self) {
        self.state.borrow_mut().droppable = false;
    }

    fn drop_payload(&self, transfer: &DataTransfer) -> bool {
        match transfer.get_data(TEXT_PLAIN) {
            Some(id) => self.store.move_project(id, self.category),
            None => false,
        }
    }
}

impl Component for ProjectList {
    fn render(&self) -> String {
        let state = self.state.borrow();
        let mut out = self.heading();
        if state.droppable {
            out.push_str("  <- drop here");
        }
        out.push('\n');

        if state.items.is_empty() {
            out.push_str("  (no projects)\n");
        }
        for item in &state.items {
            out.push_str(&item.render());
        }
        out
    }
}

impl Drop for ProjectList {
    fn drop(&mut self) {
        self.store.remove_listener(self.listener);
    }
}
