use std::cell::RefCell;
use std::ops::RangeInclusive;

use crate::entity::{Project, ProjectStatus};

use super::listeners::{ListenerId, Listeners};

/// Headcounts the input form accepts. The store only warns outside of it.
pub const HEADCOUNT_RANGE: RangeInclusive<u32> = 1..=5;

/// The single source of truth for projects on a board.
///
/// Share one instance as `Rc<ProjectStore>`. Reads go through snapshots,
/// writes through [`ProjectStore::add_project`] and
/// [`ProjectStore::move_project`]; every change is pushed to all listeners.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: Listeners<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future change. It is not called now.
    pub fn add_listener(&self, listener: impl Fn(Vec<Project>) + 'static) -> ListenerId {
        let id = self.listeners.add(listener);
        tracing::debug!(?id, total = self.listeners.len(), "listener registered");
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Append a new active project and notify listeners. Returns its id.
    ///
    /// Input is not validated here; that is the form's job.
    pub fn add_project(&self, title: &str, description: &str, people: u32) -> String {
        if !HEADCOUNT_RANGE.contains(&people) {
            tracing::warn!(
                people,
                "headcount outside {}..={}, storing as given",
                HEADCOUNT_RANGE.start(),
                HEADCOUNT_RANGE.end()
            );
        }

        let project = Project::new(title.to_string(), description.to_string(), people);
        let id = project.id.clone();
        tracing::debug!(id = %id, title = %project.title, "project added");

        self.projects.borrow_mut().push(project);
        self.update_listeners();
        id
    }

    /// Change a project's status. Returns false, without notifying anyone,
    /// when the id is unknown or the project already has that status.
    pub fn move_project(&self, id: &str, new_status: ProjectStatus) -> bool {
        let moved = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| p.id == id) {
                Some(project) if project.status != new_status => {
                    tracing::debug!(id, from = %project.status, to = %new_status, "project moved");
                    project.status = new_status;
                    true
                }
                Some(_) => {
                    tracing::trace!(id, status = %new_status, "project already in place");
                    false
                }
                None => {
                    tracing::trace!(id, "move ignored, no such project");
                    false
                }
            }
        };

        if moved {
            self.update_listeners();
        }
        moved
    }

    /// Copy of every project in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Project> {
        self.projects.borrow().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&self) {
        self.listeners.notify(|| self.projects());
    }
}
