use std::rc::Rc;

use crate::config::BoardConfig;
use crate::entity::{Project, ProjectStatus};
use crate::error::{BoardError, Result};
use crate::state::ProjectStore;
use crate::views::{Component, ProjectInput, ProjectList};

/// One store, one input form, and a list per status.
pub struct Board {
    store: Rc<ProjectStore>,
    pub input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(Rc::clone(&store), config.rules.clone());
        let active = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        let finished = ProjectList::new(ProjectStatus::Finished, Rc::clone(&store));

        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Fill the form and submit it. Returns the new project's id.
    pub fn submit(&mut self, title: &str, description: &str, people: &str) -> Result<String> {
        self.input.fill(title, description, people);
        self.input.submit()
    }

    /// Drag the card for `id` from the list it sits on to the `target` list.
    /// Returns false when the card already is on that list.
    pub fn drag_project(&self, id: &str, target: ProjectStatus) -> Result<bool> {
        let item = ProjectStatus::ALL
            .iter()
            .find_map(|status| self.list(*status).item(id))
            .ok_or_else(|| BoardError::ProjectNotFound(id.to_string()))?;

        Ok(item.drag_to(self.list(target)))
    }

    /// Find a project by 1-based board position or by id prefix.
    pub fn resolve(&self, reference: &str) -> Result<Project> {
        find_by_reference(&self.store.projects(), reference)
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.store.projects()
    }
}

fn find_by_reference(projects: &[Project], reference: &str) -> Result<Project> {
    let reference = reference.trim();

    // Positions win over id prefixes made of digits only.
    if let Some(project) = reference
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|i| projects.get(i))
    {
        return Ok(project.clone());
    }

    if reference.is_empty() {
        return Err(BoardError::ProjectNotFound(reference.to_string()));
    }

    let mut matches = projects.iter().filter(|p| p.id.starts_with(reference));
    match (matches.next(), matches.next()) {
        (Some(project), None) => Ok(project.clone()),
        (Some(_), Some(_)) => Err(BoardError::AmbiguousReference(reference.to_string())),
        (None, _) => Err(BoardError::ProjectNotFound(reference.to_string())),
    }
}

impl Component for Board {
    fn render(&self) -> String {
        format!("{}\n{}", self.active.render(), self.finished.render())
    }
}
