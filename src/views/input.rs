use std::rc::Rc;

use crate::config::FieldRules;
use crate::error::{BoardError, Result};
use crate::state::ProjectStore;
use crate::validation::{FieldValue, Validatable};

use super::Component;

/// Validated form values, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// The "new project" form.
pub struct ProjectInput {
    store: Rc<ProjectStore>,
    rules: FieldRules,
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectStore>, rules: FieldRules) -> Self {
        Self {
            store,
            rules,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    /// Fill all three fields at once, as typed.
    pub fn fill(&mut self, title: &str, description: &str, people: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
        self.people = people.to_string();
    }

    /// Validate the current field values.
    ///
    /// Each field is checked in full so the error names every bad field.
    /// The headcount must be a whole number; anything else is rejected
    /// rather than coerced.
    pub fn gather_input(&self) -> Result<ProjectDraft> {
        let mut fields = Vec::new();

        let title = Validatable::new(self.title.as_str(), self.rules.title.clone());
        collect_violations("title", &title, &mut fields);

        let description =
            Validatable::new(self.description.as_str(), self.rules.description.clone());
        collect_violations("description", &description, &mut fields);

        let people_text = self.people.trim();
        let people = if people_text.is_empty() {
            let people = Validatable::new(people_text, self.rules.people.clone());
            collect_violations("people", &people, &mut fields);
            None
        } else {
            match people_text.parse::<i64>() {
                Ok(n) => {
                    let people = Validatable::new(FieldValue::Number(n), self.rules.people.clone());
                    collect_violations("people", &people, &mut fields);
                    u32::try_from(n).ok()
                }
                Err(_) => {
                    fields.push(format!("people: '{}' is not a whole number", people_text));
                    None
                }
            }
        };

        let Some(people) = people else {
            if !fields.iter().any(|f| f.starts_with("people")) {
                // A card cannot exist without a headcount, whatever the rules say.
                let reason = if people_text.is_empty() {
                    "a headcount is needed".to_string()
                } else {
                    format!("'{}' is out of range", people_text)
                };
                fields.push(format!("people: {}", reason));
            }
            return Err(BoardError::InvalidInput { fields });
        };

        if !fields.is_empty() {
            return Err(BoardError::InvalidInput { fields });
        }

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Validate, add the project to the store and clear the form.
    /// On invalid input the store and the fields are left untouched.
    pub fn submit(&mut self) -> Result<String> {
        let draft = match self.gather_input() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::info!(error = %e, "form submission rejected");
                return Err(e);
            }
        };

        let id = self
            .store
            .add_project(&draft.title, &draft.description, draft.people);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

fn collect_violations(field: &str, input: &Validatable, fields: &mut Vec<String>) {
    for violation in input.violations() {
        fields.push(format!("{}: {}", field, violation));
    }
}

impl Component for ProjectInput {
    fn render(&self) -> String {
        format!(
            "Title:       {}\nDescription: {}\nPeople:      {}\n",
            self.title, self.description, self.people
        )
    }
}
