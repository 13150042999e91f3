// src/entity/project.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Finished => write!(f, "finished"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" | "done" => Ok(ProjectStatus::Finished),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

/// Headcount as shown on a board card, e.g. "1 person" or "3 persons".
pub fn persons_label(people: u32) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{} persons", people)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// New projects always start out active.
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            people,
            status: ProjectStatus::default(),
            created_at: Utc::now(),
        }
    }

    pub fn persons_label(&self) -> String {
        persons_label(self.people)
    }

    /// First seven characters of the id, enough to tell cards apart.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(7) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}
