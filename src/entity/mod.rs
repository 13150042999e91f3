mod project;

pub use project::{persons_label, Project, ProjectStatus};
