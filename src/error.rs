use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid input, please try again! (check: {})", fields.join(", "))]
    InvalidInput { fields: Vec<String> },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Ambiguous project reference '{0}'. Use more characters of the id.")]
    AmbiguousReference(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
