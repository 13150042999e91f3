pub mod board;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod state;
pub mod validation;
pub mod views;

pub use board::Board;
pub use config::BoardConfig;
pub use entity::{Project, ProjectStatus};
pub use error::{BoardError, Result};
pub use state::ProjectStore;
pub use validation::{validate, Constraints, FieldValue, Validatable};
