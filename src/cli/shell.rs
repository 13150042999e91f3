use std::io::{BufRead, Write};

use crate::board::Board;
use crate::entity::{Project, ProjectStatus};
use crate::error::{BoardError, Result};
use crate::views::Component;

pub const HELP: &str = "\
Commands:
  add <title> | <description> | <people>   Submit a new project
  move <ref> <active|finished>             Drag a project onto a list
  list [active|finished] [--json]          Show projects
  board                                    Show both lists
  help                                     Show this help
  quit                                     Leave the session

<ref> is a board position (1, 2, ...) or the start of a project id.
";

/// One line of board input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        reference: String,
        status: ProjectStatus,
    },
    List {
        status: Option<ProjectStatus>,
        json: bool,
    },
    Board,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "add" => {
                // Missing parts stay empty and fail validation like blank fields.
                let mut parts = rest.splitn(3, '|').map(str::trim);
                ShellCommand::Add {
                    title: parts.next().unwrap_or_default().to_string(),
                    description: parts.next().unwrap_or_default().to_string(),
                    people: parts.next().unwrap_or_default().to_string(),
                }
            }
            "move" | "mv" => {
                let mut args = rest.split_whitespace();
                let (Some(reference), Some(status), None) = (args.next(), args.next(), args.next())
                else {
                    return Err(BoardError::UnknownCommand(format!(
                        "'{}' (expected 'move <ref> <active|finished>')",
                        line
                    )));
                };
                ShellCommand::Move {
                    reference: reference.to_string(),
                    status: parse_status(status)?,
                }
            }
            "list" | "ls" => {
                let mut status = None;
                let mut json = false;
                for arg in rest.split_whitespace() {
                    if arg == "--json" {
                        json = true;
                    } else {
                        status = Some(parse_status(arg)?);
                    }
                }
                ShellCommand::List { status, json }
            }
            "board" | "show" => ShellCommand::Board,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            _ => return Err(BoardError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A board plus the text front end that drives it.
pub struct Shell {
    board: Board,
}

impl Shell {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow> {
        match command {
            ShellCommand::Add {
                title,
                description,
                people,
            } => {
                let id = self.board.submit(&title, &description, &people)?;
                let project = self.board.resolve(&id)?;
                writeln!(
                    out,
                    "Created project {:03} ({}) - {}",
                    self.board.snapshot().len(),
                    project.short_id(),
                    project.title
                )?;
            }
            ShellCommand::Move { reference, status } => {
                let project = self.board.resolve(&reference)?;
                let position = position_of(&self.board.snapshot(), &project.id);
                if self.board.drag_project(&project.id, status)? {
                    writeln!(
                        out,
                        "Moved project {:03} ({}) to {}",
                        position,
                        project.short_id(),
                        status
                    )?;
                } else {
                    writeln!(
                        out,
                        "Project {:03} ({}) is already {}",
                        position,
                        project.short_id(),
                        status
                    )?;
                }
            }
            ShellCommand::List { status, json } => {
                let projects: Vec<Project> = self
                    .board
                    .snapshot()
                    .into_iter()
                    .filter(|p| status.map_or(true, |s| p.status == s))
                    .collect();
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&projects)?)?;
                } else {
                    match status {
                        Some(status) => write!(out, "{}", self.board.list(status).render())?,
                        None => write!(out, "{}", self.board.render())?,
                    }
                }
            }
            ShellCommand::Board => write!(out, "{}", self.board.render())?,
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Parse and run one line.
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match ShellCommand::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    /// Run every line from `input`. Failing lines are reported on `err`.
    /// With `strict`, the first failure ends the run and is returned.
    /// Returns the number of failed lines.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
        prompt: bool,
        strict: bool,
    ) -> Result<usize> {
        let mut failures = 0;

        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if strict => return Err(e),
                Err(e) => {
                    failures += 1;
                    tracing::debug!(line = index + 1, error = %e, "command failed");
                    writeln!(err, "Error: {}", e)?;
                }
            }

            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }

        Ok(failures)
    }
}

fn parse_status(s: &str) -> Result<ProjectStatus> {
    s.parse()
        .map_err(|_| BoardError::InvalidStatus(format!("'{}' (expected active or finished)", s)))
}

fn position_of(projects: &[Project], id: &str) -> usize {
    projects
        .iter()
        .position(|p| p.id == id)
        .map_or(0, |i| i + 1)
}
