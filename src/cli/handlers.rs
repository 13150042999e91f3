use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::rc::Rc;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::entity::persons_label;
use crate::error::{BoardError, Result};
use crate::state::ProjectStore;
use crate::views::{Component, ProjectInput};

use super::shell::Shell;

pub fn handle_shell(config: &BoardConfig) -> Result<()> {
    let mut shell = Shell::new(Board::new(config));

    // Only prompt when a person is typing
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("projboard {} - type 'help' for commands", env!("CARGO_PKG_VERSION"));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    shell.run(
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        interactive,
        false,
    )?;

    if interactive {
        println!();
    }
    Ok(())
}

pub fn handle_run(
    config: &BoardConfig,
    script: &Path,
    json: bool,
    echo: bool,
    strict: bool,
) -> Result<()> {
    let file = File::open(script).map_err(|e| {
        BoardError::Io(io::Error::new(
            e.kind(),
            format!("cannot open script {}: {}", script.display(), e),
        ))
    })?;

    let mut shell = Shell::new(Board::new(config));
    let stderr = io::stderr();
    let mut out: Box<dyn Write> = if echo {
        Box::new(io::stdout().lock())
    } else {
        Box::new(io::sink())
    };
    let failures = shell.run(
        BufReader::new(file),
        &mut out,
        &mut stderr.lock(),
        false,
        strict,
    )?;

    if failures > 0 {
        tracing::warn!(failures, "some script commands failed");
    }

    drop(out);

    let board = shell.board();
    if json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    } else {
        print!("{}", board.render());
    }

    Ok(())
}

pub fn handle_check(
    config: &BoardConfig,
    title: String,
    description: String,
    people: String,
    json: bool,
) -> Result<()> {
    let store = Rc::new(ProjectStore::new());
    let mut input = ProjectInput::new(store, config.rules.clone());
    input.fill(&title, &description, &people);

    let result = input.gather_input();

    if json {
        #[derive(serde::Serialize)]
        struct CheckResultJson {
            valid: bool,
            errors: Vec<String>,
        }

        let errors = match &result {
            Ok(_) => Vec::new(),
            Err(BoardError::InvalidInput { fields }) => fields.clone(),
            Err(e) => vec![e.to_string()],
        };
        let report = CheckResultJson {
            valid: result.is_ok(),
            errors,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Ok(draft) = &result {
        println!(
            "Valid: {} - {} ({} assigned)",
            draft.title,
            draft.description,
            persons_label(draft.people)
        );
    }

    result.map(|_| ())
}
