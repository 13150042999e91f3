use clap::Parser;
use projboard::cli::{handle_check, handle_run, handle_shell, Cli, Commands};
use projboard::{logging, BoardConfig};

fn main() {
    let cli = Cli::parse();

    let config = match BoardConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.log_filter);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => handle_shell(&config),
        Commands::Run {
            script,
            json,
            echo,
            strict,
        } => handle_run(&config, &script, json, echo, strict),
        Commands::Check {
            title,
            description,
            people,
            json,
        } => handle_check(&config, title, description, people, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
