use clap::Parser;
use tresor::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Register {
            ref first_name,
            ref last_name,
        } => tresor::cli::commands::register::execute(
            &cli,
            first_name.as_deref(),
            last_name.as_deref(),
        ),
        Commands::Add { ref kind } => tresor::cli::commands::add::execute(&cli, kind),
        Commands::List => tresor::cli::commands::list::execute(&cli),
        Commands::Version => tresor::cli::commands::version::execute(),
        Commands::Completions { ref shell } => tresor::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tresor::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
