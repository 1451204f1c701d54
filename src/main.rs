use std::io;

use chrono::Local;
use clap::Parser;
use colored::Colorize;

use todolist::cli::args::{Cli, Commands};
use todolist::cli::commands;
use todolist::config::{Config, Paths};
use todolist::error::TodoError;
use todolist::logging;
use todolist::storage::TaskStore;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("{}: failed to initialize logging: {e}", "warning".yellow().bold());
    }

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        },
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(e.exit_code());
        },
    }
}

fn run(cli: Cli) -> Result<String, TodoError> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    // Connection problems and schema failures end the session here.
    let open_store = || -> Result<TaskStore, TodoError> {
        let settings = config.connection(&paths)?;
        TaskStore::open(&settings)
    };
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Completions { shell, install } => commands::completions(shell, install),
        Commands::Config(args) => commands::config(&config, &paths, &args.command, format),
        Commands::Init => commands::init(&open_store()?, format),
        Commands::Add(args) => commands::add(&open_store()?, &args, today, format),
        Commands::List => commands::list(&open_store()?, today, format),
        Commands::Show { id } => commands::show(&open_store()?, id, today, format),
        Commands::Update(args) => commands::update(&open_store()?, &args, format),
        Commands::Delete { id } => commands::delete(&open_store()?, id, format),
        Commands::Clear { yes } => {
            let store = open_store()?;
            commands::clear(&store, yes, &mut io::stdin().lock(), &mut io::stderr(), format)
        },
    }
}
