use clap::{Parser, Subcommand};
use piglet::cli::{self, CliError, RenderOptions};
use piglet::inout::StorageTypes;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "piglet")]
#[command(about = "Piglet - render Pig Latin statements and expressions from JSON descriptions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON-described statement, expression, or array of them
    Render {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Extra storage function, as name=invocation (repeatable)
        #[arg(short, long, value_parser = parse_storage)]
        storage: Vec<(String, String)>,
    },

    /// List the built-in storage functions
    Storage,
}

fn parse_storage(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, invocation)) if !name.is_empty() && !invocation.is_empty() => {
            Ok((name.to_string(), invocation.to_string()))
        }
        _ => Err(format!("expected name=invocation, got '{arg}'")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PIGLET_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { input, storage } => run_render(input, storage),
        Commands::Storage => {
            print!("{}", cli::storage_overview(&StorageTypes::default()));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_render(input: Option<String>, storage: Vec<(String, String)>) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = RenderOptions { input, storage };

    for line in cli::execute_render(&options)? {
        println!("{}", line);
    }
    Ok(())
}
