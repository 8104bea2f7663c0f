//! Command line driver for the front end.
//!
//! With a file argument the file is parsed and either the program or every
//! diagnostic is printed. Without one an interactive shell is started.

mod repl;

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as _;
use frontend::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse_source,
    render_error,
};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(clap::Parser, Debug)]
#[command(name = "frontend", version, about = "Parse scripts into an abstract syntax tree")]
struct Cli {
    /// Script to parse. Starts the interactive shell when omitted
    file: Option<PathBuf>,

    /// Print the scanned tokens instead of the parsed program
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program as a debug tree
    #[arg(long)]
    debug_ast: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.file {
        Some(path) => run_file(path, &cli),
        None => repl::start(repl::Options {
            tokens: cli.tokens,
            debug_ast: cli.debug_ast,
        }),
    }
}

fn run_file(path: &Path, cli: &Cli) -> ExitCode {
    let file_name = path.to_string_lossy().to_string();

    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: failed to read {}: {}", "Error".red().bold(), file_name, error);
            return ExitCode::FAILURE;
        }
    };

    if cli.tokens {
        let mut lexer = Lexer::new(source.as_str(), Some(file_name));
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EOF {
                break;
            }
            token.debug();
        }
        return ExitCode::SUCCESS;
    }

    let start = Instant::now();
    let (program, diagnostics) = parse_source(&source, Some(file_name.clone()));
    info!("Parsed in {:?}", start.elapsed());

    if !diagnostics.is_empty() {
        for error in &diagnostics {
            eprint!("{}", render_error(error, &source, &file_name));
        }
        eprintln!(
            "{}",
            format!("{} parser error(s) in {}", diagnostics.len(), file_name).red()
        );
        return ExitCode::FAILURE;
    }

    if cli.debug_ast {
        println!("{:#?}", program);
    } else {
        for stmt in program.iter() {
            println!("{}", stmt);
        }
    }

    ExitCode::SUCCESS
}
