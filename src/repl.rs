use std::process::ExitCode;

use frontend::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse_source,
};
use owo_colors::OwoColorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

const PROMPT: &str = ">> ";
const EXIT: &str = "exit";

pub struct Options {
    pub tokens: bool,
    pub debug_ast: bool,
}

pub fn start(options: Options) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("{}: {}", "REPL Error".red().bold(), error);
            return ExitCode::FAILURE;
        }
    };

    println!("Type an expression or statement, `{}` to leave.", EXIT);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{}: {}", "REPL Error".red().bold(), error);
                return ExitCode::FAILURE;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == EXIT {
            break;
        }

        if let Err(error) = editor.add_history_entry(input) {
            debug!(%error, "could not record history entry");
        }

        if options.tokens {
            print_tokens(input);
        } else {
            print_program(input, options.debug_ast);
        }
    }

    println!("Bye!");
    ExitCode::SUCCESS
}

fn print_tokens(input: &str) {
    let mut lexer = Lexer::new(input, None);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            break;
        }
        println!("{}", token);
    }
}

fn print_program(input: &str, debug_ast: bool) {
    let (program, diagnostics) = parse_source(input, None);

    if !diagnostics.is_empty() {
        println!("{}", "parser errors:".red().bold());
        for message in diagnostics.messages() {
            println!("\t{}", message);
        }
        return;
    }

    if debug_ast {
        println!("{:#?}", program);
    } else {
        for stmt in program.iter() {
            println!("{}", stmt);
        }
    }
}
