use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{debug, LevelFilter};
use zeek::{lexer::lexer::tokenize, run_source};

/// Tokenizes and parses a Zeek source file.
#[derive(Debug, Parser)]
#[command(name = "zeek", version)]
struct App {
    /// The `.zl` file to read
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Log level, overrides `RUST_LOG`
    #[arg(long)]
    log: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let app = App::parse();
    init_logging(app.log);
    debug!("starting zeek with args {app:?}");

    if app.file.extension().and_then(|ext| ext.to_str()) != Some("zl") {
        eprintln!("file extension must end with \".zl\"!");
        return ExitCode::FAILURE;
    }

    let file_contents = match read_to_string(&app.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("could not read {}: {}", app.file.display(), error);
            return ExitCode::FAILURE;
        }
    };
    let tag = app.file.to_string_lossy().to_string();

    let start = Instant::now();

    if app.tokens {
        return match tokenize(&file_contents, Some(tag.clone())) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{} [{}]", token, token.span.start);
                }
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", error.to_diagnostic(&tag, &file_contents));
                ExitCode::FAILURE
            }
        };
    }

    match run_source(&tag, &file_contents) {
        Ok(program) => {
            println!("{:#?}", program);
            debug!("total time: {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(diagnostic) => {
            eprintln!("{}", diagnostic);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}
