use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use interpreter::{
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Tokenize and parse a source file", long_about = None)]
struct Args {
    /// Source file to read; standard input is used when omitted
    input: Option<PathBuf>,

    /// Print the token stream instead of the parsed program
    #[arg(short, long)]
    tokens: bool,
}

fn read_source(input: &Option<PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let file_name = args
        .input
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("<stdin>"));

    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", file_name, err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if args.tokens {
        for token in tokenize(source) {
            if token.kind != TokenKind::EOF {
                println!("{}", token);
            }
        }
        log::info!("Tokenized in {:?}", start.elapsed());
        return ExitCode::SUCCESS;
    }

    let (program, errors) = parse(source);
    log::info!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            display_error(error, &file_name);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn display_error(error: &Error, file_name: &str) {
    /*
        Error: UnexpectedToken (Unexpected token: `=`, expected Identifier)
        -> main.src
           | expected next token to be Identifier, got Assignment instead
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file_name);
    eprintln!("   | {}", error);
}
