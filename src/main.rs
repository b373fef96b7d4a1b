use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use cminus_scanner::{
    errors::errors::{Error, ErrorImpl},
    scanner::{scanner::Scanner, tokens::TokenKind},
    ScanConfig,
};

/// Scans a C-Minus source file and reports the token stream.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Source file to scan
    file: PathBuf,

    /// Echo each source line to the listing as it is read
    #[arg(long)]
    echo_source: bool,

    /// Print each token to the listing as it is produced
    #[arg(long)]
    trace_scan: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(err) => {
            let error = Error::new(
                ErrorImpl::SourceOpen {
                    path: args.file.display().to_string(),
                    message: err.to_string(),
                },
                1,
            );
            eprintln!("Error: {} ({})", error.get_error_name(), error);
            return ExitCode::FAILURE;
        }
    };

    let config = ScanConfig {
        echo_source: args.echo_source,
        trace_scan: args.trace_scan,
        ..ScanConfig::default()
    };

    let start = Instant::now();
    let mut scanner = Scanner::new(BufReader::new(file), config);

    let mut token_count = 0usize;
    let mut error_count = 0usize;
    loop {
        match scanner.next_token() {
            Ok(token) => {
                if token.kind == TokenKind::EndOfFile {
                    break;
                }
                if token.kind == TokenKind::Error {
                    error_count += 1;
                }
                token_count += 1;
            }
            Err(err) => {
                eprintln!("Error: {} ({})", err.get_error_name(), err);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Scanned {} tokens in {:?}", token_count, start.elapsed());

    if error_count > 0 {
        println!("{} lexical errors found", error_count);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
