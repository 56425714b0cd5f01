mod args;
mod driver_error;

use anyhow::Context;
use args::Args;
use clap::Parser;
use driver_error::DriverError;
use ratc::emission::Report;
use ratc::{lexer, parser};

use std::fs;
use std::path::{Path, PathBuf};

fn read_source(input: &Path) -> anyhow::Result<String> {
    if !input.exists() {
        let filename = input.to_string_lossy().to_string();
        return Err(DriverError::InputFileDoesNotExist(filename).into());
    }
    fs::read_to_string(input).with_context(|| format!("can't read {}", input.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    // a path that doesn't exist yet can't be the input
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn output_path(input: &Path, args: &Args) -> Result<PathBuf, DriverError> {
    let out = args
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("out"));
    if same_file(input, &out) {
        let filename = input.to_string_lossy().to_string();
        return Err(DriverError::OutputWouldOverwriteInput(filename));
    }
    Ok(out)
}

fn dump_tokens(tokens: &[lexer::Token]) {
    for token in tokens {
        println!("{:<15} {}", token.token_type(), token.lexeme());
    }
}

/// Writes `report` to `out`, or to stdout when there is no output file.
/// Tells whether the report describes a successful compilation.
fn emit(input: &Path, report: &Report, out: Option<&Path>) -> anyhow::Result<bool> {
    let status = if report.is_success() { "ok" } else { "error" };

    if let Some(out) = out {
        fs::write(out, report.to_string())
            .with_context(|| format!("can't write {}", out.display()))?;
        eprintln!("{status}: {} -> {}", input.display(), out.display());
    } else {
        print!("{report}");
        eprintln!("{status}: {}", input.display());
    }

    Ok(report.is_success())
}

fn lex_only(input: &Path, source: &str) -> bool {
    match lexer::lex(source) {
        Ok(tokens) => {
            dump_tokens(&tokens);
            true
        }
        Err(e) => {
            eprintln!("error: {}: {e}", input.display());
            false
        }
    }
}

fn compile_file(input: &Path, args: &Args) -> anyhow::Result<bool> {
    let source = read_source(input)?;

    if args.lex {
        return Ok(lex_only(input, &source));
    }

    let out = if args.stdout {
        None
    } else {
        Some(output_path(input, args)?)
    };
    let out = out.as_deref();

    let tokens = match lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            let report = Report::failure(ratc::Error::from(e));
            return emit(input, &report, out);
        }
    };

    let compilation = parser::parse(&tokens);
    let report = match &compilation {
        Ok(compilation) => Report::success(compilation),
        Err(e) => Report::failure(e),
    };
    emit(input, &report.with_trace(!args.no_trace), out)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.output.is_some() && args.inputs.len() > 1 {
        return Err(DriverError::AmbiguousOutput.into());
    }

    let mut failed = 0;
    for input in &args.inputs {
        if !compile_file(input, &args)? {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(DriverError::CompilationFailed(failed, args.inputs.len()).into());
    }
    Ok(())
}
