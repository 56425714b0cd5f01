use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Rat25F compiler", long_about = None)]
pub struct Args {
    /// Stop after lexing and print the tokens
    #[arg(long)]
    pub lex: bool,

    /// Leave the syntax analysis trace out of the report
    #[arg(long)]
    pub no_trace: bool,

    /// Print reports instead of writing them to files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Report file (defaults to <INPUT>.out, single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}
