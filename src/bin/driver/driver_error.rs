use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("file {0} does not exist")]
    InputFileDoesNotExist(String),
    #[error("--output needs exactly one input file")]
    AmbiguousOutput,
    #[error("report for {0} would overwrite the input file")]
    OutputWouldOverwriteInput(String),
    #[error("{0} of {1} file(s) failed to compile")]
    CompilationFailed(usize, usize),
}
