use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
