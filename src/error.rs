use thiserror::Error;

/// Errors raised while invoking the container runtime.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Docker is not installed or not in PATH")]
    NotInstalled,

    #[error("failed to spawn `docker {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`docker {command}` failed: {message}")]
    Invocation { command: String, message: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
