use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end a run. There is no recovery from any of these;
/// `main` reports the error and exits.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    UnknownCode {
        code: String,
        row: usize,
        col: usize,
    },
    ExternalTool(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::UnknownCode { code, row, col } => write!(
                f,
                "Unknown board code {:?} at row {}, column {}",
                code, row, col
            ),
            Error::ExternalTool(msg) => write!(f, "{}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}
