use std::fmt;
use std::path::PathBuf;

/// Failures surfaced by the edge pipeline and its tooling.
///
/// Only I/O boundaries fail. A flat magnitude field is not an error; it is
/// reported through [`crate::edges::Normalized::degenerate`].
#[derive(Debug)]
pub enum Error {
    /// Input path does not resolve to a decodable image.
    Load { path: PathBuf, message: String },
    /// An output raster could not be encoded or written.
    Save { path: PathBuf, message: String },
    /// Tool configuration could not be read or parsed.
    Config { path: PathBuf, message: String },
    /// A JSON report could not be serialized or written.
    Serialize { path: PathBuf, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load { path, message } => {
                write!(f, "Could not load image from {}: {message}", path.display())
            }
            Error::Save { path, message } => {
                write!(f, "Failed to save {}: {message}", path.display())
            }
            Error::Config { path, message } => {
                write!(f, "Invalid config {}: {message}", path.display())
            }
            Error::Serialize { path, message } => {
                write!(f, "Failed to write JSON {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    use std::path::PathBuf;

    #[test]
    fn load_error_mentions_path() {
        let err = Error::Load {
            path: PathBuf::from("images/missing.jpg"),
            message: "No such file or directory".into(),
        };
        let text = err.to_string();
        assert!(text.contains("images/missing.jpg"), "got {text}");
        assert!(text.starts_with("Could not load image"), "got {text}");
    }
}
