use std::path::PathBuf;

/// Alias for `Result<T, DjError>`.
pub type DjResult<T> = Result<T, DjError>;

/// Errors that can occur when loading or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum DjError {
    /// A content file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A content file was read but is not valid JSON for its schema.
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// The file that failed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The room list is empty, so no game can start.
    #[error("no rooms loaded")]
    NoRooms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = DjError::Io {
            path: PathBuf::from("donjon/world.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "absent"),
        };
        assert_eq!(err.to_string(), "cannot read donjon/world.json: absent");
        assert_eq!(DjError::NoRooms.to_string(), "no rooms loaded");
    }
}
