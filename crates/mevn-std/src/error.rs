use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MevnStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// This error is thrown when there is an empty file
    #[error("\"{empty_file}\" is an empty file.")]
    EmptyFile {
        /// The empty file path
        empty_file: String,
    },

    /// This error is thrown when a directory was expected but something else was found
    #[error("\"{path}\" is not a directory.")]
    NotADirectory { path: Utf8PathBuf },
}
