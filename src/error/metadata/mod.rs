mod code;
mod suggestion;

pub use code::MevnErrorCode;
pub use suggestion::MevnErrorSuggestion;

use camino::Utf8Path;
use mevn_std::MevnStdError;

use crate::command::init::{CONFIG_FILE_NAME, InitError};

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Debug)]
pub struct MevnErrorMetadata {
    pub suggestion: Option<MevnErrorSuggestion>,
    pub code: Option<MevnErrorCode>,
    pub skip_printing_cause: bool,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for MevnErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(init_error) = error.downcast_ref::<InitError>() {
            let (suggestion, code) = match init_error {
                InitError::StrayArguments { .. } => (
                    Some(MevnErrorSuggestion::SingleProjectName),
                    Some(MevnErrorCode::E001),
                ),
                InitError::InvalidName { .. } => (
                    Some(MevnErrorSuggestion::FollowNamingRules),
                    Some(MevnErrorCode::E002),
                ),
                InitError::DirectoryExists { path } => (
                    Some(MevnErrorSuggestion::ChooseAnotherName { path: path.clone() }),
                    Some(MevnErrorCode::E003),
                ),
                InitError::GitNotFound { .. } => {
                    (Some(MevnErrorSuggestion::InstallGit), Some(MevnErrorCode::E004))
                }
                InitError::CloneFailed { .. } => (
                    Some(MevnErrorSuggestion::CheckNetworkConnection),
                    Some(MevnErrorCode::E005),
                ),
                InitError::ModeLineNotFound { .. } => (
                    Some(MevnErrorSuggestion::SetRenderingModeManually),
                    Some(MevnErrorCode::E006),
                ),
                InitError::NothingSelected { .. } => (None, Some(MevnErrorCode::E007)),
                InitError::GitCommandFailed { .. } => (None, Some(MevnErrorCode::E008)),
                InitError::InvalidConfig { .. } => (
                    Some(MevnErrorSuggestion::RestoreProjectConfig),
                    Some(MevnErrorCode::E009),
                ),
            };
            // config parse failures carry a serde cause worth showing, the rest read fine alone
            let skip_printing_cause = !matches!(init_error, InitError::InvalidConfig { .. });
            return MevnErrorMetadata {
                suggestion,
                code,
                skip_printing_cause,
            };
        }

        if let Some(MevnStdError::EmptyFile { empty_file }) = error.downcast_ref::<MevnStdError>()
            && Utf8Path::new(empty_file).file_name() == Some(CONFIG_FILE_NAME)
        {
            return MevnErrorMetadata {
                suggestion: Some(MevnErrorSuggestion::RestoreProjectConfig),
                code: None,
                skip_printing_cause: true,
            };
        }

        MevnErrorMetadata::default()
    }
}
