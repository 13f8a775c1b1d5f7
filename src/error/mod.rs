mod metadata;

pub use metadata::{MevnErrorCode, MevnErrorMetadata, MevnErrorSuggestion};

pub type MevnResult<T> = std::result::Result<T, MevnError>;

use calm_io::stderr;
use mevn_std::Style;

use std::borrow::BorrowMut;
use std::fmt::{self, Debug, Display};
use std::io;

/// A specialized `Error` type for mevn that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct MevnError {
    error: anyhow::Error,
    metadata: MevnErrorMetadata,
}

impl MevnError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = MevnErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn suggestion(&self) -> Option<&MevnErrorSuggestion> {
        self.metadata.suggestion.as_ref()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<MevnErrorCode> {
        self.metadata.code.clone()
    }

    /// Borrows the wrapped error as a concrete type, if it is one
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }
}

impl Display for MevnError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        if self.metadata.skip_printing_cause {
            writeln!(formatter, "{} {}", error_descriptor, &self.error)?;
        } else {
            writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;
        }

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for MevnError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
