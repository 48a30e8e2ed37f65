pub mod walk;


pub use walk::{
    cause_of, causes, file_of, for_each_cause, has_cause, line_of, one_cause_of, site_of, Causes,
};

use crate::site::Site;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// any error value this crate accepts as a cause
pub type AnyError = dyn std::error::Error + Send + Sync + 'static;

/// A shared handle over any error value.
///
/// Causes are stored behind `Arc` so a caller can chain over an error and
/// still keep a handle to it. Clones of one `Cause` are the same error;
/// two errors built separately are not, whatever their texts.
pub type Cause = Arc<AnyError>;

pub type Result<T> = std::result::Result<T, Error>;

/// An error carrying a message, an optional cause and the call site it was
/// built at. The cause is set once at construction and never changes.
#[derive(Debug)]
pub struct Error {
    text: String,
    cause: Option<Cause>,
    site: Site,
}

/// builds an error from the given text.
///
/// every call builds a distinct error, even from the same text
#[must_use]
#[track_caller]
pub fn err<T: Into<String>>(text: T) -> Error {
    Error::new(text.into(), None)
}

/// builds an error from the given text, chained over its cause.
///
/// keep a clone of the `Cause` around to find it again later with
/// [`one_cause_of`]
#[must_use]
#[track_caller]
pub fn err_with<T: Into<String>>(text: T, cause: Cause) -> Error {
    Error::new(text.into(), Some(cause))
}

impl Error {
    #[track_caller]
    fn new(text: String, cause: Option<Cause>) -> Self {
        Error {
            text,
            cause,
            site: Site::capture(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// the cause this error was chained over, exactly as given at
    /// construction
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// the site this error was built at, not an ancestor's
    #[must_use]
    pub fn site(&self) -> Site {
        self.site
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<Error> for Cause {
    fn from(error: Error) -> Self {
        Arc::new(error)
    }
}
