//! Lifting foreign errors into the domain [`Error`]
//!
//! Config loading and saving touch figment, toml and the filesystem; each
//! failure is reported with a short description of the step that failed.

use std::fmt::Display;

use interject_domain::{Error, Result};

/// Which domain variant a foreign error lands in
#[derive(Debug, Clone, Copy)]
enum Origin {
    Infrastructure,
    Io,
    Configuration,
}

impl Origin {
    fn lift<E>(self, step: impl Display, err: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = format!("{step}: {err}");
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = Some(Box::new(err));
        match self {
            Self::Infrastructure => Error::Infrastructure { message, source },
            Self::Io => Error::Io { message, source },
            Self::Configuration => Error::Configuration { message, source },
        }
    }
}

/// Attach the failing step to a foreign `Result`
pub trait ErrorContext<T>: Sized {
    /// Report as an infrastructure failure
    fn context(self, step: impl Display) -> Result<T>;

    /// Like [`context`](Self::context), building the description only on failure
    fn with_context<D: Display>(self, step: impl FnOnce() -> D) -> Result<T>;

    /// Report as a filesystem failure
    fn io_context(self, step: impl Display) -> Result<T>;

    /// Report as a configuration failure
    fn config_context(self, step: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, step: impl Display) -> Result<T> {
        self.map_err(|err| Origin::Infrastructure.lift(step, err))
    }

    fn with_context<D: Display>(self, step: impl FnOnce() -> D) -> Result<T> {
        self.map_err(|err| Origin::Infrastructure.lift(step(), err))
    }

    fn io_context(self, step: impl Display) -> Result<T> {
        self.map_err(|err| Origin::Io.lift(step, err))
    }

    fn config_context(self, step: impl Display) -> Result<T> {
        self.map_err(|err| Origin::Configuration.lift(step, err))
    }
}
