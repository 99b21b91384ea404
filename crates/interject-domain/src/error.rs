//! Error handling types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Optional source carried by the message-bearing variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure injection, registration and dispatch can report
#[derive(Error, Debug)]
pub enum Error {
    /// An injected callback fired before a container was set up
    #[error("Container is not initialized, call setup first")]
    ContainerNotInitialized,

    /// Injection or registration was applied to a non-async callback
    #[error("Invalid target: {callback} must be an async callback")]
    InvalidTarget {
        /// Name of the rejected callback
        callback: String,
    },

    /// The callback already carries a command marker
    #[error("Already registered: {name} is already registered as a {kind}")]
    AlreadyRegistered {
        /// Name of the callback
        name: String,
        /// Kind it was first registered as
        kind: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The container has no provider bound for the requested type
    #[error("Missing provider: no provider registered for {type_name}")]
    MissingProvider {
        /// Key of the requested type
        type_name: String,
    },

    /// A provider exists but failed to produce a value
    #[error("Resolution error for {type_name}: {message}")]
    Resolution {
        /// Key of the requested type
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Error raised by an application callback
    #[error("Callback error: {message}")]
    Callback {
        /// Description of the callback failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Any other failure from config, logging or the container backend
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    pub fn invalid_target(callback: impl Into<String>) -> Self {
        Self::InvalidTarget {
            callback: callback.into(),
        }
    }

    /// `kind` is the human-readable registration kind, e.g. "slash command"
    pub fn already_registered(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn missing_provider(type_name: impl Into<String>) -> Self {
        Self::MissingProvider {
            type_name: type_name.into(),
        }
    }

    pub fn resolution(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an error returned by application code inside a callback
    pub fn callback_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Callback {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    pub fn configuration_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True when the container simply had no provider for the type
    ///
    /// The injector leaves such parameters unbound instead of failing.
    pub fn is_missing_provider(&self) -> bool {
        matches!(self, Self::MissingProvider { .. })
    }
}
