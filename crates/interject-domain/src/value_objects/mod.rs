//! Value Objects
//!
//! Immutable descriptions of callbacks and the values that flow through them.

pub mod annotation;
pub mod callback;
pub mod classification;
pub mod markers;
pub mod parameter;
pub mod settings;
pub mod signature;
pub mod type_path;
pub mod value;

pub use annotation::Annotation;
pub use callback::{
    AsyncHandler, BlockingHandler, Callback, CallbackFuture, CommandMarker, Handler,
};
pub use classification::{Classification, OriginKind};
pub use markers::{FromContainer, Inject};
pub use parameter::{Parameter, ParameterKind};
pub use settings::InjectionSettings;
pub use signature::{Signature, SignatureBuilder};
pub use type_path::TypePath;
pub use value::{Arguments, Value};
