//! Parameter descriptors

use std::fmt;

use crate::constants::RECEIVER_NAME;
use crate::value_objects::annotation::Annotation;

/// How a parameter receives its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// The implicit instance receiver
    Receiver,
    /// A named parameter that may be passed positionally or by keyword
    PositionalOrKeyword,
    /// Capture of extra positional arguments
    VarPositional,
    /// Capture of extra keyword arguments
    VarKeyword,
}

impl ParameterKind {
    /// Whether this kind captures a variable number of arguments
    pub fn is_variadic(self) -> bool {
        matches!(self, Self::VarPositional | Self::VarKeyword)
    }
}

/// A declared callback parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    annotation: Annotation,
    kind: ParameterKind,
}

impl Parameter {
    /// Create a parameter descriptor
    pub fn new<S: Into<String>>(name: S, annotation: Annotation, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            annotation,
            kind,
        }
    }

    /// The implicit `self` receiver
    pub fn receiver() -> Self {
        Self::new(RECEIVER_NAME, Annotation::Empty, ParameterKind::Receiver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Whether this is the instance receiver, by kind or by name
    pub fn is_receiver(&self) -> bool {
        self.kind == ParameterKind::Receiver || self.name == RECEIVER_NAME
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            ParameterKind::VarPositional => "*",
            ParameterKind::VarKeyword => "**",
            _ => "",
        };
        if self.annotation.is_empty() {
            write!(f, "{prefix}{}", self.name)
        } else {
            write!(f, "{prefix}{}: {}", self.name, self.annotation)
        }
    }
}
