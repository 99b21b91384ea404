//! Callback signatures
//!
//! A [`Signature`] is derived once, when a callback is declared, and is
//! immutable afterwards. Rewriting produces a new value.

use std::fmt;

use crate::value_objects::annotation::Annotation;
use crate::value_objects::markers::Inject;
use crate::value_objects::parameter::{Parameter, ParameterKind};
use crate::value_objects::type_path::TypePath;

/// Name and ordered parameters of a callback
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    name: String,
    parameters: Vec<Parameter>,
}

impl Signature {
    /// Create a signature from its parts
    pub fn new<S: Into<String>>(name: S, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Start declaring a signature
    pub fn builder<S: Into<String>>(name: S) -> SignatureBuilder {
        SignatureBuilder {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Same name, different parameter list
    pub fn with_parameters(&self, parameters: Vec<Parameter>) -> Self {
        Self::new(self.name.clone(), parameters)
    }

    /// Parameter accepting extra keyword arguments, if declared
    pub fn var_keyword(&self) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.kind() == ParameterKind::VarKeyword)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({params})", self.name)
    }
}

/// Builder for [`Signature`]
///
/// ```
/// use interject_domain::Signature;
///
/// struct Interaction;
/// struct UserService;
///
/// let signature = Signature::builder("hello")
///     .param::<Interaction>("inter")
///     .param::<UserService>("svc")
///     .build();
/// assert_eq!(signature.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    name: String,
    parameters: Vec<Parameter>,
}

impl SignatureBuilder {
    /// Declare the implicit `self` receiver
    pub fn receiver(mut self) -> Self {
        self.parameters.push(Parameter::receiver());
        self
    }

    /// Declare a parameter of type `T`
    pub fn param<T: ?Sized + 'static>(self, name: &str) -> Self {
        self.parameter(Parameter::new(
            name,
            Annotation::of::<T>(),
            ParameterKind::PositionalOrKeyword,
        ))
    }

    /// Declare a parameter of type `Inject<T>`
    pub fn inject<T: ?Sized + 'static>(self, name: &str) -> Self {
        self.param::<Inject<T>>(name)
    }

    /// Declare a parameter of type `T` carrying metadata marker `M`
    pub fn annotated<T: ?Sized + 'static, M: ?Sized + 'static>(self, name: &str) -> Self {
        self.parameter(Parameter::new(
            name,
            Annotation::annotated(Annotation::of::<T>(), vec![TypePath::of::<M>()]),
            ParameterKind::PositionalOrKeyword,
        ))
    }

    /// Declare a parameter without an annotation
    pub fn untyped(self, name: &str) -> Self {
        self.parameter(Parameter::new(
            name,
            Annotation::Empty,
            ParameterKind::PositionalOrKeyword,
        ))
    }

    /// Declare a capture of extra positional arguments
    pub fn var_positional(self, name: &str) -> Self {
        self.parameter(Parameter::new(
            name,
            Annotation::Empty,
            ParameterKind::VarPositional,
        ))
    }

    /// Declare a capture of extra keyword arguments
    pub fn var_keyword(self, name: &str) -> Self {
        self.parameter(Parameter::new(
            name,
            Annotation::Empty,
            ParameterKind::VarKeyword,
        ))
    }

    /// Append an already built parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn build(self) -> Signature {
        Signature::new(self.name, self.parameters)
    }
}
