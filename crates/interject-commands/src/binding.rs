//! Argument binding
//!
//! Maps an [`Interaction`] onto the visible signature of a wrapped callback:
//!
//! | Parameter | Receives |
//! |-----------|----------|
//! | receiver | the owning item or cog state, positionally |
//! | first regular parameter | the interaction |
//! | next regular parameters | positional extras (the context menu target) |
//! | remaining regular parameters | options by name, through connectors |
//! | `**kwargs` capture | options matching no parameter |
//!
//! An option matching no parameter of a signature without a keyword capture
//! is rejected, as is a missing option for a non-`Option` parameter.

use interject_domain::{
    Annotation, Arguments, Error, Parameter, ParameterKind, Result, Signature, TypePath, Value,
};
use std::collections::HashMap;

use crate::interaction::Interaction;
use crate::options::{OptionKind, OptionSpec};

/// Binds interactions to one visible signature
pub struct Binder<'a> {
    signature: &'a Signature,
    connectors: &'a HashMap<String, String>,
    state: Option<Value>,
    extras: Vec<Value>,
}

impl<'a> Binder<'a> {
    pub fn new(signature: &'a Signature, connectors: &'a HashMap<String, String>) -> Self {
        Self {
            signature,
            connectors,
            state: None,
            extras: Vec::new(),
        }
    }

    /// State handed to the receiver
    pub fn with_state(mut self, state: Option<Value>) -> Self {
        self.state = state;
        self
    }

    /// Value bound to the next regular parameter after the interaction
    pub fn with_extra(mut self, value: Value) -> Self {
        self.extras.push(value);
        self
    }

    pub fn bind(self, interaction: &Interaction) -> Result<Arguments> {
        let mut args = Arguments::new();
        let mut regular = regular_parameters(self.signature);

        if self.signature.parameters().iter().any(Parameter::is_receiver) {
            let state = self.state.ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{} expects a receiver but no state is attached",
                    self.signature.name()
                ))
            })?;
            args.push_positional(state);
        }

        if let Some(first) = regular.next() {
            args.insert(first.name(), Value::new(interaction.clone()));
        }
        for extra in self.extras {
            let parameter = regular.next().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{} takes no parameter for the interaction target",
                    self.signature.name()
                ))
            })?;
            args.insert(parameter.name(), extra);
        }

        let named: Vec<&Parameter> = regular.collect();
        let accepts_any = self.signature.var_keyword().is_some();
        for (option, value) in interaction.options() {
            let target = self
                .connectors
                .get(option)
                .map_or(option.as_str(), String::as_str);
            if accepts_any || named.iter().any(|p| p.name() == target) {
                args.insert(target, value.clone());
            } else {
                return Err(Error::invalid_argument(format!(
                    "{} has no option named '{option}'",
                    self.signature.name()
                )));
            }
        }

        if let Some(missing) = named
            .iter()
            .find(|p| is_required(p.annotation()) && !args.contains(p.name()))
        {
            return Err(Error::invalid_argument(format!(
                "{} is missing required option '{}'",
                self.signature.name(),
                option_name(missing.name(), self.connectors)
            )));
        }

        Ok(args)
    }
}

/// Options a visible signature exposes to the host, after the interaction
/// and `skip` positional extras
pub fn option_specs(
    signature: &Signature,
    connectors: &HashMap<String, String>,
    skip: usize,
) -> Vec<OptionSpec> {
    regular_parameters(signature)
        .skip(1 + skip)
        .map(|parameter| OptionSpec {
            name: option_name(parameter.name(), connectors),
            description: String::new(),
            kind: OptionKind::Value(parameter.annotation().to_string()),
            required: is_required(parameter.annotation()),
            options: Vec::new(),
        })
        .collect()
}

fn regular_parameters(signature: &Signature) -> impl Iterator<Item = &Parameter> {
    signature
        .parameters()
        .iter()
        .filter(|p| p.kind() == ParameterKind::PositionalOrKeyword && !p.is_receiver())
}

/// Untyped and `Option<T>` parameters may be left out
fn is_required(annotation: &Annotation) -> bool {
    !annotation.is_empty() && annotation.origin() != Some(&TypePath::of::<Option<()>>())
}

fn option_name(parameter: &str, connectors: &HashMap<String, String>) -> String {
    connectors
        .iter()
        .find(|(_, target)| *target == parameter)
        .map_or_else(|| parameter.to_string(), |(option, _)| option.clone())
}
