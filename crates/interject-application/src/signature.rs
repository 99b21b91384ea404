//! Signature Rewriter
//!
//! Reduces a callback signature to the parameters the host framework must
//! supply itself. Dependency parameters disappear from the host's view and
//! are filled in later by the [`Injector`](crate::Injector).

use interject_domain::{Parameter, Signature};

use crate::classifier::Classifier;

/// Build the externally visible signature of a callback
///
/// Keeps, in original order, the receiver, variadic captures and
/// framework-owned parameters. Rebuilding an already rebuilt signature
/// returns it unchanged.
pub fn rebuild_signature(signature: &Signature, classifier: &Classifier) -> Signature {
    let visible = signature
        .parameters()
        .iter()
        .filter(|parameter| is_visible(parameter, classifier))
        .cloned()
        .collect();
    signature.with_parameters(visible)
}

/// Whether the host framework should see `parameter`
pub fn is_visible(parameter: &Parameter, classifier: &Classifier) -> bool {
    parameter.is_receiver()
        || parameter.kind().is_variadic()
        || classifier.is_framework_owned(parameter.annotation())
}
