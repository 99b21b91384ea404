//! Injection Executor
//!
//! Wraps an async callback so that every invocation runs inside a fresh
//! request scope of the active container:
//!
//! ```text
//! Idle ──▶ ScopeOpen ──▶ Resolving ──▶ Invoking ──▶ Closed
//!              │              │             │          ▲
//!              └──────────────┴─────────────┴──────────┘  (errors, panics, cancellation)
//! ```
//!
//! Parameters are classified once, when the callback is wrapped. Per call,
//! only parameters the caller did not already bind are resolved.

use std::sync::Arc;

use interject_domain::{
    Annotation, Arguments, Callback, Classification, Error, Parameter, Result, ScopedRequest,
    Value,
};
use tracing::{Instrument, debug, debug_span};

use crate::classifier::Classifier;
use crate::registry::ContainerSlot;
use crate::signature::rebuild_signature;

/// Injects container-owned parameters into callbacks
#[derive(Clone)]
pub struct Injector {
    slot: Arc<ContainerSlot>,
    classifier: Arc<Classifier>,
}

impl Injector {
    pub fn new(slot: Arc<ContainerSlot>, classifier: Classifier) -> Self {
        Self {
            slot,
            classifier: Arc::new(classifier),
        }
    }

    /// Injector bound to the process-wide slot and default classification
    pub fn global() -> Self {
        Self::new(ContainerSlot::global(), Classifier::default())
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn slot(&self) -> &Arc<ContainerSlot> {
        &self.slot
    }

    /// Wrap `callback`; the result keeps the original signature
    ///
    /// Fails with `InvalidTarget` right away if `callback` is not async.
    /// The container is looked up per call, so wrapping succeeds before setup.
    pub fn inject(&self, callback: &Callback) -> Result<Callback> {
        if !callback.is_async() {
            return Err(Error::invalid_target(callback.name()));
        }

        let plan: Arc<[Step]> = callback
            .signature()
            .parameters()
            .iter()
            .filter_map(|parameter| Step::plan(parameter, &self.classifier))
            .collect();
        let slot = Arc::clone(&self.slot);
        let target = callback.clone();

        Ok(Callback::new(callback.signature().clone(), move |args| {
            let span = debug_span!("inject", callback = target.name());
            invoke(
                Arc::clone(&slot),
                Arc::clone(&plan),
                target.clone(),
                args,
            )
            .instrument(span)
        }))
    }

    /// Inject `callback` and expose only the parameters the host supplies
    pub fn wrap(&self, callback: &Callback) -> Result<Callback> {
        let injected = self.inject(callback)?;
        let visible = rebuild_signature(callback.signature(), &self.classifier);
        Ok(injected.with_signature(visible))
    }
}

impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("slot", &self.slot)
            .field("classifier", &self.classifier)
            .finish()
    }
}

/// Inject through the process-wide slot
pub fn inject(callback: &Callback) -> Result<Callback> {
    Injector::global().inject(callback)
}

/// Inject through the process-wide slot and rewrite the visible signature
pub fn wrap_callback(callback: &Callback) -> Result<Callback> {
    Injector::global().wrap(callback)
}

/// A container-owned parameter of the original signature
struct Step {
    name: String,
    annotation: Annotation,
    classification: Classification,
}

impl Step {
    fn plan(parameter: &Parameter, classifier: &Classifier) -> Option<Self> {
        if parameter.is_receiver()
            || parameter.kind().is_variadic()
            || parameter.annotation().is_empty()
        {
            return None;
        }
        let classification = classifier.classify(parameter.annotation());
        if classification.is_framework_owned() {
            return None;
        }
        Some(Self {
            name: parameter.name().to_string(),
            annotation: parameter.annotation().clone(),
            classification,
        })
    }
}

async fn invoke(
    slot: Arc<ContainerSlot>,
    plan: Arc<[Step]>,
    target: Callback,
    mut args: Arguments,
) -> Result<Value> {
    let container = slot.require()?;
    let scope = ScopeGuard::new(container.enter_scope().await?);
    debug!(container = container.name(), "Opened request scope");

    for step in plan.iter() {
        if args.contains(&step.name) {
            continue;
        }
        match &step.classification {
            Classification::ExplicitDependency(inner) => {
                let value = scope.resolve(inner).await?;
                args.insert(step.name.clone(), value);
            }
            Classification::Dependency => match scope.resolve(&step.annotation).await {
                Ok(value) => args.insert(step.name.clone(), value),
                Err(err) if err.is_missing_provider() => {
                    debug!(
                        parameter = step.name.as_str(),
                        annotation = %step.annotation,
                        "No provider, leaving parameter unbound"
                    );
                }
                Err(err) => return Err(err),
            },
            Classification::FrameworkOwned => {}
        }
    }

    target.call(args).await
}

/// Closes the request scope when dropped
struct ScopeGuard {
    request: Box<dyn ScopedRequest>,
}

impl ScopeGuard {
    fn new(request: Box<dyn ScopedRequest>) -> Self {
        Self { request }
    }

    async fn resolve(&self, annotation: &Annotation) -> Result<Value> {
        self.request.resolve(annotation).await
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.request.close();
        debug!("Closed request scope");
    }
}
