//! dill Catalog adapter
//!
//! Application-lifetime values live in a dill [`Catalog`]; request-lifetime
//! values come from async factories, are cached per [`CatalogScope`] and
//! finalized when the scope closes.
//!
//! Bindings are keyed by [`Annotation::key`], so a parameter declared as
//! `.param::<T>(..)` or `.inject::<T>(..)` resolves whatever was provided
//! for `T`.

use dill::{Catalog, CatalogBuilder};
use futures::future::BoxFuture;
use futures::lock::Mutex as AsyncMutex;
use interject_domain::{Annotation, Container, Error, Result, ScopedRequest, Value};
use std::any::TypeId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

type Binding = Arc<dyn Fn(&Catalog) -> Result<Value> + Send + Sync>;
type ScopedFactory = Arc<dyn Fn(Arc<Catalog>) -> BoxFuture<'static, Result<Value>> + Send + Sync>;
type Finalizer = Arc<dyn Fn(&Value) + Send + Sync>;
type Registration = Box<dyn FnOnce(&mut CatalogBuilder) + Send>;

const DEFAULT_CONTAINER_NAME: &str = "dill";

/// Binding key for `T`
fn key_of<T: ?Sized + 'static>() -> String {
    Annotation::of::<T>()
        .key()
        .unwrap_or_else(|| std::any::type_name::<T>().to_string())
}

/// An application-lifetime value waiting for [`ContainerBuilder::build`]
///
/// dill rejects a second value of the same stored type, so the value only
/// enters the catalog once the last provider for its key is known.
struct PendingSingleton {
    stored: TypeId,
    register: Registration,
    binding: Binding,
}

#[derive(Clone)]
struct ScopedProvider {
    factory: ScopedFactory,
    finalizer: Option<Finalizer>,
}

/// Builder for a [`CatalogContainer`]
///
/// Providing the same type twice keeps the last provider.
pub struct ContainerBuilder {
    name: String,
    singletons: HashMap<String, PendingSingleton>,
    scoped: HashMap<String, ScopedProvider>,
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_CONTAINER_NAME.to_string(),
            singletons: HashMap::new(),
            scoped: HashMap::new(),
        }
    }

    /// Name reported by [`Container::name`]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Provide an application-lifetime `T`
    pub fn provide_value<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        let key = key_of::<T>();
        let binding_key = key.clone();
        self.insert_singleton(
            key,
            PendingSingleton {
                stored: TypeId::of::<T>(),
                register: Box::new(move |catalog: &mut CatalogBuilder| {
                    catalog.add_value(value);
                }),
                binding: Arc::new(move |catalog: &Catalog| {
                    catalog
                        .get_one::<T>()
                        .map(Value::from_arc)
                        .map_err(|err| Error::resolution(binding_key.as_str(), err.to_string()))
                }),
            },
        );
        self
    }

    /// Provide an application-lifetime, possibly unsized `T` such as a trait object
    pub fn provide_arc<T: ?Sized + Send + Sync + 'static>(mut self, value: Arc<T>) -> Self {
        let key = key_of::<T>();
        let binding_key = key.clone();
        self.insert_singleton(
            key,
            PendingSingleton {
                stored: TypeId::of::<Arc<T>>(),
                register: Box::new(move |catalog: &mut CatalogBuilder| {
                    catalog.add_value(value);
                }),
                binding: Arc::new(move |catalog: &Catalog| {
                    catalog
                        .get_one::<Arc<T>>()
                        .map(|stored| Value::from_arc(Arc::clone(&*stored)))
                        .map_err(|err| Error::resolution(binding_key.as_str(), err.to_string()))
                }),
            },
        );
        self
    }

    /// Provide a `T` created once per request scope
    pub fn provide_scoped<T, F, Fut>(self, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(Arc<Catalog>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.insert_scoped::<T, F, Fut>(factory, None)
    }

    /// Like [`provide_scoped`](Self::provide_scoped), running `finalizer` when the scope closes
    pub fn provide_scoped_with_finalizer<T, F, Fut, D>(self, factory: F, finalizer: D) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(Arc<Catalog>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        D: Fn(&T) + Send + Sync + 'static,
    {
        let finalizer: Finalizer = Arc::new(move |value: &Value| {
            if let Some(instance) = value.downcast::<T>() {
                finalizer(&instance);
            }
        });
        self.insert_scoped::<T, F, Fut>(factory, Some(finalizer))
    }

    pub fn build(self) -> CatalogContainer {
        let mut catalog = CatalogBuilder::new();
        let mut singletons = HashMap::with_capacity(self.singletons.len());
        for (key, pending) in self.singletons {
            (pending.register)(&mut catalog);
            singletons.insert(key, pending.binding);
        }
        let inner = Inner {
            name: self.name,
            catalog: Arc::new(catalog.build()),
            singletons,
            scoped: self.scoped,
        };
        debug!(
            container = inner.name.as_str(),
            singletons = inner.singletons.len(),
            scoped = inner.scoped.len(),
            "Built container"
        );
        CatalogContainer {
            inner: Arc::new(inner),
        }
    }

    fn insert_scoped<T, F, Fut>(mut self, factory: F, finalizer: Option<Finalizer>) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(Arc<Catalog>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let factory: ScopedFactory = Arc::new(move |catalog: Arc<Catalog>| {
            let created = factory(catalog);
            Box::pin(async move { created.await.map(Value::new) })
        });
        let key = key_of::<T>();
        self.singletons.remove(&key);
        if self
            .scoped
            .insert(key.clone(), ScopedProvider { factory, finalizer })
            .is_some()
        {
            debug!(key = key.as_str(), "Replaced scoped provider");
        }
        self
    }

    fn insert_singleton(&mut self, key: String, pending: PendingSingleton) {
        self.scoped.remove(&key);
        // another key stored under the same catalog type would collide in dill
        self.singletons
            .retain(|other, existing| *other == key || existing.stored != pending.stored);
        if self.singletons.insert(key.clone(), pending).is_some() {
            debug!(key = key.as_str(), "Replaced provider");
        }
    }
}

struct Inner {
    name: String,
    catalog: Arc<Catalog>,
    singletons: HashMap<String, Binding>,
    scoped: HashMap<String, ScopedProvider>,
}

/// A dill-backed [`Container`]
#[derive(Clone)]
pub struct CatalogContainer {
    inner: Arc<Inner>,
}

impl CatalogContainer {
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// The underlying dill catalog of application-lifetime values
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Whether a provider is bound for `annotation`
    pub fn contains(&self, annotation: &Annotation) -> bool {
        annotation.key().is_some_and(|key| {
            self.inner.singletons.contains_key(&key) || self.inner.scoped.contains_key(&key)
        })
    }

    /// Bound keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .inner
            .singletons
            .keys()
            .chain(self.inner.scoped.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl std::fmt::Debug for CatalogContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogContainer")
            .field("name", &self.inner.name)
            .field("keys", &self.keys())
            .finish()
    }
}

#[async_trait::async_trait]
impl Container for CatalogContainer {
    fn name(&self) -> &str {
        &self.inner.name
    }

    async fn enter_scope(&self) -> Result<Box<dyn ScopedRequest>> {
        Ok(Box::new(CatalogScope {
            inner: Arc::clone(&self.inner),
            instances: Mutex::new(Vec::new()),
            creating: Mutex::new(HashMap::new()),
            closed: false,
        }))
    }
}

/// One request scope of a [`CatalogContainer`]
struct CatalogScope {
    inner: Arc<Inner>,
    /// Scoped instances in creation order
    instances: Mutex<Vec<(String, Value)>>,
    /// Held while a key's factory runs, so overlapping resolves share one instance
    creating: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
    closed: bool,
}

impl CatalogScope {
    fn cached(&self, key: &str) -> Option<Value> {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(cached, _)| cached == key)
            .map(|(_, value)| value.clone())
    }

    fn creation_lock(&self, key: &str) -> Arc<AsyncMutex<()>> {
        let mut creating = self.creating.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(creating.entry(key.to_string()).or_default())
    }
}

#[async_trait::async_trait]
impl ScopedRequest for CatalogScope {
    async fn resolve(&self, annotation: &Annotation) -> Result<Value> {
        let key = annotation
            .key()
            .ok_or_else(|| Error::missing_provider(annotation.to_string()))?;

        if let Some(binding) = self.inner.singletons.get(&key) {
            return binding(&self.inner.catalog);
        }
        let Some(provider) = self.inner.scoped.get(&key) else {
            return Err(Error::missing_provider(key));
        };
        if let Some(value) = self.cached(&key) {
            return Ok(value);
        }

        let lock = self.creation_lock(&key);
        let _creating = lock.lock().await;
        if let Some(value) = self.cached(&key) {
            return Ok(value);
        }

        let value = (provider.factory)(Arc::clone(&self.inner.catalog)).await?;
        debug!(key = key.as_str(), "Created scoped instance");
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((key, value.clone()));
        Ok(value)
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let instances = std::mem::take(
            self.instances
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for (key, value) in instances.iter().rev() {
            if let Some(finalizer) = self
                .inner
                .scoped
                .get(key)
                .and_then(|provider| provider.finalizer.as_ref())
            {
                finalizer(value);
            }
        }
        debug!(finalized = instances.len(), "Released scoped instances");
    }
}

impl Drop for CatalogScope {
    fn drop(&mut self) {
        self.close();
    }
}
