//! Shared registration steps
//!
//! Every adapter runs the same checks, in order, before the host sees a
//! callback:
//!
//! 1. the callback is async (`InvalidTarget`)
//! 2. the callback carries no command marker yet (`AlreadyRegistered`)
//! 3. adapter-specific options are valid (`InvalidArgument`)
//! 4. the callback is injected and its signature rewritten
//! 5. the original and the wrapped callback are marked as registered

use interject_application::{ContainerSlot, Injector};
use interject_domain::{Callback, Error, Result};
use interject_infrastructure::di::injector_for;
use interject_infrastructure::{AppConfig, BotConfig};
use std::sync::Arc;
use tracing::info;

/// Injector and command defaults shared by the registration adapters
#[derive(Debug, Clone)]
pub struct Registrar {
    injector: Injector,
    defaults: BotConfig,
}

impl Registrar {
    pub fn new(injector: Injector, defaults: BotConfig) -> Self {
        Self { injector, defaults }
    }

    /// Registrar resolving through the process-wide container slot
    pub fn global() -> Self {
        Self::new(Injector::global(), BotConfig::default())
    }

    /// Registrar using the configured namespaces and command defaults
    pub fn from_config(config: &AppConfig, slot: Arc<ContainerSlot>) -> Self {
        Self::new(injector_for(config, slot), config.bot.clone())
    }

    pub fn injector(&self) -> &Injector {
        &self.injector
    }

    pub fn defaults(&self) -> &BotConfig {
        &self.defaults
    }

    /// Steps 1 and 2
    pub(crate) fn check_target(callback: &Callback) -> Result<()> {
        if !callback.is_async() {
            return Err(Error::invalid_target(callback.name()));
        }
        if let Some(marker) = callback.command_marker() {
            return Err(Error::already_registered(callback.name(), marker.kind.as_str()));
        }
        Ok(())
    }

    /// Steps 4 and 5
    pub(crate) fn register(&self, callback: &Callback, kind: &str, name: &str) -> Result<Callback> {
        let wrapped = self.injector.wrap(callback)?;
        callback.mark_registered(kind, name)?;
        wrapped.mark_registered(kind, name)?;
        info!(
            kind,
            name,
            signature = %wrapped.signature(),
            "Registered callback"
        );
        Ok(wrapped)
    }

    /// All steps for adapters without options of their own
    pub(crate) fn prepare(&self, callback: &Callback, kind: &str, name: &str) -> Result<Callback> {
        Self::check_target(callback)?;
        self.register(callback, kind, name)
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::global()
    }
}
