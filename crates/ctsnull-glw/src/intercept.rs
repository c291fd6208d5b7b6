//! Opt-in per-entry-point hooks.
//!
//! Table slots are never rewritten. A caller that wants diagnostics goes
//! through [`Instrumented::call`], which runs the hooks registered for the
//! entry point around the real function.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use ctsnull_core::config::GlConfig;

use crate::error::GlError;
use crate::table::FunctionTable;

pub trait Interceptor: Send + Sync {
    fn before(&self, _name: &str) {}
    fn after(&self, _name: &str) {}
}

/// Logs every call it brackets and counts them.
#[derive(Debug, Default)]
pub struct TraceInterceptor {
    calls: AtomicU64,
}

impl TraceInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Interceptor for TraceInterceptor {
    fn before(&self, name: &str) {
        let n = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        info!(entry_point = name, call = n, "GL call");
    }

    fn after(&self, name: &str) {
        debug!(entry_point = name, "GL call returned");
    }
}

#[derive(Default)]
pub struct InterceptorSet {
    hooks: RwLock<HashMap<String, Vec<Arc<dyn Interceptor>>>>,
}

impl InterceptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`TraceInterceptor`] on every entry point named in `gl.trace`.
    pub fn from_config(config: &GlConfig) -> Self {
        let set = Self::new();
        if config.trace.is_empty() {
            return set;
        }
        let tracer: Arc<dyn Interceptor> = Arc::new(TraceInterceptor::new());
        for name in &config.trace {
            set.add(name, Arc::clone(&tracer));
        }
        debug!("tracing GL entry points: {:?}", config.trace);
        set
    }

    /// Hooks run in registration order before the call, reverse order after.
    pub fn add(&self, name: &str, interceptor: Arc<dyn Interceptor>) {
        self.hooks
            .write()
            .entry(name.to_string())
            .or_default()
            .push(interceptor);
    }

    /// Drop every hook on `name`, returning how many there were.
    pub fn remove(&self, name: &str) -> usize {
        self.hooks.write().remove(name).map_or(0, |hooks| hooks.len())
    }

    pub fn is_intercepted(&self, name: &str) -> bool {
        self.hooks
            .read()
            .get(name)
            .is_some_and(|hooks| !hooks.is_empty())
    }

    /// Number of entry points with at least one hook.
    pub fn len(&self) -> usize {
        self.hooks.read().values().filter(|h| !h.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn instrument<'a>(&'a self, table: &'a FunctionTable) -> Instrumented<'a> {
        Instrumented { table, hooks: self }
    }

    fn hooks_for(&self, name: &str) -> Vec<Arc<dyn Interceptor>> {
        self.hooks.read().get(name).cloned().unwrap_or_default()
    }
}

/// A function table paired with the hooks to run around its calls.
pub struct Instrumented<'a> {
    table: &'a FunctionTable,
    hooks: &'a InterceptorSet,
}

impl Instrumented<'_> {
    pub fn table(&self) -> &FunctionTable {
        self.table
    }

    /// Resolve `name` as `F`, then run `invoke` on it between the hooks.
    ///
    /// # Safety
    /// Same contract as [`FunctionTable::proc_as`]; `invoke` must call the
    /// function with valid arguments.
    pub unsafe fn call<F: Copy, R>(&self, name: &str, invoke: impl FnOnce(F) -> R) -> Result<R, GlError> {
        let func = unsafe { self.table.proc_as::<F>(name) }
            .ok_or_else(|| GlError::MissingEntryPoint(name.to_string()))?;

        // The lock is not held while the GL function runs.
        let hooks = self.hooks.hooks_for(name);
        for hook in &hooks {
            hook.before(name);
        }
        let result = invoke(func);
        for hook in hooks.iter().rev() {
            hook.after(name);
        }
        Ok(result)
    }
}
