use std::collections::{BTreeMap, BTreeSet};
use std::ffi::c_void;

use tracing::{debug, info};

use crate::api::ApiType;
use crate::entry_points;
use crate::error::GlError;
use crate::extensions::{self, Extension};
use crate::loader::FunctionLoader;

/// Entry-point name → address. A null address marks a name the loader could
/// not resolve.
#[derive(Debug, Default)]
pub struct FunctionTable {
    api: Option<ApiType>,
    slots: BTreeMap<&'static str, *const c_void>,
    extensions: BTreeSet<&'static str>,
}

// Slots hold code addresses, never data the table owns.
unsafe impl Send for FunctionTable {}
unsafe impl Sync for FunctionTable {}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version the table was initialised for, if any.
    pub fn api(&self) -> Option<ApiType> {
        self.api
    }

    /// Address of `name`, `None` when it is missing or not part of the table.
    pub fn get(&self, name: &str) -> Option<*const c_void> {
        self.slots.get(name).copied().filter(|addr| !addr.is_null())
    }

    pub fn require(&self, name: &str) -> Result<*const c_void, GlError> {
        self.get(name)
            .ok_or_else(|| GlError::MissingEntryPoint(name.to_string()))
    }

    /// Address of `name` as a typed function pointer.
    ///
    /// # Safety
    /// `F` must be a function pointer type matching the entry point's real
    /// signature and calling convention.
    pub unsafe fn proc_as<F: Copy>(&self, name: &str) -> Option<F> {
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const c_void>(),
            "proc_as target must be a function pointer"
        );
        let addr = self.get(name)?;
        Some(unsafe { std::mem::transmute_copy::<*const c_void, F>(&addr) })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of slots, loaded or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.values().filter(|addr| !addr.is_null()).count()
    }

    /// Slots the loader left null, in name order.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots
            .iter()
            .filter(|(_, addr)| addr.is_null())
            .map(|(name, _)| *name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.keys().copied()
    }

    /// Extensions whose entry points were loaded into this table.
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.iter().copied()
    }

    fn load<L>(&mut self, loader: &L, names: impl IntoIterator<Item = &'static str>)
    where
        L: FunctionLoader + ?Sized,
    {
        for name in names {
            self.slots.insert(name, loader.get(name));
        }
    }

    fn load_extensions<L>(
        &mut self,
        loader: &L,
        known: &'static [Extension],
        requested: &[&str],
    ) where
        L: FunctionLoader + ?Sized,
    {
        for name in requested {
            let Some(ext) = extensions::find(known, name) else {
                debug!("no entry points for extension {}", name);
                continue;
            };
            if self.extensions.insert(ext.name) {
                self.load(loader, ext.entry_points.iter().copied());
            }
        }
    }
}

/// Build the table for `api`: every entry point of that version and the
/// earlier versions it includes.
pub fn init<L>(api: ApiType, loader: &L) -> FunctionTable
where
    L: FunctionLoader + ?Sized,
{
    let mut table = FunctionTable {
        api: Some(api),
        ..FunctionTable::default()
    };
    table.load(loader, entry_points::cumulative(api));

    let missing = table.len() - table.loaded_count();
    if missing > 0 {
        debug!("{}: {} entry points unresolved", api, missing);
    }
    info!(
        "initialised {} function table: {}/{} entry points",
        api,
        table.loaded_count(),
        table.len()
    );
    table
}

/// Load the entry points of each desktop GL extension in `extensions` that
/// adds any. Unlisted extensions are untouched.
pub fn init_extensions_gl<L>(table: &mut FunctionTable, loader: &L, extensions: &[&str])
where
    L: FunctionLoader + ?Sized,
{
    table.load_extensions(loader, extensions::GL_EXTENSIONS, extensions);
}

/// GLES counterpart of [`init_extensions_gl`].
pub fn init_extensions_es<L>(table: &mut FunctionTable, loader: &L, extensions: &[&str])
where
    L: FunctionLoader + ?Sized,
{
    table.load_extensions(loader, extensions::ES_EXTENSIONS, extensions);
}
