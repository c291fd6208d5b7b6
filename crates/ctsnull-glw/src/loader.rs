use std::ffi::c_void;
use std::ptr;

/// Resolves an entry-point name to its address, null when unknown.
///
/// Typically backed by `eglGetProcAddress`, `wglGetProcAddress` or a
/// `dlsym` on the GL library.
pub trait FunctionLoader {
    fn get(&self, name: &str) -> *const c_void;
}

impl<F> FunctionLoader for F
where
    F: Fn(&str) -> *const c_void,
{
    fn get(&self, name: &str) -> *const c_void {
        self(name)
    }
}

/// Resolves nothing. Every slot of a table built with it is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLoader;

impl FunctionLoader for NullLoader {
    fn get(&self, _name: &str) -> *const c_void {
        ptr::null()
    }
}
