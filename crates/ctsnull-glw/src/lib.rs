//! OpenGL / OpenGL ES function table.
//!
//! Fills a [`FunctionTable`] for an API version or an extension set through a
//! caller-supplied [`FunctionLoader`]. Unresolved entry points stay null and
//! are reported by the table; deciding whether that is fatal is up to the
//! caller.
//!
//! Diagnostics are opt-in: wrap calls with an [`InterceptorSet`] instead of
//! patching table slots.

pub mod api;
pub mod entry_points;
pub mod error;
pub mod extensions;
pub mod intercept;
pub mod loader;
pub mod read_pixels;
pub mod table;

pub use api::{ApiType, Profile};
pub use error::GlError;
pub use intercept::{Instrumented, Interceptor, InterceptorSet, TraceInterceptor};
pub use loader::{FunctionLoader, NullLoader};
pub use read_pixels::{ReadPixelsReport, ReadPixelsTracer};
pub use table::{init, init_extensions_es, init_extensions_gl, FunctionTable};

pub type GLenum = u32;
pub type GLint = i32;
pub type GLsizei = i32;
