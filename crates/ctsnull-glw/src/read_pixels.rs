//! glReadPixels with its surrounding GL state captured, for chasing read-back
//! failures.

use std::ffi::c_void;

use tracing::{debug, warn};

use crate::error::GlError;
use crate::table::FunctionTable;
use crate::{GLenum, GLint, GLsizei};

pub const GL_NO_ERROR: GLenum = 0;
pub const GL_PACK_ALIGNMENT: GLenum = 0x0D05;
pub const GL_IMPLEMENTATION_COLOR_READ_TYPE: GLenum = 0x8B9A;
pub const GL_IMPLEMENTATION_COLOR_READ_FORMAT: GLenum = 0x8B9B;

/// Upper bound on errors drained per glGetError loop; a broken driver may
/// never report GL_NO_ERROR.
const MAX_DRAINED_ERRORS: usize = 64;

type GetErrorFn = unsafe extern "system" fn() -> GLenum;
type GetIntegervFn = unsafe extern "system" fn(GLenum, *mut GLint);
type PixelStoreiFn = unsafe extern "system" fn(GLenum, GLint);
type ReadPixelsFn =
    unsafe extern "system" fn(GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, *mut c_void);

/// What the traced call observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadPixelsReport {
    /// GL_IMPLEMENTATION_COLOR_READ_FORMAT of the current read framebuffer
    pub read_format: GLint,
    /// GL_IMPLEMENTATION_COLOR_READ_TYPE of the current read framebuffer
    pub read_type: GLint,
    /// Errors pending before the call, discarded
    pub stale_errors: Vec<GLenum>,
    /// Errors raised by glReadPixels itself
    pub errors: Vec<GLenum>,
}

pub struct ReadPixelsTracer {
    get_error: GetErrorFn,
    get_integerv: GetIntegervFn,
    pixel_storei: PixelStoreiFn,
    read_pixels: ReadPixelsFn,
}

impl ReadPixelsTracer {
    /// Fails if any of glGetError, glGetIntegerv, glPixelStorei or
    /// glReadPixels is missing from `table`.
    pub fn new(table: &FunctionTable) -> Result<Self, GlError> {
        // SAFETY: each name is paired with its signature from the GL headers.
        unsafe {
            Ok(Self {
                get_error: required(table, "glGetError")?,
                get_integerv: required(table, "glGetIntegerv")?,
                pixel_storei: required(table, "glPixelStorei")?,
                read_pixels: required(table, "glReadPixels")?,
            })
        }
    }

    /// # Safety
    /// A GL context must be current on this thread and `data` must be valid
    /// for the read described by the arguments.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: *mut c_void,
    ) -> ReadPixelsReport {
        debug!(
            "glReadPixels({}, {}, {}x{}, format {:#x}, type {:#x})",
            x, y, width, height, format, ty
        );

        let mut report = ReadPixelsReport::default();
        unsafe {
            (self.get_integerv)(GL_IMPLEMENTATION_COLOR_READ_FORMAT, &mut report.read_format);
            (self.get_integerv)(GL_IMPLEMENTATION_COLOR_READ_TYPE, &mut report.read_type);
            (self.pixel_storei)(GL_PACK_ALIGNMENT, 4);
        }
        debug!(
            "implementation read format {:#x}, type {:#x}",
            report.read_format, report.read_type
        );

        report.stale_errors = unsafe { self.drain_errors() };
        for err in &report.stale_errors {
            debug!("discarding pending GL error {:#x}", err);
        }

        unsafe { (self.read_pixels)(x, y, width, height, format, ty, data) };

        report.errors = unsafe { self.drain_errors() };
        for err in &report.errors {
            warn!("glReadPixels raised GL error {:#x}", err);
        }
        report
    }

    unsafe fn drain_errors(&self) -> Vec<GLenum> {
        let mut errors = Vec::new();
        while errors.len() < MAX_DRAINED_ERRORS {
            match unsafe { (self.get_error)() } {
                GL_NO_ERROR => break,
                err => errors.push(err),
            }
        }
        errors
    }
}

unsafe fn required<F: Copy>(table: &FunctionTable, name: &str) -> Result<F, GlError> {
    unsafe { table.proc_as::<F>(name) }.ok_or_else(|| GlError::MissingEntryPoint(name.to_string()))
}
