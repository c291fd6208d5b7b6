//! Extensions with entry points, per API family.

/// An extension and the entry points it adds.
#[derive(Debug, Clone, Copy)]
pub struct Extension {
    pub name: &'static str,
    pub entry_points: &'static [&'static str],
}

macro_rules! extensions {
    ($table:ident { $($ext:literal => [$($func:literal),* $(,)?]),* $(,)? }) => {
        pub const $table: &[Extension] = &[
            $(Extension { name: $ext, entry_points: &[$($func),*] }),*
        ];
    };
}

extensions!(GL_EXTENSIONS {
    "GL_ARB_bindless_texture" => [
        "glGetTextureHandleARB",
        "glGetTextureSamplerHandleARB",
        "glMakeTextureHandleResidentARB",
        "glMakeTextureHandleNonResidentARB",
        "glGetImageHandleARB",
        "glMakeImageHandleResidentARB",
        "glMakeImageHandleNonResidentARB",
        "glUniformHandleui64ARB",
        "glUniformHandleui64vARB",
        "glProgramUniformHandleui64ARB",
        "glProgramUniformHandleui64vARB",
        "glIsTextureHandleResidentARB",
        "glIsImageHandleResidentARB",
    ],
    "GL_ARB_ES3_2_compatibility" => ["glPrimitiveBoundingBoxARB"],
    "GL_ARB_parallel_shader_compile" => ["glMaxShaderCompilerThreadsARB"],
    "GL_ARB_sparse_buffer" => [
        "glBufferPageCommitmentARB",
        "glNamedBufferPageCommitmentEXT",
        "glNamedBufferPageCommitmentARB",
    ],
    "GL_ARB_sparse_texture" => ["glTexPageCommitmentARB"],
    "GL_KHR_blend_equation_advanced" => ["glBlendBarrierKHR"],
    "GL_KHR_robustness" => [
        "glGetGraphicsResetStatus",
        "glReadnPixels",
        "glGetnUniformfv",
        "glGetnUniformiv",
        "glGetnUniformuiv",
    ],
    "GL_NV_internalformat_sample_query" => ["glGetInternalformatSampleivNV"],
    "GL_OVR_multiview" => ["glFramebufferTextureMultiviewOVR"],
});

extensions!(ES_EXTENSIONS {
    "GL_EXT_draw_buffers_indexed" => [
        "glEnableiEXT",
        "glDisableiEXT",
        "glBlendEquationiEXT",
        "glBlendEquationSeparateiEXT",
        "glBlendFunciEXT",
        "glBlendFuncSeparateiEXT",
        "glColorMaskiEXT",
        "glIsEnablediEXT",
    ],
    "GL_EXT_geometry_shader" => ["glFramebufferTextureEXT"],
    "GL_EXT_primitive_bounding_box" => ["glPrimitiveBoundingBoxEXT"],
    "GL_EXT_tessellation_shader" => ["glPatchParameteriEXT"],
    "GL_EXT_texture_buffer" => ["glTexBufferEXT", "glTexBufferRangeEXT"],
    "GL_KHR_blend_equation_advanced" => ["glBlendBarrierKHR"],
    "GL_KHR_debug" => [
        "glDebugMessageControlKHR",
        "glDebugMessageInsertKHR",
        "glDebugMessageCallbackKHR",
        "glGetDebugMessageLogKHR",
        "glPushDebugGroupKHR",
        "glPopDebugGroupKHR",
        "glObjectLabelKHR",
        "glGetObjectLabelKHR",
        "glObjectPtrLabelKHR",
        "glGetObjectPtrLabelKHR",
        "glGetPointervKHR",
    ],
    "GL_KHR_robustness" => [
        "glGetGraphicsResetStatusKHR",
        "glReadnPixelsKHR",
        "glGetnUniformfvKHR",
        "glGetnUniformivKHR",
        "glGetnUniformuivKHR",
    ],
    "GL_OES_mapbuffer" => ["glMapBufferOES", "glUnmapBufferOES", "glGetBufferPointervOES"],
    "GL_OES_sample_shading" => ["glMinSampleShadingOES"],
    "GL_OES_texture_3D" => [
        "glTexImage3DOES",
        "glTexSubImage3DOES",
        "glCopyTexSubImage3DOES",
        "glCompressedTexImage3DOES",
        "glCompressedTexSubImage3DOES",
        "glFramebufferTexture3DOES",
    ],
    "GL_OES_vertex_array_object" => [
        "glBindVertexArrayOES",
        "glDeleteVertexArraysOES",
        "glGenVertexArraysOES",
        "glIsVertexArrayOES",
    ],
});

pub fn find(table: &'static [Extension], name: &str) -> Option<&'static Extension> {
    table.iter().find(|ext| ext.name == name)
}
