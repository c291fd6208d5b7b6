//! Integration test: function table initialisation
//!
//! Run with: cargo test -p ctsnull-glw --test function_table_test

use std::collections::HashSet;
use std::ffi::c_void;
use std::ptr;

use ctsnull_glw::entry_points;
use ctsnull_glw::{init, init_extensions_es, init_extensions_gl, ApiType, GlError, NullLoader, Profile};

extern "system" fn fake_entry_point() {}

fn fake_addr() -> *const c_void {
    fake_entry_point as *const c_void
}

/// Resolves every name except those in `unresolved`.
fn loader_without(unresolved: &'static [&'static str]) -> impl Fn(&str) -> *const c_void {
    move |name: &str| {
        if unresolved.iter().any(|n| *n == name) {
            ptr::null()
        } else {
            fake_addr()
        }
    }
}

#[test]
fn test_api_type_parse_and_display() {
    assert_eq!("es3.1".parse::<ApiType>().unwrap(), ApiType::Es31);
    assert_eq!("gl4.3".parse::<ApiType>().unwrap(), ApiType::Gl43);
    assert_eq!("GLES2.0".parse::<ApiType>().unwrap(), ApiType::Es20);
    assert_eq!("gl33".parse::<ApiType>().unwrap(), ApiType::Gl33);

    for api in ApiType::ALL {
        assert_eq!(api.to_string().parse::<ApiType>().unwrap(), api);
    }

    assert!(matches!("gl2.1".parse::<ApiType>(), Err(GlError::UnknownApi(_))));
    assert!(matches!("vk1.0".parse::<ApiType>(), Err(GlError::UnknownApi(_))));
    assert!(matches!("es3.10".parse::<ApiType>(), Err(GlError::UnknownApi(_))));
}

#[test]
fn test_lineage_stays_in_profile() {
    let es: Vec<_> = ApiType::Es32.lineage().collect();
    assert_eq!(es, vec![ApiType::Es20, ApiType::Es30, ApiType::Es31, ApiType::Es32]);

    let gl: Vec<_> = ApiType::Gl31.lineage().collect();
    assert_eq!(gl, vec![ApiType::Gl30, ApiType::Gl31]);
    assert!(gl.iter().all(|api| api.profile() == Profile::Core));
}

#[test]
fn test_init_loads_cumulative_names() {
    let table = init(ApiType::Es31, &loader_without(&[]));

    let expected = entry_points::ES20.len() + entry_points::ES30.len() + entry_points::ES31.len();
    assert_eq!(table.len(), expected);
    assert_eq!(table.loaded_count(), expected);
    assert_eq!(table.api(), Some(ApiType::Es31));

    // From each version in the lineage.
    assert!(table.is_loaded("glReadPixels"));
    assert!(table.is_loaded("glTexStorage2D"));
    assert!(table.is_loaded("glDispatchCompute"));
    // ES 3.2 only.
    assert!(!table.contains("glPrimitiveBoundingBox"));
}

#[test]
fn test_gl_tables_have_no_es_only_names() {
    let table = init(ApiType::Gl44, &loader_without(&[]));
    let expected: usize = ApiType::Gl44
        .lineage()
        .map(|api| entry_points::introduced_in(api).len())
        .sum();
    assert_eq!(table.len(), expected);
    assert!(table.contains("glBufferStorage"));
    assert!(table.contains("glClearDepth"));
    assert!(!table.contains("glBlendBarrier"));
}

#[test]
fn test_unresolved_names_are_recorded() {
    let table = init(ApiType::Es20, &loader_without(&["glReadPixels", "glViewport"]));

    assert!(table.contains("glReadPixels"));
    assert!(!table.is_loaded("glReadPixels"));
    assert!(table.get("glReadPixels").is_none());
    assert!(matches!(
        table.require("glViewport"),
        Err(GlError::MissingEntryPoint(name)) if name == "glViewport"
    ));

    let missing: Vec<_> = table.missing().collect();
    assert_eq!(missing, vec!["glReadPixels", "glViewport"]);
    assert_eq!(table.loaded_count(), table.len() - 2);
}

#[test]
fn test_null_loader_leaves_every_slot_missing() {
    let table = init(ApiType::Gl30, &NullLoader);
    assert!(!table.is_empty());
    assert_eq!(table.loaded_count(), 0);
    assert_eq!(table.missing().count(), table.len());
}

#[test]
fn test_names_are_unique_per_profile() {
    for api in [ApiType::Es32, ApiType::Gl44] {
        let mut seen = HashSet::new();
        for name in entry_points::cumulative(api) {
            assert!(seen.insert(name), "{} listed twice for {}", name, api);
        }
    }
}

#[test]
fn test_extensions_load_only_listed_entry_points() {
    let loader = loader_without(&[]);
    let mut table = init(ApiType::Es20, &loader);
    let base = table.len();

    init_extensions_es(
        &mut table,
        &loader,
        &["GL_OES_vertex_array_object", "GL_EXT_unknown_extension", "GL_OES_vertex_array_object"],
    );

    assert_eq!(table.len(), base + 4);
    assert!(table.is_loaded("glBindVertexArrayOES"));
    assert!(!table.contains("glTexImage3DOES"));
    assert_eq!(table.extensions().collect::<Vec<_>>(), vec!["GL_OES_vertex_array_object"]);
}

#[test]
fn test_extension_family_is_respected() {
    let loader = loader_without(&[]);
    let mut table = init(ApiType::Gl43, &loader);

    // ES-only extension names are not recognised for desktop GL.
    init_extensions_gl(&mut table, &loader, &["GL_OES_texture_3D", "GL_ARB_sparse_texture"]);

    assert!(table.is_loaded("glTexPageCommitmentARB"));
    assert!(!table.contains("glTexImage3DOES"));
    assert_eq!(table.extensions().collect::<Vec<_>>(), vec!["GL_ARB_sparse_texture"]);
}

#[test]
fn test_proc_as_returns_loaded_address() {
    let table = init(ApiType::Es20, &loader_without(&[]));
    let f: extern "system" fn() = unsafe { table.proc_as("glFlush") }.unwrap();
    assert_eq!(f as *const c_void, fake_addr());
    f();
}
