use serde::Serialize;

use ctsnull_core::NullDriverConfig;
use ctsnull_glw::{init, init_extensions_es, init_extensions_gl, ApiType, InterceptorSet, NullLoader, Profile};

#[derive(Debug, Serialize)]
struct TableSummary<'a> {
    api: String,
    entry_points: usize,
    loaded: usize,
    extensions: Vec<&'a str>,
    traced: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    names: Option<Vec<&'a str>>,
}

/// Initialise a table for `api` against a loader that resolves nothing and
/// describe it. Shows which names a context of that version must provide.
pub fn run(api: ApiType, extensions: &[String], list: bool, json: bool) -> anyhow::Result<()> {
    let requested: Vec<&str> = extensions.iter().map(String::as_str).collect();
    let mut table = init(api, &NullLoader);
    match api.profile() {
        Profile::Es => init_extensions_es(&mut table, &NullLoader, &requested),
        Profile::Core => init_extensions_gl(&mut table, &NullLoader, &requested),
    }

    let config = NullDriverConfig::from_env();
    let hooks = InterceptorSet::from_config(&config.gl);
    let traced: Vec<&str> = table.names().filter(|name| hooks.is_intercepted(name)).collect();

    let summary = TableSummary {
        api: api.to_string(),
        entry_points: table.len(),
        loaded: table.loaded_count(),
        extensions: table.extensions().collect(),
        traced,
        names: list.then(|| table.names().collect()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("  API:           {}", summary.api);
    println!("  Entry points:  {}", summary.entry_points);
    println!("  Loaded:        {}", summary.loaded);
    if !summary.extensions.is_empty() {
        println!("  Extensions:    {}", summary.extensions.join(", "));
    }
    if !summary.traced.is_empty() {
        println!("  Traced:        {}", summary.traced.join(", "));
    }
    if let Some(names) = &summary.names {
        println!();
        for name in names {
            println!("    {}", name);
        }
    }
    println!();
    Ok(())
}
