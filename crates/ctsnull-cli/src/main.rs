mod device_info;
mod gl_table;
mod session;
mod smoke;

use clap::{Parser, Subcommand};
use tracing::debug;

use ctsnull_glw::ApiType;

#[derive(Parser)]
#[command(name = "ctsnull")]
#[command(about = "ctsnull - null Vulkan driver and GL function table tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fixed physical device the null driver reports
    DeviceInfo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Exercise the null driver through its entry points
    Smoke {
        /// Descriptor sets to allocate in the pool checks
        #[arg(short, long, default_value_t = 16)]
        sets: u32,

        /// Output results as JSON (for scripting)
        #[arg(long)]
        json: bool,
    },

    /// Describe the GL function table for an API version
    GlTable {
        /// API version, e.g. es3.2 or gl4.3
        #[arg(short, long)]
        api: ApiType,

        /// Extension whose entry points to add (repeatable)
        #[arg(short, long)]
        ext: Vec<String>,

        /// Print every entry-point name
        #[arg(short, long)]
        list: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    ctsnull_common::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::DeviceInfo { json } => {
            debug!("querying null physical device");
            device_info::run(json)?;
        }

        Commands::Smoke { sets, json } => {
            debug!("running smoke checks with {} descriptor sets", sets);
            smoke::run(sets, json)?;
        }

        Commands::GlTable {
            api,
            ext,
            list,
            json,
        } => {
            gl_table::run(api, &ext, list, json)?;
        }
    }

    Ok(())
}
