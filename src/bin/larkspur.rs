use std::path::PathBuf;
use std::process;

use clap::Parser;
use larkspur::{logging, Launcher};
use tracing::error;

/// Default compiled-module search path, fixed at build time.
const NATIVE_SEARCH_PATH: Option<&str> = option_env!("LARKSPUR_NATIVE_PATH");

#[derive(Parser)]
#[command(author, version, about = "Bootstrap launcher for embedded Lua applications")]
struct Args {
    /// Directory containing main.lua and its modules
    lua_dir: PathBuf,

    /// Search path for compiled extension modules
    #[arg(long, value_name = "PATH")]
    native_path: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut launcher = Launcher::new(args.lua_dir);
    let native_path = args
        .native_path
        .or_else(|| NATIVE_SEARCH_PATH.map(String::from));
    if let Some(native_path) = native_path {
        launcher = launcher.with_native_search_path(native_path);
    }

    if let Err(err) = launcher.run() {
        error!("{err}");
        process::exit(err.exit_code());
    }
}
