//! Bootstrap launcher for embedded Lua applications.
//!
//! Given a base directory, the launcher locates the fixed entry script
//! `main.lua`, reads it into memory, extends the runtime's module search
//! path so sibling modules resolve, creates a Lua interpreter seeded with
//! its standard library, then compiles and runs the script — surfacing
//! every compile-time or run-time failure with a distinct exit code.

pub mod diagnostics;
pub mod engine;
pub mod launcher;
pub mod logging;
pub mod script;
pub mod search_path;

pub use diagnostics::{LaunchError, Result};
pub use engine::{EngineError, LuaEngine, ScriptEngine};
pub use launcher::Launcher;
pub use script::{load_entry_script, ScriptSource, ENTRY_SCRIPT};
