use std::path::PathBuf;

use tracing::debug;

use crate::{
    diagnostics::{LaunchError, Result},
    engine::{EngineError, LuaEngine, ScriptEngine},
    script, search_path,
};

/// Single-shot bootstrap pipeline: locate and read `main.lua`, extend the
/// runtime's module search path, compile the script, and run it. Every step
/// is fatal on failure; nothing is retried.
pub struct Launcher {
    base_dir: PathBuf,
    native_search_path: Option<String>,
}

impl Launcher {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            native_search_path: None,
        }
    }

    /// Search path for compiled extension modules, typically fixed at build
    /// time. Installed verbatim, overwriting the runtime's default.
    pub fn with_native_search_path(mut self, path: impl Into<String>) -> Self {
        self.native_search_path = Some(path.into());
        self
    }

    /// Run the pipeline against a fresh Lua engine.
    pub fn run(&self) -> Result<()> {
        self.run_with(LuaEngine::new)
    }

    /// Run the pipeline against an engine supplied by `create`. The factory
    /// is invoked only once the entry script has been read successfully.
    pub fn run_with<E, F>(&self, create: F) -> Result<()>
    where
        E: ScriptEngine,
        F: FnOnce() -> std::result::Result<E, EngineError>,
    {
        let source = script::load_entry_script(&self.base_dir)?;
        let patterns = search_path::module_search_patterns(&self.base_dir);

        let mut engine = create().map_err(LaunchError::InterpreterInit)?;

        let existing = engine
            .module_search_path()
            .map_err(LaunchError::InterpreterInit)?;
        let merged = search_path::merge_search_paths(Some(&existing), &patterns);
        engine
            .set_module_search_path(&merged)
            .map_err(LaunchError::InterpreterInit)?;
        debug!("module search path: {merged}");

        if let Some(native) = &self.native_search_path {
            engine
                .set_native_search_path(native)
                .map_err(LaunchError::InterpreterInit)?;
            debug!("native search path: {native}");
        }

        let chunk_name = format!("@{}", source.path().display());
        engine
            .compile(&chunk_name, source.content())
            .map_err(|err| LaunchError::Compile {
                path: source.path().to_path_buf(),
                message: err.to_string(),
            })?;
        debug!("compiled {}", source.path().display());

        engine
            .execute()
            .map_err(|err| LaunchError::Script(err.to_string()))?;
        debug!("script completed");

        Ok(())
    }
}
