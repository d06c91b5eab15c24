use mlua::{Function, Lua, Table};
use thiserror::Error;

/// Diagnostic reported by the embedded runtime. The launcher prints it
/// verbatim and never inspects its structure.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct EngineError(String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<mlua::Error> for EngineError {
    fn from(err: mlua::Error) -> Self {
        Self(err.to_string())
    }
}

/// Seam between the launcher pipeline and the embedded scripting runtime.
///
/// Compilation and execution are two phases: `compile` retains the chunk,
/// `execute` runs it with no arguments and no results.
pub trait ScriptEngine {
    /// Current module search configuration as the runtime sees it.
    fn module_search_path(&self) -> Result<String, EngineError>;

    /// Install a module search configuration on the instance.
    fn set_module_search_path(&mut self, path: &str) -> Result<(), EngineError>;

    /// Install the compiled-module (native extension) search path,
    /// overwriting any prior value.
    fn set_native_search_path(&mut self, path: &str) -> Result<(), EngineError>;

    fn compile(&mut self, chunk_name: &str, source: &[u8]) -> Result<(), EngineError>;

    fn execute(&mut self) -> Result<(), EngineError>;
}

/// `mlua`-backed engine. `Lua::new` opens the full safe standard library, so
/// a freshly created engine is already seeded; the `package` loader inherits
/// any `LUA_PATH` from the process environment.
pub struct LuaEngine {
    lua: Lua,
    chunk: Option<Function>,
}

impl LuaEngine {
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            lua: Lua::new(),
            chunk: None,
        })
    }

    fn package(&self) -> Result<Table, EngineError> {
        Ok(self.lua.globals().get::<Table>("package")?)
    }
}

impl ScriptEngine for LuaEngine {
    fn module_search_path(&self) -> Result<String, EngineError> {
        Ok(self.package()?.get::<String>("path")?)
    }

    fn set_module_search_path(&mut self, path: &str) -> Result<(), EngineError> {
        Ok(self.package()?.set("path", path)?)
    }

    fn set_native_search_path(&mut self, path: &str) -> Result<(), EngineError> {
        Ok(self.package()?.set("cpath", path)?)
    }

    fn compile(&mut self, chunk_name: &str, source: &[u8]) -> Result<(), EngineError> {
        let function = self.lua.load(source).set_name(chunk_name).into_function()?;
        self.chunk = Some(function);
        Ok(())
    }

    fn execute(&mut self) -> Result<(), EngineError> {
        let chunk = self
            .chunk
            .take()
            .ok_or_else(|| EngineError::new("no compiled chunk to execute"))?;
        Ok(chunk.call::<()>(())?)
    }
}
