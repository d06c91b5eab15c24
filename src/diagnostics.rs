use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Unified error type for the launcher pipeline. Every failure is fatal and
/// maps to exactly one process exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot stat entry script {path}: {source}")]
    ScriptNotFound { path: PathBuf, source: io::Error },
    #[error("cannot allocate {bytes} bytes for script buffer")]
    OutOfMemory { bytes: usize },
    #[error("error reading script {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("initializing Lua interpreter failed: {0}")]
    InterpreterInit(EngineError),
    #[error("compiling script {path} error: {message}")]
    Compile { path: PathBuf, message: String },
    #[error("script execution error: {0}")]
    Script(String),
}

impl LaunchError {
    /// Exit code for this failure class. `0` is success; `2` is reserved for
    /// usage errors reported by the argument parser.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ScriptNotFound { .. } => 3,
            LaunchError::OutOfMemory { .. } => 4,
            LaunchError::Io { .. } => 5,
            LaunchError::InterpreterInit(_) => 6,
            LaunchError::Compile { .. } => 7,
            LaunchError::Script(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
