use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::diagnostics::{LaunchError, Result};

/// Fixed entry-point filename looked up under the base directory.
pub const ENTRY_SCRIPT: &str = "main.lua";

/// The entry script's bytes, read once and owned for the whole run.
///
/// The buffer carries a trailing NUL so it can double as a C-style text blob
/// where the embedding API wants one; `content()` excludes it.
#[derive(Debug)]
pub struct ScriptSource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ScriptSource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Script text without the terminator, exactly the statted byte count.
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Full buffer including the NUL terminator.
    pub fn nul_terminated(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locate, stat, and read `main.lua` under `base_dir`.
///
/// The read is exact: fewer bytes than the statted size is an I/O error, not
/// a tolerated partial read.
pub fn load_entry_script(base_dir: &Path) -> Result<ScriptSource> {
    let path = base_dir.join(ENTRY_SCRIPT);

    let metadata = std::fs::metadata(&path).map_err(|source| LaunchError::ScriptNotFound {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(LaunchError::ScriptNotFound {
            path,
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let len = usize::try_from(metadata.len())
        .map_err(|_| LaunchError::OutOfMemory { bytes: usize::MAX })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len + 1)
        .map_err(|_| LaunchError::OutOfMemory { bytes: len + 1 })?;

    let file = File::open(&path).map_err(|source| LaunchError::Io {
        path: path.clone(),
        source,
    })?;
    let read = file
        .take(len as u64)
        .read_to_end(&mut bytes)
        .map_err(|source| LaunchError::Io {
            path: path.clone(),
            source,
        })?;
    if read != len {
        return Err(LaunchError::Io {
            path,
            source: io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("read {read} of {len} bytes"),
            ),
        });
    }
    bytes.push(0);

    debug!("loaded {} ({} bytes)", path.display(), len);
    Ok(ScriptSource { path, bytes })
}
