//! Destination file writes shared by the values file and the cost script.

use std::fs;
use std::path::Path;

use crate::error::{CostError, Result};

/// How exported files reach the filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write the destination in place.
    Direct,
    /// Write `<dest>.tmp` next to the destination, then rename over it.
    Atomic,
}

impl WriteMode {
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic { Self::Atomic } else { Self::Direct }
    }
}

/// Writes `content` to `path`, replacing any existing file.
pub(crate) fn write_file(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Direct => fs::write(path, content).map_err(|e| CostError::io(path, e))?,
        WriteMode::Atomic => {
            let mut temp_name = path.as_os_str().to_owned();
            temp_name.push(".tmp");
            let temp_path = Path::new(&temp_name);

            fs::write(temp_path, content).map_err(|e| CostError::io(temp_path, e))?;
            fs::rename(temp_path, path).map_err(|e| CostError::io(path, e))?;
        }
    }

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
