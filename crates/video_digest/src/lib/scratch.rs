use std::{
    fs::{create_dir_all, remove_dir_all},
    path::{Path, PathBuf},
};

use uuid::Uuid;

/// Request scoped working directory, removed with everything in it on drop.
///
/// Names are `<label>-<uuid>` so concurrent requests for the same video never
/// share a directory.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create(root: &Path, label: &str) -> std::io::Result<Self> {
        let path = root.join(format!("{label}-{}", Uuid::new_v4().simple()));
        create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = remove_dir_all(&self.path) {
                tracing::warn!(error = ?e, path = ?self.path, "Failed to clean up scratch directory");
            } else {
                tracing::debug!(path = ?self.path, "Cleaned up scratch directory");
            }
        }
    }
}

/// Downloaded audio, valid for as long as the artifact is alive
#[derive(Debug)]
pub struct AudioArtifact {
    file: PathBuf,
    scratch: ScratchDir,
}

impl AudioArtifact {
    pub fn new(file: PathBuf, scratch: ScratchDir) -> Self {
        Self { file, scratch }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn workdir(&self) -> &Path {
        self.scratch.path()
    }
}
