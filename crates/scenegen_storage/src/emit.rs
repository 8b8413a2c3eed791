use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EmitError, Result};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| EmitError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes scene files into one directory.
///
/// The directory exists for as long as the emitter does: it is created in
/// [`SceneEmitter::create`] before any file can be written.
#[derive(Debug)]
pub struct SceneEmitter {
    dir: PathBuf,
    extension: String,
}

impl SceneEmitter {
    pub fn create(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self {
            dir,
            extension: extension.into(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file named after `stem`
    pub fn path_for(&self, stem: impl Display) -> PathBuf {
        self.dir.join(format!("{}.{}", stem, self.extension))
    }

    /// Writes `contents` to `<dir>/<stem>.<ext>`, replacing any existing file
    pub fn emit(&self, stem: impl Display, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(stem);
        fs::write(&path, contents).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote scene");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_nested_dir_idempotently() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        let emitter = SceneEmitter::create(&dir, "xml").unwrap();
        assert_eq!(emitter.dir(), dir.as_path());
    }

    #[test]
    fn test_emit_names_and_overwrites() {
        let tmp = tempdir().unwrap();
        let emitter = SceneEmitter::create(tmp.path().join("triangle"), "xml").unwrap();

        let path = emitter.emit(25, "first").unwrap();
        assert_eq!(path, tmp.path().join("triangle").join("25.xml"));
        emitter.emit(25, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_dir_blocked_by_file() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let err = SceneEmitter::create(&blocker, "xml").unwrap_err();
        assert!(matches!(err, EmitError::CreateDir { ref path, .. } if *path == blocker));
    }
}
