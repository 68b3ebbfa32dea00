use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::TokenStore;

/// Token store backed by a single file.
///
/// Reads take a shared lock and writes an exclusive one, so two CLI
/// processes never observe a half-written token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<String> {
        let mut file = File::open(&self.path)?;
        FileExt::lock_shared(&file)?;
        let mut content = String::new();
        let result = file.read_to_string(&mut content);
        FileExt::unlock(&file)?;
        result?;
        Ok(content.trim().to_string())
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(false);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        FileExt::lock_exclusive(&file)?;
        let result = file
            .set_len(0)
            .and_then(|_| file.write_all(token.as_bytes()))
            .and_then(|_| file.flush());
        FileExt::unlock(&file)?;
        result
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> String {
        match self.read() {
            Ok(token) => token,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                String::new()
            }
        }
    }

    fn set_token(&self, token: &str) {
        if let Err(e) = self.write(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist token");
        }
    }

    fn remove_token(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove token file");
            }
        }
    }
}
