//! Theme preference persistence.
//!
//! A single key holding `"light"` or `"dark"`:
//! - `window.localStorage` in the browser
//! - a small file under the local data directory on native platforms
//!
//! Reads and writes never surface errors to callers. A missing or corrupt
//! value reads as `None` and a failed write leaves the in-memory theme as the
//! source of truth for the session.

use crate::error::{Result, SiteError};
use crate::types::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, io, path::PathBuf};

pub trait PreferenceStore {
    /// Stored preference, or `None` when unset, unreadable or corrupt.
    fn read(&self) -> Option<ThemeMode>;

    /// Persist a preference. Failures are logged and dropped.
    fn write(&self, mode: ThemeMode);
}

fn parse_stored(raw: Option<String>) -> Result<Option<ThemeMode>> {
    raw.map(|value| value.parse::<ThemeMode>()).transpose()
}

fn soft_read(backend: &str, result: Result<Option<ThemeMode>>) -> Option<ThemeMode> {
    match result {
        Ok(mode) => mode,
        Err(err) => {
            tracing::warn!(backend, %err, "ignoring stored theme preference");
            None
        }
    }
}

fn soft_write(backend: &str, mode: ThemeMode, result: Result<()>) {
    match result {
        Ok(()) => tracing::debug!(backend, %mode, "theme preference saved"),
        Err(err) => tracing::warn!(backend, %mode, %err, "failed to save theme preference"),
    }
}

/// Sanitize storage key for filesystem use
#[cfg(not(target_arch = "wasm32"))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

// ============================================
// Browser backend
// ============================================

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| SiteError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|_| SiteError::StorageUnavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| SiteError::StorageUnavailable("localStorage missing".to_string()))
    }

    fn try_read(&self) -> Result<Option<ThemeMode>> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|_| SiteError::StorageUnavailable("getItem failed".to_string()))?;
        parse_stored(raw)
    }

    fn try_write(&self, mode: ThemeMode) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, mode.as_str())
            .map_err(|_| SiteError::WriteRejected("setItem failed".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn read(&self) -> Option<ThemeMode> {
        soft_read("localStorage", self.try_read())
    }

    fn write(&self, mode: ThemeMode) {
        soft_write("localStorage", mode, self.try_write(mode));
    }
}

// ============================================
// File backend (for native platforms)
// ============================================

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Store under the platform's local data directory, falling back to
    /// `cache/` in the working directory.
    pub fn new(key: &str) -> Self {
        let file_name = sanitize_key(key);
        let path = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("folio").join(file_name),
            None => PathBuf::from("cache").join(file_name),
        };
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn try_read(&self) -> Result<Option<ThemeMode>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_stored(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn try_write(&self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, mode.as_str())?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn read(&self) -> Option<ThemeMode> {
        soft_read("file", self.try_read())
    }

    fn write(&self, mode: ThemeMode) {
        soft_write("file", mode, self.try_write(mode));
    }
}

// ============================================
// In-memory backend
// ============================================

/// Session-only store. Holds the raw string so corrupt values can be
/// represented; `rejecting` builds one whose writes always fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: RefCell::new(Some(raw.to_string())),
            reject_writes: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            value: RefCell::new(None),
            reject_writes: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn try_write(&self, mode: ThemeMode) -> Result<()> {
        if self.reject_writes {
            return Err(SiteError::WriteRejected("quota exceeded".to_string()));
        }
        *self.value.borrow_mut() = Some(mode.as_str().to_string());
        Ok(())
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Option<ThemeMode> {
        soft_read("memory", parse_stored(self.raw()))
    }

    fn write(&self, mode: ThemeMode) {
        soft_write("memory", mode, self.try_write(mode));
    }
}

/// The durable store for the current platform.
pub fn platform_store(key: &str) -> Rc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageStore::new(key))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(FileStore::new(key))
    }
}
