use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

const STORE_DIR: &str = "vitrina";
const STORE_FILE: &str = "last-search";

/// Best-effort persistence for the last committed query.
///
/// One raw-text file, no structured encoding. The store never fails its
/// caller: an unavailable or broken backing path makes `save` a no-op and
/// `restore` return `None`, logged at warn level only.
#[derive(Debug, Clone)]
pub struct QueryStore {
    path: PathBuf,
}

impl QueryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory. `None` when no such
    /// directory can be resolved on this system; callers treat that as a
    /// store that is simply absent.
    pub fn new_default() -> Option<Self> {
        let base = dirs::data_dir()?;
        Some(Self {
            path: base.join(STORE_DIR).join(STORE_FILE),
        })
    }

    pub fn save(&self, query: &str) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(?e, path = %self.path.display(), "query store unavailable, save skipped");
            return;
        }
        match fs::write(&self.path, query) {
            Ok(()) => debug!(?query, "query saved"),
            Err(e) => warn!(?e, path = %self.path.display(), "failed to save query, skipped"),
        }
    }

    pub fn restore(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(query) => Some(query),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(?e, path = %self.path.display(), "failed to restore query");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn saves_and_restores_raw_query() {
        let dir = tempdir().expect("create temp dir");
        let store = QueryStore::new(dir.path().join("state").join("last-search"));
        store.save("áuricular wave");
        assert_eq!(store.restore().as_deref(), Some("áuricular wave"));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempdir().expect("create temp dir");
        let store = QueryStore::new(dir.path().join("last-search"));
        store.save("teclado");
        store.save("");
        assert_eq!(store.restore().as_deref(), Some(""));
    }

    #[test]
    fn restore_without_saved_value_is_absent() {
        let dir = tempdir().expect("create temp dir");
        let store = QueryStore::new(dir.path().join("last-search"));
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn broken_backing_path_never_propagates() {
        // The store path itself is a directory, so reads and writes both fail.
        let dir = tempdir().expect("create temp dir");
        let store = QueryStore::new(dir.path());
        store.save("monitor");
        assert_eq!(store.restore(), None);
    }
}
