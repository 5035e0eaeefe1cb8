//! Persistence Store — two independent JSON values on disk.
//!
//! Mirrors a flat key-value store: the item list and a parallel bool array
//! of hidden flags, saved separately and re-applied positionally on load.
//! Corrupt or missing data loads as absent; save failures are logged and
//! never surfaced to the caller.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::item::Item;

const ITEMS_FILE: &str = "wheel_items.json";
const HIDDEN_FILE: &str = "wheel_hidden.json";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the platform data directory. Returns `None` when
    /// no data directory is available or it cannot be created; the app
    /// then simply runs without persistence.
    pub fn open_default() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "spinwheel")?;
        let dir = dirs.data_dir().to_path_buf();
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!("cannot create data dir {}: {}", dir.display(), e);
            return None;
        }
        Some(Self { dir })
    }

    /// Open a store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_items(&self) -> Option<Vec<Item>> {
        let raw = fs::read_to_string(self.dir.join(ITEMS_FILE)).ok()?;
        items_from_json(&raw)
    }

    pub fn save_items(&self, items: &[Item]) {
        self.write(ITEMS_FILE, serde_json::to_string(items));
    }

    /// Re-apply persisted hidden flags positionally onto `items`. A length
    /// mismatch (the list changed between saves) restores only the
    /// overlapping prefix; that partial restoration is an accepted
    /// limitation of the positional encoding.
    pub fn apply_hidden(&self, items: &mut [Item]) -> bool {
        let raw = match fs::read_to_string(self.dir.join(HIDDEN_FILE)) {
            Ok(raw) => raw,
            Err(_) => return false,
        };
        match hidden_from_json(&raw) {
            Some(flags) => {
                apply_hidden_flags(items, &flags);
                true
            }
            None => false,
        }
    }

    pub fn save_hidden(&self, items: &[Item]) {
        let flags: Vec<bool> = items.iter().map(|it| it.hidden).collect();
        self.write(HIDDEN_FILE, serde_json::to_string(&flags));
    }

    fn write(&self, name: &str, serialized: serde_json::Result<String>) {
        let json = match serialized {
            Ok(json) => json,
            Err(e) => {
                log::warn!("cannot serialize {}: {}", name, e);
                return;
            }
        };
        let path = self.dir.join(name);
        if let Err(e) = fs::write(&path, json) {
            log::warn!("cannot write {}: {}", path.display(), e);
        }
    }
}

fn items_from_json(raw: &str) -> Option<Vec<Item>> {
    serde_json::from_str(raw).ok()
}

fn hidden_from_json(raw: &str) -> Option<Vec<bool>> {
    serde_json::from_str(raw).ok()
}

fn apply_hidden_flags(items: &mut [Item], flags: &[bool]) {
    for (i, hidden) in flags.iter().enumerate() {
        if let Some(item) = items.get_mut(i) {
            item.hidden = *hidden;
        }
    }
}
