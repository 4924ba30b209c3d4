//! Ordered game listing
//!
//! Custom games always come first, each directory sorted by name on its own.
//! Filesystem enumeration order never leaks into the result.

use std::path::{Path, PathBuf};

use tracing::info;

use super::store::GameStore;
use crate::error::Result;

/// Which directory a game was listed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSource {
    /// Player-made games
    Custom,
    /// Games bundled with the game
    BuiltIn,
}

/// The two directories a listing is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDirs {
    pub custom: PathBuf,
    pub builtin: PathBuf,
}

impl GameDirs {
    pub fn new(custom: impl Into<PathBuf>, builtin: impl Into<PathBuf>) -> Self {
        Self {
            custom: custom.into(),
            builtin: builtin.into(),
        }
    }

    /// Directory for a source
    pub fn dir(&self, source: GameSource) -> &Path {
        match source {
            GameSource::Custom => &self.custom,
            GameSource::BuiltIn => &self.builtin,
        }
    }
}

/// One listed game file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    pub name: String,
    pub source: GameSource,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, source: GameSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Full path of the file this entry was listed from
    pub fn path(&self, dirs: &GameDirs) -> PathBuf {
        dirs.dir(self.source).join(&self.name)
    }
}

/// Games from both directories, custom first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameListing {
    entries: Vec<GameEntry>,
}

impl GameListing {
    /// Read both directories through `store`
    pub fn load(store: &dyn GameStore, dirs: &GameDirs) -> Result<Self> {
        let mut custom = store.list_dir(&dirs.custom)?;
        custom.sort();
        let mut builtin = store.list_dir(&dirs.builtin)?;
        builtin.sort();

        info!(
            custom = custom.len(),
            builtin = builtin.len(),
            "Loaded game listing"
        );

        let entries = custom
            .into_iter()
            .map(|name| GameEntry::new(name, GameSource::Custom))
            .chain(
                builtin
                    .into_iter()
                    .map(|name| GameEntry::new(name, GameSource::BuiltIn)),
            )
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with this name (custom shadows built-in)
    pub fn find(&self, name: &str) -> Option<&GameEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn into_entries(self) -> Vec<GameEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;
    use crate::library::FsStore;
    use std::collections::HashMap;
    use tempfile::tempdir;

    /// Store that hands names back in whatever order it was given
    struct FixedStore {
        dirs: HashMap<PathBuf, Vec<String>>,
    }

    impl FixedStore {
        fn new(custom: &[&str], builtin: &[&str]) -> Self {
            let mut dirs = HashMap::new();
            dirs.insert(
                PathBuf::from("custom"),
                custom.iter().map(|s| s.to_string()).collect(),
            );
            dirs.insert(
                PathBuf::from("games"),
                builtin.iter().map(|s| s.to_string()).collect(),
            );
            Self { dirs }
        }
    }

    impl GameStore for FixedStore {
        fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
            self.dirs
                .get(dir)
                .cloned()
                .ok_or_else(|| LibraryError::ReadDir {
                    path: dir.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn remove_file(&self, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn names(listing: &GameListing) -> Vec<&str> {
        listing.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_custom_sorted_before_builtin() {
        let store = FixedStore::new(&["b.sav", "a.sav"], &["z.sav"]);
        let dirs = GameDirs::new("custom", "games");

        let listing = GameListing::load(&store, &dirs).unwrap();
        assert_eq!(names(&listing), vec!["a.sav", "b.sav", "z.sav"]);
        assert_eq!(listing.entries()[2].source, GameSource::BuiltIn);
    }

    #[test]
    fn test_builtin_never_interleaves_with_custom() {
        let store = FixedStore::new(&["zz.sav", "mm.sav"], &["cc.sav", "aa.sav"]);
        let dirs = GameDirs::new("custom", "games");

        let listing = GameListing::load(&store, &dirs).unwrap();
        assert_eq!(names(&listing), vec!["mm.sav", "zz.sav", "aa.sav", "cc.sav"]);
    }

    #[test]
    fn test_missing_dir_surfaces() {
        let store = FixedStore::new(&[], &[]);
        let dirs = GameDirs::new("custom", "elsewhere");

        assert!(GameListing::load(&store, &dirs).is_err());
    }

    #[test]
    fn test_find_prefers_custom() {
        let store = FixedStore::new(&["same.sav"], &["same.sav"]);
        let dirs = GameDirs::new("custom", "games");

        let listing = GameListing::load(&store, &dirs).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(
            listing.find("same.sav").map(|e| e.source),
            Some(GameSource::Custom)
        );
        assert!(listing.find("other.sav").is_none());
    }

    #[test]
    fn test_load_from_disk() {
        let temp = tempdir().unwrap();
        let dirs = GameDirs::new(temp.path().join("custom"), temp.path().join("games"));
        std::fs::create_dir_all(&dirs.custom).unwrap();
        std::fs::create_dir_all(&dirs.builtin).unwrap();
        std::fs::write(dirs.custom.join("mine.sav"), "").unwrap();
        std::fs::write(dirs.builtin.join("level1.sav"), "").unwrap();

        let listing = GameListing::load(&FsStore, &dirs).unwrap();
        assert_eq!(names(&listing), vec!["mine.sav", "level1.sav"]);
        assert_eq!(
            listing.entries()[1].path(&dirs),
            dirs.builtin.join("level1.sav")
        );
    }
}
