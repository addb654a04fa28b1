//! Saved templates and data records on disk.
//!
//! The store is a directory with one subdirectory per item kind, e.g.
//! `.mdfill/template/receipt.md` and `.mdfill/data/receipt.yaml`. Names
//! are addressed without extension; lookups try each known extension for
//! the kind in order.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ItemKind {
    Template,
    Data,
}

impl ItemKind {
    /// Subdirectory holding this kind of item.
    pub fn scope(self) -> &'static str {
        match self {
            ItemKind::Template => "template",
            ItemKind::Data => "data",
        }
    }

    /// File extensions recognized for this kind, in lookup order.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ItemKind::Template => &["md", "html"],
            ItemKind::Data => &["yaml", "json"],
        }
    }

    /// Extension used when writing a new item.
    pub fn default_extension(self) -> &'static str {
        self.extensions()[0]
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store error: {0}")]
    Io(#[from] io::Error),
    #[error("no saved {kind} named '{name}'")]
    NotFound { kind: ItemKind, name: String },
    #[error("invalid name '{0}': must not be empty, contain path separators, or start with a dot")]
    InvalidName(String),
}

pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// List saved names of one kind, extension stripped and sorted.
    /// A store that was never written to lists as empty.
    pub async fn list(&self, kind: ItemKind) -> Result<Vec<String>, StoreError> {
        let dir = self.root.join(kind.scope());
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let recognized = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| kind.extensions().contains(&ext));
            if !recognized {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Read a saved item's contents.
    pub async fn get(&self, kind: ItemKind, name: &str) -> Result<String, StoreError> {
        validate_name(name)?;
        for path in self.candidates(kind, name) {
            match fs::read_to_string(&path).await {
                Ok(contents) => return Ok(contents),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(StoreError::NotFound {
            kind,
            name: name.to_string(),
        })
    }

    /// Write an item under `name`, creating the scope directory as needed.
    /// Returns the path written.
    pub async fn put(&self, kind: ItemKind, name: &str, contents: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        let dir = self.root.join(kind.scope());
        fs::create_dir_all(&dir).await?;
        let path = dir.join(format!("{name}.{}", kind.default_extension()));
        fs::write(&path, contents).await?;
        Ok(path)
    }

    /// Remove a saved item. Returns the path removed.
    pub async fn delete(&self, kind: ItemKind, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        for path in self.candidates(kind, name) {
            match fs::remove_file(&path).await {
                Ok(()) => return Ok(path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(StoreError::NotFound {
            kind,
            name: name.to_string(),
        })
    }

    fn candidates(&self, kind: ItemKind, name: &str) -> Vec<PathBuf> {
        let dir = self.root.join(kind.scope());
        kind.extensions()
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .collect()
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let bad = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.starts_with('.');
    if bad {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
