// this_file: crates/typeface-assets/src/dir.rs

//! Directory-backed asset store
//!
//! Asset names are relative to the root. Names that try to leave the root
//! are refused before any filesystem access.

use std::fs::File;
use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use typeface_core::AssetSource;

/// Assets stored as plain files below a root directory
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: Utf8PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Map an asset name to a path below the root
    ///
    /// Empty names, absolute names and names with `..` components are
    /// rejected with [`io::ErrorKind::InvalidInput`].
    pub fn resolve(&self, name: &str) -> io::Result<Utf8PathBuf> {
        let relative = Utf8Path::new(name);
        if name.is_empty() {
            return Err(invalid(name, "empty asset name"));
        }
        if relative.is_absolute() || relative.has_root() {
            return Err(invalid(name, "absolute asset names are not allowed"));
        }
        for component in relative.components() {
            match component {
                Utf8Component::Normal(_) | Utf8Component::CurDir => {}
                _ => return Err(invalid(name, "asset name leaves the asset root")),
            }
        }
        Ok(self.root.join(relative))
    }
}

fn invalid(name: &str, reason: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{}: {}", reason, name))
}

impl AssetSource for DirAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        let path = self.resolve(name)?;
        let file = File::open(path.as_std_path())?;
        // Directories open fine on some platforms but are not assets
        if !file.metadata()?.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a file: {}", path),
            ));
        }
        Ok(Box::new(file))
    }
}
