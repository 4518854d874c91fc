// Catalog model: versions and builds as returned by the PaperMC API

use std::borrow::Borrow;

use crate::error::{DownloadError, Result};

/// A Minecraft server version known to the build API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub id: String,
    /// Build numbers advertised by the versions listing. Informational only,
    /// the authoritative list comes from the builds endpoint.
    pub build_ids: Vec<u32>,
}

impl Version {
    pub fn new(id: impl Into<String>, build_ids: Vec<u32>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DownloadError::invalid_entry(
                "PaperMC API returned a version with an empty id",
            ));
        }
        Ok(Self { id, build_ids })
    }
}

/// A single build of a version, pointing at its server artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub id: u32,
    pub download_url: String,
}

impl Build {
    pub fn new(id: u32, download_url: impl Into<String>) -> Result<Self> {
        let download_url = download_url.into();
        if id == 0 {
            return Err(DownloadError::invalid_entry(
                "PaperMC API returned a build with id 0",
            ));
        }
        if download_url.trim().is_empty() {
            return Err(DownloadError::invalid_entry(format!(
                "PaperMC API returned build {} without a download URL",
                id
            )));
        }
        Ok(Self { id, download_url })
    }
}

/// Entries keyed for exact lookup, iterated in the order they were inserted.
///
/// Inserting an existing key replaces the entry without moving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<K, V> {
    entries: Vec<(K, V)>,
}

pub type VersionCatalog = Catalog<String, Version>;
pub type BuildCatalog = Catalog<u32, Build>;

impl<K, V> Default for Catalog<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> Catalog<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// First entry in insertion order.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl VersionCatalog {
    pub fn from_versions(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut catalog = Self::new();
        for version in versions {
            catalog.insert(version.id.clone(), version);
        }
        catalog
    }
}

impl BuildCatalog {
    pub fn from_builds(builds: impl IntoIterator<Item = Build>) -> Self {
        let mut catalog = Self::new();
        for build in builds {
            catalog.insert(build.id, build);
        }
        catalog
    }
}
