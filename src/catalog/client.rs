// PaperMC API client: version and build listings plus artifact download

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, info};
use reqwest::Response;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use crate::catalog::http;
use crate::catalog::model::{Build, BuildCatalog, Version, VersionCatalog};
use crate::constants::{DEFAULT_API_URL, PARTIAL_SUFFIX, SERVER_DOWNLOAD_KEY};
use crate::error::{DownloadError, Result};
use crate::ui;

/// Remote source of versions, builds and build artifacts.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// List every version, in the order the API returns them.
    async fn fetch_versions(&self) -> Result<VersionCatalog>;

    /// List every build of `version_id`, in the order the API returns them.
    async fn fetch_builds(&self, version_id: &str) -> Result<BuildCatalog>;

    /// Download the artifact of `build` to `destination`.
    ///
    /// Whatever already exists at `destination` is removed first. On failure
    /// `destination` does not exist afterwards.
    async fn download_build(&self, build: &Build, destination: &Path) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct VersionsResponse {
    versions: Vec<VersionEntry>,
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    version: VersionInfo,
    #[serde(default)]
    builds: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct VersionInfo {
    id: String,
}

#[derive(Debug, Deserialize)]
struct BuildEntry {
    id: u32,
    #[serde(default)]
    downloads: HashMap<String, DownloadEntry>,
}

#[derive(Debug, Deserialize)]
struct DownloadEntry {
    url: String,
}

fn into_version_catalog(response: VersionsResponse) -> Result<VersionCatalog> {
    let versions = response
        .versions
        .into_iter()
        .map(|entry| Version::new(entry.version.id, entry.builds))
        .collect::<Result<Vec<_>>>()?;
    Ok(VersionCatalog::from_versions(versions))
}

/// Builds without a server artifact are skipped; the rest stay selectable.
fn into_build_catalog(entries: Vec<BuildEntry>) -> Result<BuildCatalog> {
    let mut builds = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let Some(download) = entry.downloads.remove(SERVER_DOWNLOAD_KEY) else {
            debug!(
                "Skipping build {}: no '{}' download",
                entry.id, SERVER_DOWNLOAD_KEY
            );
            continue;
        };
        builds.push(Build::new(entry.id, download.url)?);
    }
    Ok(BuildCatalog::from_builds(builds))
}

/// Client for the PaperMC "Fill" API of a single project.
#[derive(Debug, Clone)]
pub struct PaperApiClient {
    base_url: String,
}

impl Default for PaperApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl PaperApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn versions_url(&self) -> String {
        format!("{}/versions", self.base_url)
    }

    pub fn builds_url(&self, version_id: &str) -> String {
        format!(
            "{}/versions/{}/builds",
            self.base_url,
            urlencoding::encode(version_id)
        )
    }
}

#[async_trait]
impl CatalogClient for PaperApiClient {
    async fn fetch_versions(&self) -> Result<VersionCatalog> {
        let url = self.versions_url();
        debug!("Fetching versions from {}", url);
        let response: VersionsResponse = http::fetch_json(&url).await?;
        let catalog = into_version_catalog(response)?;
        debug!("PaperMC API lists {} version(s)", catalog.len());
        Ok(catalog)
    }

    async fn fetch_builds(&self, version_id: &str) -> Result<BuildCatalog> {
        let url = self.builds_url(version_id);
        debug!("Fetching builds from {}", url);
        let entries: Vec<BuildEntry> = http::fetch_json(&url).await?;
        let catalog = into_build_catalog(entries)?;
        debug!("Version {} has {} build(s)", version_id, catalog.len());
        Ok(catalog)
    }

    async fn download_build(&self, build: &Build, destination: &Path) -> Result<()> {
        // `server.jar/` names the file `server.jar`.
        let destination: PathBuf = destination.components().collect();
        let destination = destination.as_path();

        cleanup_download(destination).await?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::fs("Unable to create download directory", parent, e))?;
        }

        let response = http::get_ok(&build.download_url).await?;

        let partial = partial_path(destination);
        let written = match stream_to_file(response, &build.download_url, &partial).await {
            Ok(written) => written,
            Err(e) => {
                // Best effort, the stream error is what gets reported.
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        if let Err(e) = tokio::fs::rename(&partial, destination).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(DownloadError::fs(
                "Unable to move download into place",
                destination,
                e,
            ));
        }

        info!(
            "Wrote {} byte(s) of build {} to {}",
            written,
            build.id,
            destination.display()
        );
        Ok(())
    }
}

/// Remove whatever a previous run left at `destination`.
///
/// Files and empty directories are removed; a non-empty directory is an error.
async fn cleanup_download(destination: &Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(destination).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(DownloadError::fs(
                "Unable to inspect previously downloaded file",
                destination,
                e,
            ));
        }
    };

    debug!("Removing previous download at {}", destination.display());
    let removed = if metadata.is_dir() {
        tokio::fs::remove_dir(destination).await
    } else {
        tokio::fs::remove_file(destination).await
    };

    removed.map_err(|e| {
        DownloadError::fs("Unable to delete previously downloaded file", destination, e)
    })
}

/// Sibling of `destination` the body is streamed into: `<file name>.part`
fn partial_path(destination: &Path) -> PathBuf {
    match destination.file_name() {
        Some(name) => {
            let mut name = name.to_owned();
            name.push(PARTIAL_SUFFIX);
            destination.with_file_name(name)
        }
        None => {
            let mut path = destination.as_os_str().to_owned();
            path.push(PARTIAL_SUFFIX);
            PathBuf::from(path)
        }
    }
}

/// Stream a response body into `path` chunk by chunk, returning bytes written
async fn stream_to_file(response: Response, url: &str, path: &Path) -> Result<u64> {
    let pb = ui::download_bar(response.content_length());

    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| DownloadError::fs("Unable to create download file", path, e))?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(source) => {
                ui::clear_bar(&pb);
                return Err(DownloadError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };

        if let Err(e) = file.write_all(&chunk).await {
            ui::clear_bar(&pb);
            return Err(DownloadError::fs("Unable to write download file", path, e));
        }

        written += chunk.len() as u64;
        pb.set_position(written);
    }

    file.flush()
        .await
        .map_err(|e| DownloadError::fs("Unable to write download file", path, e))?;

    ui::clear_bar(&pb);
    Ok(written)
}
