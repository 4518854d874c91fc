// Download command: resolve a version and build, then fetch the server JAR

use std::path::PathBuf;

use log::{debug, info};

use crate::catalog::CatalogClient;
use crate::config::Environment;
use crate::error::Result;
use crate::paths;
use crate::resolve;
use crate::ui;

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub version: Option<String>,
    pub build: Option<u32>,
    pub output: String,
    pub dry_run: bool,
}

/// What was resolved and whether it was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub version: String,
    pub build: u32,
    pub destination: PathBuf,
    pub downloaded: bool,
}

pub async fn download(
    request: &DownloadRequest,
    env: &Environment,
    client: &dyn CatalogClient,
) -> Result<Outcome> {
    let pb = ui::spinner("Resolving Minecraft server version...");
    let versions = match client.fetch_versions().await {
        Ok(versions) => versions,
        Err(e) => {
            ui::clear_bar(&pb);
            return Err(e);
        }
    };
    let version = match resolve::resolve_version(
        request.version.as_deref(),
        env.mc_version.as_deref(),
        &versions,
    ) {
        Ok(version) => version,
        Err(e) => {
            ui::clear_bar(&pb);
            return Err(e);
        }
    };
    ui::finish_spinner_resolved(&pb, "Version", &version.id);

    let pb = ui::spinner(&format!("Resolving build of {}...", version.id));
    let builds = match client.fetch_builds(&version.id).await {
        Ok(builds) => builds,
        Err(e) => {
            ui::clear_bar(&pb);
            return Err(e);
        }
    };
    let build = match resolve::resolve_build(
        request.build,
        env.mc_build.as_deref(),
        &version.id,
        &builds,
    ) {
        Ok(build) => build,
        Err(e) => {
            ui::clear_bar(&pb);
            return Err(e);
        }
    };
    ui::finish_spinner_resolved(&pb, "Build", &build.id.to_string());

    if !version.build_ids.is_empty() && !version.build_ids.contains(&build.id) {
        debug!(
            "Build {} is not in the build list advertised for {}",
            build.id, version.id
        );
    }

    let destination = paths::build_path(&request.output, version, build);

    ui::action(&format!(
        "Downloading PaperMC server version {} build {}...",
        version.id, build.id
    ));
    ui::action(&format!("Saving to \"{}\"...", destination.display()));

    let mut outcome = Outcome {
        version: version.id.clone(),
        build: build.id,
        destination,
        downloaded: false,
    };

    if request.dry_run {
        ui::status("[DRY RUN]", "No real download will be performed");
        return Ok(outcome);
    }

    info!("Downloading {}", build.download_url);
    client.download_build(build, &outcome.destination).await?;
    outcome.downloaded = true;

    ui::success("Download completed!");
    Ok(outcome)
}
