// Resolution of user selectors against a fetched catalog
//
// Pure functions: callers pass in the explicit selector, the environment
// fallback and the catalog. Nothing here touches the network or the process
// environment.

use crate::catalog::{Build, BuildCatalog, Version, VersionCatalog};
use crate::error::{DownloadError, Result};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Pick the version named by `explicit`, else `env_fallback`, else the first
/// version in catalog order.
///
/// Lookup is exact and case-sensitive.
pub fn resolve_version<'a>(
    explicit: Option<&str>,
    env_fallback: Option<&str>,
    catalog: &'a VersionCatalog,
) -> Result<&'a Version> {
    match non_blank(explicit).or_else(|| non_blank(env_fallback)) {
        Some(selector) => catalog
            .get(selector)
            .ok_or_else(|| DownloadError::UnknownVersion(selector.to_string())),
        None => catalog
            .first()
            .ok_or(DownloadError::CatalogEmpty { what: "versions" }),
    }
}

/// Pick the build numbered `explicit`, else the number in `env_fallback`,
/// else the first build in catalog order.
///
/// `version_id` is only used for error messages.
pub fn resolve_build<'a>(
    explicit: Option<u32>,
    env_fallback: Option<&str>,
    version_id: &str,
    catalog: &'a BuildCatalog,
) -> Result<&'a Build> {
    let selector = match explicit {
        Some(build) => Some(build),
        None => non_blank(env_fallback).map(parse_build_number).transpose()?,
    };

    match selector {
        Some(build) => catalog.get(&build).ok_or_else(|| DownloadError::UnknownBuild {
            version: version_id.to_string(),
            build,
        }),
        None => catalog.first().ok_or(DownloadError::CatalogEmpty { what: "builds" }),
    }
}

/// Parse a build number from text, surrounding whitespace allowed.
pub fn parse_build_number(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(DownloadError::InvalidBuildNumber {
            value: value.to_string(),
            source: None,
        }),
        Ok(build) => Ok(build),
        Err(e) => Err(DownloadError::InvalidBuildNumber {
            value: value.to_string(),
            source: Some(e),
        }),
    }
}
