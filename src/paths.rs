// Output path helpers for downloaded server JARs

use std::path::{Path, PathBuf};

use crate::catalog::{Build, Version};
use crate::constants::JAR_EXTENSION;

/// File name used when the output path names a directory:
/// `papermc_<version>-<build>.jar`
pub fn build_file_name(version: &Version, build: &Build) -> String {
    format!("papermc_{}-{}.{}", version.id, build.id, JAR_EXTENSION)
}

/// Extension of the last path component, or an empty string when it has none.
///
/// Dotfiles (`.jar`) and trailing dots (`server.`) have no extension.
pub fn extension(path: &str) -> &str {
    let Some(name) = Path::new(path).file_name().and_then(|n| n.to_str()) else {
        return "";
    };
    match name.rfind('.') {
        Some(index) if index > 0 && index < name.len() - 1 => &name[index + 1..],
        _ => "",
    }
}

/// Turn the user-supplied output path into the file the JAR is written to.
///
/// - existing directory, or a missing path without extension: the generated
///   file name is appended
/// - missing path with an extension other than `jar`: `.jar` is appended to the
///   whole path, so `server.txt` becomes `server.txt.jar`
/// - anything else is used as is
pub fn build_path(path: &str, version: &Version, build: &Build) -> PathBuf {
    let path = if path.trim().is_empty() { "./" } else { path };

    let target = Path::new(path);
    let append_file_name = if target.exists() {
        target.is_dir()
    } else {
        match extension(path) {
            "" => true,
            ext if ext != JAR_EXTENSION => {
                return PathBuf::from(format!("{}.{}", path, JAR_EXTENSION));
            }
            _ => false,
        }
    };

    if !append_file_name {
        return PathBuf::from(path);
    }

    let file_name = build_file_name(version, build);
    if path.ends_with('/') {
        PathBuf::from(format!("{}{}", path, file_name))
    } else {
        PathBuf::from(format!("{}/{}", path, file_name))
    }
}
