// Constants module for shared string constants

/// Base URL of the PaperMC build API for the `paper` project.
pub const DEFAULT_API_URL: &str = "https://fill.papermc.io/v3/projects/paper";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "PAPERDL_API_URL";

/// Version selector fallback when `--mc-version` is not given.
pub const VERSION_ENV: &str = "MC_VERSION";

/// Build selector fallback when `--mc-build` is not given.
pub const BUILD_ENV: &str = "MC_BUILD";

pub const DEFAULT_OUTPUT: &str = "./papermc.jar";

/// Download key of the server artifact inside a build entry.
pub const SERVER_DOWNLOAD_KEY: &str = "server:default";

pub const JAR_EXTENSION: &str = "jar";

/// Suffix of the temporary file a download streams into before being renamed.
pub const PARTIAL_SUFFIX: &str = ".part";

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("paperdl/", env!("CARGO_PKG_VERSION"));
