// CLI module for handling command-line interface

use clap::Parser;

use crate::commands::DownloadRequest;
use crate::constants::DEFAULT_OUTPUT;

#[derive(Parser, Debug)]
#[command(name = "paperdl")]
#[command(version)]
#[command(about = "Download Paper Minecraft server.")]
pub struct Cli {
    /// Paper server version to download (latest by default, or MC_VERSION)
    #[arg(short = 'p', long = "mc-version", value_name = "VERSION")]
    pub mc_version: Option<String>,

    /// Paper server build number to download (latest by default, or MC_BUILD)
    #[arg(short = 'b', long = "mc-build", value_name = "BUILD", value_parser = clap::value_parser!(u32).range(1..))]
    pub mc_build: Option<u32>,

    /// Path where the Paper JAR file will be downloaded
    #[arg(short = 'o', long = "out", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out: String,

    /// Resolve and report without downloading anything
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn request(&self) -> DownloadRequest {
        DownloadRequest {
            version: self.mc_version.clone(),
            build: self.mc_build,
            output: self.out.clone(),
            dry_run: self.dry_run,
        }
    }
}
