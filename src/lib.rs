// Library root for paperdl: resolve and download PaperMC server builds

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod paths;
pub mod resolve;
pub mod ui;

pub use error::{DownloadError, Result};
