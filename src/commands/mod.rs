// Commands module

pub mod download;

pub use download::{DownloadRequest, Outcome, download};
