use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

use crate::config::DEFAULT_METHODS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// URL to pre-fill in the request input
    #[clap(short = 'u', long, help = "initial URL")]
    url: Option<String>,

    /// Initially selected HTTP method. Must be one of GET, POST, PUT, DELETE.
    #[clap(short = 'm', long, default_value = "GET", help = "initial HTTP method")]
    method: String,

    /// Write logs to this file instead of stderr
    #[clap(long, help = "log file path")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    url: Option<String>,
    method: String,
    log_file: Option<PathBuf>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            url: args.url,
            method: args.method,
            log_file: args.log_file,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

impl Default for CommandLineArgs {
    fn default() -> Self {
        Self {
            url: None,
            method: DEFAULT_METHODS[0].to_string(),
            log_file: None,
        }
    }
}
