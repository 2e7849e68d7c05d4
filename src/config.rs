use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::post_store::DEFAULT_EXTENSION;

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub public_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Defaults {
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Number of posts in the "latest" and "other posts" lists.
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
    #[serde(default)]
    pub fallback_image: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            extension: default_extension(),
            latest_count: default_latest_count(),
            image_prefix: default_image_prefix(),
            fallback_image: String::new(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_latest_count() -> usize {
    5
}

fn default_image_prefix() -> String {
    "/public".to_string()
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .and_then(|p| p.to_str())
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not find the executable directory"))?;
    let str_path = path.to_str()
        .ok_or_else(|| io::Error::new(ErrorKind::InvalidData, format!("Invalid path {}", path.display())))?;
    Ok(PathBuf::from(str_path.replace("${exe_dir}", exe_dir)))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content).map_err(|e| {
        io::Error::new(ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))
    })?;

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
        public_dir: parse_path(cfg.paths.public_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| {
        io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))
    })?;

    parse_config(&cfg_content)
}
