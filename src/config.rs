use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

/// Runtime configuration, read once at startup from the environment.
///
/// The admin tool owns one authoritative data tree; the published site's tree
/// is a separate destination that the publish step keeps in sync. Both are
/// configurable because their locations are deployment-specific.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Authoritative content: projects.json, about.json, social.json.
    pub data_dir: PathBuf,
    /// Authoritative image assets (thumbnails/ lives beneath it).
    pub public_dir: PathBuf,
    /// Root of the published site's checkout (data/ and public/ beneath it).
    pub site_dir: PathBuf,
    /// Static files for the admin UI pages.
    pub ui_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("ADMIN_PORT", "3100"),
            data_dir: try_load("ADMIN_DATA_DIR", "data"),
            public_dir: try_load("ADMIN_PUBLIC_DIR", "public"),
            site_dir: try_load("SITE_DIR", "../portfolio-website"),
            ui_dir: try_load("ADMIN_UI_DIR", "ui"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value
        .parse()
        .map_err(|e| format!("invalid {key} value {value:?}: {e}"))
        .expect("Environment misconfigured!")
}
