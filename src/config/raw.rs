use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("ddd-conferences.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub site: Option<Site>,
    pub images: Option<Images>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Site {
    pub url: String,
    pub output_dir: PathBuf,
    pub app_bundle: String,
    pub og_image: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Config::default().site.expect("Site configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Images {
    pub cloud_name: String,
}

impl Default for Images {
    fn default() -> Self {
        Config::default().images.expect("Images configuration")
    }
}
