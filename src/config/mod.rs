use anyhow::{bail, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use ddd_core::image::ImageCdn;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ddd-conferences.toml";

const ENV_NAME_SITE_URL: &str = "SITE_URL";
const ENV_NAME_CLOUDINARY_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";

#[derive(Debug)]
pub struct Config {
    pub site: Site,
    pub images: Images,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!("{} not found => load default configuration.", file_path.display());
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config);
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides(cfg: &mut raw::Config) {
    if let Ok(url) = env::var(ENV_NAME_SITE_URL) {
        log::debug!("Override site URL with {ENV_NAME_SITE_URL}");
        cfg.site.get_or_insert_with(Default::default).url = url;
    }
    if let Ok(cloud_name) = env::var(ENV_NAME_CLOUDINARY_CLOUD_NAME) {
        log::debug!("Override cloud name with {ENV_NAME_CLOUDINARY_CLOUD_NAME}");
        cfg.images.get_or_insert_with(Default::default).cloud_name = cloud_name;
    }
}

#[derive(Debug)]
pub struct Site {
    /// Canonical base URL without a trailing slash.
    pub url: String,
    pub output_dir: PathBuf,
    /// File stem of the JS/WASM bundle produced by `wasm-bindgen`.
    pub app_bundle: String,
    /// Image shared on social media.
    pub og_image: Option<String>,
}

#[derive(Debug)]
pub struct Images {
    pub cdn: ImageCdn,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { site, images } = from;

        let raw::Site {
            url,
            output_dir,
            app_bundle,
            og_image,
        } = site.unwrap_or_default();

        let url = url.trim().trim_end_matches('/').to_owned();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!("Invalid site URL: {url}");
        }
        if app_bundle.trim().is_empty() {
            bail!("Missing app bundle name");
        }
        let site = Site {
            url,
            output_dir,
            app_bundle,
            og_image: og_image.filter(|img| !img.trim().is_empty()),
        };

        let raw::Images { cloud_name } = images.unwrap_or_default();
        let cloud_name = cloud_name.trim();
        if cloud_name.is_empty() {
            bail!("Missing image CDN cloud name");
        }
        let images = Images {
            cdn: ImageCdn::new(cloud_name),
        };

        Ok(Self { site, images })
    }
}
