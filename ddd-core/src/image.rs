//! Responsive image URLs served by the Cloudinary CDN.

pub const DEFAULT_CLOUD_NAME: &str = "dfutm7d1x";

const CDN_BASE_URL: &str = "https://res.cloudinary.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quality {
    /// Let the CDN pick a quality level.
    #[default]
    Auto,
    /// `1..=100`
    Fixed(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Maximum width in pixels; images are never upscaled.
    /// `Some(0)` means no limit.
    pub width: Option<u32>,
    pub quality: Quality,
}

impl ImageOptions {
    pub const fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            quality: Quality::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCdn {
    cloud_name: String,
}

impl Default for ImageCdn {
    fn default() -> Self {
        Self::new(DEFAULT_CLOUD_NAME)
    }
}

impl ImageCdn {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    /// Rewrite an image path into a CDN URL with format and quality
    /// directives.
    ///
    /// Absolute URLs, e.g. of external hotel images, are returned as they are.
    pub fn url(&self, path: &str, options: &ImageOptions) -> String {
        if is_absolute_url(path) {
            return path.to_owned();
        }
        let path = path.strip_prefix('/').unwrap_or(path);
        let mut params = vec!["f_auto".to_owned()];
        match options.quality {
            Quality::Fixed(q) if q > 0 => params.push(format!("q_{q}")),
            _ => params.push("q_auto".to_owned()),
        }
        if let Some(width) = options.width.filter(|w| *w > 0) {
            params.push(format!("w_{width}"));
            params.push("c_limit".to_owned());
        }
        format!(
            "{CDN_BASE_URL}/{}/image/upload/{}/{path}",
            self.cloud_name,
            params.join(",")
        )
    }
}

pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_absolute_urls() {
        let cdn = ImageCdn::default();
        let url = "https://media.travelodge.co.uk/image/upload/GB0944_Hull_Central_EXT.webp";
        assert_eq!(cdn.url(url, &ImageOptions::width(80)), url);
        let url = "http://example.com/hotel.jpg";
        assert_eq!(cdn.url(url, &ImageOptions::default()), url);
    }

    #[test]
    fn rewrite_relative_paths() {
        let cdn = ImageCdn::default();
        assert_eq!(
            cdn.url("ddd-conferences/ddd-north-1.jpg", &ImageOptions::default()),
            "https://res.cloudinary.com/dfutm7d1x/image/upload/f_auto,q_auto/ddd-conferences/ddd-north-1.jpg"
        );
    }

    #[test]
    fn strip_leading_slash() {
        let cdn = ImageCdn::new("demo");
        assert_eq!(
            cdn.url("/placeholder.svg", &ImageOptions::default()),
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto/placeholder.svg"
        );
    }

    #[test]
    fn limit_width() {
        let cdn = ImageCdn::default();
        let url = cdn.url("a.jpg", &ImageOptions::width(800));
        assert!(url.ends_with("/f_auto,q_auto,w_800,c_limit/a.jpg"));
    }

    #[test]
    fn zero_width_is_no_limit() {
        let url = ImageCdn::default().url("a.jpg", &ImageOptions::width(0));
        assert!(!url.contains("w_0"));
        assert!(url.ends_with("/f_auto,q_auto/a.jpg"));
    }

    #[test]
    fn fixed_quality() {
        let cdn = ImageCdn::default();
        let options = ImageOptions {
            width: None,
            quality: Quality::Fixed(70),
        };
        assert!(cdn.url("a.jpg", &options).ends_with("/f_auto,q_70/a.jpg"));
        let options = ImageOptions {
            width: None,
            quality: Quality::Fixed(0),
        };
        assert!(cdn.url("a.jpg", &options).ends_with("/f_auto,q_auto/a.jpg"));
    }
}
