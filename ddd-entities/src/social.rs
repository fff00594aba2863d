use strum::{AsRefStr, EnumIter};

/// Known social media platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
    Bluesky,
    /// Any other website, shown as a generic external link.
    Other,
}

impl SocialPlatform {
    /// Resolve a platform from its display label, e.g. `X (Twitter)`.
    pub fn resolve(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("twitter") || label.contains("x (") {
            Self::Twitter
        } else if label.contains("facebook") {
            Self::Facebook
        } else if label.contains("instagram") {
            Self::Instagram
        } else if label.contains("linkedin") {
            Self::LinkedIn
        } else if label.contains("bluesky") {
            Self::Bluesky
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub handle: String,
    pub url: String,
    pub platform: SocialPlatform,
}

impl SocialLink {
    pub fn new(
        label: impl Into<String>,
        handle: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let label = label.into();
        let platform = SocialPlatform::resolve(&label);
        Self {
            label,
            handle: handle.into(),
            url: url.into(),
            platform,
        }
    }

    /// Tooltip text, e.g. `Facebook: dddnorth`.
    pub fn title(&self) -> String {
        format!("{}: {}", self.label, self.handle)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn resolve_platform_labels() {
        assert_eq!(SocialPlatform::resolve("X (Twitter)"), SocialPlatform::Twitter);
        assert_eq!(SocialPlatform::resolve("twitter"), SocialPlatform::Twitter);
        assert_eq!(SocialPlatform::resolve("Facebook"), SocialPlatform::Facebook);
        assert_eq!(SocialPlatform::resolve("Instagram"), SocialPlatform::Instagram);
        assert_eq!(SocialPlatform::resolve("LinkedIn"), SocialPlatform::LinkedIn);
        assert_eq!(SocialPlatform::resolve("Bluesky"), SocialPlatform::Bluesky);
        assert_eq!(SocialPlatform::resolve("Mastodon"), SocialPlatform::Other);
        assert_eq!(SocialPlatform::resolve(""), SocialPlatform::Other);
    }

    #[test]
    fn platform_keys_are_kebab_case() {
        let keys: Vec<_> = SocialPlatform::iter().map(|p| p.as_ref().to_owned()).collect();
        assert_eq!(
            keys,
            ["twitter", "facebook", "instagram", "linked-in", "bluesky", "other"]
        );
    }

    #[test]
    fn link_resolves_platform_once() {
        let link = SocialLink::new("Facebook", "dddnorth", "https://www.facebook.com/dddnorth/");
        assert_eq!(link.platform, SocialPlatform::Facebook);
        assert_eq!(link.title(), "Facebook: dddnorth");
    }
}
