//! Static files that host the web application.

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::{fs, path::Path};
use time::Date;

use ddd_core::{
    card::date_label,
    entities::conference::Conference,
    image::{ImageCdn, ImageOptions},
};

use crate::config::{Config, Site};

const SITE_NAME: &str = "DDD Conferences";
const TITLE: &str = "DDD (Developer Developer Developer) Conferences | UK Developer Events";
const DESCRIPTION: &str = "Discover DDD (Developer Developer Developer) conferences across the UK. Connect with fellow developers, find upcoming events, accommodation, and join our communities. Free community-driven developer conferences.";
const SHARE_TITLE: &str = "DDD (Developer Developer Developer) Conferences";
const OG_DESCRIPTION: &str = "Discover DDD conferences across the UK. Free community-driven developer events connecting developers nationwide.";
const TWITTER_DESCRIPTION: &str =
    "Discover DDD conferences across the UK. Free community-driven developer events.";
const KEYWORDS: &[&str] = &[
    "DDD conferences",
    "Developer Developer Developer",
    "UK developer events",
    "developer conferences",
    "software development",
    "tech conferences UK",
    "DDD North",
    "DDD East Midlands",
    "DDD Southwest",
    "developer community",
];
const ROBOTS: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TAILWIND_JS_URL: &str = "https://cdn.tailwindcss.com";

const OG_IMAGE_WIDTH: u32 = 1200;

pub fn index_html(site: &Site, cdn: &ImageCdn) -> Markup {
    let canonical_url = format!("{}/", site.url);
    let og_image = site
        .og_image
        .as_deref()
        .map(|path| cdn.url(path, &ImageOptions::width(OG_IMAGE_WIDTH)));
    let app_script = format!("import init from './{}.js';\ninit();", site.app_bundle);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                meta name="description" content=(DESCRIPTION);
                meta name="keywords" content=(KEYWORDS.join(", "));
                meta name="author" content=(SITE_NAME);
                meta name="creator" content=(SITE_NAME);
                meta name="publisher" content=(SITE_NAME);
                meta name="robots" content=(ROBOTS);
                meta name="googlebot" content=(ROBOTS);
                link rel="canonical" href=(canonical_url);
                link rel="icon" href="/icon.svg";
                meta property="og:title" content=(SHARE_TITLE);
                meta property="og:description" content=(OG_DESCRIPTION);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:locale" content="en_GB";
                meta property="og:type" content="website";
                @if let Some(image) = &og_image {
                    meta property="og:image" content=(image);
                }
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(SHARE_TITLE);
                meta name="twitter:description" content=(TWITTER_DESCRIPTION);
                link rel="stylesheet" href=(LEAFLET_CSS_URL);
                script src=(LEAFLET_JS_URL) {}
                script src=(TAILWIND_JS_URL) {}
            }
            body class="font-sans antialiased" {
                div id="app" {}
                script type="module" { (PreEscaped(app_script)) }
            }
        }
    }
}

pub fn robots_txt(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub fn sitemap_xml(site_url: &str, last_modified: Date) -> String {
    html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            url {
                loc { (site_url) "/" }
                lastmod { (last_modified) }
                changefreq { "weekly" }
                priority { "1.0" }
            }
        }
    }
    .into_string()
}

/// Write `index.html`, `robots.txt` and `sitemap.xml` into `out_dir`.
pub fn render_to_dir(cfg: &Config, out_dir: &Path, today: Date) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Unable to create directory {}", out_dir.display()))?;
    let files = [
        (
            "index.html",
            index_html(&cfg.site, &cfg.images.cdn).into_string(),
        ),
        ("robots.txt", robots_txt(&cfg.site.url)),
        ("sitemap.xml", sitemap_xml(&cfg.site.url, today)),
    ];
    for (name, contents) in files {
        let path = out_dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Unable to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

/// One line per conference, e.g. `ddd-north  DDD North  Hull  Sat Feb 28 2026`.
pub fn catalog_lines(conferences: &[Conference]) -> Vec<String> {
    conferences
        .iter()
        .map(|c| {
            format!(
                "{:<20} {:<20} {:<12} {}",
                c.id.as_str(),
                c.name,
                c.city,
                date_label(c.date)
            )
        })
        .collect()
}
