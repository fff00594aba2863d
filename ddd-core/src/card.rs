use maud::{html, Markup};
use time::{macros::format_description, Date};

use ddd_entities::{conference::SchedulingStatus, social::SocialPlatform};

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-900 text-white",
            Self::Secondary => "bg-gray-100 text-gray-900",
            Self::Outline => "border border-gray-300 text-gray-900",
        }
    }
}

/// E.g. `Sat Feb 28 2026` or `TBA`.
pub fn date_label(date: Option<Date>) -> String {
    let Some(date) = date else {
        return "TBA".to_owned();
    };
    let format = format_description!("[weekday repr:short] [month repr:short] [day] [year]");
    date.format(format).unwrap_or_else(|err| {
        log::warn!("Unable to format date {date}: {err}");
        date.to_string()
    })
}

/// Badge on a conference card.
pub const fn status_badge(status: SchedulingStatus) -> (&'static str, BadgeVariant) {
    match status {
        SchedulingStatus::Scheduled => ("Scheduled", BadgeVariant::Default),
        SchedulingStatus::Unscheduled => ("Coming Soon", BadgeVariant::Secondary),
    }
}

/// Badge in the map side panel.
pub const fn map_list_badge(status: SchedulingStatus) -> (&'static str, BadgeVariant) {
    match status {
        SchedulingStatus::Scheduled => ("Scheduled", BadgeVariant::Default),
        SchedulingStatus::Unscheduled => ("TBA", BadgeVariant::Secondary),
    }
}

/// Inline SVG icon of a social platform.
///
/// Unknown platforms get a generic external link icon.
pub fn social_icon_html(platform: SocialPlatform) -> String {
    let shapes = match platform {
        SocialPlatform::Twitter => html! {
            path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" {}
        },
        SocialPlatform::Facebook => html! {
            path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" {}
        },
        SocialPlatform::Instagram => html! {
            rect x="2" y="2" width="20" height="20" rx="5" ry="5" {}
            path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" {}
            line x1="17.5" x2="17.51" y1="6.5" y2="6.5" {}
        },
        SocialPlatform::LinkedIn => html! {
            path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" {}
            rect x="2" y="9" width="4" height="12" {}
            circle cx="4" cy="4" r="2" {}
        },
        SocialPlatform::Bluesky => html! {
            path d="M12 11c-1-2-4-5.5-6.5-7C3 2.5 2 3 2 5c0 1 .5 6 1 7 1 2 4 2.5 6 2-3 .5-5 2-2 5 3 2.5 4.5-1 5-3.5.5 2.5 2 6 5 3.5 3-3 1-4.5-2-5 2 .5 5 0 6-2 .5-1 1-6 1-7 0-2-1-2.5-3.5-1C16 5.5 13 9 12 11z" {}
        },
        SocialPlatform::Other => html! {
            path d="M15 3h6v6" {}
            path d="M10 14 21 3" {}
            path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" {}
        },
    };
    icon_svg(platform, shapes).into_string()
}

fn icon_svg(platform: SocialPlatform, shapes: Markup) -> Markup {
    html! {
        svg
            class={ "w-4 h-4 social-" (platform.as_ref()) }
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg" {
            (shapes)
        }
    }
}
