//! Everything the map renderer needs to know about markers, tiles and
//! the initial viewport, independent of the mapping library.

use maud::html;

use ddd_entities::{conference::SchedulingStatus, geo::*, id::Id, location::*};

use crate::bbox::bounding_box;

mod widget;

pub use self::widget::*;

/// Roughly the center of the United Kingdom.
pub const DEFAULT_CENTER: MapPoint = MapPoint::from_lat_lng_deg(54.5, -4.0);
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Padding in pixels around the markers when fitting the viewport.
pub const FIT_BOUNDS_PADDING: Padding = Padding { x: 50.0, y: 50.0 };

pub const LEGEND_HINT: &str = "Click markers for details";

/// Heading of the scrollable side panel that lists every record.
pub const LIST_TITLE: &str = "Active Conferences";

pub const OSM_TILE_LAYER: TileLayer = TileLayer {
    url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
    max_zoom: 19,
};

pub const MARKER_ICON: IconGeometry = IconGeometry {
    size: (32.0, 32.0),
    anchor: (16.0, 32.0),
    popup_anchor: (0.0, -32.0),
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayer {
    /// Slippy map URL template.
    pub url: &'static str,
    /// Must be displayed on the map.
    pub attribution: &'static str,
    pub max_zoom: u8,
}

/// Pixel geometry of a marker icon: `(x, y)` tuples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub size: (f64, f64),
    pub anchor: (f64, f64),
    pub popup_anchor: (f64, f64),
}

/// The two visual marker variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// Green pin for scheduled events.
    Confirmed,
    /// Amber pin for events without a date.
    Pending,
}

impl MarkerStyle {
    /// Legend entries in display order.
    pub const LEGEND: [Self; 2] = [Self::Confirmed, Self::Pending];

    pub const fn for_status(status: SchedulingStatus) -> Self {
        match status {
            SchedulingStatus::Scheduled => Self::Confirmed,
            SchedulingStatus::Unscheduled => Self::Pending,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Scheduled",
            Self::Pending => "TBA",
        }
    }

    pub const fn fill(self) -> &'static str {
        match self {
            Self::Confirmed => "#16a34a",
            Self::Pending => "#f59e0b",
        }
    }

    pub const fn stroke(self) -> &'static str {
        match self {
            Self::Confirmed => "#15803d",
            Self::Pending => "#d97706",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Confirmed => "custom-marker marker-confirmed",
            Self::Pending => "custom-marker marker-pending",
        }
    }

    /// Background class of the small status dot.
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Confirmed => "bg-green-600",
            Self::Pending => "bg-amber-500",
        }
    }

    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Confirmed => "text-green-600",
            Self::Pending => "text-amber-600",
        }
    }

    /// Inner HTML of the marker icon: a colored pin with a pulsing dot.
    pub fn icon_html(self) -> String {
        html! {
            div class="relative" {
                svg width="32" height="32" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" {
                    path
                        d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"
                        fill=(self.fill())
                        stroke=(self.stroke())
                        stroke-width="2" {}
                    circle cx="12" cy="10" r="3" fill="white" {}
                }
                div class={ "absolute -top-1 -right-1 w-3 h-3 rounded-full animate-pulse " (self.dot_class()) } {}
            }
        }
        .into_string()
    }
}

/// A marker as it should appear on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: Id,
    pub pos: MapPoint,
    pub style: MarkerStyle,
    pub popup_html: String,
}

impl From<&LocationRecord> for MapMarker {
    fn from(from: &LocationRecord) -> Self {
        let style = MarkerStyle::for_status(from.status);
        Self {
            id: from.id.clone(),
            pos: from.pos,
            style,
            popup_html: popup_html(from),
        }
    }
}

/// Popup content with the name, city and status of a record.
pub fn popup_html(record: &LocationRecord) -> String {
    let style = MarkerStyle::for_status(record.status);
    html! {
        div class="font-sans" {
            div class="font-semibold text-sm" { (record.display_name) }
            div class="text-xs text-gray-600" { (record.city) }
            div class={ "text-xs font-medium mt-1 " (style.text_class()) } { (style.label()) }
        }
    }
    .into_string()
}

/// All markers of a map and the viewport that contains them.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPlan {
    pub markers: Vec<MapMarker>,
    /// `None` if there is nothing to fit.
    pub bounds: Option<MapBbox>,
}

impl MapPlan {
    pub fn new(records: &[LocationRecord]) -> Self {
        if let Some(id) = find_duplicate_id(records) {
            log::warn!("Location record {id} occurs more than once");
        }
        let markers = records.iter().map(MapMarker::from).collect();
        let bounds = bounding_box(records.iter().map(|r| r.pos));
        Self { markers, bounds }
    }
}

#[cfg(test)]
mod tests {
    use ddd_entities::builders::*;
    use ddd_entities::conference::Conference;
    use time::macros::date;

    use super::*;

    fn record(id: &str, scheduled: bool, lat: f64, lng: f64) -> LocationRecord {
        let date = scheduled.then_some(date!(2026 - 05 - 16));
        let c = Conference::build()
            .id(id)
            .name(&format!("DDD {id}"))
            .city("Bristol")
            .date(date)
            .pos(MapPoint::from_lat_lng_deg(lat, lng))
            .finish();
        LocationRecord::from(&c)
    }

    #[test]
    fn one_marker_per_record_styled_by_status() {
        let records = vec![
            record("north", true, 53.77, -0.37),
            record("south-west", true, 51.45, -2.58),
            record("east-midlands", false, 52.96, -1.15),
        ];
        let plan = MapPlan::new(&records);
        assert_eq!(plan.markers.len(), records.len());
        for (marker, record) in plan.markers.iter().zip(&records) {
            assert_eq!(marker.id, record.id);
            assert_eq!(marker.pos, record.pos);
            let expected = if record.status.is_scheduled() {
                MarkerStyle::Confirmed
            } else {
                MarkerStyle::Pending
            };
            assert_eq!(marker.style, expected);
        }
        let bounds = plan.bounds.unwrap();
        assert!(records.iter().all(|r| bounds.contains_point(r.pos)));
    }

    #[test]
    fn empty_plan_has_no_bounds() {
        let plan = MapPlan::new(&[]);
        assert!(plan.markers.is_empty());
        assert!(plan.bounds.is_none());
    }

    #[test]
    fn popup_shows_name_city_and_status() {
        let html = popup_html(&record("north", true, 53.77, -0.37));
        assert!(html.contains("DDD north"));
        assert!(html.contains("Bristol"));
        assert!(html.contains("Scheduled"));
        assert!(html.contains("text-green-600"));

        let html = popup_html(&record("east", false, 52.19, 0.14));
        assert!(html.contains("TBA"));
        assert!(html.contains("text-amber-600"));
    }

    #[test]
    fn popup_escapes_text() {
        let mut r = record("x", false, 52.0, 0.0);
        r.display_name = "<script>alert(1)</script>".into();
        let html = popup_html(&r);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn icon_uses_style_colors() {
        let html = MarkerStyle::Pending.icon_html();
        assert!(html.contains("#f59e0b"));
        assert!(html.contains("#d97706"));
        assert!(html.contains("bg-amber-500"));
        assert!(!html.contains("#16a34a"));
    }

    #[test]
    fn legend_lists_both_variants() {
        let labels: Vec<_> = MarkerStyle::LEGEND.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Scheduled", "TBA"]);
        assert_eq!(LEGEND_HINT, "Click markers for details");
        assert_eq!(LIST_TITLE, "Active Conferences");
    }
}
