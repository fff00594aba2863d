//! WGS84 positions and bounding boxes.

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A position on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

/// An axis aligned bounding box.
///
/// Boxes that cross the antimeridian are not supported, i.e.
/// the south west corner is always west of the north east corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// A degenerated box that only covers a single point.
    pub const fn from_point(pos: MapPoint) -> Self {
        Self { sw: pos, ne: pos }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat <= self.ne.lat
            && self.sw.lng <= self.ne.lng
    }

    pub fn contains_point(&self, pos: MapPoint) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&pos.lat)
            && (self.sw.lng..=self.ne.lng).contains(&pos.lng)
    }

    /// Grow the box until it contains `pos`.
    pub fn extend(&mut self, pos: MapPoint) {
        self.sw.lat = self.sw.lat.min(pos.lat);
        self.sw.lng = self.sw.lng.min(pos.lng);
        self.ne.lat = self.ne.lat.max(pos.lat);
        self.ne.lng = self.ne.lng.max(pos.lng);
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lng + self.ne.lng) / 2.0,
        )
    }
}
