/// How a recommended hotel can be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelAvailability {
    /// A booking page exists.
    Bookable { url: String },
    /// The hotel is known but there is no booking page to link to.
    Unlinked,
    /// The organizers did not announce a hotel yet.
    ToBeConfirmed,
    /// There is no venue to stay at, e.g. for online events.
    NotApplicable,
}

const PLACEHOLDER_URL: &str = "#";
const TBC_SENTINEL: &str = "TBC";
const NOT_APPLICABLE_SENTINEL: &str = "N/A";

impl HotelAvailability {
    /// Classify free-text hotel data that encodes the availability
    /// with sentinel values instead of an explicit status.
    ///
    /// - names containing `N/A` are [`HotelAvailability::NotApplicable`]
    /// - the name `TBC` is [`HotelAvailability::ToBeConfirmed`]
    /// - a missing or `#` URL is [`HotelAvailability::ToBeConfirmed`] if the
    ///   name mentions `TBC` and [`HotelAvailability::Unlinked`] otherwise
    pub fn from_legacy(name: &str, url: &str) -> Self {
        let name = name.trim();
        let url = url.trim();
        if name.contains(NOT_APPLICABLE_SENTINEL) {
            return Self::NotApplicable;
        }
        if name == TBC_SENTINEL {
            return Self::ToBeConfirmed;
        }
        if url.is_empty() || url == PLACEHOLDER_URL {
            if name.contains(TBC_SENTINEL) {
                return Self::ToBeConfirmed;
            }
            return Self::Unlinked;
        }
        Self::Bookable {
            url: url.to_owned(),
        }
    }

    pub fn booking_url(&self) -> Option<&str> {
        match self {
            Self::Bookable { url } => Some(url),
            _ => None,
        }
    }

    /// Short badge text for hotels that cannot be booked yet.
    pub const fn badge(&self) -> Option<&'static str> {
        match self {
            Self::ToBeConfirmed => Some("TBC"),
            Self::NotApplicable => Some("Online"),
            Self::Bookable { .. } | Self::Unlinked => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub image: Option<String>,
    /// Average guest rating, e.g. `4.2`.
    pub rating: Option<f32>,
    pub availability: HotelAvailability,
}

impl Hotel {
    pub fn visible_rating(&self) -> Option<f32> {
        self.rating.filter(|r| *r > 0.0)
    }
}
