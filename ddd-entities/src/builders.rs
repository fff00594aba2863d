pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::conference_builder::*;

pub mod conference_builder {

    use super::*;
    use crate::{conference::*, geo::*, hotel::*, social::*};
    use time::Date;

    #[derive(Debug)]
    pub struct ConferenceBuild {
        conference: Conference,
    }

    impl ConferenceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.conference.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.conference.name = name.into();
            self
        }
        pub fn venue(mut self, venue: &str) -> Self {
            self.conference.venue = venue.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.conference.city = city.into();
            self
        }
        pub fn date(mut self, date: Option<Date>) -> Self {
            self.conference.date = date;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.conference.pos = pos;
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.conference.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn social(mut self, social: Vec<SocialLink>) -> Self {
            self.conference.social = social;
            self
        }
        pub fn hotels(mut self, hotels: Vec<Hotel>) -> Self {
            self.conference.hotels = hotels;
            self
        }
        pub fn finish(self) -> Conference {
            self.conference
        }
    }

    impl Builder for Conference {
        type Build = ConferenceBuild;
        fn build() -> ConferenceBuild {
            ConferenceBuild {
                conference: Conference {
                    id: "ddd-test".into(),
                    name: "DDD Test".into(),
                    venue: "Town Hall".into(),
                    city: "London".into(),
                    date: None,
                    website: "https://example.com".into(),
                    pos: MapPoint::from_lat_lng_deg(51.5, -0.12),
                    images: vec![],
                    social: vec![],
                    hotels: vec![],
                    after_parties: vec![],
                },
            }
        }
    }
}
