//! The conferences listed on the site.

use time::macros::date;

use ddd_entities::{
    conference::Conference,
    geo::MapPoint,
    hotel::{Hotel, HotelAvailability},
    id::Id,
    location::LocationRecord,
    social::SocialLink,
};

fn hotel(name: &str, url: &str, image: &str, rating: f32) -> Hotel {
    Hotel {
        name: name.to_owned(),
        image: Some(image.to_owned()),
        rating: Some(rating),
        availability: HotelAvailability::from_legacy(name, url),
    }
}

fn images(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("ddd-conferences/{prefix}-{i}.jpg"))
        .collect()
}

/// All conferences in display order.
pub fn conferences() -> Vec<Conference> {
    vec![
        Conference {
            id: "ddd-north".into(),
            name: "DDD North".into(),
            venue: "University of Hull".into(),
            city: "Hull".into(),
            date: Some(date!(2026 - 02 - 28)),
            website: "https://www.dddnorth.co.uk/".into(),
            pos: MapPoint::from_lat_lng_deg(53.771_680, -0.368_120),
            images: images("ddd-north", 4),
            social: vec![
                SocialLink::new("X (Twitter)", "@dddnorth", "https://x.com/dddnorth/"),
                SocialLink::new("Facebook", "dddnorth", "https://www.facebook.com/dddnorth/"),
                SocialLink::new(
                    "Bluesky",
                    "@dddnorth.bsky.social",
                    "https://bsky.app/profile/did:plc:xzqaftegb7zt5uetbkwihbhn/",
                ),
            ],
            hotels: vec![
                hotel(
                    "Travelodge Hull - Central",
                    "https://www.travelodge.co.uk/hotels/505/Hull-Central-hotel",
                    "https://media.travelodge.co.uk/image/upload/c_fill,h_470,w_850/Rebase/Top%20of%20the%20page/GB0944_Hull_Central_EXT.webp",
                    3.9,
                ),
                hotel(
                    "Premier Inn - City Centre",
                    "https://www.premierinn.com/gb/en/hotels/england/east-riding-of-yorkshire/hull/hull-city-centre.html",
                    "https://www.visithull.org/wp-content/uploads/2019/09/Premier-Inn-Hull.jpg",
                    4.2,
                ),
                hotel(
                    "Holiday Inn Express - City Centre",
                    "https://www.booking.com/hotel/gb/express-by-holiday-inn-hull-city-centre.en-gb.html",
                    "https://digital.ihg.com/is/image/ihg/holiday-inn-express-kingston-upon-hull-2533239719-4x3",
                    4.1,
                ),
            ],
            after_parties: vec![],
        },
        Conference {
            id: "ddd-south-west".into(),
            name: "DDD South West".into(),
            venue: "Engine Shed".into(),
            city: "Bristol".into(),
            date: Some(date!(2026 - 05 - 16)),
            website: "https://dddsouthwest.com/".into(),
            pos: MapPoint::from_lat_lng_deg(51.448_845, -2.583_569),
            images: images("ddd-southwest", 6),
            social: vec![
                SocialLink::new("X (Twitter)", "@dddsouthwest", "https://x.com/dddsouthwest/"),
                SocialLink::new(
                    "Bluesky",
                    "@dddsouthwest.com",
                    "https://bsky.app/profile/did:plc:xzqaftegb7zt5uetbkwihbhn/",
                ),
            ],
            hotels: vec![
                hotel(
                    "Premier Inn - City Centre (Lewins Mead)",
                    "https://www.premierinn.com/gb/en/hotels/england/bristol/bristol/bristol-city-centre-finzels-reach.html",
                    "https://lh3.googleusercontent.com/p/AF1QipPaHoc92PWXrO2RGsN_ErZpTgXEQAt36RMxHlX_=s680-w680-h510-rw",
                    4.3,
                ),
                hotel(
                    "Travelodge - Central Mitchell Lane",
                    "https://www.travelodge.co.uk/hotels/521/Bristol-Central-Mitchell-Lane-hotel",
                    "https://media-cdn.tripadvisor.com/media/photo-s/2d/f4/c5/2b/exterior.jpg",
                    4.0,
                ),
                hotel(
                    "Holiday Inn Express - City Centre",
                    "https://www.booking.com/hotel/gb/ebhibristolcitycentre.en-gb.html",
                    "https://bynder.onthebeach.co.uk/cdn-cgi/image/width=1400,quality=70,fit=cover,format=auto/m/306613f8a6929a12/original/Holiday-Inn-Express-Bristol-City-Centre-United-Kingdom-Bristol-General-view-8.jpg",
                    4.2,
                ),
            ],
            after_parties: vec![],
        },
        Conference {
            id: "ddd-east-midlands".into(),
            name: "DDD East Midlands".into(),
            venue: "Nottingham Trent University".into(),
            city: "Nottingham".into(),
            date: None,
            website: "https://dddeastmidlands.com/".into(),
            pos: MapPoint::from_lat_lng_deg(52.956_862, -1.152_904),
            images: images("ddd-eastmidlands", 5),
            social: vec![
                SocialLink::new("X (Twitter)", "@dddeastmidlands", "https://x.com/dddeastmidlands"),
                SocialLink::new(
                    "Instagram",
                    "@dddeastmidlands",
                    "https://www.instagram.com/dddeastmidlands/",
                ),
                SocialLink::new(
                    "LinkedIn",
                    "DDD East Midlands Limited",
                    "https://www.linkedin.com/company/ddd-east-midlands-limited/",
                ),
            ],
            hotels: vec![],
            after_parties: vec![],
        },
        Conference {
            id: "ddd-east-anglia".into(),
            name: "DDD East Anglia".into(),
            venue: "Hills Road Sixth Form College".into(),
            city: "Cambridge".into(),
            date: None,
            // TODO: switch to the East Anglia site once the organizers confirm its address
            website: "https://dddeastmidlands.com/".into(),
            pos: MapPoint::from_lat_lng_deg(52.188_142, 0.136_258),
            images: images("ddd-eastanglia", 4),
            social: vec![
                SocialLink::new("X (Twitter)", "@DDDEastAnglia", "https://x.com/DDDEastAnglia"),
                SocialLink::new("Facebook", "dddeastanglia", "https://www.facebook.com/dddeastanglia/"),
            ],
            hotels: vec![],
            after_parties: vec![],
        },
    ]
}

/// Map records of all conferences in display order.
pub fn location_records() -> Vec<LocationRecord> {
    conferences().iter().map(LocationRecord::from).collect()
}

pub fn find<'a>(conferences: &'a [Conference], id: &Id) -> Option<&'a Conference> {
    conferences.iter().find(|c| &c.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use ddd_entities::{conference::SchedulingStatus, location::find_duplicate_id};

    use super::*;

    #[test]
    fn unique_ids() {
        let records = location_records();
        assert_eq!(find_duplicate_id(&records), None);
        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn valid_coordinates_within_the_uk() {
        for c in conferences() {
            assert!(c.pos.is_valid(), "{}", c.id);
            assert!((49.0..61.0).contains(&c.pos.lat()), "{}", c.id);
            assert!((-8.0..2.0).contains(&c.pos.lng()), "{}", c.id);
        }
    }

    #[test]
    fn scheduling() {
        let statuses: Vec<_> = conferences()
            .iter()
            .map(Conference::scheduling_status)
            .collect();
        assert_eq!(
            statuses,
            [
                SchedulingStatus::Scheduled,
                SchedulingStatus::Scheduled,
                SchedulingStatus::Unscheduled,
                SchedulingStatus::Unscheduled
            ]
        );
    }

    #[test]
    fn all_hotels_are_bookable() {
        for c in conferences() {
            for h in &c.hotels {
                assert!(h.availability.booking_url().is_some(), "{}", h.name);
            }
        }
    }

    #[test]
    fn find_by_id() {
        let all = conferences();
        let found = find(&all, &"ddd-south-west".into()).unwrap();
        assert_eq!(found.city, "Bristol");
        assert!(find(&all, &"ddd-scotland".into()).is_none());
    }
}
