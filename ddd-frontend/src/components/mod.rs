mod badge;
mod conference_card;
mod image_carousel;
mod leaflet_backend;
mod map;
mod signup;

pub use self::{
    badge::*, conference_card::*, image_carousel::*, leaflet_backend::*, map::*, signup::*,
};
