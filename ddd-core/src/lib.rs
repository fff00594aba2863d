//! # ddd-core
//!
//! The site's business logic, independent of any rendering target.

pub mod bbox;
pub mod card;
pub mod catalog;
pub mod image;
pub mod map;
pub mod signup;

pub mod entities {
    pub use ddd_entities::*;
}
