#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # ddd-entities
//!
//! Reusable, agnostic domain entities for the DDD conferences site.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod after_party;
pub mod conference;
pub mod geo;
pub mod hotel;
pub mod id;
pub mod location;
pub mod registration;
pub mod social;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
