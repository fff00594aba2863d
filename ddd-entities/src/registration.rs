use crate::id::*;

/// A complete request to join the WhatsApp community of a conference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub conference: Id,
}
