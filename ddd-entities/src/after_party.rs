#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterParty {
    pub name        : String,
    pub description : String,
    pub location    : String,
    // Free text, e.g. "18:00 - late"
    pub time        : String,
    pub ticket_url  : String,
    pub image       : String,
}
