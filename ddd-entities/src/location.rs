use std::collections::HashSet;

use crate::{conference::*, geo::*, id::*};

/// A single point of interest that is shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: Id,
    pub display_name: String,
    pub city: String,
    pub status: SchedulingStatus,
    pub pos: MapPoint,
}

impl From<&Conference> for LocationRecord {
    fn from(from: &Conference) -> Self {
        Self {
            id: from.id.clone(),
            display_name: from.name.clone(),
            city: from.city.clone(),
            status: from.scheduling_status(),
            pos: from.pos,
        }
    }
}

/// Returns the first id that occurs more than once.
pub fn find_duplicate_id(records: &[LocationRecord]) -> Option<&Id> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|r| &r.id)
        .find(|id| !seen.insert(id.as_str()))
}
