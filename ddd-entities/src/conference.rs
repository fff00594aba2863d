use time::Date;

use crate::{after_party::*, geo::*, hotel::*, id::*, social::*};

/// Whether a concrete date is known for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingStatus {
    Scheduled,
    Unscheduled,
}

impl SchedulingStatus {
    pub const fn from_date(date: Option<Date>) -> Self {
        if date.is_some() {
            Self::Scheduled
        } else {
            Self::Unscheduled
        }
    }

    pub const fn is_scheduled(self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Conference {
    pub id            : Id,
    pub name          : String,
    pub venue         : String,
    pub city          : String,
    // `None` until the organizers announce a date.
    pub date          : Option<Date>,
    pub website       : String,
    pub pos           : MapPoint,
    /// Image paths relative to the image CDN root or absolute URLs.
    pub images        : Vec<String>,
    pub social        : Vec<SocialLink>,
    pub hotels        : Vec<Hotel>,
    pub after_parties : Vec<AfterParty>,
}

impl Conference {
    pub const fn scheduling_status(&self) -> SchedulingStatus {
        SchedulingStatus::from_date(self.date)
    }
}
