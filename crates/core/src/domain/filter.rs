use super::HackathonStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Oldest,
    #[default]
    Newest,
}

/// Ordering applied to hackathon listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackathonOrder {
    CreatedAt(SortOrder),
    /// Chronological by event start, as the calendar shows them.
    StartDate,
}

impl Default for HackathonOrder {
    fn default() -> Self {
        Self::CreatedAt(SortOrder::Newest)
    }
}

/// Closed set of listing filters. `status: None` lists every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HackathonFilter {
    pub status: Option<HackathonStatus>,
    pub order: HackathonOrder,
}

impl HackathonFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: HackathonStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn calendar() -> Self {
        Self {
            status: Some(HackathonStatus::Approved),
            order: HackathonOrder::StartDate,
        }
    }

    /// Whether this listing may be served without an admin session.
    pub fn is_public(&self) -> bool {
        self.status.is_some_and(HackathonStatus::is_public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_approved_listings_are_public() {
        assert!(HackathonFilter::with_status(HackathonStatus::Approved).is_public());
        assert!(HackathonFilter::calendar().is_public());
        assert!(!HackathonFilter::with_status(HackathonStatus::Submitted).is_public());
        assert!(!HackathonFilter::all().is_public());
    }
}
