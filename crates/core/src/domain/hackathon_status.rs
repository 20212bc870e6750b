use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Review state of a hackathon submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HackathonStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}

impl HackathonStatus {
    pub const ALL: [HackathonStatus; 3] = [Self::Submitted, Self::Approved, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Only approved events are visible without an admin session.
    pub fn is_public(self) -> bool {
        self == Self::Approved
    }
}

impl fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HackathonStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HackathonStatus;

    #[test]
    fn every_status_roundtrips_through_its_name() {
        for status in HackathonStatus::ALL {
            assert_eq!(status.as_str().parse::<HackathonStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "published"
            .parse::<HackathonStatus>()
            .expect_err("unknown status should fail");

        assert_eq!(
            err.to_string(),
            "invalid hackathon status: 'published'. expected submitted, approved or rejected"
        );
    }

    #[test]
    fn new_submissions_default_to_submitted() {
        assert_eq!(HackathonStatus::default(), HackathonStatus::Submitted);
        assert!(!HackathonStatus::Submitted.is_public());
        assert!(HackathonStatus::Approved.is_public());
    }
}
