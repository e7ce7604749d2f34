use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow phase as stored in `donations.status`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[serde(rename = "DELIVERED")]
    Delivered,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pending => "PENDING",
            Phase::Accepted => "ACCEPTED",
            Phase::Delivered => "DELIVERED",
        }
    }
}

impl FromStr for Phase {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Phase::Pending),
            "ACCEPTED" => Ok(Phase::Accepted),
            "DELIVERED" => Ok(Phase::Delivered),
            _ => Err(InvalidStatus::UnknownPhase(s.to_string())),
        }
    }
}

/// The donation lifecycle. Once accepted, a donation always carries both the
/// accepting NGO and the volunteer assigned to carry it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status")]
pub enum DonationStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ACCEPTED")]
    Accepted {
        ngo_id: String,
        volunteer_id: String,
    },
    #[serde(rename = "DELIVERED")]
    Delivered {
        ngo_id: String,
        volunteer_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStatus {
    UnknownPhase(String),
    MissingAssignment(Phase),
    UnexpectedAssignment,
}

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPhase(phase) => write!(f, "'{}' is not a valid donation status", phase),
            Self::MissingAssignment(phase) => write!(
                f,
                "{} donation is missing its ngo or volunteer",
                phase.as_str()
            ),
            Self::UnexpectedAssignment => {
                write!(f, "PENDING donation must not have an ngo or volunteer")
            }
        }
    }
}

impl std::error::Error for InvalidStatus {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    NotPending,
    NotAccepted,
    NotAssignedVolunteer,
}

impl DonationStatus {
    pub fn from_columns(
        status: &str,
        ngo_id: Option<String>,
        volunteer_id: Option<String>,
    ) -> Result<Self, InvalidStatus> {
        let phase = status.parse::<Phase>()?;

        match (phase, ngo_id, volunteer_id) {
            (Phase::Pending, None, None) => Ok(Self::Pending),
            (Phase::Pending, _, _) => Err(InvalidStatus::UnexpectedAssignment),
            (Phase::Accepted, Some(ngo_id), Some(volunteer_id)) => Ok(Self::Accepted {
                ngo_id,
                volunteer_id,
            }),
            (Phase::Delivered, Some(ngo_id), Some(volunteer_id)) => Ok(Self::Delivered {
                ngo_id,
                volunteer_id,
            }),
            (phase, _, _) => Err(InvalidStatus::MissingAssignment(phase)),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Pending => Phase::Pending,
            Self::Accepted { .. } => Phase::Accepted,
            Self::Delivered { .. } => Phase::Delivered,
        }
    }

    pub fn ngo_id(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Accepted { ngo_id, .. } | Self::Delivered { ngo_id, .. } => Some(ngo_id.as_str()),
        }
    }

    pub fn volunteer_id(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Accepted { volunteer_id, .. } | Self::Delivered { volunteer_id, .. } => {
                Some(volunteer_id.as_str())
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn accept(&self, ngo_id: String, volunteer_id: String) -> Result<Self, TransitionError> {
        match self {
            Self::Pending => Ok(Self::Accepted {
                ngo_id,
                volunteer_id,
            }),
            _ => Err(TransitionError::NotPending),
        }
    }

    /// The accepting NGO is carried over unchanged.
    pub fn deliver(&self, by_volunteer_id: &str) -> Result<Self, TransitionError> {
        match self {
            Self::Accepted {
                ngo_id,
                volunteer_id,
            } if volunteer_id == by_volunteer_id => Ok(Self::Delivered {
                ngo_id: ngo_id.clone(),
                volunteer_id: volunteer_id.clone(),
            }),
            Self::Accepted { .. } => Err(TransitionError::NotAssignedVolunteer),
            _ => Err(TransitionError::NotAccepted),
        }
    }

    pub fn ensure_cancellable(&self) -> Result<(), TransitionError> {
        match self {
            Self::Pending => Ok(()),
            _ => Err(TransitionError::NotPending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> DonationStatus {
        DonationStatus::Accepted {
            ngo_id: "ngo-1".to_string(),
            volunteer_id: "vol-1".to_string(),
        }
    }

    #[test]
    fn decodes_well_formed_columns() {
        assert_eq!(
            DonationStatus::from_columns("PENDING", None, None),
            Ok(DonationStatus::Pending)
        );
        assert_eq!(
            DonationStatus::from_columns(
                "DELIVERED",
                Some("ngo-1".to_string()),
                Some("vol-1".to_string())
            ),
            Ok(DonationStatus::Delivered {
                ngo_id: "ngo-1".to_string(),
                volunteer_id: "vol-1".to_string(),
            })
        );
    }

    #[test]
    fn rejects_inconsistent_columns() {
        assert_eq!(
            DonationStatus::from_columns("PENDING", Some("ngo-1".to_string()), None),
            Err(InvalidStatus::UnexpectedAssignment)
        );
        assert_eq!(
            DonationStatus::from_columns("ACCEPTED", Some("ngo-1".to_string()), None),
            Err(InvalidStatus::MissingAssignment(Phase::Accepted))
        );
        assert_eq!(
            DonationStatus::from_columns("accepted,3,7", None, None),
            Err(InvalidStatus::UnknownPhase("accepted,3,7".to_string()))
        );
    }

    #[test]
    fn pending_donation_can_be_accepted_once() {
        let status = DonationStatus::Pending
            .accept("ngo-1".to_string(), "vol-1".to_string())
            .unwrap();

        assert_eq!(status, accepted());
        assert_eq!(
            status.accept("ngo-2".to_string(), "vol-2".to_string()),
            Err(TransitionError::NotPending)
        );
    }

    #[test]
    fn delivery_keeps_the_accepting_ngo() {
        let delivered = accepted().deliver("vol-1").unwrap();

        assert_eq!(delivered.phase(), Phase::Delivered);
        assert_eq!(delivered.ngo_id(), Some("ngo-1"));
        assert_eq!(delivered.volunteer_id(), Some("vol-1"));
    }

    #[test]
    fn only_the_assigned_volunteer_can_deliver() {
        assert_eq!(
            accepted().deliver("vol-2"),
            Err(TransitionError::NotAssignedVolunteer)
        );
        assert_eq!(
            DonationStatus::Pending.deliver("vol-1"),
            Err(TransitionError::NotAccepted)
        );
        assert_eq!(
            accepted().deliver("vol-1").unwrap().deliver("vol-1"),
            Err(TransitionError::NotAccepted)
        );
    }

    #[test]
    fn only_pending_donations_are_cancellable() {
        assert!(DonationStatus::Pending.ensure_cancellable().is_ok());
        assert_eq!(
            accepted().ensure_cancellable(),
            Err(TransitionError::NotPending)
        );
    }

    #[test]
    fn serializes_with_a_status_tag() {
        let json = serde_json::to_value(accepted()).unwrap();

        assert_eq!(json["status"], "ACCEPTED");
        assert_eq!(json["ngo_id"], "ngo-1");
        assert_eq!(json["volunteer_id"], "vol-1");
        assert_eq!(
            serde_json::to_value(DonationStatus::Pending).unwrap(),
            serde_json::json!({ "status": "PENDING" })
        );
    }
}
