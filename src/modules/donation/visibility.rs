//! Which donations each role may see and act on.
//!
//! The dashboard queries in the repository encode the same rules in SQL; these
//! predicates guard single-donation actions.

use super::{
    repository::Donation,
    status::{DonationStatus, Phase},
};
use crate::modules::{ngo::repository::Ngo, restaurant::repository::Restaurant};

pub enum Viewer<'a> {
    Restaurant(&'a str),
    Ngo(&'a str),
    Volunteer(&'a str),
}

/// A pending donation is offered to an NGO when it matches the NGO's focus
/// area and comes from a restaurant inside its service area.
pub fn is_available_to_ngo(donation: &Donation, restaurant: &Restaurant, ngo: &Ngo) -> bool {
    donation.status.is_pending()
        && donation.restaurant_id == restaurant.id
        && !restaurant.address.trim().is_empty()
        && donation.preference == ngo.focus_area
        && restaurant.address == ngo.service_area
}

pub fn is_handled_by_ngo(donation: &Donation, ngo_id: &str) -> bool {
    donation.status.ngo_id() == Some(ngo_id)
}

pub fn is_assigned_to_volunteer(donation: &Donation, volunteer_id: &str) -> bool {
    donation.status.volunteer_id() == Some(volunteer_id)
}

pub fn is_active_for_volunteer(donation: &Donation, volunteer_id: &str) -> bool {
    donation.status.phase() == Phase::Accepted && is_assigned_to_volunteer(donation, volunteer_id)
}

pub fn can_view_proof(donation: &Donation, viewer: &Viewer) -> bool {
    if matches!(donation.status, DonationStatus::Pending) {
        return false;
    }

    match viewer {
        Viewer::Restaurant(restaurant_id) => donation.restaurant_id == *restaurant_id,
        Viewer::Ngo(ngo_id) => is_handled_by_ngo(donation, ngo_id),
        Viewer::Volunteer(volunteer_id) => is_assigned_to_volunteer(donation, volunteer_id),
    }
}
