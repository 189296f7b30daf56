use std::collections::HashSet;

use skillbook_core::models::booking::{Booking, BookingStatus};
use uuid::Uuid;

/// Component-local state of the admin booking list: the fetched bookings and
/// the set of ids currently checked for a bulk action.
///
/// All methods are pure state transitions. Network effects live in
/// [`crate::client::AdminClient`]; the caller decides when to apply the
/// optimistic rewrite via [`BookingsView::commit_bulk`].
#[derive(Debug, Default)]
pub struct BookingsView {
    bookings: Vec<Booking>,
    selected: HashSet<Uuid>,
}

impl BookingsView {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings,
            selected: HashSet::new(),
        }
    }

    /// Replace the booking list with a fresh fetch, dropping any selection.
    pub fn replace(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.selected.clear();
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in booking-list order, for a deterministic fan-out.
    pub fn selected_ids(&self) -> Vec<Uuid> {
        self.bookings
            .iter()
            .map(|booking| booking.id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Add or remove a single id from the selection set.
    pub fn toggle(&mut self, id: Uuid) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every booking, or clear the selection when everything is
    /// already selected.
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.bookings.len() {
            self.selected.clear();
        } else {
            self.selected = self.bookings.iter().map(|booking| booking.id).collect();
        }
    }

    /// Optimistically rewrite the status of every selected booking to the
    /// target and clear the selection.
    ///
    /// This is the local reconciliation step after a bulk action; it applies
    /// regardless of per-item request outcomes, which the caller gets
    /// separately from the client's bulk report.
    pub fn commit_bulk(&mut self, status: BookingStatus) {
        for booking in &mut self.bookings {
            if self.selected.contains(&booking.id) {
                booking.status = status;
            }
        }
        self.selected.clear();
    }
}
