//! Seat map with selection state.

use std::collections::HashMap;

use crate::domain::{DomainError, Rupees, Seat, SeatId, SeatPosition, SeatStatus};

/// What a click on a seat did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The seat was available and is now selected.
    Selected,
    /// The seat was selected and is available again.
    Deselected,
    /// The seat is booked; nothing changed.
    Booked,
}

/// The seats of one bus for one page visit, plus the visitor's selection.
///
/// Invariant: a seat's status is `Selected` exactly when its id is in the
/// selection list. Booked seats never change status.
#[derive(Debug, Clone)]
pub struct SeatMap {
    seats: Vec<Seat>,
    index: HashMap<SeatId, usize>,
    /// Selected seat ids in the order they were picked.
    selected: Vec<SeatId>,
}

impl SeatMap {
    /// Build a seat map from seats in display order.
    ///
    /// Seats passed in as `Selected` become the initial selection, in order.
    /// A repeated id keeps only its first occurrence.
    pub fn new(seats: Vec<Seat>) -> Self {
        let mut index = HashMap::with_capacity(seats.len());
        let mut unique = Vec::with_capacity(seats.len());
        for seat in seats {
            if index.contains_key(&seat.id) {
                continue;
            }
            index.insert(seat.id, unique.len());
            unique.push(seat);
        }

        let selected = unique
            .iter()
            .filter(|s| s.is_selected())
            .map(|s| s.id)
            .collect();

        Self {
            seats: unique,
            index,
            selected,
        }
    }

    /// Click on a seat.
    ///
    /// Available seats become selected and join the end of the selection;
    /// selected seats become available and leave it; booked seats are left
    /// alone. Unknown ids are an error.
    pub fn toggle(&mut self, id: SeatId) -> Result<ToggleOutcome, DomainError> {
        let &i = self.index.get(&id).ok_or(DomainError::UnknownSeat(id))?;
        let seat = &mut self.seats[i];

        match seat.status {
            SeatStatus::Booked => Ok(ToggleOutcome::Booked),
            SeatStatus::Available => {
                seat.status = SeatStatus::Selected;
                self.selected.push(id);
                Ok(ToggleOutcome::Selected)
            }
            SeatStatus::Selected => {
                seat.status = SeatStatus::Available;
                self.selected.retain(|s| *s != id);
                Ok(ToggleOutcome::Deselected)
            }
        }
    }

    /// Replay a selection carried over from the URL.
    ///
    /// Each id is selected if it is available. Ids that are unknown, booked
    /// in this map, or already selected are skipped. Returns the ids that
    /// could not be selected.
    pub fn apply_selection(&mut self, ids: &[SeatId]) -> Vec<SeatId> {
        let mut dropped = Vec::new();
        for &id in ids {
            if self.selected.contains(&id) {
                continue;
            }
            match self.toggle(id) {
                Ok(ToggleOutcome::Selected | ToggleOutcome::Deselected) => {}
                Ok(ToggleOutcome::Booked) | Err(_) => dropped.push(id),
            }
        }
        dropped
    }

    /// The selection that clicking `id` would produce, without changing the
    /// map.
    pub fn selection_after_toggle(&self, id: SeatId) -> Vec<SeatId> {
        match self.get(id).map(|s| s.status) {
            Some(SeatStatus::Available) => {
                let mut next = self.selected.clone();
                next.push(id);
                next
            }
            Some(SeatStatus::Selected) => {
                self.selected.iter().copied().filter(|s| *s != id).collect()
            }
            Some(SeatStatus::Booked) | None => self.selected.clone(),
        }
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.index.get(&id).map(|&i| &self.seats[i])
    }

    /// All seats in display order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Seats in one position (e.g. all lower berths), in display order.
    pub fn seats_in(&self, position: SeatPosition) -> impl Iterator<Item = &Seat> {
        self.seats
            .iter()
            .filter(move |s| s.id.position() == position)
    }

    /// Selected seat ids in the order they were picked.
    pub fn selected(&self) -> &[SeatId] {
        &self.selected
    }

    /// Selected seats in the order they were picked.
    pub fn selected_seats(&self) -> impl Iterator<Item = &Seat> {
        self.selected.iter().filter_map(|id| self.get(*id))
    }

    /// Sum of the prices of the selected seats.
    pub fn total(&self) -> Rupees {
        self.selected_seats().map(|s| s.price).sum()
    }

    /// Number of seats neither booked nor selected.
    pub fn available_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.status == SeatStatus::Available)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SeatId {
        SeatId::parse(s).unwrap()
    }

    fn seat(s: &str, status: SeatStatus, price: u32) -> Seat {
        Seat::new(id(s), status, Rupees(price))
    }

    fn small_map() -> SeatMap {
        SeatMap::new(vec![
            seat("L1", SeatStatus::Available, 650),
            seat("U1", SeatStatus::Booked, 600),
            seat("S1", SeatStatus::Available, 550),
            seat("S3", SeatStatus::Available, 550),
        ])
    }

    #[test]
    fn select_and_deselect() {
        let mut map = small_map();

        assert_eq!(map.toggle(id("L1")).unwrap(), ToggleOutcome::Selected);
        assert_eq!(map.get(id("L1")).unwrap().status, SeatStatus::Selected);
        assert_eq!(map.selected(), [id("L1")]);
        assert_eq!(map.total(), Rupees(650));

        assert_eq!(map.toggle(id("L1")).unwrap(), ToggleOutcome::Deselected);
        assert_eq!(map.get(id("L1")).unwrap().status, SeatStatus::Available);
        assert!(map.selected().is_empty());
        assert_eq!(map.total(), Rupees::ZERO);
    }

    #[test]
    fn booked_seat_is_noop() {
        let mut map = small_map();
        for _ in 0..3 {
            assert_eq!(map.toggle(id("U1")).unwrap(), ToggleOutcome::Booked);
        }
        assert_eq!(map.get(id("U1")).unwrap().status, SeatStatus::Booked);
        assert!(map.selected().is_empty());
    }

    #[test]
    fn unknown_seat_is_error() {
        let mut map = small_map();
        assert!(matches!(
            map.toggle(id("S9")),
            Err(DomainError::UnknownSeat(s)) if s == id("S9")
        ));
    }

    #[test]
    fn selection_keeps_click_order() {
        let mut map = small_map();
        map.toggle(id("S3")).unwrap();
        map.toggle(id("L1")).unwrap();
        map.toggle(id("S1")).unwrap();
        assert_eq!(map.selected(), [id("S3"), id("L1"), id("S1")]);

        map.toggle(id("L1")).unwrap();
        assert_eq!(map.selected(), [id("S3"), id("S1")]);
    }

    #[test]
    fn l1_and_s3_total_1200() {
        let mut map = small_map();
        map.toggle(id("L1")).unwrap();
        map.toggle(id("S3")).unwrap();
        assert_eq!(map.total(), Rupees(1200));
    }

    #[test]
    fn apply_selection_drops_booked_and_unknown() {
        let mut map = small_map();
        let dropped = map.apply_selection(&[id("L1"), id("U1"), id("S7"), id("S3")]);

        assert_eq!(dropped, [id("U1"), id("S7")]);
        assert_eq!(map.selected(), [id("L1"), id("S3")]);
        assert_eq!(map.get(id("U1")).unwrap().status, SeatStatus::Booked);
    }

    #[test]
    fn apply_selection_ignores_duplicates() {
        let mut map = small_map();
        let dropped = map.apply_selection(&[id("S1"), id("S1")]);

        assert!(dropped.is_empty());
        assert_eq!(map.selected(), [id("S1")]);
        assert_eq!(map.total(), Rupees(550));
    }

    #[test]
    fn selection_after_toggle_does_not_mutate() {
        let mut map = small_map();
        map.toggle(id("S1")).unwrap();

        assert_eq!(map.selection_after_toggle(id("L1")), [id("S1"), id("L1")]);
        assert!(map.selection_after_toggle(id("S1")).is_empty());
        assert_eq!(map.selection_after_toggle(id("U1")), [id("S1")]);
        assert_eq!(map.selected(), [id("S1")]);
    }

    #[test]
    fn new_picks_up_preselected_seats() {
        let map = SeatMap::new(vec![
            seat("L1", SeatStatus::Selected, 650),
            seat("S1", SeatStatus::Available, 550),
            seat("S2", SeatStatus::Selected, 550),
        ]);
        assert_eq!(map.selected(), [id("L1"), id("S2")]);
        assert_eq!(map.total(), Rupees(1200));
    }

    #[test]
    fn new_drops_repeated_ids() {
        let map = SeatMap::new(vec![
            seat("L1", SeatStatus::Available, 650),
            seat("L1", SeatStatus::Booked, 1),
        ]);
        assert_eq!(map.seats().len(), 1);
        assert_eq!(map.get(id("L1")).unwrap().price, Rupees(650));
    }

    #[test]
    fn seats_in_position() {
        let map = small_map();
        let seaters: Vec<String> = map
            .seats_in(SeatPosition::Seater)
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(seaters, ["S1", "S3"]);
    }

    #[test]
    fn available_count_excludes_selected() {
        let mut map = small_map();
        assert_eq!(map.available_count(), 3);
        map.toggle(id("S1")).unwrap();
        assert_eq!(map.available_count(), 2);
    }
}
