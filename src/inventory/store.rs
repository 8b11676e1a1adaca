// src/inventory/store.rs

use crate::domain::spot::{Category, ParkingSpot, SpotPatch};
use crate::domain::view::InventorySummary;
use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::events::{EventKind, InventoryEvent, InventoryObserver, Notice};
use crate::inventory::query::{query, SpotQuery};
use tracing::{debug, info, warn};

/// Owns every parking spot, split into one ordered sequence per category.
///
/// All mutations validate on a copy first and only then commit, so a failed
/// operation never leaves a half-applied record behind.
#[derive(Default)]
pub struct InventoryStore {
    residents: Vec<ParkingSpot>,
    visitors: Vec<ParkingSpot>,
    observers: Vec<Box<dyn InventoryObserver>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records, rejecting the first invalid or
    /// duplicated one.
    pub fn with_spots(spots: impl IntoIterator<Item = ParkingSpot>) -> InventoryResult<Self> {
        let mut store = Self::new();
        for spot in spots {
            store.add(spot)?;
        }
        Ok(store)
    }

    pub fn subscribe(&mut self, observer: impl InventoryObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub(crate) fn emit(&mut self, kind: EventKind) {
        let event = InventoryEvent::now(kind);
        debug!(event = event.name(), number = event.number(), "inventory event");
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }

    /// Reports a rejected mutation to subscribers before handing the error back.
    pub(crate) fn reject<T>(&mut self, number: &str, err: InventoryError) -> InventoryResult<T> {
        warn!(number, error = %err, "inventory operation rejected");
        if let InventoryError::Validation(errs) = &err {
            let notice = Notice::from(&err);
            self.emit(EventKind::ValidationFailed {
                number: number.to_string(),
                fields: errs.fields.clone(),
                notice,
            });
        }
        Err(err)
    }

    fn sequence(&self, category: Category) -> &Vec<ParkingSpot> {
        match category {
            Category::Resident => &self.residents,
            Category::Visitor => &self.visitors,
        }
    }

    fn sequence_mut(&mut self, category: Category) -> &mut Vec<ParkingSpot> {
        match category {
            Category::Resident => &mut self.residents,
            Category::Visitor => &mut self.visitors,
        }
    }

    /// Category and index of the first spot with this number, residents first.
    fn locate(&self, number: &str) -> Option<(Category, usize)> {
        Category::ALL
            .into_iter()
            .find_map(|category| self.locate_in(number, category).map(|idx| (category, idx)))
    }

    /// Index of the spot with this number inside one category's sequence.
    pub(crate) fn locate_in(&self, number: &str, category: Category) -> Option<usize> {
        self.sequence(category).iter().position(|s| s.number == number)
    }

    pub fn add(&mut self, spot: ParkingSpot) -> InventoryResult<()> {
        if let Err(err) = spot.validate() {
            return self.reject(&spot.number, err);
        }
        if self.locate_in(&spot.number, spot.category).is_some() {
            return self.reject(
                &spot.number,
                InventoryError::DuplicateNumber {
                    number: spot.number.clone(),
                },
            );
        }

        info!(number = %spot.number, category = %spot.category, "spot added");
        self.sequence_mut(spot.category).push(spot.clone());
        self.emit(EventKind::Added(spot));
        Ok(())
    }

    pub fn find_by_number(&self, number: &str) -> Option<&ParkingSpot> {
        self.locate(number)
            .map(|(category, idx)| &self.sequence(category)[idx])
    }

    pub fn contains(&self, number: &str) -> bool {
        self.locate(number).is_some()
    }

    pub fn update(&mut self, number: &str, patch: &SpotPatch) -> InventoryResult<ParkingSpot> {
        match self.locate(number) {
            Some((category, idx)) => self.update_at(category, idx, patch),
            None => self.not_found(number),
        }
    }

    /// `update` restricted to one category, for numbers used in both.
    pub fn update_in(
        &mut self,
        number: &str,
        category: Category,
        patch: &SpotPatch,
    ) -> InventoryResult<ParkingSpot> {
        match self.locate_in(number, category) {
            Some(idx) => self.update_at(category, idx, patch),
            None => self.not_found(number),
        }
    }

    fn update_at(
        &mut self,
        category: Category,
        idx: usize,
        patch: &SpotPatch,
    ) -> InventoryResult<ParkingSpot> {
        let mut candidate = self.sequence(category)[idx].clone();
        let number = candidate.number.clone();

        patch.apply_to(&mut candidate);
        if let Err(err) = candidate.validate() {
            return self.reject(&number, err);
        }

        info!(number = %number, category = %category, "spot updated");
        self.sequence_mut(category)[idx] = candidate.clone();
        self.emit(EventKind::Updated(candidate.clone()));
        Ok(candidate)
    }

    pub fn remove(&mut self, number: &str) -> InventoryResult<ParkingSpot> {
        match self.locate(number) {
            Some((category, idx)) => Ok(self.remove_at(category, idx)),
            None => self.not_found(number),
        }
    }

    /// `remove` restricted to one category, for numbers used in both.
    pub fn remove_in(&mut self, number: &str, category: Category) -> InventoryResult<ParkingSpot> {
        match self.locate_in(number, category) {
            Some(idx) => Ok(self.remove_at(category, idx)),
            None => self.not_found(number),
        }
    }

    fn remove_at(&mut self, category: Category, idx: usize) -> ParkingSpot {
        let removed = self.sequence_mut(category).remove(idx);
        info!(number = %removed.number, category = %category, "spot removed");
        self.emit(EventKind::Removed(removed.clone()));
        removed
    }

    /// Swaps in an already validated record inside one category's sequence.
    pub(crate) fn replace_in(&mut self, category: Category, spot: ParkingSpot) {
        let sequence = self.sequence_mut(category);
        if let Some(slot) = sequence.iter_mut().find(|s| s.number == spot.number) {
            *slot = spot;
        }
    }

    pub(crate) fn not_found<T>(&mut self, number: &str) -> InventoryResult<T> {
        self.reject(
            number,
            InventoryError::NotFound {
                number: number.to_string(),
            },
        )
    }

    /// Residents first, then visitors, each in insertion order.
    pub fn spots(&self) -> impl Iterator<Item = &ParkingSpot> {
        self.residents.iter().chain(self.visitors.iter())
    }

    pub fn spots_in(&self, category: Category) -> &[ParkingSpot] {
        self.sequence(category)
    }

    pub fn len(&self) -> usize {
        self.residents.len() + self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_spots(self.spots())
    }

    pub fn query(&self, q: &SpotQuery) -> Vec<&ParkingSpot> {
        query(self.spots(), q)
    }

    /// Checks every stored record. Used by tests after each mutation.
    pub fn check_invariants(&self) -> InventoryResult<()> {
        for spot in self.spots() {
            spot.validate()?;
        }
        Ok(())
    }
}
