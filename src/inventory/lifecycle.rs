// src/inventory/lifecycle.rs

use crate::domain::spot::{Category, Occupancy, ParkingSpot};
use crate::errors::InventoryResult;
use crate::inventory::events::EventKind;
use crate::inventory::store::InventoryStore;
use tracing::info;

/// Status a spot would take for a given switch position.
///
/// The switch only matters for taken visitor spots. Empty spots stay
/// available and residents stay occupied whatever the switch says.
pub fn toggled_occupancy(spot: &ParkingSpot, switch_on: bool) -> Occupancy {
    if spot.is_empty() {
        return Occupancy::Empty;
    }
    match spot.category {
        Category::Visitor if switch_on => Occupancy::Temporary,
        Category::Visitor => Occupancy::Occupied,
        Category::Resident => Occupancy::Occupied,
    }
}

/// Pure status transform. Occupant fields are copied through untouched.
pub fn toggle_availability(spot: &ParkingSpot, switch_on: bool) -> ParkingSpot {
    ParkingSpot {
        occupancy: toggled_occupancy(spot, switch_on),
        ..spot.clone()
    }
}

impl InventoryStore {
    /// Applies the availability switch to a stored spot.
    ///
    /// A visitor spot without a visit duration cannot turn temporary; that
    /// is reported as a validation error and nothing changes.
    pub fn set_availability(&mut self, number: &str, switch_on: bool) -> InventoryResult<ParkingSpot> {
        match self.find_by_number(number).map(|spot| spot.category) {
            Some(category) => self.set_availability_in(number, category, switch_on),
            None => self.not_found(number),
        }
    }

    /// `set_availability` restricted to one category, for numbers used in both.
    pub fn set_availability_in(
        &mut self,
        number: &str,
        category: Category,
        switch_on: bool,
    ) -> InventoryResult<ParkingSpot> {
        let current = match self.locate_in(number, category) {
            Some(idx) => self.spots_in(category)[idx].clone(),
            None => return self.not_found(number),
        };

        let toggled = toggle_availability(&current, switch_on);
        if toggled == current {
            return Ok(current);
        }
        if let Err(err) = toggled.validate() {
            return self.reject(number, err);
        }

        info!(
            number,
            category = %category,
            from = %current.occupancy,
            to = %toggled.occupancy,
            "spot availability toggled"
        );
        self.replace_in(category, toggled.clone());
        self.emit(EventKind::Updated(toggled.clone()));
        Ok(toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(number: &str, category: Category) -> ParkingSpot {
        ParkingSpot {
            owner: Some("Marta Díaz".to_string()),
            apartment: Some("402".to_string()),
            license_plate: Some("MNO456".to_string()),
            vehicle_type: Some("carro".to_string()),
            vehicle_model: Some("Renault Logan".to_string()),
            occupancy: Occupancy::Occupied,
            visit_duration_hours: match category {
                Category::Visitor => Some(4.0),
                Category::Resident => None,
            },
            ..ParkingSpot::empty(number, category)
        }
    }

    #[test]
    fn empty_spot_ignores_switch() {
        let spot = ParkingSpot::empty("V-03", Category::Visitor);
        assert_eq!(toggle_availability(&spot, true), spot);
        assert_eq!(toggle_availability(&spot, false), spot);
    }

    #[test]
    fn resident_never_becomes_temporary() {
        let spot = occupied("A-102", Category::Resident);
        assert_eq!(toggle_availability(&spot, true).occupancy, Occupancy::Occupied);
        assert_eq!(toggle_availability(&spot, false).occupancy, Occupancy::Occupied);
    }

    #[test]
    fn visitor_round_trip_preserves_occupant() {
        let mut spot = occupied("V-01", Category::Visitor);
        spot.occupancy = Occupancy::Temporary;

        let off = toggle_availability(&spot, false);
        assert_eq!(off.occupancy, Occupancy::Occupied);

        let on = toggle_availability(&off, true);
        assert_eq!(on.occupancy, Occupancy::Temporary);
        assert_eq!(on, spot);
    }
}
