// src/inventory/assignment.rs

use crate::domain::spot::{
    is_valid_duration, Category, Occupancy, ParkingSpot, DURATION_RANGE_MESSAGE,
};
use crate::errors::{InventoryError, InventoryResult, ValidationErrors};
use crate::inventory::events::{EventKind, Notice};
use crate::inventory::store::InventoryStore;
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::info;

/// Raw values as typed into the assignment dialog. Nothing here is trusted:
/// blanks, stray whitespace and unparsable numbers are all caught below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentForm {
    pub owner: String,
    pub apartment: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub vehicle_model: String,
    /// Visitors only. Hours, as typed.
    pub visit_duration_hours: String,
}

/// Occupant data that passed validation, ready to be written to a spot.
#[derive(Debug, Clone, PartialEq)]
struct Occupant {
    owner: String,
    apartment: String,
    license_plate: String,
    vehicle_type: String,
    vehicle_model: String,
    visit_duration_hours: Option<f64>,
}

impl AssignmentForm {
    /// Checks the form against the category's required fields, collecting
    /// every problem instead of stopping at the first.
    fn validate(&self, category: Category, errors: &mut ValidationErrors) -> Option<Occupant> {
        let mut required = |field: &'static str, value: &str| -> String {
            let value = value.trim();
            if value.is_empty() {
                errors.push(field, "is required");
            }
            value.to_string()
        };

        let owner = required("owner", &self.owner);
        let apartment = required("apartment", &self.apartment);
        let license_plate = required("licensePlate", &self.license_plate);
        let vehicle_type = required("vehicleType", &self.vehicle_type);
        let vehicle_model = required("vehicleModel", &self.vehicle_model);

        let raw_duration = self.visit_duration_hours.trim();
        let visit_duration_hours = match category {
            Category::Resident => {
                if !raw_duration.is_empty() {
                    errors.push("visitDurationHours", "only applies to visitor spots");
                }
                None
            }
            Category::Visitor => match raw_duration.parse::<f64>() {
                _ if raw_duration.is_empty() => {
                    errors.push("visitDurationHours", "is required");
                    None
                }
                Ok(hours) if is_valid_duration(hours) => Some(hours),
                _ => {
                    errors.push("visitDurationHours", DURATION_RANGE_MESSAGE);
                    None
                }
            },
        };

        if !errors.is_empty() {
            return None;
        }

        Some(Occupant {
            owner,
            apartment,
            license_plate: license_plate.to_uppercase(),
            vehicle_type,
            vehicle_model,
            visit_duration_hours,
        })
    }
}

/// Whether an already taken spot may be written over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    FirstAssignment,
    Reassignment,
}

impl InventoryStore {
    /// Gives an empty spot to a resident or visitor.
    pub fn assign(
        &mut self,
        number: &str,
        category: Category,
        form: &AssignmentForm,
    ) -> InventoryResult<ParkingSpot> {
        self.assign_at(number, category, form, Utc::now().naive_utc())
    }

    pub fn assign_at(
        &mut self,
        number: &str,
        category: Category,
        form: &AssignmentForm,
        now: NaiveDateTime,
    ) -> InventoryResult<ParkingSpot> {
        self.run_assignment(number, category, form, now, Mode::FirstAssignment)
    }

    /// Replaces the occupant of a spot that is already taken. Empty spots
    /// are accepted too, so the dialog can use one path for both.
    pub fn reassign(
        &mut self,
        number: &str,
        category: Category,
        form: &AssignmentForm,
    ) -> InventoryResult<ParkingSpot> {
        self.reassign_at(number, category, form, Utc::now().naive_utc())
    }

    pub fn reassign_at(
        &mut self,
        number: &str,
        category: Category,
        form: &AssignmentForm,
        now: NaiveDateTime,
    ) -> InventoryResult<ParkingSpot> {
        self.run_assignment(number, category, form, now, Mode::Reassignment)
    }

    fn run_assignment(
        &mut self,
        number: &str,
        category: Category,
        form: &AssignmentForm,
        now: NaiveDateTime,
        mode: Mode,
    ) -> InventoryResult<ParkingSpot> {
        // Lookup by number and category: the same number may exist once per category.
        let current = match self
            .spots_in(category)
            .iter()
            .find(|s| s.number == number)
            .or_else(|| self.find_by_number(number))
        {
            Some(spot) => spot.clone(),
            None => return self.not_found(number),
        };

        let mut errors = ValidationErrors::new();
        if current.category != category {
            errors.push(
                "category",
                format!("spot {number} is a {} spot", current.category.label()),
            );
        }
        if mode == Mode::FirstAssignment && !current.is_empty() {
            errors.push("number", format!("spot {number} is already assigned"));
        }

        let occupant = form.validate(category, &mut errors);
        let Some(occupant) = occupant.filter(|_| errors.is_empty()) else {
            return self.reject(number, InventoryError::Validation(errors));
        };

        let assigned = ParkingSpot {
            number: current.number.clone(),
            category,
            occupancy: match category {
                Category::Resident => Occupancy::Occupied,
                Category::Visitor => Occupancy::Temporary,
            },
            owner: Some(occupant.owner),
            apartment: Some(occupant.apartment),
            license_plate: Some(occupant.license_plate),
            vehicle_type: Some(occupant.vehicle_type),
            vehicle_model: Some(occupant.vehicle_model),
            visit_duration_hours: occupant.visit_duration_hours,
            assigned_at: Some(now),
        };
        if let Err(err) = assigned.validate() {
            return self.reject(number, err);
        }

        info!(
            number,
            category = %category,
            overwrite = !current.is_empty(),
            "spot assigned"
        );
        self.replace_in(category, assigned.clone());

        let notice = Notice::success(format!("Espacio {number} asignado correctamente"));
        self.emit(EventKind::Assigned {
            spot: assigned.clone(),
            notice,
        });
        Ok(assigned)
    }
}
