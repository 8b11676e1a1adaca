// src/domain/spot.rs

use crate::errors::{InventoryResult, ValidationErrors};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which sub-collection a spot belongs to. Fixed when the spot is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Resident,
    Visitor,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Resident, Category::Visitor];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Resident => "Residente",
            Category::Visitor => "Visitante",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resident" | "residente" | "residentes" => Ok(Category::Resident),
            "visitor" | "visitante" | "visitantes" => Ok(Category::Visitor),
            other => Err(format!("unknown spot type '{other}'")),
        }
    }
}

/// Availability of a spot. Derived from the occupant data, never set on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied,
    Temporary,
}

impl Occupancy {
    pub const ALL: [Occupancy; 3] = [
        Occupancy::Empty,
        Occupancy::Occupied,
        Occupancy::Temporary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Occupancy::Empty => "Disponible",
            Occupancy::Occupied => "Ocupado",
            Occupancy::Temporary => "Temporal",
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occupancy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "available" | "disponible" => Ok(Occupancy::Empty),
            "occupied" | "ocupado" => Ok(Occupancy::Occupied),
            "temporary" | "temporal" => Ok(Occupancy::Temporary),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// One parking space, flattened the way it is stored and serialized.
///
/// The occupant fields travel together: they are either all present
/// (the spot is taken) or all absent (the spot is `Empty`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub number: String,
    pub category: Category,
    #[serde(default)]
    pub occupancy: Occupancy,

    // Occupant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,

    // Visitors only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_duration_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<NaiveDateTime>,
}

impl ParkingSpot {
    /// A freshly declared, unassigned spot.
    pub fn empty(number: impl Into<String>, category: Category) -> Self {
        Self {
            number: number.into(),
            category,
            occupancy: Occupancy::Empty,
            owner: None,
            apartment: None,
            license_plate: None,
            vehicle_type: None,
            vehicle_model: None,
            visit_duration_hours: None,
            assigned_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy == Occupancy::Empty
    }

    /// Position of the availability switch.
    ///
    /// Empty spots show it locked on, residents always on, visitors on
    /// only while their stay is temporary.
    pub fn status_switch_enabled(&self) -> bool {
        match (self.category, self.occupancy) {
            (_, Occupancy::Empty) => true,
            (Category::Resident, _) => true,
            (Category::Visitor, occupancy) => occupancy == Occupancy::Temporary,
        }
    }

    /// Empty spots cannot be toggled.
    pub fn status_switch_locked(&self) -> bool {
        self.is_empty()
    }

    /// When a visitor is expected to leave, if the spot tracks a stay.
    pub fn expected_departure(&self) -> Option<NaiveDateTime> {
        let assigned_at = self.assigned_at?;
        let hours = self.visit_duration_hours?;
        if !is_valid_duration(hours) {
            return None;
        }
        let minutes = (hours * 60.0).round() as i64;
        assigned_at.checked_add_signed(Duration::try_minutes(minutes)?)
    }

    /// Every string-valued field, in declaration order. Used by free-text search.
    pub fn string_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.number.as_str()),
            self.owner.as_deref(),
            self.apartment.as_deref(),
            self.license_plate.as_deref(),
            self.vehicle_type.as_deref(),
            self.vehicle_model.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    fn occupant_fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("owner", self.owner.as_deref()),
            ("apartment", self.apartment.as_deref()),
            ("licensePlate", self.license_plate.as_deref()),
            ("vehicleType", self.vehicle_type.as_deref()),
            ("vehicleModel", self.vehicle_model.as_deref()),
        ]
    }

    /// Checks every record invariant and reports all violations at once.
    pub fn validate(&self) -> InventoryResult<()> {
        let mut errors = ValidationErrors::new();

        if self.number.trim().is_empty() {
            errors.push("number", "is required");
        }

        let occupant = self.occupant_fields();
        if self.is_empty() {
            for (field, value) in occupant {
                if value.is_some() {
                    errors.push(field, "must be empty on an available spot");
                }
            }
            if self.visit_duration_hours.is_some() {
                errors.push(
                    "visitDurationHours",
                    "must be empty on an available spot",
                );
            }
            if self.assigned_at.is_some() {
                errors.push("assignedAt", "must be empty on an available spot");
            }
        } else {
            for (field, value) in occupant {
                if value.map_or(true, |v| v.trim().is_empty()) {
                    errors.push(field, "is required on an assigned spot");
                }
            }
        }

        match self.category {
            Category::Resident => {
                if self.occupancy == Occupancy::Temporary {
                    errors.push("occupancy", "resident spots cannot be temporary");
                }
                if self.visit_duration_hours.is_some() {
                    errors.push("visitDurationHours", "only applies to visitor spots");
                }
            }
            Category::Visitor => {
                if let Some(hours) = self.visit_duration_hours {
                    if !is_valid_duration(hours) {
                        errors.push("visitDurationHours", DURATION_RANGE_MESSAGE);
                    }
                } else if self.occupancy == Occupancy::Temporary {
                    errors.push(
                        "visitDurationHours",
                        "is required on a temporary spot",
                    );
                }
            }
        }

        errors.into_result()
    }
}

/// Longest visitor stay accepted, in hours (30 days).
pub const MAX_VISIT_HOURS: f64 = 720.0;

pub(crate) const DURATION_RANGE_MESSAGE: &str = "must be a positive number up to 720 hours";

pub(crate) fn is_valid_duration(hours: f64) -> bool {
    hours.is_finite() && hours > 0.0 && hours <= MAX_VISIT_HOURS
}

/// Field replacements for `InventoryStore::update`. `None` keeps the current value.
///
/// A patch can correct occupant data but never changes emptiness; that is
/// the job of assignment and removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_duration_hours: Option<f64>,
}

impl SpotPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch in place. The caller re-validates the result.
    pub fn apply_to(&self, spot: &mut ParkingSpot) {
        macro_rules! replace {
            ($field:ident) => {
                if let Some(value) = &self.$field {
                    spot.$field = Some(value.trim().to_string());
                }
            };
        }

        replace!(owner);
        replace!(apartment);
        replace!(license_plate);
        replace!(vehicle_type);
        replace!(vehicle_model);

        if let Some(hours) = self.visit_duration_hours {
            spot.visit_duration_hours = Some(hours);
        }
    }
}
