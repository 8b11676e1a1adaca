// src/domain/view.rs

use crate::domain::spot::{Category, Occupancy, ParkingSpot};
use serde::Serialize;

/// What a spot card needs to render, decoupled from the record itself.
/// Nothing here is ever read back into the domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotView {
    pub number: String,
    pub category: Category,
    pub category_label: &'static str,
    pub status_label: &'static str,
    /// CSS modifier for the status badge, e.g. "badge-success".
    pub status_badge: &'static str,
    pub owner_line: Option<String>,
    pub vehicle_line: Option<String>,
    pub plate: Option<String>,
    pub duration_label: Option<String>,
    pub departure_label: Option<String>,
    pub switch_on: bool,
    pub switch_locked: bool,
    /// Only empty spots offer the assignment form.
    pub can_assign: bool,
}

/// Maps an occupancy to the badge colour used by the admin theme.
pub fn status_badge(occupancy: Occupancy) -> &'static str {
    match occupancy {
        Occupancy::Empty => "badge-success",
        Occupancy::Occupied => "badge-danger",
        Occupancy::Temporary => "badge-warning",
    }
}

impl SpotView {
    pub fn from_spot(spot: &ParkingSpot) -> Self {
        let owner_line = match (&spot.owner, &spot.apartment) {
            (Some(owner), Some(apartment)) => Some(format!("{owner} · Apto {apartment}")),
            (Some(owner), None) => Some(owner.clone()),
            _ => None,
        };

        let vehicle_line = match (&spot.vehicle_type, &spot.vehicle_model) {
            (Some(kind), Some(model)) => Some(format!("{model} ({kind})")),
            (None, Some(model)) => Some(model.clone()),
            (Some(kind), None) => Some(kind.clone()),
            (None, None) => None,
        };

        let duration_label = spot.visit_duration_hours.map(format_hours);
        let departure_label = spot
            .expected_departure()
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string());

        SpotView {
            number: spot.number.clone(),
            category: spot.category,
            category_label: spot.category.label(),
            status_label: spot.occupancy.label(),
            status_badge: status_badge(spot.occupancy),
            owner_line,
            vehicle_line,
            plate: spot.license_plate.clone(),
            duration_label,
            departure_label,
            switch_on: spot.status_switch_enabled(),
            switch_locked: spot.status_switch_locked(),
            can_assign: spot.is_empty(),
        }
    }
}

fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&hours) {
        let whole = hours as u32;
        if whole == 1 {
            "1 hora".to_string()
        } else {
            format!("{whole} horas")
        }
    } else {
        format!("{hours:.1} horas")
    }
}

/// Headline counters for the parking page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub temporary: usize,
    pub residents: usize,
    pub visitors: usize,
}

impl InventorySummary {
    pub fn from_spots<'a>(spots: impl IntoIterator<Item = &'a ParkingSpot>) -> Self {
        let mut summary = InventorySummary::default();
        for spot in spots {
            summary.total += 1;
            match spot.occupancy {
                Occupancy::Empty => summary.available += 1,
                Occupancy::Occupied => summary.occupied += 1,
                Occupancy::Temporary => summary.temporary += 1,
            }
            match spot.category {
                Category::Resident => summary.residents += 1,
                Category::Visitor => summary.visitors += 1,
            }
        }
        summary
    }
}
