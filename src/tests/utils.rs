use crate::domain::spot::{Category, Occupancy, ParkingSpot};
use crate::inventory::{AssignmentForm, EventRecorder, InventoryStore};
use chrono::{NaiveDate, NaiveDateTime};

/// Store seeded with the bundled sample, plus a recorder subscribed to it.
pub fn sample_store() -> (InventoryStore, EventRecorder) {
    let mut store = crate::seed::load_store(None).expect("sample inventory loads");
    let recorder = EventRecorder::new();
    store.subscribe(recorder.clone());
    (store, recorder)
}

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 2)
        .unwrap()
        .and_hms_opt(18, 15, 0)
        .unwrap()
}

pub fn carlos_form() -> AssignmentForm {
    AssignmentForm {
        owner: "Carlos Ruiz".to_string(),
        apartment: "305".to_string(),
        license_plate: "JKL321".to_string(),
        vehicle_type: "carro".to_string(),
        vehicle_model: "Kia Rio 2021".to_string(),
        visit_duration_hours: String::new(),
    }
}

pub fn visitor_form(hours: &str) -> AssignmentForm {
    AssignmentForm {
        owner: "Sofía Torres".to_string(),
        apartment: "501".to_string(),
        license_plate: "QRS654".to_string(),
        vehicle_type: "moto".to_string(),
        vehicle_model: "Suzuki GN125".to_string(),
        visit_duration_hours: hours.to_string(),
    }
}

/// Occupied spot built directly, bypassing assignment.
pub fn taken(number: &str, category: Category, owner: &str) -> ParkingSpot {
    ParkingSpot {
        owner: Some(owner.to_string()),
        apartment: Some("100".to_string()),
        license_plate: Some(format!("PL{number}")),
        vehicle_type: Some("carro".to_string()),
        vehicle_model: Some("Renault Sandero".to_string()),
        occupancy: match category {
            Category::Resident => Occupancy::Occupied,
            Category::Visitor => Occupancy::Temporary,
        },
        visit_duration_hours: match category {
            Category::Resident => None,
            Category::Visitor => Some(1.0),
        },
        assigned_at: Some(fixed_now()),
        ..ParkingSpot::empty(number, category)
    }
}
