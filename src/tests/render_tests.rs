// src/tests/render_tests.rs

use super::utils::{fixed_now, sample_store, taken, visitor_form};
use crate::domain::spot::Category;
use crate::domain::SpotView;
use crate::spreadsheets::export_spots_xlsx;
use crate::errors::InventoryError;
use crate::inventory::{Notice, SpotQuery, StatusFilter, TypeFilter};
use crate::templates::pages::{parking_page, spot_sections, ParkingPageVm};
use crate::templates::{assign_form, error_alert, notice_alert, spot_card};

#[test]
fn parking_page_lists_every_spot_with_status() {
    let (store, _) = sample_store();
    let vm = ParkingPageVm::build(&store, &SpotQuery::new(), "Torres del Parque");
    let body = parking_page(&vm).into_string();

    assert!(body.contains("Torres del Parque"));
    for number in ["A-101", "A-102", "A-103", "V-01", "V-02"] {
        assert!(body.contains(&format!("id=\"spot-{number}\"")), "missing {number}");
    }
    assert!(body.contains("Temporal"));
    assert!(body.contains("Salida estimada: 2024-03-10 16:00"));
    assert!(body.contains("Parqueaderos"));
    assert!(body.contains("PQRS"));
}

#[test]
fn page_sections_follow_category_fields() {
    let (store, _) = sample_store();
    let vm = ParkingPageVm::build(&store, &SpotQuery::new(), "Conjunto");

    let residents: Vec<&str> = vm.residents.iter().map(|v| v.number.as_str()).collect();
    let visitors: Vec<&str> = vm.visitors.iter().map(|v| v.number.as_str()).collect();
    assert_eq!(residents, vec!["A-101", "A-102", "A-103"]);
    assert_eq!(visitors, vec!["V-01", "V-02"]);
    assert_eq!(vm.summary.total, 5);
    assert_eq!(vm.summary.available, 2);
}

#[test]
fn filtered_page_shows_empty_section_message() {
    let (store, _) = sample_store();
    let q = SpotQuery::new()
        .status(StatusFilter::All)
        .category(TypeFilter::Only(Category::Visitor));
    let vm = ParkingPageVm::build(&store, &q, "Conjunto");
    let body = spot_sections(&vm).into_string();

    assert!(vm.residents.is_empty());
    assert!(body.contains("No hay espacios que coincidan"));
    assert!(!body.contains("spot-A-101"));
}

#[test]
fn page_rerenders_after_assignment_with_notice() {
    let (mut store, recorder) = sample_store();
    store
        .assign_at("V-02", Category::Visitor, &visitor_form("2"), fixed_now())
        .unwrap();
    let notice = recorder.last().and_then(|e| e.notice().cloned()).unwrap();

    let vm = ParkingPageVm::build(&store, &SpotQuery::new(), "Conjunto").with_notice(notice);
    let body = parking_page(&vm).into_string();

    assert!(body.contains("alert-success"));
    assert!(body.contains("Espacio V-02 asignado correctamente"));
    assert!(body.contains("Sofía Torres"));
}

#[test]
fn empty_spot_card_has_locked_switch_and_assign_button() {
    let (store, _) = sample_store();
    let vm = ParkingPageVm::build(&store, &SpotQuery::new().search("A-103"), "Conjunto");
    let body = spot_sections(&vm).into_string();

    assert!(body.contains("data-assign=\"A-103\""));
    assert!(body.contains("disabled"));
    assert!(body.contains("Disponible"));
}

#[test]
fn visitor_form_asks_for_duration() {
    let visitor = assign_form("V-02", Category::Visitor).into_string();
    assert!(visitor.contains("visitDurationHours"));

    let resident = assign_form("A-103", Category::Resident).into_string();
    assert!(!resident.contains("visitDurationHours"));
    assert!(resident.contains("Propietario"));
}

#[test]
fn alerts_carry_severity_and_fields() {
    let html = notice_alert(&Notice::warning("El espacio Z-1 no existe")).into_string();
    assert!(html.contains("alert-warning"));

    let (mut store, _) = sample_store();
    let err = store
        .assign_at("V-02", Category::Visitor, &visitor_form("-1"), fixed_now())
        .unwrap_err();
    assert!(matches!(err, InventoryError::Validation(_)));

    let html = error_alert(&err).into_string();
    assert!(html.contains("alert-danger"));
    assert!(html.contains("data-field=\"visitDurationHours\""));
}

#[test]
fn user_text_is_escaped() {
    let (mut store, _) = sample_store();
    let mut form = visitor_form("1");
    form.owner = "<script>alert(1)</script>".to_string();
    store
        .assign_at("V-02", Category::Visitor, &form, fixed_now())
        .unwrap();

    let vm = ParkingPageVm::build(&store, &SpotQuery::new(), "Conjunto");
    let body = parking_page(&vm).into_string();
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[test]
fn out_of_range_stay_renders_and_exports_without_departure() {
    let mut spot = taken("V-09", Category::Visitor, "Sofía Torres");
    spot.visit_duration_hours = Some(3e12);
    assert!(spot.validate().is_err());
    assert_eq!(spot.expected_departure(), None);

    let view = SpotView::from_spot(&spot);
    assert!(view.departure_label.is_none());
    let card = spot_card(&view).into_string();
    assert!(card.contains("spot-V-09"));
    assert!(!card.contains("Salida estimada"));

    let bytes = export_spots_xlsx(&[&spot], "Parqueaderos").unwrap();
    assert!(!bytes.is_empty());
}
