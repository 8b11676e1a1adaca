use crate::domain::view::SpotView;
use maud::{html, Markup};

pub fn spot_card(view: &SpotView) -> Markup {
    html! {
        div class="card spot-card" id=(format!("spot-{}", view.number)) data-number=(view.number) {
            div class="card-header" {
                h4 { (view.number) }
                span class=(format!("badge {}", view.status_badge)) { (view.status_label) }
            }
            div class="card-body" {
                p class="spot-type" { (view.category_label) }
                @if let Some(owner) = &view.owner_line {
                    p { (owner) }
                }
                @if let Some(vehicle) = &view.vehicle_line {
                    p { (vehicle) }
                }
                @if let Some(plate) = &view.plate {
                    p { "Placa: " strong { (plate) } }
                }
                @if let Some(duration) = &view.duration_label {
                    p { "Visita: " (duration) }
                }
                @if let Some(departure) = &view.departure_label {
                    p class="text-muted" { "Salida estimada: " (departure) }
                }
            }
            div class="card-footer" {
                label class="switch" {
                    input
                        type="checkbox"
                        name="available"
                        checked[view.switch_on]
                        disabled[view.switch_locked];
                    span class="slider" {}
                }
                @if view.can_assign {
                    button type="button" class="primary" data-assign=(view.number) { "Asignar" }
                } @else {
                    button type="button" class="danger" data-remove=(view.number) { "Eliminar" }
                }
            }
        }
    }
}
