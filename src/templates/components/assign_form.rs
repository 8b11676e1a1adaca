use crate::domain::spot::Category;
use maud::{html, Markup};

/// Assignment dialog body for one empty spot. The inputs mirror
/// `AssignmentForm`; the inventory validates again on submit.
pub fn assign_form(number: &str, category: Category) -> Markup {
    let form_id = format!("assign-{number}");

    html! {
        div class="assign-wrapper" {
            form
                id=(form_id)
                method="post"
                action=(format!("/parqueaderos/{number}/asignar"))
                class="assign-form"
                data-number=(number)
                data-category=(category.label())
            {
                h3 { "Asignar espacio " (number) }

                label for="owner" {
                    @match category {
                        Category::Resident => "Propietario",
                        Category::Visitor => "Visitante",
                    }
                }
                input type="text" id="owner" name="owner" required;

                label for="apartment" { "Apartamento" }
                input type="text" id="apartment" name="apartment" required;

                label for="licensePlate" { "Placa" }
                input type="text" id="licensePlate" name="licensePlate" required;

                label for="vehicleType" { "Tipo de vehículo" }
                select id="vehicleType" name="vehicleType" required {
                    option value="" disabled selected { "Seleccione..." }
                    option value="carro" { "Carro" }
                    option value="moto" { "Moto" }
                    option value="bicicleta" { "Bicicleta" }
                }

                label for="vehicleModel" { "Modelo" }
                input type="text" id="vehicleModel" name="vehicleModel" required;

                @if category == Category::Visitor {
                    label for="visitDurationHours" { "Duración de la visita (horas)" }
                    input type="number" id="visitDurationHours" name="visitDurationHours" min="1" step="0.5" required;
                }

                div class="form-actions" {
                    button type="button" class="secondary" data-dismiss="modal" { "Cancelar" }
                    button type="submit" class="primary" { "Asignar" }
                }
            }
        }
    }
}
