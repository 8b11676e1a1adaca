use crate::errors::InventoryError;
use crate::inventory::events::Notice;
use maud::{html, Markup};

/// Dismissible alert for the confirmation layer.
pub fn notice_alert(notice: &Notice) -> Markup {
    html! {
        div class=(format!("alert alert-{} alert-dismissible", notice.severity)) role="alert" {
            span { (notice.message) }
            button type="button" class="close" data-dismiss="alert" aria-label="Cerrar" { "×" }
        }
    }
}

/// Alert for a failed inventory operation, with the offending fields listed
/// so the form can highlight them.
pub fn error_alert(err: &InventoryError) -> Markup {
    let notice = Notice::from(err);
    html! {
        (notice_alert(&notice))
        @if let InventoryError::Validation(errs) = err {
            ul class="field-errors" {
                @for field in &errs.fields {
                    li data-field=(field.field) { strong { (field.field) } ": " (field.message) }
                }
            }
        }
    }
}
