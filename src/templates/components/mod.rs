use maud::{html, Markup};

pub mod assign_form;
pub mod notice;
pub mod spot_card;

pub use assign_form::assign_form;
pub use notice::{error_alert, notice_alert};
pub use spot_card::spot_card;

/// Single headline number, used by the summary row.
pub fn stat_card(label: &str, value: usize, modifier: &str) -> Markup {
    html! {
        div class=(format!("card stat-card {modifier}")) {
            span class="stat-value" { (value) }
            span class="stat-label" { (label) }
        }
    }
}
