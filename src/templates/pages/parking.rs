use crate::domain::spot::{Category, Occupancy};
use crate::domain::view::{InventorySummary, SpotView};
use crate::inventory::events::Notice;
use crate::inventory::{InventoryStore, SortKey, SpotQuery, StatusFilter, TypeFilter};
use crate::templates::components::{notice_alert, spot_card, stat_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ParkingPageVm {
    pub building_name: String,
    pub query: SpotQuery,
    pub summary: InventorySummary,
    pub residents: Vec<SpotView>,
    pub visitors: Vec<SpotView>,
    pub notice: Option<Notice>,
}

impl ParkingPageVm {
    /// Runs the query and splits the hits into the two page sections,
    /// keeping the query's ordering inside each.
    pub fn build(store: &InventoryStore, query: &SpotQuery, building_name: &str) -> Self {
        let (residents, visitors): (Vec<SpotView>, Vec<SpotView>) = store
            .query(query)
            .into_iter()
            .map(SpotView::from_spot)
            .partition(|view| view.category == Category::Resident);

        ParkingPageVm {
            building_name: building_name.to_string(),
            query: query.clone(),
            summary: store.summary(),
            residents,
            visitors,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

pub fn parking_page(vm: &ParkingPageVm) -> Markup {
    desktop_layout(
        &format!("Parqueaderos · {}", vm.building_name),
        "/parqueaderos",
        html! {
            main class="container" {
                h1 { "Parqueaderos" }
                p class="lead" { (vm.building_name) }

                @if let Some(notice) = &vm.notice {
                    (notice_alert(notice))
                }

                (summary_row(&vm.summary))
                (filter_bar(&vm.query))
                (spot_sections(vm))
            }
        },
    )
}

pub fn summary_row(summary: &InventorySummary) -> Markup {
    html! {
        section class="stats-row" {
            (stat_card("Total", summary.total, "stat-total"))
            (stat_card("Disponibles", summary.available, "stat-success"))
            (stat_card("Ocupados", summary.occupied, "stat-danger"))
            (stat_card("Temporales", summary.temporary, "stat-warning"))
        }
    }
}

fn filter_bar(query: &SpotQuery) -> Markup {
    let sort_options = [
        (SortKey::Number, "number", "Número"),
        (SortKey::Occupancy, "occupancy", "Estado"),
        (SortKey::Category, "category", "Tipo"),
    ];

    html! {
        form class="filter-bar" method="get" action="/parqueaderos" {
            input type="search" name="search" placeholder="Buscar espacio, propietario, placa..." value=(query.search);

            select name="status" {
                option value="all" selected[query.status == StatusFilter::All] { "Todos los estados" }
                @for occupancy in Occupancy::ALL {
                    option value=(occupancy.label().to_lowercase()) selected[query.status == StatusFilter::Only(occupancy)] {
                        (occupancy.label())
                    }
                }
            }

            select name="type" {
                option value="all" selected[query.category == TypeFilter::All] { "Todos los tipos" }
                @for category in Category::ALL {
                    option value=(category.label().to_lowercase()) selected[query.category == TypeFilter::Only(category)] {
                        (category.label())
                    }
                }
            }

            select name="sort" {
                @for (key, value, label) in sort_options {
                    option value=(value) selected[query.sort == key] { "Ordenar por " (label) }
                }
            }

            button type="submit" class="primary" { "Filtrar" }
        }
    }
}

/// Both sections. Re-rendered on its own after every store event.
pub fn spot_sections(vm: &ParkingPageVm) -> Markup {
    html! {
        div id="spot-sections" {
            (spot_section("Residentes", "resident-spots", &vm.residents))
            (spot_section("Visitantes", "visitor-spots", &vm.visitors))
        }
    }
}

fn spot_section(title: &str, id: &str, spots: &[SpotView]) -> Markup {
    html! {
        section class="spot-section" id=(id) {
            h2 { (title) " " small { "(" (spots.len()) ")" } }
            @if spots.is_empty() {
                p class="text-muted" { "No hay espacios que coincidan con la búsqueda." }
            } @else {
                div class="spot-grid" {
                    @for view in spots {
                        (spot_card(view))
                    }
                }
            }
        }
    }
}
