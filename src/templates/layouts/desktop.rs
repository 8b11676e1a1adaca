use maud::{html, Markup, DOCTYPE};

/// Sections of the administration panel, in menu order.
pub const ADMIN_MENU: &[(&str, &str)] = &[
    ("/", "Inicio"),
    ("/propietarios", "Propietarios"),
    ("/vigilantes", "Vigilantes"),
    ("/apartamentos", "Apartamentos"),
    ("/reservas", "Reservas"),
    ("/parqueaderos", "Parqueaderos"),
    ("/visitantes", "Visitantes"),
    ("/pqrs", "PQRS"),
    ("/pagos", "Pagos"),
];

pub fn desktop_layout(title: &str, active_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                div class="admin-shell" {
                    aside class="sidebar" {
                        h3 { "Administración" }
                        nav {
                            ul {
                                @for (href, label) in ADMIN_MENU {
                                    li class=[(*href == active_path).then_some("active")] {
                                        a href=(href) { (label) }
                                    }
                                }
                            }
                        }
                    }
                    (content)
                }
            }
        }
    }
}
