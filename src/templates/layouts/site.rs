use crate::templates::components::{footer, site_header};
use maud::{html, Markup, DOCTYPE};

pub struct LayoutVm<'a> {
    pub title: &'a str,
    pub htmx_src: &'a str,
    pub year: i32,
}

pub fn site_layout(vm: &LayoutVm, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="HOUSFY: buy, sell and rent homes in California, San Francisco and Miami.";
                title { (vm.title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Outfit:wght@400;600;700&family=Inter:wght@400;500;600&display=swap";
                link rel="stylesheet" href="/static/main.css";
                script src=(vm.htmx_src) defer {}
            }
            body {
                (site_header())
                main {
                    (content)
                }
                (footer(vm.year))
            }
        }
    }
}
