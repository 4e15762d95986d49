// templates/pages/home.rs

use crate::catalog::Catalog;
use crate::domain::carousel::CarouselController;
use crate::domain::contact::Acknowledgment;
use crate::templates::components::{
    about_section, contact_section, featured_section, hero_section, showcase_section,
    ScrollProjection,
};
use crate::templates::layouts::{site_layout, LayoutVm};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub catalog: &'a Catalog,
    pub carousel: &'a CarouselController<'a, Catalog>,
    pub projection: ScrollProjection,
    pub acknowledgment: Option<&'a Acknowledgment>,
    pub htmx_src: &'a str,
    pub year: i32,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    site_layout(
        &LayoutVm {
            title: "HOUSFY | Find Your Dream Home",
            htmx_src: vm.htmx_src,
            year: vm.year,
        },
        html! {
            (hero_section())
            (featured_section(vm.catalog.featured()))
            (about_section())
            (showcase_section(vm.carousel, vm.projection))
            (contact_section(vm.acknowledgment))
        },
    )
}
