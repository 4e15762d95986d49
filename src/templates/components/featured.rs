use crate::domain::listing::{format_thousands, FeaturedProperty};
use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

/// Large card for the first property, a column of hover cards for the rest.
pub fn featured_section(properties: &[FeaturedProperty]) -> Markup {
    let (lead, rest) = match properties.split_first() {
        Some((lead, rest)) => (Some(lead), rest),
        None => (None, properties),
    };

    html! {
        section id="properties" class="section muted" data-testid="properties-section" {
            div class="container" {
                div class="section-head split reveal" {
                    h2 { "Discover Your Perfect" br; "Property Match" }
                    p class="subtle" {
                        "Discover Your Perfect Property Match with our expert team, dedicated "
                        "to finding the ideal home or investment in California, San Francisco, "
                        "and Miami."
                    }
                }

                div class="featured-grid" {
                    @if let Some(lead) = lead {
                        (lead_card(lead))
                    }
                    div class="featured-side" {
                        @for property in rest.iter().take(3) {
                            (side_card(property))
                        }
                    }
                }
            }
        }
    }
}

fn lead_card(p: &FeaturedProperty) -> Markup {
    html! {
        article class="property-card featured-lead reveal" data-testid="property-card-featured" {
            img class="property-card-image" src=(p.image_url) alt=(p.address);
            div class="lead-overlay" {
                @if p.featured {
                    span class="featured-badge" { "Featured" }
                }
                div class="price-tag" { (p.display_price()) }
                p class="address" { (p.address) }
                p class="locality" { (p.city) ", " (p.state_label) }
                div class="facts" {
                    span { (icon(Icon::Area, 14)) " " (format_thousands(p.area_sq_ft.into())) " Sq Ft" }
                    span { (icon(Icon::Bed, 14)) " " (p.bedroom_count) " Beds" }
                    span { (icon(Icon::Bath, 14)) " " (p.bathroom_count) " Baths" }
                }
            }
        }
    }
}

fn side_card(p: &FeaturedProperty) -> Markup {
    html! {
        article class="property-card featured-side-card reveal" data-testid=(format!("property-card-{}", p.id)) {
            img class="property-card-image" src=(p.image_url) alt=(p.address);
            div class="hover-panel" {
                p class="price" { (p.display_price()) }
                p class="locality" { (p.city) }
            }
        }
    }
}
