use crate::templates::components::contact::{ADDRESS, EMAIL, PHONE};
use crate::templates::components::header::NAV_LINKS;
use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

const SERVICES: [&str; 4] = [
    "Buy Property",
    "Sell Property",
    "Rent Property",
    "Property Management",
];

const SOCIAL: [(Icon, &str); 4] = [
    (Icon::Facebook, "Facebook"),
    (Icon::Twitter, "Twitter"),
    (Icon::Instagram, "Instagram"),
    (Icon::Linkedin, "LinkedIn"),
];

pub fn footer(year: i32) -> Markup {
    html! {
        footer class="site-footer" data-testid="footer" {
            div class="container footer-grid" {
                div {
                    h3 class="logo" { "HOUSFY" }
                    p class="subtle" {
                        "Your trusted partner in finding the perfect home. "
                        "Premium real estate services in California, San Francisco, and Miami."
                    }
                    div class="social" {
                        @for (kind, name) in SOCIAL {
                            a href="#" aria-label=(name) { (icon(kind, 18)) }
                        }
                    }
                }

                div {
                    h4 { "Quick Links" }
                    ul {
                        @for (anchor, label) in NAV_LINKS {
                            li { a href=(format!("#{anchor}")) class="footer-link" { (label) } }
                        }
                        li { a href="#contact" class="footer-link" { "Contact" } }
                    }
                }

                div {
                    h4 { "Services" }
                    ul {
                        @for service in SERVICES {
                            li { span class="subtle" { (service) } }
                        }
                    }
                }

                div {
                    h4 { "Contact" }
                    ul class="subtle" {
                        li { (icon(Icon::MapPin, 16)) span { (ADDRESS) } }
                        li { (icon(Icon::Phone, 16)) span { (PHONE) } }
                        li { (icon(Icon::Mail, 16)) span { (EMAIL) } }
                    }
                }
            }

            div class="container footer-bottom" {
                p class="subtle" { "© " (year) " HOUSFY. All rights reserved." }
                div {
                    a href="#" { "Privacy Policy" }
                    a href="#" { "Terms of Service" }
                }
            }
        }
    }
}
