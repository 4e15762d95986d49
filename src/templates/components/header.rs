use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

/// (anchor, label) pairs shared by the header, the mobile menu and the footer.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("about", "About Us"),
    ("properties", "Properties"),
    ("showcase", "Services"),
];

pub fn site_header() -> Markup {
    html! {
        header class="site-header" data-testid="header" {
            nav class="container nav" {
                a href="/" class="logo" data-testid="logo" { "HOUSFY" }

                ul class="nav-links" {
                    @for (anchor, label) in NAV_LINKS {
                        li { a href=(format!("#{anchor}")) data-testid=(format!("nav-{anchor}")) { (label) } }
                    }
                }

                a href="#contact" class="button gold nav-contact" data-testid="nav-contact-btn" { "Contact Us" }

                // No-JS toggle: the open state lives on <details>.
                details class="mobile-menu" data-testid="mobile-menu" {
                    summary aria-label="Toggle menu" data-testid="mobile-menu-btn" {
                        span class="when-closed" { (icon(Icon::Menu, 24)) }
                        span class="when-open" { (icon(Icon::Close, 24)) }
                    }
                    div class="mobile-menu-panel" {
                        @for (anchor, label) in NAV_LINKS {
                            a href=(format!("#{anchor}")) { (label) }
                        }
                        a href="#contact" class="button gold block" { "Contact Us" }
                    }
                }
            }
        }
    }
}
