use maud::{html, Markup};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=2074";

const STATS: [(&str, &str); 3] = [
    ("80+", "Premium House"),
    ("500+", "Agent House"),
    ("2K+", "Happy Clients"),
];

pub fn hero_section() -> Markup {
    html! {
        section class="hero" data-testid="hero-section" {
            div class="hero-backdrop" {
                img src=(HERO_IMAGE) alt="Luxury interior";
                div class="hero-overlay" {}
            }

            div class="container hero-content reveal" {
                h1 data-testid="hero-title" { "Find Your Dream" br; "Home Today" }
                p class="lead" {
                    "Welcome to our real estate agency, where your dream home awaits. "
                    "Let us help you find the perfect property for you."
                }
                div class="hero-actions" {
                    a href="#properties" class="button light" data-testid="hero-view-btn" { "View" }
                    a href="#about" class="button outline" data-testid="hero-learn-btn" { "Learn More" }
                }
            }

            div class="stats-card reveal" data-testid="stats-card" {
                h3 { "Who We Are?" }
                p { "We offer a range of services including buying, selling, and property management." }
                div class="stats" {
                    @for (value, label) in STATS {
                        div class="stat" {
                            div class="stat-value" { (value) }
                            div class="stat-label" { (label) }
                        }
                    }
                }
            }
        }
    }
}
