use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

const ABOUT_IMAGE: &str = "https://images.pexels.com/photos/7937959/pexels-photo-7937959.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=650&w=940";

pub fn about_section() -> Markup {
    html! {
        section id="about" class="section dark" data-testid="about-section" {
            div class="container two-col" {
                div class="reveal" {
                    h2 { "About " span class="gold-text" { "Us" } }
                    div class="prose" {
                        p {
                            "HOUSFY, your trusted partner in the world of real estate. "
                            "We take pride in offering top-notch services for buying, selling, "
                            "and renting properties in the most sought-after areas: California, "
                            "San Francisco, and Miami."
                        }
                        p {
                            "Our agency specializes in finding the perfect homes "
                            "and commercial properties for our clients. We believe that every "
                            "transaction marks the beginning of a long-term relationship."
                        }
                        p {
                            "Our team of experienced agents is committed to guiding you "
                            "through every step of the process, from the initial consultation to "
                            "closing the deal. Your satisfaction is our top priority, and we strive "
                            "to exceed your expectations with transparency, professionalism, "
                            "and attention to detail."
                        }
                    }
                    a href="#contact" class="button gold" data-testid="about-learn-more-btn" {
                        "Learn More " (icon(Icon::ArrowRight, 18))
                    }
                }

                div class="about-media reveal" {
                    img src=(ABOUT_IMAGE) alt="Happy couple receiving keys";
                    div class="experience-badge" {
                        div class="badge-value" { "15+" }
                        div { "Years Experience" }
                    }
                }
            }
        }
    }
}
