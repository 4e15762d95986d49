use crate::domain::contact::Acknowledgment;
use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

pub const PHONE: &str = "+1 (555) 123-4567";
pub const EMAIL: &str = "contact@housfy.com";
pub const ADDRESS: &str = "123 Market Street, San Francisco, CA 94102";

pub fn contact_section(ack: Option<&Acknowledgment>) -> Markup {
    html! {
        section id="contact" class="section muted" data-testid="contact-section" {
            div class="container two-col" {
                div class="reveal" {
                    h2 { "Get In Touch" }
                    p class="subtle" {
                        "Have questions about a property or want to schedule a viewing? "
                        "Reach out to us and our team will get back to you within 24 hours."
                    }
                    ul class="contact-details" {
                        (detail(Icon::Phone, "Phone", PHONE))
                        (detail(Icon::Mail, "Email", EMAIL))
                        (detail(Icon::MapPin, "Address", ADDRESS))
                    }
                }

                (contact_panel(ack))
            }
        }
    }
}

/// Swapped in place after a submission: the notice (if any) plus a blank form.
pub fn contact_panel(ack: Option<&Acknowledgment>) -> Markup {
    html! {
        div id="contact-panel" class="reveal" {
            @if let Some(ack) = ack {
                (acknowledgment_notice(ack))
            }
            (contact_form())
        }
    }
}

fn acknowledgment_notice(ack: &Acknowledgment) -> Markup {
    html! {
        div class="notice" role="status" data-testid="contact-ack" data-delivered=(if ack.delivered { "true" } else { "false" }) {
            p class="notice-title" { (ack.message) }
            p class="microcopy" {
                "Thanks, " (ack.name) ". Your message was received by this page at "
                (ack.received_at.format("%H:%M UTC").to_string())
                " and has not been sent anywhere; please call or email us if it is urgent."
            }
        }
    }
}

fn contact_form() -> Markup {
    html! {
        form
            class="contact-form"
            method="post"
            action="/contact"
            hx-post="/contact"
            hx-target="#contact-panel"
            hx-swap="outerHTML"
            hx-disabled-elt="button"
        {
            label for="contact-name" { "Name" }
            input type="text" id="contact-name" name="name" data-testid="contact-name" placeholder="Your name" autocomplete="name" required;

            label for="contact-email" { "Email" }
            input type="email" id="contact-email" name="email" data-testid="contact-email" placeholder="your@email.com" autocomplete="email" required;

            label for="contact-phone" { "Phone" }
            input type="tel" id="contact-phone" name="phone" data-testid="contact-phone" placeholder="+1 (555) 000-0000" autocomplete="tel";

            label for="contact-message" { "Message" }
            textarea id="contact-message" name="message" data-testid="contact-message" rows="4" placeholder="Tell us about your dream home..." required {}

            button type="submit" class="button gold block" data-testid="contact-submit" { "Send Message" }
        }
    }
}

fn detail(kind: Icon, label: &str, value: &str) -> Markup {
    html! {
        li {
            span class="detail-icon" { (icon(kind, 20)) }
            div {
                p class="detail-label" { (label) }
                p class="detail-value" { (value) }
            }
        }
    }
}
