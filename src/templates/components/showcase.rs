use crate::domain::carousel::{CarouselCommand, CarouselController, ListingSource, ScrollCommand};
use crate::domain::listing::{format_thousands, Listing, ListingCategory};
use crate::query::showcase_query;
use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

/// Turns a logical scroll command into pixels. The card width used here is
/// also stamped on every card, so offset and layout cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollProjection {
    pub item_width: u32,
    pub gap: u32,
}

impl ScrollProjection {
    pub const GAP: u32 = 24;

    pub fn new(item_width: u32) -> Self {
        Self {
            item_width,
            gap: Self::GAP,
        }
    }

    /// `index * (itemWidth + gap)`
    pub fn offset(&self, cmd: ScrollCommand) -> u64 {
        cmd.index as u64 * (u64::from(self.item_width) + u64::from(self.gap))
    }

    /// Full width of `count` cards laid out with gaps.
    pub fn track_width(&self, count: usize) -> u64 {
        let count = count as u64;
        count * u64::from(self.item_width) + count.saturating_sub(1) * u64::from(self.gap)
    }

    /// The track is as wide as the viewport, so `100% - track_width` is the
    /// furthest it may slide left before its end leaves the right edge.
    fn track_style(&self, cmd: ScrollCommand, count: usize) -> String {
        format!(
            "gap: {}px; transform: translateX(min(0px, max(-{}px, calc(100% - {}px))));",
            self.gap,
            self.offset(cmd),
            self.track_width(count)
        )
    }

    fn card_style(&self) -> String {
        format!("width: {}px;", self.item_width)
    }
}

/// The whole `#showcase` section. Also the htmx swap target, so every
/// control inside it points back at `/showcase`.
pub fn showcase_section<S: ListingSource + ?Sized>(
    ctl: &CarouselController<'_, S>,
    projection: ScrollProjection,
) -> Markup {
    let state = ctl.state();
    let anchor = ctl.anchor();

    html! {
        section
            id="showcase"
            class="section"
            data-testid="showcase-section"
            data-category=(state.active_category.as_str())
            data-index=(state.current_index)
        {
            div class="container" {
                div class="section-head centered" {
                    h2 { "Property Showcase" }

                    div class="showcase-controls" {
                        div class="tabs" role="tablist" {
                            @for category in ListingCategory::ALL {
                                @let active = category == state.active_category;
                                @let query = showcase_query(state, Some(CarouselCommand::Select(category)));
                                a.tab.active[active]
                                    role="tab"
                                    aria-selected=(if active { "true" } else { "false" })
                                    data-testid=(format!("tab-{category}"))
                                    href=(page_href(&query))
                                    hx-get=(partial_href(&query))
                                    hx-target="#showcase"
                                    hx-swap="outerHTML"
                                { (category.label()) }
                            }
                        }

                        // Decorative; there is no search backend.
                        div class="search" {
                            input type="text" placeholder="Enter City or Zip Code" data-testid="showcase-search" aria-label="City or Zip Code";
                            button type="button" class="search-button" aria-label="Search" { (icon(Icon::MapPin, 16)) }
                        }
                    }
                }

                div class="carousel" {
                    div class="carousel-viewport" {
                        div class="carousel-track" style=(projection.track_style(anchor, ctl.count())) {
                            @for listing in ctl.listings() {
                                (showcase_card(listing, projection))
                            }
                        }
                    }

                    (nav_control(state_query(ctl, CarouselCommand::Previous), ctl.is_at_start(), "carousel-prev", "Previous listing", Icon::ChevronLeft))
                    (nav_control(state_query(ctl, CarouselCommand::Next), ctl.is_at_end(), "carousel-next", "Next listing", Icon::ChevronRight))
                }

                div class="dots" {
                    @for i in 0..ctl.count() {
                        @let query = state_query(ctl, CarouselCommand::JumpTo(i));
                        a.dot.active[i == state.current_index]
                            aria-label=(format!("Show listing {}", i + 1))
                            aria-current=[(i == state.current_index).then_some("true")]
                            href=(page_href(&query))
                            hx-get=(partial_href(&query))
                            hx-target="#showcase"
                            hx-swap="outerHTML"
                        {}
                    }
                }
            }
        }
    }
}

fn showcase_card(listing: &Listing, projection: ScrollProjection) -> Markup {
    html! {
        article
            class="property-card showcase-card"
            style=(projection.card_style())
            data-testid=(format!("showcase-card-{}", listing.id))
        {
            div class="card-media" {
                img class="property-card-image" src=(listing.image_url) alt=(listing.location_label) loading="lazy";
            }
            div class="card-body" {
                h4 { (listing.location_label) }
                div class="facts" {
                    span { (icon(Icon::Area, 14)) " " (format_thousands(listing.area_sq_ft.into())) " Sq Ft" }
                    span { (icon(Icon::Bed, 14)) " " (listing.bedroom_count) " Beds" }
                    span { (icon(Icon::Bath, 14)) " " (listing.bathroom_count) " Baths" }
                }
            }
        }
    }
}

fn nav_control(query: String, disabled: bool, testid: &str, label: &str, glyph: Icon) -> Markup {
    html! {
        @if disabled {
            button type="button" class="carousel-nav" data-testid=(testid) aria-label=(label) disabled {
                (icon(glyph, 24))
            }
        } @else {
            a
                class="carousel-nav"
                data-testid=(testid)
                aria-label=(label)
                href=(page_href(&query))
                hx-get=(partial_href(&query))
                hx-target="#showcase"
                hx-swap="outerHTML"
            {
                (icon(glyph, 24))
            }
        }
    }
}

fn state_query<S: ListingSource + ?Sized>(
    ctl: &CarouselController<'_, S>,
    command: CarouselCommand,
) -> String {
    showcase_query(ctl.state(), Some(command))
}

fn page_href(query: &str) -> String {
    format!("/?{query}#showcase")
}

fn partial_href(query: &str) -> String {
    format!("/showcase?{query}")
}
