// src/domain/carousel.rs
//
// Showcase carousel: which category is on screen and which card is the
// scroll anchor. Pixel offsets live in the template layer; everything here
// is logical indices.

use crate::domain::listing::{Listing, ListingCategory};

/// Anything that can hand out the three showcase collections.
pub trait ListingSource {
    fn listings(&self, category: ListingCategory) -> &[Listing];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub active_category: ListingCategory,
    pub current_index: usize,
}

/// Emitted by every navigation; the view scrolls the track to `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub index: usize,
}

/// A navigation intent decoded from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Select(ListingCategory),
    Next,
    Previous,
    JumpTo(usize),
}

pub struct CarouselController<'a, S: ListingSource + ?Sized> {
    source: &'a S,
    state: CarouselState,
}

impl<'a, S: ListingSource + ?Sized> CarouselController<'a, S> {
    /// Fresh controller: Buy, first card.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            state: CarouselState::default(),
        }
    }

    /// Rebuild from state carried by a client. A stale or hostile index is
    /// clamped into the category's bounds.
    pub fn restore(source: &'a S, category: ListingCategory, index: usize) -> Self {
        let mut ctl = Self {
            source,
            state: CarouselState {
                active_category: category,
                current_index: 0,
            },
        };
        ctl.state.current_index = ctl.clamp(index);
        ctl
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Where the view should be scrolled right now.
    pub fn anchor(&self) -> ScrollCommand {
        ScrollCommand {
            index: self.state.current_index,
        }
    }

    pub fn listings(&self) -> &'a [Listing] {
        self.source.listings(self.state.active_category)
    }

    pub fn count(&self) -> usize {
        self.listings().len()
    }

    /// Switching categories always rewinds to the first card.
    pub fn select_category(&mut self, category: ListingCategory) -> ScrollCommand {
        self.state.active_category = category;
        self.state.current_index = 0;
        ScrollCommand { index: 0 }
    }

    pub fn next(&mut self) -> ScrollCommand {
        let index = self.clamp(self.state.current_index.saturating_add(1));
        self.scroll_to(index)
    }

    pub fn previous(&mut self) -> ScrollCommand {
        let index = self.state.current_index.saturating_sub(1);
        self.scroll_to(index)
    }

    pub fn jump_to(&mut self, index: usize) -> ScrollCommand {
        let index = self.clamp(index);
        self.scroll_to(index)
    }

    pub fn is_at_start(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.current_index == self.last_index()
    }

    pub fn apply(&mut self, command: CarouselCommand) -> ScrollCommand {
        match command {
            CarouselCommand::Select(category) => self.select_category(category),
            CarouselCommand::Next => self.next(),
            CarouselCommand::Previous => self.previous(),
            CarouselCommand::JumpTo(index) => self.jump_to(index),
        }
    }

    // Empty collections saturate to 0, so start == end.
    fn last_index(&self) -> usize {
        self.count().saturating_sub(1)
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    fn scroll_to(&mut self, index: usize) -> ScrollCommand {
        self.state.current_index = index;
        ScrollCommand { index }
    }
}
