use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Geometry of a horizontally scrolling strip of equal-width cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub card_selector: &'static str,
    /// Used until a card has been laid out.
    pub fallback_width: f64,
    pub gap: f64,
    /// Cards moved per arrow click.
    pub step: u32,
}

pub const DEMO_TRACK: Track = Track {
    card_selector: ".demoCard",
    fallback_width: 320.0,
    gap: 22.0,
    step: 2,
};

pub const NEWS_TRACK: Track = Track {
    card_selector: ".newsCard",
    fallback_width: 340.0,
    gap: 22.0,
    step: 1,
};

impl Track {
    /// Horizontal distance for one click, negative when moving left.
    pub fn delta(&self, card_width: Option<f64>, direction: Direction) -> f64 {
        let width = card_width.unwrap_or(self.fallback_width);
        let distance = (width + self.gap) * f64::from(self.step);
        match direction {
            Direction::Left => -distance,
            Direction::Right => distance,
        }
    }

    /// Smooth-scrolls the mounted track element. Layout is read at call time;
    /// nothing is remembered between calls.
    pub fn scroll(&self, track: &NodeRef, direction: Direction) {
        let Some(el) = track.cast::<Element>() else {
            return;
        };
        let card_width = el
            .query_selector(self.card_selector)
            .ok()
            .flatten()
            .map(|card| card.get_bounding_client_rect().width());

        let options = ScrollToOptions::new();
        options.set_left(self.delta(card_width, direction));
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    }
}
