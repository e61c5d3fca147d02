//! View state for the landing page.
//!
//! Everything the page can change lives in one [`LandingState`] value owned by
//! a `use_reducer` hook. Click handlers, the hero timer, window listeners and
//! document load completions never touch the state directly; they dispatch a
//! [`LandingAction`] and the reducer applies it to a fresh copy.

use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::carousel::Carousel;
use crate::content::{NewsItem, SLIDE_COUNT};
use crate::viewer::ViewerSession;

#[derive(Debug, Clone, PartialEq)]
pub struct LandingState {
    pub hero: Carousel,
    pub services_open: bool,
    pub video_id: Option<&'static str>,
    pub viewer: Option<ViewerSession>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            hero: Carousel::new(SLIDE_COUNT),
            services_open: false,
            video_id: None,
            viewer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LandingAction {
    NextSlide,
    PrevSlide,
    ShowSlide(usize),

    SetServicesOpen(bool),
    ToggleServices,

    PlayVideo(&'static str),
    CloseVideo,

    OpenDocument(NewsItem),
    /// Page count reported for the document at `pdf_path`.
    DocumentLoaded { pdf_path: &'static str, pages: u32 },
    DocumentFailed { pdf_path: &'static str },
    PrevPage,
    NextPage,
    /// Window inner width in CSS pixels.
    ViewerResized(f64),
    CloseDocument,
}

impl LandingState {
    pub fn apply(&mut self, action: LandingAction) {
        match action {
            LandingAction::NextSlide => self.hero = self.hero.advance(),
            LandingAction::PrevSlide => self.hero = self.hero.retreat(),
            LandingAction::ShowSlide(index) => self.hero = self.hero.jump_to(index),

            LandingAction::SetServicesOpen(open) => self.services_open = open,
            LandingAction::ToggleServices => self.services_open = !self.services_open,

            LandingAction::PlayVideo(id) => self.video_id = Some(id),
            LandingAction::CloseVideo => self.video_id = None,

            LandingAction::OpenDocument(item) => self.viewer = Some(ViewerSession::open(item)),
            LandingAction::DocumentLoaded { pdf_path, pages } => match self.viewer.as_mut() {
                Some(session) if session.shows(pdf_path) => session.loaded(pages),
                _ => warn!("Dropping page count for {} (no longer open)", pdf_path),
            },
            LandingAction::DocumentFailed { pdf_path } => match self.viewer.as_mut() {
                Some(session) if session.shows(pdf_path) => session.failed(),
                _ => warn!("Dropping load failure for {} (no longer open)", pdf_path),
            },
            LandingAction::PrevPage => {
                if let Some(session) = self.viewer.as_mut() {
                    session.prev_page();
                }
            }
            LandingAction::NextPage => {
                if let Some(session) = self.viewer.as_mut() {
                    session.next_page();
                }
            }
            LandingAction::ViewerResized(inner_width) => {
                if let Some(session) = self.viewer.as_mut() {
                    session.resize(inner_width);
                }
            }
            LandingAction::CloseDocument => self.viewer = None,
        }
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
