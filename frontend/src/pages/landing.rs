use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::info;

use crate::carousel::HERO_INTERVAL_MS;
use crate::components::demos::DemoSection;
use crate::components::document_modal::DocumentModal;
use crate::components::hero::Hero;
use crate::components::news::NewsSection;
use crate::components::preorder::PreOrder;
use crate::components::sections::{
    ClusterSection, HelpSection, MarketSection, PilotsSection, V2vSection, WorksSection,
};
use crate::components::topbar::Topbar;
use crate::components::video_modal::VideoModal;
use crate::listeners::{Key, WindowListener};
use crate::state::{LandingAction, LandingState};


#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(LandingState::default);

    // Hero auto-advance, independent of manual navigation
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                info!("Starting hero timer ({} ms)", HERO_INTERVAL_MS);
                let interval = Interval::new(HERO_INTERVAL_MS, move || {
                    dispatcher.dispatch(LandingAction::NextSlide);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Arrow keys drive the hero for as long as the page is mounted
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::keydown(move |event| match Key::of(event) {
                    Some(Key::ArrowLeft) => dispatcher.dispatch(LandingAction::PrevSlide),
                    Some(Key::ArrowRight) => dispatcher.dispatch(LandingAction::NextSlide),
                    _ => {}
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: LandingAction| dispatcher.dispatch(action))
    };

    html! {
        <div class="page">
            <Topbar services_open={state.services_open} on_action={on_action.clone()} />
            <Hero carousel={state.hero} on_action={on_action.clone()} />
            <HelpSection />
            <WorksSection />
            <V2vSection />
            <DemoSection on_action={on_action.clone()} />
            <ClusterSection />
            <PilotsSection />
            <MarketSection />
            <NewsSection on_action={on_action.clone()} />
            <PreOrder />

            {
                if let Some(video_id) = state.video_id {
                    html! {
                        <VideoModal key={video_id} video_id={video_id} on_action={on_action.clone()} />
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(session) = state.viewer.clone() {
                    let pdf_path = session.item().pdf_path;
                    html! {
                        <DocumentModal
                            key={pdf_path}
                            session={session}
                            on_action={on_action.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
