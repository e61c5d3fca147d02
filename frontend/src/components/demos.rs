use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{DemoItem, DEMOS};
use crate::scroller::{Direction, DEMO_TRACK};
use crate::state::LandingAction;
use crate::video;

#[derive(Properties, PartialEq)]
pub struct DemoSectionProps {
    pub on_action: Callback<LandingAction>,
}

#[function_component(DemoSection)]
pub fn demo_section(props: &DemoSectionProps) -> Html {
    let track_ref = use_node_ref();

    let scroll = |direction: Direction| {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| DEMO_TRACK.scroll(&track_ref, direction))
    };

    html! {
        <section class="demo" aria-label="See EV Buddy in Action">
            <div class="demoInner">
                <h2 class="demoTitle">{"See EV Buddy in Action"}</h2>
                <p class="demoSub">
                    {"Watch real-time, V2V DC fast charging in action and see how easy it is to get back on the road in minutes."}
                </p>

                <div class="demoCarousel" aria-label="Demo videos">
                    <button type="button" class="demoArrow demoArrowLeft" onclick={scroll(Direction::Left)} aria-label="Scroll left">
                        <span class="demoArrowIcon" aria-hidden="true" />
                    </button>

                    <div class="demoTrack" ref={track_ref.clone()}>
                        { DEMOS.iter().map(|item| html! {
                            <DemoCard key={item.title} item={*item} on_action={props.on_action.clone()} />
                        }).collect::<Html>() }
                    </div>

                    <button type="button" class="demoArrow demoArrowRight" onclick={scroll(Direction::Right)} aria-label="Scroll right">
                        <span class="demoArrowIcon" aria-hidden="true" />
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct DemoCardProps {
    item: DemoItem,
    on_action: Callback<LandingAction>,
}

#[function_component(DemoCard)]
fn demo_card(props: &DemoCardProps) -> Html {
    let item = props.item;
    let play = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::PlayVideo(item.youtube_id)))
    };

    html! {
        <article class="demoCard">
            <button
                type="button"
                class="demoThumb"
                onclick={play}
                aria-label={format!("Play {} video", item.title)}
            >
                <img
                    class="demoImg"
                    src={video::thumbnail_url(item.youtube_id)}
                    alt={item.title}
                    loading="lazy"
                />
                <span class="demoPlay" aria-hidden="true" />
            </button>

            <div class="demoMeta">
                <div class="demoCardTitle">{item.title}</div>
                <div class="demoCardBody">{item.desc}</div>
            </div>
        </article>
    }
}
