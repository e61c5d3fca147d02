use yew::prelude::*;
use web_sys::MouseEvent;

use crate::carousel::Carousel;
use crate::content::SLIDES;
use crate::state::LandingAction;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub carousel: Carousel,
    pub on_action: Callback<LandingAction>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { carousel, on_action } = props;
    let slide = SLIDES[carousel.index()];

    let go_prev = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::PrevSlide))
    };

    let go_next = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::NextSlide))
    };

    html! {
        <main id="home" class="hero" aria-label="Hero">
            <div class="heroBg" aria-hidden="true">
                <img class="heroImg" key={slide.id} src={slide.image_url()} alt={slide.alt} />
                <div class="heroOverlay" />
            </div>

            <button type="button" class="arrow arrowLeft" onclick={go_prev} aria-label="Previous slide">
                <span class="arrowIcon" aria-hidden="true" />
            </button>
            <button type="button" class="arrow arrowRight" onclick={go_next} aria-label="Next slide">
                <span class="arrowIcon" aria-hidden="true" />
            </button>

            <div class="heroContent">
                <h1 class="heroTitle">
                    {"Powering the Future of EV"}
                    <br />
                    {"Charging Infrastructure"}
                </h1>

                <p class="heroSub">
                    {"EV Buddy is revolutionizing how EVs stay on the move. Our mission is to eliminate range anxiety and build a scalable, mobile charging ecosystem for the next generation of mobility."}
                </p>

                <div class="heroCtas">
                    <a class="cta ctaPrimary" href="#investment">{"Invest in EV Buddy"}</a>
                    <a class="cta ctaSecondary" href="#rent">{"Rent a Charger"}</a>
                </div>

                <div class="dots" role="tablist" aria-label="Slides">
                    { SLIDES.iter().enumerate().map(|(idx, s)| {
                        let active = carousel.is_active(idx);
                        let onclick = {
                            let on_action = on_action.clone();
                            Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::ShowSlide(idx)))
                        };
                        html! {
                            <button
                                key={s.id}
                                type="button"
                                class={classes!("dot", active.then(|| "dotActive"))}
                                aria-label={format!("Go to slide {}", idx + 1)}
                                aria-selected={active.to_string()}
                                {onclick}
                            />
                        }
                    }).collect::<Html>() }
                </div>
            </div>
        </main>
    }
}
