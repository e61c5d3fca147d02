use yew::prelude::*;
use web_sys::MouseEvent;

use crate::listeners::{Key, WindowListener};
use crate::state::LandingAction;
use crate::video;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub video_id: &'static str,
    pub on_action: Callback<LandingAction>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let VideoModalProps { video_id, on_action } = props;

    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::keydown(move |event| {
                    if Key::of(event) == Some(Key::Escape) {
                        on_action.emit(LandingAction::CloseVideo);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let close = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::CloseVideo))
    };

    html! {
        <div class="demoModalBackdrop" role="dialog" aria-modal="true" aria-label="Video player">
            <button type="button" class="demoModalClose" onclick={close} aria-label="Close video" />
            <div class="demoModal">
                <iframe
                    class="demoIframe"
                    src={video::embed_url(video_id)}
                    title="EV Buddy demo video"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}
