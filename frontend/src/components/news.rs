use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{NewsItem, NEWS};
use crate::document::{self, DocumentError, THUMBNAIL_WIDTH};
use crate::scroller::{Direction, NEWS_TRACK};
use crate::state::LandingAction;

#[derive(Properties, PartialEq)]
pub struct NewsSectionProps {
    pub on_action: Callback<LandingAction>,
}

#[function_component(NewsSection)]
pub fn news_section(props: &NewsSectionProps) -> Html {
    let track_ref = use_node_ref();

    let on_open = {
        let on_action = props.on_action.clone();
        Callback::from(move |item: NewsItem| on_action.emit(LandingAction::OpenDocument(item)))
    };

    let scroll = |direction: Direction| {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| NEWS_TRACK.scroll(&track_ref, direction))
    };

    html! {
        <section id="news" class="news" aria-label="Latest News & Press">
            <div class="newsInner">
                <h2 class="newsHeader">{"Latest News & Press"}</h2>
                <p class="newsSub">{"Stay updated with EV Buddy's latest innovations and partnerships."}</p>

                <div class="newsCarousel" aria-label="News carousel">
                    <div class="newsTrack" ref={track_ref.clone()}>
                        { NEWS.iter().map(|item| html! {
                            <NewsCard key={item.pdf_path} item={*item} on_open={on_open.clone()} />
                        }).collect::<Html>() }
                    </div>

                    <div class="newsNav" aria-label="News navigation">
                        <button type="button" class="newsNavBtn" onclick={scroll(Direction::Left)} aria-label="Previous">
                            <span class="newsNavIcon" aria-hidden="true" />
                        </button>
                        <button type="button" class="newsNavBtn" onclick={scroll(Direction::Right)} aria-label="Next">
                            <span class="newsNavIcon newsNavIconRight" aria-hidden="true" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Preview {
    Loading,
    Ready(u32),
    Unavailable,
}

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub item: NewsItem,
    pub on_open: Callback<NewsItem>,
}

/// Press card with a first-page preview. The preview loads on its own; if it
/// fails only the thumbnail is replaced and the card keeps working.
#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let item = props.item;
    let pdf_url = item.pdf_url();
    let preview = use_state(|| Preview::Loading);

    {
        let preview = preview.clone();
        use_effect_with_deps(
            move |url: &String| {
                document::load_page_count(
                    url.clone(),
                    Callback::from(move |result: Result<u32, DocumentError>| {
                        preview.set(match result {
                            Ok(pages) => Preview::Ready(pages),
                            Err(_) => Preview::Unavailable,
                        });
                    }),
                );
                || ()
            },
            pdf_url.clone(),
        );
    }

    let open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(item))
    };

    let total = match *preview {
        Preview::Ready(pages) => pages.to_string(),
        _ => "–".to_string(),
    };

    html! {
        <article class="newsCard">
            <button
                type="button"
                class="newsThumb"
                onclick={open.clone()}
                aria-label={format!("Open {} PDF", item.title)}
            >
                <div class="newsPager" aria-hidden="true">
                    <span class="newsPagerPill">{"1"}</span>
                    <span class="newsPagerOf">{"of"}</span>
                    <span class="newsPagerPill">{total}</span>
                </div>

                <div class="newsThumbFrame" aria-hidden="true">
                    {
                        match *preview {
                            Preview::Loading => html! {},
                            Preview::Ready(_) => html! {
                                <iframe
                                    class="pdfThumbPage"
                                    src={document::page_src(&pdf_url, 1)}
                                    width={THUMBNAIL_WIDTH.to_string()}
                                    height={document::page_height(THUMBNAIL_WIDTH).to_string()}
                                    title={item.title}
                                    tabindex="-1"
                                    style="pointer-events: none; border: 0;"
                                />
                            },
                            Preview::Unavailable => html! {
                                <div class="pdfThumbError">{"PDF preview unavailable"}</div>
                            },
                        }
                    }
                </div>
            </button>

            <div class="newsMeta">
                <div class="newsTitle">{item.title}</div>
                <div class="newsBody">{item.desc}</div>
                <button type="button" class="newsBtn" onclick={open}>
                    {"Read More"}
                </button>
            </div>
        </article>
    }
}
