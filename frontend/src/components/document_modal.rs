use yew::prelude::*;
use web_sys::MouseEvent;
use log::info;

use crate::document::{self, DocumentError};
use crate::listeners::{BrowserWindow, Key, Listener, ListenerHost, WindowListener};
use crate::state::LandingAction;
use crate::viewer::{LoadStatus, ViewerSession};

#[derive(Properties, PartialEq)]
pub struct DocumentModalProps {
    pub session: ViewerSession,
    pub on_action: Callback<LandingAction>,
}

/// Reports the host's width now and on every resize until the returned
/// guard is dropped.
fn track_viewport<H: ListenerHost>(host: H, on_action: Callback<LandingAction>) -> Option<Listener<H>> {
    if let Some(width) = host.inner_width() {
        on_action.emit(LandingAction::ViewerResized(width));
    }
    Listener::resize_on(host, move |width| {
        on_action.emit(LandingAction::ViewerResized(width));
    })
}

/// Overlay showing one press PDF a page at a time. Mounted only while a
/// session is open, so its listeners live exactly as long as the session.
#[function_component(DocumentModal)]
pub fn document_modal(props: &DocumentModalProps) -> Html {
    let DocumentModalProps { session, on_action } = props;
    let item = *session.item();
    let pdf_url = item.pdf_url();

    // Page count for the header and pager
    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |pdf_path: &&'static str| {
                let pdf_path = *pdf_path;
                info!("Opening document {}", pdf_path);
                document::load_page_count(
                    item.pdf_url(),
                    Callback::from(move |result: Result<u32, DocumentError>| {
                        on_action.emit(match result {
                            Ok(pages) => LandingAction::DocumentLoaded { pdf_path, pages },
                            Err(_) => LandingAction::DocumentFailed { pdf_path },
                        });
                    }),
                );
                || ()
            },
            item.pdf_path,
        );
    }

    // Fit the page to the window while the modal is open
    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let listener = track_viewport(BrowserWindow, on_action);
                move || drop(listener)
            },
            (),
        );
    }

    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::keydown(move |event| {
                    if Key::of(event) == Some(Key::Escape) {
                        on_action.emit(LandingAction::CloseDocument);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let close = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::CloseDocument))
    };

    let prev = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::PrevPage))
    };

    let next = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::NextPage))
    };

    let body = match session.status() {
        LoadStatus::Loading => html! {
            <div class="pdfLoading">{"Loading PDF…"}</div>
        },
        LoadStatus::Failed => html! {
            <div class="pdfLoading">{"Failed to load PDF. Try the “Open” button."}</div>
        },
        LoadStatus::Loaded => html! {
            <iframe
                key={session.page().to_string()}
                class="pdfPage"
                src={document::page_src(&pdf_url, session.page())}
                width={session.width().to_string()}
                height={document::page_height(session.width()).to_string()}
                title={item.title}
                style="border: 0;"
            />
        },
    };

    html! {
        <div class="pdfModalBackdrop" role="dialog" aria-modal="true" aria-label="PDF viewer">
            <button type="button" class="pdfModalClose" onclick={close} aria-label="Close PDF" />
            <div class="pdfModal">
                <div class="pdfTop">
                    <div class="pdfTopTitle">{item.title}</div>
                    <div class="pdfTopActions">
                        <button
                            type="button"
                            class="pdfNavBtn"
                            onclick={prev}
                            disabled={!session.can_go_prev()}
                        >
                            {"Prev"}
                        </button>
                        <div class="pdfTopPage">{session.page_label()}</div>
                        <button
                            type="button"
                            class="pdfNavBtn"
                            onclick={next}
                            disabled={!session.can_go_next()}
                        >
                            {"Next"}
                        </button>
                        <a class="pdfOpenNew" href={pdf_url.clone()} target="_blank" rel="noreferrer">
                            {"Open"}
                        </a>
                    </div>
                </div>

                <div class="pdfBody">
                    { body }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::content::NEWS;
    use crate::listeners::test_host::TestHost;
    use crate::state::LandingState;

    fn recorder() -> (Rc<RefCell<Vec<LandingAction>>>, Callback<LandingAction>) {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let actions = actions.clone();
            Callback::from(move |action| actions.borrow_mut().push(action))
        };
        (actions, callback)
    }

    fn apply_recorded(state: &mut LandingState, actions: &RefCell<Vec<LandingAction>>) {
        let pending: Vec<LandingAction> = actions.borrow_mut().drain(..).collect();
        for action in pending {
            state.apply(action);
        }
    }

    #[test]
    fn reopening_arms_one_resize_listener_per_session() {
        let host = TestHost::with_width(1200.0);
        let (actions, on_action) = recorder();
        let mut state = LandingState::default();

        for (round, item) in NEWS.iter().chain(NEWS.iter()).enumerate() {
            state.apply(LandingAction::OpenDocument(*item));
            let listener = track_viewport(host.clone(), on_action.clone());
            assert!(listener.is_some());
            assert_eq!(host.live("resize"), 1);

            apply_recorded(&mut state, &actions);
            assert_eq!(state.viewer.as_ref().map(|v| v.width()), Some(980));

            host.set_width(700.0);
            host.fire("resize");
            apply_recorded(&mut state, &actions);
            assert_eq!(state.viewer.as_ref().map(|v| v.width()), Some(620));

            state.apply(LandingAction::CloseDocument);
            drop(listener);
            assert_eq!(host.live("resize"), 0);
            assert_eq!(host.attached("resize"), round + 1);

            host.fire("resize");
            assert!(actions.borrow().is_empty());
            host.set_width(1200.0);
        }
    }

    #[test]
    fn closed_session_ignores_late_resize() {
        let host = TestHost::with_width(900.0);
        let (actions, on_action) = recorder();
        let mut state = LandingState::default();

        state.apply(LandingAction::OpenDocument(NEWS[0]));
        let listener = track_viewport(host.clone(), on_action);
        state.apply(LandingAction::CloseDocument);
        drop(listener);

        host.fire("resize");
        assert_eq!(actions.borrow().len(), 1);
        apply_recorded(&mut state, &actions);
        assert_eq!(state.viewer, None);
        assert_eq!(host.live("resize"), 0);
    }
}
