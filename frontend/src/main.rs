use yew::prelude::*;
use log::{info, Level};

mod carousel;
mod config;
mod content;
mod document;
mod listeners;
mod scroller;
mod state;
mod video;
mod viewer;

mod components {
    pub mod demos;
    pub mod document_modal;
    pub mod hero;
    pub mod news;
    pub mod preorder;
    pub mod sections;
    pub mod topbar;
    pub mod video_modal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting EV Buddy landing page (assets under {})", config::get_base_url());
    yew::Renderer::<App>::new().render();
}
