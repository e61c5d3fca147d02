use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::listeners::{Key, WindowListener};
use crate::state::LandingAction;

#[derive(Properties, PartialEq)]
pub struct TopbarProps {
    pub services_open: bool,
    pub on_action: Callback<LandingAction>,
}

#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let TopbarProps { services_open, on_action } = props;

    // Escape closes the dropdown; the listener only exists while it is open
    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    WindowListener::keydown(move |event| {
                        if Key::of(event) == Some(Key::Escape) {
                            on_action.emit(LandingAction::SetServicesOpen(false));
                        }
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            *services_open,
        );
    }

    let open_services = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::SetServicesOpen(true)))
    };

    let close_services = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::SetServicesOpen(false)))
    };

    let toggle_services = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LandingAction::ToggleServices))
    };

    html! {
        <header class="topbar">
            <div class="topbarInner">
                <div class="brand">
                    <img class="brandLogo" src={config::resolve_public("images/Evbuddy_logo.png")} alt="EV Buddy" />
                </div>

                <nav class="nav" aria-label="Primary">
                    <a class="navItem navActive" href="#home">{"Home"}</a>

                    <div
                        class={classes!("navDropdown", services_open.then(|| "navDropdownOpen"))}
                        onmouseenter={open_services}
                        onmouseleave={close_services}
                    >
                        <button
                            type="button"
                            class="navItem navButton"
                            aria-haspopup="menu"
                            aria-expanded={services_open.to_string()}
                            onclick={toggle_services}
                        >
                            {"Services "}<span class="caret" aria-hidden="true" />
                        </button>
                        <div class="dropdownMenu" role="menu">
                            <a class="dropdownItem" role="menuitem" href="#services">{"Mobile Charging"}</a>
                            <a class="dropdownItem" role="menuitem" href="#services">{"Home Installation"}</a>
                            <a class="dropdownItem" role="menuitem" href="#services">{"Fleet Solutions"}</a>
                        </div>
                    </div>

                    <a class="navItem" href="#investment">{"Investment"}</a>
                    <a class="navItem" href="#news">{"Latest News"}</a>
                    <a class="navItem" href="#rent">{"Rent Charger"}</a>
                </nav>

                <div class="topRight">
                    <a class="signIn" href="#signin">{"New User? / Sign in"}</a>
                    <button type="button" class="themeBtn" aria-label="Toggle theme">
                        <span class="sun" aria-hidden="true" />
                    </button>
                </div>
            </div>
        </header>
    }
}
