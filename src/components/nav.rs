use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::components::icons::{ChevronDownIcon, WavesIcon};
use crate::content::{navigation, Section};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Section,
    pub menu_open: bool,
    pub on_select: Callback<Section>,
    pub on_toggle: Callback<()>,
}

/// Fixed top navigation. Menu state lives in the page because selecting a
/// section has to close the menu; this component only renders and reports.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 40);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let nav_link = |section: Section, label: &'static str, class: &'static str| {
        let on_select = props.on_select.clone();
        let active = if props.active == section { "active" } else { "" };
        html! {
            <button
                class={classes!(class, active)}
                onclick={Callback::from(move |_| on_select.emit(section))}
            >
                { label }
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <WavesIcon class="brand-icon" />
                    <span class="brand-name">{"Jaga Pantai"}</span>
                </div>

                <div class="nav-links">
                    { for navigation().iter().map(|item| nav_link(item.section, item.label, "nav-link")) }
                </div>

                <button
                    class={classes!("burger-menu", props.menu_open.then(|| "open"))}
                    onclick={toggle_menu}
                >
                    <ChevronDownIcon class="burger-icon" />
                </button>
            </div>

            {
                if props.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for navigation().iter().map(|item| nav_link(item.section, item.label, "mobile-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
