use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::anchor::{anchor_id, past_threshold, scroll_to};
use crate::content::NAV_LABELS;
use crate::icons::Icon;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(past_threshold(scroll_top));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-glyph">{Icon::Gamepad.glyph()}</span>
                    <span>{"GameImpact"}</span>
                </div>
                <div class="nav-links">
                    {
                        NAV_LABELS.iter().map(|label| {
                            let target = anchor_id(label);
                            let onclick = Callback::from(move |_| {
                                info!("navigating to #{}", target);
                                scroll_to(&target);
                            });
                            html! {
                                <button key={*label} class="nav-link" onclick={onclick}>
                                    {*label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom-color: #e2e8f0;
                    padding: 1rem 0;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    color: #fff;
                    transition: color 0.3s ease;
                }

                .top-nav.scrolled .nav-logo {
                    color: #0f172a;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                    transition: color 0.3s ease, opacity 0.2s ease;
                }

                .nav-link:hover {
                    opacity: 0.8;
                }

                .top-nav.scrolled .nav-link {
                    color: #475569;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
