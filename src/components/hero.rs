use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::anchor::scroll_to;
use crate::content::{HERO_CTA, HERO_SUBTITLE, HERO_TAG, NAV_LABELS};
use crate::icons::Icon;

/// Delay before the scroll hint chevron fades in, in milliseconds.
const CHEVRON_DELAY_MS: u32 = 1000;

#[function_component(Hero)]
pub fn hero() -> Html {
    let chevron_visible = use_state(|| false);

    {
        let chevron_visible = chevron_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(CHEVRON_DELAY_MS, move || {
                    chevron_visible.set(true);
                });
                move || {
                    timeout.cancel();
                }
            },
            (),
        );
    }

    let explore = Callback::from(|_| scroll_to("beneficios"));

    html! {
        <header class="hero">
            <div class="hero-background">
                <img src="/assets/hero_bg.png" alt="Background" />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <span class="hero-tag">{HERO_TAG}</span>
                <h1>
                    {"Videogames: "}
                    <span class="accent-blue">{NAV_LABELS[0]}</span>
                    {", "}
                    <span class="accent-orange">{NAV_LABELS[1]}</span>
                    {" e "}
                    <span class="accent-green">{NAV_LABELS[2]}</span>
                </h1>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                <button class="hero-cta" onclick={explore}>{HERO_CTA}</button>
            </div>

            <div class={classes!("scroll-hint", (*chevron_visible).then_some("visible"))}>
                {Icon::ChevronDown.glyph()}
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #0f172a;
                    color: #fff;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom,
                        rgba(15, 23, 42, 0.5),
                        rgba(15, 23, 42, 0.5),
                        #020617);
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 4rem auto 0;
                    padding: 0 1.5rem;
                    text-align: center;
                    animation: hero-enter 0.8s ease-out both;
                }

                @keyframes hero-enter {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero-tag {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(96, 165, 250, 0.3);
                    background: rgba(59, 130, 246, 0.2);
                    backdrop-filter: blur(4px);
                    color: #93c5fd;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .hero h1 {
                    font-size: 4rem;
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    margin-bottom: 1.5rem;
                }

                .accent-blue { color: #60a5fa; }
                .accent-orange { color: #fb923c; }
                .accent-green { color: #4ade80; }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }

                .hero-cta {
                    height: 3rem;
                    padding: 0 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #2563eb;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero-cta:hover {
                    background: #1d4ed8;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 1;
                    font-size: 2rem;
                    color: rgba(255, 255, 255, 0.5);
                    opacity: 0;
                    transition: opacity 1s ease;
                }

                .scroll-hint.visible {
                    opacity: 1;
                    animation: hint-bounce 1.5s ease-in-out infinite;
                }

                @keyframes hint-bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
