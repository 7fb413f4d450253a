use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::section::Section;
use crate::content::SECTIONS;

/// The whole site: navbar, hero, the three themed sections in fixed order,
/// footer. Section styling lives here so the rules appear once no matter
/// how many sections render.
#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Navbar />
            <Hero />
            {
                SECTIONS.iter().map(|content| html! {
                    <Section key={content.id} content={*content} />
                }).collect::<Html>()
            }
            <Footer />

            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                .home-page {
                    min-height: 100vh;
                    background: #f8fafc;
                }

                ::selection {
                    background: #dbeafe;
                    color: #1e3a8a;
                }

                .section {
                    padding: 6rem 0;
                }

                .section-white { background: #fff; }
                .section-slate { background: #f8fafc; }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-row {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }

                .section-row.reversed {
                    flex-direction: row-reverse;
                }

                .section-image-col,
                .section-text-col {
                    flex: 1;
                    min-width: 0;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .section-image-frame {
                    position: relative;
                }

                .image-glow {
                    position: absolute;
                    inset: -1rem;
                    border-radius: 1rem;
                    filter: blur(24px);
                    opacity: 0.3;
                }

                .glow-blue { background: #3b82f6; }
                .glow-orange { background: #f97316; }
                .glow-green { background: #22c55e; }

                .image-card {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    aspect-ratio: 4 / 3;
                }

                .image-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .image-card:hover img {
                    transform: scale(1.05);
                }

                .image-badge {
                    position: absolute;
                    top: 1.5rem;
                    left: 1.5rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .image-badge-glyph {
                    font-size: 1.75rem;
                    line-height: 1;
                }

                .section-tag {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    border: 1px solid;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .badge-blue {
                    background: #dbeafe;
                    color: #1d4ed8;
                    border-color: #bfdbfe;
                }
                .badge-orange {
                    background: #ffedd5;
                    color: #c2410c;
                    border-color: #fed7aa;
                }
                .badge-green {
                    background: #dcfce7;
                    color: #15803d;
                    border-color: #bbf7d0;
                }

                .title-blue { color: #2563eb; }
                .title-orange { color: #ea580c; }
                .title-green { color: #16a34a; }

                .section-text-col h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #0f172a;
                    margin-bottom: 1.5rem;
                }

                .section-description {
                    font-size: 1.125rem;
                    color: #475569;
                    line-height: 1.7;
                }

                .list-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 2rem 0 1.5rem;
                }

                .section-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .section-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #334155;
                }

                .item-marker {
                    flex-shrink: 0;
                    margin-top: 0.25rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    line-height: 1;
                }

                .icon-bg-blue { background: #dbeafe; color: #2563eb; }
                .icon-bg-orange { background: #ffedd5; color: #ea580c; }
                .icon-bg-green { background: #dcfce7; color: #16a34a; }

                .item-dot {
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 9999px;
                    background: currentColor;
                }

                .section-list .item-label {
                    font-weight: 600;
                    color: #0f172a;
                }

                .section-extra {
                    margin-top: 1.5rem;
                    padding-left: 1rem;
                    border-left: 4px solid #e2e8f0;
                    color: #475569;
                    font-style: italic;
                }

                @media (max-width: 1024px) {
                    .section-row,
                    .section-row.reversed {
                        flex-direction: column;
                    }

                    .section-text-col h2 {
                        font-size: 1.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
