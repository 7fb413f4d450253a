use yew::prelude::*;

use crate::icons::Icon;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="page-footer">
            <div class="footer-content">
                <span class="footer-glyph">{Icon::Gamepad.glyph()}</span>
                <p>{"Desenvolvido para fins educacionais — 2025"}</p>
                <div class="footer-links">
                    <a href="#">{"Sobre"}</a>
                    <a href="#">{"Contato"}</a>
                    <a href="#">{"Política de Privacidade"}</a>
                </div>
            </div>

            <style>
                {r#"
                .page-footer {
                    background: #0f172a;
                    border-top: 1px solid #1e293b;
                    color: #94a3b8;
                    padding: 3rem 0;
                    text-align: center;
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .footer-glyph {
                    display: block;
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    filter: grayscale(1);
                    opacity: 0.6;
                }

                .footer-content p {
                    margin-bottom: 1rem;
                }

                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-links a:hover {
                    color: #fff;
                }
                "#}
            </style>
        </footer>
    }
}
