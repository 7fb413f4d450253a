use yew::prelude::*;

use crate::content::{ListItem, SectionContent};
use crate::reveal::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: SectionContent,
}

/// The one reusable layout on the page: anchored two-column block with a
/// themed image side and a themed text side, flipped when `reversed`.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let content = props.content;
    let tokens = content.theme.tokens();

    let image_ref = use_node_ref();
    let text_ref = use_node_ref();
    let image_reveal = use_reveal(image_ref.clone());
    let text_reveal = use_reveal(text_ref.clone());

    html! {
        <section id={content.id} class={classes!("section", tokens.section_bg)}>
            <div class="section-inner">
                <div class={classes!("section-row", content.reversed.then_some("reversed"))}>

                    <div class="section-image-col">
                        <div
                            ref={image_ref}
                            class={classes!("section-image-frame", image_reveal.class())}
                        >
                            <div class={classes!("image-glow", tokens.glow)}></div>
                            <div class="image-card">
                                <img src={content.image} alt={content.title} />
                                <div class="image-badge">
                                    <span class={classes!("image-badge-glyph", tokens.title)}>
                                        {content.icon.glyph()}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="section-text-col">
                        <div ref={text_ref} class={text_reveal.class()}>
                            <span class={classes!("section-tag", tokens.badge)}>
                                {content.id.to_uppercase()}
                            </span>
                            <h2>{content.title}</h2>
                            <p class="section-description">{content.description}</p>

                            <h3 class={classes!("list-title", tokens.title)}>
                                {content.list_title}
                            </h3>
                            <ul class="section-list">
                                {
                                    content.items.iter().map(|item| {
                                        render_item(item, tokens.icon_bg)
                                    }).collect::<Html>()
                                }
                            </ul>

                            {
                                if let Some(extra) = content.extra_text {
                                    html! { <p class="section-extra">{extra}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                </div>
            </div>

        </section>
    }
}

/// Items without their own icon get a plain filled dot.
fn marker_glyph(item: &ListItem) -> Option<&'static str> {
    item.icon.map(|icon| icon.glyph())
}

fn render_item(item: &ListItem, icon_bg: &'static str) -> Html {
    let marker = match marker_glyph(item) {
        Some(glyph) => html! { <span>{glyph}</span> },
        None => html! { <span class="item-dot"></span> },
    };

    html! {
        <li key={item.label}>
            <span class={classes!("item-marker", icon_bg)}>{marker}</span>
            <span>
                <span class="item-label">{item.label}</span>
                {" "}
                {item.text}
            </span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;

    #[test]
    fn items_without_an_icon_fall_back_to_the_dot() {
        let item = ListItem {
            label: "Exemplo:",
            text: "texto",
            icon: None,
        };
        assert_eq!(marker_glyph(&item), None);
    }

    #[test]
    fn items_with_an_icon_use_its_glyph() {
        let item = ListItem {
            label: "Exemplo:",
            text: "texto",
            icon: Some(Icon::Leaf),
        };
        assert_eq!(marker_glyph(&item), Some(Icon::Leaf.glyph()));
    }
}
