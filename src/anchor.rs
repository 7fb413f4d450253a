use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Vertical offset in pixels past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: i32 = 50;

pub fn past_threshold(scroll_top: i32) -> bool {
    scroll_top > SCROLL_THRESHOLD
}

/// Turns a human-readable nav label into the id of its scroll target,
/// e.g. "Benefícios" -> "beneficios".
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().chars().map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Smooth-scrolls the viewport so the element with the given id tops out the
/// view. Unknown ids are ignored, never an error.
pub fn scroll_to(id: &str) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();

    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::warn!("no scroll target with id '{}'", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_portuguese_diacritics() {
        assert_eq!(anchor_id("Benefícios"), "beneficios");
        assert_eq!(anchor_id("Malefícios"), "maleficios");
        assert_eq!(anchor_id("Sustentabilidade"), "sustentabilidade");
    }

    #[test]
    fn plain_labels_only_get_lowercased() {
        assert_eq!(anchor_id("Contato"), "contato");
        assert_eq!(anchor_id("ação"), "acao");
    }

    #[test]
    fn navbar_threshold_flips_past_50px() {
        assert!(!past_threshold(0));
        assert!(!past_threshold(50));
        assert!(past_threshold(51));
        assert!(past_threshold(600));
    }
}
