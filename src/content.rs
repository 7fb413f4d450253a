//! Static page copy. Everything here is defined once and rendered as-is;
//! nothing mutates it after mount.

use crate::icons::Icon;
use crate::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListItem {
    pub label: &'static str,
    pub text: &'static str,
    pub icon: Option<Icon>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SectionContent {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub list_title: &'static str,
    pub items: &'static [ListItem],
    pub extra_text: Option<&'static str>,
    pub image: &'static str,
    pub theme: Theme,
    pub icon: Icon,
    pub reversed: bool,
}

/// Navbar labels, in page order. `anchor_id` of each one must match the id
/// of the section it scrolls to.
pub const NAV_LABELS: [&str; 3] = ["Benefícios", "Malefícios", "Sustentabilidade"];

pub const HERO_TAG: &str = "Tecnologia e Sociedade";
pub const HERO_SUBTITLE: &str =
    "Um olhar completo sobre como os jogos influenciam nossa vida e o planeta.";
pub const HERO_CTA: &str = "Explorar o Impacto";

const BENEFICIOS_ITEMS: &[ListItem] = &[
    ListItem {
        label: "Melhora da coordenação motora:",
        text: "jogos de ação exigem reflexos, precisão e agilidade.",
        icon: Some(Icon::Zap),
    },
    ListItem {
        label: "Desenvolvimento do raciocínio lógico:",
        text: "jogos de estratégia estimulam planejamento e tomada de decisões.",
        icon: Some(Icon::Brain),
    },
    ListItem {
        label: "Aprimoramento da memória:",
        text: "muitos jogos exigem lembrar mapas, padrões e regras.",
        icon: Some(Icon::Brain),
    },
    ListItem {
        label: "Alívio do estresse:",
        text: "jogar pode ajudar a relaxar e reduzir a ansiedade.",
        icon: Some(Icon::Users),
    },
    ListItem {
        label: "Socialização online:",
        text: "jogos multiplayer criam comunidades e fortalecem amizades.",
        icon: Some(Icon::Users),
    },
    ListItem {
        label: "Aplicações educacionais:",
        text: "jogos são usados em escolas para ensinar matemática, história e ciências.",
        icon: Some(Icon::Users),
    },
    ListItem {
        label: "Treinamentos profissionais:",
        text: "simuladores ajudam pilotos, médicos e militares a praticar habilidades.",
        icon: Some(Icon::Users),
    },
];

const MALEFICIOS_ITEMS: &[ListItem] = &[
    ListItem {
        label: "Sedentarismo:",
        text: "ficar longas horas sentado eleva riscos cardíacos e obesidade.",
        icon: Some(Icon::AlertTriangle),
    },
    ListItem {
        label: "Problemas de visão:",
        text: "excesso de telas causa fadiga ocular e ressecamento.",
        icon: Some(Icon::Eye),
    },
    ListItem {
        label: "Distúrbios do sono:",
        text: "jogar à noite atrapalha o ciclo natural de descanso.",
        icon: Some(Icon::Moon),
    },
    ListItem {
        label: "Ansiedade e irritabilidade:",
        text: "jogos competitivos podem gerar estresse.",
        icon: Some(Icon::AlertTriangle),
    },
    ListItem {
        label: "Dependência de jogos:",
        text: "a OMS reconhece como um transtorno real.",
        icon: Some(Icon::AlertTriangle),
    },
    ListItem {
        label: "Isolamento social:",
        text: "jogadores podem substituir interações reais pelas virtuais.",
        icon: Some(Icon::Users),
    },
    ListItem {
        label: "Queda no desempenho escolar:",
        text: "excesso de tempo jogando reduz foco e disciplina.",
        icon: Some(Icon::AlertTriangle),
    },
];

const SUSTENTABILIDADE_ITEMS: &[ListItem] = &[
    ListItem {
        label: "Alto consumo de energia:",
        text: "consoles, PCs gamers e servidores usam muita eletricidade.",
        icon: Some(Icon::Zap),
    },
    ListItem {
        label: "Resíduos eletrônicos:",
        text: "troca constante de consoles gera lixo eletrônico.",
        icon: Some(Icon::Recycle),
    },
    ListItem {
        label: "Consoles mais eficientes:",
        text: "empresas estão reduzindo consumo energético dos aparelhos.",
        icon: Some(Icon::Battery),
    },
    ListItem {
        label: "Materiais recicláveis:",
        text: "embalagens de jogos e consoles usam menos plástico.",
        icon: Some(Icon::Leaf),
    },
    ListItem {
        label: "Jogos digitais:",
        text: "reduzem necessidade de mídia física e transporte.",
        icon: Some(Icon::Leaf),
    },
    ListItem {
        label: "Servidores com energia limpa:",
        text: "muitas empresas usam energia solar e eólica.",
        icon: Some(Icon::Leaf),
    },
];

pub const SECTIONS: [SectionContent; 3] = [
    SectionContent {
        id: "beneficios",
        title: "Benefícios dos Videogames",
        description: "Videogames deixaram de ser apenas entretenimento e se tornaram ferramentas \
            importantes para educação, desenvolvimento cognitivo e até para tratamento de algumas \
            condições neurológicas. Pesquisas mostram que jogos bem aplicados podem melhorar \
            diversas áreas do cérebro e habilidades sociais.",
        list_title: "Principais benefícios:",
        items: BENEFICIOS_ITEMS,
        extra_text: Some(
            "Além disso, estudos indicam que jogos podem melhorar a criatividade, estimular a \
            persistência e proporcionar experiências culturais ricas e imersivas.",
        ),
        image: "/assets/beneficios.png",
        theme: Theme::Blue,
        icon: Icon::Check,
        reversed: false,
    },
    SectionContent {
        id: "maleficios",
        title: "Malefícios dos Videogames",
        description: "Assim como qualquer tecnologia, o videogame pode trazer efeitos negativos \
            quando usado sem moderação. Jogar demais pode prejudicar a saúde física, emocional e \
            social, especialmente em crianças e adolescentes.",
        list_title: "Principais riscos e malefícios:",
        items: MALEFICIOS_ITEMS,
        extra_text: Some(
            "O segredo é o equilíbrio: jogar pode ser muito positivo, desde que não prejudique \
            atividades essenciais como estudo, trabalho, sono e convívio social.",
        ),
        image: "/assets/maleficios.png",
        theme: Theme::Orange,
        icon: Icon::AlertTriangle,
        reversed: true,
    },
    SectionContent {
        id: "sustentabilidade",
        title: "Sustentabilidade Ambiental",
        description: "A indústria dos videogames, assim como todas as áreas da tecnologia, também \
            tem impacto ambiental. O consumo de energia, produção de consoles e servidores online \
            são fatores importantes. No entanto, o setor vem buscando soluções para reduzir danos \
            ao meio ambiente.",
        list_title: "Impactos e Ações:",
        items: SUSTENTABILIDADE_ITEMS,
        extra_text: Some(
            "A junção entre tecnologia e sustentabilidade é um dos maiores desafios do futuro, e \
            o mundo dos videogames tem grande potencial para ser parte dessa mudança.",
        ),
        image: "/assets/sustentabilidade.png",
        theme: Theme::Green,
        icon: Icon::Leaf,
        reversed: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::anchor_id;

    #[test]
    fn nav_labels_resolve_to_section_ids() {
        for (label, section) in NAV_LABELS.iter().zip(SECTIONS.iter()) {
            assert_eq!(anchor_id(label), section.id);
        }
    }

    #[test]
    fn hero_topics_are_the_three_nav_labels() {
        assert_eq!(
            NAV_LABELS,
            ["Benefícios", "Malefícios", "Sustentabilidade"]
        );
    }

    #[test]
    fn sections_come_in_fixed_theme_order() {
        let themes: Vec<_> = SECTIONS.iter().map(|s| s.theme).collect();
        assert_eq!(themes, vec![Theme::Blue, Theme::Orange, Theme::Green]);
    }

    #[test]
    fn only_the_middle_section_is_reversed() {
        assert!(!SECTIONS[0].reversed);
        assert!(SECTIONS[1].reversed);
        assert!(!SECTIONS[2].reversed);
    }

    #[test]
    fn maleficios_lists_seven_filled_items() {
        let maleficios = &SECTIONS[1];
        assert_eq!(maleficios.id, "maleficios");
        assert_eq!(maleficios.items.len(), 7);
        for item in maleficios.items {
            assert!(!item.label.is_empty());
            assert!(!item.text.is_empty());
        }
    }

    #[test]
    fn every_section_has_copy_and_an_image() {
        for section in &SECTIONS {
            assert!(!section.title.is_empty());
            assert!(!section.description.is_empty());
            assert!(!section.list_title.is_empty());
            assert!(!section.items.is_empty());
            assert!(section.image.starts_with("/assets/"));
        }
    }
}
