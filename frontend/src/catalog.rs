//! Component catalog: fixed instances of the visual components on a dark
//! canvas, for checking them in isolation. Built with `--features catalog`.

use log::debug;
use yew::prelude::*;

use crate::animation::orb_state::OrbState;
use crate::components::feature_card::FeatureCard;
use crate::components::orb::Orb;
use crate::components::robot::{Robot, RobotAnimation};

const SMALL_ORB: f64 = 128.0;
const LARGE_ORB: f64 = 384.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Centered,
    Padded,
    Fullscreen,
}

impl Layout {
    fn classes(self) -> &'static str {
        match self {
            Layout::Centered => "flex items-center justify-center min-h-[80vh] p-4",
            Layout::Padded => "p-4",
            Layout::Fullscreen => "",
        }
    }
}

struct CardArgs {
    image: &'static str,
    image_alt: &'static str,
    title: &'static str,
    description: &'static str,
    accent_color: Option<&'static str>,
}

impl CardArgs {
    fn view(&self) -> Html {
        match self.accent_color {
            Some(accent) => html! {
                <FeatureCard
                    image={self.image}
                    image_alt={self.image_alt}
                    title={self.title}
                    description={self.description}
                    accent_color={accent}
                />
            },
            None => html! {
                <FeatureCard
                    image={self.image}
                    image_alt={self.image_alt}
                    title={self.title}
                    description={self.description}
                />
            },
        }
    }
}

const CARD_IMAGE: &str = "/donarosablue.png";

const CARD_STORIES: [(&str, CardArgs); 7] = [
    ("Default", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Agente de Voz",
        description: "Nuestros agentes pueden atender llamadas telefónicas 24/7, responder consultas de clientes, procesar reclamos y brindar soporte técnico en tiempo real.",
        accent_color: Some("rgba(59, 130, 246, 0.65)"),
    }),
    ("Vibrant Blue", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Integración con WhatsApp",
        description: "Conectá tu sistema con WhatsApp Business y permití que tus clientes se comuniquen por el canal que prefieren, con respuestas automáticas e inteligentes.",
        accent_color: Some("rgba(59, 130, 246, 0.7)"),
    }),
    ("Vibrant Purple", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Personalización Total",
        description: "Cada agente se adapta a tu sistema de gestión, conoce a tus clientes por nombre y puede acceder a su información de cuenta para brindar un servicio personalizado.",
        accent_color: Some("rgba(168, 85, 247, 0.65)"),
    }),
    ("Vibrant Green", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Reportes y Analytics",
        description: "Obtené insights detallados sobre las interacciones con tus clientes, identifica problemas recurrentes y mejora continuamente tu servicio.",
        accent_color: Some("rgba(34, 197, 94, 0.65)"),
    }),
    ("Vibrant Orange", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Soporte 24/7",
        description: "Nuestro equipo está disponible las 24 horas del día, los 7 días de la semana para ayudarte con cualquier consulta o problema.",
        accent_color: Some("rgba(249, 115, 22, 0.65)"),
    }),
    ("Vibrant Pink", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Experiencia Premium",
        description: "Ofrecemos una experiencia de cliente premium que supera las expectativas y fideliza a tus usuarios.",
        accent_color: Some("rgba(236, 72, 153, 0.65)"),
    }),
    // No accent: exercises the default color.
    ("Long Content", CardArgs {
        image: CARD_IMAGE,
        image_alt: "Feature illustration",
        title: "Título Muy Largo Para Probar El Layout",
        description: "Esta es una descripción extremadamente larga para probar cómo se comporta el componente con mucho contenido. Incluye múltiples líneas de texto, detalles extensos sobre la funcionalidad, y permite verificar que el diseño se mantiene coherente incluso con cantidades significativas de texto. El componente debe manejar esto de manera elegante.",
        accent_color: None,
    }),
];

const VOICE_AGENT: &str = "Nuestros agentes pueden atender llamadas telefónicas 24/7, responder consultas de clientes y procesar reclamos.";
const WHATSAPP: &str = "Conectá tu sistema con WhatsApp Business y permití que tus clientes se comuniquen por el canal que prefieren.";
const PERSONALIZATION: &str = "Cada agente se adapta a tu sistema de gestión y conoce a tus clientes por nombre.";
const ANALYTICS: &str = "Obtené insights detallados sobre las interacciones con tus clientes e identifica problemas recurrentes.";

const fn grid_card(image_alt: &'static str, title: &'static str, description: &'static str, accent: &'static str) -> CardArgs {
    CardArgs { image: CARD_IMAGE, image_alt, title, description, accent_color: Some(accent) }
}

const TWO_PER_ROW: [CardArgs; 4] = [
    grid_card("Agente de Voz", "Agente de Voz", VOICE_AGENT, "rgba(59, 130, 246, 0.7)"),
    grid_card("WhatsApp Business", "Integración con WhatsApp", WHATSAPP, "rgba(168, 85, 247, 0.65)"),
    grid_card("Personalización", "Personalización Total", PERSONALIZATION, "rgba(34, 197, 94, 0.65)"),
    grid_card("Analytics", "Reportes y Analytics", ANALYTICS, "rgba(249, 115, 22, 0.65)"),
];

const BLUE_MONOCHROMATIC: [CardArgs; 5] = [
    grid_card("Agente de Voz", "Agente de Voz", VOICE_AGENT, "rgba(37, 99, 235, 0.7)"),
    grid_card("WhatsApp Business", "Integración con WhatsApp", WHATSAPP, "rgba(59, 130, 246, 0.7)"),
    grid_card("Personalización", "Personalización Total", PERSONALIZATION, "rgba(96, 165, 250, 0.65)"),
    grid_card("Analytics", "Reportes y Analytics", ANALYTICS, "rgba(147, 197, 253, 0.65)"),
    grid_card(
        "Soporte 24/7",
        "Soporte 24/7",
        "Nuestro equipo de agentes está disponible en todo momento para brindar asistencia inmediata.",
        "rgba(30, 64, 175, 0.7)",
    ),
];

fn card_grid(cards: &[CardArgs]) -> Html {
    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 max-w-7xl p-8">
            { for cards.iter().map(|card| html! { <div key={card.title}>{ card.view() }</div> }) }
        </div>
    }
}

pub struct Story {
    pub group: &'static str,
    pub name: String,
    pub layout: Layout,
    view: Box<dyn Fn() -> Html>,
}

impl Story {
    fn new(group: &'static str, name: impl Into<String>, layout: Layout, view: impl Fn() -> Html + 'static) -> Self {
        Story { group, name: name.into(), layout, view: Box::new(view) }
    }

    pub fn title(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }

    pub fn render(&self) -> Html {
        (self.view)()
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn stories() -> Vec<Story> {
    let mut stories = Vec::new();

    for (i, (name, _)) in CARD_STORIES.iter().enumerate() {
        stories.push(Story::new("Components/FeatureCard", *name, Layout::Centered, move || {
            html! { <div class="w-[720px] max-w-full">{ CARD_STORIES[i].1.view() }</div> }
        }));
    }

    stories.push(Story::new("Components/FeatureCardGrid", "Two Per Row", Layout::Fullscreen, || {
        card_grid(&TWO_PER_ROW)
    }));
    stories.push(Story::new("Components/FeatureCardGrid", "Blue Monochromatic", Layout::Padded, || html! {
        <div class="flex items-center justify-center w-full h-full">
            <div class="scale-50">{ card_grid(&BLUE_MONOCHROMATIC) }</div>
        </div>
    }));

    for state in OrbState::ALL {
        stories.push(Story::new("Components/Orb", capitalized(state.label()), Layout::Centered, move || {
            html! { <Orb {state} /> }
        }));
    }
    stories.push(Story::new("Components/Orb", "Small", Layout::Centered, || {
        html! { <Orb state={OrbState::Listening} size={SMALL_ORB} /> }
    }));
    stories.push(Story::new("Components/Orb", "Large", Layout::Centered, || {
        html! { <Orb state={OrbState::Speaking} size={LARGE_ORB} /> }
    }));
    stories.push(Story::new("Components/Orb", "Interactive", Layout::Centered, || {
        html! { <OrbPlayground /> }
    }));

    for animation in RobotAnimation::ROTATION.into_iter().chain([RobotAnimation::Cycle]) {
        let name = capitalized(animation.class().unwrap_or("cycle"));
        stories.push(Story::new("Components/Robot", name, Layout::Centered, move || {
            html! { <Robot {animation} /> }
        }));
    }

    stories
}

#[function_component(OrbPlayground)]
fn orb_playground() -> Html {
    let state = use_state(OrbState::default);
    let size = use_state(|| crate::components::orb::DEFAULT_ORB_SIZE);

    let state_buttons = OrbState::ALL.into_iter().map(|option| {
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.set(option))
        };
        let selected = *state == option;
        html! {
            <button
                key={option.label()}
                class={classes!(
                    "px-3", "py-1", "rounded", "text-sm",
                    if selected { "bg-blue-500 text-white" } else { "bg-white/10 text-gray-300" }
                )}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    let size_buttons = [SMALL_ORB, crate::components::orb::DEFAULT_ORB_SIZE, LARGE_ORB]
        .into_iter()
        .map(|px| {
            let onclick = {
                let size = size.clone();
                Callback::from(move |_: MouseEvent| size.set(px))
            };
            html! {
                <button key={px.to_string()} class="px-3 py-1 rounded text-sm bg-white/10 text-gray-300" {onclick}>
                    { format!("{}px", px) }
                </button>
            }
        });

    let on_orb_click = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.next()))
    };

    html! {
        <div class="flex flex-col items-center gap-8">
            <Orb state={*state} size={*size} onclick={on_orb_click} />
            <div class="flex gap-2">{ for state_buttons }</div>
            <div class="flex gap-2">{ for size_buttons }</div>
        </div>
    }
}

#[function_component(Catalog)]
pub fn catalog() -> Html {
    let stories = use_memo(|_| stories(), ());
    let selected = use_state(|| 0usize);

    let Some(story) = stories.get(*selected) else {
        return html! {};
    };

    let nav = stories.iter().enumerate().map(|(i, story)| {
        let onclick = {
            let selected = selected.clone();
            let title = story.title();
            Callback::from(move |_: MouseEvent| {
                debug!("catalog: showing {}", title);
                selected.set(i);
            })
        };
        html! {
            <li key={story.title()}>
                <button
                    class={classes!(
                        "text-left", "w-full", "px-3", "py-1", "rounded", "text-sm",
                        if i == *selected { "bg-white/10 text-white" } else { "text-gray-400 hover:text-white" }
                    )}
                    {onclick}
                >
                    { story.title() }
                </button>
            </li>
        }
    });

    html! {
        <div class="bg-black min-h-screen flex">
            <aside class="w-72 shrink-0 border-r border-white/10 p-4 overflow-y-auto max-h-screen">
                <ul class="flex flex-col gap-1">{ for nav }</ul>
            </aside>
            <main class="flex-1 overflow-auto">
                <div class={story.layout.classes()} key={story.title()}>
                    { story.render() }
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_story_titles_are_unique() {
        let all = stories();
        let titles: HashSet<String> = all.iter().map(Story::title).collect();
        assert_eq!(titles.len(), all.len());
    }

    #[test]
    fn test_story_counts() {
        let all = stories();
        let count = |group: &str| all.iter().filter(|s| s.group == group).count();
        assert_eq!(count("Components/FeatureCard"), 7);
        assert_eq!(count("Components/FeatureCardGrid"), 2);
        assert_eq!(count("Components/Orb"), OrbState::ALL.len() + 3);
        assert_eq!(count("Components/Robot"), 7);
    }

    #[test]
    fn test_only_long_content_uses_default_accent() {
        let without: Vec<&str> = CARD_STORIES
            .iter()
            .filter(|(_, args)| args.accent_color.is_none())
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(without, vec!["Long Content"]);
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized("listening"), "Listening");
        assert_eq!(capitalized(""), "");
    }
}
