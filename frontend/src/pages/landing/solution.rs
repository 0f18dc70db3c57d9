use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::reveal::component::Reveal;

/// Delay between consecutive cards entering the view together.
const STAGGER_MS: u32 = 150;

struct Feature {
    image: &'static str,
    image_alt: &'static str,
    title: &'static str,
    description: &'static str,
    accent_color: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        image: "/paralellism.png",
        image_alt: "Agentes 24/7",
        title: "Agentes IA en Paralelo 24/7",
        description: "Olvidate del horario laboral. Agentes con voz hiperrealista contestarán tus mensajes y llamadas durante todo el día todos los días. Sí, los feriados también.",
        accent_color: "rgba(59, 130, 246, 0.65)",
    },
    Feature {
        image: "/elasticity.png",
        image_alt: "Elasticidad en Picos",
        title: "Elasticidad en Picos",
        description: "¿No alcanzan las manos para contestar en un corte general? Nuestros agentes se prenden y se apagan según la cantidad de mensajes y llamadas del momento, para que no pagués ni de más ni de menos por la atención al cliente.",
        accent_color: "rgba(34, 197, 94, 0.65)",
    },
    Feature {
        image: "/training.png",
        image_alt: "Entrenamiento Rápido",
        title: "Entrenamiento en Horas",
        description: "Nos das la información y los flujos de tu empresa una vez, y se terminó. No hay tiempo de adaptación. Retenemos el 100% de la información que resuelve los problemas de tus clientes.",
        accent_color: "rgba(168, 85, 247, 0.65)",
    },
    Feature {
        image: "/sentiment_analysis.png",
        image_alt: "Análisis de Sentimiento",
        title: "Análisis de Sentimiento",
        description: "Interpretamos las emociones de tus clientes durante toda la llamada con el agente y las incorporamos en un resumen a tu sistema de gestión. Así sabés a quién hay que retener antes de perderlo.",
        accent_color: "rgba(249, 115, 22, 0.65)",
    },
];

fn stagger(index: usize) -> u32 {
    u32::try_from(index).map_or(0, |i| i * STAGGER_MS)
}

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section class="flex flex-col items-center px-8 py-20 gap-12">
            <Reveal class="flex flex-col items-center gap-6 max-w-3xl">
                <h2 class="text-white text-5xl font-bold text-center">
                    {"Por eso creamos a Macch."}
                </h2>
            </Reveal>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 max-w-7xl w-full">
                { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                    <Reveal key={feature.title} delay_ms={stagger(i)}>
                        <FeatureCard
                            image={feature.image}
                            image_alt={feature.image_alt}
                            title={feature.title}
                            description={feature.description}
                            accent_color={feature.accent_color}
                        />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
