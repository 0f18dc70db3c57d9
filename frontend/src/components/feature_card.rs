use yew::prelude::*;

pub const DEFAULT_ACCENT: &str = "rgba(59, 130, 246, 0.65)";

/// How much the far end of the card gradient fades the accent's alpha.
const GRADIENT_ALPHA_DROP: f64 = 0.15;

/// The accent with its alpha lowered for the end stop of the gradient.
/// Colors that are not `rgba(r, g, b, a)` are returned unchanged.
pub fn faded_accent(accent: &str) -> String {
    let parsed = accent
        .trim()
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|inner| {
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            match parts.as_slice() {
                [r, g, b, a] => a.parse::<f64>().ok().map(|a| (*r, *g, *b, a)),
                _ => None,
            }
        });

    match parsed {
        Some((r, g, b, alpha)) => {
            let faded = ((alpha - GRADIENT_ALPHA_DROP).max(0.0) * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", r, g, b, faded)
        }
        None => accent.to_string(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureCardProps {
    pub image: AttrValue,
    pub image_alt: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_ACCENT))]
    pub accent_color: AttrValue,
}

/// Glass card with an illustration on the left third and copy on the rest.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let background = format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%);",
        props.accent_color,
        faded_accent(&props.accent_color)
    );

    html! {
        <div class="relative rounded-xl overflow-hidden transition-all duration-300 hover:shadow-[0_8px_30px_rgba(255,255,255,0.12)] group backdrop-blur-md sm:h-48">
            <div class="absolute inset-0 opacity-100 transition-opacity" style={background} />
            <div class="absolute inset-0 bg-white/5 backdrop-blur-sm" />

            <div class="relative grid grid-cols-1 sm:grid-cols-3 gap-0 h-full">
                <div class="sm:col-span-1 h-48 sm:h-full relative hidden sm:block">
                    <div class="absolute inset-0 bg-gradient-to-r from-transparent to-black/20 z-10" />
                    <img
                        src={props.image.clone()}
                        alt={props.image_alt.clone()}
                        class="w-full h-full object-cover"
                    />
                </div>

                <div class="col-span-1 sm:col-span-2 p-6 flex flex-col justify-center gap-2 relative z-10">
                    <h3 class="text-white text-xl font-bold">
                        { props.title.clone() }
                    </h3>
                    <p class="text-gray-300 text-sm md:text-base leading-relaxed">
                        { props.description.clone() }
                    </p>
                </div>
            </div>

            <div class="absolute inset-0 rounded-xl border border-white/10 group-hover:border-white/20 transition-colors pointer-events-none z-20 shadow-[inset_0_1px_1px_rgba(255,255,255,0.1)]" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_accent_lowers_alpha() {
        assert_eq!(faded_accent("rgba(59, 130, 246, 0.65)"), "rgba(59, 130, 246, 0.5)");
        assert_eq!(faded_accent("rgba(59, 130, 246, 0.7)"), "rgba(59, 130, 246, 0.55)");
        assert_eq!(faded_accent("rgba(30,64,175,0.7)"), "rgba(30, 64, 175, 0.55)");
    }

    #[test]
    fn test_faded_accent_never_goes_negative() {
        assert_eq!(faded_accent("rgba(0, 0, 0, 0.1)"), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_other_colors_pass_through() {
        assert_eq!(faded_accent("#3b82f6"), "#3b82f6");
        assert_eq!(faded_accent("rgb(59, 130, 246)"), "rgb(59, 130, 246)");
        assert_eq!(faded_accent("rgba(59, 130, 246, half)"), "rgba(59, 130, 246, half)");
    }
}
