use yew::prelude::*;

use crate::reveal::hooks::use_scroll_reveal;
use crate::reveal::visibility::RevealOptions;

/// Direction a section slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Right,
}

const TRANSITION: &str = "transition-all duration-[1.5s] ease-out";

/// Classes for the hidden and revealed ends of the transition.
pub fn reveal_classes(visible: bool, from: RevealFrom) -> &'static str {
    match (from, visible) {
        (RevealFrom::Below, true) => "opacity-100 translate-y-0",
        (RevealFrom::Below, false) => "opacity-0 translate-y-5",
        (RevealFrom::Right, true) => "opacity-100 translate-x-0",
        (RevealFrom::Right, false) => "opacity-0 translate-x-10",
    }
}

fn delay_style(delay_ms: u32) -> Option<String> {
    (delay_ms > 0).then(|| format!("transition-delay: {}ms;", delay_ms))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub from: RevealFrom,
    /// Staggers siblings that come into view together.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub options: RevealOptions,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_scroll_reveal(props.options);

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), TRANSITION, reveal_classes(visible, props.from))}
            style={delay_style(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::visibility::{intersects, Bounds, VisibilityLatch};

    #[test]
    fn test_hidden_and_revealed_classes() {
        assert_eq!(reveal_classes(false, RevealFrom::Below), "opacity-0 translate-y-5");
        assert_eq!(reveal_classes(true, RevealFrom::Below), "opacity-100 translate-y-0");
        assert_eq!(reveal_classes(false, RevealFrom::Right), "opacity-0 translate-x-10");
        assert_eq!(reveal_classes(true, RevealFrom::Right), "opacity-100 translate-x-0");
    }

    #[test]
    fn test_delay_style() {
        assert_eq!(delay_style(0), None);
        assert_eq!(delay_style(150).as_deref(), Some("transition-delay: 150ms;"));
    }

    #[test]
    fn test_section_below_the_fold_reveals_and_stays() {
        let options = RevealOptions::default();
        let viewport = Bounds::new(0.0, 0.0, 1280.0, 800.0);
        let mut latch = VisibilityLatch::new(options.once);
        let section_at = |scroll_y: f64| Bounds::new(2000.0 - scroll_y, 0.0, 900.0, 500.0);

        latch.observe(intersects(section_at(0.0), viewport, &options));
        assert_eq!(reveal_classes(latch.is_visible(), RevealFrom::Below), "opacity-0 translate-y-5");

        latch.observe(intersects(section_at(1500.0), viewport, &options));
        assert_eq!(reveal_classes(latch.is_visible(), RevealFrom::Below), "opacity-100 translate-y-0");

        latch.observe(intersects(section_at(0.0), viewport, &options));
        assert_eq!(reveal_classes(latch.is_visible(), RevealFrom::Below), "opacity-100 translate-y-0");
    }
}
