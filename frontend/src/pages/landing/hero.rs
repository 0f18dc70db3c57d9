use log::debug;
use yew::prelude::*;

use crate::animation::orb_state::OrbState;
use crate::components::orb::Orb;

/// Reads the `orb` parameter from a query string such as `?orb=listening`.
/// A missing or unknown label gives `Idle`.
fn orb_from_query(search: &str) -> OrbState {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("orb="))
        .map(OrbState::from_label)
        .unwrap_or_default()
}

fn initial_orb_state() -> OrbState {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let state = orb_from_query(&search);
    if state.is_active() {
        debug!("hero orb starts {} from query", state);
    }
    state
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let orb_state = use_state(initial_orb_state);

    let on_orb_click = {
        let orb_state = orb_state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = orb_state.next();
            debug!("hero orb: {} -> {}", *orb_state, next);
            orb_state.set(next);
        })
    };

    html! {
        <section class="flex flex-col items-center justify-center gap-16 min-h-screen pt-20">
            <h1 class="text-white text-6xl font-bold text-center px-8 animate-fade-in">
                {"Atención al Cliente con "}
                <span class="text-blue-500">{"Inteligencia Artificial"}</span>
                {" para ISPs."}
            </h1>
            <div class="animate-fade-in">
                <Orb state={*orb_state} onclick={on_orb_click} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_query_picks_the_labelled_state() {
        assert_eq!(orb_from_query("?orb=listening"), OrbState::Listening);
        assert_eq!(orb_from_query("?lang=es&orb=speaking"), OrbState::Speaking);
    }

    #[test]
    fn test_orb_query_defaults_to_idle() {
        assert_eq!(orb_from_query(""), OrbState::Idle);
        assert_eq!(orb_from_query("?orb=shouting"), OrbState::Idle);
        assert_eq!(orb_from_query("?theme=dark"), OrbState::Idle);
    }
}
