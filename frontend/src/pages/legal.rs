//! Building blocks shared by the privacy, terms and data deletion pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub const LINK: &str = "text-blue-500 hover:text-blue-400 transition-colors";
const PARAGRAPH: &str = "text-gray-400 leading-relaxed";
const LIST: &str = "text-gray-400 leading-relaxed space-y-2 list-disc list-inside mb-4";

pub fn section_heading(number: Option<u32>, title: &str) -> String {
    match number {
        Some(n) => format!("{}. {}", n, title),
        None => title.to_string(),
    }
}

/// Body paragraph.
pub fn para(text: &'static str) -> Html {
    html! { <p class={classes!(PARAGRAPH, "mb-4")}>{ text }</p> }
}

/// Short line that introduces a list.
pub fn lead(text: &'static str) -> Html {
    html! { <p class={classes!(PARAGRAPH, "mb-3")}>{ text }</p> }
}

pub fn bullets(items: &[&'static str]) -> Html {
    html! {
        <ul class={LIST}>
            { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
        </ul>
    }
}

/// Bullets that start with a bold label, e.g. "Acceso: ...".
pub fn labeled_bullets(items: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul class={LIST}>
            { for items.iter().map(|(label, text)| html! {
                <li>
                    <span class="text-white font-semibold">{ format!("{}:", label) }</span>
                    { format!(" {}", text) }
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    // These pages open in a fresh tab or from a scrolled landing page.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="bg-black min-h-screen px-6 md:px-12 lg:px-16 py-20">
            <div class="max-w-4xl mx-auto">
                <Link<Route>
                    to={Route::Landing}
                    classes="inline-flex items-center gap-2 text-gray-400 hover:text-white transition-colors duration-200 mb-8"
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                    </svg>
                    {"Volver al inicio"}
                </Link<Route>>

                <h1 class="text-white text-4xl md:text-5xl font-bold mb-2 border-b border-blue-500 pb-4">
                    { props.title.clone() }
                </h1>

                <p class="text-gray-500 italic mb-12 mt-4">
                    { format!("Última actualización: {}", config::LAST_UPDATED) }
                </p>

                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub number: Option<u32>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class="mb-12">
            <h2 class="text-white text-2xl md:text-3xl font-bold mb-4">
                { section_heading(props.number, &props.title) }
            </h2>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubSectionProps {
    /// Dotted number such as "2.1".
    pub number: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SubSection)]
pub fn sub_section(props: &SubSectionProps) -> Html {
    html! {
        <div class="mt-6">
            <h3 class="text-white text-xl font-semibold mb-3">
                { format!("{} {}", props.number, props.title) }
            </h3>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalloutTone {
    /// Yellow side bar, for warnings and time frames.
    #[default]
    Notice,
    /// Blue box, for alternative options.
    Choice,
}

pub fn callout_classes(tone: CalloutTone) -> &'static str {
    match tone {
        CalloutTone::Notice => "bg-yellow-500/10 border-l-4 border-yellow-500 p-6 rounded mb-4",
        CalloutTone::Choice => "bg-blue-500/10 border border-blue-500/30 rounded-lg p-6 mb-6",
    }
}

#[derive(Properties, PartialEq)]
pub struct CalloutProps {
    #[prop_or_default]
    pub tone: CalloutTone,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Callout)]
pub fn callout(props: &CalloutProps) -> Html {
    let title_class = match props.tone {
        CalloutTone::Notice => "text-yellow-200 font-semibold mb-3",
        CalloutTone::Choice => "text-white font-semibold mb-4",
    };

    html! {
        <div class={callout_classes(props.tone)}>
            if let Some(title) = props.title.clone() {
                <p class={title_class}>{ title }</p>
            }
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub intro: AttrValue,
    #[prop_or(AttrValue::Static(config::BRAND))]
    pub name: AttrValue,
    pub email: AttrValue,
    /// Extra lines under the address block.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    html! {
        <div class="bg-white/5 backdrop-blur-sm border border-white/10 rounded-lg p-6">
            <p class={classes!(PARAGRAPH, "mb-4")}>{ props.intro.clone() }</p>
            <p class={classes!(PARAGRAPH, "mb-4")}>
                <span class="text-white font-semibold">{ props.name.clone() }</span>
                <br />
                {"Email: "}
                <a href={format!("mailto:{}", props.email)} class={LINK}>{ props.email.clone() }</a>
                <br />
                {"Sitio web: "}
                <a href={config::PUBLIC_SITE_URL} class={LINK}>{ config::PUBLIC_SITE_URL }</a>
            </p>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_and_plain_headings() {
        assert_eq!(section_heading(Some(1), "Introducción"), "1. Introducción");
        assert_eq!(section_heading(None, "Contacto"), "Contacto");
    }

    #[test]
    fn test_callout_tones() {
        assert!(callout_classes(CalloutTone::Notice).contains("border-yellow-500"));
        assert!(callout_classes(CalloutTone::Choice).contains("border-blue-500/30"));
        assert_eq!(CalloutTone::default(), CalloutTone::Notice);
    }
}
