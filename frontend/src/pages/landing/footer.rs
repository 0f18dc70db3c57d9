use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::robot::Robot;
use crate::config;
use crate::Route;

const FOOTER_LINK: &str = "text-sm text-gray-400 hover:text-white transition-colors duration-200";

fn copyright(year: i32) -> String {
    format!("© {} {}. Todos los derechos reservados.", year, config::COMPANY)
}

// Legal pages open in a new tab, which `Link` can't do, so these are plain anchors.
fn legal_link(route: Route, label: &'static str) -> Html {
    html! {
        <a href={route.to_path()} target="_blank" rel="noopener noreferrer" class={FOOTER_LINK}>
            { label }
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let site_host = config::PUBLIC_SITE_URL.trim_start_matches("https://");

    html! {
        <footer class="bg-black/80 backdrop-blur-lg border-t border-white/10 mt-20">
            <div class="max-w-[1400px] mx-auto px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-8">
                    <div class="flex flex-col gap-4">
                        <div class="flex items-center gap-3">
                            <div class="w-12 h-12 flex items-center justify-center scale-[0.2] origin-center mt-[-10px]">
                                <Robot />
                            </div>
                            <span class="text-2xl font-bold text-white tracking-tight">{ config::BRAND }</span>
                        </div>
                        <p class="text-gray-400 text-sm leading-relaxed">
                            {"Atención al cliente con inteligencia artificial para proveedores de internet."}
                        </p>
                    </div>

                    <div>
                        <h3 class="text-white font-semibold mb-4">{"Empresa"}</h3>
                        <nav class="flex flex-col gap-3">
                            <a href="#pricing" class={classes!(FOOTER_LINK, "cursor-pointer")}>{"Probar"}</a>
                            <a href="#press-kit" class={classes!(FOOTER_LINK, "cursor-pointer")}>{"Contactanos"}</a>
                            <a href="#support" class={classes!(FOOTER_LINK, "cursor-pointer")}>{"Precios"}</a>
                        </nav>
                    </div>

                    <div>
                        <h3 class="text-white font-semibold mb-4">{"Legal"}</h3>
                        <nav class="flex flex-col gap-3">
                            { legal_link(Route::Privacy, "Política de Privacidad") }
                            { legal_link(Route::Terms, "Términos de Servicio") }
                            { legal_link(Route::DataDeletion, "Eliminación de Datos") }
                        </nav>
                    </div>
                </div>

                <div class="pt-8 border-t border-white/10 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-gray-500 text-sm">{ copyright(year) }</p>
                    <div class="flex items-center gap-6">
                        <a href={format!("mailto:{}", config::PRIVACY_EMAIL)} class={FOOTER_LINK}>
                            { config::PRIVACY_EMAIL }
                        </a>
                        <a href={config::PUBLIC_SITE_URL} target="_blank" rel="noopener noreferrer" class={FOOTER_LINK}>
                            { site_host }
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2025), "© 2025 Macch AI. Todos los derechos reservados.");
    }
}
