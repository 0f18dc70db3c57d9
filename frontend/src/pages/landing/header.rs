use yew::prelude::*;

use crate::components::robot::Robot;
use crate::config;

const NAV_LINK: &str = "text-[0.95rem] font-medium text-gray-400 hover:text-white transition-colors duration-200 cursor-pointer";

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-lg border-b border-white/10">
            <div class="max-w-[1400px] mx-auto px-8 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 flex items-center justify-center scale-[0.2] origin-center mt-[-10px]">
                        <Robot />
                    </div>
                    <span class="text-2xl font-bold text-white tracking-tight">{ config::BRAND }</span>
                </div>

                <nav class="hidden md:flex items-center gap-8">
                    <a href="#pricing" class={NAV_LINK}>{"Pricing"}</a>
                    <a href="#press-kit" class={NAV_LINK}>{"Press Kit"}</a>
                    <a href="#support" class={NAV_LINK}>{"Support"}</a>
                </nav>

                <div class="flex items-center">
                    <button class="bg-white text-black text-[0.95rem] font-semibold px-6 py-2.5 rounded-full hover:bg-gray-200 hover:-translate-y-0.5 hover:shadow-[0_4px_12px_rgba(255,255,255,0.2)] active:translate-y-0 transition-all duration-200">
                        {"Agendá una Demo"}
                    </button>
                </div>
            </div>
        </header>
    }
}
