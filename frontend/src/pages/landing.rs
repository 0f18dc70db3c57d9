use yew::prelude::*;

mod footer;
mod header;
mod hero;
mod problem;
mod solution;

use footer::Footer;
use header::Header;
use hero::Hero;
use problem::Problem;
use solution::Solution;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="bg-black min-h-screen">
            <Header />
            <Hero />
            <Problem />
            <Solution />
            <Footer />
        </div>
    }
}
