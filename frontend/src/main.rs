use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod animation {
    pub mod frame_loop;
    pub mod hooks;
    pub mod orb_state;
}
mod reveal {
    pub mod component;
    pub mod hooks;
    pub mod visibility;
}
mod components {
    pub mod feature_card;
    pub mod orb;
    pub mod robot;
}
mod pages {
    pub mod data_deletion;
    pub mod landing;
    pub mod legal;
    pub mod privacy;
    pub mod terms;
}
#[cfg(feature = "catalog")]
mod catalog;

use pages::{
    data_deletion::DataDeletion,
    landing::Landing,
    privacy::PrivacyPolicy,
    terms::TermsOfService,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/privacidad")]
    Privacy,
    #[at("/terminos")]
    Terms,
    #[at("/eliminacion-datos")]
    DataDeletion,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::DataDeletion => {
            info!("Rendering Data Deletion page");
            html! { <DataDeletion /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
        },
    }
}

#[cfg_attr(feature = "catalog", allow(dead_code))]
#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site for {}", config::BRAND, config::get_site_url());

    #[cfg(feature = "catalog")]
    yew::Renderer::<catalog::Catalog>::new().render();

    #[cfg(not(feature = "catalog"))]
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_recognize_their_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Landing));
        assert_eq!(Route::recognize("/privacidad"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/terminos"), Some(Route::Terms));
        assert_eq!(Route::recognize("/eliminacion-datos"), Some(Route::DataDeletion));
    }

    #[test]
    fn test_unknown_paths_fall_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/privacidad/extra"), Some(Route::NotFound));
    }

    #[test]
    fn test_legal_paths() {
        assert_eq!(Route::Privacy.to_path(), "/privacidad");
        assert_eq!(Route::Terms.to_path(), "/terminos");
        assert_eq!(Route::DataDeletion.to_path(), "/eliminacion-datos");
    }
}
