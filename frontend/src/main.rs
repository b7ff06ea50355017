use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod dom;
mod analytics;
mod capabilities;
mod navigation;
mod lead_form;
mod animations;
mod components {
    pub mod site_header;
    pub mod lead_form;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use capabilities::Capabilities;
use components::{footer::Footer, site_header::SiteHeader};
use pages::{home::Landing, privacy::PrivacyPolicy};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Optional page libraries are looked up once; the gtag queue is installed here
    let caps = use_state(Capabilities::detect);

    html! {
        <ContextProvider<Capabilities> context={(*caps).clone()}>
            <BrowserRouter>
                <SiteHeader />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Capabilities>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
