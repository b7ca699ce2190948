use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod card_link;
mod clipboard;
mod config;
mod components {
    pub mod copy_link;
}
mod pages {
    pub mod card;
    pub mod composer;
}

use pages::{
    card::BirthdayCard,
    composer::Composer,
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Composer,
    #[at("/:name/:from")]
    Card { name: String, from: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Composer => {
            info!("Rendering Composer page");
            html! { <Composer /> }
        },
        Route::Card { name, from } => {
            info!("Rendering Card page");
            html! { <BirthdayCard {name} {from} /> }
        },
        Route::NotFound => {
            warn!("No card at this path, redirecting to composer");
            html! { <HomeRedirect /> }
        },
    }
}

/// Sends the browser back to the composer without leaving the bad URL in
/// history.
#[function_component(HomeRedirect)]
fn home_redirect() -> Html {
    let navigator = use_navigator();
    use_effect_with_deps(move |_| {
        if let Some(navigator) = navigator {
            navigator.replace(&Route::Composer);
        }
        || ()
    }, ());
    html! {}
}


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
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting birthday card app");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_link::CardNames;

    fn card_names_at(path: &str) -> Option<CardNames> {
        match Route::recognize(path) {
            Some(Route::Card { name, from }) => CardNames::from_segments(&name, &from),
            _ => None,
        }
    }

    #[test]
    fn root_is_the_composer() {
        assert_eq!(Route::recognize("/"), Some(Route::Composer));
    }

    #[test]
    fn two_segments_open_a_card() {
        assert_eq!(
            Route::recognize("/Alice/Bob"),
            Some(Route::Card { name: "Alice".to_string(), from: "Bob".to_string() })
        );
        assert_eq!(
            card_names_at("/Mary%20Jane/Bob"),
            Some(CardNames { name: "Mary Jane".to_string(), from: "Bob".to_string() })
        );
    }

    #[test]
    fn incomplete_card_paths_do_not_render_a_card() {
        for path in ["/Alice", "/Alice/", "/Alice/Bob/extra"] {
            assert_eq!(card_names_at(path), None, "{path}");
        }
        assert_eq!(Route::recognize("/Alice"), Some(Route::NotFound));
    }
}
