//! Application shell: shared state, first-load bootstrap, event handlers and
//! the route switch. Everything that touches the browser is compiled for wasm
//! only; the pieces below it stay testable natively.
pub mod bootstrap;
pub mod handlers;
pub mod loader;
pub mod routing;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;

#[cfg(target_arch = "wasm32")]
mod shell {
    use yew::prelude::*;
    use yew_router::prelude::*;

    use super::{bootstrap, state, view};
    use crate::router::Route;

    /// Root component, mounted under the deployment base path.
    #[function_component(App)]
    pub fn app() -> Html {
        let basename = crate::paths::router_base().map(AttrValue::from);
        html! {
            <BrowserRouter {basename}>
                <Viewer />
            </BrowserRouter>
        }
    }

    #[function_component(Viewer)]
    fn viewer() -> Html {
        let app_state = state::use_app_state();
        bootstrap::use_bootstrap(&app_state);
        let route = use_route::<Route>();
        view::render_app(&app_state, route.as_ref(), use_navigator())
    }
}

#[cfg(target_arch = "wasm32")]
pub use shell::App;
