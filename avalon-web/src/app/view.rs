use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::pages::{home::HomePage, not_found::NotFound, players::CharacterGuide};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    match route {
        Some(Route::Home) => html! {
            <HomePage
                manifest={(*state.manifest).clone()}
                games={(*state.games).clone()}
                record={(*state.record).clone()}
                cursor={*state.cursor}
                manifest_loading={*state.manifest_loading}
                index_loading={*state.index_loading}
                record_loading={*state.record_loading}
                sidebar_collapsed={*state.sidebar_collapsed}
                on_select_tournament={handlers.select_tournament.clone()}
                on_back={handlers.back.clone()}
                on_select_game={handlers.select_game.clone()}
                on_navigate={handlers.navigate.clone()}
                on_toggle_sidebar={handlers.toggle_sidebar.clone()}
                on_open_guide={handlers.open_guide.clone()}
            />
        },
        Some(Route::Players) => html! {
            <CharacterGuide on_back={handlers.go_home.clone()} />
        },
        Some(Route::NotFound) | None => html! {
            <NotFound on_go_home={handlers.go_home.clone()} />
        },
    }
}
