use avalon_core::{GameCursor, GameRecord, GameSummary, TournamentInfo, ViewerCursor};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::game_selector::GameSelector;
use crate::components::game_viewer::GameViewer;
use crate::components::loading::Loading;
use crate::i18n;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub manifest: Rc<Vec<TournamentInfo>>,
    pub games: Rc<Vec<GameSummary>>,
    pub record: Option<Rc<GameRecord>>,
    pub cursor: ViewerCursor,
    pub manifest_loading: bool,
    pub index_loading: bool,
    pub record_loading: bool,
    pub sidebar_collapsed: bool,
    pub on_select_tournament: Callback<usize>,
    pub on_back: Callback<()>,
    pub on_select_game: Callback<usize>,
    pub on_navigate: Callback<GameCursor>,
    pub on_toggle_sidebar: Callback<()>,
    pub on_open_guide: Callback<()>,
}

/// Selector sidebar plus the viewer panel.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let panel = if props.record_loading {
        html! { <Loading /> }
    } else if let Some(record) = props.record.as_ref() {
        html! {
            <GameViewer
                key={record.game_id.clone()}
                record={Rc::clone(record)}
                cursor={props.cursor.game_view}
                on_navigate={props.on_navigate.clone()}
            />
        }
    } else {
        let open_guide = {
            let cb = props.on_open_guide.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        html! {
            <div class="welcome">
                <div class="welcome__icon" aria-hidden="true">{ "🏰" }</div>
                <h1>{ i18n::t("app.title") }</h1>
                <p>{ i18n::t("app.welcome") }</p>
                <button type="button" class="welcome__guide" onclick={open_guide}>
                    { i18n::t("app.guide_link") }
                </button>
            </div>
        }
    };

    html! {
        <div class="viewer-layout">
            <GameSelector
                manifest={Rc::clone(&props.manifest)}
                games={Rc::clone(&props.games)}
                selected_tournament={props.cursor.tournament}
                selected_game={props.cursor.game}
                manifest_loading={props.manifest_loading}
                index_loading={props.index_loading}
                collapsed={props.sidebar_collapsed}
                on_select_tournament={props.on_select_tournament.clone()}
                on_select_game={props.on_select_game.clone()}
                on_back={props.on_back.clone()}
                on_toggle={props.on_toggle_sidebar.clone()}
            />
            <main id="main" class="viewer-panel">{ panel }</main>
        </div>
    }
}
