use avalon_core::{GameSummary, Team, TournamentInfo, group_tournaments};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::loading::Loading;
use crate::i18n;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub manifest: Rc<Vec<TournamentInfo>>,
    pub games: Rc<Vec<GameSummary>>,
    pub selected_tournament: Option<usize>,
    pub selected_game: Option<usize>,
    pub manifest_loading: bool,
    pub index_loading: bool,
    pub collapsed: bool,
    pub on_select_tournament: Callback<usize>,
    pub on_select_game: Callback<usize>,
    pub on_back: Callback<()>,
    pub on_toggle: Callback<()>,
}

/// Sidebar listing tournaments, or the games of the selected one.
#[function_component(GameSelector)]
pub fn game_selector(props: &Props) -> Html {
    let toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    if props.collapsed {
        return html! {
            <aside class="selector selector--collapsed">
                <button type="button" class="selector__toggle" title={i18n::t("selector.expand")} onclick={toggle}>
                    { "›" }
                </button>
            </aside>
        };
    }

    let collapse_button = html! {
        <button type="button" class="selector__toggle" title={i18n::t("selector.collapse")} onclick={toggle}>
            { "‹" }
        </button>
    };

    match props
        .selected_tournament
        .and_then(|idx| props.manifest.get(idx))
    {
        Some(info) => render_games(props, info, collapse_button),
        None => render_tournaments(props, collapse_button),
    }
}

fn render_tournaments(props: &Props, collapse_button: Html) -> Html {
    let body = if props.manifest_loading {
        html! { <Loading /> }
    } else {
        group_tournaments(&props.manifest)
            .into_iter()
            .map(|(group, members)| {
                html! {
                    <section class="tournament-group" key={group.title()}>
                        <h3 class="tournament-group__title">{ group.title() }</h3>
                        { for members.into_iter().map(|(idx, info)| {
                            let onclick = props.on_select_tournament.reform(move |_: MouseEvent| idx);
                            html! {
                                <button type="button" class="tournament-button" key={info.path.clone()} {onclick}>
                                    { info.short_label() }
                                </button>
                            }
                        }) }
                    </section>
                }
            })
            .collect::<Html>()
    };

    html! {
        <aside class="selector">
            <div class="selector__header">
                <h2>{ i18n::t("selector.tournaments") }</h2>
                { collapse_button }
            </div>
            <div class="selector__body">{ body }</div>
        </aside>
    }
}

fn render_games(props: &Props, info: &TournamentInfo, collapse_button: Html) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let body = if props.index_loading {
        html! { <Loading /> }
    } else {
        html! {
            <div class="game-grid">
                { for props.games.iter().enumerate().map(|(idx, game)| game_button(props, idx, game)) }
            </div>
        }
    };

    html! {
        <aside class="selector">
            <div class="selector__header">
                <button type="button" class="selector__back" onclick={back}>
                    { "‹ " }{ i18n::t("selector.back") }
                </button>
                { collapse_button }
            </div>
            <div class="selector__stats">{ info.stats_label() }</div>
            <div class="selector__body">
                <h3 class="tournament-group__title">{ i18n::t("selector.select_game") }</h3>
                { body }
            </div>
        </aside>
    }
}

fn game_button(props: &Props, idx: usize, game: &GameSummary) -> Html {
    let number = (idx + 1).to_string();
    let mut vars = BTreeMap::new();
    vars.insert("number", number.as_str());
    let title = match game.winner {
        Some(winner) => {
            vars.insert("winner", winner.key());
            i18n::tr("selector.game_title", Some(&vars))
        }
        None => i18n::tr("selector.game_title_undecided", Some(&vars)),
    };
    let winner_class = game.winner.map_or("undecided", Team::key);
    let selected = props.selected_game == Some(idx);
    let onclick = props.on_select_game.reform(move |_: MouseEvent| idx);

    html! {
        <button
            type="button"
            key={game.id.clone()}
            class={classes!(
                "game-button",
                format!("winner-{winner_class}"),
                selected.then_some("is-selected")
            )}
            aria-pressed={selected.to_string()}
            {title}
            {onclick}
        >
            { number }
        </button>
    }
}
