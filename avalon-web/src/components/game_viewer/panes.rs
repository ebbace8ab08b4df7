use avalon_core::{
    AssassinPhase, GameRecord, Message, Mission, PhaseView, Proposal, Team, VoteDisplay,
};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::components::player_card::PlayerCard;
use crate::i18n;

pub(super) fn render_pane(
    record: &GameRecord,
    view: PhaseView<'_>,
    on_select_proposal: &Callback<usize>,
) -> Html {
    match view {
        PhaseView::Overview => placeholder("viewer.overview"),
        PhaseView::Discussion { messages, .. } if messages.is_empty() => {
            placeholder("viewer.no_discussion")
        }
        PhaseView::Discussion { messages, .. } => html! {
            <div class="transcript">
                { for messages.iter().map(|msg| message_card(record, msg)) }
            </div>
        },
        PhaseView::Proposal {
            mission,
            proposal,
            selected,
        } => html! {
            <div class="proposal-pane">
                { proposal_picker(mission, selected, on_select_proposal) }
                { proposal_card(record, proposal) }
            </div>
        },
        PhaseView::Voting {
            mission,
            selected,
            votes,
            ..
        } => html! {
            <div class="voting-pane">
                { proposal_picker(mission, selected, on_select_proposal) }
                { vote_list(record, votes) }
            </div>
        },
        PhaseView::Execution { mission } => execution(record, mission),
        PhaseView::Assassin(phase) => assassin(record, phase),
        PhaseView::Unavailable => placeholder("viewer.unavailable"),
    }
}

fn placeholder(key: &str) -> Html {
    html! { <p class="pane-placeholder">{ i18n::t(key) }</p> }
}

fn team_of(record: &GameRecord, name: &str) -> Option<Team> {
    record.role_of(name).map(|role| role.team())
}

fn speaker(record: &GameRecord, name: &str) -> Html {
    html! {
        <div class="speaker">
            <span class="speaker__name">{ name.to_string() }</span>
            if let Some(role) = record.role_of(name) {
                <span class="speaker__role">{ role.display_name() }</span>
            }
        </div>
    }
}

fn message_card(record: &GameRecord, msg: &Message) -> Html {
    let team = team_of(record, &msg.player).map(|team| format!("team-{}", team.key()));
    html! {
        <article class={classes!("message", team)}>
            { speaker(record, &msg.player) }
            <p class="message__content">{ &msg.content }</p>
        </article>
    }
}

fn proposal_picker(mission: &Mission, selected: usize, on_select: &Callback<usize>) -> Html {
    html! {
        <div class="proposal-picker">
            { for (0..mission.proposals.len()).map(|idx| {
                let active = idx == selected;
                let onclick = on_select.reform(move |_: MouseEvent| idx);
                html! {
                    <button
                        type="button"
                        key={idx}
                        aria-pressed={active.to_string()}
                        class={classes!("proposal-chip", active.then_some("is-active"))}
                        {onclick}
                    >
                        { (idx + 1).to_string() }
                    </button>
                }
            }) }
        </div>
    }
}

fn proposal_card(record: &GameRecord, proposal: &Proposal) -> Html {
    let result = proposal.vote_result.key();
    html! {
        <div class="proposal-card">
            <div class="proposal-card__leader">
                { i18n::t("viewer.leader") }{ ": " }
                <strong>{ &proposal.leader }</strong>
            </div>
            <div class="proposal-card__team">
                <span class="proposal-card__label">{ i18n::t("viewer.team") }</span>
                { for proposal
                    .team_members
                    .iter()
                    .filter_map(|name| record.player(name))
                    .map(|player| html! {
                        <PlayerCard key={player.name.clone()} player={player.clone()} />
                    }) }
            </div>
            <p class="proposal-card__reasoning">{ &proposal.reasoning }</p>
            <span class={classes!("result-badge", format!("result-{result}"))}>
                { i18n::t(&format!("results.{result}")) }
            </span>
        </div>
    }
}

fn vote_list(record: &GameRecord, votes: VoteDisplay<'_>) -> Html {
    match votes {
        VoteDisplay::AutoApproved => html! {
            <p class="auto-approved">{ i18n::t("viewer.auto_approved") }</p>
        },
        VoteDisplay::Cast(votes) => html! {
            <div class="vote-list">
                { for votes.iter().map(|vote| {
                    let choice = vote.vote.key();
                    html! {
                        <article class={classes!("vote-row", format!("vote-{choice}"))}>
                            { speaker(record, &vote.player) }
                            <span class="vote-row__choice">{ i18n::t(&format!("results.{choice}")) }</span>
                            <p class="vote-row__comment">{ &vote.comment }</p>
                        </article>
                    }
                }) }
            </div>
        },
    }
}

fn execution(record: &GameRecord, mission: &Mission) -> Html {
    let Some(result) = mission.mission_result else {
        return placeholder("viewer.not_played");
    };
    let fail_cards = mission.fail_count.map(|count| {
        let count = count.to_string();
        let mut vars = BTreeMap::new();
        vars.insert("count", count.as_str());
        html! { <div class="mission-result__fails">{ i18n::tr("viewer.fail_cards", Some(&vars)) }</div> }
    });

    html! {
        <div class="execution-pane">
            <div class={classes!("mission-result", format!("mission-{}", result.key()))}>
                <div class="mission-result__label">
                    { i18n::t(&format!("results.{}", result.key())).to_uppercase() }
                </div>
                { fail_cards }
            </div>
            if let Some(actions) = mission.quest_actions.as_ref() {
                <div class="quest-actions">
                    { for actions.iter().map(|action| {
                        let card = action.action.key();
                        html! {
                            <div class={classes!("quest-action", format!("quest-{card}"))}>
                                { speaker(record, &action.player) }
                                <span class="quest-action__card">{ i18n::t(&format!("results.{card}")) }</span>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

fn assassin(record: &GameRecord, phase: &AssassinPhase) -> Html {
    let verdict = if phase.correct { "correct" } else { "wrong" };
    html! {
        <div class="assassin-pane">
            <h3 class="pane-heading">{ i18n::t("viewer.evil_discussion") }</h3>
            <div class="transcript">
                { for phase.evil_discussion.iter().map(|msg| message_card(record, msg)) }
            </div>
            <div class="assassin-guess">
                <h3 class="pane-heading">{ i18n::t("viewer.assassin_guess") }</h3>
                <p>
                    <span class="assassin-guess__label">{ i18n::t("viewer.assassin") }{ ": " }</span>
                    <strong>{ &phase.assassin }</strong>
                </p>
                <p>
                    <span class="assassin-guess__label">{ i18n::t("viewer.target") }{ ": " }</span>
                    <strong>{ &phase.guess }</strong>
                </p>
                <p class="assassin-guess__reasoning">{ &phase.reasoning }</p>
                <span class={classes!("verdict", format!("verdict-{verdict}"))}>
                    { i18n::t(&format!("viewer.verdict.{verdict}")) }
                </span>
            </div>
        </div>
    }
}
