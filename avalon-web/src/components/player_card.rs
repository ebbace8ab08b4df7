use avalon_core::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub player: Player,
}

/// Name and role chip, coloured by team.
#[function_component(PlayerCard)]
pub fn player_card(props: &Props) -> Html {
    let team = props.player.role.team();
    html! {
        <div class={classes!("player-card", format!("team-{}", team.key()))}>
            <span class="player-card__name">{ &props.player.name }</span>
            <span class="player-card__role">{ props.player.role.display_name() }</span>
        </div>
    }
}
