use avalon_core::Role;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_back: Callback<()>,
    /// Role whose details are open on first render.
    #[prop_or_default]
    pub initial: Option<Role>,
}

/// Character guide: every role with its ability and description.
#[function_component(CharacterGuide)]
pub fn character_guide(props: &Props) -> Html {
    let selected = use_state(|| props.initial);

    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let role_row = |good: bool| -> Html {
        Role::ALL
            .into_iter()
            .filter(|role| role.is_good() == good)
            .map(|role| {
                let onclick = {
                    let selected = selected.clone();
                    Callback::from(move |_: MouseEvent| selected.set(Some(role)))
                };
                html! {
                    <button
                        type="button"
                        key={role.key()}
                        class={classes!("role-card", format!("team-{}", role.team().key()))}
                        {onclick}
                    >
                        <span class="role-card__name">{ role.display_name() }</span>
                    </button>
                }
            })
            .collect::<Html>()
    };

    let details = (*selected).map(|role| {
        let close = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(None))
        };
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
        html! {
            <div class="modal-backdrop" onclick={close.clone()}>
                <div
                    class={classes!("role-details", format!("team-{}", role.team().key()))}
                    role="dialog"
                    aria-modal="true"
                    onclick={stop}
                >
                    <h3>{ role.display_name() }</h3>
                    <span class="role-details__ability">
                        { i18n::t(&format!("guide.roles.{}.ability", role.key())) }
                    </span>
                    <p>{ i18n::t(&format!("guide.roles.{}.description", role.key())) }</p>
                    <button type="button" onclick={close}>{ i18n::t("guide.close") }</button>
                </div>
            </div>
        }
    });

    html! {
        <div class="character-guide">
            <header class="character-guide__header">
                <h1>{ i18n::t("guide.title") }</h1>
                <button type="button" class="character-guide__back" onclick={back}>
                    { "‹ " }{ i18n::t("guide.back") }
                </button>
            </header>
            <section class="role-row team-good">
                <h2>{ i18n::t("guide.good_team") }</h2>
                <div class="role-row__cards">{ role_row(true) }</div>
            </section>
            <section class="role-row team-evil">
                <h2>{ i18n::t("guide.evil_team") }</h2>
                <div class="role-row__cards">{ role_row(false) }</div>
            </section>
            <p class="character-guide__hint">{ i18n::t("guide.hint") }</p>
            { details }
        </div>
    }
}
