use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

/// Fallback for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let onclick = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <main class="viewer-panel not-found" role="alert">
            <div class="welcome">
                <div class="welcome__icon" aria-hidden="true">{ "🗺️" }</div>
                <h1>{ i18n::t("not_found.title") }</h1>
                <p>{ i18n::t("not_found.message") }</p>
                <button type="button" class="welcome__guide" {onclick}>
                    { i18n::t("not_found.back") }
                </button>
            </div>
        </main>
    }
}
