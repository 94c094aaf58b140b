use crate::i18n::t;
use yew::prelude::*;

/// Full-viewport notice shown while a phone is held in portrait.
#[function_component(RotateNotice)]
pub fn rotate_notice() -> Html {
    html! {
        <div
            class="rotate-notice"
            role="alertdialog"
            aria-modal="true"
            aria-labelledby="rotate-notice-title"
            aria-describedby="rotate-notice-body"
            style="position:fixed;inset:0;display:flex;flex-direction:column;align-items:center;justify-content:center;z-index:1000;"
        >
            <div class="rotate-notice__icon" aria-hidden="true">{ "⟳" }</div>
            <h2 id="rotate-notice-title">{ t("orientation.title") }</h2>
            <p id="rotate-notice-body">{ t("orientation.body") }</p>
        </div>
    }
}
