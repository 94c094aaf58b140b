use yew::prelude::*;

use crate::components::adaptive_shell::AdaptiveShell;
use crate::components::game_stage::GameStage;
use crate::probe::ProbeHandle;
use crate::store::{GameStore, GameStoreContext, profile_sync};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub probe: ProbeHandle,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let store = use_reducer(GameStore::default);
    let on_profile_change = profile_sync(store.dispatcher());

    html! {
        <ContextProvider<GameStoreContext> context={store}>
            <AdaptiveShell probe={props.probe.clone()} on_profile_change={on_profile_change}>
                <GameStage />
            </AdaptiveShell>
        </ContextProvider<GameStoreContext>>
    }
}
