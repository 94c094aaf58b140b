//! Game store handle shared with the simulation and control panel.
use std::ops::Deref;
use std::rc::Rc;

use tentaclegrid_game::{DeviceProfile, GameStoreState, SettingsPatch, StoreCommand};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameStore(GameStoreState);

impl Deref for GameStore {
    type Target = GameStoreState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for GameStore {
    type Action = StoreCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.reduce(action);
        if next == self.0 {
            return self;
        }
        Rc::new(Self(next))
    }
}

/// Context type carrying the store to downstream consumers.
pub type GameStoreContext = UseReducerHandle<GameStore>;

/// Callback that pushes each resolved profile into the store settings.
#[must_use]
pub fn profile_sync(dispatcher: UseReducerDispatcher<GameStore>) -> Callback<DeviceProfile> {
    Callback::from(move |profile: DeviceProfile| {
        dispatcher.dispatch(StoreCommand::UpdateSettings(SettingsPatch::from_profile(
            &profile,
        )));
    })
}
