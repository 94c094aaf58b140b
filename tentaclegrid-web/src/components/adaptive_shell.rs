use tentaclegrid_game::{DeviceProfile, ShellView};
use yew::prelude::*;

use crate::components::rotate_notice::RotateNotice;
use crate::probe::ProbeHandle;
use crate::shell::use_adaptive_shell;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
    /// Environment source; the live browser when left unset.
    #[prop_or_default]
    pub probe: ProbeHandle,
    /// Called with every newly resolved profile, starting with the first.
    #[prop_or_default]
    pub on_profile_change: Callback<DeviceProfile>,
}

/// Gate the wrapped content behind the playability check and publish the
/// current [`DeviceProfile`] as context.
#[function_component(AdaptiveShell)]
pub fn adaptive_shell(props: &Props) -> Html {
    let shell = use_adaptive_shell(&props.probe);
    let profile = shell.profile();

    {
        let on_change = props.on_profile_change.clone();
        use_effect_with(profile, move |profile| {
            on_change.emit(*profile);
            || {}
        });
    }

    if shell.view() == Some(ShellView::Blocked) {
        return html! { <RotateNotice /> };
    }

    html! {
        <ContextProvider<DeviceProfile> context={profile}>
            { for props.children.iter() }
        </ContextProvider<DeviceProfile>>
    }
}
