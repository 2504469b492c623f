//! Host element for the external 3D monster renderer.
//!
//! Renders a `<canvas>` inside a container carrying the full profile
//! configuration as `data-*` attributes. The renderer script attaches to
//! `.monster-3d-profile` elements and reads its inputs from there.

use leptos::prelude::*;

use crate::monsters::ProfileView;

/// 3D profile view for one creature.
#[component]
pub fn Monster3DProfile(profile: ProfileView) -> impl IntoView {
    let model_json = profile.model_json();
    let background = profile.background.css();
    let zoom = if profile.zoom { "true" } else { "false" };

    view! {
        <div
            class="monster-3d-profile"
            data-type-id=profile.type_id
            data-path=profile.path
            data-action=profile.action.as_str()
            data-model=model_json
            data-zoom=zoom
            style:height=profile.size.height
            style:background-color=background
        >
            <canvas class="monster-3d-profile__canvas">
                {profile.model.name}
            </canvas>
        </div>
    }
}
