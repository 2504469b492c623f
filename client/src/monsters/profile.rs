//! Display settings handed to the 3D profile renderer.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::models::{ActionType, ModelError, MonsterModel, monster_3d_model, monster_model_src};

/// Fixed display size for a profile view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileSize {
    pub height: &'static str,
}

/// Background settings; `alpha == 0.0` is fully transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileBackground {
    pub alpha: f32,
}

impl ProfileBackground {
    /// CSS color for the background layer.
    pub fn css(self) -> String {
        format!("rgba(0, 0, 0, {})", self.alpha)
    }
}

/// Complete input for one `Monster3DProfile` render.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileView {
    pub type_id: String,
    pub path: String,
    pub action: ActionType,
    pub model: MonsterModel,
    pub size: ProfileSize,
    pub background: ProfileBackground,
    pub zoom: bool,
}

impl ProfileView {
    /// Idle, transparent, non-zoomable 350px profile of `type_id`.
    pub fn idle(type_id: u32) -> Result<Self, ModelError> {
        let model = *monster_3d_model(type_id)?;
        let path = monster_model_src(model.model)?;
        Ok(Self {
            type_id: type_id.to_string(),
            path,
            action: ActionType::Idle,
            model,
            size: ProfileSize { height: "350px" },
            background: ProfileBackground { alpha: 0.0 },
            zoom: false,
        })
    }

    /// Model descriptor as JSON for the renderer's `data-model` attribute.
    pub fn model_json(&self) -> String {
        serde_json::to_string(&self.model).unwrap_or_else(|e| {
            log::error!("model descriptor serialization failed: {e}");
            "{}".to_owned()
        })
    }
}
