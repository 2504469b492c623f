//! Creature type id -> 3D model descriptor lookup.
//!
//! ERROR HANDLING
//! ==============
//! Unknown type ids are a defect in the catalog, not a runtime condition with
//! a sensible default. Lookups return `ModelError` and never substitute a
//! different creature.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::Serialize;

/// Base path under which monster model assets are served.
pub const MODELS_BASE_PATH: &str = "/models/monsters";

/// Errors raised while resolving model descriptors or asset paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("no 3D model registered for monster type {0}")]
    UnknownType(u32),
    #[error("model descriptor has an empty model name")]
    EmptyModel,
}

/// Animation the renderer plays for a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Idle,
    Sleeping,
    Eating,
    Attacking,
    Dying,
}

impl ActionType {
    /// Stable name passed to the renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sleeping => "sleeping",
            Self::Eating => "eating",
            Self::Attacking => "attacking",
            Self::Dying => "dying",
        }
    }
}

/// Rendering parameters for one creature type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterModel {
    pub type_id: u32,
    pub name: &'static str,
    /// Asset file name, resolved to a path with [`monster_model_src`].
    pub model: &'static str,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub camera_position: [f32; 3],
    pub scale: f32,
    /// Animation clip played for [`ActionType::Idle`].
    pub idle_animation: &'static str,
}

const CATALOG: &[MonsterModel] = &[
    MonsterModel {
        type_id: 100,
        name: "Bear",
        model: "Bear.gltf",
        position: [0.0, -1.2, 0.0],
        rotation: [0.0, 0.0, 0.0],
        camera_position: [0.0, 1.0, 6.0],
        scale: 1.0,
        idle_animation: "idle",
    },
    MonsterModel {
        type_id: 101,
        name: "Ghost",
        model: "Ghost.gltf",
        position: [0.0, -0.8, 0.0],
        rotation: [0.0, 0.3, 0.0],
        camera_position: [0.0, 1.0, 5.0],
        scale: 0.9,
        idle_animation: "float",
    },
    MonsterModel {
        type_id: 102,
        name: "Dragon",
        model: "Dragon.gltf",
        position: [0.0, -1.5, 0.0],
        rotation: [0.0, 0.6, 0.0],
        camera_position: [0.0, 2.0, 9.0],
        scale: 1.4,
        idle_animation: "idle",
    },
    MonsterModel {
        type_id: 103,
        name: "Cyclops",
        model: "Cyclops.gltf",
        position: [0.0, -1.4, 0.0],
        rotation: [0.0, 0.0, 0.0],
        camera_position: [0.0, 1.5, 7.0],
        scale: 1.1,
        idle_animation: "idle",
    },
    MonsterModel {
        type_id: 104,
        name: "Goblin",
        model: "Goblin.gltf",
        position: [0.0, -1.0, 0.0],
        rotation: [0.0, -0.3, 0.0],
        camera_position: [0.0, 1.0, 5.5],
        scale: 0.8,
        idle_animation: "idle",
    },
    MonsterModel {
        type_id: 105,
        name: "Devil",
        model: "Devil.gltf",
        position: [0.0, -1.3, 0.0],
        rotation: [0.0, 0.4, 0.0],
        camera_position: [0.0, 1.2, 6.5],
        scale: 1.0,
        idle_animation: "idle",
    },
    MonsterModel {
        type_id: 106,
        name: "Skeleton",
        model: "Skeleton.gltf",
        position: [0.0, -1.4, 0.0],
        rotation: [0.0, 0.2, 0.0],
        camera_position: [0.0, 1.3, 6.5],
        scale: 1.0,
        idle_animation: "idle",
    },
];

/// Look up the model descriptor for a creature type id.
pub fn monster_3d_model(type_id: u32) -> Result<&'static MonsterModel, ModelError> {
    CATALOG
        .iter()
        .find(|m| m.type_id == type_id)
        .ok_or(ModelError::UnknownType(type_id))
}

/// Resolve the asset path for a descriptor's `model` name.
pub fn monster_model_src(model: &str) -> Result<String, ModelError> {
    if model.is_empty() {
        return Err(ModelError::EmptyModel);
    }
    Ok(format!("{MODELS_BASE_PATH}/{model}"))
}
