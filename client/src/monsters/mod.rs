//! Monster 3D model catalog and profile-view configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The 3D renderer is an external collaborator. This module resolves the
//! inputs it consumes: a model descriptor per creature type, the asset path
//! for that descriptor, and the fixed display settings of a profile view.

pub mod models;
pub mod profile;

pub use models::{ActionType, ModelError, MonsterModel, monster_3d_model, monster_model_src};
pub use profile::{ProfileBackground, ProfileSize, ProfileView};
