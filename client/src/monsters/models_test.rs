use super::*;

// =============================================================
// monster_3d_model
// =============================================================

#[test]
fn lookup_devil_returns_its_descriptor() {
    let model = monster_3d_model(105).unwrap();
    assert_eq!(model.type_id, 105);
    assert_eq!(model.name, "Devil");
    assert_eq!(model.model, "Devil.gltf");
}

#[test]
fn lookup_is_deterministic() {
    assert_eq!(monster_3d_model(102), monster_3d_model(102));
}

#[test]
fn lookup_unknown_type_is_an_error() {
    assert_eq!(monster_3d_model(9_999), Err(ModelError::UnknownType(9_999)));
    assert_eq!(monster_3d_model(0), Err(ModelError::UnknownType(0)));
}

#[test]
fn catalog_type_ids_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.type_id, b.type_id);
        }
    }
}

#[test]
fn catalog_entries_resolve_asset_paths() {
    for entry in CATALOG {
        let src = monster_model_src(entry.model).unwrap();
        assert!(src.starts_with(MODELS_BASE_PATH));
        assert!(src.ends_with(".gltf"));
    }
}

// =============================================================
// monster_model_src
// =============================================================

#[test]
fn model_src_joins_base_path() {
    assert_eq!(monster_model_src("Devil.gltf").unwrap(), "/models/monsters/Devil.gltf");
}

#[test]
fn model_src_rejects_empty_name() {
    assert_eq!(monster_model_src(""), Err(ModelError::EmptyModel));
}

// =============================================================
// ActionType
// =============================================================

#[test]
fn action_type_default_is_idle() {
    assert_eq!(ActionType::default(), ActionType::Idle);
    assert_eq!(ActionType::Idle.as_str(), "idle");
}

#[test]
fn action_type_serializes_to_renderer_name() {
    let json = serde_json::to_string(&ActionType::Attacking).unwrap();
    assert_eq!(json, "\"attacking\"");
}

#[test]
fn descriptor_serializes_with_camel_case_fields() {
    let value = serde_json::to_value(monster_3d_model(105).unwrap()).unwrap();
    assert_eq!(value["model"], "Devil.gltf");
    assert_eq!(value["typeId"], 105);
    assert!(value.get("cameraPosition").is_some());
    assert!(value.get("idleAnimation").is_some());
}
