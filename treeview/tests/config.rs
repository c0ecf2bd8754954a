use treeview::{TreeviewConfig, TreeviewError};

#[test]
fn test_defaults() {
    let config = TreeviewConfig::default();
    assert!(config.has_all_check_box);
    assert!(!config.has_filter);
    assert!(!config.has_collapse_expand);
    assert!(!config.decouple_child_from_parent);
    assert_eq!(config.max_height, 500);
    assert!(config.has_divider);
}

#[test]
fn test_builder() {
    let config = TreeviewConfig::new()
        .with_filter(true)
        .with_all_check_box(false)
        .with_max_height(240)
        .decoupled();
    assert!(config.has_filter);
    assert!(!config.has_all_check_box);
    assert_eq!(config.max_height, 240);
    assert!(config.decouple_child_from_parent);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config = TreeviewConfig::from_json(r#"{"hasFilter": true, "maxHeight": 300}"#).unwrap();
    assert!(config.has_filter);
    assert_eq!(config.max_height, 300);
    assert!(config.has_all_check_box);
    assert!(config.has_divider);
}

#[test]
fn test_empty_object_is_default() {
    let config = TreeviewConfig::from_json("{}").unwrap();
    assert_eq!(config, TreeviewConfig::default());
}

#[test]
fn test_camel_case_round_trip() {
    let json = serde_json::to_value(TreeviewConfig::default().decoupled()).unwrap();
    assert_eq!(json["decoupleChildFromParent"], true);
    assert_eq!(json["hasAllCheckBox"], true);
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = TreeviewConfig::from_json(r#"{"maxHeight": "tall"}"#).unwrap_err();
    assert!(matches!(err, TreeviewError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid treeview config"));
}

#[test]
fn test_malformed_json_falls_back_to_default() {
    assert_eq!(
        TreeviewConfig::from_json_or_default("not json"),
        TreeviewConfig::default()
    );
    assert_eq!(
        TreeviewConfig::from_json_or_default("null"),
        TreeviewConfig::default()
    );
    let config = TreeviewConfig::from_json_or_default(r#"{"hasCollapseExpand": true}"#);
    assert!(config.has_collapse_expand);
}
