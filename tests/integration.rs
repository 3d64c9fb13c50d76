use config::{Config, File, FileFormat};

use cloud_ui_config::{AppConfig, BackendObject, map_object_to_front_format, paths, render};

const CONFIG_TOML: &str = r#"
github_link = "https://example.com/project"
main_name = "MYCLOUD"
base_url = "http://backend:8080"
base_api = "/api/v2"
validate_login_form = true
validate_registration_form = false
is_move_allowed = false
is_cut_paste_allowed = true
is_file_context_menu_allowed = true
is_shortcuts_allowed = false

[valid_username]
min_length = 3
max_length = 20
pattern = "^[a-zA-Z0-9]+[a-zA-Z_0-9]*[a-zA-Z0-9]+$"

[valid_password]
min_length = 6
max_length = 20
pattern = "^[a-zA-Z0-9!@#$%^&*(),.?\":{}|<>[\\]/`~+=-_';]*$"

[valid_folder_name]
min_length = 1
max_length = 200
pattern = "^[^/\\\\:*?\"<>|]+$"
"#;

fn config_from_toml(toml: &str) -> AppConfig {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_config_deserializes_from_toml() {
    let config = config_from_toml(CONFIG_TOML);
    assert_eq!(config.branding.main_name, "MYCLOUD");
    assert_eq!(config.api.base_url, "http://backend:8080");
    assert_eq!(config.api.base_api, "/api/v2");
    assert!(!config.forms.validate_registration_form);
    assert_eq!(config.forms.valid_password.min_length, 6);
    assert!(!config.features.is_move_allowed);
    assert!(config.features.is_cut_paste_allowed);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_patterns_survive_escaping() {
    let config = config_from_toml(CONFIG_TOML);
    let defaults = AppConfig::default();
    assert_eq!(
        config.forms.valid_password.pattern,
        defaults.forms.valid_password.pattern
    );
    assert_eq!(
        config.forms.valid_folder_name.pattern,
        defaults.forms.valid_folder_name.pattern
    );
}

#[test]
fn test_rendered_config_matches_front_end_contract() {
    let config = config_from_toml(CONFIG_TOML);
    let value: serde_json::Value =
        serde_json::from_str(&render::to_front_json(&config).unwrap()).unwrap();

    assert_eq!(value["githubLink"], "https://example.com/project");
    assert_eq!(value["mainName"], "MYCLOUD");
    assert_eq!(value["baseUrl"], "http://backend:8080");
    assert_eq!(value["baseApi"], "/api/v2");
    assert_eq!(value["validateLoginForm"], true);
    assert_eq!(value["validateRegistrationForm"], false);
    assert_eq!(value["validUsername"]["minLength"], 3);
    assert_eq!(value["validUsername"]["maxLength"], 20);
    assert_eq!(value["validFolderName"]["maxLength"], 200);
    assert_eq!(value["isMoveAllowed"], false);
    assert_eq!(value["isShortcutsAllowed"], false);
}

#[test]
fn test_config_script_is_complete() {
    let script = render::to_config_script(&AppConfig::default()).unwrap();
    assert!(script.starts_with("window.APP_CONFIG = {"));
    assert!(script.contains("\"mainName\": \"CLOUD\""));
    assert!(script.contains("mapObjectToFrontFormat"));
    assert!(script.trim_end().ends_with("};"));
}

#[test]
fn test_backend_listing_maps_to_front_objects() {
    let listing: Vec<BackendObject> = serde_json::from_str(
        r#"[
            {"name": "docs/", "size": 0, "path": "", "type": "DIRECTORY"},
            {"name": "a.txt", "size": 42, "path": "docs/", "type": "FILE"}
        ]"#,
    )
    .unwrap();

    let front: Vec<_> = listing.iter().map(map_object_to_front_format).collect();

    assert_eq!(front[0].path, "docs/");
    assert!(front[0].folder);
    assert_eq!(front[1].path, "docs/a.txt");
    assert_eq!(front[1].size, 42);
    assert!(!front[1].folder);
    assert!(front.iter().all(|f| f.last_modified.is_none()));
}

#[test]
fn test_path_helpers_round_trip_with_mapping() {
    let backend = BackendObject {
        name: "report.pdf".to_string(),
        size: 1024,
        path: paths::normalize("user-1-files\\docs"),
        object_type: cloud_ui_config::ObjectType::File,
    };

    let front = map_object_to_front_format(&backend);
    assert_eq!(front.path, "user-1-files/docs/report.pdf");
    assert_eq!(paths::resource_name(&front.path), "report.pdf");
    assert_eq!(paths::parent_path(&front.path), "user-1-files/docs/");
}
