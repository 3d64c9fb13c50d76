//! Front-end rendering
//!
//! The front end reads its configuration from a static `config.js` that
//! assigns `window.APP_CONFIG`. These functions turn an [`AppConfig`] into
//! that artifact: plain JSON for consumers that fetch it, or the full
//! script including the default `mapObjectToFrontFormat` function for a
//! drop-in `config.js`.

use crate::config::AppConfig;
use crate::error::ConfigError;

/// Default mapping function shipped to the front end, matching
/// [`crate::mapping::map_object_to_front_format`]
const MAP_OBJECT_TO_FRONT_FORMAT_JS: &str = r#"    mapObjectToFrontFormat: (obj) => {
      return {
        lastModified: null,
        name: obj.name,
        size: obj.size,
        path: obj.path + obj.name,
        folder: obj.type === "DIRECTORY"
      };
    }"#;

/// Render the configuration as pretty-printed front-end JSON
///
/// Keys are the camelCase names the front end expects.
pub fn to_front_json(config: &AppConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Render the complete `config.js` script
///
/// Produces `window.APP_CONFIG = {...};` with the configuration fields
/// followed by the `functions` block. The output is JavaScript, not JSON.
pub fn to_config_script(config: &AppConfig) -> Result<String, ConfigError> {
    let json = to_front_json(config)?;
    let fields = json.strip_suffix('}').unwrap_or(&json).trim_end();

    Ok(format!(
        "window.APP_CONFIG = {fields},\n  \"functions\": {{\n{MAP_OBJECT_TO_FRONT_FORMAT_JS}\n  }}\n}};\n"
    ))
}
