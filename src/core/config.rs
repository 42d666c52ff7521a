use crate::error::Result;
use serde_yaml::Value;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "skiff.yml";

/// The stock configuration shipped with every new workspace. Kept as YAML
/// text so comments survive the unmodified path.
const DEFAULT_TEMPLATE: &str = r#"# Skiff server configuration.
# Generated by hatch. The server re-reads this file on restart.
server-name: skiff
motd: A Skiff server
network:
  bind-address: 0.0.0.0
  port: 7777
  max-players: 20
world:
  name: world
  seed: random
  autosave-minutes: 10
logging:
  level: info
  rotate-mb: 16
"#;

/// Answers collected by the wizard that get patched into the template.
#[derive(Debug, Clone)]
pub struct SetupAnswers {
    pub server_name: String,
    pub motd: String,
    pub port: u16,
    pub max_players: u32,
}

/// The template verbatim, for users who decline customization.
pub fn render_default() -> &'static str {
    DEFAULT_TEMPLATE
}

/// Parses the template, patches the prompted fields, and serializes the
/// document back to YAML. Unprompted fields keep their template values.
pub fn render(answers: &SetupAnswers) -> Result<String> {
    let mut doc: Value = serde_yaml::from_str(DEFAULT_TEMPLATE)?;

    patch(&mut doc, &["server-name"], Value::from(answers.server_name.as_str()));
    patch(&mut doc, &["motd"], Value::from(answers.motd.as_str()));
    patch(&mut doc, &["network", "port"], Value::from(u64::from(answers.port)));
    patch(
        &mut doc,
        &["network", "max-players"],
        Value::from(u64::from(answers.max_players)),
    );

    Ok(serde_yaml::to_string(&doc)?)
}

pub fn write(root: &Path, contents: &str) -> Result<()> {
    std::fs::write(root.join(CONFIG_FILE_NAME), contents)?;
    Ok(())
}

/// Sets the value at a nested key path. Missing intermediate mappings are
/// left untouched rather than created; the template defines the shape.
fn patch(doc: &mut Value, path: &[&str], value: Value) {
    let mut node = doc;
    for key in &path[..path.len() - 1] {
        match node.get_mut(*key) {
            Some(next) => node = next,
            None => return,
        }
    }

    if let Some(map) = node.as_mapping_mut() {
        map.insert(Value::from(path[path.len() - 1]), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn answers() -> SetupAnswers {
        SetupAnswers {
            server_name: "harbor".to_string(),
            motd: "Welcome aboard".to_string(),
            port: 9999,
            max_players: 64,
        }
    }

    #[test]
    fn test_default_template_parses() {
        let doc: Value = serde_yaml::from_str(render_default()).unwrap();
        assert_eq!(doc["server-name"], Value::from("skiff"));
        assert_eq!(doc["network"]["port"], Value::from(7777u64));
    }

    #[test]
    fn test_render_patches_answers() {
        let rendered = render(&answers()).unwrap();
        let doc: Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(doc["server-name"], Value::from("harbor"));
        assert_eq!(doc["motd"], Value::from("Welcome aboard"));
        assert_eq!(doc["network"]["port"], Value::from(9999u64));
        assert_eq!(doc["network"]["max-players"], Value::from(64u64));
    }

    #[test]
    fn test_render_keeps_unprompted_fields() {
        let rendered = render(&answers()).unwrap();
        let doc: Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(doc["network"]["bind-address"], Value::from("0.0.0.0"));
        assert_eq!(doc["world"]["autosave-minutes"], Value::from(10u64));
        assert_eq!(doc["logging"]["level"], Value::from("info"));
    }

    #[test]
    fn test_patch_ignores_unknown_path() {
        let mut doc: Value = serde_yaml::from_str(DEFAULT_TEMPLATE).unwrap();
        patch(&mut doc, &["missing", "port"], Value::from(1u64));
        assert!(doc.get("missing").is_none());
    }

    #[test]
    fn test_write_creates_config_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), render_default()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(contents, render_default());
    }
}
