use serde::Serialize;
use serde_json::{Map, Value};

use crate::extract::{Component, Version};

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `major.minor.patch`, or the bare component value
    #[default]
    Plain,
    /// A single-line JSON object
    Json,
}

#[derive(Serialize)]
struct JsonVersion<'a> {
    #[serde(flatten)]
    components: &'a Version,
    version: String,
}

/// Render the line printed on success, without the trailing newline.
pub fn render(
    version: &Version,
    component: Option<Component>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match (format, component) {
        (OutputFormat::Plain, None) => Ok(version.to_string()),
        (OutputFormat::Plain, Some(c)) => Ok(version.component(c).to_string()),
        (OutputFormat::Json, None) => serde_json::to_string(&JsonVersion {
            components: version,
            version: version.to_string(),
        }),
        (OutputFormat::Json, Some(c)) => {
            let mut map = Map::new();
            map.insert(c.name().to_string(), Value::from(version.component(c)));
            serde_json::to_string(&map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Version {
        Version {
            major: "0".into(),
            minor: "1".into(),
            patch: "0".into(),
        }
    }

    #[test]
    fn plain_prints_dotted_version() {
        assert_eq!(render(&sample(), None, OutputFormat::Plain).unwrap(), "0.1.0");
    }

    #[test]
    fn plain_prints_single_component() {
        assert_eq!(
            render(&sample(), Some(Component::Minor), OutputFormat::Plain).unwrap(),
            "1"
        );
    }

    #[test]
    fn json_includes_every_component() {
        let out = render(&sample(), None, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["major"], "0");
        assert_eq!(parsed["minor"], "1");
        assert_eq!(parsed["patch"], "0");
        assert_eq!(parsed["version"], "0.1.0");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn json_single_component() {
        let out = render(&sample(), Some(Component::Patch), OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"patch":"0"}"#);
    }
}
