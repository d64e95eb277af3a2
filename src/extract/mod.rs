use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// One of the three version macros defined in `openaptx.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];

    /// The `#define` prefix that introduces this component. The trailing
    /// space keeps `OPENAPTX_MAJOR_FOO` from matching.
    pub fn prefix(self) -> &'static str {
        match self {
            Component::Major => "#define OPENAPTX_MAJOR ",
            Component::Minor => "#define OPENAPTX_MINOR ",
            Component::Patch => "#define OPENAPTX_PATCH ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} does not define {}", path.display(), join_components(missing))]
    Incomplete {
        path: PathBuf,
        missing: Vec<Component>,
    },
}

impl ExtractionError {
    /// The header file that was being scanned.
    pub fn header_path(&self) -> &Path {
        match self {
            ExtractionError::Io { path, .. } | ExtractionError::Incomplete { path, .. } => path,
        }
    }
}

fn join_components(components: &[Component]) -> String {
    components
        .iter()
        .map(|c| c.prefix().trim_end().trim_start_matches("#define "))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values captured so far during a header scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VersionComponents {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
}

impl VersionComponents {
    pub fn get(&self, component: Component) -> Option<&str> {
        let slot = match component {
            Component::Major => &self.major,
            Component::Minor => &self.minor,
            Component::Patch => &self.patch,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, component: Component) -> &mut Option<String> {
        match component {
            Component::Major => &mut self.major,
            Component::Minor => &mut self.minor,
            Component::Patch => &mut self.patch,
        }
    }

    /// Record `value` for `component`, replacing any earlier definition.
    /// Returns the value that was replaced.
    pub fn set(&mut self, component: Component, value: String) -> Option<String> {
        self.slot_mut(component).replace(value)
    }

    pub fn missing(&self) -> Vec<Component> {
        Component::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }

    /// Turn the captured values into a [`Version`] if all three are non-empty.
    pub fn into_version(self) -> Option<Version> {
        match (self.major, self.minor, self.patch) {
            (Some(major), Some(minor), Some(patch))
                if !major.is_empty() && !minor.is_empty() && !patch.is_empty() =>
            {
                Some(Version { major, minor, patch })
            }
            _ => None,
        }
    }
}

/// A fully resolved version. Components are opaque text taken verbatim
/// from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl Version {
    pub fn component(&self, component: Component) -> &str {
        match component {
            Component::Major => &self.major,
            Component::Minor => &self.minor,
            Component::Patch => &self.patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Match a single header line against the three macro prefixes.
///
/// Surrounding whitespace on the line is ignored, and the captured value is
/// trimmed. Returns `None` for lines that define none of the macros.
pub fn scan_line(line: &str) -> Option<(Component, &str)> {
    let stripped = line.trim();
    Component::ALL.into_iter().find_map(|component| {
        stripped
            .strip_prefix(component.prefix())
            .map(|rest| (component, rest.trim()))
    })
}

/// Scan every line of `reader`. `path` is only used for errors and logs.
pub fn extract_from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Version, ExtractionError> {
    let mut components = VersionComponents::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let Some((component, value)) = scan_line(&line) else {
            continue;
        };
        debug!(line = idx + 1, %component, value, "matched version macro");
        if let Some(previous) = components.set(component, value.to_string()) {
            debug!(
                line = idx + 1,
                %component,
                previous = %previous,
                value,
                "macro defined more than once, using the later definition"
            );
        }
    }

    let missing = components.missing();
    components.into_version().ok_or_else(|| ExtractionError::Incomplete {
        path: path.to_path_buf(),
        missing,
    })
}

/// Read the header at `header_path` and extract the version it defines.
pub fn extract_version(header_path: &Path) -> Result<Version, ExtractionError> {
    debug!(path = %header_path.display(), "scanning header");
    let file = File::open(header_path).map_err(|source| ExtractionError::Io {
        path: header_path.to_path_buf(),
        source,
    })?;
    extract_from_reader(BufReader::new(file), header_path)
}
