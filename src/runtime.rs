//! Node runtime version detection
//!
//! Elastic Beanstalk pins the Node and npm versions through the rendered
//! `node.config`, so the staged bundle has to carry concrete version strings.
//! They are read from the app's package.json `engines` field when present.

use std::path::Path;

use serde::Deserialize;

/// Fallbacks when the app does not pin its engines
const DEFAULT_NODE_VERSION: &str = "20.11.1";
const DEFAULT_NPM_VERSION: &str = "10.2.4";

/// Detected interpreter and package-manager versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersions {
    pub node_version: String,
    pub npm_version: String,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    engines: Engines,
}

#[derive(Debug, Default, Deserialize)]
struct Engines {
    node: Option<String>,
    npm: Option<String>,
}

impl RuntimeVersions {
    /// Detect versions from `<app_path>/package.json`.
    ///
    /// A missing or unparsable package.json is not an error; the pinned
    /// defaults are used instead.
    pub fn detect(app_path: &Path) -> Self {
        let engines = std::fs::read_to_string(app_path.join("package.json"))
            .ok()
            .and_then(|contents| serde_json::from_str::<PackageJson>(&contents).ok())
            .map(|pkg| pkg.engines)
            .unwrap_or_default();

        Self {
            node_version: engines
                .node
                .map(|v| normalize(&v))
                .unwrap_or_else(|| DEFAULT_NODE_VERSION.to_string()),
            npm_version: engines
                .npm
                .map(|v| normalize(&v))
                .unwrap_or_else(|| DEFAULT_NPM_VERSION.to_string()),
        }
    }
}

/// Strip range operators so "^20.11.0" or ">=20.11.0" pins as "20.11.0"
fn normalize(version: &str) -> String {
    version
        .trim()
        .trim_start_matches(['^', '~', '=', 'v', '>', '<', ' '])
        .to_string()
}
