//! The slice of `package.json` the generator cares about.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<BTreeMap<String, String>>,
}

impl PackageJson {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `package` is a direct or development dependency with a
    /// non-empty version.
    pub fn depends_on(&self, package: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|deps| deps.get(package).is_some_and(|v| !v.is_empty()))
    }
}
