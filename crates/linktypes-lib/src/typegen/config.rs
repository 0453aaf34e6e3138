//! Configuration for declaration emission and file generation.

use crate::{Colors, Platform};

#[derive(Clone, Debug)]
pub struct Config {
    /// Module augmented by the declarations
    pub(crate) module_name: String,
    /// Interface declared inside the module
    pub(crate) interface_name: String,
    /// Tool named in the banner comment
    pub(crate) generator: String,
    /// Platform whose bindings map to library types
    pub(crate) platform: Platform,
    /// Manifest file name searched for by the generator
    pub(crate) manifest_name: String,
    /// Declaration file written next to each manifest
    pub(crate) output_file: String,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_name: "sst".to_string(),
            interface_name: "Resource".to_string(),
            generator: "SST".to_string(),
            platform: Platform::cloudflare(),
            manifest_name: "package.json".to_string(),
            output_file: "sst-env.d.ts".to_string(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_name(mut self, value: impl Into<String>) -> Self {
        self.module_name = value.into();
        self
    }

    pub fn interface_name(mut self, value: impl Into<String>) -> Self {
        self.interface_name = value.into();
        self
    }

    pub fn generator(mut self, value: impl Into<String>) -> Self {
        self.generator = value.into();
        self
    }

    pub fn platform(mut self, value: Platform) -> Self {
        self.platform = value;
        self
    }

    pub fn manifest_name(mut self, value: impl Into<String>) -> Self {
        self.manifest_name = value.into();
        self
    }

    pub fn output_file(mut self, value: impl Into<String>) -> Self {
        self.output_file = value.into();
        self
    }

    /// Set whether to use colored output.
    ///
    /// Files written by the generator are never colored.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn types_package(&self) -> &str {
        self.platform.types_package()
    }
}
