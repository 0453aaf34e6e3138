//! Declaration file assembly.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use super::{Config, INDENT, infer_colored, resolve_bindings};
use crate::{Colors, Error, Links, PropValue, Result};

type Fields = BTreeMap<String, PropValue>;

/// Declaration emitter for one link set.
///
/// Bindings are resolved and generic properties converted once in
/// [`Emitter::new`]. Properties of platform-native links are only converted
/// when a package without the platform dependency needs them, so they never
/// fail a platform-typed rendering.
pub struct Emitter {
    config: Config,
    /// Properties of links without a platform type
    generic: Fields,
    /// Raw properties of platform-native links
    native: BTreeMap<String, Value>,
    /// Platform-native links as qualified type literals
    platform: Fields,
}

impl Emitter {
    pub fn new(links: &Links, config: Config) -> Result<Self> {
        let bindings = resolve_bindings(links, &config.platform)?;

        let mut generic = Fields::new();
        let mut native = BTreeMap::new();
        for (name, link) in links {
            if bindings.contains_key(name) {
                native.insert(name.clone(), link.properties.clone());
            } else {
                generic.insert(name.clone(), convert(name, &link.properties)?);
            }
        }

        let platform = bindings
            .iter()
            .map(|(name, type_name)| {
                let literal = PropValue::literal(config.platform.qualify(type_name));
                (name.clone(), literal)
            })
            .collect::<Fields>();

        debug!(
            links = links.len(),
            generic = generic.len(),
            platform = platform.len(),
            "partitioned links"
        );

        Ok(Self {
            config,
            generic,
            native,
            platform,
        })
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    /// Render the declaration file.
    ///
    /// With `uses_platform`, platform-native links are declared through the
    /// platform's type library in a second block and left out of the first.
    ///
    /// Fails only without `uses_platform`, when the properties of a
    /// platform-native link are nested too deeply to infer.
    pub fn emit(&self, uses_platform: bool) -> Result<String> {
        let mut output = String::new();
        self.emit_banner(&mut output);

        if !uses_platform {
            let all = self.all_fields()?;
            self.emit_augmentation(&mut output, &all);
            return Ok(output);
        }

        self.emit_module_import(&mut output);
        self.emit_augmentation(&mut output, &self.generic);

        if !self.platform.is_empty() {
            self.emit_platform_import(&mut output);
            self.emit_augmentation(&mut output, &self.platform);
        }

        Ok(output)
    }

    /// Every link's properties, platform-native ones included.
    fn all_fields(&self) -> Result<Fields> {
        let mut all = self.generic.clone();
        for (name, properties) in &self.native {
            all.insert(name.clone(), convert(name, properties)?);
        }
        Ok(all)
    }

    fn emit_banner(&self, output: &mut String) {
        let c = self.c();
        for line in [
            format!("/* This file is auto-generated by {}. Do not edit. */", self.config.generator),
            "/* tslint:disable */".to_string(),
            "/* eslint-disable */".to_string(),
            "/* deno-fmt-ignore-file */".to_string(),
        ] {
            output.push_str(&format!("{}{}{}\n", c.dim, line, c.reset));
        }
        self.emit_module_import(output);
        output.push_str(&format!(
            "{}export{} {}{{}}{}\n",
            c.dim, c.reset, c.dim, c.reset
        ));
    }

    /// `import "sst"`
    fn emit_module_import(&self, output: &mut String) {
        let c = self.c();
        output.push_str(&format!(
            "{}import{} {}\"{}\"{}\n",
            c.dim, c.reset, c.green, self.config.module_name, c.reset
        ));
    }

    /// `import * as cloudflare from "@cloudflare/workers-types";`
    fn emit_platform_import(&self, output: &mut String) {
        let c = self.c();
        let platform = &self.config.platform;
        output.push_str(&format!("{}// {} {}\n", c.dim, platform.namespace(), c.reset));
        output.push_str(&format!(
            "{}import * as{} {}{}{} {}from{} {}\"{}\"{}{};{}\n",
            c.dim,
            c.reset,
            c.blue,
            platform.namespace(),
            c.reset,
            c.dim,
            c.reset,
            c.green,
            platform.types_package(),
            c.reset,
            c.dim,
            c.reset
        ));
    }

    /// `declare module "sst" { export interface Resource {...} }`
    fn emit_augmentation(&self, output: &mut String, fields: &Fields) {
        let c = self.c();
        output.push_str(&format!(
            "{}declare module{} {}\"{}\"{} {}{{{}\n",
            c.dim, c.reset, c.green, self.config.module_name, c.reset, c.dim, c.reset
        ));
        output.push_str(&format!(
            "{}{}export interface{} {}{}{} {}\n",
            INDENT,
            c.dim,
            c.reset,
            c.blue,
            self.config.interface_name,
            c.reset,
            infer_colored(fields, true, INDENT, c)
        ));
        output.push_str(&format!("{}}}{}\n", c.dim, c.reset));
    }
}

fn convert(link: &str, properties: &Value) -> Result<PropValue> {
    PropValue::from_json(properties).map_err(|source| Error::Properties {
        link: link.to_string(),
        source,
    })
}
