//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Writes a commented template on request.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.
//! - A missing file is not an error; defaults apply.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::DEFAULT_SEED;
use crate::folder::DEFAULT_ORG_ID;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "data_file")]
    data_file: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "org_id")]
    org_id: Option<String>,
    #[serde(rename = "seed", default, deserialize_with = "de_u64_trimmed_opt")]
    seed: Option<u64>,
}

// Custom deserializer that trims surrounding whitespace for optional u64.
// Blank means unset; anything else must parse.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => t
            .parse::<u64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid seed '{t}': {e}"))),
    }
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

// Map XmlConfig -> Config; absent fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    cfg.data_file = non_empty_path(parsed.data_file.as_deref());
    cfg.log_file = non_empty_path(parsed.log_file.as_deref());

    if let Some(s) = parsed.log_level.as_deref()
        && let Ok(level) = s.trim().parse::<LogLevel>()
    {
        cfg.log_level = level;
    }

    if let Some(s) = parsed.org_id.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.org_id = Uuid::parse_str(trimmed)
                .with_context(|| format!("org_id '{trimmed}' is not a valid UUID"))?;
        }
    }

    if let Some(seed) = parsed.seed {
        cfg.seed = seed;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid config xml '{}'", path.display()))
}

/// Resolve the config path and load it; defaults when the file is missing.
pub fn load_config() -> Result<Config> {
    let path = default_config_path().context("resolve config path")?;
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(Config::default());
    }
    debug!(path = %path.display(), "Loading config");
    load_config_from_xml_path(&path)
}

/// Write a commented template config. Refuses to overwrite or follow symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if path.exists() {
        bail!("Config already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let content = format!(
        "<!--\n  folder_tree configuration (XML)\n\n  Fields:\n    data_file  -> JSON folder collection to load (omit to use the default data file or generated sample data)\n    log_level  -> quiet | normal | info | debug\n    log_file   -> path to log file (optional; stderr still used)\n    org_id     -> organization used when a command does not pass one\n    seed       -> seed for generated sample data\n\n  CLI flags override XML values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <org_id>{}</org_id>\n  <seed>{}</seed>\n</config>\n",
        DEFAULT_ORG_ID, DEFAULT_SEED
    );

    fs::write(path, content).with_context(|| format!("write config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let parsed: XmlConfig = from_xml_str("<config></config>").unwrap();
        assert_eq!(xml_to_config(parsed).unwrap(), Config::default());
    }

    #[test]
    fn blank_paths_are_ignored() {
        let parsed: XmlConfig =
            from_xml_str("<config><data_file>  </data_file><seed> 9 </seed></config>").unwrap();
        let cfg = xml_to_config(parsed).unwrap();
        assert_eq!(cfg.data_file, None);
        assert_eq!(cfg.seed, 9);
    }

    #[test]
    fn unparseable_seed_is_an_error() {
        assert!(from_xml_str::<XmlConfig>("<config><seed>abc</seed></config>").is_err());
        assert!(from_xml_str::<XmlConfig>("<config><seed>-3</seed></config>").is_err());
        let parsed: XmlConfig = from_xml_str("<config><seed>  </seed></config>").unwrap();
        assert_eq!(xml_to_config(parsed).unwrap().seed, Config::default().seed);
    }

    #[test]
    fn bad_org_id_is_an_error() {
        let parsed: XmlConfig = from_xml_str("<config><org_id>nope</org_id></config>").unwrap();
        assert!(xml_to_config(parsed).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let res: Result<XmlConfig, _> = from_xml_str("<config><colour>red</colour></config>");
        assert!(res.is_err());
    }
}
