//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file means defaults; nothing is created on the user's behalf.
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.
//! - Values are trimmed; empty elements count as unset.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use crate::errors::PlugfsError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    json_logs: Option<String>,
    lock_copies: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn parse_bool(field: &str, v: Option<String>, path: &Path) -> Result<bool, PlugfsError> {
    match non_empty(v).as_deref() {
        None => Ok(false),
        Some(s) if s.eq_ignore_ascii_case("true") || s == "1" || s.eq_ignore_ascii_case("yes") => Ok(true),
        Some(s) if s.eq_ignore_ascii_case("false") || s == "0" || s.eq_ignore_ascii_case("no") => Ok(false),
        Some(s) => Err(PlugfsError::ConfigParse {
            path: path.to_path_buf(),
            message: format!("{field}: expected true/false, got '{s}'"),
        }),
    }
}

/// Parse config XML text. `path` is used for error messages only.
pub fn parse_config(content: &str, path: &Path) -> Result<Config, PlugfsError> {
    let parsed: XmlConfig = from_xml_str(content).map_err(|e| PlugfsError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let log_level = match non_empty(parsed.log_level) {
        None => LogLevel::default(),
        Some(s) => s.parse::<LogLevel>().map_err(|message| PlugfsError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?,
    };

    Ok(Config {
        log_level,
        log_file: non_empty(parsed.log_file).map(PathBuf::from),
        json_logs: parse_bool("json_logs", parsed.json_logs, path)?,
        lock_copies: parse_bool("lock_copies", parsed.lock_copies, path)?,
    })
}

/// Load config from `path`. A missing file yields `Ok(None)`.
pub fn load_config_from(path: &Path) -> Result<Option<Config>, PlugfsError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }
        Err(e) => {
            return Err(PlugfsError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };
    parse_config(&content, path).map(Some)
}

/// Load the config from its default location, falling back to defaults.
pub fn load_config() -> Result<Config, PlugfsError> {
    match default_config_path() {
        Some(p) => Ok(load_config_from(&p)?.unwrap_or_default()),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<Config, PlugfsError> {
        parse_config(xml, Path::new("config.xml"))
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse(
            "<config>\n  <log_level> debug </log_level>\n  <log_file>/var/log/plugfs.log</log_file>\n  <json_logs>true</json_logs>\n  <lock_copies>yes</lock_copies>\n</config>",
        )
        .unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/plugfs.log")));
        assert!(cfg.json_logs);
        assert!(cfg.lock_copies);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse("<config></config>").unwrap(), Config::default());
        assert_eq!(parse("<config><log_file>  </log_file></config>").unwrap(), Config::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse("<config><colour>blue</colour></config>").unwrap_err();
        assert!(matches!(err, PlugfsError::ConfigParse { .. }));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse("<config><log_level>loud</log_level></config>").is_err());
        assert!(parse("<config><json_logs>maybe</json_logs></config>").is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_from(&dir.path().join("absent.xml")).unwrap().is_none());
    }
}
