//! Command handlers.
//!
//! Each handler takes the payload text (or config location) and returns what
//! the binary should print, so the handlers can be tested without spawning
//! the process.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use kerygma_content::export::{preview, title, to_plain_text};
use kerygma_content::view::renderer_for;
use kerygma_content::{ContentTypeId, DetectionSource, RendererId, Resolution, detect_with_source};

use crate::config::KerygmaConfig;
use crate::error::{Error, Result};

// ============================================================================
// Input
// ============================================================================

/// Read a payload from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path)),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn parse_payload(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| Error::Core(kerygma_core::Error::from(e)))
}

// ============================================================================
// Content commands
// ============================================================================

/// `detect`: the content type id and the signal that decided it.
pub fn cmd_detect(input: &str, declared: Option<&str>) -> Result<String> {
    let detection = detect_with_source(&parse_payload(input)?, declared);
    Ok(format!(
        "{}\t{}",
        detection.content_type,
        describe_source(&detection.source)
    ))
}

fn describe_source(source: &DetectionSource) -> String {
    match source {
        DetectionSource::Declared => "declared".to_string(),
        DetectionSource::Embedded => "embedded".to_string(),
        DetectionSource::Structural { probe } => format!("structural:{probe}"),
        DetectionSource::Override { probe, hinted } => {
            format!("override:{probe} (declared {hinted})")
        }
        DetectionSource::Fallback => "fallback".to_string(),
    }
}

/// `resolve`: the resolution, serialized as JSON.
pub fn cmd_resolve(input: &str, declared: Option<&str>, pretty: bool) -> Result<(Resolution, String)> {
    let resolution = kerygma_content::resolve_str(input, declared)?;
    let json = if pretty {
        serde_json::to_string_pretty(&resolution)?
    } else {
        serde_json::to_string(&resolution)?
    };
    Ok((resolution, json))
}

/// Whether strict mode rejects a resolution.
pub fn strict_rejects(config: &KerygmaConfig, resolution: &Resolution) -> bool {
    config.strict && resolution.renderer == RendererId::DefaultView
}

/// `export`: the record as plain text.
pub fn cmd_export(input: &str, declared: Option<&str>) -> Result<String> {
    let resolution = kerygma_content::resolve_str(input, declared)?;
    Ok(to_plain_text(&resolution.record))
}

/// `export --preview`: title line plus a short preview.
pub fn cmd_preview(input: &str, declared: Option<&str>, max_chars: usize) -> Result<String> {
    let resolution = kerygma_content::resolve_str(input, declared)?;
    let heading = title(&resolution.record)
        .unwrap_or_else(|| resolution.content_type.display_name().to_string());
    Ok(format!(
        "{heading}\n{}",
        preview(&resolution.record, max_chars)
    ))
}

/// `types`: one line per content type with its display name and renderer.
pub fn cmd_types() -> String {
    ContentTypeId::ALL
        .iter()
        .map(|t| format!("{}\t{}\t{}", t, t.display_name(), renderer_for(*t, None)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Config commands
// ============================================================================

/// `config path`: the config file location in effect.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<PathBuf> {
    KerygmaConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

/// `config show`: the effective config as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<String> {
    KerygmaConfig::load(config_path)?.to_toml_string()
}

/// `config init`: write a default config file.
pub fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = cmd_config_path(config_path)?;
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let text = KerygmaConfig::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}
