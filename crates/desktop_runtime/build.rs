use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_FILE: &str = "tools.manifest.toml";
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ToolsManifest {
    schema_version: u32,
    #[serde(default)]
    window_manager: Option<toml::Table>,
    tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ToolEntry {
    id: String,
    display_name: String,
    icon: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
}

fn valid_tool_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        && id.starts_with(|ch: char| ch.is_ascii_lowercase())
        && !id.ends_with('-')
        && !id.contains("--")
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(MANIFEST_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: ToolsManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "manifest schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for tool in &manifest.tools {
        if !valid_tool_id(&tool.id) {
            panic!("invalid tool id `{}` in {}", tool.id, path.display());
        }
        if !seen.insert(tool.id.as_str()) {
            panic!("duplicate tool id `{}` in {}", tool.id, path.display());
        }
        if tool.display_name.trim().is_empty() {
            panic!("tool `{}` has an empty display_name", tool.id);
        }
    }

    // Manifest order is the catalog order shown in the dock.
    let catalog_json =
        serde_json::to_string_pretty(&manifest.tools).expect("serialize tool catalog");
    let window_manager_json = serde_json::to_string(&manifest.window_manager.unwrap_or_default())
        .expect("serialize window manager config");
    let generated = format!(
        "/// Build-time generated tool catalog JSON.\n\
pub const TOOL_CATALOG_JSON: &str = r##\"{catalog_json}\"##;\n\
/// Build-time generated window-manager configuration JSON.\n\
pub const WINDOW_MANAGER_CONFIG_JSON: &str = r##\"{window_manager_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("tool_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
