//! Mapping emitter
//!
//! Turns the icon catalog into Go source defining `id -> embedded resource`.
//! The whole file is built in memory first; sinks only ever see complete text.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::{ExclusionSet, RenderConfig};
use crate::error::GenError;
use crate::models::{IconRecord, MappingEntry, OutputMapping};
use crate::symbol;

// ── Pipeline ─────────────────────────────────────────────────────────────────

/// Load the catalog at `catalog_path` and render the complete source text.
pub fn generate(
    catalog_path: &Path,
    exclusions: &ExclusionSet,
    config: &RenderConfig,
) -> Result<String, GenError> {
    let records = catalog::load_catalog(catalog_path)?;
    let mapping = build_mapping(&records, exclusions, &config.symbol_prefix);
    log::info!(
        "🔧 Mapped {} icon(s), skipped {} excluded ({} id(s) in exclusion set)",
        mapping.entries.len(),
        mapping.excluded,
        exclusions.len()
    );
    Ok(render(&mapping, config))
}

/// Filter out excluded ids and derive the resource reference for the rest.
///
/// Input order is kept. Repeated ids are kept too (last one wins when the
/// table is built at runtime) but each repeat is logged.
pub fn build_mapping(records: &[IconRecord], exclusions: &ExclusionSet, prefix: &str) -> OutputMapping {
    let mut mapping = OutputMapping::default();
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if exclusions.contains(record.id) {
            mapping.excluded += 1;
            continue;
        }
        if !seen.insert(record.id) {
            log::warn!("⚠️  Duplicate icon id {} ({}), later entry wins", record.id, record.file);
        }
        mapping.entries.push(MappingEntry {
            id: record.id,
            reference: symbol::resource_reference(prefix, &record.file),
        });
    }

    mapping
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// Render the mapping as a Go source file.
pub fn render(mapping: &OutputMapping, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(128 + mapping.entries.len() * 32);

    out.push_str(&config.header);
    out.push('\n');
    out.push_str(&format!("package {}\n\n", config.package));

    match config.imports.as_slice() {
        [] => {}
        [single] => out.push_str(&format!("import \"{}\"\n\n", single)),
        many => {
            out.push_str("import (\n");
            for path in many {
                out.push_str(&format!("\t\"{}\"\n", path));
            }
            out.push_str(")\n\n");
        }
    }

    out.push_str(&format!(
        "var {} = map[{}]{}{{\n",
        config.map_name, config.key_type, config.value_type
    ));
    for entry in &mapping.entries {
        out.push_str(&format!("\t{}: {},\n", entry.id, entry.reference));
    }
    out.push_str("}\n");

    out
}

// ── Output ───────────────────────────────────────────────────────────────────

/// Write the finished text to a stream in one go.
pub fn emit<W: Write>(text: &str, sink: &mut W, destination: &str) -> Result<(), GenError> {
    sink.write_all(text.as_bytes())
        .and_then(|_| sink.flush())
        .map_err(|source| GenError::OutputWriteFailure {
            destination: destination.to_string(),
            source,
        })
}

/// Replace the file at `path` with `text`.
///
/// Goes through a temporary sibling and a rename, so the destination either
/// keeps its old content or gets all of the new one.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), GenError> {
    let tmp = temp_path_for(path);

    if let Err(source) = write_then_rename(&tmp, path, text) {
        let _ = fs::remove_file(&tmp);
        return Err(GenError::OutputWriteFailure {
            destination: path.display().to_string(),
            source,
        });
    }

    Ok(())
}

fn write_then_rename(tmp: &Path, path: &Path, text: &str) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let tmp_name = format!(".{}.tmp", name);
    match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}
