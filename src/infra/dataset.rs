//! Loader for the materials table.
//!
//! Reads the cleaned materials CSV into [`MaterialRecord`]s. Numeric cells
//! that fail to parse become `None` (the row stays, but the scorer will not
//! rank it); rows without a material name are dropped and counted.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::MaterialRecord;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/materials.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_PATH_ENV: &str = "ECOPACK_DATASET";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("materials dataset not found at {0}")]
    Missing(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to read materials csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of one load: the snapshot plus how many rows were dropped.
#[derive(Debug)]
pub struct LoadedDataset {
    pub materials: Vec<MaterialRecord>,
    pub skipped: usize,
}

/// Resolve the dataset path: `ECOPACK_DATASET` wins over the default.
pub fn dataset_path() -> PathBuf {
    std::env::var(DATASET_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH))
}

/// Raw CSV row; numeric columns stay strings so one bad cell coerces to
/// `None` instead of rejecting the whole row.
#[derive(Debug, Deserialize)]
struct RawMaterialRow {
    #[serde(rename = "Material_Name")]
    name: String,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Cost_per_kg", default)]
    cost_per_kg: Option<String>,
    #[serde(rename = "CO2_Emission_kg", default)]
    co2_per_kg: Option<String>,
    #[serde(rename = "Tensile_Strength_MPa", default)]
    tensile_strength_mpa: Option<String>,
    #[serde(rename = "Biodegradable", default)]
    biodegradable: Option<String>,
}

pub fn load_materials(path: &Path) -> Result<LoadedDataset, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut materials = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<RawMaterialRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!("skipping unreadable materials row: {err}");
                skipped += 1;
                continue;
            }
        };

        let name = row.name.trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        materials.push(MaterialRecord {
            name: name.to_string(),
            category: row
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            cost_per_kg: coerce_number(row.cost_per_kg.as_deref()),
            co2_per_kg: coerce_number(row.co2_per_kg.as_deref()),
            tensile_strength_mpa: coerce_number(row.tensile_strength_mpa.as_deref()),
            biodegradable: coerce_flag(row.biodegradable.as_deref()),
        });
    }

    info!(
        "loaded {} materials from {} ({} rows skipped)",
        materials.len(),
        path.display(),
        skipped
    );

    Ok(LoadedDataset { materials, skipped })
}

/// Lenient numeric coercion: anything unparsable or non-finite is `None`.
fn coerce_number(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Normalize the biodegradability column, which appears as "Yes"/"No" in
/// some dataset revisions and as 0/1 flags in others.
fn coerce_flag(cell: Option<&str>) -> bool {
    matches!(
        cell.map(str::trim)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "yes" | "y" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    const HEADER: &str =
        "Material_Name,Category,Cost_per_kg,CO2_Emission_kg,Tensile_Strength_MPa,Biodegradable\n";

    #[test]
    fn parses_well_formed_rows() {
        let file = write_csv(&format!(
            "{HEADER}Jute,Natural Fiber,2.22,0.618,27.84,Yes\nPlastic,Polymer,3.5,1.2,40,No\n"
        ));
        let loaded = load_materials(file.path()).expect("load");
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.materials.len(), 2);

        let jute = &loaded.materials[0];
        assert_eq!(jute.name, "Jute");
        assert_eq!(jute.category.as_deref(), Some("Natural Fiber"));
        assert_eq!(jute.cost_per_kg, Some(2.22));
        assert!(jute.biodegradable);
        assert!(!loaded.materials[1].biodegradable);
    }

    #[test]
    fn bad_numeric_cells_coerce_to_none_and_keep_the_row() {
        let file = write_csv(&format!(
            "{HEADER}Mystery Foam,,n/a,0.4,12,No\nNo Strength,,1.0,0.2,,Yes\n"
        ));
        let loaded = load_materials(file.path()).expect("load");
        assert_eq!(loaded.materials.len(), 2);
        assert_eq!(loaded.materials[0].cost_per_kg, None);
        assert_eq!(loaded.materials[0].co2_per_kg, Some(0.4));
        assert_eq!(loaded.materials[1].tensile_strength_mpa, None);
        assert!(!loaded.materials[0].is_eligible());
        assert!(!loaded.materials[1].is_eligible());
    }

    #[test]
    fn flag_encodings_normalize_to_bool() {
        let file = write_csv(&format!(
            "{HEADER}A,,1,1,1,yes\nB,,1,1,1,TRUE\nC,,1,1,1,1\nD,,1,1,1,0\nE,,1,1,1,\n"
        ));
        let loaded = load_materials(file.path()).expect("load");
        let flags: Vec<bool> = loaded.materials.iter().map(|m| m.biodegradable).collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
    }

    #[test]
    fn nameless_rows_are_counted_as_skipped() {
        let file = write_csv(&format!("{HEADER} ,,1,1,1,Yes\nReal,,1,1,1,Yes\n"));
        let loaded = load_materials(file.path()).expect("load");
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.materials.len(), 1);
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let err = load_materials(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Missing(_)));
    }
}
