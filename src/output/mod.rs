use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::record::ResultSet;

/// Writes the result set as pretty-printed JSON to `<output_dir>/<file_name>`.
///
/// The output directory is created if absent and any previous file at the
/// target path is removed before the new one is written. The write itself is
/// not atomic. serde_json leaves non-ASCII characters unescaped, so currency
/// glyphs land in the file literally.
pub fn write_result_set(result: &ResultSet, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let output_path = output_dir.join(file_name);
    info!("writing the data to {}", output_path.display());

    fs::create_dir_all(output_dir)?;
    if output_path.exists() {
        fs::remove_file(&output_path)?;
    }

    let json_data = serde_json::to_string_pretty(result)?;
    let mut file = File::create(&output_path)?;
    file.write_all(json_data.as_bytes())?;

    info!("JSON file generated successfully");
    Ok(output_path)
}
