// Display helpers shared by the views

use crate::utils::constants::{IMPORT_COLUMNS, IMPORT_TEMPLATE_SAMPLE_ROW};

/// "2024-03-01T09:30:00" -> "2024-03-01". Unparseable input is returned as-is.
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Size in MB with two decimals, e.g. "1.50 MB"
pub fn file_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Lower-cased extension after the last dot, if any
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() && ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// CSV template offered on the import view
pub fn import_template_csv() -> String {
    format!("{}\n{}\n", IMPORT_COLUMNS.join(","), IMPORT_TEMPLATE_SAMPLE_ROW)
}
