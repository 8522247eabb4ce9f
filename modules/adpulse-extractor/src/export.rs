//! CSV export of the aggregated records.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use csv::WriterBuilder;

use adpulse_common::{AdRecord, NA};

/// Column order, matching the `AdRecord` field order.
const HEADER: [&str; 14] = [
    "date",
    "time",
    "phone_number",
    "campaign_id",
    "adset_id",
    "thumbnail",
    "thumbnail_url",
    "body",
    "platform_code",
    "welcome_text",
    "campaign_name",
    "adset_name",
    "ad_name",
    "platform",
];

/// Write the header row plus one row per record with a real body.
/// Records whose body is the "N/A" sentinel carry no usable creative copy
/// and are dropped. Returns the number of data rows written.
pub fn write_csv<W: Write>(records: &[AdRecord], out: W) -> csv::Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADER)?;

    let mut written = 0;
    for record in records {
        if record.body == NA {
            continue;
        }
        writer.serialize(record)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Run-stamped output path, e.g. `adpulse-2024-05-01-12-30-00.csv`.
pub fn export_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("adpulse-{}.csv", now.format("%Y-%m-%d-%H-%M-%S")))
}
