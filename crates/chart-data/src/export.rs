// File: crates/chart-data/src/export.rs
// Summary: CSV export of derived chart data, one row per point with its tooltip heading.

use std::io;

use crate::builder::ChartData;
use crate::error::{Error, Result};
use crate::options::tooltip_title;

pub fn write_csv<W: io::Write>(data: &ChartData, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["dataset", "label", "x", "y", "tooltip"])?;
    for dataset in &data.datasets {
        for (i, point) in dataset.data.iter().enumerate() {
            // flat labels pair with points by position, grouped points carry their x
            let label = match data.labels.get(i) {
                Some(label) if !data.grouped => label.to_string(),
                _ => point.x.to_string(),
            };
            let y = point.y.to_string();
            let tooltip = tooltip_title(&y, &label);
            wtr.write_record([
                dataset.label.as_str(),
                label.as_str(),
                point.x.to_string().as_str(),
                y.as_str(),
                tooltip.as_str(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(data: &ChartData) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(data, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
