use csv::WriterBuilder;

use crate::export::{ExportError, ExportFile};
use crate::model::RouteSummary;

pub const FILENAME: &str = "route.csv";
pub const MIME: &str = "text/csv";

/// One file: a field/value summary block, a separator record, then the
/// turn-by-turn table. Flexible widths because the two blocks differ.
pub fn render(summary: &RouteSummary) -> Result<ExportFile, ExportError> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record(["Distance", &summary.distance_text()])?;
    wtr.write_record(["Time", &summary.duration_text])?;
    wtr.write_record(["Average speed", &summary.speed_text()])?;
    wtr.write_record(["Mode", summary.mode.label()])?;
    wtr.write_record([""])?;

    wtr.write_record(["step", "icon", "instruction", "distance_km"])?;
    for (i, step) in summary.steps.iter().enumerate() {
        let dist = step
            .distance_m
            .map(|m| format!("{:.2}", m / 1000.0))
            .unwrap_or_default();
        wtr.write_record([
            (i + 1).to_string(),
            step.glyph.to_string(),
            step.text.clone(),
            dist,
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    Ok(ExportFile {
        bytes,
        filename: FILENAME.to_string(),
        mime: MIME,
    })
}
