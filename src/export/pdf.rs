use chrono::Local;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::export::{ExportError, ExportFile};
use crate::model::RouteSummary;

pub const FILENAME: &str = "route_information.pdf";
pub const MIME: &str = "application/pdf";

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_MM: f32 = 10.0;

const TITLE_PT: f32 = 16.0;
const BODY_PT: f32 = 12.0;

/// A4 text layout: title, summary block, then one line per instruction,
/// breaking onto fresh pages as needed.
pub fn render(summary: &RouteSummary) -> Result<ExportFile, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Route Information",
        Mm(PAGE_W_MM),
        Mm(PAGE_H_MM),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y_mm: MARGIN_MM,
    };

    cursor.line(&font, TITLE_PT, "Route Information");
    cursor.line(
        &font,
        BODY_PT,
        &format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")),
    );
    cursor.line(
        &font,
        BODY_PT,
        &format!("Total Distance: {}", summary.distance_text()),
    );
    cursor.line(
        &font,
        BODY_PT,
        &format!("Estimated Time: {}", summary.duration_text),
    );
    cursor.line(
        &font,
        BODY_PT,
        &format!("Average Speed: {}", summary.speed_text()),
    );
    cursor.line(
        &font,
        BODY_PT,
        &format!("Transport Mode: {}", summary.mode),
    );

    cursor.line(&font, BODY_PT, "Instructions:");
    for step in &summary.steps {
        let dist = step
            .distance_m
            .map(|m| format!(" {:.2} km", m / 1000.0))
            .unwrap_or_default();
        let text = format!("{} {}{}", step.glyph, step.text, dist);

        if cursor.y_mm + LINE_MM > PAGE_H_MM - MARGIN_MM {
            let (p, l) = doc.add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), "Layer 1");
            cursor.layer = doc.get_page(p).get_layer(l);
            cursor.y_mm = MARGIN_MM;
        }
        cursor.line(&font, BODY_PT, &text);
    }

    Ok(ExportFile {
        bytes: doc.save_to_bytes()?,
        filename: FILENAME.to_string(),
        mime: MIME,
    })
}

struct Cursor {
    layer: PdfLayerReference,
    /// Distance from the top edge; printpdf's origin is bottom-left.
    y_mm: f32,
}

impl Cursor {
    fn line(&mut self, font: &IndirectFontRef, size_pt: f32, text: &str) {
        self.layer.use_text(
            text,
            size_pt,
            Mm(MARGIN_MM),
            Mm(PAGE_H_MM - self.y_mm - LINE_MM),
            font,
        );
        self.y_mm += LINE_MM;
    }
}
