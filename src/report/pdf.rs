// src/report/pdf.rs

//! PDF report; a paginated, text-only PDF 1.4 document.
//!
//! Tables are laid out as fixed-width text in the Courier font, one of the
//! standard 14 PDF fonts, so no font is embedded.
//!
//! Content, in order:
//!
//! * summary statistics table
//! * level distribution table
//! * top error types table
//! * top warning types table
//!
//! The writer is built only with cargo feature `pdf`. Without it, [`render`]
//! returns [`RenderError::BackendUnavailable`].
//!
//! [`RenderError::BackendUnavailable`]: crate::report::RenderError::BackendUnavailable

use crate::readers::summary::Summary;
#[allow(unused_imports)]
use crate::report::{
    ExportType,
    RenderError,
};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

cfg_if::cfg_if! {
    if #[cfg(feature = "pdf")] {
        pub const BACKEND_AVAILABLE: bool = true;

        /// Render `summary` as a PDF document.
        pub fn render(
            summary: &Summary,
            source_file: &str,
        ) -> Result<Vec<u8>, RenderError> {
            defn!();
            let lines: Vec<String> = report_lines(summary, source_file);
            let bytes: Vec<u8> = PdfWriter::new().write_document(&lines);
            defx!("{} lines, bytes.len() {}", lines.len(), bytes.len());

            Ok(bytes)
        }
    } else {
        pub const BACKEND_AVAILABLE: bool = false;

        /// This build has no PDF writer.
        pub fn render(
            _summary: &Summary,
            _source_file: &str,
        ) -> Result<Vec<u8>, RenderError> {
            defñ!("BackendUnavailable");
            Err(RenderError::BackendUnavailable(ExportType::Pdf))
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// text layout
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Width in characters of the key column of a table.
const KEY_WIDTH: usize = 48;
/// Width in characters of a number column of a table.
const NUM_WIDTH: usize = 10;

/// Cut `text` to at most `width` characters, marking a cut with `"..."`.
pub fn fit(
    text: &str,
    width: usize,
) -> String {
    if text.chars().count() <= width {
        return String::from(text);
    }
    let kept: String = text
        .chars()
        .take(width.saturating_sub(3))
        .collect();

    format!("{}...", kept)
}

fn rule() -> String {
    "-".repeat(KEY_WIDTH + NUM_WIDTH * 2)
}

/// The lines of text of the document, before pagination.
pub fn report_lines(
    summary: &Summary,
    source_file: &str,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(64);

    lines.push(String::from("Log Analysis Report"));
    lines.push(format!("Source: {}", fit(source_file, KEY_WIDTH + NUM_WIDTH * 2 - 8)));
    lines.push(String::new());

    lines.push(String::from("Summary Statistics"));
    lines.push(rule());
    let stats: [(&str, String); 6] = [
        ("Total Entries", summary.total_entries.to_string()),
        ("Errors", summary.error_count.to_string()),
        ("Warnings", summary.warning_count.to_string()),
        ("Info", summary.info_count.to_string()),
        ("First Entry", String::from(summary.time_range.start())),
        ("Last Entry", String::from(summary.time_range.end())),
    ];
    for (label, value) in stats.iter() {
        lines.push(format!("{:<width$}{:>vwidth$}", label, value, width = KEY_WIDTH, vwidth = NUM_WIDTH * 2));
    }
    lines.push(String::new());

    lines.push(String::from("Level Distribution"));
    lines.push(format!("{:<KEY_WIDTH$}{:>NUM_WIDTH$}{:>NUM_WIDTH$}", "Level", "Count", "Percent"));
    lines.push(rule());
    for (level, count) in summary.levels_by_count().iter() {
        lines.push(format!(
            "{:<KEY_WIDTH$}{:>NUM_WIDTH$}{:>NUM_WIDTH$}",
            fit(level, KEY_WIDTH - 1),
            count,
            summary.percent_string(*count)
        ));
    }
    lines.push(String::new());

    for (title, column, ranked) in [
        ("Top Error Types", "Error Type", &summary.error_types),
        ("Top Warning Types", "Warning Type", &summary.warning_types),
    ] {
        lines.push(String::from(title));
        lines.push(format!("{:<KEY_WIDTH$}{:>NUM_WIDTH$}", column, "Count"));
        lines.push(rule());
        if ranked.is_empty() {
            lines.push(String::from("(none)"));
        }
        for (key, count) in ranked.iter() {
            lines.push(format!("{:<KEY_WIDTH$}{:>NUM_WIDTH$}", fit(key, KEY_WIDTH - 1), count));
        }
        lines.push(String::new());
    }

    lines
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PDF writing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// US Letter, in points.
pub const PAGE_WIDTH: u32 = 612;
pub const PAGE_HEIGHT: u32 = 792;
const MARGIN: u32 = 54;
const FONT_SIZE: u32 = 9;
const LINE_HEIGHT: u32 = 12;
/// Count of text lines that fit on one page.
pub const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LINE_HEIGHT) as usize;

/// Escape a PDF literal string. Characters outside printable ASCII become
/// `'?'`; the standard fonts cannot show them without an encoding.
pub fn pdf_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }

    escaped
}

/// Writes PDF objects and remembers the byte offset of each for the
/// cross-reference table.
#[cfg(feature = "pdf")]
struct PdfWriter {
    buffer: Vec<u8>,
    /// byte offset of object `n` is at index `n - 1`
    offsets: Vec<usize>,
}

#[cfg(feature = "pdf")]
impl PdfWriter {
    const OBJ_CATALOG: usize = 1;
    const OBJ_PAGES: usize = 2;
    const OBJ_FONT: usize = 3;
    /// first page object; each page is a page object then a content object
    const OBJ_FIRST_PAGE: usize = 4;

    fn new() -> PdfWriter {
        PdfWriter {
            buffer: Vec::with_capacity(8192),
            offsets: Vec::new(),
        }
    }

    fn object(
        &mut self,
        body: &[u8],
    ) {
        let number = self.offsets.len() + 1;
        self.offsets.push(self.buffer.len());
        self.buffer.extend_from_slice(format!("{} 0 obj\n", number).as_bytes());
        self.buffer.extend_from_slice(body);
        self.buffer.extend_from_slice(b"\nendobj\n");
    }

    fn content_stream(lines: &[String]) -> Vec<u8> {
        let mut stream = String::with_capacity(lines.len() * 64);
        stream.push_str(&format!("BT\n/F1 {} Tf\n{} TL\n", FONT_SIZE, LINE_HEIGHT));
        stream.push_str(&format!("{} {} Td\n", MARGIN, PAGE_HEIGHT - MARGIN));
        for line in lines.iter() {
            stream.push_str(&format!("({}) Tj T*\n", pdf_escape(line)));
        }
        stream.push_str("ET");

        let mut body: Vec<u8> = Vec::with_capacity(stream.len() + 48);
        body.extend_from_slice(format!("<< /Length {} >>\nstream\n", stream.len()).as_bytes());
        body.extend_from_slice(stream.as_bytes());
        body.extend_from_slice(b"\nendstream");

        body
    }

    /// Write the complete document of `lines`; at least one page even if
    /// `lines` is empty.
    fn write_document(
        mut self,
        lines: &[String],
    ) -> Vec<u8> {
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![lines]
        } else {
            lines.chunks(LINES_PER_PAGE).collect()
        };
        let page_objs: Vec<usize> = (0..pages.len())
            .map(|at| PdfWriter::OBJ_FIRST_PAGE + at * 2)
            .collect();

        self.buffer.extend_from_slice(b"%PDF-1.4\n");
        self.object(format!("<< /Type /Catalog /Pages {} 0 R >>", PdfWriter::OBJ_PAGES).as_bytes());
        let kids: Vec<String> = page_objs
            .iter()
            .map(|n| format!("{} 0 R", n))
            .collect();
        self.object(format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()).as_bytes());
        self.object(b"<< /Type /Font /Subtype /Type1 /BaseFont /Courier >>");
        for (at, page_lines) in pages.iter().enumerate() {
            let page = format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                PdfWriter::OBJ_PAGES,
                PAGE_WIDTH,
                PAGE_HEIGHT,
                PdfWriter::OBJ_FONT,
                page_objs[at] + 1,
            );
            self.object(page.as_bytes());
            let content = PdfWriter::content_stream(page_lines);
            self.object(&content);
        }
        debug_assert_eq!(self.offsets.len(), 3 + pages.len() * 2);

        let xref_offset = self.buffer.len();
        let count_objs = self.offsets.len() + 1;
        self.buffer.extend_from_slice(format!("xref\n0 {}\n", count_objs).as_bytes());
        self.buffer.extend_from_slice(b"0000000000 65535 f \n");
        for offset in self.offsets.iter() {
            self.buffer.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        self.buffer.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                count_objs,
                PdfWriter::OBJ_CATALOG,
                xref_offset
            )
            .as_bytes(),
        );

        self.buffer
    }
}
