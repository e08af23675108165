// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `logsense.rs`.

use crate::printer::printers::{
    color_level,
    print_colored,
    Color,
    WriteColor,
    COLOR_DEFAULT,
    COLOR_ERROR,
    COLOR_WARNING,
};
use crate::readers::logparser::SummaryLogParser;
use crate::readers::summary::Summary;

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";
const OPT_SUMMARY_PRINT_INDENT2: &str = "      ";

/// Width of the label column.
const WIDTH_LABEL: usize = 16;

fn print_label<W: WriteColor>(
    out: &mut W,
    label: &str,
) -> std::io::Result<()> {
    let text = format!("{}{:<WIDTH_LABEL$}: ", OPT_SUMMARY_PRINT_INDENT1, label);
    print_colored(COLOR_DEFAULT, text.as_bytes(), out)
}

fn print_line<W: WriteColor>(
    out: &mut W,
    color: Color,
    label: &str,
    value: &str,
) -> std::io::Result<()> {
    print_label(out, label)?;
    print_colored(color, value.as_bytes(), out)?;
    print_colored(COLOR_DEFAULT, b"\n", out)
}

fn print_ranked<W: WriteColor>(
    out: &mut W,
    color: Color,
    label: &str,
    ranked: &[(String, u64)],
) -> std::io::Result<()> {
    if ranked.is_empty() {
        return print_line(out, COLOR_DEFAULT, label, "(none)");
    }
    print_label(out, label)?;
    print_colored(COLOR_DEFAULT, b"\n", out)?;
    for (rank, (key, count)) in ranked.iter().enumerate() {
        let text = format!("{}{:>2}. {} ({})\n", OPT_SUMMARY_PRINT_INDENT2, rank + 1, key, count);
        print_colored(color, text.as_bytes(), out)?;
    }

    Ok(())
}

/// Print a colored overview of `summary` to `out`.
///
/// `summarylogparser` adds line statistics if passed.
pub fn print_summary<W: WriteColor>(
    out: &mut W,
    summary: &Summary,
    source_file: &str,
    summarylogparser: Option<&SummaryLogParser>,
) -> std::io::Result<()> {
    print_colored(COLOR_DEFAULT, format!("Summary of {:?}\n", source_file).as_bytes(), out)?;
    print_line(out, COLOR_DEFAULT, "entries", &summary.total_entries.to_string())?;
    for (level, count) in summary.levels_by_count().iter() {
        let value = format!("{} ({})", count, summary.percent_string(*count));
        print_line(out, color_level(level), level, &value)?;
    }
    print_line(out, COLOR_DEFAULT, "modules", &summary.module_counts.len().to_string())?;
    let time_range: String = if summary.time_range.is_available() {
        format!("{} … {}", summary.time_range.start(), summary.time_range.end())
    } else {
        String::from(summary.time_range.start())
    };
    print_line(out, COLOR_DEFAULT, "time range", &time_range)?;
    print_ranked(out, COLOR_ERROR, "top errors", &summary.error_types)?;
    print_ranked(out, COLOR_WARNING, "top warnings", &summary.warning_types)?;
    if let Some(slp) = summarylogparser {
        let value = format!(
            "{} (blank {}, trace {}, dropped {})",
            slp.LogParser_lines, slp.LogParser_lines_blank, slp.LogParser_lines_trace, slp.LogParser_lines_dropped,
        );
        let color = if slp.LogParser_lines_dropped > 0 { COLOR_WARNING } else { COLOR_DEFAULT };
        print_line(out, color, "lines", &value)?;
    }

    Ok(())
}
