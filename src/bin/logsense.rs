// src/bin/logsense.rs

//! Driver program _logsense_ drives the [_lslib_].
//!
//! Processes user-passed command-line arguments, then
//!
//! 1. validates the log file path
//! 2. reads the entire log file
//! 3. parses the lines into [`LogEntry`s] with a [`LogParser`]
//! 4. folds the entries into one [`Summary`]
//! 5. renders and writes one report per requested [`ExportType`]
//!
//! Each report is rendered on its own thread. The threads share the one
//! `Summary` and each owns its output file. Each thread sends its outcome
//! back to the main thread over a [channel].
//!
//! `logsense.rs` should be the main thread and the only thread that prints.
//!
//! [_lslib_]: lslib
//! [`LogEntry`s]: lslib::data::logentry::LogEntry
//! [`LogParser`]: lslib::readers::logparser::LogParser
//! [`Summary`]: lslib::readers::summary::Summary
//! [`ExportType`]: lslib::report::ExportType
//! [channel]: self::ChanSendReport

#![allow(non_camel_case_types)]

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;
use std::str::FromStr;
use std::thread;

use ::anyhow::Context;
use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;
use ::itertools::Itertools; // for `unique`
use ::lslib::common::{
    FPath,
    TOP_N_DEFAULT,
};
use ::lslib::data::logentry::LogEntries;
use ::lslib::debug::printers::{
    e_err,
    e_wrn,
};
use ::lslib::printer::printers::{
    print_colored_stderr,
    print_colored_stdout,
    ColorChoice,
    COLOR_ERROR,
    COLOR_SUCCESS,
    COLOR_WARNING,
};
use ::lslib::printer::summary::print_summary;
use ::lslib::readers::helpers::{
    read_log_file,
    validate_log_path,
    UsageError,
};
use ::lslib::readers::logparser::{
    split_lines,
    LogParser,
    SummaryLogParser,
};
use ::lslib::readers::summary::{
    summarize_top,
    Summary,
};
use ::lslib::report::{
    render_to_path,
    ExportType,
    RenderError,
};
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// --------------------
// command-line parsing

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    r#"A log file must have file name extension ".log".
Each log entry begins with a header line of the form

    YYYY-MM-DD HH:MM:SS,mmm LEVEL module - message

Lines after a header line, up to the next line beginning with a date, are
the stack trace of that entry.
Other lines are ignored.

Reports are written next to the log file. For log file "app.log" and
EXPORT "html" the report is "app_report.html".

EXPORT may be passed more than once, e.g. "-e html -e json".

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "logsense",
    // write expanded information for the `--version` output
    version = concatcp!(
        "\n",
        "Version: ", env!("CARGO_PKG_VERSION"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the log file. Must end with ".log".
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    path: String,

    /// Report type to export: html, csv, json, or pdf.
    /// May be passed more than once.
    #[clap(
        short = 'e',
        long = "export",
        required = true,
        verbatim_doc_comment,
        value_parser = cli_parse_export,
    )]
    exports: Vec<ExportType>,

    /// Count of entries in the "top error types" and "top warning types"
    /// breakdowns.
    #[clap(
        long = "top",
        verbatim_doc_comment,
        default_value_t = TOP_N_DEFAULT,
        value_parser = cli_parse_top,
    )]
    top: usize,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of the log file to stdout.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// `clap` argument parser for `--export`.
fn cli_parse_export(export: &str) -> std::result::Result<ExportType, String> {
    ExportType::from_str(export).map_err(|err| err.to_string())
}

/// `clap` argument parser for `--top`.
fn cli_parse_top(top: &str) -> std::result::Result<usize, String> {
    match top.parse::<usize>() {
        Ok(0) => Err(String::from("--top must be 1 or more")),
        Ok(val) => Ok(val),
        Err(err) => Err(format!("Unable to parse a number for --top {:?} {}", top, err)),
    }
}

/// Processed user-passed CLI arguments.
#[derive(Debug)]
struct CLI_Config {
    path: FPath,
    path_input: PathBuf,
    exports: Vec<ExportType>,
    top: usize,
    color_choice: ColorChoice,
    summary: bool,
}

/// Process user-passed CLI argument strings into expected types.
///
/// Checks run in order and the first failure is returned.
fn cli_process_args(args: CLI_Args) -> std::result::Result<CLI_Config, UsageError> {
    defn!("args {:?}", args);

    let path_input: PathBuf = validate_log_path(&args.path)?;

    // the same report type twice would be two threads writing one file
    let exports: Vec<ExportType> = args
        .exports
        .into_iter()
        .unique()
        .collect();

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    let config = CLI_Config {
        path: args.path,
        path_input,
        exports,
        top: args.top,
        color_choice,
        summary: args.summary,
    };
    defx!("{:?}", config);

    Ok(config)
}

// --------------
// report threads

/// Outcome of one report thread.
type ChanDatum = (ExportType, PathBuf, Result<(), RenderError>);
/// Report threads send a [`ChanDatum`] to the main thread.
type ChanSendReport = ::crossbeam_channel::Sender<ChanDatum>;
type ChanRecvReport = ::crossbeam_channel::Receiver<ChanDatum>;

/// Thread entry point for rendering and writing one report.
fn exec_report_thread(
    chan_send: ChanSendReport,
    export_type: ExportType,
    summary: &Summary,
    source_file: &str,
    path_report: PathBuf,
) {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(2));
    }
    defn!("({:?}, {:?})", export_type, path_report);
    let result = render_to_path(export_type, summary, source_file, &path_report);
    defo!("result.is_ok() {}", result.is_ok());
    match chan_send.send((export_type, path_report, result)) {
        Ok(_) => {}
        Err(_err) => {
            ::lslib::de_err!("chan_send.send(…) failed {}", _err);
        }
    }
    defx!();
}

/// Render and write every report in `exports`, one thread per report.
///
/// Prints the outcome of each. Returns `true` if every report was written.
fn process_reports(
    exports: &[ExportType],
    summary: &Summary,
    source_file: &str,
    path_input: &Path,
    color_choice: ColorChoice,
) -> bool {
    defn!("({:?})", exports);
    let (chan_send, chan_recv): (ChanSendReport, ChanRecvReport) =
        ::crossbeam_channel::bounded(exports.len().max(1));
    let mut thread_err_count: usize = 0;

    thread::scope(|scope| {
        for export_type in exports.iter() {
            let export_type: ExportType = *export_type;
            let path_report: PathBuf = export_type.report_path(path_input);
            let chan_send_thread = chan_send.clone();
            match thread::Builder::new()
                .name(format!("report-{}", export_type))
                .spawn_scoped(scope, move || {
                    exec_report_thread(chan_send_thread, export_type, summary, source_file, path_report)
                })
            {
                Ok(_joinhandle) => {}
                Err(err) => {
                    thread_err_count += 1;
                    e_err!("thread::Builder::spawn_scoped() for {} report failed {}", export_type, err);
                }
            }
        }
    });
    // all senders dropped so `chan_recv.iter()` ends
    drop(chan_send);

    let mut success: bool = thread_err_count == 0;
    for (export_type, path_report, result) in chan_recv.iter() {
        match result {
            Ok(_) => {
                let msg = format!("Wrote {} report {:?}\n", export_type, path_report);
                let _ = print_colored_stdout(COLOR_SUCCESS, Some(color_choice), msg.as_bytes());
            }
            Err(err) if err.is_backend_unavailable() => {
                success = false;
                e_wrn!("{}; no {} report was written", err, export_type);
                let msg = format!("Skipped {} report\n", export_type);
                let _ = print_colored_stderr(COLOR_WARNING, Some(color_choice), msg.as_bytes());
            }
            Err(err) => {
                success = false;
                e_err!("{} report {:?}: {}", export_type, path_report, err);
            }
        }
    }
    defx!("return {}", success);

    success
}

/// Read and parse the log file.
fn read_and_parse(path_input: &Path) -> anyhow::Result<(LogEntries, SummaryLogParser)> {
    let text: String = read_log_file(path_input)
        .with_context(|| format!("failed to read log file {:?}", path_input))?;
    let lines: Vec<&str> = split_lines(&text);
    let mut logparser = LogParser::new();
    let entries: LogEntries = logparser.parse_lines(&lines);
    defo!("{:?}", logparser);

    Ok((entries, logparser.summary()))
}

/// Process the user-passed command-line arguments.
/// Run the pipeline.
/// Determine a process return code.
pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let config: CLI_Config = match cli_process_args(CLI_Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            e_err!("{}", err);
            defx!("usage error");
            return ExitCode::FAILURE;
        }
    };

    let (entries, summarylogparser) = match read_and_parse(&config.path_input) {
        Ok(val) => val,
        Err(err) => {
            let msg = format!("{:#}\n", err);
            let _ = print_colored_stderr(COLOR_ERROR, Some(config.color_choice), msg.as_bytes());
            defx!("read error");
            return ExitCode::FAILURE;
        }
    };
    let summary: Summary = summarize_top(&entries, config.top);

    if config.summary {
        let mut stdout = ::termcolor::StandardStream::stdout(config.color_choice);
        if let Err(err) = print_summary(&mut stdout, &summary, &config.path, Some(&summarylogparser)) {
            e_err!("printing summary failed {}", err);
        }
    }

    let ret: bool = process_reports(
        &config.exports,
        &summary,
        &config.path,
        &config.path_input,
        config.color_choice,
    );

    let exitcode = if ret { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
