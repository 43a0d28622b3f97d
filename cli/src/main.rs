use clap::Parser;
use jumplister_core::normalize::normalize_jumplist;
use jumplister_core::output::{
    csv::export_csv, dump::export_dump, html::export_html, json::export_json, xml::export_xml,
};
use jumplister_core::runner::{RunConfig, RunInput, RunResults, run};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::fs::File;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Jump list file to process
    #[clap(short, long, value_parser)]
    file: Option<String>,

    /// Directory to scan recursively for jump list files
    #[clap(short, long, value_parser)]
    directory: Option<String>,

    /// Process every discovered file instead of only *.*Destinations-ms
    #[clap(long)]
    all: bool,

    /// Write tab separated records to the provided file
    #[clap(long, value_parser)]
    csv: Option<String>,

    /// Write one JSON file per artifact into the provided directory
    #[clap(long, value_parser)]
    json: Option<String>,

    /// Indent JSON output
    #[clap(long)]
    pretty: bool,

    /// Write one XML file per artifact into the provided directory
    #[clap(long, value_parser)]
    xml: Option<String>,

    /// Write a single XHTML report into the provided directory
    #[clap(long, value_parser)]
    html: Option<String>,

    /// Dump raw embedded shortcuts under the provided directory
    #[clap(long, value_parser)]
    dump_to: Option<String>,

    /// Suppress per file reporting
    #[clap(short, long)]
    quiet: bool,

    /// Write log messages to the provided file
    #[clap(long, value_parser)]
    log_file: Option<String>,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.log_file.as_deref());

    let input = match (&args.file, &args.directory) {
        (Some(file), None) => RunInput::File(file.clone()),
        (None, Some(directory)) => RunInput::Directory(directory.clone()),
        _ => {
            println!("[jumplister] Provide either a file (-f) or a directory (-d)");
            return;
        }
    };

    let config = RunConfig {
        input,
        all_files: args.all,
    };
    let results = match run(&config) {
        Ok(results) => results,
        Err(err) => {
            println!("[jumplister] Could not process input: {err}");
            return;
        }
    };

    if !args.quiet {
        for artifact in &results.artifacts {
            println!(
                "Processing {} -- {} shortcut entries",
                artifact.source_path(),
                artifact.shortcut_count()
            );
        }
    }

    export(&args, &results);

    println!(
        "Processed {} out of {} files in {:.4} seconds",
        results.artifacts.len(),
        results.discovered,
        results.duration.as_secs_f64()
    );
    if !results.failures.is_empty() {
        println!("Failed files:");
        for (path, reason) in &results.failures {
            println!("  {path}: {reason}");
        }
    }
}

/// Log to the provided file if given, otherwise to the console. Warnings and up only
fn setup_logging(log_file: Option<&str>) {
    if let Some(path) = log_file {
        match File::create(path) {
            Ok(file) => {
                let _ = WriteLogger::init(LevelFilter::Warn, Config::default(), file);
                return;
            }
            Err(err) => println!("[jumplister] Could not create log file {path}: {err:?}"),
        }
    }
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}

/// Fan the run results out to every requested sink. A failing sink is reported and skipped
fn export(args: &Args, results: &RunResults) {
    if let Some(csv_path) = &args.csv {
        match export_csv(&results.records, csv_path) {
            Ok(()) => println!("Records written to {csv_path}"),
            Err(err) => println!("[jumplister] CSV export failed: {err}"),
        }
    }

    if let Some(json_dir) = &args.json {
        for artifact in &results.artifacts {
            if let Err(err) = export_json(artifact, json_dir, args.pretty) {
                println!(
                    "[jumplister] JSON export failed for {}: {err}",
                    artifact.source_path()
                );
            }
        }
    }

    if let Some(xml_dir) = &args.xml {
        for artifact in &results.artifacts {
            let records = normalize_jumplist(artifact);
            if let Err(err) = export_xml(&records, artifact.source_path(), xml_dir) {
                println!(
                    "[jumplister] XML export failed for {}: {err}",
                    artifact.source_path()
                );
            }
        }
    }

    if let Some(html_dir) = &args.html {
        match export_html(&results.records, html_dir) {
            Ok(path) => println!("Report written to {path}"),
            Err(err) => println!("[jumplister] HTML export failed: {err}"),
        }
    }

    if let Some(dump_dir) = &args.dump_to {
        for artifact in &results.artifacts {
            if let Err(err) = export_dump(artifact, dump_dir) {
                println!(
                    "[jumplister] Shortcut dump failed for {}: {err}",
                    artifact.source_path()
                );
            }
        }
    }
}
