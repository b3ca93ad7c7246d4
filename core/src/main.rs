use clap::Parser;
use dicomtab_core::cli::prompt::prompt_for_directory;
use dicomtab_core::cli::{Cli, OutputFormat};
use dicomtab_core::{export_table, DicomtabError, Pipeline, ResultTable, RunOutcome, TextReport};
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DicomtabError> {
    let directory = resolve_directory(cli)?;
    info!("Processing directory: {}", directory.display());

    let table = match Pipeline::new().run(&directory) {
        RunOutcome::Assembled(table) => table,
        RunOutcome::Empty => {
            println!("Processing aborted. No valid DICOM files were found.");
            return Ok(());
        }
    };

    if !cli.no_preview {
        output_table(&table, &cli.format)?;
    }
    println!("Total rows: {}", table.len());

    let path = export_table(&table, &cli.output_dir, &cli.output_file)?;
    println!("Data saved to: {}", path.display());

    Ok(())
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn resolve_directory(cli: &Cli) -> Result<PathBuf, DicomtabError> {
    match &cli.directory {
        Some(dir) if dir.is_dir() => Ok(dir.clone()),
        Some(dir) => Err(DicomtabError::InvalidDirectory(dir.clone())),
        None => {
            let stdin = io::stdin();
            prompt_for_directory(stdin.lock(), io::stdout())
        }
    }
}

fn output_table(table: &ResultTable, format: &OutputFormat) -> Result<(), DicomtabError> {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(table));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                println!("{}", output_json(table)?);
            }
            #[cfg(not(feature = "json"))]
            {
                return Err(DicomtabError::FeatureDisabled {
                    format: "JSON",
                    feature: "json",
                });
            }
        }
    }
    Ok(())
}

#[cfg(feature = "json")]
fn output_json(table: &ResultTable) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct RowJson<'a> {
        file_path: String,
        attributes: Vec<CellJson<'a>>,
        average_intensity: Option<f64>,
        average_intensity_text: String,
    }

    #[derive(Serialize)]
    struct CellJson<'a> {
        label: &'static str,
        value: &'a str,
    }

    let rows: Vec<RowJson> = table
        .rows()
        .iter()
        .map(|row| RowJson {
            file_path: row.source().display().to_string(),
            attributes: row
                .attributes
                .iter()
                .map(|(field, value)| CellJson {
                    label: field.label(),
                    value,
                })
                .collect(),
            average_intensity: row.intensity.value(),
            average_intensity_text: row.intensity.to_string(),
        })
        .collect();

    serde_json::to_string_pretty(&rows)
}
