use crate::commands::{load_report, print_json, print_warnings, Context};
use crate::error::invalid_input;
use acurex_core::ReportSummaryDto;
use acurex_csv::{output_file_name, table_to_csv};
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// CSV export to clean
    pub input: PathBuf,
    /// Base name of the cleaned file; `.csv` is appended
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Print the cleaned CSV instead of writing a file
    #[arg(long, conflicts_with_all = ["name", "out_dir"])]
    pub stdout: bool,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    if ctx.json && args.stdout {
        return Err(invalid_input("--json cannot be combined with --stdout"));
    }

    let (_, report) = load_report(&args.input)?;
    let data = table_to_csv(&report.table)?;

    if args.stdout {
        print_warnings(&report);
        print!("{}", data);
        return Ok(());
    }

    // A blank --name falls through to the configured name.
    let name = args
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(&ctx.config.output_name);
    let file_name = output_file_name(Some(name));
    let out = match args.out_dir.or_else(|| ctx.config.output_dir.clone()) {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
            dir.join(file_name)
        }
        None => PathBuf::from(file_name),
    };

    fs::write(&out, data).with_context(|| format!("write cleaned file {}", out.display()))?;
    debug!(path = %out.display(), rows = report.final_rows, "cleaned file written");

    if ctx.json {
        return print_json(&ReportSummaryDto::new(
            &report,
            Some(out.display().to_string()),
        ));
    }

    print_warnings(&report);
    println!(
        "Cleaned {} of {} rows -> {}",
        report.final_rows,
        report.original_rows,
        out.display()
    );
    Ok(())
}
