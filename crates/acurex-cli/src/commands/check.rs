use crate::commands::{load_report, print_json, Context};
use crate::util::render_table;
use acurex_core::ReportSummaryDto;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// CSV export to inspect
    pub input: PathBuf,
    /// Number of rows to preview
    #[arg(long, default_value_t = 10)]
    pub preview: usize,
    /// Also preview the uploaded table before cleaning
    #[arg(long)]
    pub show_input: bool,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let (input, report) = load_report(&args.input)?;

    if ctx.json {
        return print_json(&ReportSummaryDto::new(&report, None));
    }

    println!("Uploaded rows: {}", report.original_rows);
    if args.show_input && args.preview > 0 && !input.is_empty() {
        println!();
        print!("{}", render_table(&input, args.preview));
        println!();
    }
    if report.diagnostics.is_empty() {
        println!("No issues found");
    } else {
        println!("Issues:");
        for diagnostic in &report.diagnostics {
            println!("- {}", diagnostic);
        }
    }
    println!("Cleaned rows: {}", report.final_rows);

    if args.preview > 0 && !report.table.is_empty() {
        println!();
        print!("{}", render_table(&report.table, args.preview));
    }
    Ok(())
}
