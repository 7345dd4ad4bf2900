use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use sidediff::cli::{build_options, Args, OutputFormat};
use sidediff::compare::compare_files;
use sidediff::render;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));

    let opts = build_options(&args)?;
    let comparison = compare_files(&args.base_file, &args.target_file, &opts)?;

    match opts.format {
        OutputFormat::SideBySide => {
            print!(
                "{}",
                render::side_by_side(&comparison, opts.palette, opts.width)
            );
            println!();
            println!("{}", render::similarity_line(&comparison));
        }
        OutputFormat::Summary => print!("{}", render::summary(&comparison)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&comparison)
                .context("Failed to serialize comparison")?;
            println!("{json}");
        }
    }

    Ok(())
}
