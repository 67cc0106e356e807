use crate::cli::PocketArgs;
use crate::config::resolve_pocket_params;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sitekit::core::io::{dots, xyz};
use sitekit::workflows::pocket::find_water_and_pocket;
use sitekit::workflows::progress::{Progress, ProgressReporter};
use tracing::info;

/// Number of carving passes the workflow reports, pocket chain plus water
/// chain.
const TOTAL_PASSES: u64 = 5;

pub fn run(args: PocketArgs) -> Result<()> {
    let params = resolve_pocket_params(&args)?;
    let molecule = xyz::read_xyz(&args.input)?;
    let surface = dots::read_dots(&args.surface)?;
    info!(
        atoms = molecule.len(),
        surface_points = surface.len(),
        "inputs loaded"
    );

    let bar = ProgressBar::new(TOTAL_PASSES);
    bar.set_style(
        ProgressStyle::with_template("[{bar:30}] {pos}/{len} {msg}")
            .map_err(|e| CliError::Other(e.into()))?,
    );

    let reporter = ProgressReporter::with_callback(Box::new({
        let bar = bar.clone();
        move |event| match event {
            Progress::PassStart { name, points } => {
                bar.set_message(format!("{name} ({points} points)"));
            }
            Progress::PassFinish { .. } => bar.inc(1),
            Progress::Message(text) => bar.println(text),
        }
    }));

    let regions = find_water_and_pocket(&molecule, &surface, &params, &reporter)?;
    bar.finish_and_clear();

    std::fs::create_dir_all(&args.output_dir)?;
    let pocket_path = args.output_dir.join("pocket.dots");
    let water_path = args.output_dir.join("water.dots");
    dots::write_dots(&pocket_path, &regions.pocket)?;
    dots::write_dots(&water_path, &regions.water)?;

    println!(
        "{} pocket point(s) -> {}",
        regions.pocket.len(),
        pocket_path.display()
    );
    println!(
        "{} water point(s)  -> {}",
        regions.water.len(),
        water_path.display()
    );
    Ok(())
}
