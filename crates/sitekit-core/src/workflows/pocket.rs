use crate::core::models::molecule::Molecule;
use crate::core::surface::{SurfaceError, carve, carve_around_atoms, generate_grid};
use crate::workflows::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Minimum separation kept between surviving water points and the pocket
/// set; the final water pass carves against the pocket result at exactly
/// this radius, which is what makes the two regions disjoint.
const WATER_POCKET_SEPARATION: f64 = 1.0;

/// Tunables of the pocket/water search. The defaults are the radii the
/// pass ordering was calibrated for; later passes assume earlier ones
/// already removed atom-proximal points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PocketParams {
    /// Solvation probe radius added to each atom's van der Waals radius.
    pub probe_radius: f64,
    /// Carve radius around accessible-surface points for the pocket pass.
    pub surface_radius: f64,
    /// Subtracted from `surface_radius` for the water pass, which keeps
    /// points closer to the exposed surface than the pocket pass does.
    pub water_surface_margin: f64,
    /// Lattice spacing of the pocket candidate grid.
    pub pocket_spacing: f64,
    /// Lattice spacing of the water candidate grid.
    pub water_spacing: f64,
    /// Bounding-box padding of the water candidate grid.
    pub water_buffer: f64,
}

impl Default for PocketParams {
    fn default() -> Self {
        Self {
            probe_radius: 1.4,
            surface_radius: 20.0,
            water_surface_margin: 4.4,
            pocket_spacing: 1.0,
            water_spacing: 3.0,
            water_buffer: 6.0,
        }
    }
}

/// The two point sets isolated by the full pipeline; disjoint by
/// construction of the final pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PocketRegions {
    pub pocket: Vec<Point3<f64>>,
    pub water: Vec<Point3<f64>>,
}

/// Isolates buried pocket points and nearby water points around a molecule.
///
/// `surface` is the externally supplied accessible-surface point cloud
/// ("pas"); generating it is the caller's concern. The pass ordering is
/// significant and matches the calibration of the default radii:
///
/// 1. pocket: fine lattice → solvent-exclusion carve → surface carve at
///    `surface_radius`;
/// 2. water: coarse buffered lattice → solvent-exclusion carve → surface
///    carve at `surface_radius - water_surface_margin` → carve against the
///    pocket result.
#[instrument(skip_all, name = "pocket_workflow")]
pub fn find_water_and_pocket(
    molecule: &Molecule,
    surface: &[Point3<f64>],
    params: &PocketParams,
    reporter: &ProgressReporter,
) -> Result<PocketRegions, SurfaceError> {
    let Some(bounds) = molecule.bounding_box() else {
        info!("empty molecule; nothing to carve");
        return Ok(PocketRegions::default());
    };

    info!(
        atoms = molecule.len(),
        surface_points = surface.len(),
        "starting pocket/water search"
    );

    let pocket = {
        let grid = generate_grid(&bounds, params.pocket_spacing, 0.0)?;
        debug!(points = grid.len(), "pocket lattice generated");

        reporter.report(Progress::PassStart {
            name: "pocket solvent exclusion",
            points: grid.len(),
        });
        let grid = carve_around_atoms(grid, molecule, params.probe_radius);
        reporter.report(Progress::PassFinish { points: grid.len() });

        reporter.report(Progress::PassStart {
            name: "pocket surface carve",
            points: grid.len(),
        });
        let grid = carve(grid, surface, params.surface_radius);
        reporter.report(Progress::PassFinish { points: grid.len() });
        grid
    };

    let water = {
        let grid = generate_grid(&bounds, params.water_spacing, params.water_buffer)?;
        debug!(points = grid.len(), "water lattice generated");

        reporter.report(Progress::PassStart {
            name: "water solvent exclusion",
            points: grid.len(),
        });
        let grid = carve_around_atoms(grid, molecule, params.probe_radius);
        reporter.report(Progress::PassFinish { points: grid.len() });

        reporter.report(Progress::PassStart {
            name: "water surface carve",
            points: grid.len(),
        });
        let grid = carve(
            grid,
            surface,
            params.surface_radius - params.water_surface_margin,
        );
        reporter.report(Progress::PassFinish { points: grid.len() });

        reporter.report(Progress::PassStart {
            name: "water/pocket separation",
            points: grid.len(),
        });
        let grid = carve(grid, &pocket, WATER_POCKET_SEPARATION);
        reporter.report(Progress::PassFinish { points: grid.len() });
        grid
    };

    info!(
        pocket_points = pocket.len(),
        water_points = water.len(),
        "pocket/water search finished"
    );
    Ok(PocketRegions { pocket, water })
}
