use super::load_structure;
use crate::cli::EnergyArgs;
use crate::error::Result;
use sitekit::core::forcefield::energy::BondScorer;
use sitekit::core::forcefield::params::Forcefield;
use std::path::Path;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    let forcefield = load_forcefield(args.params.as_deref())?;
    let (molecule, distances, graph) = load_structure(&args.input, args.covalent_factor)?;

    let report = BondScorer::new(&molecule, &forcefield).score(
        &graph,
        &distances,
        args.bond_order,
    )?;
    info!(
        bonds = report.terms.len(),
        total = report.total,
        "bond energy computed"
    );

    println!(
        "{:>7}  {:>9} {:>9} {:>10} {:>12}",
        "bond", "r (Å)", "r0 (Å)", "k", "E (kcal/mol)"
    );
    for term in &report.terms {
        println!(
            "{:>7}  {:>9.3} {:>9.3} {:>10.2} {:>12.4}",
            term.bond.to_string(),
            term.current_length,
            term.natural_length,
            term.force_constant,
            term.energy
        );
    }
    println!("\ntotal bond energy: {:.4} kcal/mol", report.total);

    println!("\n{:>4}  {:>10} {:>10} {:>10}  {:>10}", "atom", "dE/dx", "dE/dy", "dE/dz", "|g|");
    for (index, g) in report.gradient.iter().enumerate() {
        println!(
            "{:>3} {}  {:>10.4} {:>10.4} {:>10.4}  {:>10.4}",
            index,
            molecule.atoms()[index].element,
            g.x,
            g.y,
            g.z,
            g.norm()
        );
    }
    Ok(())
}

fn load_forcefield(path: Option<&Path>) -> Result<Forcefield> {
    let Some(path) = path else {
        return Ok(Forcefield::default());
    };
    let forcefield = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Forcefield::load_toml(path)?,
        _ => Forcefield::load_par(path)?,
    };
    Ok(forcefield)
}
