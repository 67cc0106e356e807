use super::load_structure;
use crate::cli::BondsArgs;
use crate::error::Result;
use tracing::info;

pub fn run(args: BondsArgs) -> Result<()> {
    let (molecule, distances, graph) = load_structure(&args.input, args.covalent_factor)?;
    info!(
        atoms = molecule.len(),
        bonds = graph.bonds().len(),
        covalent_factor = args.covalent_factor,
        "bond graph built"
    );

    println!("{:>5} {:>5}  {:>10}", "i", "j", "length (Å)");
    for bond in graph.bonds() {
        let element_i = molecule.atoms()[bond.i].element;
        let element_j = molecule.atoms()[bond.j].element;
        println!(
            "{:>3} {} {:>3} {}  {:>10.3}",
            bond.i,
            element_i,
            bond.j,
            element_j,
            distances.get(bond.i, bond.j)
        );
    }
    println!(
        "\n{} bond(s) among {} atom(s) at covalent factor {}",
        graph.bonds().len(),
        molecule.len(),
        args.covalent_factor
    );
    Ok(())
}
