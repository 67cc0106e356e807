//! # sitekit Core Library
//!
//! A small molecular-geometry toolkit: it infers a covalent bond graph from
//! 3-D atomic coordinates, scores that graph against a generic force-field
//! bond model (energy plus analytic gradient), and carves solvent-accessible
//! and buried pocket regions out of a lattice around a molecule.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict two-layer split so each piece stays pure,
//! testable, and reusable on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`,
//!   `BondGraph`), pure force-field math (`potentials`), the distance-matrix
//!   cache, the grid/carving primitives, and thin file adapters. Nothing in
//!   this layer holds hidden state; parameter tables are explicit values
//!   passed into every consumer.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built from the
//!   foundation, currently the pocket/water region search, which chains
//!   grid generation and successive carving passes in the order their radii
//!   were tuned for.
//!
//! Downstream conformer-generation or structure-preparation pipelines are
//! expected to consume `BondGraph::build`, `BondScorer::score`,
//! `generate_grid`, `carve`, and `find_water_and_pocket` as plain functions
//! over already-parsed inputs.

pub mod core;
pub mod workflows;
