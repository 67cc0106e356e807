pub mod forcefield;
pub mod geometry;
pub mod io;
pub mod models;
pub mod surface;
pub mod topology;
