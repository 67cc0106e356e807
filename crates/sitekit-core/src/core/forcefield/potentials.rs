const BOND_FORCE_PREFACTOR: f64 = 332.06; // In kcal·Å/(mol·e²)

/// Pauling-type bond-order correction to the natural bond length.
///
/// Vanishes for single bonds (`ln(1) = 0`) and shortens the bond for
/// higher orders.
#[inline]
pub fn pauling_correction(r1_i: f64, r1_j: f64, bond_order: f64) -> f64 {
    -0.1332 * (r1_i + r1_j) * bond_order.ln()
}

/// O'Keeffe–Brese electronegativity correction to the natural bond length.
///
/// Zero for a homonuclear pair and strictly positive otherwise.
#[inline]
pub fn electronegativity_correction(r1_i: f64, xi_i: f64, r1_j: f64, xi_j: f64) -> f64 {
    let diff = xi_i.sqrt() - xi_j.sqrt();
    r1_i * r1_j * diff * diff / (xi_i * r1_i + xi_j * r1_j)
}

/// Natural (ideal) bond length: summed valence radii plus the bond-order
/// correction, minus the electronegativity correction.
#[inline]
pub fn natural_bond_length(r1_i: f64, xi_i: f64, r1_j: f64, xi_j: f64, bond_order: f64) -> f64 {
    r1_i + r1_j + pauling_correction(r1_i, r1_j, bond_order)
        - electronegativity_correction(r1_i, xi_i, r1_j, xi_j)
}

/// Harmonic stretch force constant from the effective charges and the
/// natural bond length.
#[inline]
pub fn bond_force_constant(z1_i: f64, z1_j: f64, natural_length: f64) -> f64 {
    2.0 * BOND_FORCE_PREFACTOR * z1_i * z1_j / natural_length.powi(3)
}

/// Harmonic bond-stretch energy at the current separation.
#[inline]
pub fn harmonic_bond_energy(force_constant: f64, dist: f64, natural_length: f64) -> f64 {
    0.5 * force_constant * (dist - natural_length).powi(2)
}

/// Magnitude of the bond-stretch energy gradient along the bond axis;
/// positive when stretched past the natural length, negative when
/// compressed.
#[inline]
pub fn harmonic_bond_gradient(force_constant: f64, dist: f64, natural_length: f64) -> f64 {
    force_constant * (dist - natural_length)
}
