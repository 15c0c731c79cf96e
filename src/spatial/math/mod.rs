pub mod matrix;
pub mod vector;

mod tests;

use crate::spatial::math::vector::V3c;

///####################################################################################
/// Octant
///####################################################################################

/// Each node is separated into 8 octants based on the relative position of the
/// contained point to the node center. The index packs one comparison per axis:
/// bit 2 is set when `x >= center.x`, bit 1 for y, bit 0 for z, so index 0 is
/// the all-negative corner and index 7 the all-positive one. Flipping bit k
/// corresponds to crossing the median plane orthogonal to that axis.
pub fn octant_for(center: &V3c<f64>, position: &V3c<f64>) -> u8 {
    // The below is rewritten to be branchless
    (position.x >= center.x) as u8 * 4
        + (position.y >= center.y) as u8 * 2
        + (position.z >= center.z) as u8
}

/// The sign of each axis for the given octant, +1 towards the high half.
pub(crate) fn octant_direction(octant: u8) -> V3c<f64> {
    debug_assert!(octant < 8);
    V3c::new(
        if 0 != octant & 0b100 { 1. } else { -1. },
        if 0 != octant & 0b010 { 1. } else { -1. },
        if 0 != octant & 0b001 { 1. } else { -1. },
    )
}

/// The child-index bit flipped when crossing the median plane whose normal
/// points along the given axis (0 = x, 1 = y, 2 = z).
pub(crate) const fn axis_bit(axis: usize) -> u8 {
    0b100 >> axis
}
