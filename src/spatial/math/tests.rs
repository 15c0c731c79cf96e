#[cfg(test)]
mod math_tests {
    use crate::spatial::math::matrix::Mat3;
    use crate::spatial::math::{axis_bit, octant_direction, octant_for, vector::V3c};

    fn approximately_equal(a: &V3c<f64>, b: &V3c<f64>) -> bool {
        (*a - *b).length() < 1e-9
    }

    #[test]
    fn test_octant_for_all_corners() {
        let center = V3c::unit(0.);
        assert_eq!(octant_for(&center, &V3c::new(-1., -1., -1.)), 0);
        assert_eq!(octant_for(&center, &V3c::new(-1., -1., 1.)), 1);
        assert_eq!(octant_for(&center, &V3c::new(-1., 1., -1.)), 2);
        assert_eq!(octant_for(&center, &V3c::new(-1., 1., 1.)), 3);
        assert_eq!(octant_for(&center, &V3c::new(1., -1., -1.)), 4);
        assert_eq!(octant_for(&center, &V3c::new(1., -1., 1.)), 5);
        assert_eq!(octant_for(&center, &V3c::new(1., 1., -1.)), 6);
        assert_eq!(octant_for(&center, &V3c::new(1., 1., 1.)), 7);
    }

    #[test]
    fn test_octant_for_ties_go_to_the_positive_side() {
        let center = V3c::new(1., 2., 3.);
        assert_eq!(octant_for(&center, &center), 7);
        assert_eq!(octant_for(&center, &V3c::new(0., 2., 3.)), 0b011);
    }

    #[test]
    fn test_octant_direction_matches_octant_for() {
        let center = V3c::unit(0.);
        for octant in 0..8 {
            let direction = octant_direction(octant);
            assert_eq!(octant_for(&center, &direction), octant);
        }
    }

    #[test]
    fn test_axis_bit_flips_the_matching_comparison() {
        assert_eq!(axis_bit(0), 0b100);
        assert_eq!(axis_bit(1), 0b010);
        assert_eq!(axis_bit(2), 0b001);
    }

    #[test]
    fn test_vector_algebra() {
        let a = V3c::new(1., 2., 3.);
        let b = V3c::new(4., -5., 6.);
        assert_eq!(a.dot(&b), 12.);
        assert_eq!(a.cross(b), V3c::new(27., 6., -13.));
        assert!((V3c::new(0., 3., 4.).length() - 5.).abs() < 1e-12);
        assert!((V3c::new(0., 3., 4.).normalized().length() - 1.).abs() < 1e-12);
        assert_eq!(-a, V3c::new(-1., -2., -3.));
        assert_eq!(a * 2., V3c::new(2., 4., 6.));
        assert_eq!(a - b, V3c::new(-3., 7., -3.));
    }

    #[test]
    fn test_rotation_around_z_maps_x_to_y() {
        let rotation = Mat3::from_axis_angle(&V3c::new(0., 0., 1.), std::f64::consts::FRAC_PI_2);
        let rotated = rotation * V3c::new(1., 0., 0.);
        assert!(approximately_equal(&rotated, &V3c::new(0., 1., 0.)));
    }

    #[test]
    fn test_transpose_inverts_a_rotation() {
        let rotation = Mat3::from_axis_angle(&V3c::new(1., 2., -1.), 0.7);
        let vector = V3c::new(0.3, -1.2, 2.5);
        let roundtrip = rotation.transpose() * (rotation * vector);
        assert!(approximately_equal(&roundtrip, &vector));
    }

    #[test]
    fn test_zero_rotation_vector_is_identity() {
        let rotation = Mat3::from_rotation_vector(&V3c::unit(0.));
        assert_eq!(rotation, Mat3::identity());
    }

    #[test]
    fn test_rotation_vector_carries_angle_in_its_length() {
        let axis_angle = Mat3::from_axis_angle(&V3c::new(0., 0., 3.), 0.5);
        let vectorized = Mat3::from_rotation_vector(&V3c::new(0., 0., 0.5));
        let probe = V3c::new(1., 1., 0.);
        assert!(approximately_equal(
            &(axis_angle * probe),
            &(vectorized * probe)
        ));
    }
}
