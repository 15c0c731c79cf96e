#[cfg(test)]
mod spatial_tests {
    use crate::spatial::{math::vector::V3c, Aabb};

    #[test]
    fn test_aabb_contains_point_boundaries_included() {
        let aabb = Aabb::new(V3c::unit(-1.), V3c::unit(1.));
        assert!(aabb.contains(&V3c::unit(0.)));
        assert!(aabb.contains(&V3c::unit(1.)));
        assert!(aabb.contains(&V3c::unit(-1.)));
        assert!(aabb.contains(&V3c::new(1., -1., 0.5)));
        assert!(!aabb.contains(&V3c::new(1.000001, 0., 0.)));
        assert!(!aabb.contains(&V3c::new(0., -2., 0.)));
    }

    #[test]
    fn test_aabb_contains_aabb() {
        let outer = Aabb::new(V3c::unit(-2.), V3c::unit(2.));
        let inner = Aabb::new(V3c::unit(-1.), V3c::unit(1.));
        let overlapping = Aabb::new(V3c::unit(0.), V3c::unit(3.));
        assert!(outer.contains_aabb(&inner));
        assert!(outer.contains_aabb(&outer));
        assert!(!outer.contains_aabb(&overlapping));
        assert!(!inner.contains_aabb(&outer));
    }

    #[test]
    fn test_cube_is_centered() {
        let cube = Aabb::cube(&V3c::new(1., 2., 3.), 4.);
        assert_eq!(cube.min, V3c::new(-1., 0., 1.));
        assert_eq!(cube.max, V3c::new(3., 4., 5.));
    }

    #[test]
    fn test_enclosing_is_tight() {
        let aabb = Aabb::enclosing(&[
            V3c::new(1., -2., 0.),
            V3c::new(-1., 5., 2.),
            V3c::new(0., 0., -3.),
        ]);
        assert_eq!(aabb.min, V3c::new(-1., -2., -3.));
        assert_eq!(aabb.max, V3c::new(1., 5., 2.));
    }
}
