// seedrand_core/src/sampling.rs

//! Convenience draws built on top of the core operations: picking from and
//! shuffling slices, and scattering points for visual demos.

use nalgebra::{Vector2, Vector3};

use crate::generator::SeededRandomGenerator;

/// Points closer to the origin than this are too short to normalize reliably.
const MIN_NORMALIZE_LENGTH_SQUARED: f32 = 1e-6;

impl SeededRandomGenerator {
    // --- Slices ---

    /// A uniformly chosen element, or `None` for an empty slice.
    ///
    /// Consumes exactly one draw for non-empty slices.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index_below(items.len());
        items.get(index)
    }

    /// Shuffles `items` in place (Fisher-Yates, from the back).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Index in `[0, len)` for a non-empty length. Lengths beyond `i32::MAX`
    /// only reach the first `i32::MAX` positions.
    fn index_below(&mut self, len: usize) -> usize {
        let bound = i32::try_from(len).unwrap_or(i32::MAX);
        self.next_int_below(bound) as usize
    }

    // --- Geometry ---

    /// A point drawn componentwise (x, then y, then z) from `[min, max)`.
    pub fn next_vector3(&mut self, min: &Vector3<f32>, max: &Vector3<f32>) -> Vector3<f32> {
        let x = self.next_float_range(min.x, max.x);
        let y = self.next_float_range(min.y, max.y);
        let z = self.next_float_range(min.z, max.z);
        Vector3::new(x, y, z)
    }

    /// A point strictly inside the unit circle.
    pub fn next_inside_unit_circle(&mut self) -> Vector2<f32> {
        loop {
            let candidate = Vector2::new(
                self.next_float_range(-1.0, 1.0),
                self.next_float_range(-1.0, 1.0),
            );
            if candidate.norm_squared() < 1.0 {
                return candidate;
            }
        }
    }

    /// A point strictly inside the unit sphere.
    pub fn next_inside_unit_sphere(&mut self) -> Vector3<f32> {
        loop {
            let candidate = Vector3::new(
                self.next_float_range(-1.0, 1.0),
                self.next_float_range(-1.0, 1.0),
                self.next_float_range(-1.0, 1.0),
            );
            if candidate.norm_squared() < 1.0 {
                return candidate;
            }
        }
    }

    /// A unit-length direction, uniform over the sphere's surface.
    pub fn next_on_unit_sphere(&mut self) -> Vector3<f32> {
        loop {
            let candidate = self.next_inside_unit_sphere();
            if candidate.norm_squared() > MIN_NORMALIZE_LENGTH_SQUARED {
                return candidate.normalize();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn choose_handles_empty_and_picks_members() {
        let mut rng = SeededRandomGenerator::new(4);
        let empty: [u8; 0] = [];
        let before = rng.state();
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.state(), before);

        let colors = ["red", "green", "blue"];
        for _ in 0..100 {
            let picked = rng.choose(&colors).unwrap();
            assert!(colors.contains(picked));
        }
    }

    #[test]
    fn choose_uses_one_bounded_draw() {
        let mut rng = SeededRandomGenerator::new(42);
        let digits: Vec<i32> = (0..10).collect();
        // next_int_range(0, 10) for seed 42 starts 1, 5, 7.
        assert_eq!(rng.choose(&digits), Some(&1));
        assert_eq!(rng.choose(&digits), Some(&5));
        assert_eq!(rng.choose(&digits), Some(&7));
    }

    #[test]
    fn shuffle_is_a_deterministic_permutation() {
        let mut a = SeededRandomGenerator::new(17);
        let mut b = SeededRandomGenerator::new(17);
        let mut first: Vec<u32> = (0..50).collect();
        let mut second = first.clone();
        a.shuffle(&mut first);
        b.shuffle(&mut second);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut rng = SeededRandomGenerator::new(2);
        let before = rng.state();
        let mut single = [9];
        let mut empty: [i32; 0] = [];
        rng.shuffle(&mut single);
        rng.shuffle(&mut empty);
        assert_eq!(single, [9]);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn vector3_respects_box_bounds() {
        let mut rng = SeededRandomGenerator::new(6);
        let min = Vector3::new(-1.0, 0.0, 10.0);
        let max = Vector3::new(1.0, 0.5, 20.0);
        for _ in 0..2_000 {
            let p = rng.next_vector3(&min, &max);
            assert!((min.x..max.x).contains(&p.x));
            assert!((min.y..max.y).contains(&p.y));
            assert!((min.z..max.z).contains(&p.z));
        }
    }

    #[test]
    fn unit_shapes_stay_inside_or_on_surface() {
        let mut rng = SeededRandomGenerator::new(8);
        for _ in 0..2_000 {
            assert!(rng.next_inside_unit_circle().norm_squared() < 1.0);
            assert!(rng.next_inside_unit_sphere().norm_squared() < 1.0);
            assert_abs_diff_eq!(rng.next_on_unit_sphere().norm(), 1.0, epsilon = 1e-5);
        }
    }
}
