//! Falling object pool
//!
//! Sole owner of every live falling object. Objects are value records with
//! stable integer ids; other components get read-only views, never mutable
//! aliases into the pool.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::REFERENCE_DT;
use crate::tuning::Tuning;

use super::state::{Category, FallingObject, PlayArea};

/// Owns and advances the set of live falling objects
#[derive(Debug, Default)]
pub struct FallingObjectPool {
    objects: Vec<FallingObject>,
    next_id: u32,
}

impl FallingObjectPool {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Live objects in spawn order (ascending id)
    pub fn objects(&self) -> &[FallingObject] {
        &self.objects
    }

    #[cfg(test)]
    pub(crate) fn objects_mut(&mut self) -> &mut [FallingObject] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Spawn a new object just above the top edge at a random x inside the
    /// spawn margins. Returns its id.
    pub fn spawn(
        &mut self,
        category: Category,
        area: &PlayArea,
        tuning: &Tuning,
        tick: u64,
        rng: &mut Pcg32,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let x_min = area.left + tuning.spawn_x_margin;
        let x_max = area.right - tuning.spawn_x_margin;
        // A viewport narrower than two margins degenerates to the center line
        let x = if x_min < x_max {
            rng.random_range(x_min..x_max)
        } else {
            (area.left + area.right) / 2.0
        };
        // Zero range means no spin; the range sampler rejects empty ranges
        let rotation_speed = if tuning.rotation_speed_range > 0.0 {
            rng.random_range(-tuning.rotation_speed_range..tuning.rotation_speed_range)
        } else {
            0.0
        };

        self.objects.push(FallingObject {
            id,
            category,
            pos: Vec2::new(x, area.top + tuning.spawn_y_offset),
            rotation: 0.0,
            rotation_speed,
            spawn_tick: tick,
        });

        log::debug!("spawned {category:?} object {id} at x={x:.2}");
        id
    }

    /// Advance every live object: constant-speed fall plus spin
    ///
    /// `fall_speed` is world-units per reference tick; a variable frame rate
    /// host gets the same gameplay feel because the step is scaled by the
    /// delta relative to the reference rate.
    pub fn advance_all(&mut self, delta: f32, fall_speed: f32) {
        let scale = delta / REFERENCE_DT;
        for object in &mut self.objects {
            object.pos.y -= fall_speed * scale;
            object.rotation += object.rotation_speed * scale;
        }
    }

    /// Remove and return all objects matching the predicate in one pass,
    /// preserving the relative order of the survivors
    pub fn remove_if<F>(&mut self, mut predicate: F) -> Vec<FallingObject>
    where
        F: FnMut(&FallingObject) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.objects.len());
        for object in self.objects.drain(..) {
            if predicate(&object) {
                removed.push(object);
            } else {
                kept.push(object);
            }
        }
        self.objects = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_area() -> PlayArea {
        PlayArea {
            left: -3.75,
            right: 3.75,
            top: 4.0,
            bottom: -4.0,
        }
    }

    #[test]
    fn test_spawn_within_margins() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(3);

        for tick in 0..200 {
            pool.spawn(Category::Normal, &area, &tuning, tick, &mut rng);
        }
        for object in pool.objects() {
            assert!(object.pos.x >= area.left + tuning.spawn_x_margin);
            assert!(object.pos.x <= area.right - tuning.spawn_x_margin);
            assert_eq!(object.pos.y, area.top + tuning.spawn_y_offset);
            assert_eq!(object.rotation, 0.0);
            assert!(object.rotation_speed.abs() <= tuning.rotation_speed_range);
        }
    }

    #[test]
    fn test_zero_rotation_range_spawns_without_spin() {
        let tuning = Tuning::from_json(r#"{ "rotation_speed_range": 0.0 }"#).unwrap();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(8);

        for tick in 0..20 {
            pool.spawn(Category::Normal, &area, &tuning, tick, &mut rng);
        }
        for object in pool.objects() {
            assert_eq!(object.rotation_speed, 0.0);
        }
    }

    #[test]
    fn test_ids_are_stable_and_ascending() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(3);

        let a = pool.spawn(Category::Normal, &area, &tuning, 0, &mut rng);
        let b = pool.spawn(Category::Gold, &area, &tuning, 1, &mut rng);
        assert!(b > a);
        pool.remove_if(|o| o.id == a);
        // Removal does not recycle ids
        let c = pool.spawn(Category::Burnt, &area, &tuning, 2, &mut rng);
        assert!(c > b);
    }

    #[test]
    fn test_fall_is_strictly_monotonic() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(11);
        for tick in 0..5 {
            pool.spawn(Category::Normal, &area, &tuning, tick, &mut rng);
        }

        for _ in 0..100 {
            let before: Vec<f32> = pool.objects().iter().map(|o| o.pos.y).collect();
            pool.advance_all(REFERENCE_DT, tuning.fall_speed);
            for (object, y_before) in pool.objects().iter().zip(before) {
                assert!(object.pos.y < y_before);
            }
        }
    }

    #[test]
    fn test_fall_scales_with_delta() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut rng = Pcg32::seed_from_u64(11);

        let mut pool_a = FallingObjectPool::new();
        pool_a.spawn(Category::Normal, &area, &tuning, 0, &mut rng);
        let mut pool_b = FallingObjectPool::new();
        pool_b.spawn(Category::Normal, &area, &tuning, 0, &mut rng);

        // One double-rate step covers the same distance as two single steps
        pool_a.advance_all(2.0 * REFERENCE_DT, tuning.fall_speed);
        pool_b.advance_all(REFERENCE_DT, tuning.fall_speed);
        pool_b.advance_all(REFERENCE_DT, tuning.fall_speed);
        assert!((pool_a.objects()[0].pos.y - pool_b.objects()[0].pos.y).abs() < 1e-5);
    }

    #[test]
    fn test_remove_if_preserves_survivor_order() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(5);
        for tick in 0..10 {
            pool.spawn(Category::Normal, &area, &tuning, tick, &mut rng);
        }

        // Remove every even id; no survivor skipped or visited twice
        let removed = pool.remove_if(|o| o.id % 2 == 0);
        assert_eq!(removed.len(), 5);
        assert_eq!(pool.len(), 5);
        let survivor_ids: Vec<u32> = pool.objects().iter().map(|o| o.id).collect();
        assert_eq!(survivor_ids, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_remove_if_all_and_none() {
        let tuning = Tuning::default();
        let area = test_area();
        let mut pool = FallingObjectPool::new();
        let mut rng = Pcg32::seed_from_u64(5);
        for tick in 0..4 {
            pool.spawn(Category::Burnt, &area, &tuning, tick, &mut rng);
        }

        assert!(pool.remove_if(|_| false).is_empty());
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.remove_if(|_| true).len(), 4);
        assert!(pool.is_empty());
    }
}
