//! Actor collision detection (axis-aligned bounding boxes)
//!
//! Collision boxes are authored relative to the sprite's top-left; the sprite
//! itself is drawn horizontally centered on the actor's x, so the world-space
//! box carries the same half-width offset. Overlap is only used for
//! diver-vs-octopus lethality - treasure pickup and delivery are plain depth
//! thresholds, not box tests.

use super::geom::{Rect, intersects};
use super::state::Actor;

/// World-space collision rectangle for an actor
pub fn hit_box(actor: &Actor) -> Rect {
    Rect {
        x: actor.collision_box.x + actor.pos.x - actor.sprite.w / 2.0,
        y: actor.collision_box.y + actor.pos.y,
        w: actor.collision_box.w,
        h: actor.collision_box.h,
    }
}

/// Do two actors' collision boxes overlap?
pub fn collides(a: &Actor, b: &Actor) -> bool {
    intersects(&hit_box(a), &hit_box(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Actor;

    #[test]
    fn test_hit_box_is_sprite_centered() {
        let mut diver = Actor::diver();
        diver.pos.x = 100.0;
        diver.pos.y = 200.0;
        let b = hit_box(&diver);
        // Diver box (2,6,26,6) against a 31-wide sprite centered on x
        assert!((b.x - (100.0 - 31.0 / 2.0 + 2.0)).abs() < 1e-3);
        assert!((b.y - 206.0).abs() < 1e-3);
        assert_eq!(b.w, 26.0);
        assert_eq!(b.h, 6.0);
    }

    #[test]
    fn test_overlapping_actors_collide() {
        let mut diver = Actor::diver();
        diver.pos.x = 300.0;
        diver.pos.y = 300.0;
        let octopus = Actor::octopus(300.0, 300.0, 1.0, 1.0);
        assert!(collides(&diver, &octopus));
    }

    #[test]
    fn test_distant_actors_miss() {
        let mut diver = Actor::diver();
        diver.pos.x = 100.0;
        diver.pos.y = 300.0;
        let octopus = Actor::octopus(500.0, 300.0, 1.0, 1.0);
        assert!(!collides(&diver, &octopus));
    }

    #[test]
    fn test_vertical_offset_respects_thin_diver_box() {
        // The diver's box is only 6px tall at offset 6; an octopus 40px below
        // the diver's anchor must not register.
        let mut diver = Actor::diver();
        diver.pos.x = 300.0;
        diver.pos.y = 300.0;
        let octopus = Actor::octopus(300.0, 340.0, 1.0, 1.0);
        assert!(!collides(&diver, &octopus));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let mut diver = Actor::diver();
        diver.pos.x = 310.0;
        diver.pos.y = 295.0;
        for x in [290.0, 300.0, 310.0, 320.0, 400.0] {
            let octopus = Actor::octopus(x, 290.0, 1.0, 1.0);
            assert_eq!(collides(&diver, &octopus), collides(&octopus, &diver));
        }
    }
}
