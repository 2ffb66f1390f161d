use std::fmt;

use fov::{view_cone, Frame, Raycast, ViewConeConfig};

use crate::controller::{Patrol, Route};

/// Raycast counts collected over a run.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Stats {
    pub frames: usize,
    pub min_casts: usize,
    pub max_casts: usize,
    pub total_casts: usize,
    pub refinements: usize,
}

impl Stats {
    pub fn add(&mut self, frame: &Frame) {
        if self.frames == 0 {
            self.min_casts = frame.casts;
            self.max_casts = frame.casts;
        } else {
            self.min_casts = self.min_casts.min(frame.casts);
            self.max_casts = self.max_casts.max(frame.casts);
        }
        self.frames += 1;
        self.total_casts += frame.casts;
        self.refinements += frame.refinements;
    }

    /// Mean rays per frame.
    pub fn mean_casts(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_casts as f32 / self.frames as f32
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, rays per frame min {} max {} mean {:.1}, \
             {} refinements",
            self.frames,
            self.min_casts,
            self.max_casts,
            self.mean_casts(),
            self.refinements
        )
    }
}

/// Walk the observer along `route` for `frames` frames, computing a view
/// cone on each one.
///
/// Returns the collected stats and the last frame computed.
pub fn run(
    config: &ViewConeConfig,
    scene: &(impl Raycast + ?Sized),
    route: Route,
    frames: usize,
) -> (Stats, Option<Frame>) {
    let mut patrol = Patrol::new(route);
    let mut stats = Stats::default();
    let mut last = None;

    for n in 0..frames {
        let pose = patrol.pose();
        let frame = view_cone(config, &pose, scene);
        log::debug!(
            "frame {n}: {} rays, {} triangles at {}",
            frame.casts,
            frame.mesh.triangle_count(),
            pose.position
        );
        stats.add(&frame);
        last = Some(frame);
        patrol.tick();
    }

    (stats, last)
}

#[cfg(test)]
mod test {
    use fov::Resolution;
    use glam::{vec2, Vec2};

    use super::*;
    use crate::scene::{Scene, Wall};

    fn config() -> ViewConeConfig {
        ViewConeConfig {
            fov: 90.0,
            resolution: Resolution::RayCount(16),
            ..Default::default()
        }
    }

    #[test]
    fn empty_run() {
        let (stats, last) =
            run(&config(), &Scene::default(), Route::default(), 0);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.mean_casts(), 0.0);
        assert!(last.is_none());
    }

    #[test]
    fn open_field_casts_base_rays_only() {
        let (stats, last) =
            run(&config(), &Scene::default(), Route::default(), 10);
        assert_eq!(stats.frames, 10);
        assert_eq!(stats.min_casts, 17);
        assert_eq!(stats.max_casts, 17);
        assert_eq!(stats.mean_casts(), 17.0);
        assert_eq!(stats.refinements, 0);
        assert_eq!(last.unwrap().samples.len(), 17);
    }

    #[test]
    fn wall_edges_add_refinement_rays() {
        // Short wall straight ahead of the observer, its ends show up as
        // discontinuities. The observer paces back and forth while keeping
        // its eyes on the wall.
        let scene = Scene {
            walls: vec![Wall(vec2(5.0, -2.0), vec2(5.0, 2.0))],
            ..Default::default()
        };
        let route = Route {
            waypoints: vec![Vec2::ZERO, vec2(1.0, 0.0)],
            look_target: Some(vec2(5.0, 0.0)),
            ..Default::default()
        };
        let config = config();
        let (stats, _) = run(&config, &scene, route, 4);

        assert_eq!(stats.refinements, 4 * 2);
        assert!(stats.min_casts >= 17 + 2 * config.edge_iterations as usize);
        assert!(stats.max_casts >= stats.min_casts);
        assert_eq!(
            stats.total_casts,
            4 * 17 + stats.refinements * config.edge_iterations as usize
        );
    }

    #[test]
    fn scattered_scene_runs() {
        let scene = Scene::scatter("test", 30, 40.0);
        let (stats, last) = run(&config(), &scene, Route::default(), 20);
        assert_eq!(stats.frames, 20);
        let last = last.unwrap();
        assert_eq!(last.mesh.vertices.len(), last.samples.len() + 1);
        assert!(last
            .samples
            .windows(2)
            .all(|w| w[0].angle() <= w[1].angle()));
        assert!(stats.to_string().starts_with("20 frames"));
    }
}
