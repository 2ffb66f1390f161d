use fov::Pose;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use util::{lift, look_rotation, planar};

/// Scripted path for the observer.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Route {
    /// World units moved per frame.
    pub move_speed: f32,
    /// Height of the observer's eye above the ground plane.
    pub eye_height: f32,
    /// Ground plane points visited in order, looping back to the first.
    pub waypoints: Vec<Vec2>,
    /// Point to keep facing while moving, otherwise face the direction of
    /// travel.
    pub look_target: Option<Vec2>,
}

impl Default for Route {
    fn default() -> Self {
        Route {
            move_speed: 0.5,
            eye_height: 1.0,
            waypoints: vec![
                Vec2::ZERO,
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ],
            look_target: None,
        }
    }
}

/// Character controller, moves the observer around and turns it to look
/// at things.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Controller {
    pub pose: Pose,
    pub move_speed: f32,
}

impl Controller {
    pub fn new(position: Vec3, move_speed: f32) -> Self {
        Controller {
            pose: Pose::new(position, Default::default()),
            move_speed,
        }
    }

    /// Move one frame's worth along `dir`, a world space direction.
    pub fn walk(&mut self, dir: Vec3) {
        self.pose.position += dir.normalize_or_zero() * self.move_speed;
    }

    /// Turn to face `target` while staying level with the ground.
    ///
    /// Does nothing if the target is straight above or below.
    pub fn face(&mut self, target: Vec3) {
        let dir = lift(planar(target - self.pose.position), 0.0);
        if dir.length_squared() > 0.0 {
            self.pose.rotation = look_rotation(dir, Vec3::Y);
        }
    }
}

/// Drives a [`Controller`] along a [`Route`], one frame at a time.
pub struct Patrol {
    route: Route,
    controller: Controller,
    next: usize,
}

impl Patrol {
    pub fn new(route: Route) -> Self {
        let start = route.waypoints.first().copied().unwrap_or_default();
        let mut controller =
            Controller::new(lift(start, route.eye_height), route.move_speed);

        let next = if route.waypoints.len() > 1 { 1 } else { 0 };
        if let Some(target) = route.look_target {
            controller.face(lift(target, route.eye_height));
        } else if let Some(&p) = route.waypoints.get(next) {
            controller.face(lift(p, route.eye_height));
        }

        Patrol {
            route,
            controller,
            next,
        }
    }

    pub fn pose(&self) -> Pose {
        self.controller.pose
    }

    /// Advance one frame and return the new pose.
    pub fn tick(&mut self) -> Pose {
        let Some(&waypoint) = self.route.waypoints.get(self.next) else {
            return self.pose();
        };
        let waypoint = lift(waypoint, self.route.eye_height);
        let pos = self.controller.pose.position;

        if pos.distance(waypoint) <= self.controller.move_speed {
            self.controller.pose.position = waypoint;
            self.next = (self.next + 1) % self.route.waypoints.len();
        } else {
            self.controller.walk(waypoint - pos);
        }

        let target = self
            .route
            .look_target
            .unwrap_or(self.route.waypoints[self.next]);
        self.controller.face(lift(target, self.route.eye_height));

        self.pose()
    }
}
