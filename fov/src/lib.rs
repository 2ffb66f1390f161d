//! Adaptive raycast field-of-view meshes.
//!
//! A view cone is swept with evenly spaced probe rays. Wherever two
//! neighboring probes disagree about what they see, the boundary between
//! them is found by bisection, so silhouettes stay sharp without a high base
//! ray count. The ordered samples are then turned into a triangle fan in the
//! observer's local frame.
//!
//! Nothing is kept between frames, each call to [`view_cone`] starts from
//! scratch.

mod cast;
pub use cast::{Probe, RayHit, Raycast};

mod config;
pub use config::{Resolution, TriggerPolicy, ViewConeConfig};

mod discontinuity;
pub use discontinuity::Discontinuity;

mod mesh;
pub use mesh::Mesh;

mod pose;
pub use pose::Pose;

mod refine;
pub use refine::refine;

mod sample;
pub use sample::Sample;

mod sampler;
pub use sampler::{scan, Scan};

#[cfg(test)]
mod fixtures;

/// One frame's view cone.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Frame {
    pub samples: Vec<Sample>,
    pub mesh: Mesh,
    /// Rays cast to build this frame.
    pub casts: usize,
    /// Discontinuities refined in this frame.
    pub refinements: usize,
}

/// Compute the view cone of an observer at `pose` in `scene`.
pub fn view_cone<R: Raycast + ?Sized>(
    config: &ViewConeConfig,
    pose: &Pose,
    scene: &R,
) -> Frame {
    let mut probe = Probe::new(scene, *pose, config.clamped_range());
    let Scan {
        samples,
        refinements,
    } = scan(&mut probe, config);
    let mesh = Mesh::build(&samples, pose, config.edge_indent);

    log::debug!(
        "view_cone: {} rays, {} samples, {} refinements",
        probe.casts(),
        samples.len(),
        refinements
    );

    Frame {
        casts: probe.casts(),
        samples,
        mesh,
        refinements,
    }
}
