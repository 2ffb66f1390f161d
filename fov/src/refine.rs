use crate::{
    sample::normals_match, Discontinuity, Probe, Raycast, Sample,
    ViewConeConfig,
};

impl Discontinuity {
    /// Whether a new sample taken between the bounds falls on the same side
    /// of the boundary as `min_bound` and should replace it.
    ///
    /// Otherwise the sample replaces `max_bound`.
    fn replaces_min_bound(
        self,
        min_bound: &Sample,
        max_bound: &Sample,
        sample: &Sample,
        tolerance: f32,
    ) -> bool {
        match self {
            Discontinuity::HitFlip => sample.is_hit() == min_bound.is_hit(),
            Discontinuity::NormalChange => {
                match (min_bound.normal(), sample.normal()) {
                    (Some(a), Some(b)) => normals_match(a, b, tolerance),
                    (None, None) => true,
                    _ => false,
                }
            }
            Discontinuity::DistanceJump => {
                let p = sample.position();
                p.distance(min_bound.position())
                    < p.distance(max_bound.position())
            }
        }
    }
}

/// Narrow the angular bracket around a discontinuity by bisection.
///
/// Casts exactly `config.edge_iterations` rays, each at the mean angle of
/// the current bounds, and replaces one bound with the new sample. The
/// returned pair straddles the boundary with the angular gap shrunk by
/// `2^edge_iterations`, in `[min_bound, max_bound]` order.
pub fn refine<R: Raycast + ?Sized>(
    probe: &mut Probe<'_, R>,
    mut min_bound: Sample,
    mut max_bound: Sample,
    kind: Discontinuity,
    config: &ViewConeConfig,
) -> [Sample; 2] {
    for _ in 0..config.edge_iterations {
        let angle = (min_bound.angle() + max_bound.angle()) / 2.0;
        let sample = probe.sample(angle);

        if kind.replaces_min_bound(
            &min_bound,
            &max_bound,
            &sample,
            config.normal_tolerance,
        ) {
            min_bound = sample;
        } else {
            max_bound = sample;
        }
    }

    log::trace!(
        "refine: {kind:?} between {} and {}",
        min_bound.angle(),
        max_bound.angle()
    );

    [min_bound, max_bound]
}
