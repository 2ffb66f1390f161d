use crate::{
    refine, Discontinuity, Probe, Raycast, Sample, TriggerPolicy,
    ViewConeConfig,
};

/// Angularly ordered samples across a view cone.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Scan {
    pub samples: Vec<Sample>,
    /// How many discontinuities were refined, each added two samples.
    pub refinements: usize,
}

/// Sweep the view cone with evenly spaced base rays, refining the boundary
/// wherever neighboring samples disagree.
///
/// Boundary samples from refinement are inserted ahead of the sample that
/// revealed the discontinuity, so the result stays in increasing angle
/// order.
pub fn scan<R: Raycast + ?Sized>(
    probe: &mut Probe<'_, R>,
    config: &ViewConeConfig,
) -> Scan {
    let mut ret = Scan::default();

    for angle in config.ray_angles() {
        let sample = probe.sample(angle);

        for kind in Discontinuity::ALL {
            // Check against the latest accepted sample, an earlier
            // refinement may already have moved it up to the boundary.
            let Some(&prev) = ret.samples.last() else {
                break;
            };
            if !kind.lies_between(&prev, &sample, config) {
                continue;
            }

            ret.samples
                .extend(refine(probe, prev, sample, kind, config));
            ret.refinements += 1;

            if config.triggers == TriggerPolicy::Coalesced {
                break;
            }
        }

        ret.samples.push(sample);
    }

    ret
}
