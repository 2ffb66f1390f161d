use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// How densely the field of view is sampled with base rays.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// Ray intervals per degree of field of view.
    RaysPerDegree(f32),
    /// Fixed number of ray intervals regardless of cone width.
    RayCount(u32),
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::RaysPerDegree(1.0)
    }
}

/// What to do when several discontinuities show up between the same pair
/// of neighboring samples.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerPolicy {
    /// Check every discontinuity kind in order against the latest accepted
    /// sample and refine once for each one that fires.
    #[default]
    Sequential,
    /// Refine at most once per sample pair, using the first kind that
    /// fires.
    Coalesced,
}

/// Parameters for one view cone computation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ViewConeConfig {
    /// Width of the cone in degrees, centered on the forward direction.
    ///
    /// Values outside 0 to 360 are clamped.
    pub fov: f32,
    /// Maximum probe length in world units.
    pub view_range: f32,
    pub resolution: Resolution,
    /// Bisection steps spent on each discontinuity.
    pub edge_iterations: u32,
    /// Largest gap between two neighboring hit points that isn't treated
    /// as a jump from one surface to another.
    pub distance_threshold: f32,
    /// How far mesh vertices are pushed into the surface they hit.
    pub edge_indent: f32,
    /// Per-component slack when comparing surface normals, zero for exact
    /// comparison.
    pub normal_tolerance: f32,
    pub triggers: TriggerPolicy,
}

impl Default for ViewConeConfig {
    fn default() -> Self {
        ViewConeConfig {
            fov: 60.0,
            view_range: 100.0,
            resolution: Default::default(),
            edge_iterations: 6,
            distance_threshold: 5.0,
            edge_indent: 5.0,
            normal_tolerance: 1e-4,
            triggers: Default::default(),
        }
    }
}

impl ViewConeConfig {
    /// Field of view in degrees, clamped into `[0, 360]`.
    pub fn clamped_fov(&self) -> f32 {
        if self.fov.is_nan() {
            0.0
        } else {
            self.fov.clamp(0.0, 360.0)
        }
    }

    /// Probe length, never negative.
    pub fn clamped_range(&self) -> f32 {
        self.view_range.max(0.0)
    }

    /// Number of intervals the cone is split into.
    ///
    /// The base scan casts `ray_count() + 1` rays so that both edges of the
    /// cone are included. A zero-width cone has zero intervals and gets a
    /// single ray along forward.
    pub fn ray_count(&self) -> u32 {
        let fov = self.clamped_fov();
        if fov == 0.0 {
            return 0;
        }

        match self.resolution {
            // Negative and NaN densities saturate to zero in the cast.
            Resolution::RaysPerDegree(d) => ((d * fov).round() as u32).max(1),
            Resolution::RayCount(n) => n,
        }
    }

    /// Base ray angles in radians relative to forward, in increasing order.
    pub fn ray_angles(&self) -> impl Iterator<Item = f32> {
        let n = self.ray_count();
        let half = if n == 0 {
            0.0
        } else {
            self.clamped_fov().to_radians() / 2.0
        };

        (0..=n).map(move |i| {
            if n == 0 {
                0.0
            } else {
                half * (2.0 * i as f32 / n as f32 - 1.0)
            }
        })
    }

    /// Check that the config makes sense as a user-supplied setting.
    ///
    /// The computation itself accepts any values and clamps them, this is
    /// for catching typos in config files.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.fov.is_finite(),
            "fov must be a number, got {}",
            self.fov
        );
        ensure!(
            self.view_range.is_finite() && self.view_range > 0.0,
            "view-range must be positive, got {}",
            self.view_range
        );
        match self.resolution {
            Resolution::RaysPerDegree(d) => ensure!(
                d.is_finite() && d >= 0.0,
                "rays-per-degree must be non-negative, got {d}"
            ),
            Resolution::RayCount(_) => {}
        }
        ensure!(
            self.distance_threshold >= 0.0,
            "distance-threshold must be non-negative, got {}",
            self.distance_threshold
        );
        ensure!(
            self.edge_indent.is_finite(),
            "edge-indent must be a number, got {}",
            self.edge_indent
        );
        ensure!(
            self.normal_tolerance >= 0.0,
            "normal-tolerance must be non-negative, got {}",
            self.normal_tolerance
        );

        if self.clamped_fov() != self.fov {
            log::warn!(
                "fov {} is outside 0..=360, using {}",
                self.fov,
                self.clamped_fov()
            );
        }

        Ok(())
    }
}
