use std::io;

use glam::Vec3;

use crate::{Pose, Sample};

/// Triangle fan covering the visible area, in the observer's local frame.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Mesh {
    /// Observer origin followed by one vertex per sample.
    pub vertices: Vec<Vec3>,
    /// Vertex index triples.
    pub triangles: Vec<u32>,
}

impl Mesh {
    /// Build a fan mesh from angle ordered samples.
    ///
    /// Hit points are pushed `edge_indent` units into the surface they hit,
    /// scaled down as the surface turns away from the ray. This keeps the
    /// drawn boundary from z-fighting with the wall it ends on.
    pub fn build(samples: &[Sample], pose: &Pose, edge_indent: f32) -> Mesh {
        let mut vertices = Vec::with_capacity(samples.len() + 1);
        vertices.push(Vec3::ZERO);

        for s in samples {
            let p = match *s {
                Sample::Hit {
                    position, normal, ..
                } => {
                    position
                        - indent(pose.position, position, normal, edge_indent)
                }
                Sample::Miss { position, .. } => position,
            };
            vertices.push(pose.to_local(p));
        }

        let triangles = (1..samples.len() as u32)
            .flat_map(|k| [0, k, k + 1])
            .collect();

        Mesh {
            vertices,
            triangles,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn iter_triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Total area of the fan.
    pub fn area(&self) -> f32 {
        self.iter_triangles()
            .map(|[a, b, c]| (b - a).cross(c - a).length() / 2.0)
            .sum()
    }

    /// Write the mesh as a Wavefront OBJ object.
    pub fn write_obj(&self, mut w: impl io::Write) -> io::Result<()> {
        writeln!(w, "o view_cone")?;
        for v in &self.vertices {
            writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
        }
        // OBJ indices are 1-based.
        for t in self.triangles.chunks_exact(3) {
            writeln!(w, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
        }
        Ok(())
    }
}

/// Offset that moves a hit point into its surface.
///
/// Full `edge_indent` for a surface seen head on, nothing for one seen
/// edge on or from behind.
fn indent(eye: Vec3, position: Vec3, normal: Vec3, edge_indent: f32) -> Vec3 {
    let ray = (position - eye).normalize_or_zero();
    let normal = normal.normalize_or_zero();
    let facing = (-ray.dot(normal)).clamp(0.0, 1.0);
    normal * (edge_indent * facing)
}
