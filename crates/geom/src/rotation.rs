use crate::{dot, v64};

/// Rotation by Euler angles, in radians.
///
/// The matrix is `Rx * Rz * Ry`: a point is turned about Y first, then Z,
/// then X, all around the world axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    rows: [v64; 3],
}

impl Rotation {
    pub const IDENTITY: Rotation =
        Rotation { rows: [v64(1.0, 0.0, 0.0), v64(0.0, 1.0, 0.0), v64(0.0, 0.0, 1.0)] };

    pub fn from_euler(angles: v64) -> Rotation {
        let (sx, cx) = angles.x.sin_cos();
        let (sy, cy) = angles.y.sin_cos();
        let (sz, cz) = angles.z.sin_cos();
        Rotation {
            rows: [
                v64(cz * cy, -sz, cz * sy),
                v64(sx * sy + cx * cy * sz, cx * cz, cx * sz * sy - cy * sx),
                v64(cy * sx * sz - cx * sy, cz * sx, cx * cy + sx * sz * sy),
            ],
        }
    }

    pub fn apply(&self, v: v64) -> v64 {
        let [r0, r1, r2] = self.rows;
        v64(dot(r0, v), dot(r1, v), dot(r2, v))
    }
}
