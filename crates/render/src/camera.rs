use geom::{dot, v64, Ray};
use scene::{Color, Projection};

use crate::{intersect::RayHit, rgb, ErrorRepr};

/// The view plane of a [`scene::Camera`], resolved into world space.
pub(crate) struct Camera {
    pos: v64,
    /// Top left, top right, bottom left, bottom right.
    corners: [v64; 4],
    dir: v64,
    screen_distance: f64,
    near: f64,
    far: f64,
    perspective: bool,
    pub(crate) background: Color,
}

impl Camera {
    pub(crate) fn new(cfg: &scene::Camera) -> Result<Camera, ErrorRepr> {
        if !(cfg.near > 0.0) {
            Err(ErrorRepr::InvalidCamera("near plane must be positive"))?
        }
        if !(cfg.far > cfg.near) {
            Err(ErrorRepr::InvalidCamera("far plane must lie beyond the near plane"))?
        }
        if !(cfg.aspect > 0.0) {
            Err(ErrorRepr::InvalidCamera("aspect ratio must be positive"))?
        }

        let screen_distance = cfg.near.min(1.0);
        let (half_width, perspective) = match cfg.projection {
            Projection::Perspective { fov } => {
                if !(0.0 < fov && fov < 180.0) {
                    Err(ErrorRepr::InvalidCamera("field of view must be within (0, 180) degrees"))?
                }
                (screen_distance * (fov.to_radians() / 2.0).tan(), true)
            }
            Projection::Orthographic { half_width } => {
                if !(half_width > 0.0) {
                    Err(ErrorRepr::InvalidCamera("orthographic half width must be positive"))?
                }
                (half_width, false)
            }
        };
        let half_height = half_width * cfg.aspect;

        let rotation = cfg.rotation();
        let corners = [
            v64(screen_distance, half_height, -half_width),
            v64(screen_distance, half_height, half_width),
            v64(screen_distance, -half_height, -half_width),
            v64(screen_distance, -half_height, half_width),
        ]
        .map(|it| cfg.pos + rotation.apply(it));
        let center =
            corners[0] + (corners[1] - corners[0]) / 2.0 + (corners[2] - corners[0]) / 2.0;
        let dir = (center - cfg.pos).to_unit();

        Ok(Camera {
            pos: cfg.pos,
            corners,
            dir,
            screen_distance,
            near: cfg.near,
            far: cfg.far,
            perspective,
            background: cfg.background,
        })
    }

    /// The primary ray through the top left corner of pixel `idx`. It starts
    /// on the view plane.
    pub(crate) fn cast(&self, dim: rgb::Idx, idx: rgb::Idx) -> Ray {
        let [c0, c1, c2, _] = self.corners;
        let dx = (c1 - c0) / dim[0] as f64;
        let dy = (c2 - c0) / dim[1] as f64;
        let point = c0 + dy * idx[1] as f64 + dx * idx[0] as f64;
        let dir = if self.perspective { point - self.pos } else { self.dir };
        Ray::new(point, dir)
    }

    /// Drops hits outside the near and far planes. Depth is measured along the
    /// view direction, from the view plane.
    pub(crate) fn clip(&self, ray: &Ray, hits: &mut RayHit<'_>) {
        let cos = if self.perspective { dot(ray.dir(), self.dir) } else { 1.0 };
        let near = self.near - self.screen_distance;
        let far = self.far - self.screen_distance;
        hits.retain(|hit| {
            let depth = hit.t * cos;
            near <= depth && depth <= far
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn looking_down(projection: Projection) -> scene::Camera {
        scene::Camera {
            pos: v64(0.0, 5.0, 0.0),
            rotation: v64(0.0, 0.0, -90.0),
            projection,
            near: 0.5,
            far: 20.0,
            aspect: 0.5,
            background: Color::BLACK,
        }
    }

    #[test]
    fn derives_view_plane() {
        let cam = Camera::new(&looking_down(Projection::Perspective { fov: 90.0 })).unwrap();
        assert_abs_diff_eq!(cam.screen_distance, 0.5);
        assert_abs_diff_eq!(cam.dir.y, -1.0, epsilon = 1e-12);
        // Up in the image is +x in the world.
        let [tl, tr, bl, _] = cam.corners;
        assert_abs_diff_eq!(tl.y, 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(tl.x, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(bl.x, -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(tl.z, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(tr.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn center_pixel_looks_forward() {
        for projection in
            [Projection::Perspective { fov: 60.0 }, Projection::Orthographic { half_width: 3.0 }]
        {
            let cam = Camera::new(&looking_down(projection)).unwrap();
            let ray = cam.cast([8, 4], [4, 2]);
            assert_abs_diff_eq!(ray.dir().y, -1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(ray.origin().y, 4.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let cam = Camera::new(&looking_down(Projection::Orthographic { half_width: 3.0 })).unwrap();
        let a = cam.cast([8, 4], [0, 0]);
        let b = cam.cast([8, 4], [7, 3]);
        assert_eq!(a.dir(), b.dir());
        assert_abs_diff_eq!(a.origin().z, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_cameras() {
        let mut cfg = looking_down(Projection::Perspective { fov: 180.0 });
        assert!(Camera::new(&cfg).is_err());
        cfg.projection = Projection::Orthographic { half_width: 0.0 };
        assert!(Camera::new(&cfg).is_err());
        cfg.projection = Projection::Perspective { fov: 45.0 };
        cfg.far = cfg.near;
        assert!(Camera::new(&cfg).is_err());
        cfg.far = 10.0;
        cfg.near = 0.0;
        assert!(Camera::new(&cfg).is_err());
    }
}
