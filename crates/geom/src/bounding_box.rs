use crate::{v64, Ray};

/// Axis-aligned box spanning `lo..=hi`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    lo: v64,
    hi: v64,
}

impl BoundingBox {
    /// `None` for an empty point set.
    pub fn from_points(vs: &[v64]) -> Option<BoundingBox> {
        vs.iter().copied().map(BoundingBox::from_point).reduce(BoundingBox::union)
    }

    pub fn from_point(v: v64) -> BoundingBox {
        BoundingBox { lo: v, hi: v }
    }

    pub fn lo(&self) -> v64 {
        self.lo
    }
    pub fn hi(&self) -> v64 {
        self.hi
    }

    pub fn union(self, other: BoundingBox) -> BoundingBox {
        fn zip(f: impl Fn(f64, f64) -> f64, l: v64, r: v64) -> v64 {
            v64(f(l.x, r.x), f(l.y, r.y), f(l.z, r.z))
        }
        BoundingBox { lo: zip(f64::min, self.lo, other.lo), hi: zip(f64::max, self.hi, other.hi) }
    }

    /// Slab test.
    ///
    /// A zero direction component leaves that slab unbounded if the origin is
    /// within it and misses the box otherwise. An interval that collapses to a
    /// single `t` is a miss, so a box that is flat along an axis is only hit by
    /// rays travelling inside its plane.
    pub fn is_intersected(&self, ray: &Ray) -> bool {
        let mut min_t = f64::NEG_INFINITY;
        let mut max_t = f64::INFINITY;
        for axis in 0..3 {
            let origin = ray.origin().xyz()[axis];
            let dir = ray.dir().xyz()[axis];
            let lo = self.lo.xyz()[axis];
            let hi = self.hi.xyz()[axis];
            if dir == 0.0 {
                if origin < lo || origin > hi {
                    return false;
                }
                continue;
            }
            let inv_dir = 1.0 / dir;
            let t1 = (lo - origin) * inv_dir;
            let t2 = (hi - origin) * inv_dir;
            min_t = min_t.max(t1.min(t2));
            max_t = max_t.min(t1.max(t2));
        }
        max_t > min_t && max_t > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::from_points(&[v64(-1.0, -1.0, -1.0), v64(1.0, 1.0, 1.0)]).unwrap()
    }

    #[test]
    fn spans_all_points() {
        let bb = BoundingBox::from_points(&[
            v64(1.0, -2.0, 0.0),
            v64(-3.0, 4.0, 0.5),
            v64(0.0, 0.0, -7.0),
        ])
        .unwrap();
        assert_eq!(bb.lo(), v64(-3.0, -2.0, -7.0));
        assert_eq!(bb.hi(), v64(1.0, 4.0, 0.5));
        assert_eq!(BoundingBox::from_points(&[]), None);
    }

    #[test]
    fn origin_inside_always_overlaps() {
        let bb = unit_box();
        let dirs = [v64(1.0, 0.0, 0.0), v64(-0.3, 0.2, 0.9), v64(0.0, -1.0, 0.0), v64::ONE];
        for dir in dirs {
            assert!(bb.is_intersected(&Ray::new(v64(0.2, -0.5, 0.1), dir)));
        }
    }

    #[test]
    fn box_behind_is_missed() {
        let bb = unit_box();
        assert!(!bb.is_intersected(&Ray::new(v64(5.0, 0.0, 0.0), v64(1.0, 0.0, 0.0))));
        assert!(!bb.is_intersected(&Ray::new(v64(3.0, 3.0, 3.0), v64(1.0, 2.0, 0.5))));
        assert!(bb.is_intersected(&Ray::new(v64(5.0, 0.0, 0.0), v64(-1.0, 0.0, 0.0))));
    }

    #[test]
    fn zero_component_uses_origin() {
        let bb = unit_box();
        assert!(bb.is_intersected(&Ray::new(v64(0.5, 5.0, 0.0), v64(0.0, -1.0, 0.0))));
        assert!(!bb.is_intersected(&Ray::new(v64(1.5, 5.0, 0.0), v64(0.0, -1.0, 0.0))));
    }

    #[test]
    fn flat_box_is_missed_head_on() {
        let bb = BoundingBox::from_points(&[v64(-1.0, 0.0, -1.0), v64(1.0, 0.0, 1.0)]).unwrap();
        assert!(!bb.is_intersected(&Ray::new(v64(0.1, 5.0, 0.1), v64(0.0, -1.0, 0.0))));
        let padded = bb.union(BoundingBox::from_point(v64(0.0, -1.0, 0.0)));
        assert!(padded.is_intersected(&Ray::new(v64(0.1, 5.0, 0.1), v64(0.0, -1.0, 0.0))));
    }
}
