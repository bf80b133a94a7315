//! Ray queries against a frozen [`World`].
use std::ptr;

use geom::{cross, dot, v64, Ray};
use scene::{Triangle, World};

/// A surface struck by a ray, `t` units along it.
#[derive(Clone, Copy)]
pub struct Hit<'w> {
    pub triangle: &'w Triangle,
    pub point: v64,
    pub t: f64,
}

/// Every surface along a ray, in discovery order.
#[derive(Default)]
pub struct RayHit<'w> {
    hits: Vec<Hit<'w>>,
}

impl<'w> RayHit<'w> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The closest hit; among equally close hits the first one found.
    pub fn nearest(&self) -> Option<Hit<'w>> {
        let mut res: Option<Hit<'w>> = None;
        for &hit in &self.hits {
            match res {
                Some(best) if best.t <= hit.t => (),
                _ => res = Some(hit),
            }
        }
        res
    }

    pub fn retain(&mut self, f: impl FnMut(&Hit<'w>) -> bool) {
        self.hits.retain(f)
    }
}

/// Collects every triangle `ray` hits, skipping `exclude`.
///
/// Objects whose bounding box the ray misses are skipped as a whole.
pub fn ray_hit<'w>(world: &'w World, ray: &Ray, exclude: Option<&Triangle>) -> RayHit<'w> {
    let mut res = RayHit::default();
    for object in &world.objects {
        if !object.bounding_box.is_intersected(ray) {
            continue;
        }
        for triangle in &object.triangles {
            if exclude.is_some_and(|it| ptr::eq(it, triangle)) {
                continue;
            }
            if let Some((t, point)) = intersect_triangle(triangle, ray) {
                res.hits.push(Hit { triangle, point, t });
            }
        }
    }
    res
}

/// Triangles are one-sided: only the side the normal points to is hit.
pub fn intersect_triangle(tr: &Triangle, ray: &Ray) -> Option<(f64, v64)> {
    let nr = dot(tr.n, ray.dir());
    if !(nr < 0.0) {
        return None;
    }
    let t = dot(tr.n, tr.v[1] - ray.origin()) / nr;
    if !(t > 0.0) {
        return None;
    }
    let point = ray.at(t);
    for i in 0..3 {
        let a = tr.v[i];
        let b = tr.v[(i + 1) % 3];
        if dot(tr.n, cross(b - a, point - a)) < 0.0 {
            return None;
        }
    }
    Some((t, point))
}
