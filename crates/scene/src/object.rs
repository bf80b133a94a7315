use std::{f64::consts::TAU, rc::Rc};

use geom::{cross, v64, BoundingBox, Rotation};

use crate::Material;

/// A world-space triangle. The normal follows the vertex winding:
/// `unit((v[1] - v[0]) x (v[2] - v[0]))`.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub v: [v64; 3],
    pub n: v64,
    pub material: Rc<Material>,
}

/// A mesh placed in the world by position, rotation and scale.
///
/// Rays only reach the triangles when they hit the object's bounding box,
/// and a box with zero extent along an axis is missed. A mesh whose points
/// all lie in one plane is therefore invisible. Add a point off the plane
/// that no face references to give the box some depth.
#[derive(Debug, Clone)]
pub struct WorldObject {
    origin: v64,
    /// Radians, each within `(-2pi, 2pi)`.
    angles: v64,
    scale: v64,
    points: Vec<v64>,
    faces: Vec<[u32; 3]>,
    materials: Vec<Rc<Material>>,
}

/// A [`WorldObject`] transformed into world space.
#[derive(Debug, Clone)]
pub struct Object {
    pub triangles: Vec<Triangle>,
    pub bounding_box: BoundingBox,
}

/// {0}
#[derive(Debug, displaydoc::Display)]
pub struct InvalidObject(InvalidObjectRepr);

#[derive(Debug, displaydoc::Display)]
enum InvalidObjectRepr {
    /// {faces} faces but {materials} materials
    MaterialCount { faces: usize, materials: usize },
    /// face {face} refers to point {index}, only {points} points
    FaceIndexOutOfBounds { face: usize, index: u32, points: usize },
}

impl std::error::Error for InvalidObject {}

impl WorldObject {
    pub fn new(
        origin: v64,
        points: Vec<v64>,
        faces: Vec<[u32; 3]>,
        materials: Vec<Rc<Material>>,
    ) -> Result<WorldObject, InvalidObject> {
        if faces.len() != materials.len() {
            let (faces, materials) = (faces.len(), materials.len());
            Err(InvalidObjectRepr::MaterialCount { faces, materials })?
        }
        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = f.iter().find(|&&it| it as usize >= points.len()) {
                Err(InvalidObjectRepr::FaceIndexOutOfBounds { face, index, points: points.len() })?
            }
        }
        Ok(WorldObject { origin, angles: v64::ZERO, scale: v64::ONE, points, faces, materials })
    }

    /// An object with `material` on every face.
    pub fn uniform(
        origin: v64,
        points: Vec<v64>,
        faces: Vec<[u32; 3]>,
        material: Rc<Material>,
    ) -> Result<WorldObject, InvalidObject> {
        let materials = vec![material; faces.len()];
        WorldObject::new(origin, points, faces, materials)
    }

    pub fn origin(&self) -> v64 {
        self.origin
    }
    pub fn angles(&self) -> v64 {
        self.angles
    }
    pub fn scale(&self) -> v64 {
        self.scale
    }
    pub fn points(&self) -> &[v64] {
        &self.points
    }
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn translate(&mut self, delta: v64) {
        self.origin = self.origin + delta;
    }

    pub fn move_to(&mut self, pos: v64) {
        self.origin = pos;
    }

    /// Rotations are in degrees and accumulate.
    pub fn rotate_x(&mut self, degrees: f64) {
        self.angles.x = wrap_angle(self.angles.x + degrees.to_radians());
    }
    pub fn rotate_y(&mut self, degrees: f64) {
        self.angles.y = wrap_angle(self.angles.y + degrees.to_radians());
    }
    pub fn rotate_z(&mut self, degrees: f64) {
        self.angles.z = wrap_angle(self.angles.z + degrees.to_radians());
    }

    /// Replaces, does not accumulate.
    pub fn set_scale(&mut self, scale: v64) {
        self.scale = scale;
    }

    /// Scales, rotates and translates every point, then rebuilds the triangles.
    pub fn transform(&self) -> Object {
        let rotation = Rotation::from_euler(self.angles);
        let points: Vec<v64> = self
            .points
            .iter()
            .map(|&p| self.origin + rotation.apply(p.mul_elem(self.scale)))
            .collect();
        let bounding_box = BoundingBox::from_points(&points).unwrap_or_default();

        let triangles = self
            .faces
            .iter()
            .zip(&self.materials)
            .map(|(f, material)| {
                let v = f.map(|it| points[it as usize]);
                let n = cross(v[1] - v[0], v[2] - v[0]).to_unit();
                Triangle { v, n, material: Rc::clone(material) }
            })
            .collect();
        Object { triangles, bounding_box }
    }
}

impl From<InvalidObjectRepr> for InvalidObject {
    fn from(repr: InvalidObjectRepr) -> InvalidObject {
        InvalidObject(repr)
    }
}

fn wrap_angle(radians: f64) -> f64 {
    radians % TAU
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geom::dot;

    use super::*;
    use crate::Color;

    fn material() -> Rc<Material> {
        Material::new(Color::WHITE, Color::WHITE, 1.0, 0.0, 0.0)
    }

    fn pyramid() -> WorldObject {
        WorldObject::uniform(
            v64(5.0, 1.5, -1.5),
            vec![v64(0.0, -1.0, 0.0), v64(1.0, 1.0, -1.0), v64(1.0, 1.0, 1.0), v64(-1.0, 1.0, 0.0)],
            vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [3, 2, 1]],
            material(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_tables() {
        let points = vec![v64::ZERO, v64(1.0, 0.0, 0.0), v64(0.0, 1.0, 0.0)];
        let err = WorldObject::new(v64::ZERO, points.clone(), vec![[0, 1, 2]], vec![]).unwrap_err();
        assert_eq!(err.to_string(), "1 faces but 0 materials");

        let err = WorldObject::uniform(v64::ZERO, points, vec![[0, 1, 3]], material()).unwrap_err();
        assert_eq!(err.to_string(), "face 0 refers to point 3, only 3 points");
    }

    #[test]
    fn normals_are_orthogonal_unit() {
        let mut o = pyramid();
        o.rotate_z(45.0);
        o.rotate_x(-30.0);
        o.set_scale(v64(2.0, 0.5, 1.0));
        for t in o.transform().triangles {
            assert_abs_diff_eq!(t.n.norm(), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(dot(t.n, t.v[1] - t.v[0]), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(dot(t.n, t.v[2] - t.v[0]), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn winding_sets_normal_side() {
        let points = vec![v64(0.0, 0.0, 0.0), v64(0.0, 0.0, 1.0), v64(1.0, 0.0, 0.0)];
        let o = WorldObject::uniform(v64::ZERO, points, vec![[0, 1, 2], [0, 2, 1]], material())
            .unwrap()
            .transform();
        assert_eq!(o.triangles[0].n, v64(0.0, 1.0, 0.0));
        assert_eq!(o.triangles[1].n, v64(0.0, -1.0, 0.0));
    }

    #[test]
    fn scale_before_rotation() {
        let mut o = WorldObject::uniform(
            v64(1.0, 2.0, 3.0),
            vec![v64(1.0, 0.0, 0.0), v64(0.0, 1.0, 0.0), v64(0.0, 0.0, 1.0)],
            vec![[0, 1, 2]],
            material(),
        )
        .unwrap();
        o.set_scale(v64(2.0, 1.0, 1.0));
        o.rotate_z(90.0);
        let object = o.transform();
        let t = &object.triangles[0];
        assert_abs_diff_eq!(t.v[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.v[0].y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.v[1].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.v[1].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn bounding_box_covers_unused_points() {
        let points = vec![
            v64(0.0, 0.0, -20.0),
            v64(0.0, 0.0, 20.0),
            v64(40.0, 0.0, -20.0),
            v64(0.0, -1.0, 0.0),
        ];
        let o = WorldObject::uniform(v64::ZERO, points, vec![[0, 1, 2]], material())
            .unwrap()
            .transform();
        assert_eq!(o.bounding_box.lo(), v64(0.0, -1.0, -20.0));
        assert_eq!(o.bounding_box.hi(), v64(40.0, 0.0, 20.0));
    }

    #[test]
    fn angles_wrap() {
        let mut o = pyramid();
        o.rotate_y(350.0);
        o.rotate_y(20.0);
        assert_abs_diff_eq!(o.angles().y, 10f64.to_radians(), epsilon = 1e-12);
        o.rotate_x(-725.0);
        assert_abs_diff_eq!(o.angles().x, -5f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn transform_follows_moves() {
        let mut o = pyramid();
        o.translate(v64(1.0, 0.0, 0.0));
        o.translate(v64(0.0, 1.0, 0.0));
        assert_eq!(o.origin(), v64(6.0, 2.5, -1.5));
        o.move_to(v64::ZERO);
        assert_eq!(o.transform().triangles[0].v[0], v64(0.0, -1.0, 0.0));
    }
}
