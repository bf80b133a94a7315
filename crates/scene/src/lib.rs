//! Scene description.
//!
//! A scene is assembled through the mutable [`WorldSpace`] and
//! [`WorldObject`] builders and then frozen with [`WorldSpace::build`] into a
//! [`World`], which is the only thing the renderer reads. Transforms are
//! applied exactly once, at build time.
mod color;
mod object;
pub mod stl;

use std::rc::Rc;

use geom::{v64, Rotation};

pub use crate::{
    color::{Color, Palette, ParseColorError},
    object::{InvalidObject, Object, Triangle, WorldObject},
};

#[derive(Debug, Default, Clone)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub diffuse_strength: f64,
    pub reflectivity: f64,
    pub shininess: f64,
}

#[derive(Debug, Clone)]
pub enum Light {
    Point { pos: v64, brightness: f64, color: Color },
    /// Lights only the cone of `half_angle` radians around `dir`.
    Spot { pos: v64, dir: v64, half_angle: f64, brightness: f64, color: Color },
    /// Infinitely far light shining along `dir`.
    Directional { dir: v64, brightness: f64, color: Color },
}

#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Perspective { fov: f64 },
    /// Half of the view plane width, in world units.
    Orthographic { half_width: f64 },
}

/// Camera placement as authored. It looks along `+x` before rotation.
#[derive(Debug, Clone)]
pub struct Camera {
    pub pos: v64,
    /// Euler angles in degrees, see [`Rotation`].
    pub rotation: v64,
    pub projection: Projection,
    pub near: f64,
    pub far: f64,
    /// Height over width.
    pub aspect: f64,
    pub background: Color,
}

pub struct WorldSpace {
    objects: Vec<WorldObject>,
    light: Light,
    ambient: f64,
}

/// A frozen scene: every object transformed into world space.
pub struct World {
    pub objects: Vec<Object>,
    pub light: Light,
    pub ambient: f64,
}

impl Material {
    pub fn new(
        diffuse: Color,
        specular: Color,
        diffuse_strength: f64,
        reflectivity: f64,
        shininess: f64,
    ) -> Rc<Material> {
        assert!((0.0..=1.0).contains(&diffuse_strength), "{diffuse_strength}");
        assert!((0.0..=1.0).contains(&reflectivity), "{reflectivity}");
        assert!(shininess >= 0.0, "{shininess}");
        Rc::new(Material { diffuse, specular, diffuse_strength, reflectivity, shininess })
    }
}

impl Light {
    pub fn point(pos: v64, brightness: f64, color: Color) -> Light {
        Light::Point { pos, brightness, color }
    }

    /// `angle` is the half angle of the cone, in degrees.
    pub fn spot(pos: v64, dir: v64, brightness: f64, color: Color, angle: f64) -> Light {
        Light::Spot { pos, dir, half_angle: angle.to_radians(), brightness, color }
    }

    pub fn directional(dir: v64, brightness: f64, color: Color) -> Light {
        Light::Directional { dir, brightness, color }
    }

    pub fn brightness(&self) -> f64 {
        match *self {
            Light::Point { brightness, .. }
            | Light::Spot { brightness, .. }
            | Light::Directional { brightness, .. } => brightness,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Light::Point { color, .. }
            | Light::Spot { color, .. }
            | Light::Directional { color, .. } => color,
        }
    }
}

impl Default for Light {
    fn default() -> Light {
        Light::point(v64::ZERO, 0.0, Color::BLACK)
    }
}

impl Camera {
    pub fn rotation(&self) -> Rotation {
        let r = self.rotation;
        Rotation::from_euler(v64(r.x.to_radians(), r.y.to_radians(), r.z.to_radians()))
    }
}

impl WorldSpace {
    pub fn new(ambient: f64) -> WorldSpace {
        assert!((0.0..=1.0).contains(&ambient), "{ambient}");
        WorldSpace { objects: Vec::new(), light: Light::default(), ambient }
    }

    pub fn add_object(&mut self, object: WorldObject) {
        self.objects.push(object);
    }

    pub fn set_light(&mut self, light: Light) {
        self.light = light;
    }

    pub fn objects_mut(&mut self) -> &mut [WorldObject] {
        &mut self.objects
    }

    pub fn build(&self) -> World {
        let objects: Vec<Object> = self.objects.iter().map(WorldObject::transform).collect();
        log::debug!(
            "built {} objects, {} triangles",
            objects.len(),
            objects.iter().map(|it| it.triangles.len()).sum::<usize>()
        );
        World { objects, light: self.light.clone(), ambient: self.ambient }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_angle_in_radians() {
        let light = Light::spot(v64::ZERO, v64(0.0, -1.0, 0.0), 2.0, Color::WHITE, 90.0);
        match light {
            Light::Spot { half_angle, .. } => {
                approx::assert_abs_diff_eq!(half_angle, std::f64::consts::FRAC_PI_2)
            }
            _ => unreachable!(),
        }
        assert_eq!(light.brightness(), 2.0);
        assert_eq!(light.color(), Color::WHITE);
    }

    #[test]
    fn build_keeps_insertion_order() {
        let m = Material::new(Color::WHITE, Color::WHITE, 1.0, 0.0, 0.0);
        let points = vec![v64(0.0, 0.0, 0.0), v64(1.0, 0.0, 0.0), v64(0.0, 0.0, -1.0)];
        let mut space = WorldSpace::new(0.5);
        for x in [0.0, 10.0] {
            let o =
                WorldObject::uniform(v64(x, 0.0, 0.0), points.clone(), vec![[0, 1, 2]], m.clone());
            let o = o.unwrap();
            space.add_object(o);
        }
        space.objects_mut()[1].translate(v64(5.0, 0.0, 0.0));

        let world = space.build();
        assert_eq!(world.objects.len(), 2);
        assert_eq!(world.objects[0].triangles[0].v[0], v64(0.0, 0.0, 0.0));
        assert_eq!(world.objects[1].triangles[0].v[0], v64(15.0, 0.0, 0.0));
        assert_eq!(world.ambient, 0.5);
    }

    #[test]
    #[should_panic]
    fn ambient_out_of_range() {
        WorldSpace::new(1.5);
    }
}
