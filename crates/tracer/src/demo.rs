//! The built-in scene: a pyramid and an optional sphere on a floor.
use std::{rc::Rc, str::FromStr};

use geom::v64;
use scene::{
    Camera, Color, InvalidObject, Light, Material, Palette, Projection, WorldObject, WorldSpace,
};

const SUNLIGHT: Color = Color::new(255, 247, 219);

/// Which light illuminates the demo scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LightKind {
    Point,
    Spot,
    Directional,
}

impl FromStr for LightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<LightKind, String> {
        let res = match s {
            "point" => LightKind::Point,
            "spot" => LightKind::Spot,
            "directional" => LightKind::Directional,
            _ => return Err(format!("unknown light `{s}`, expected point, spot or directional")),
        };
        Ok(res)
    }
}

impl LightKind {
    fn light(self) -> Light {
        match self {
            LightKind::Point => Light::point(v64(3.0, 5.0, 1.0), 30.0, SUNLIGHT),
            LightKind::Spot => {
                let dim = Color::new(36, 36, 36);
                Light::spot(v64(3.0, 5.0, 1.0), v64(1.0, -1.0, 0.0), 60.0, dim, 30.0)
            }
            LightKind::Directional => Light::directional(v64(1.0, -1.0, -1.0), 0.7, SUNLIGHT),
        }
    }
}

pub(crate) fn camera(width: u32, height: u32) -> Camera {
    Camera {
        pos: v64(0.0, 3.0, 0.0),
        rotation: v64(0.0, 0.0, -15.0),
        projection: Projection::Perspective { fov: 80.0 },
        near: 1.0,
        far: 40.0,
        aspect: height as f64 / width as f64,
        background: Color::new(155, 230, 255),
    }
}

fn material(diffuse: Palette, reflectivity: f64, shininess: f64) -> Rc<Material> {
    Material::new(diffuse.into(), Color::WHITE, 1.0, reflectivity, shininess)
}

/// Material of the imported sphere.
pub(crate) fn gloss_purple() -> Rc<Material> {
    material(Palette::Purple, 0.9, 3.0)
}

/// Where the imported sphere goes.
pub(crate) const SPHERE_ORIGIN: v64 = v64(6.0, 1.5, 0.0);

pub(crate) fn scene(
    light: LightKind,
    sphere: Option<WorldObject>,
) -> Result<WorldSpace, InvalidObject> {
    let orange_flat = material(Palette::Orange, 0.0, 0.0);
    let green_shiny = material(Palette::Yellow, 0.5, 5.0);
    let floor_grey = material(Palette::Grey, 0.5, 20.0);

    let mut space = WorldSpace::new(0.15);

    let mut pyramid = WorldObject::new(
        v64(5.0, 1.5, -1.5),
        vec![v64(0.0, -1.0, 0.0), v64(1.0, 1.0, -1.0), v64(1.0, 1.0, 1.0), v64(-1.0, 1.0, 0.0)],
        vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [3, 2, 1]],
        vec![green_shiny.clone(), orange_flat.clone(), green_shiny, orange_flat],
    )?;
    pyramid.rotate_z(45.0);
    space.add_object(pyramid);

    if let Some(sphere) = sphere {
        space.add_object(sphere);
    }

    // The point below the floor gives its bounding box some height.
    let floor = WorldObject::uniform(
        v64::ZERO,
        vec![
            v64(0.0, 0.0, -20.0),
            v64(0.0, 0.0, 20.0),
            v64(40.0, 0.0, -20.0),
            v64(40.0, 0.0, 20.0),
            v64(0.0, -1.0, 0.0),
        ],
        vec![[0, 1, 2], [1, 3, 2]],
        floor_grey,
    )?;
    space.add_object(floor);

    space.set_light(light.light());
    Ok(space)
}

#[cfg(test)]
mod tests {
    use render::rgb;

    use super::*;

    #[test]
    fn parses_light_kind() {
        assert_eq!("spot".parse::<LightKind>(), Ok(LightKind::Spot));
        assert!("ambient".parse::<LightKind>().is_err());
    }

    #[test]
    fn renders_sky_and_floor() {
        let [width, height] = [32, 18];
        let camera = camera(width, height);
        for light in [LightKind::Point, LightKind::Spot, LightKind::Directional] {
            let space = scene(light, None).unwrap();
            let mut storage = vec![rgb::Color::default(); (width * height) as usize];
            let mut buf = rgb::Buf::new([width, height], &mut storage);
            render::render(&space, &camera, 2, &mut buf).unwrap();

            let sky = rgb::Color::from(camera.background);
            assert_eq!(buf[[0, 0]], sky);
            assert_ne!(buf[[16, 17]], sky);
        }
    }
}
