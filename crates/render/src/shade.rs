use geom::{dot, v64, Ray};
use scene::{Color, Light, World};

use crate::intersect::{ray_hit, Hit};

/// How a light reaches a surface point.
struct Incidence {
    /// Unit vector from the point towards the light.
    to_light: v64,
    /// Divides the brightness: squared distance, or 1 for directional light.
    falloff: f64,
}

/// `None` when the point is outside a spot light's cone.
fn incidence(light: &Light, point: v64) -> Option<Incidence> {
    match *light {
        Light::Point { pos, .. } => {
            let d = pos - point;
            Some(Incidence { to_light: d.to_unit(), falloff: d.norm_squared() })
        }
        Light::Spot { pos, dir, half_angle, .. } => {
            let d = pos - point;
            let to_light = d.to_unit();
            if dot((-dir).to_unit(), to_light) < half_angle.cos() {
                return None;
            }
            Some(Incidence { to_light, falloff: d.norm_squared() })
        }
        Light::Directional { dir, .. } => {
            Some(Incidence { to_light: (-dir).to_unit(), falloff: 1.0 })
        }
    }
}

/// Color seen along `view` at `hit`, following at most `bounces` mirror
/// reflections.
pub(crate) fn ray_trace(
    world: &World,
    background: Color,
    view: v64,
    hit: &Hit<'_>,
    bounces: u32,
) -> Color {
    let tr = hit.triangle;
    let m = &*tr.material;
    let light = &world.light;

    let ambient = m.diffuse.combine(background, world.ambient);

    let incidence = incidence(light, hit.point);
    let lit = match &incidence {
        Some(inc) => ray_hit(world, &Ray::new(hit.point, inc.to_light), Some(tr)).is_empty(),
        None => false,
    };
    let diffuse = match &incidence {
        Some(inc) => {
            let cos = dot(inc.to_light, tr.n).abs();
            let k = light.brightness() * cos * m.diffuse_strength / inc.falloff;
            m.diffuse.combine(light.color(), k)
        }
        None => Color::BLACK,
    };

    let mut specular = Color::BLACK;
    let mut reflection = Color::BLACK;
    // Specular highlights only show on reflective materials.
    if bounces > 0 && m.reflectivity > 0.0 {
        let reverse = (-view).to_unit();
        let reflected = reverse.reflect(tr.n);
        if let Some(inc) = &incidence {
            let k = dot(inc.to_light.reflect(tr.n), reverse).max(0.0);
            specular = m.specular.combine(light.color(), m.reflectivity * k.powf(m.shininess));
        }
        let mirrored = ray_hit(world, &Ray::new(hit.point, reflected), Some(tr));
        if let Some(next) = mirrored.nearest() {
            let c = ray_trace(world, background, reflected, &next, bounces - 1);
            reflection = reflection + c.scale(m.reflectivity);
        }
    }

    if lit {
        ambient + diffuse + reflection + specular
    } else {
        ambient + reflection
    }
}
