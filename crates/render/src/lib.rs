//! Recursive ray tracing of a [`scene::WorldSpace`] into an [`rgb::Buf`].
pub mod intersect;
pub mod rgb;
mod camera;
mod shade;

use scene::WorldSpace;

use crate::camera::Camera;

/// {0}
#[derive(Debug, displaydoc::Display)]
pub struct Error(ErrorRepr);

#[derive(Debug, displaydoc::Display)]
pub(crate) enum ErrorRepr {
    /// invalid camera: {0}
    InvalidCamera(&'static str),
}

impl std::error::Error for Error {}

impl From<ErrorRepr> for Error {
    fn from(repr: ErrorRepr) -> Error {
        Error(repr)
    }
}

/// Renders `space` as seen from `camera` into `buf`, following up to
/// `bounces` reflections per pixel.
///
/// The scene is transformed once up front; later changes to `space` need
/// another call.
pub fn render(
    space: &WorldSpace,
    camera: &scene::Camera,
    bounces: u32,
    buf: &mut rgb::Buf<'_>,
) -> Result<(), Error> {
    let camera = Camera::new(camera)?;
    let world = space.build();

    let dim = buf.dim();
    log::debug!("rendering {}x{} pixels, {bounces} bounces", dim[0], dim[1]);
    for idx in buf.by_row() {
        let ray = camera.cast(dim, idx);
        let mut hits = intersect::ray_hit(&world, &ray, None);
        camera.clip(&ray, &mut hits);
        let color = match hits.nearest() {
            None => camera.background,
            Some(hit) => shade::ray_trace(&world, camera.background, ray.dir(), &hit, bounces),
        };
        buf[idx] = color.into();
    }
    Ok(())
}
