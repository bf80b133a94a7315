mod demo;
mod ppm;

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use render::rgb;

use crate::demo::LightKind;

/// Renders the demo scene to a ppm image.
#[derive(argh::FromArgs)]
struct Args {
    /// width of the image, in pixels
    #[argh(option, default = "1280")]
    width: u32,

    /// height of the image, in pixels
    #[argh(option, default = "720")]
    height: u32,

    /// maximum number of mirror reflections per pixel
    #[argh(option, default = "8")]
    bounces: u32,

    /// light source: point, spot or directional
    #[argh(option, default = "LightKind::Point")]
    light: LightKind,

    /// ascii stl mesh to place in the scene as a glossy sphere
    #[argh(option)]
    sphere: Option<PathBuf>,

    /// where to write the image
    #[argh(option, short = 'o', default = "PathBuf::from(\"image.ppm\")")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();
    let start = Instant::now();

    let sphere = match &args.sphere {
        Some(path) => {
            log::info!("importing {}", path.display());
            let stl = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let sphere = scene::stl::parse(&stl, demo::SPHERE_ORIGIN, demo::gloss_purple())
                .with_context(|| format!("parsing {}", path.display()))?;
            Some(sphere)
        }
        None => None,
    };

    log::info!("building scene with {:?} light", args.light);
    let space = demo::scene(args.light, sphere).context("building scene")?;
    let camera = demo::camera(args.width, args.height);

    log::info!("rendering {}x{}, {} bounces", args.width, args.height, args.bounces);
    let mut buf = vec![rgb::Color::default(); pixel_count(args.width, args.height)];
    let mut buf = rgb::Buf::new([args.width, args.height], &mut buf);
    render::render(&space, &camera, args.bounces, &mut buf).context("rendering")?;

    log::info!("exporting to {}", args.output.display());
    let file = fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = io::BufWriter::new(file);
    ppm::write_ppm(&buf, &mut out).context("writing output")?;
    out.flush().context("writing output")?;

    log::info!("done in {:.2?}", start.elapsed());
    Ok(())
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[test]
fn test_pixel_count_does_not_wrap() {
    assert_eq!(pixel_count(1280, 720), 921_600);
    assert_eq!(pixel_count(70_000, 70_000), 4_900_000_000);
}
