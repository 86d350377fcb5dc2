#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod io;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod shading;
pub mod textures;
pub mod ui;

use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;

use env_logger::Env;

use bmp_support::BMPFormatSupportPlugin;
use lumen_core::models::io::ImageWriterOptions;
use lumen_core::models::radiance::RadianceMap;
use lumen_core::plugins::ImageFormatSupportPlugin;
use lumen_core::utils::print_intro;

use render::basic::BasicRender;
use render::multithreaded::MultithreadedRender;
use render::render::Render;
use render::tonemap::ToneMapper;
use scenes::bunny::BunnySceneProvider;
use scenes::provider::SceneProvider;
use scenes::whitted::WhittedSceneProvider;
use ui::window::WindowOutput;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    if let Err(err) = render_scene(&args) {
        error!("{}", err);
        std::process::exit(1);
    }

    info!("done");
}

fn render_scene(args: &[String]) -> Result<(), Box<dyn Error>> {
    let options = parse_options(args);

    let scene_name = args
        .get(1)
        .filter(|arg| !arg.starts_with("--"))
        .map(|arg| arg.as_str())
        .unwrap_or("whitted");
    let provider: Box<dyn SceneProvider> = match scene_name {
        "whitted" => Box::new(WhittedSceneProvider::new()),
        "bunny" => Box::new(BunnySceneProvider::new()),
        other => return Err(format!("unknown scene: {} (expected whitted or bunny)", other).into()),
    };

    let mut scene = provider.scene(&options)?;
    info!("building partition over {} primitives", scene.objects().len());
    scene.build();

    let camera = scene.camera().ok_or("scene has no camera")?;
    let width = camera.width();
    let height = camera.height();

    let supersample = options.get("samples").map(|samples| samples.as_str()) == Some("2");
    let render: Box<dyn Render> = match options.get("render").map(|render| render.as_str()) {
        None | Some("multithreaded") => {
            if supersample {
                Box::new(MultithreadedRender::with_supersampling())
            } else {
                Box::new(MultithreadedRender::new())
            }
        },
        Some("basic") => {
            if supersample {
                Box::new(BasicRender::with_supersampling())
            } else {
                Box::new(BasicRender::new())
            }
        },
        Some(other) => return Err(format!("unknown render: {}", other).into()),
    };

    info!("rendering {}x{} image", width, height);
    let mut film = RadianceMap::new(width, height);
    render.render(&scene, &mut film)?;

    let tone_mapper = match options.get("exposure") {
        Some(exposure) => ToneMapper::new().with_exposure(exposure.parse()?),
        None => ToneMapper::new(),
    };
    let image = tone_mapper.apply(&film);

    info!("saving rendered image");
    let output_format = BMPFormatSupportPlugin::new();
    let image_bytes = output_format
        .writer()
        .write(&image, &ImageWriterOptions::default())?;
    let output_path = options
        .get("out")
        .cloned()
        .unwrap_or_else(|| "result.bmp".to_string());
    fs::write(&output_path, &image_bytes)?;
    info!("saved rendered image to {}", output_path);

    if options.contains_key("preview") {
        match WindowOutput::new(width, height) {
            Ok(mut window) => window.show(&image),
            Err(err) => warn!("failed to open preview window: {}", err),
        }
    }

    Ok(())
}

/// `--key value` pairs; a `--flag` followed by another option (or nothing)
/// is stored as "true".
fn parse_options(args: &[String]) -> HashMap<String, String> {
    let mut options = HashMap::new();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if let Some(key) = arg.strip_prefix("--") {
            let value = args.get(i + 1).filter(|next| !next.starts_with("--"));
            match value {
                Some(value) => {
                    options.insert(key.to_string(), value.clone());
                    i += 2;
                },
                None => {
                    options.insert(key.to_string(), "true".to_string());
                    i += 1;
                },
            }
        } else {
            i += 1;
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_key_value_options() {
        let options = parse_options(&args(&["lumen", "whitted", "--width", "640", "--out", "x.bmp"]));
        assert_eq!(options.get("width").map(|s| s.as_str()), Some("640"));
        assert_eq!(options.get("out").map(|s| s.as_str()), Some("x.bmp"));
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_options(&args(&["lumen", "--preview", "--render", "basic"]));
        assert_eq!(options.get("preview").map(|s| s.as_str()), Some("true"));
        assert_eq!(options.get("render").map(|s| s.as_str()), Some("basic"));
    }

    #[test]
    fn test_positional_scene_is_not_an_option() {
        let options = parse_options(&args(&["lumen", "bunny"]));
        assert!(options.is_empty());
    }
}
