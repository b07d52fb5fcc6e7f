use clap::Parser;
use log::{error, info};

mod cli;
mod output;

use cli::Args;
use output::{save_image_as_exr, save_image_as_png, send_image_to_tev};
use whitted::renderer::{render_scene, RenderSettings};
use whitted::scene::Scene;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    // Log application startup with version information
    info!("Whitted - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, fov: {}, max depth: {}",
        args.width, args.height, args.fov, args.max_depth
    );

    let scene = Scene::default();
    let settings = RenderSettings {
        width: args.width,
        height: args.height,
        fov: args.fov,
        max_depth: args.max_depth,
    };

    let image = match render_scene(&scene, &settings) {
        Ok(image) => image,
        Err(e) => {
            error!("Render failed: {}", e);
            std::process::exit(1);
        }
    };

    // Send image to TEV if requested
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&image, tev_address);
    }

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else {
        error!("Unsupported file extension '{}'. Only .png and .exr formats are supported.",
               std::path::Path::new(&args.output).extension().unwrap_or_default().to_string_lossy());
        std::process::exit(1);
    }
}
