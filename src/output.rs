//! # Output Module
//!
//! Display sinks for a finished framebuffer:
//! - Real-time visualization via TEV (The EXR Viewer)
//! - PNG file export
//! - EXR file export
//!
//! The renderer hands over final 8-bit RGB values, so the PNG path writes
//! them untouched. The TEV and EXR paths scale the bytes back to linear
//! floating point, which is the representation both consumers expect.
//!
//! All sinks log success or failure and never panic on I/O errors: a frame
//! that took seconds to render should survive a broken pipe or full disk.

use exr::prelude::*;
use image::Rgb;
use log::{debug, info, warn};
use std::net::TcpStream;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};
use whitted::renderer::FrameBuffer;

/// Send a rendered frame to TEV for real-time visualization
///
/// Establishes a TCP connection to a TEV client and sends the frame for
/// display:
///
/// 1. Network connection with TCP_NODELAY for reduced latency
/// 2. TEV image creation with an RGB channel configuration
/// 3. Data conversion from interleaved bytes to channel-wise linear f32
/// 4. Data transmission with timing
///
/// # Arguments
///
/// * `image` - finished RGB framebuffer
/// * `tev_address` - TEV server address (IP:port or just IP, defaults to port 14158)
///
/// # Errors
///
/// Connection and protocol errors are logged as warnings; the function
/// returns normally in all cases.
pub fn send_image_to_tev(image: &FrameBuffer, tev_address: &str) {
    // Add default port if not specified
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    let (width, height) = image.dimensions();

    match TcpStream::connect(&tev_address) {
        Ok(stream) => {
            // Configure TCP socket for optimal performance
            if let Err(e) = stream.set_nodelay(true) {
                debug!("Failed to set TCP_NODELAY: {}", e);
            }

            debug!("TCP connection established successfully");
            let mut client = TevClient::wrap(stream);

            // Create image in TEV
            let create_packet = PacketCreateImage {
                image_name: "whitted_output",
                width,
                height,
                channel_names: &["R", "G", "B"],
                grab_focus: true,
            };

            match client.send(create_packet) {
                Ok(_) => debug!("Image created in TEV successfully"),
                Err(e) => {
                    warn!("Failed to create image in TEV: {}", e);
                    return;
                }
            }

            // Convert from interleaved bytes (RGBRGB...) to planar linear f32
            // (RRR...GGG...BBB...) for TEV
            let data_prep_start = std::time::Instant::now();
            let pixel_count = (width * height) as usize;
            let mut rgb_data = Vec::with_capacity(pixel_count * 3);

            for channel in 0..3 {
                for pixel in image.pixels() {
                    rgb_data.push(pixel[channel] as f32 / 255.0);
                }
            }

            debug!("Data preparation completed in {:.2?}", data_prep_start.elapsed());
            debug!("Sending {} pixels to TEV ({:.1} MB)", pixel_count, rgb_data.len() as f32 * 4.0 / 1_000_000.0);
            let start_time = std::time::Instant::now();

            // Update image with pixel data
            let update_packet = PacketUpdateImage {
                image_name: "whitted_output",
                grab_focus: false,
                channel_names: &["R", "G", "B"],
                x: 0,
                y: 0,
                width,
                height,
                channel_offsets: &[0, (width * height) as u64, (2 * width * height) as u64],
                channel_strides: &[1, 1, 1],
                data: &rgb_data,
            };

            match client.send(update_packet) {
                Ok(_) => {
                    let elapsed = start_time.elapsed();
                    info!("Image data sent to TEV at {} successfully in {:.2?}", tev_address, elapsed);
                },
                Err(e) => warn!("Failed to send image data to TEV: {}", e),
            }
        },
        Err(e) => warn!("Failed to connect to TEV on {}: {}", tev_address, e),
    }
}

/// Save a rendered frame as PNG
///
/// The framebuffer already holds final 8-bit values, clamped and rounded by
/// the renderer, so the bytes go to disk unchanged.
///
/// # Errors
///
/// Logs a warning for I/O errors but does not panic. Common causes are an
/// invalid path, insufficient permissions, or a full disk.
pub fn save_image_as_png(image: &FrameBuffer, output_path: &str) {
    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save a rendered frame as EXR
///
/// Scales the 8-bit values back to linear floating point and writes a
/// 32-bit RGB OpenEXR file. Useful for viewing the frame in HDR-aware
/// tools or feeding it into compositing pipelines.
///
/// # Errors
///
/// Logs a warning for I/O errors but does not panic.
pub fn save_image_as_exr(image: &FrameBuffer, output_path: &str) {
    let (width, height) = image.dimensions();

    let result = write_rgb_file(
        output_path,
        width as usize, height as usize,
        |x, y| {
            let Rgb([r, g, b]) = *image.get_pixel(x as u32, y as u32);
            (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
        }
    );

    match result {
        Ok(_) => info!("Image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}
