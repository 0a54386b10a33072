//! Window icon decoding

use std::io::Cursor;

use anyhow::{Context, Result, bail};
use eframe::egui;

/// Decodes the embedded PNG into icon data for the window manager
pub fn load_window_icon() -> Result<egui::IconData> {
    let icon_bytes = include_bytes!("../../assets/weather-card-editor.png");

    let decoder = png::Decoder::new(Cursor::new(&icon_bytes[..]));
    let mut reader = decoder.read_info().context("Failed to read PNG info")?;

    let buffer_size = reader
        .output_buffer_size()
        .context("PNG has no output buffer size")?;
    let mut buffer = vec![0; buffer_size];
    let info = reader
        .next_frame(&mut buffer)
        .context("Failed to decode PNG frame")?;
    let bytes = &buffer[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => {
            // Widen RGB to RGBA with full alpha
            let mut rgba = Vec::with_capacity(bytes.len() / 3 * 4);
            for pixel in bytes.chunks_exact(3) {
                rgba.extend_from_slice(pixel);
                rgba.push(255);
            }
            rgba
        }
        other => bail!("Unsupported PNG color type: {:?}", other),
    };

    Ok(egui::IconData {
        rgba,
        width: info.width,
        height: info.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_icon_decodes() {
        let icon = load_window_icon().unwrap();
        assert_eq!(icon.width, 32);
        assert_eq!(icon.height, 32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
    }
}
