//! PNG decoding of source images and encoding of rendered patterns.

use std::io::Cursor;

use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::SourceImage;

/// Decode a PNG into 8-bit RGBA.
///
/// Palette and low bit-depth images are expanded, 16-bit channels are
/// stripped to 8 bits, and a `tRNS` chunk becomes an alpha channel. Images
/// without alpha are fully opaque.
pub fn decode_png(data: &[u8]) -> Result<SourceImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(RenderError::PngDecode(format!(
            "unsupported bit depth after expansion: {bit_depth:?}"
        )));
    }

    let channels = color_type.samples();
    let row_len = info.width as usize * channels;
    let mut pixels = Vec::with_capacity(info.width as usize * info.height as usize);
    for row in bytes.chunks(info.line_size).take(info.height as usize) {
        for px in row[..row_len].chunks_exact(channels) {
            pixels.push(match color_type {
                png::ColorType::Grayscale => [px[0], px[0], px[0], 255],
                png::ColorType::GrayscaleAlpha => [px[0], px[0], px[0], px[1]],
                png::ColorType::Rgb => [px[0], px[1], px[2], 255],
                png::ColorType::Rgba => [px[0], px[1], px[2], px[3]],
                png::ColorType::Indexed => {
                    return Err(RenderError::PngDecode(
                        "indexed color was not expanded".to_string(),
                    ))
                }
            });
        }
    }

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded source PNG"
    );

    Ok(SourceImage::new(info.width, info.height, pixels))
}

/// Encode a rendered pixmap as an 8-bit RGBA PNG.
///
/// Pixmap data is premultiplied; it is demultiplied here so that
/// semi-transparent anti-aliased edges keep their color.
pub fn encode_pixmap(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    encode_rgba_png(pixmap.width(), pixmap.height(), &rgba)
}

/// Encode raw RGBA8 data as a PNG.
pub fn encode_rgba_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng, keeping the input if optimization fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}
