//! PNG export with embedded view metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use fractrio_core::{SurfaceSize, ViewSnapshot};

use crate::buffer::RenderBuffer;
use crate::error::RenderError;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub variant: String,
    pub center_re: String,
    pub center_im: String,
    pub zoom: String,
    pub zoom_t: String,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    pub fn from_snapshot(view: &ViewSnapshot, max_iterations: u32, surface: SurfaceSize) -> Self {
        Self {
            variant: view.variant().label().to_string(),
            center_re: format!("{:.11}", view.center().re),
            center_im: format!("{:.11}", view.center().im),
            zoom: format!("{:e}", view.zoom()),
            zoom_t: format!("{:.2}", view.zoom_t()),
            max_iterations,
            width: surface.width(),
            height: surface.height(),
        }
    }
}

/// Write an RGBA frame as a PNG file with embedded view metadata.
///
/// Uses the `png` crate directly to inject custom tEXt chunks readable by
/// exiftool and most image viewers.
pub fn export_png(
    buffer: &RenderBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    let expected = buffer.width as usize * buffer.height as usize * 4;
    if buffer.width == 0 || buffer.height == 0 || buffer.pixels.len() != expected {
        return Err(RenderError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let writer = BufWriter::new(std::fs::File::create(path)?);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Fractrio".to_string())?;
    encoder.add_text_chunk("Description".to_string(), build_description(metadata))?;
    for (key, value) in build_metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

fn build_description(meta: &ExportMetadata) -> String {
    format!(
        "{} - Center: {} {}i, Zoom: {} (t = {}), Iterations: {}",
        meta.variant, meta.center_re, meta.center_im, meta.zoom, meta.zoom_t, meta.max_iterations,
    )
}

fn build_metadata_pairs(meta: &ExportMetadata) -> Vec<(String, String)> {
    vec![
        ("Fractrio.Variant".into(), meta.variant.clone()),
        ("Fractrio.CenterRe".into(), meta.center_re.clone()),
        ("Fractrio.CenterIm".into(), meta.center_im.clone()),
        ("Fractrio.Zoom".into(), meta.zoom.clone()),
        ("Fractrio.ZoomT".into(), meta.zoom_t.clone()),
        ("Fractrio.MaxIterations".into(), meta.max_iterations.to_string()),
        ("Fractrio.Resolution".into(), format!("{}x{}", meta.width, meta.height)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractrio_core::{Variant, ViewMapper};
    use std::io::Read;

    fn metadata(w: u32, h: u32) -> ExportMetadata {
        let view = ViewMapper::new(Variant::BurningShip).snapshot();
        ExportMetadata::from_snapshot(&view, 1000, SurfaceSize::new(w, h).unwrap())
    }

    #[test]
    fn metadata_from_snapshot() {
        let meta = metadata(800, 600);
        assert_eq!(meta.variant, "Burning Ship");
        assert_eq!(meta.center_re, "-1.83100000000");
        assert_eq!(meta.center_im, "-0.00400000000");
        assert_eq!(meta.zoom, "1e5");
        assert_eq!(meta.zoom_t, "0.00");
        assert_eq!(meta.max_iterations, 1000);
    }

    #[test]
    fn export_creates_valid_png() {
        let buffer = RenderBuffer::new(4, 4);
        let dir = std::env::temp_dir().join("fractrio_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("test_export.png");
        export_png(&buffer, &path, &metadata(4, 4)).expect("export should succeed");

        let mut file = std::fs::File::open(&path).expect("file should exist");
        let mut header = [0u8; 8];
        file.read_exact(&mut header).expect("should read header");
        assert_eq!(&header, b"\x89PNG\r\n\x1a\n", "valid PNG signature");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_embeds_text_chunks() {
        let buffer = RenderBuffer::new(2, 2);
        let dir = std::env::temp_dir().join("fractrio_test_export_meta");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("test_meta.png");
        export_png(&buffer, &path, &metadata(2, 2)).expect("export should succeed");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let reader = decoder.read_info().expect("should read info");
        let texts = &reader.info().uncompressed_latin1_text;
        assert!(
            texts.iter().any(|t| t.keyword == "Software" && t.text == "Fractrio"),
            "Should contain Software text chunk"
        );
        assert!(
            texts
                .iter()
                .any(|t| t.keyword == "Fractrio.Variant" && t.text == "Burning Ship"),
            "Should contain variant chunk"
        );
        assert!(
            texts
                .iter()
                .any(|t| t.keyword == "Fractrio.Resolution" && t.text == "2x2"),
            "Should contain resolution chunk"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_into_missing_directory_keeps_io_error() {
        let buffer = RenderBuffer::new(2, 2);
        let path = std::env::temp_dir()
            .join("fractrio_no_such_dir")
            .join("nested")
            .join("out.png");
        let err = export_png(&buffer, &path, &metadata(2, 2)).unwrap_err();
        match err {
            RenderError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn export_rejects_mismatched_buffer() {
        let mut buffer = RenderBuffer::new(2, 2);
        buffer.pixels.pop();
        let path = std::env::temp_dir().join("fractrio_never_written.png");
        let err = export_png(&buffer, &path, &metadata(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimensions {
                width: 2,
                height: 2
            }
        ));
    }
}
