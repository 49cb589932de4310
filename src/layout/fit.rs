/// Destination rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes the letterboxed placement of a frame inside a viewport.
///
/// # Algorithm
/// 1. Compare source and viewport aspect ratios.
/// 2. Pin the constrained axis to the viewport edge, scale the other to
///    preserve the source aspect ratio (never cropping).
/// 3. Center along the free axis.
///
/// Callers guarantee `frame_height > 0`; the decoder never produces
/// zero-dimension frames.
pub fn fit_rect(frame_width: u32, frame_height: u32, viewport_width: f64, viewport_height: f64) -> FitRect {
    let source_aspect = frame_width as f64 / frame_height as f64;
    let viewport_aspect = viewport_width / viewport_height;

    if source_aspect >= viewport_aspect {
        // Wider than the viewport: pin width, letterbox top and bottom.
        let height = viewport_width / source_aspect;
        FitRect {
            x: 0.0,
            y: (viewport_height - height) / 2.0,
            width: viewport_width,
            height,
        }
    } else {
        // Taller than the viewport: pin height, letterbox left and right.
        let width = viewport_height * source_aspect;
        FitRect {
            x: (viewport_width - width) / 2.0,
            y: 0.0,
            width,
            height: viewport_height,
        }
    }
}

/// Slot rectangle for the `index`-th history thumbnail along the bottom
/// strip: `viewport_width / capacity` wide, `strip_height` tall, placed
/// left-to-right by index. History frames are stretched into the slot;
/// the strip stays uniform rather than aspect-preserving.
pub fn thumbnail_rect(
    index: usize,
    capacity: usize,
    viewport_width: f64,
    viewport_height: f64,
    strip_height: f64,
) -> FitRect {
    let slot_width = viewport_width / capacity as f64;
    FitRect {
        x: index as f64 * slot_width,
        y: viewport_height - strip_height,
        width: slot_width,
        height: strip_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect(rect: &FitRect) -> f64 {
        rect.width / rect.height
    }

    #[test]
    fn test_equal_aspect_fills_viewport() {
        let rect = fit_rect(1920, 1080, 1280.0, 720.0);
        assert_eq!(
            rect,
            FitRect {
                x: 0.0,
                y: 0.0,
                width: 1280.0,
                height: 720.0
            }
        );
    }

    #[test]
    fn test_wide_source_letterboxes_vertically() {
        let rect = fit_rect(2000, 500, 1000.0, 1000.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 1000.0);
        assert_eq!(rect.height, 250.0);
        assert_eq!(rect.y, 375.0);
    }

    #[test]
    fn test_tall_source_letterboxes_horizontally() {
        let rect = fit_rect(500, 2000, 1000.0, 1000.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.height, 1000.0);
        assert_eq!(rect.width, 250.0);
        assert_eq!(rect.x, 375.0);
    }

    #[test]
    fn test_rect_contained_and_aspect_preserved() {
        let cases = [
            (1920u32, 1080u32, 1280.0, 720.0),
            (640, 480, 1920.0, 1080.0),
            (1080, 1920, 800.0, 600.0),
            (33, 7, 123.0, 457.0),
        ];
        for (fw, fh, vw, vh) in cases {
            let rect = fit_rect(fw, fh, vw, vh);
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.x + rect.width <= vw + 1e-9);
            assert!(rect.y + rect.height <= vh + 1e-9);
            let source_aspect = fw as f64 / fh as f64;
            assert!(
                (aspect(&rect) - source_aspect).abs() < 1e-9,
                "aspect drifted for {}x{} in {}x{}",
                fw,
                fh,
                vw,
                vh
            );
        }
    }

    #[test]
    fn test_fit_rect_idempotent() {
        let first = fit_rect(800, 600, 1024.0, 768.0);
        let second = fit_rect(800, 600, 1024.0, 768.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_thumbnail_slots_tile_the_strip() {
        let capacity = 4;
        let viewport_w = 1280.0;
        let viewport_h = 720.0;
        let strip_h = 96.0;
        for index in 0..capacity {
            let slot = thumbnail_rect(index, capacity, viewport_w, viewport_h, strip_h);
            assert_eq!(slot.width, viewport_w / capacity as f64);
            assert_eq!(slot.height, strip_h);
            assert_eq!(slot.x, index as f64 * slot.width);
            assert_eq!(slot.y, viewport_h - strip_h);
        }
        let last = thumbnail_rect(capacity - 1, capacity, viewport_w, viewport_h, strip_h);
        assert_eq!(last.x + last.width, viewport_w);
    }
}
