/// Maps a pointer position to a history slot index within the bottom scrub
/// strip.
///
/// Returns `None` when scrubbing is disabled (`capacity == 0`) or the
/// pointer sits above the strip. Inside the strip the viewport width is
/// divided into `capacity` equal slots and the index is clamped into
/// `[0, capacity - 1]`; an index at or beyond the ring's current length is
/// resolved to "show current frame" by the caller.
pub fn map_pointer(
    x: f64,
    y: f64,
    viewport_width: f64,
    viewport_height: f64,
    strip_height: f64,
    capacity: usize,
) -> Option<usize> {
    if capacity == 0 || viewport_width <= 0.0 {
        return None;
    }
    if y <= viewport_height - strip_height {
        return None;
    }
    let slot_width = viewport_width / capacity as f64;
    let index = (x / slot_width).floor();
    let index = if index.is_sign_negative() {
        0
    } else {
        index as usize
    };
    Some(index.min(capacity - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_W: f64 = 1000.0;
    const VIEW_H: f64 = 800.0;
    const STRIP_H: f64 = 100.0;

    #[test]
    fn test_zero_capacity_always_none() {
        for (x, y) in [(0.0, 0.0), (500.0, 790.0), (999.0, 750.0)] {
            assert_eq!(map_pointer(x, y, VIEW_W, VIEW_H, STRIP_H, 0), None);
        }
    }

    #[test]
    fn test_above_strip_is_none() {
        assert_eq!(map_pointer(500.0, 0.0, VIEW_W, VIEW_H, STRIP_H, 4), None);
        // The strip boundary itself still counts as "above".
        assert_eq!(map_pointer(500.0, VIEW_H - STRIP_H, VIEW_W, VIEW_H, STRIP_H, 4), None);
    }

    #[test]
    fn test_slot_mapping_inside_strip() {
        let y = VIEW_H - 10.0;
        // Four 250px slots across a 1000px viewport.
        assert_eq!(map_pointer(0.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(0));
        assert_eq!(map_pointer(249.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(0));
        assert_eq!(map_pointer(250.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(1));
        assert_eq!(map_pointer(620.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(2));
        assert_eq!(map_pointer(999.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(3));
    }

    #[test]
    fn test_right_edge_clamps_to_last_slot() {
        let y = VIEW_H - 1.0;
        // x == viewport width would land one past the last slot without the
        // clamp to capacity - 1.
        assert_eq!(map_pointer(VIEW_W, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(3));
        assert_eq!(map_pointer(VIEW_W + 50.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(3));
    }

    #[test]
    fn test_negative_x_clamps_to_first_slot() {
        let y = VIEW_H - 1.0;
        assert_eq!(map_pointer(-5.0, y, VIEW_W, VIEW_H, STRIP_H, 4), Some(0));
    }

    #[test]
    fn test_single_slot_capacity() {
        let y = VIEW_H - 1.0;
        assert_eq!(map_pointer(0.0, y, VIEW_W, VIEW_H, STRIP_H, 1), Some(0));
        assert_eq!(map_pointer(999.0, y, VIEW_W, VIEW_H, STRIP_H, 1), Some(0));
    }
}
