// Conversions from native geometry into the canonical coordinate space, without platform types.

use crate::protocol::{MonitorInfo, ScreenRect};

/// The DPI Windows considers unscaled.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) const UNSCALED_DPI: f64 = 96.0;

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn scale_from_dpi(dpi: u32) -> f64 {
    f64::from(dpi) / UNSCALED_DPI
}

/// Round a native floating point coordinate to screen units.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn to_units(value: f64) -> i32 {
    value.round() as i32
}

/// A display as reported by a system with a bottom-left origin and y growing upward.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlippedScreen {
    pub frame: ScreenRect,
    pub visible_frame: ScreenRect,
}

/// The height every other y coordinate is mirrored against.
///
/// That is the height of the primary display, the one sitting at the native origin. The
/// enumeration order is not trusted to put it first; only if no display sits at the origin
/// (which should not happen) is the first one used.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn reference_height<'a, I>(frames: I) -> Option<i32>
where
    I: IntoIterator<Item = &'a ScreenRect>,
{
    let mut first = None;
    for frame in frames {
        if frame.x == 0 && frame.y == 0 {
            return Some(frame.height);
        }
        first.get_or_insert(frame.height);
    }
    first
}

/// Convert displays of the origin-flip family into canonical monitors.
///
/// The system already reports logical units, so every scale is `1.0`.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn flipped_monitors(screens: &[FlippedScreen]) -> Vec<MonitorInfo> {
    let Some(height) = reference_height(screens.iter().map(|screen| &screen.frame)) else {
        return Vec::new();
    };

    screens
        .iter()
        .map(|screen| MonitorInfo {
            bounds: screen.frame.flipped(height),
            work_area: screen.visible_frame.flipped(height),
            scale: 1.0,
        })
        .collect()
}

/// The monitor covering the canonical origin, which is the primary one by definition.
pub(crate) fn at_origin(monitors: &[MonitorInfo]) -> Option<MonitorInfo> {
    monitors
        .iter()
        .find(|monitor| monitor.bounds.contains_point(0, 0))
        .copied()
}

/// Move monitors reported relative to the top-left of the whole desktop so that `origin`,
/// the native top-left of the primary monitor, becomes `(0, 0)`.
#[cfg_attr(not(all(target_os = "linux", feature = "gtk")), allow(dead_code))]
pub(crate) fn rebased_monitors(
    monitors: Vec<MonitorInfo>,
    origin: (i32, i32),
) -> Vec<MonitorInfo> {
    let (dx, dy) = (origin.0.saturating_neg(), origin.1.saturating_neg());
    monitors
        .into_iter()
        .map(|monitor| MonitorInfo {
            bounds: monitor.bounds.offset(dx, dy),
            work_area: monitor.work_area.offset(dx, dy),
            ..monitor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(frame: ScreenRect, visible_frame: ScreenRect) -> FlippedScreen {
        FlippedScreen {
            frame,
            visible_frame,
        }
    }

    #[test]
    fn dpi_to_scale() {
        assert_eq!(scale_from_dpi(96), 1.0);
        assert_eq!(scale_from_dpi(144), 1.5);
        assert_eq!(scale_from_dpi(192), 2.0);
    }

    #[test]
    fn secondary_below_reference_height() {
        let primary = ScreenRect::new(0, 0, 1440, 900);
        let secondary = ScreenRect::new(0, 100, 800, 50);

        let monitors = flipped_monitors(&[
            screen(primary, primary),
            screen(secondary, secondary),
        ]);

        assert_eq!(monitors[1].bounds.y, 900 - 150);
        assert_eq!(monitors[1].bounds.x, 0);
    }

    #[test]
    fn primary_work_area_excludes_menu_bar() {
        // A 25 point menu bar at the top and a 60 point dock at the bottom.
        let frame = ScreenRect::new(0, 0, 1440, 900);
        let visible = ScreenRect::new(0, 60, 1440, 815);

        let monitors = flipped_monitors(&[screen(frame, visible)]);

        assert_eq!(monitors[0].bounds, frame);
        assert_eq!(monitors[0].work_area, ScreenRect::new(0, 25, 1440, 815));
        assert!(monitors[0].bounds.contains_rect(&monitors[0].work_area));
        assert_eq!(monitors[0].scale, 1.0);
    }

    #[test]
    fn primary_is_found_even_when_listed_last() {
        // A taller display above and to the left, enumerated before the primary.
        let above = ScreenRect::new(-1920, 900, 1920, 1200);
        let primary = ScreenRect::new(0, 0, 1440, 900);

        let monitors = flipped_monitors(&[screen(above, above), screen(primary, primary)]);

        assert_eq!(monitors[1].bounds, primary);
        assert_eq!(monitors[0].bounds, ScreenRect::new(-1920, -1200, 1920, 1200));
    }

    #[test]
    fn reference_falls_back_to_first_display() {
        let frames = [ScreenRect::new(10, 10, 100, 700), ScreenRect::new(0, 5, 100, 300)];
        assert_eq!(reference_height(&frames), Some(700));
        assert_eq!(reference_height(std::iter::empty()), None);
    }

    #[test]
    fn no_displays_no_monitors() {
        assert!(flipped_monitors(&[]).is_empty());
        assert_eq!(at_origin(&[]), None);
    }

    fn direct(bounds: ScreenRect, work_area: ScreenRect, scale: f64) -> MonitorInfo {
        MonitorInfo {
            bounds,
            work_area,
            scale,
        }
    }

    #[test]
    fn secondary_left_of_primary_is_moved_into_negative_space() {
        // X11 puts the desktop origin at the top-left of the left-most monitor, here the
        // secondary one.
        let secondary = ScreenRect::new(0, 0, 1920, 1080);
        let primary = ScreenRect::new(1920, 0, 2560, 1440);
        let native = vec![
            direct(secondary, secondary, 1.0),
            direct(primary, ScreenRect::new(1920, 32, 2560, 1408), 2.0),
        ];

        let monitors = rebased_monitors(native, (primary.x, primary.y));

        assert_eq!(monitors[0].bounds, ScreenRect::new(-1920, 0, 1920, 1080));
        assert_eq!(monitors[1].bounds, ScreenRect::new(0, 0, 2560, 1440));
        assert_eq!(monitors[1].work_area, ScreenRect::new(0, 32, 2560, 1408));
        assert_eq!(monitors[1].scale, 2.0);
        assert_eq!(at_origin(&monitors), Some(monitors[1]));
    }

    #[test]
    fn primary_at_desktop_origin_is_unchanged() {
        let primary = ScreenRect::new(0, 0, 1920, 1080);
        let below = ScreenRect::new(0, 1080, 1280, 1024);
        let native = vec![direct(primary, primary, 1.0), direct(below, below, 1.0)];

        assert_eq!(rebased_monitors(native.clone(), (0, 0)), native);
    }
}
