use screen_geometry::{MonitorInfo, Placement, ScreenRect};
use serde_json::json;

fn monitor(bounds: ScreenRect, work_area: ScreenRect, scale: f64) -> MonitorInfo {
    MonitorInfo {
        bounds,
        work_area,
        scale,
    }
}

#[test]
fn placement_serializes_for_the_frontend() {
    let placement = Placement {
        bounds: ScreenRect::new(-800, 120, 800, 600),
        monitor: monitor(
            ScreenRect::new(-1920, 0, 1920, 1080),
            ScreenRect::new(-1920, 0, 1920, 1040),
            1.25,
        ),
    };

    assert_eq!(
        serde_json::to_value(placement).unwrap(),
        json!({
            "bounds": { "x": -800, "y": 120, "width": 800, "height": 600 },
            "monitor": {
                "bounds": { "x": -1920, "y": 0, "width": 1920, "height": 1080 },
                "workArea": { "x": -1920, "y": 0, "width": 1920, "height": 1040 },
                "scale": 1.25
            }
        })
    );
}

#[test]
fn unresolved_monitor_is_zero_value() {
    let placement: Placement = serde_json::from_value(json!({
        "bounds": { "x": 10, "y": 10, "width": 300, "height": 200 },
        "monitor": {
            "bounds": { "x": 0, "y": 0, "width": 0, "height": 0 },
            "workArea": { "x": 0, "y": 0, "width": 0, "height": 0 },
            "scale": 0.0
        }
    }))
    .unwrap();

    assert!(placement.monitor.is_zero());
    assert_eq!(placement.monitor, MonitorInfo::default());
}

#[test]
fn keep_window_on_its_work_area() {
    // A window dragged half off the bottom of a monitor with a taskbar.
    let monitors = [
        monitor(
            ScreenRect::new(0, 0, 2560, 1440),
            ScreenRect::new(0, 0, 2560, 1392),
            1.5,
        ),
        monitor(
            ScreenRect::new(2560, 180, 1920, 1080),
            ScreenRect::new(2560, 180, 1920, 1080),
            1.0,
        ),
    ];
    let window = ScreenRect::new(400, 1200, 1000, 700);

    let target = MonitorInfo::nearest(&monitors, &window).unwrap();
    assert_eq!(target, &monitors[0]);

    let clamped = window.clamp_within(&target.work_area);
    assert_eq!(clamped, ScreenRect::new(400, 692, 1000, 700));
    assert!(target.work_area.contains_rect(&clamped));
}

#[test]
fn degraded_enumeration_never_panics() {
    // Whatever the host offers, iterating the result is always possible.
    let monitors = screen_geometry::monitors_or_empty();
    for monitor in &monitors {
        assert!(monitor.bounds.width >= 0 && monitor.bounds.height >= 0);
    }

    if screen_geometry::monitors().is_err() {
        assert!(monitors.is_empty());
    }
}
