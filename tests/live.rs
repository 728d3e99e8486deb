use screen_geometry::MonitorInfo;

mod common;

#[macro_use]
extern crate libtest_mimic_collect;

init_display!();

#[test]
fn work_area_within_bounds() -> Result<(), String> {
    let Some(monitors) = common::live_monitors() else {
        return Ok(());
    };

    for monitor in &monitors {
        if !monitor.bounds.contains_rect(&monitor.work_area) {
            return Err(format!(
                "work area {:?} escapes bounds {:?}",
                monitor.work_area, monitor.bounds
            ));
        }
        if monitor.scale <= 0.0 {
            return Err(format!("invalid scale {} for {:?}", monitor.scale, monitor.bounds));
        }
    }

    Ok(())
}

#[test]
fn enumeration_is_not_cached() -> Result<(), String> {
    let (Some(first), Some(second)) = (common::live_monitors(), common::live_monitors()) else {
        return Ok(());
    };

    // Nothing was plugged in between, two fresh queries agree.
    if first != second {
        return Err(format!("{first:?} != {second:?}"));
    }

    Ok(())
}

#[test]
fn primary_is_enumerated() -> Result<(), String> {
    let Some(monitors) = common::live_monitors() else {
        return Ok(());
    };

    match screen_geometry::primary_monitor() {
        Ok(Some(primary)) if !monitors.contains(&primary) => {
            Err(format!("{primary:?} is not among {monitors:?}"))
        }
        Ok(_) => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}

#[test]
fn degraded_enumeration_is_empty() -> Result<(), String> {
    let monitors: Vec<MonitorInfo> = screen_geometry::monitors_or_empty();

    if screen_geometry::monitors().is_err() {
        let mut visited = 0;
        for _ in &monitors {
            visited += 1;
        }
        if visited != 0 {
            return Err(format!("visited {visited} monitors of a failed enumeration"));
        }
    }

    Ok(())
}
