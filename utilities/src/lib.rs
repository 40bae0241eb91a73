use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() >= 3600 {
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        format!("{} hrs, {} min, {} sec", hours, minutes, seconds)
    } else if duration.as_secs() >= 60 {
        let minutes = duration.as_secs() / 60;
        let seconds = duration.as_secs() % 60;
        format!("{} min, {} sec", minutes, seconds)
    } else if duration.as_secs() >= 1 {
        format!("{} sec", duration.as_secs())
    } else if duration.as_millis() >= 1 {
        format!("{} ms", duration.as_millis())
    } else {
        format!("{} us", duration.as_micros())
    }
}

pub fn assert_equal(left: f64, right: f64) {
    assert_equal_reltol(left, right, 1e-9);
}

pub fn assert_equal_reltol(left: f64, right: f64, reltol: f64) {
    let max = left.abs().max(right.abs());
    if max < f64::EPSILON {
        // If both values are close to zero, we consider them equal
        return;
    }
    let abs_diff = (left - right).abs();
    let rel_diff = abs_diff / max;

    assert!(
        rel_diff < reltol,
        "Assertion failed: left ({}) and right ({}) are not approximately equal. Relative difference: {}. Absolute difference: {}",
        left,
        right,
        rel_diff,
        abs_diff,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250 us");
        assert_eq!(format_duration(Duration::from_millis(42)), "42 ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5 sec");
        assert_eq!(format_duration(Duration::from_secs(125)), "2 min, 5 sec");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1 hrs, 2 min, 5 sec");
    }

    #[test]
    fn test_assert_equal_near_zero() {
        assert_equal(0.0, -0.0);
        assert_equal(1e-20, -1e-20);
    }

    #[test]
    #[should_panic]
    fn test_assert_equal_reltol_fails() {
        assert_equal_reltol(1.0, 1.1, 1e-3);
    }
}
