use boxhunt_core::{Notifier, Resolution};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Largest board the page will build, bigger requests are ignored.
pub(crate) const MAX_BOX_COUNT: usize = 64;

/// Negative counts are treated as zero, the board raises them to its minimum anyway.
pub(crate) fn checked_box_count(count: i64) -> Option<usize> {
    let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    if count > MAX_BOX_COUNT {
        log::warn!("box count {} over the limit of {}, ignored", count, MAX_BOX_COUNT);
        None
    } else {
        Some(count)
    }
}

/// Parses a box count typed by the user or set as an attribute, `None` when it is not a usable number.
pub(crate) fn parse_box_count(raw: &str) -> Option<usize> {
    match raw.trim().parse::<i64>() {
        Ok(count) => checked_box_count(count),
        Err(err) => {
            log::warn!("invalid box count {:?}: {}", raw, err);
            None
        }
    }
}

/// Shows the end-of-round message as a blocking `alert`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, resolution: Resolution) {
        log::debug!("alert: {}", resolution.message());
        gloo::dialogs::alert(resolution.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_box_counts() {
        assert_eq!(parse_box_count("7"), Some(7));
        assert_eq!(parse_box_count(" 12 "), Some(12));
        assert_eq!(parse_box_count("-4"), Some(0));
        assert_eq!(parse_box_count("lots"), None);
        assert_eq!(parse_box_count(""), None);
    }

    #[test]
    fn oversized_box_counts_are_ignored() {
        assert_eq!(parse_box_count("64"), Some(MAX_BOX_COUNT));
        assert_eq!(parse_box_count("65"), None);
        assert_eq!(parse_box_count("1000000000"), None);
        assert_eq!(checked_box_count(i64::MAX), None);
        assert_eq!(checked_box_count(-1), Some(0));
    }
}
