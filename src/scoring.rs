use crate::session::SessionResult;

/// Rounds to two decimal places, half away from zero.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Committed words per minute, regardless of correctness.
pub fn gross_wpm(typed: usize, elapsed_secs: u64) -> Option<f64> {
    match elapsed_secs {
        0 => None,
        secs => Some(round_2dp(typed as f64 / secs as f64 * 60.0)),
    }
}

/// Committed words minus mismatches, per minute.
pub fn net_wpm(typed: usize, wrong: usize, elapsed_secs: u64) -> Option<f64> {
    match elapsed_secs {
        0 => None,
        secs => Some(round_2dp(
            (typed as f64 - wrong as f64) / secs as f64 * 60.0,
        )),
    }
}

/// Share of committed words that were neither auto-corrected nor mismatched.
///
/// Fixed and wrong words may overlap, so this is not clamped and can drop below zero.
pub fn accuracy(typed: usize, wrong: usize, fixed: usize) -> f64 {
    let denominator = typed.max(1) as f64;
    1.0 - round_2dp((fixed + wrong) as f64 / denominator)
}

pub fn compute_result(
    typed: usize,
    wrong: usize,
    fixed: usize,
    elapsed_secs: u64,
) -> Option<SessionResult> {
    Some(SessionResult {
        gross: gross_wpm(typed, elapsed_secs)?,
        net: net_wpm(typed, wrong, elapsed_secs)?,
        accuracy: accuracy(typed, wrong, fixed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round_2dp() {
        assert_eq!(round_2dp(0.666_666), 0.67);
        assert_eq!(round_2dp(40.0), 40.0);
        assert_eq!(round_2dp(12.344), 12.34);
        assert_eq!(round_2dp(-0.333), -0.33);
    }

    #[test]
    fn test_gross_wpm() {
        assert_eq!(gross_wpm(3, 3), Some(60.0));
        assert_eq!(gross_wpm(10, 60), Some(10.0));
        assert_eq!(gross_wpm(1, 7), Some(8.57));
    }

    #[test]
    fn test_gross_wpm_zero_elapsed() {
        assert_eq!(gross_wpm(5, 0), None);
    }

    #[test]
    fn test_net_wpm() {
        assert_eq!(net_wpm(3, 1, 3), Some(40.0));
        assert_eq!(net_wpm(3, 3, 3), Some(0.0));
        assert_eq!(net_wpm(0, 0, 0), None);
    }

    #[test]
    fn test_accuracy_with_no_words_is_one() {
        assert_eq!(accuracy(0, 0, 0), 1.0);
    }

    #[test]
    fn test_accuracy_mixed() {
        assert!(approx(accuracy(3, 1, 1), 0.33));
        assert!(approx(accuracy(4, 1, 0), 0.75));
    }

    #[test]
    fn test_accuracy_can_go_negative() {
        // one word, both auto-corrected and mismatched
        assert!(approx(accuracy(1, 1, 1), -1.0));
        // fixed words before any commit
        assert!(approx(accuracy(0, 0, 2), -1.0));
    }

    #[test]
    fn test_compute_result() {
        let result = compute_result(3, 1, 1, 3).unwrap();
        assert_eq!(result.gross, 60.0);
        assert_eq!(result.net, 40.0);
        assert!(approx(result.accuracy, 0.33));

        assert!(compute_result(3, 1, 1, 0).is_none());
    }
}
