//! Result lines printed on stdout.

use std::time::Duration;

use tourforge_core::Tour;

/// Formats the best tour as `Best tour cost: <cost>, route: 0 -> ... -> 0`.
pub fn tour_line(tour: &Tour) -> String {
    format!("Best tour cost: {}, route: {}", tour.cost(), tour)
}

/// Formats the wall-clock search time in whole milliseconds.
pub fn timing_line(elapsed: Duration) -> String {
    format!("Execution time: {} ms", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_line() {
        let tour = Tour::new(291, vec![0, 3, 1, 2]).unwrap();
        assert_eq!(
            tour_line(&tour),
            "Best tour cost: 291, route: 0 -> 3 -> 1 -> 2 -> 0"
        );
    }

    #[test]
    fn test_timing_line() {
        assert_eq!(
            timing_line(Duration::from_micros(1_234_900)),
            "Execution time: 1234 ms"
        );
        assert_eq!(timing_line(Duration::ZERO), "Execution time: 0 ms");
    }
}
