// Price history domain model
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub recorded_at: NaiveDateTime,
    pub price: f64,
}

impl PricePoint {
    pub fn new(recorded_at: NaiveDateTime, price: f64) -> Self {
        Self { recorded_at, price }
    }
}

/// Recorded prices of one product, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.recorded_at);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn lowest(&self) -> Option<&PricePoint> {
        self.points
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_points_are_ordered_by_time() {
        let history = PriceHistory::new(vec![
            PricePoint::new(at(3), 12.0),
            PricePoint::new(at(1), 20.0),
            PricePoint::new(at(2), 9.5),
        ]);

        assert_eq!(history.latest().map(|p| p.price), Some(12.0));
        assert_eq!(history.lowest().map(|p| p.recorded_at), Some(at(2)));
    }

    #[test]
    fn test_empty_history() {
        let history = PriceHistory::default();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.lowest().is_none());
    }
}
