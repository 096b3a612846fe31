//! Bookmark rating - integer in 1..=5

use serde::Serialize;
use serde_json::Value;

use super::ValidationError;

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

/// Validated rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    /// Create a rating, rejecting anything outside 1..=5.
    ///
    /// # Example
    /// ```
    /// use bookmarks_server::models::Rating;
    ///
    /// assert!(Rating::new(3).is_ok());
    /// assert!(Rating::new(0).is_err());
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ValidationError::RatingOutOfRange);
        }
        Ok(Self(value as i32))
    }

    /// Read a rating out of a JSON value.
    ///
    /// Accepts an integral number (`4`, `4.0`) or a string holding an
    /// integer (`"4"`). Fractions, booleans and the rest are out of range.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let n = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        n.ok_or(ValidationError::RatingOutOfRange).and_then(Self::new)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert_eq!(Rating::new(0), Err(ValidationError::RatingOutOfRange));
        assert_eq!(Rating::new(6), Err(ValidationError::RatingOutOfRange));
        assert_eq!(Rating::new(-3), Err(ValidationError::RatingOutOfRange));
    }

    #[test]
    fn json_integers_and_numeric_strings() {
        assert_eq!(Rating::from_json(&json!(4)).unwrap().get(), 4);
        assert_eq!(Rating::from_json(&json!(2.0)).unwrap().get(), 2);
        assert_eq!(Rating::from_json(&json!(" 3 ")).unwrap().get(), 3);
    }

    #[test]
    fn rejects_non_integers() {
        for value in [json!(2.5), json!("three"), json!(true), json!([1]), json!(1e300)] {
            assert_eq!(
                Rating::from_json(&value),
                Err(ValidationError::RatingOutOfRange),
                "{value}"
            );
        }
    }
}
