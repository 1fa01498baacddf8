//! Chart aggregations
//!
//! Pure derived views over the record sequence. Each function recomputes
//! from scratch on every call; the components feed them into the canvas
//! drawing code whenever the record signal changes.

use crate::record::Record;

/// Fixed age bucket labels, in bucket order
pub const AGE_BUCKETS: [&str; 4] = ["0-18", "19-35", "36-50", "51+"];

/// Maximum number of records plotted in the BMI trend
pub const BMI_TREND_LIMIT: usize = 10;

/// Index into [`AGE_BUCKETS`] for a given age
pub fn age_bucket(age: u32) -> usize {
    match age {
        0..=18 => 0,
        19..=35 => 1,
        36..=50 => 2,
        _ => 3,
    }
}

/// Count records per age bucket
pub fn age_histogram(records: &[Record]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for record in records {
        counts[age_bucket(record.age)] += 1;
    }
    counts
}

/// Count records per distinct country, in first-seen order
///
/// First-seen order keeps pie slices and legend entries stable across
/// re-renders.
pub fn country_counts(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(country, _)| country == &record.country) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.country.clone(), 1)),
        }
    }
    counts
}

/// Name label and BMI for the first [`BMI_TREND_LIMIT`] records, in
/// insertion order
///
/// `None` entries mark records whose BMI is not available; the trend
/// chart draws a gap there instead of a point.
pub fn bmi_series(records: &[Record]) -> Vec<(String, Option<f64>)> {
    records
        .iter()
        .take(BMI_TREND_LIMIT)
        .map(|record| (record.name.clone(), record.bmi))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::compute_bmi;

    fn record(name: &str, age: u32, country: &str) -> Record {
        Record {
            name: name.to_string(),
            age,
            height: 170.0,
            weight: 70.0,
            bmi: compute_bmi(70.0, 170.0),
            city: "Lima".to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_age_bucket_boundaries() {
        assert_eq!(age_bucket(0), 0);
        assert_eq!(age_bucket(18), 0);
        assert_eq!(age_bucket(19), 1);
        assert_eq!(age_bucket(35), 1);
        assert_eq!(age_bucket(36), 2);
        assert_eq!(age_bucket(50), 2);
        assert_eq!(age_bucket(51), 3);
        assert_eq!(age_bucket(90), 3);
    }

    #[test]
    fn test_age_histogram_counts_sum_to_total() {
        let records = vec![
            record("a", 10, "Peru"),
            record("b", 30, "Peru"),
            record("c", 40, "Chile"),
            record("d", 70, "Peru"),
            record("e", 19, "Chile"),
        ];

        let counts = age_histogram(&records);
        assert_eq!(counts, [1, 2, 1, 1]);
        assert_eq!(counts.iter().sum::<usize>(), records.len());
    }

    #[test]
    fn test_age_histogram_empty() {
        assert_eq!(age_histogram(&[]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_country_counts_first_seen_order() {
        let records = vec![
            record("a", 20, "Peru"),
            record("b", 21, "Chile"),
            record("c", 22, "Peru"),
            record("d", 23, "Bolivia"),
        ];

        let counts = country_counts(&records);
        assert_eq!(
            counts,
            vec![
                ("Peru".to_string(), 2),
                ("Chile".to_string(), 1),
                ("Bolivia".to_string(), 1),
            ]
        );
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), records.len());
    }

    #[test]
    fn test_bmi_series_caps_at_limit_in_insertion_order() {
        let records: Vec<Record> = (0..15)
            .map(|i| record(&format!("p{}", i), 30, "Peru"))
            .collect();

        let series = bmi_series(&records);
        assert_eq!(series.len(), BMI_TREND_LIMIT);
        assert_eq!(series[0].0, "p0");
        assert_eq!(series[9].0, "p9");
    }

    #[test]
    fn test_bmi_series_preserves_missing_values() {
        let mut unavailable = record("x", 30, "Peru");
        unavailable.weight = 0.0;
        unavailable.bmi = None;

        let series = bmi_series(&[record("a", 30, "Peru"), unavailable]);
        assert_eq!(series[0].1, compute_bmi(70.0, 170.0));
        assert_eq!(series[1].1, None);
    }
}
