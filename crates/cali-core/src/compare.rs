//! Ratios and the bigger/smaller verdict

use crate::metric::CountryRecord;

/// Qualitative population comparison against the reference region
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Subject population is at least the reference population
    pub is_larger: bool,
    /// Subject population divided by reference population
    pub ratio: f64,
    /// Natural-language summary, e.g. "25% fewer people"
    pub summary: String,
}

/// Compare `subject` to `reference` by population
///
/// Summary tiers:
/// - `ratio >= 2`: "2.1× the population"
/// - `1 <= ratio < 2`: "12% more people", or "about the same population" when
///   that rounds to 0%
/// - `0.5 <= ratio < 1`: "25% fewer people"
/// - `ratio < 0.5`: "26% of the population"
pub fn compare_verdict(subject: &CountryRecord, reference: &CountryRecord) -> Verdict {
    let ratio = subject.population.value / reference.population.value;

    let summary = if ratio >= 2.0 {
        format!("{}× the population", one_decimal(ratio))
    } else if ratio >= 1.0 {
        let pct = ((ratio - 1.0) * 100.0).round();
        if pct == 0.0 {
            "about the same population".to_string()
        } else {
            format!("{pct}% more people")
        }
    } else if ratio >= 0.5 {
        format!("{}% fewer people", ((1.0 - ratio) * 100.0).round())
    } else {
        format!("{}% of the population", (ratio * 100.0).round())
    };

    Verdict {
        is_larger: ratio >= 1.0,
        ratio,
        summary,
    }
}

/// Per-metric ratio label: "1.4×" at or above parity, "35%" below
pub fn format_ratio(value: f64, reference_value: f64) -> String {
    let ratio = value / reference_value;
    if ratio >= 1.0 {
        format!("{}×", one_decimal(ratio))
    } else {
        format!("{}%", (ratio * 100.0).round())
    }
}

/// One decimal place, ties rounded away from zero
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Metric;

    fn with_population(population: f64) -> CountryRecord {
        let metric = Metric::new(1.0, "Test");
        CountryRecord {
            name: "Test".to_string(),
            code: "TT".to_string(),
            population: Metric::new(population, "Test"),
            gdp: metric.clone(),
            gdp_per_capita: metric.clone(),
            area: metric,
        }
    }

    fn summary(population: f64) -> String {
        compare_verdict(&with_population(population), &with_population(39.0)).summary
    }

    #[test]
    fn test_more_people_tier() {
        assert_eq!(summary(43.68), "12% more people");
        assert!(compare_verdict(&with_population(43.68), &with_population(39.0)).is_larger);
    }

    #[test]
    fn test_same_population_rounds_to_zero() {
        assert_eq!(summary(39.1), "about the same population");
    }

    #[test]
    fn test_just_below_parity_is_smaller() {
        let verdict = compare_verdict(&with_population(38.9), &with_population(39.0));
        assert!(!verdict.is_larger);
        assert_eq!(verdict.summary, "0% fewer people");
    }

    #[test]
    fn test_half_is_fewer_people() {
        assert_eq!(summary(19.5), "50% fewer people");
    }

    #[test]
    fn test_large_multiple() {
        assert_eq!(summary(1428.6), "36.6× the population");
    }

    #[test]
    fn test_format_ratio_below_one_rounds() {
        assert_eq!(format_ratio(1.0, 3.0), "33%");
        assert_eq!(format_ratio(0.0, 3.0), "0%");
    }

    #[test]
    fn test_format_ratio_above_one() {
        assert_eq!(format_ratio(27361.0, 4103.0), "6.7×");
    }

    #[test]
    fn test_ratio_ties_round_up() {
        let verdict = compare_verdict(&with_population(87.75), &with_population(39.0));
        assert_eq!(verdict.ratio, 2.25);
        assert_eq!(verdict.summary, "2.3× the population");
        assert_eq!(format_ratio(87.75, 39.0), "2.3×");
        assert_eq!(format_ratio(3.25, 1.0), "3.3×");
    }
}
