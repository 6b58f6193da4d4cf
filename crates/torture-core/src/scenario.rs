//! The fixed set of test cases.

use crate::error::{ConfigError, ConfigResult, MutationError};
use crate::model::TranscriptRecord;
use crate::mutation::Mutation;
use crate::verdict::Expectation;

/// Name of the unmutated case.
pub const PERFECT_DATA: &str = "Perfect Data";

/// A named case: the baseline, optionally with one mutation applied.
///
/// The baseline case is expected to PASS; every mutated case is expected to FAIL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub mutation: Option<Mutation>,
}

impl Scenario {
    pub fn baseline(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mutation: None,
        }
    }

    pub fn mutated(name: impl Into<String>, mutation: Mutation) -> Self {
        Self {
            name: name.into(),
            mutation: Some(mutation),
        }
    }

    pub fn expectation(&self) -> Expectation {
        Expectation::from_expect_pass(self.mutation.is_none())
    }

    /// Build the record for this case from `base`.
    pub fn build(&self, base: &TranscriptRecord) -> Result<TranscriptRecord, MutationError> {
        match &self.mutation {
            None => Ok(base.clone()),
            Some(mutation) => mutation.apply(base),
        }
    }
}

/// The four cases, in run order.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::baseline(PERFECT_DATA),
        Scenario::mutated("Bad GPA", Mutation::SwapGpaDigits),
        Scenario::mutated("Missing Course", Mutation::DropCourse { index: 0 }),
        Scenario::mutated(
            "Bad Grade",
            Mutation::SetGrade {
                index: 2,
                grade: "65".to_string(),
            },
        ),
    ]
}

/// Keep only the scenarios named in `only` (case-insensitive), preserving run order.
///
/// An empty `only` keeps everything.
pub fn select(scenarios: Vec<Scenario>, only: &[String]) -> ConfigResult<Vec<Scenario>> {
    if only.is_empty() {
        return Ok(scenarios);
    }

    for name in only {
        if !scenarios.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
            let known = scenarios
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ConfigError::UnknownCase {
                name: name.clone(),
                known,
            });
        }
    }

    Ok(scenarios
        .into_iter()
        .filter(|s| only.iter().any(|n| s.name.eq_ignore_ascii_case(n)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios_order_and_expectations() {
        let scenarios = default_scenarios();
        let names: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Perfect Data", "Bad GPA", "Missing Course", "Bad Grade"]
        );

        let expectations: Vec<_> = scenarios.iter().map(Scenario::expectation).collect();
        assert_eq!(
            expectations,
            vec![
                Expectation::Pass,
                Expectation::Fail,
                Expectation::Fail,
                Expectation::Fail
            ]
        );
    }

    #[test]
    fn test_each_case_changes_at_most_one_field() {
        let base = TranscriptRecord::baseline();
        for scenario in default_scenarios() {
            let record = scenario.build(&base).unwrap();
            let changed = record.changed_fields(&base);
            match scenario.mutation {
                None => assert!(changed.is_empty(), "{} changed {:?}", scenario.name, changed),
                Some(_) => assert_eq!(changed.len(), 1, "{} changed {:?}", scenario.name, changed),
            }

            let expected_len = if scenario.name == "Missing Course" {
                base.courses.len() - 1
            } else {
                base.courses.len()
            };
            assert_eq!(record.courses.len(), expected_len, "{}", scenario.name);
        }
    }

    #[test]
    fn test_building_every_case_leaves_baseline_identical() {
        let base = TranscriptRecord::baseline();
        let before = serde_json::to_vec(&base).unwrap();

        let mut built: Vec<_> = default_scenarios()
            .iter()
            .map(|s| s.build(&base).unwrap())
            .collect();
        for record in &mut built {
            record.filename.clear();
            record.courses.clear();
        }

        assert_eq!(serde_json::to_vec(&base).unwrap(), before);
    }

    #[test]
    fn test_bad_gpa_body() {
        let base = TranscriptRecord::baseline();
        let record = default_scenarios()[1].build(&base).unwrap();
        let body = serde_json::to_string(&record).unwrap();
        assert!(body.contains(r#""extracted_gpa":"89.71""#));
    }

    #[test]
    fn test_select_filters_case_insensitively() {
        let selected = select(
            default_scenarios(),
            &["bad grade".to_string(), "PERFECT DATA".to_string()],
        )
        .unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Perfect Data", "Bad Grade"]);
    }

    #[test]
    fn test_select_empty_keeps_all() {
        assert_eq!(select(default_scenarios(), &[]).unwrap().len(), 4);
    }

    #[test]
    fn test_select_unknown_name() {
        let err = select(default_scenarios(), &["Bad Name".to_string()]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Bad Name"));
        assert!(message.contains("Missing Course"));
    }
}
