//! Single-field mutations applied to a copy of the baseline.

use std::fmt;

use crate::error::MutationError;
use crate::model::TranscriptRecord;

/// One targeted corruption of a transcript record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Swap the last two digits of `extracted_gpa` ("89.17" -> "89.71").
    SwapGpaDigits,
    /// Remove the course at `index`.
    DropCourse { index: usize },
    /// Overwrite the grade of the course at `index`.
    SetGrade { index: usize, grade: String },
}

impl Mutation {
    /// Apply to a deep copy of `base`. `base` is never modified.
    pub fn apply(&self, base: &TranscriptRecord) -> Result<TranscriptRecord, MutationError> {
        let mut record = base.clone();
        match self {
            Self::SwapGpaDigits => {
                record.extracted_gpa = swap_last_two_digits(&record.extracted_gpa)?;
            }
            Self::DropCourse { index } => {
                check_index(*index, record.courses.len())?;
                record.courses.remove(*index);
            }
            Self::SetGrade { index, grade } => {
                check_index(*index, record.courses.len())?;
                record.courses[*index].grade = grade.clone();
            }
        }
        Ok(record)
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwapGpaDigits => write!(f, "swap last two digits of extracted_gpa"),
            Self::DropCourse { index } => write!(f, "remove courses[{}]", index),
            Self::SetGrade { index, grade } => {
                write!(f, "set courses[{}].grade to {:?}", index, grade)
            }
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::CourseOutOfRange { index, len })
    }
}

fn swap_last_two_digits(value: &str) -> Result<String, MutationError> {
    let mut chars: Vec<char> = value.chars().collect();
    let digits: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .collect();

    match digits.as_slice() {
        [.., a, b] => {
            chars.swap(*a, *b);
            Ok(chars.into_iter().collect())
        }
        _ => Err(MutationError::NotEnoughDigits {
            value: value.to_string(),
        }),
    }
}
