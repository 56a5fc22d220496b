use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Dates of a term during which subjects may be added or dropped.
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDropWindow {
    pub term_id: i64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl AddDropWindow {
    pub fn new(term_id: i64, starts_on: NaiveDate, ends_on: NaiveDate) -> Result<Self> {
        let window = Self {
            term_id,
            starts_on,
            ends_on,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<()> {
        if self.starts_on > self.ends_on {
            return Err(AppError::validation(
                "add/drop window must start on or before its end date",
            ));
        }
        Ok(())
    }

    pub fn is_open(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }

    pub fn ensure_open(&self, date: NaiveDate) -> Result<()> {
        if self.is_open(date) {
            Ok(())
        } else {
            Err(AppError::validation("add/drop window is closed"))
        }
    }
}

/// Body of the add-subject request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectChange {
    pub subject_id: i64,
}

/// A subject the student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledSubject {
    pub subject_id: i64,
    pub code: String,
    #[serde(default)]
    pub title: String,
}
