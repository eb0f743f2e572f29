use chrono::NaiveDate;
use match_error::Result;
use serde::{Deserialize, Serialize};

/// Wire format of `unemployed_date`, e.g. `2024-03-15`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A user's public job-seeking attributes, as served by the profile store.
///
/// Field names are renamed to match the JSON the REST service emits.
/// `job_type` and `skill` hold comma-joined selection lists as stored by
/// the service; `unemployed_date` is empty while the user is employed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileRecord {
    pub username: String,
    pub coord_x: f64,
    pub coord_y: f64,
    pub job_type: String,
    pub skill: String,
    pub exp: u32,
    #[serde(default)]
    pub unemployed_date: String,
    pub message: String,
    pub email: String,

    /// Whole days since `unemployed_date`, computed during a filter pass.
    /// Display-only; the raw date above stays the source of truth.
    #[serde(skip)]
    pub unemployed_days: Option<i64>,
}

impl ProfileRecord {
    /// Parse the raw unemployment date. `Ok(None)` when the field is empty.
    pub fn unemployed_since(&self) -> Result<Option<NaiveDate>> {
        if self.unemployed_date.is_empty() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(&self.unemployed_date, DATE_FORMAT)?;
        Ok(Some(date))
    }

    /// Unemployment date for display, annotated with the day count when one
    /// has been computed: `"2024-03-15 (42 Days)"`. Always derived fresh
    /// from the raw date, so repeated passes render identically.
    pub fn display_unemployed_date(&self) -> String {
        match self.unemployed_days {
            Some(days) => format!("{} ({} Days)", self.unemployed_date, days),
            None => self.unemployed_date.clone(),
        }
    }
}
