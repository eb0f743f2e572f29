use itertools::Itertools;

use crate::record::ProfileRecord;

/// One independently-activated filter predicate over profile records.
///
/// Criteria are conjunctive: a record must satisfy every active criterion
/// to stay in the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCriterion {
    /// Any of the selected job types appears in the record's job-type list
    JobTypeIn(Vec<String>),
    /// Any of the selected categories appears in the record's skill list
    CategoryIn(Vec<String>),
    /// At least this many years of experience
    MinExperience(u32),
    /// Unemployed for at least this many whole days
    MinDaysUnemployed(i64),
    /// Case-insensitive keyword match against the profile message
    MessageKeyword(String),
}

impl FilterCriterion {
    /// Predicate for the criteria that need no date arithmetic. The
    /// day-based criterion is evaluated by the engine, which owns the
    /// reference date and the annotation side effect.
    pub(crate) fn keeps(&self, record: &ProfileRecord) -> bool {
        match self {
            Self::JobTypeIn(types) => contains_any(&record.job_type, types),
            Self::CategoryIn(categories) => contains_any(&record.skill, categories),
            Self::MinExperience(min) => record.exp >= *min,
            Self::MessageKeyword(keyword) => record
                .message
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            Self::MinDaysUnemployed(_) => true,
        }
    }

    /// Human-readable token for the activity summary line
    pub fn describe(&self) -> String {
        match self {
            Self::JobTypeIn(types) => types.iter().join(", "),
            Self::CategoryIn(categories) => categories.iter().join(", "),
            Self::MinExperience(min) => format!("{} Years Of Exp", min),
            Self::MinDaysUnemployed(days) => format!("{} Days Unemployed", days),
            Self::MessageKeyword(keyword) => keyword.clone(),
        }
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Raw filter parameters as the web layer hands them over. Every field is
/// optional; an absent field schedules no criterion at all.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub job_types: Vec<String>,
    pub categories: Vec<String>,
    pub min_exp: Option<String>,
    pub min_days_unemployed: Option<String>,
    pub keyword: Option<String>,
}

impl FilterQuery {
    /// Build the active criteria. Malformed numeric parameters are coerced
    /// to zero rather than rejected; the criterion stays active.
    pub fn criteria(&self) -> Vec<FilterCriterion> {
        let mut criteria = Vec::new();
        if !self.job_types.is_empty() {
            criteria.push(FilterCriterion::JobTypeIn(self.job_types.clone()));
        }
        if !self.categories.is_empty() {
            criteria.push(FilterCriterion::CategoryIn(self.categories.clone()));
        }
        if let Some(raw) = &self.min_exp {
            criteria.push(FilterCriterion::MinExperience(lenient_number(raw)));
        }
        if let Some(raw) = &self.min_days_unemployed {
            criteria.push(FilterCriterion::MinDaysUnemployed(lenient_number(raw)));
        }
        if let Some(keyword) = &self.keyword {
            criteria.push(FilterCriterion::MessageKeyword(keyword.clone()));
        }
        criteria
    }

    pub fn is_empty(&self) -> bool {
        self.job_types.is_empty()
            && self.categories.is_empty()
            && self.min_exp.is_none()
            && self.min_days_unemployed.is_none()
            && self.keyword.is_none()
    }
}

fn lenient_number<N>(raw: &str) -> N
where
    N: std::str::FromStr + Default,
{
    raw.trim().parse().unwrap_or_else(|_| {
        log::debug!("ignoring malformed numeric filter parameter: {:?}", raw);
        N::default()
    })
}
