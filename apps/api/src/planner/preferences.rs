//! Request-scoped user preferences, built from query parameters or JSON.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::planner::options::{
    resolve_option, BUDGET_OPTIONS, MBTI_OPTIONS, PERIOD_OPTIONS, STATUS_OPTIONS,
};

/// Raw form input. Every field may be missing (first visit, hand-edited links).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceQuery {
    pub status: Option<String>,
    pub mbti: Option<String>,
    pub period: Option<String>,
    pub budget: Option<String>,
    pub interest: Option<String>,
    pub preferred_country: Option<String>,
}

/// Resolved preferences. Selectbox fields always hold a listed option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyPreferences {
    pub status: String,
    pub mbti: String,
    pub period: String,
    pub budget: String,
    pub interest: String,
    pub preferred_country: String,
}

impl StudyPreferences {
    pub fn from_query(query: &PreferenceQuery) -> Self {
        Self {
            status: resolve_option(STATUS_OPTIONS, query.status.as_deref(), 0).to_string(),
            mbti: resolve_option(MBTI_OPTIONS, query.mbti.as_deref(), 0).to_string(),
            period: resolve_option(PERIOD_OPTIONS, query.period.as_deref(), 0).to_string(),
            budget: resolve_option(BUDGET_OPTIONS, query.budget.as_deref(), 0).to_string(),
            interest: free_text(query.interest.as_deref()),
            preferred_country: free_text(query.preferred_country.as_deref()),
        }
    }

    /// The model needs at least one interest to work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interest.is_empty() {
            return Err(AppError::Validation(
                "AIがプランを考えるために、「興味のあること」だけは教えてください！".to_string(),
            ));
        }
        Ok(())
    }

    pub fn preferred_country(&self) -> Option<&str> {
        if self.preferred_country.is_empty() {
            None
        } else {
            Some(&self.preferred_country)
        }
    }
}

impl Default for StudyPreferences {
    fn default() -> Self {
        Self::from_query(&PreferenceQuery::default())
    }
}

fn free_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(interest: &str, country: &str) -> PreferenceQuery {
        PreferenceQuery {
            status: Some("高校生".to_string()),
            mbti: Some("INFP".to_string()),
            period: Some("半年".to_string()),
            budget: Some("100-200万円".to_string()),
            interest: Some(interest.to_string()),
            preferred_country: Some(country.to_string()),
        }
    }

    #[test]
    fn test_from_query_keeps_listed_values() {
        let prefs = StudyPreferences::from_query(&query("K-POP", "韓国"));
        assert_eq!(prefs.status, "高校生");
        assert_eq!(prefs.mbti, "INFP");
        assert_eq!(prefs.period, "半年");
        assert_eq!(prefs.budget, "100-200万円");
        assert_eq!(prefs.interest, "K-POP");
        assert_eq!(prefs.preferred_country(), Some("韓国"));
    }

    #[test]
    fn test_default_uses_first_options() {
        let prefs = StudyPreferences::default();
        assert_eq!(prefs.status, "大学生・大学院生");
        assert_eq!(prefs.mbti, "わからない");
        assert_eq!(prefs.period, "短期（1-2週間）");
        assert_eq!(prefs.budget, "50万円以下");
        assert!(prefs.interest.is_empty());
        assert_eq!(prefs.preferred_country(), None);
    }

    #[test]
    fn test_unlisted_selectbox_value_falls_back() {
        let mut q = query("カフェ", "");
        q.status = Some("宇宙飛行士".to_string());
        let prefs = StudyPreferences::from_query(&q);
        assert_eq!(prefs.status, "大学生・大学院生");
    }

    #[test]
    fn test_free_text_is_trimmed() {
        let prefs = StudyPreferences::from_query(&query("  IT  ", "   "));
        assert_eq!(prefs.interest, "IT");
        assert_eq!(prefs.preferred_country(), None);
    }

    #[test]
    fn test_validate_requires_interest() {
        let prefs = StudyPreferences::from_query(&query("", "カナダ"));
        let err = prefs.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let prefs = StudyPreferences::from_query(&query("カフェ", ""));
        assert!(prefs.validate().is_ok());
    }
}
