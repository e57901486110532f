//! Share links: a `/plan` URL whose query reproduces a submission.

use axum::{extract::Query, http::Uri};
use reqwest::Url;
use tracing::warn;

use crate::errors::AppError;
use crate::planner::preferences::{PreferenceQuery, StudyPreferences};

/// Path that renders a plan from query parameters.
pub const PLAN_PATH: &str = "plan";

/// Query parameters in form order. Empty values are kept so a link always
/// carries the full set.
pub fn share_pairs(prefs: &StudyPreferences) -> [(&'static str, &str); 6] {
    [
        ("status", prefs.status.as_str()),
        ("mbti", prefs.mbti.as_str()),
        ("period", prefs.period.as_str()),
        ("budget", prefs.budget.as_str()),
        ("interest", prefs.interest.as_str()),
        ("preferred_country", prefs.preferred_country.as_str()),
    ]
}

/// `{base}/plan?status=..&mbti=..&...`. `None` if `base` is not a URL.
pub fn share_url(base: &str, prefs: &StudyPreferences) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(PLAN_PATH);
    url.query_pairs_mut()
        .clear()
        .extend_pairs(share_pairs(prefs));
    Some(url.into())
}

/// Decodes the query of a `/` or `/plan` request, which is how share links
/// come back in. Malformed or duplicated parameters are a validation error so
/// the page can still render the form.
pub fn decode_query(uri: &Uri) -> Result<PreferenceQuery, AppError> {
    Query::<PreferenceQuery>::try_from_uri(uri)
        .map(|Query(q)| q)
        .map_err(|e| {
            warn!("Rejected plan query {:?}: {}", uri.query(), e.body_text());
            AppError::Validation(
                "リンクの条件を読み取れませんでした。フォームから選び直してください。".to_string(),
            )
        })
}
