//! Client-side download of a standalone HTML snapshot of a result.
//! The snapshot is embedded in the page as a base64 data URI; nothing is stored.

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::planner::plan::StudyPlan;
use crate::planner::preferences::StudyPreferences;
use crate::planner::render::{html_document, render_result_cards};

const DATA_URI_PREFIX: &str = "data:text/html;charset=utf-8;base64,";

/// Result cards wrapped in a self-contained document.
pub fn snapshot_html(
    prefs: &StudyPreferences,
    plan: &StudyPlan,
    image_api_base: &str,
    generated_at: DateTime<Utc>,
) -> String {
    html_document(&format!(
        r#"{cards}<p class="generated-at">Generated by DreamRoute at {at}</p>"#,
        cards = render_result_cards(prefs, plan, image_api_base),
        at = generated_at.format("%Y-%m-%d %H:%M UTC"),
    ))
}

pub fn download_href(html: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(html.as_bytes());
    format!("{DATA_URI_PREFIX}{encoded}")
}

pub fn download_filename(generated_at: DateTime<Utc>) -> String {
    format!("dreamroute_plan_{}.html", generated_at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::config::DEFAULT_IMAGE_API_BASE;
    use crate::planner::plan::fixtures::full_plan;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_download_href_decodes_back_to_snapshot() {
        let html = snapshot_html(
            &StudyPreferences::default(),
            &full_plan(),
            DEFAULT_IMAGE_API_BASE,
            at(),
        );
        let href = download_href(&html);
        let encoded = href.strip_prefix(DATA_URI_PREFIX).unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), html);
    }

    #[test]
    fn test_snapshot_is_standalone_without_form() {
        let html = snapshot_html(
            &StudyPreferences::default(),
            &full_plan(),
            DEFAULT_IMAGE_API_BASE,
            at(),
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("韓国・ソウル"));
        assert!(html.contains("2026-03-14 09:26 UTC"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_download_filename_is_timestamped() {
        assert_eq!(download_filename(at()), "dreamroute_plan_20260314_092653.html");
    }
}
