//! Axum route handlers for the planner page and the JSON API.

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::planner::export::{download_filename, download_href, snapshot_html};
use crate::planner::generator::generate_plan;
use crate::planner::plan::StudyPlan;
use crate::planner::preferences::{PreferenceQuery, StudyPreferences};
use crate::planner::render::{render_page, PageContext, RenderedResult};
use crate::planner::share::{decode_query, share_url};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatePlanResponse {
    pub plan: StudyPlan,
    pub share_url: Option<String>,
}

/// GET /
///
/// Renders the form. Query parameters from a share link pre-fill it; a link
/// that cannot be decoded shows the empty form with a banner.
pub async fn handle_index(uri: Uri) -> Response {
    match decode_query(&uri) {
        Ok(query) => Html(render_page(&PageContext {
            prefs: StudyPreferences::from_query(&query),
            ..Default::default()
        }))
        .into_response(),
        Err(e) => form_with_error(StudyPreferences::default(), e),
    }
}

/// GET /plan
///
/// Generates and renders a plan. The request URL doubles as the share link.
/// Failures re-render the form with a user-visible message.
pub async fn handle_plan_page(State(state): State<AppState>, uri: Uri) -> Response {
    let query = match decode_query(&uri) {
        Ok(query) => query,
        Err(e) => return form_with_error(StudyPreferences::default(), e),
    };
    let prefs = StudyPreferences::from_query(&query);

    match generate_plan(state.planner.as_ref(), &prefs).await {
        Ok(plan) => Html(plan_page(&state, prefs, &plan)).into_response(),
        Err(e) => form_with_error(prefs, e),
    }
}

/// POST /api/v1/plans
///
/// Same pipeline as the page, returning the raw plan and its share link.
pub async fn handle_create_plan(
    State(state): State<AppState>,
    Json(query): Json<PreferenceQuery>,
) -> Result<Json<CreatePlanResponse>, AppError> {
    let prefs = StudyPreferences::from_query(&query);
    let plan = generate_plan(state.planner.as_ref(), &prefs).await?;

    Ok(Json(CreatePlanResponse {
        share_url: share_url(&state.config.public_base_url, &prefs),
        plan,
    }))
}

fn form_with_error(prefs: StudyPreferences, e: AppError) -> Response {
    e.log();
    let page = render_page(&PageContext {
        prefs,
        error: Some(e.user_message()),
        result: None,
    });
    (e.status_code(), Html(page)).into_response()
}

fn plan_page(state: &AppState, prefs: StudyPreferences, plan: &StudyPlan) -> String {
    let generated_at = Utc::now();
    let image_api_base = state.config.image_api_base.as_str();
    let snapshot = snapshot_html(&prefs, plan, image_api_base, generated_at);
    let share_url = share_url(&state.config.public_base_url, &prefs);

    render_page(&PageContext {
        prefs,
        error: None,
        result: Some(RenderedResult {
            plan,
            image_api_base,
            share_url,
            download_href: download_href(&snapshot),
            download_filename: download_filename(generated_at),
        }),
    })
}
