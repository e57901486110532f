use std::sync::Arc;

use crate::config::Config;
use crate::planner::generator::PlanGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Per-request form values never live here; they travel as `StudyPreferences`.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable plan source. Default: LlmPlanGenerator.
    pub planner: Arc<dyn PlanGenerator>,
    pub config: Config,
}
