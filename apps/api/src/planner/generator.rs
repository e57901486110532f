//! Plan generation — preferences in, structured plan out.
//!
//! Flow: validate → build_prompt → LLM (JSON mode) → StudyPlan.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::planner::plan::StudyPlan;
use crate::planner::preferences::StudyPreferences;
use crate::planner::prompts::{build_prompt, plan_system_prompt};

/// Source of study plans. Production uses the LLM; tests plug in fixtures.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, prefs: &StudyPreferences) -> Result<StudyPlan, AppError>;
}

/// Generates plans with a single Gemini call per request.
pub struct LlmPlanGenerator {
    llm: LlmClient,
}

impl LlmPlanGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PlanGenerator for LlmPlanGenerator {
    async fn generate(&self, prefs: &StudyPreferences) -> Result<StudyPlan, AppError> {
        let prompt = build_prompt(prefs);
        let plan = self
            .llm
            .call_json::<StudyPlan>(&prompt, &plan_system_prompt())
            .await?;
        Ok(plan)
    }
}

/// Validates preferences and runs the generator, logging the outcome.
pub async fn generate_plan(
    generator: &dyn PlanGenerator,
    prefs: &StudyPreferences,
) -> Result<StudyPlan, AppError> {
    prefs.validate()?;

    let request_id = Uuid::new_v4();
    let started = Instant::now();
    info!(
        %request_id,
        status = %prefs.status,
        pinned_country = prefs.preferred_country().is_some(),
        "Generating study plan"
    );

    match generator.generate(prefs).await {
        Ok(plan) => {
            info!(
                %request_id,
                country = %plan.country,
                has_plan_b = plan.plan_b.is_some(),
                has_persona = plan.persona.is_some(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Study plan generated"
            );
            Ok(plan)
        }
        Err(e) => {
            warn!(%request_id, "Study plan generation failed: {e}");
            Err(e)
        }
    }
}
