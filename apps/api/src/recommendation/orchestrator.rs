//! Recommendation Orchestrator: one pass per request, no intermediate state.
//!
//! Flow: validate → gather options (store, then per-category fallback) →
//!       generate (or render fallback) → persist (best effort) → return text.
//!
//! Store and generator failures never leave this module; they select the
//! degraded branch and are logged.

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::options::BranchOptions;
use crate::models::profile::{BranchProfile, RecommendationForm};
use crate::models::recommendation::{HistoryEntry, NewRecommendation, HISTORY_LIMIT};
use crate::recommendation::fallback::gather_options;
use crate::recommendation::prompts::build_recommendation_prompt;
use crate::recommendation::render::{render_fallback, FallbackReason};
use crate::store::RecommendationStore;

/// Which path produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Generated,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub text: String,
    pub source: RecommendationSource,
}

/// Store options for the branch, backfilled per category. A store failure
/// counts as "no rows".
pub async fn gather_branch_options(store: &dyn RecommendationStore, branch: &str) -> BranchOptions {
    let stored = match store.fetch_options(branch).await {
        Ok(options) => options,
        Err(e) => {
            warn!("Reference data unavailable for branch '{branch}': {e}");
            BranchOptions::default()
        }
    };
    gather_options(branch, stored)
}

/// Generated text when the generator is configured and answers, otherwise the
/// fallback document. Exactly one generator call at most.
pub async fn compose_recommendation(
    generator: &dyn TextGenerator,
    profile: &BranchProfile,
    options: &BranchOptions,
) -> RecommendationOutcome {
    if !generator.is_configured() {
        warn!("Generator not configured, using structured fallback recommendation");
        let reason = FallbackReason::GeneratorUnconfigured;
        return RecommendationOutcome {
            text: render_fallback(profile, options, reason),
            source: RecommendationSource::Fallback(reason),
        };
    }

    let prompt = build_recommendation_prompt(profile, options);
    match generator.generate(&prompt).await {
        Ok(text) => RecommendationOutcome {
            text,
            source: RecommendationSource::Generated,
        },
        Err(e) => {
            error!("Generator error for branch '{}': {e}", profile.branch);
            let reason = FallbackReason::GeneratorFailed;
            RecommendationOutcome {
                text: render_fallback(profile, options, reason),
                source: RecommendationSource::Fallback(reason),
            }
        }
    }
}

/// Runs the full recommendation pipeline for one form submission.
///
/// Steps:
/// 1. validate and trim the form → BranchProfile (400 on failure, nothing persisted)
/// 2. gather options for the branch
/// 3. generate or render the fallback document
/// 4. save the text for the session (failure is logged only)
/// 5. return the text verbatim
pub async fn generate_recommendation(
    store: &dyn RecommendationStore,
    generator: &dyn TextGenerator,
    session_id: &str,
    form: &RecommendationForm,
) -> Result<RecommendationOutcome, AppError> {
    let profile = BranchProfile::from_form(form).inspect_err(|_| {
        warn!("Incomplete form data in get_recommendations (session {session_id})");
    })?;

    let options = gather_branch_options(store, &profile.branch).await;
    info!(
        "Generating recommendations for {} student with interests: {}",
        profile.branch, profile.interests
    );

    let outcome = compose_recommendation(generator, &profile, &options).await;

    let record = NewRecommendation::new(session_id, &profile, &outcome.text);
    match store.save_recommendation(&record).await {
        Ok(()) => info!("Recommendation saved for session {session_id}"),
        Err(e) => warn!("Failed to save recommendation for session {session_id}: {e}"),
    }

    Ok(outcome)
}

/// The most recent recommendations for a session, newest first. Empty when the
/// store is unavailable.
pub async fn recent_history(store: &dyn RecommendationStore, session_id: &str) -> Vec<HistoryEntry> {
    match store.fetch_history(session_id, HISTORY_LIMIT).await {
        Ok(records) => {
            info!(
                "History retrieved: {} items for session {session_id}",
                records.len()
            );
            records.into_iter().map(HistoryEntry::from).collect()
        }
        Err(e) => {
            warn!("History unavailable for session {session_id}: {e}");
            Vec::new()
        }
    }
}
