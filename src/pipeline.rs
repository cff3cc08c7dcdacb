//! The end-to-end generation pipeline.
//!
//! Control flow is strictly left-to-right: understanding, clarification
//! gate, interpretation, validation, expansion, then planning, scope
//! accounting and texture synthesis off the expanded spec, merged at the
//! materializer. Every stage is a pure function over immutable inputs, so
//! running the same request twice yields byte-identical output.

use crate::core::error::Result;
use crate::intent::{interpret, ContentSpec};
use crate::materialize::{materialize, summarize, CreditVisualSummary, MaterializedFile};
use crate::planner::{aggregate, plan_entity, AggregatedExecutionPlan, ExecutionPlan};
use crate::scope::{account, ScopeBudgetResult};
use crate::texture::{synthesize_all, FinalTexturePlan};
use crate::understanding::{analyze, decide, ClarificationRequest, GateDecision, GenerationMode, PromptAnalysis};
use crate::validation::{validate, ValidationVerdict};
use serde::{Deserialize, Serialize};

/// One incoming content request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    /// Seed for every deterministic choice downstream of interpretation.
    pub seed: String,
    pub mode: GenerationMode,
}

/// Everything a completed request produces.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub analysis: PromptAnalysis,
    pub content: ContentSpec,
    pub plans: Vec<ExecutionPlan>,
    pub aggregated: AggregatedExecutionPlan,
    pub scope: ScopeBudgetResult,
    pub textures: Vec<FinalTexturePlan>,
    pub summary: CreditVisualSummary,
    pub files: Vec<MaterializedFile>,
}

/// Outcome of running the pipeline on one request.
///
/// Clarification and rejection are structured outcomes, not errors: the
/// only `Err` paths out of [`run`] are programming-level faults such as a
/// value failing to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// More information is needed before anything is generated.
    Clarify(ClarificationRequest),
    /// A validation gate refused the request.
    Rejected(ValidationVerdict),
    Complete(Box<GenerationResult>),
}

/// Run the full pipeline on one request.
pub fn run(request: &GenerationRequest) -> Result<PipelineOutcome> {
    tracing::info!(prompt = %request.prompt, seed = %request.seed, "pipeline start");

    let analysis = analyze(&request.prompt);
    if let GateDecision::Ask(clarification) = decide(&analysis, request.mode) {
        tracing::info!("pipeline paused for clarification");
        return Ok(PipelineOutcome::Clarify(clarification));
    }

    // The interpreter normalizes sentence by sentence from the raw text;
    // the gate's flattened normalization has no sentence boundaries.
    let content = interpret(&request.prompt, request.mode);

    let verdict = validate(&content, &request.prompt);
    if !verdict.valid {
        return Ok(PipelineOutcome::Rejected(verdict));
    }

    let expanded = crate::expansion::expand(&content);

    let plans: Vec<ExecutionPlan> = expanded
        .items
        .iter()
        .map(|i| {
            plan_entity(
                &i.id,
                &i.display_name,
                &i.description,
                crate::core::types::EntityCategory::Item,
            )
        })
        .chain(expanded.blocks.iter().map(|b| {
            plan_entity(
                &b.id,
                &b.display_name,
                &b.description,
                crate::core::types::EntityCategory::Block,
            )
        }))
        .collect();
    let aggregated = aggregate(plans.clone());

    let scope = account(&expanded, &plans, &request.prompt);
    let textures = synthesize_all(&expanded, &request.seed);
    let summary = summarize(&scope, &textures);
    let files = materialize(&expanded, &plans, &aggregated, &scope, &textures)?;

    tracing::info!(
        files = files.len(),
        credits = scope.total_credits,
        "pipeline complete"
    );

    Ok(PipelineOutcome::Complete(Box::new(GenerationResult {
        analysis,
        content,
        plans,
        aggregated,
        scope,
        textures,
        summary,
        files,
    })))
}
