use crate::config::Config;
use crate::i18n::Messages;
use crate::plan::ExecutionPlan;
use crate::render_plan_svg;
use crate::text::escape_xml;
use serde::Serialize;

/// JSON dumps beyond this many bytes are cut and marked as truncated.
pub const MAX_JSON_SIZE: usize = 100 * 1024;
pub const TRUNCATION_MARKER: &str = "... (truncated)";

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ExecutionPlan>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub svg: String,
}

impl PlanResult {
    /// A missing plan is a normal outcome: it renders the placeholder with an
    /// explanatory message instead of failing.
    pub fn from_plan(plan: Option<ExecutionPlan>, config: &Config) -> Self {
        let messages = Messages::for_locale(config.locale);
        match plan {
            Some(plan) => {
                let svg = render_plan_svg(&plan, config);
                Self {
                    error: None,
                    message: messages.plan_loaded.clone(),
                    plan: Some(plan),
                    svg,
                }
            }
            None => Self {
                error: None,
                message: messages.plan_missing.clone(),
                plan: None,
                svg: render_plan_svg(&ExecutionPlan::default(), config),
            },
        }
    }
}

/// HTML fragment with the diagram followed by the raw result as JSON.
pub fn format_plan_html(result: &PlanResult, messages: &Messages) -> String {
    let json = match serde_json::to_string(result) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to marshal plan result to JSON");
            return format!(
                "<div class=\"error\">{}: {}</div>",
                escape_xml(&messages.formatting_error),
                escape_xml(&err.to_string())
            );
        }
    };
    let json = cap_json(json, MAX_JSON_SIZE);
    format!(
        "<div class=\"result\">{}</div><pre class=\"json\">{}</pre>",
        result.svg,
        escape_xml(&json)
    )
}

fn cap_json(mut json: String, limit: usize) -> String {
    if json.len() <= limit {
        return json;
    }
    let mut cut = limit;
    while !json.is_char_boundary(cut) {
        cut -= 1;
    }
    json.truncate(cut);
    json.push_str(TRUNCATION_MARKER);
    json
}
