pub mod bounds;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod i18n;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod plan;
pub mod render;
pub mod report;
pub mod text;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config, parse_config};
pub use i18n::{Locale, Messages};
pub use plan::{ExecutionPlan, PlanStep, load_plan};

use crate::builder::build_graph;
use crate::layout::compute_layout;
use crate::render::{PlaceholderReason, render_layout_svg, render_placeholder};

/// Full pipeline: plan to graph, layout, and SVG document.
///
/// A plan without steps renders the "plan not found" placeholder.
pub fn render_plan_svg(plan: &ExecutionPlan, config: &Config) -> String {
    let messages = Messages::for_locale(config.locale);
    let Some(graph) = build_graph(plan, messages) else {
        return render_placeholder(
            PlaceholderReason::PlanNotFound,
            &config.theme,
            &config.render,
            messages,
        );
    };
    let layout = compute_layout(graph, &config.layout);
    render_layout_svg(&layout, config)
}

/// Parses plan JSON and renders it in one call. Malformed input is an error.
pub fn render_plan_json(plan_json: &str, config: &Config) -> Result<String, plan::PlanError> {
    let plan = ExecutionPlan::from_json(plan_json)?;
    Ok(render_plan_svg(&plan, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_renders_not_found_placeholder() {
        let svg = render_plan_svg(&ExecutionPlan::default(), &Config::default());
        assert!(svg.contains("width=\"400\" height=\"150\""));
        assert!(svg.contains("url(#bgGrad)"));
        assert!(svg.contains(">Plan not found</text>"));
    }

    #[test]
    fn json_entry_point_renders_steps() {
        let json = r#"{"current":0,"steps":[{"name":"auth","kind":"pre"},{"kind":"wasm"}],"commandPath":["tg","build"]}"#;
        let svg = render_plan_json(json, &Config::default()).unwrap();
        assert!(svg.contains(">auth</text>"));
        assert!(svg.contains(">Step 2</text>"));
        assert!(svg.contains(">tg build</text>"));
    }

    #[test]
    fn json_entry_point_rejects_malformed_input() {
        assert!(render_plan_json("{\"steps\": [", &Config::default()).is_err());
    }
}
