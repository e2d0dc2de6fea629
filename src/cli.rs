use crate::config::{Config, load_config};
use crate::i18n::{Locale, Messages};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::plan::{ExecutionPlan, load_plan};
use crate::render::write_output_svg;
use crate::render_plan_svg;
use crate::report::{PlanResult, format_plan_html};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "planviz", version, about = "Execution plan visualizer (SVG/PNG/HTML)")]
pub struct Args {
    /// Plan JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and HTML if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON/JSON5 file (theme, themeVariables, layout, card, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Label language (en, ru). Overrides the config file.
    #[arg(long = "locale")]
    pub locale: Option<String>,

    /// Write node geometry, bounds, and canvas as JSON to this path
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Html,
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    let plan = load_plan(args.input.as_deref()).context("failed to load execution plan")?;
    tracing::info!(steps = plan.steps.len(), format = ?args.output_format, "rendering plan");

    if let Some(path) = args.dump_layout.as_deref() {
        dump_layout(&plan, &config, path)?;
    }

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_plan_svg(&plan, &config);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_plan_svg(&plan, &config);
            write_png(&svg, &output, &config)?;
        }
        OutputFormat::Html => {
            let plan = (!plan.is_empty()).then_some(plan);
            let result = PlanResult::from_plan(plan, &config);
            let html = format_plan_html(&result, Messages::for_locale(config.locale));
            write_output_svg(&html, args.output.as_deref())?;
        }
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(token) = args.locale.as_deref() {
        config.locale = Locale::from_token(token)
            .ok_or_else(|| anyhow::anyhow!("Unknown locale '{}', expected en or ru", token))?;
    }
    Ok(config)
}

fn dump_layout(plan: &ExecutionPlan, config: &Config, path: &Path) -> Result<()> {
    let messages = Messages::for_locale(config.locale);
    let Some(graph) = crate::builder::build_graph(plan, messages) else {
        tracing::warn!(path = %path.display(), "plan has no steps, layout dump skipped");
        return Ok(());
    };
    let layout = compute_layout(graph, &config.layout);
    write_layout_dump(path, &layout, config)
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.render)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the 'png' feature"))
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
