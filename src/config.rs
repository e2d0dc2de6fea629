use crate::i18n::Locale;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

/// Geometry of the key annotation cards drawn under each step node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub spacing: f32,
    pub padding: f32,
    pub header_height: f32,
    pub line_height: f32,
    pub max_keys: usize,
    pub empty_body_height: f32,
    pub key_max_chars: usize,
    pub key_keep_chars: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            padding: 8.0,
            header_height: 18.0,
            line_height: 16.0,
            max_keys: 5,
            empty_body_height: 12.0,
            key_max_chars: 15,
            key_keep_chars: 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub node_height: f32,
    pub terminal_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub node_gap: f32,
    pub level_spacing_x: f32,
    pub level_spacing_y: f32,
    /// Width of the band multi-level rows are centered in.
    pub row_span: f32,
    pub card: CardConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 80.0,
            terminal_size: 60.0,
            origin_x: 100.0,
            origin_y: 100.0,
            node_gap: 50.0,
            level_spacing_x: 200.0,
            level_spacing_y: 120.0,
            row_span: 800.0,
            card: CardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub padding: f32,
    pub caption_height: f32,
    pub caption_max_chars: usize,
    pub label_wrap_chars: usize,
    pub label_max_lines: usize,
    pub placeholder_width: f32,
    pub placeholder_height: f32,
    /// Raster scale applied when exporting PNG.
    pub png_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 50.0,
            caption_height: 30.0,
            caption_max_chars: 80,
            label_wrap_chars: 20,
            label_max_lines: 2,
            placeholder_width: 400.0,
            placeholder_height: 150.0,
            png_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub locale: Locale,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    caption_font_family: Option<String>,
    background: Option<String>,
    border: Option<String>,
    label_color: Option<String>,
    caption_color: Option<String>,
    current_marker: Option<String>,
    arrow_color: Option<String>,
    sequential_edge: Option<String>,
    parallel_edge: Option<String>,
    dependency_edge: Option<String>,
    start_fill: Option<String>,
    stop_fill: Option<String>,
    request_fill: Option<String>,
    response_fill: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CardConfigFile {
    spacing: Option<f32>,
    padding: Option<f32>,
    header_height: Option<f32>,
    line_height: Option<f32>,
    max_keys: Option<usize>,
    key_max_chars: Option<usize>,
    key_keep_chars: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    node_width: Option<f32>,
    node_height: Option<f32>,
    terminal_size: Option<f32>,
    origin_x: Option<f32>,
    origin_y: Option<f32>,
    node_gap: Option<f32>,
    level_spacing_x: Option<f32>,
    level_spacing_y: Option<f32>,
    row_span: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    padding: Option<f32>,
    caption_height: Option<f32>,
    caption_max_chars: Option<usize>,
    label_wrap_chars: Option<usize>,
    label_max_lines: Option<usize>,
    png_scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    locale: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    card: Option<CardConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses a config document over the defaults. Strict JSON first, then JSON5 for
/// hand-written files with comments or trailing commas.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents).map_err(|json5_err| {
            tracing::debug!(%json_err, "config is not strict JSON, tried JSON5");
            ConfigError::Parse(json5_err.to_string())
        })?,
    };

    let mut config = Config::default();

    if let Some(name) = parsed.theme.as_deref() {
        config.theme =
            Theme::from_name(name).ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))?;
    }
    if let Some(token) = parsed.locale.as_deref() {
        config.locale =
            Locale::from_token(token).ok_or_else(|| ConfigError::UnknownLocale(token.to_string()))?;
    }

    if let Some(vars) = parsed.theme_variables {
        let theme = &mut config.theme;
        if let Some(v) = vars.font_family {
            theme.font_family = v;
        }
        if let Some(v) = vars.caption_font_family {
            theme.caption_font_family = v;
        }
        if let Some(v) = vars.background {
            theme.background = v;
        }
        if let Some(v) = vars.border {
            theme.border = v;
        }
        if let Some(v) = vars.label_color {
            theme.label_color = v;
        }
        if let Some(v) = vars.caption_color {
            theme.caption_color = v;
        }
        if let Some(v) = vars.current_marker {
            theme.current_marker = v;
        }
        if let Some(v) = vars.arrow_color {
            theme.arrow_color = v;
        }
        if let Some(v) = vars.sequential_edge {
            theme.sequential_edge = v;
        }
        if let Some(v) = vars.parallel_edge {
            theme.parallel_edge = v;
        }
        if let Some(v) = vars.dependency_edge {
            theme.dependency_edge = v;
        }
        if let Some(v) = vars.start_fill {
            theme.start_fill = v;
        }
        if let Some(v) = vars.stop_fill {
            theme.stop_fill = v;
        }
        if let Some(v) = vars.request_fill {
            theme.request_fill = v;
        }
        if let Some(v) = vars.response_fill {
            theme.response_fill = v;
        }
    }

    if let Some(layout) = parsed.layout {
        let cfg = &mut config.layout;
        if let Some(v) = layout.node_width {
            cfg.node_width = v;
        }
        if let Some(v) = layout.node_height {
            cfg.node_height = v;
        }
        if let Some(v) = layout.terminal_size {
            cfg.terminal_size = v;
        }
        if let Some(v) = layout.origin_x {
            cfg.origin_x = v;
        }
        if let Some(v) = layout.origin_y {
            cfg.origin_y = v;
        }
        if let Some(v) = layout.node_gap {
            cfg.node_gap = v;
        }
        if let Some(v) = layout.level_spacing_x {
            cfg.level_spacing_x = v;
        }
        if let Some(v) = layout.level_spacing_y {
            cfg.level_spacing_y = v;
        }
        if let Some(v) = layout.row_span {
            cfg.row_span = v;
        }
    }

    if let Some(card) = parsed.card {
        let cfg = &mut config.layout.card;
        if let Some(v) = card.spacing {
            cfg.spacing = v;
        }
        if let Some(v) = card.padding {
            cfg.padding = v;
        }
        if let Some(v) = card.header_height {
            cfg.header_height = v;
        }
        if let Some(v) = card.line_height {
            cfg.line_height = v;
        }
        if let Some(v) = card.max_keys {
            cfg.max_keys = v;
        }
        if let Some(v) = card.key_max_chars {
            cfg.key_max_chars = v;
        }
        if let Some(v) = card.key_keep_chars {
            cfg.key_keep_chars = v.min(cfg.key_max_chars);
        }
    }

    if let Some(render) = parsed.render {
        let cfg = &mut config.render;
        if let Some(v) = render.padding {
            cfg.padding = v;
        }
        if let Some(v) = render.caption_height {
            cfg.caption_height = v;
        }
        if let Some(v) = render.caption_max_chars {
            cfg.caption_max_chars = v.max(3);
        }
        if let Some(v) = render.label_wrap_chars {
            cfg.label_wrap_chars = v.max(1);
        }
        if let Some(v) = render.label_max_lines {
            cfg.label_max_lines = v.max(1);
        }
        if let Some(v) = render.png_scale {
            cfg.png_scale = v;
        }
    }

    Ok(config)
}
