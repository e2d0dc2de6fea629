use planviz::theme::Theme;
use planviz::{Config, Locale, render_plan_json};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanRenderOptions {
    theme: Option<String>,
    locale: Option<String>,
    font_family: Option<String>,
}

fn build_config(options: PlanRenderOptions) -> Result<Config, String> {
    let mut config = Config::default();
    if let Some(name) = options.theme.as_deref() {
        config.theme = Theme::from_name(name).ok_or_else(|| format!("unknown theme '{name}'"))?;
    }
    if let Some(token) = options.locale.as_deref() {
        config.locale = Locale::from_token(token).ok_or_else(|| format!("unknown locale '{token}'"))?;
    }
    if let Some(font_family) = options.font_family {
        config.theme.font_family = font_family;
    }
    Ok(config)
}

fn render(plan_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<PlanRenderOptions>(raw).map_err(|e| e.to_string())?,
        None => PlanRenderOptions::default(),
    };
    let config = build_config(options)?;
    render_plan_json(plan_json, &config).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn render_plan_svg(plan_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    render(plan_json, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use super::render;

    const PLAN: &str = r#"{"current":0,"steps":[{"name":"auth","kind":"pre","requestKeys":["token"]},{"kind":"command"}]}"#;

    #[test]
    fn renders_plan_with_default_options() {
        let svg = render(PLAN, None).expect("plan should render");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">auth</text>"));
        assert!(svg.contains(">Step 2</text>"));
    }

    #[test]
    fn applies_locale_and_font() {
        let svg = render(PLAN, Some(r#"{"locale":"ru","fontFamily":"Inter"}"#)).unwrap();
        assert!(svg.contains(">Шаг 2</text>"));
        assert!(svg.contains("font-family=\"Inter\""));
    }

    #[test]
    fn blank_plan_renders_placeholder() {
        let svg = render("", None).unwrap();
        assert!(svg.contains(">Plan not found</text>"));
    }

    #[test]
    fn reports_bad_input() {
        assert!(render("{", None).is_err());
        assert!(render(PLAN, Some(r#"{"theme":"neon"}"#)).is_err());
    }
}
