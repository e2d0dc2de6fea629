use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "ru" | "ru-ru" => Some(Self::Ru),
            _ => None,
        }
    }
}

/// User-facing strings drawn into the diagram and the HTML report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub plan_not_found: String,
    pub no_data: String,
    /// Fallback label for unnamed steps; `{n}` is the 1-based step number.
    pub step_template: String,
    pub start: String,
    pub stop: String,
    pub no_keys: String,
    pub plan_loaded: String,
    pub plan_missing: String,
    pub formatting_error: String,
}

static EN: Lazy<Messages> = Lazy::new(|| Messages {
    plan_not_found: "Plan not found".to_string(),
    no_data: "No data to visualize".to_string(),
    step_template: "Step {n}".to_string(),
    start: "Start".to_string(),
    stop: "Stop".to_string(),
    no_keys: "(no keys)".to_string(),
    plan_loaded: "Plan loaded and visualized".to_string(),
    plan_missing: "ExecutionPlan not found in request. This is normal if the plugin is not run through the scheduler.".to_string(),
    formatting_error: "Formatting error".to_string(),
});

static RU: Lazy<Messages> = Lazy::new(|| Messages {
    plan_not_found: "План не найден".to_string(),
    no_data: "Нет данных для визуализации".to_string(),
    step_template: "Шаг {n}".to_string(),
    start: "Старт".to_string(),
    stop: "Стоп".to_string(),
    no_keys: "(нет ключей)".to_string(),
    plan_loaded: "План загружен и визуализирован".to_string(),
    plan_missing: "ExecutionPlan не найден в запросе. Это нормально, если плагин запущен не через планировщик.".to_string(),
    formatting_error: "Ошибка форматирования".to_string(),
});

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn step_label(&self, index: usize) -> String {
        self.step_template.replace("{n}", &(index + 1).to_string())
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::for_locale(Locale::En).clone()
    }
}
