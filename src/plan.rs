use serde::{Deserialize, Deserializer, Serialize};
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan: {0}")]
    Io(#[from] io::Error),
    #[error("invalid plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One pipeline step as recorded by the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub request_keys: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub response_keys: Vec<String>,
    /// Nanoseconds on the wire; zero means the step has not run yet.
    #[serde(
        default,
        with = "duration_nanos",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Duration>,
}

impl PlanStep {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    /// Index of the active step. Anything outside `0..steps.len()` marks no step.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<PlanStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub command_path: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub command_args: Vec<String>,
}

impl ExecutionPlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        usize::try_from(self.current)
            .ok()
            .filter(|idx| *idx < self.steps.len())
    }

    /// Decodes a plan. Blank input and `null` mean "no plan" and yield the empty plan.
    pub fn from_json(input: &str) -> Result<Self, PlanError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let plan: Option<ExecutionPlan> = serde_json::from_str(input)?;
        Ok(plan.unwrap_or_default())
    }
}

/// Reads a plan from `path`, or from stdin when the path is absent or `-`.
pub fn load_plan(path: Option<&Path>) -> Result<ExecutionPlan, PlanError> {
    let input = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    ExecutionPlan::from_json(&input)
}

pub fn format_duration(duration: Duration) -> Option<String> {
    if duration.is_zero() {
        return None;
    }
    if duration < Duration::from_millis(1) {
        return Some(format!("{}ns", duration.as_nanos()));
    }
    if duration < Duration::from_secs(1) {
        return Some(format!("{}ms", duration.as_millis()));
    }
    if duration < Duration::from_secs(60) {
        return Some(format!("{:.2}s", duration.as_secs_f64()));
    }
    let secs = duration.as_secs();
    Some(format!("{}m {}s", secs / 60, secs % 60))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => {
                serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = Option::<i64>::deserialize(deserializer)?;
        Ok(nanos
            .filter(|n| *n > 0)
            .map(|n| Duration::from_nanos(n as u64)))
    }
}
