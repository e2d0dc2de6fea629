use crate::i18n::Messages;
use crate::ir::{Edge, Graph, Node, NodeKind};
use crate::plan::{ExecutionPlan, PlanStep, format_duration};

pub const START_ID: &str = "start";
pub const STOP_ID: &str = "stop";

/// Lower-cases and trims a step kind, folding the scheduler phases onto `wasm`.
pub fn normalize_kind(kind: &str) -> String {
    let kind = kind.trim().to_lowercase();
    match kind.as_str() {
        "pre" | "stage" | "post" => "wasm".to_string(),
        "command" => "command".to_string(),
        _ => kind,
    }
}

/// Builds the node/edge graph for a plan. Returns `None` for a plan without steps.
pub fn build_graph(plan: &ExecutionPlan, messages: &Messages) -> Option<Graph> {
    if plan.is_empty() {
        tracing::debug!("plan has no steps, skipping graph");
        return None;
    }

    let mut graph = Graph {
        nodes: Vec::with_capacity(plan.steps.len() + 2),
        edges: Vec::with_capacity(plan.steps.len() + 1),
        command_path: plan.command_path.clone(),
        command_args: plan.command_args.clone(),
    };

    let current = plan.current_index();
    for (idx, step) in plan.steps.iter().enumerate() {
        let mut node = step_node(step, idx, messages);
        node.is_current = current == Some(idx);
        graph.nodes.push(node);
    }
    for pair in graph.nodes.windows(2) {
        graph.edges.push(Edge::sequential(&pair[0].id, &pair[1].id));
    }

    add_start_node(&mut graph, messages);
    add_stop_node(&mut graph, messages);

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        current = ?current,
        "built plan graph"
    );
    Some(graph)
}

fn step_node(step: &PlanStep, idx: usize, messages: &Messages) -> Node {
    let label = step
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| messages.step_label(idx));
    let mut node = Node::new(
        format!("node_{idx}"),
        label,
        NodeKind::from_normalized(&normalize_kind(&step.kind)),
    );
    node.version = step.version.clone().filter(|v| !v.is_empty());
    node.request_keys = step.request_keys.clone();
    node.response_keys = step.response_keys.clone();
    node.duration = step.duration.and_then(format_duration);
    node
}

fn add_start_node(graph: &mut Graph, messages: &Messages) {
    let Some(first_id) = graph.nodes.first().map(|node| node.id.clone()) else {
        return;
    };
    graph
        .nodes
        .insert(0, Node::new(START_ID, messages.start.clone(), NodeKind::Start));
    graph.edges.insert(0, Edge::sequential(START_ID, first_id));
}

fn add_stop_node(graph: &mut Graph, messages: &Messages) {
    let Some(last_id) = graph
        .nodes
        .iter()
        .rev()
        .find(|node| !node.kind.is_terminal())
        .map(|node| node.id.clone())
    else {
        return;
    };
    graph
        .nodes
        .push(Node::new(STOP_ID, messages.stop.clone(), NodeKind::Stop));
    graph.edges.push(Edge::sequential(last_id, STOP_ID));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::ir::EdgeKind;
    use std::time::Duration;

    fn plan_of(kinds: &[&str], current: i64) -> ExecutionPlan {
        ExecutionPlan {
            current,
            steps: kinds.iter().map(|kind| PlanStep::new(*kind)).collect(),
            ..Default::default()
        }
    }

    fn messages() -> &'static Messages {
        Messages::for_locale(Locale::En)
    }

    #[test]
    fn normalize_kind_folds_phases() {
        assert_eq!(normalize_kind("pre"), "wasm");
        assert_eq!(normalize_kind("  Stage "), "wasm");
        assert_eq!(normalize_kind("POST"), "wasm");
        assert_eq!(normalize_kind("Command"), "command");
        assert_eq!(normalize_kind("native"), "native");
        assert_eq!(normalize_kind("lambda"), "lambda");
    }

    #[test]
    fn builds_pre_command_post_plan() {
        let graph = build_graph(&plan_of(&["pre", "command", "post"], 1), messages()).unwrap();
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["start", "node_0", "node_1", "node_2", "stop"]);

        let current: Vec<&str> = graph
            .nodes
            .iter()
            .filter(|n| n.is_current)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(current, ["node_1"]);
        assert_eq!(graph.nodes[2].kind, NodeKind::Command);

        let edges: Vec<(&str, &str)> = graph
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(
            edges,
            [
                ("start", "node_0"),
                ("node_0", "node_1"),
                ("node_1", "node_2"),
                ("node_2", "stop"),
            ]
        );
        assert!(graph.edges.iter().all(|e| e.kind == EdgeKind::Sequential));
    }

    #[test]
    fn node_and_edge_counts_follow_step_count() {
        for n in 1..6 {
            let kinds = vec!["stage"; n];
            let graph = build_graph(&plan_of(&kinds, 0), messages()).unwrap();
            assert_eq!(graph.nodes.len(), n + 2);
            assert_eq!(graph.edges.len(), n + 1);
        }
    }

    #[test]
    fn empty_plan_has_no_graph() {
        assert!(build_graph(&plan_of(&[], 0), messages()).is_none());
    }

    #[test]
    fn out_of_range_current_flags_nothing() {
        for current in [-1, 3, 42] {
            let graph = build_graph(&plan_of(&["pre", "stage", "post"], current), messages()).unwrap();
            assert!(graph.nodes.iter().all(|n| !n.is_current));
        }
    }

    #[test]
    fn unnamed_steps_get_localized_labels() {
        let mut plan = plan_of(&["pre", "post"], 0);
        plan.steps[0].name = Some("auth".into());
        plan.steps[1].name = Some(String::new());
        let graph = build_graph(&plan, Messages::for_locale(Locale::Ru)).unwrap();
        assert_eq!(graph.nodes[1].label, "auth");
        assert_eq!(graph.nodes[2].label, "Шаг 2");
        assert_eq!(graph.nodes[0].label, "Старт");
    }

    #[test]
    fn copies_step_metadata() {
        let mut plan = plan_of(&["Custom"], 0);
        plan.steps[0].version = Some("2.0.1".into());
        plan.steps[0].request_keys = vec!["a".into(), "b".into()];
        plan.steps[0].response_keys = vec!["c".into()];
        plan.steps[0].duration = Some(Duration::from_millis(40));
        plan.command_path = vec!["tg".into()];
        let graph = build_graph(&plan, messages()).unwrap();
        let node = graph.node("node_0").unwrap();
        assert_eq!(node.kind, NodeKind::Other("custom".into()));
        assert_eq!(node.version.as_deref(), Some("2.0.1"));
        assert_eq!(node.request_keys.len(), 2);
        assert_eq!(node.response_keys, vec!["c"]);
        assert_eq!(node.duration.as_deref(), Some("40ms"));
        assert_eq!(graph.command_path, vec!["tg"]);
    }
}
