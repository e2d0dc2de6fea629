use crate::ir::{EdgeKind, NodeKind};
use serde::{Deserialize, Serialize};

/// Vertical gradient plus border color used for one family of step nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePalette {
    pub top: String,
    pub bottom: String,
    pub stroke: String,
}

impl NodePalette {
    fn new(top: &str, bottom: &str, stroke: &str) -> Self {
        Self {
            top: top.to_string(),
            bottom: bottom.to_string(),
            stroke: stroke.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub caption_font_family: String,
    pub background: String,
    pub border: String,
    pub caption_color: String,
    pub label_color: String,
    pub version_color: String,
    pub duration_color: String,
    pub current_marker: String,
    pub shadow: String,
    pub arrow_color: String,
    pub sequential_edge: String,
    pub parallel_edge: String,
    pub dependency_edge: String,
    pub start_fill: String,
    pub start_stroke: String,
    pub start_text: String,
    pub stop_fill: String,
    pub stop_stroke: String,
    pub stop_text: String,
    pub request_fill: String,
    pub request_stroke: String,
    pub request_header: String,
    pub response_fill: String,
    pub response_stroke: String,
    pub response_header: String,
    pub key_text: String,
    pub empty_key_text: String,
    pub placeholder_top: String,
    pub placeholder_bottom: String,
    pub placeholder_flat: String,
    pub placeholder_text: String,
    pub wasm: NodePalette,
    pub native: NodePalette,
    pub command: NodePalette,
    pub task: NodePalette,
    pub transform: NodePalette,
    pub fallback: NodePalette,
}

/// Gradient ids emitted into `<defs>`, in declaration order.
pub const GRADIENT_IDS: [&str; 6] = [
    "wasmGrad",
    "nativeGrad",
    "commandGrad",
    "taskGrad",
    "transformGrad",
    "defaultGrad",
];

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
            caption_font_family: "monospace".to_string(),
            background: "#ffffff".to_string(),
            border: "#dee2e6".to_string(),
            caption_color: "#7f8c8d".to_string(),
            label_color: "#2c3e50".to_string(),
            version_color: "#6c757d".to_string(),
            duration_color: "#95a5a6".to_string(),
            current_marker: "#27ae60".to_string(),
            shadow: "rgba(0,0,0,0.1)".to_string(),
            arrow_color: "#90caf9".to_string(),
            sequential_edge: "#3498db".to_string(),
            parallel_edge: "#9b59b6".to_string(),
            dependency_edge: "#e74c3c".to_string(),
            start_fill: "#c8e6c9".to_string(),
            start_stroke: "#a5d6a7".to_string(),
            start_text: "#2e7d32".to_string(),
            stop_fill: "#fce4ec".to_string(),
            stop_stroke: "#f8bbd0".to_string(),
            stop_text: "#c2185b".to_string(),
            request_fill: "#e3f2fd".to_string(),
            request_stroke: "#90caf9".to_string(),
            request_header: "#1976d2".to_string(),
            response_fill: "#e8f5e9".to_string(),
            response_stroke: "#81c784".to_string(),
            response_header: "#2e7d32".to_string(),
            key_text: "#424242".to_string(),
            empty_key_text: "#757575".to_string(),
            placeholder_top: "#f8f9fa".to_string(),
            placeholder_bottom: "#e9ecef".to_string(),
            placeholder_flat: "#f8f9fa".to_string(),
            placeholder_text: "#6c757d".to_string(),
            wasm: NodePalette::new("#f3f7fc", "#e8f0f8", "#b3d9f2"),
            native: NodePalette::new("#f4f8f5", "#eaf2eb", "#b8e6c1"),
            command: NodePalette::new("#fef8f3", "#fdf1e6", "#ffd9b3"),
            task: NodePalette::new("#f9f5fa", "#f3ebf5", "#d4b3e3"),
            transform: NodePalette::new("#fdf5f8", "#faebf0", "#f5c2d6"),
            fallback: NodePalette::new("#fafafa", "#f5f5f5", "#d0d0d0"),
        }
    }

    /// Grayscale variant for printing; keeps the edge kinds distinguishable by shade.
    pub fn monochrome() -> Self {
        let gray = |top: &str, bottom: &str, stroke: &str| NodePalette::new(top, bottom, stroke);
        Self {
            caption_color: "#666666".to_string(),
            label_color: "#111111".to_string(),
            version_color: "#555555".to_string(),
            duration_color: "#777777".to_string(),
            current_marker: "#222222".to_string(),
            arrow_color: "#888888".to_string(),
            sequential_edge: "#444444".to_string(),
            parallel_edge: "#777777".to_string(),
            dependency_edge: "#000000".to_string(),
            start_fill: "#e0e0e0".to_string(),
            start_stroke: "#9e9e9e".to_string(),
            start_text: "#212121".to_string(),
            stop_fill: "#eeeeee".to_string(),
            stop_stroke: "#9e9e9e".to_string(),
            stop_text: "#212121".to_string(),
            request_fill: "#f5f5f5".to_string(),
            request_stroke: "#bdbdbd".to_string(),
            request_header: "#424242".to_string(),
            response_fill: "#eeeeee".to_string(),
            response_stroke: "#9e9e9e".to_string(),
            response_header: "#424242".to_string(),
            wasm: gray("#fafafa", "#eeeeee", "#9e9e9e"),
            native: gray("#f5f5f5", "#e0e0e0", "#9e9e9e"),
            command: gray("#eeeeee", "#d6d6d6", "#757575"),
            task: gray("#f5f5f5", "#e8e8e8", "#8a8a8a"),
            transform: gray("#fafafa", "#e6e6e6", "#8a8a8a"),
            fallback: gray("#ffffff", "#f5f5f5", "#bdbdbd"),
            ..Self::classic()
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" | "default" => Some(Self::classic()),
            "monochrome" | "mono" => Some(Self::monochrome()),
            _ => None,
        }
    }

    /// Gradient id and palette for a step node. `plugin` shares the wasm look.
    pub fn node_style(&self, kind: &NodeKind) -> (&'static str, &NodePalette) {
        match kind {
            NodeKind::Wasm | NodeKind::Plugin => (GRADIENT_IDS[0], &self.wasm),
            NodeKind::Native => (GRADIENT_IDS[1], &self.native),
            NodeKind::Command => (GRADIENT_IDS[2], &self.command),
            NodeKind::Task => (GRADIENT_IDS[3], &self.task),
            NodeKind::Transform => (GRADIENT_IDS[4], &self.transform),
            _ => (GRADIENT_IDS[5], &self.fallback),
        }
    }

    pub fn palettes(&self) -> [(&'static str, &NodePalette); 6] {
        [
            (GRADIENT_IDS[0], &self.wasm),
            (GRADIENT_IDS[1], &self.native),
            (GRADIENT_IDS[2], &self.command),
            (GRADIENT_IDS[3], &self.task),
            (GRADIENT_IDS[4], &self.transform),
            (GRADIENT_IDS[5], &self.fallback),
        ]
    }

    pub fn edge_color(&self, kind: EdgeKind) -> &str {
        match kind {
            EdgeKind::Sequential => &self.sequential_edge,
            EdgeKind::Parallel => &self.parallel_edge,
            EdgeKind::Dependency => &self.dependency_edge,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_shares_wasm_gradient() {
        let theme = Theme::classic();
        assert_eq!(theme.node_style(&NodeKind::Plugin).0, "wasmGrad");
        assert_eq!(theme.node_style(&NodeKind::Wasm).0, "wasmGrad");
    }

    #[test]
    fn unknown_kinds_fall_back_to_neutral() {
        let theme = Theme::classic();
        let (id, palette) = theme.node_style(&NodeKind::Other("lambda".into()));
        assert_eq!(id, "defaultGrad");
        assert_eq!(palette.stroke, "#d0d0d0");
    }

    #[test]
    fn edge_colors_follow_kind() {
        let theme = Theme::classic();
        assert_eq!(theme.edge_color(EdgeKind::Sequential), "#3498db");
        assert_eq!(theme.edge_color(EdgeKind::Parallel), "#9b59b6");
        assert_eq!(theme.edge_color(EdgeKind::Dependency), "#e74c3c");
    }

    #[test]
    fn theme_names_resolve() {
        assert!(Theme::from_name("Mono").is_some());
        assert!(Theme::from_name("neon").is_none());
    }
}
