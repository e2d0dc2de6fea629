use std::fmt;

/// Visual type of a node. Step kinds never produce `Start` or `Stop`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    Stop,
    Wasm,
    Native,
    Command,
    Task,
    Transform,
    Plugin,
    Other(String),
}

impl NodeKind {
    /// Maps an already normalized step kind to its visual type.
    pub fn from_normalized(kind: &str) -> Self {
        match kind {
            "wasm" => Self::Wasm,
            "native" => Self::Native,
            "command" => Self::Command,
            "task" => Self::Task,
            "transform" => Self::Transform,
            "plugin" => Self::Plugin,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Wasm => "wasm",
            Self::Native => "native",
            Self::Command => "command",
            Self::Task => "task",
            Self::Transform => "transform",
            Self::Plugin => "plugin",
            Self::Other(kind) => kind,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Start | Self::Stop)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Sequential,
    Parallel,
    Dependency,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Dependency => "dependency",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub level: usize,
    pub is_current: bool,
    pub version: Option<String>,
    pub request_keys: Vec<String>,
    pub response_keys: Vec<String>,
    pub duration: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            level: 0,
            is_current: false,
            version: None,
            request_keys: Vec::new(),
            response_keys: Vec::new(),
            duration: None,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub label: Option<String>,
}

impl Edge {
    pub fn sequential(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Sequential,
            label: None,
        }
    }
}

/// Node/edge arena. Edges refer to nodes by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub command_path: Vec<String>,
    pub command_args: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn max_level(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| !node.kind.is_terminal())
            .map(|node| node.level)
            .max()
            .unwrap_or(0)
    }
}
