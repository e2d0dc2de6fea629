use crate::bounds::{Bounds, CardBox, Canvas, compute_bounds, node_cards};
use crate::config::Config;
use crate::layout::{Layout, LayoutPath};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub path: LayoutPath,
    pub bounds: RectDump,
    pub canvas: CanvasDump,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub level: usize,
    pub current: bool,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub request_card: Option<RectDump>,
    pub response_card: Option<RectDump>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RectDump {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
pub struct CanvasDump {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl From<&Bounds> for RectDump {
    fn from(bounds: &Bounds) -> Self {
        Self {
            x: bounds.min_x,
            y: bounds.min_y,
            width: bounds.width(),
            height: bounds.height(),
        }
    }
}

impl From<CardBox> for RectDump {
    fn from(card: CardBox) -> Self {
        Self {
            x: card.x,
            y: card.y,
            width: card.width,
            height: card.height,
        }
    }
}

impl LayoutDump {
    /// Coordinates are in layout space; `canvas` carries the shift applied when drawing.
    pub fn from_layout(layout: &Layout, config: &Config) -> Self {
        let card = &config.layout.card;
        let bounds = compute_bounds(layout, card);
        let canvas = Canvas::from_bounds(&bounds, &config.render);

        let nodes = layout
            .nodes()
            .iter()
            .map(|node| {
                let cards = node_cards(node, card);
                NodeDump {
                    id: node.id.clone(),
                    kind: node.kind.as_str().to_string(),
                    label: node.label.clone(),
                    level: node.level,
                    current: node.is_current,
                    x: node.x,
                    y: node.y,
                    width: node.width,
                    height: node.height,
                    request_card: cards.map(|c| c.request.into()),
                    response_card: cards.and_then(|c| c.response).map(Into::into),
                }
            })
            .collect();

        let edges = layout
            .edges()
            .iter()
            .map(|edge| EdgeDump {
                from: edge.from.clone(),
                to: edge.to.clone(),
                kind: edge.kind.as_str(),
            })
            .collect();

        LayoutDump {
            path: layout.path(),
            bounds: (&bounds).into(),
            canvas: CanvasDump {
                width: canvas.width,
                height: canvas.height,
                offset_x: canvas.offset_x,
                offset_y: canvas.offset_y,
            },
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout, config: &Config) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, config);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
