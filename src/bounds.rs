use crate::config::{CardConfig, RenderConfig};
use crate::ir::Node;
use crate::layout::Layout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Extent reported for a layout without nodes.
    pub const EMPTY: Bounds = Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 400.0,
        max_y: 150.0,
    };

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CardBox {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The "in" card (always present) and the "out" card (only with response keys).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeCards {
    pub request: CardBox,
    pub response: Option<CardBox>,
}

impl NodeCards {
    pub fn bottom(&self) -> f32 {
        self.response.unwrap_or(self.request).bottom()
    }
}

/// Number of key rows shown and whether a trailing `...` row follows them.
pub fn visible_key_rows(key_count: usize, card: &CardConfig) -> (usize, bool) {
    if key_count > card.max_keys {
        (card.max_keys, true)
    } else {
        (key_count, false)
    }
}

pub fn card_height(key_count: usize, card: &CardConfig) -> f32 {
    if key_count == 0 {
        return card.header_height + card.padding * 2.0 + card.empty_body_height;
    }
    let (shown, ellipsis) = visible_key_rows(key_count, card);
    let rows = shown + usize::from(ellipsis);
    card.header_height + card.padding + rows as f32 * card.line_height + card.padding
}

/// Card boxes stacked under a step node. Start/stop markers have none.
pub fn node_cards(node: &Node, card: &CardConfig) -> Option<NodeCards> {
    if node.kind.is_terminal() {
        return None;
    }
    let request = CardBox {
        x: node.x,
        y: node.y + node.height + card.spacing,
        width: node.width,
        height: card_height(node.request_keys.len(), card),
    };
    let response = (!node.response_keys.is_empty()).then(|| CardBox {
        x: node.x,
        y: request.bottom() + card.spacing,
        width: node.width,
        height: card_height(node.response_keys.len(), card),
    });
    Some(NodeCards { request, response })
}

pub fn compute_bounds(layout: &Layout, card: &CardConfig) -> Bounds {
    let Some(first) = layout.nodes().first() else {
        return Bounds::EMPTY;
    };

    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x + first.width,
        max_y: first.y + first.height,
    };
    for node in layout.nodes() {
        bounds.min_x = bounds.min_x.min(node.x);
        bounds.min_y = bounds.min_y.min(node.y);
        bounds.max_x = bounds.max_x.max(node.x + node.width);
        let bottom = node_cards(node, card)
            .map(|cards| cards.bottom())
            .unwrap_or(node.y + node.height);
        bounds.max_y = bounds.max_y.max(bottom);
    }
    bounds
}

/// Final document size and the translation applied to layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Canvas {
    pub fn from_bounds(bounds: &Bounds, render: &RenderConfig) -> Self {
        Self {
            width: bounds.width() + render.padding * 2.0,
            height: bounds.height() + render.padding * 2.0 + render.caption_height,
            offset_x: -bounds.min_x + render.padding,
            offset_y: -bounds.min_y + render.padding + render.caption_height,
        }
    }
}
