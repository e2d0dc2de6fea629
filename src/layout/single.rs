use super::*;

/// One horizontal run: start marker, every step box, stop marker.
pub(super) fn layout_single_level(graph: &mut Graph, config: &LayoutConfig) {
    let terminal_y = config.origin_y + terminal_offset(config);
    let mut cursor_x = config.origin_x;

    if let Some(start) = find_kind(&mut graph.nodes, &NodeKind::Start) {
        place(start, cursor_x, terminal_y, config.terminal_size, config.terminal_size);
        cursor_x += start.width + config.node_gap;
    }

    for node in graph.nodes.iter_mut().filter(|n| !n.kind.is_terminal()) {
        place(node, cursor_x, config.origin_y, config.node_width, config.node_height);
        cursor_x += node.width + config.node_gap;
    }

    if let Some(stop) = find_kind(&mut graph.nodes, &NodeKind::Stop) {
        place(stop, cursor_x, terminal_y, config.terminal_size, config.terminal_size);
    }
}
