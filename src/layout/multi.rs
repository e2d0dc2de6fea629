use super::*;

// Nothing upstream emits levels yet; this path keeps grouped input renderable.
pub(super) fn layout_multi_level(graph: &mut Graph, config: &LayoutConfig) {
    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); graph.max_level() + 1];
    for (idx, node) in graph.nodes.iter().enumerate() {
        if !node.kind.is_terminal() {
            rows[node.level].push(idx);
        }
    }

    let mut y = config.origin_y;
    let mut first_row: Option<(f32, f32)> = None;
    let mut last_row: Option<(f32, f32)> = None;

    for row in rows.iter().filter(|row| !row.is_empty()) {
        let total_width = (row.len() - 1) as f32 * config.level_spacing_x;
        let mut x =
            config.origin_x + (config.row_span - total_width - config.origin_x * 2.0) / 2.0;
        first_row.get_or_insert((x, y));
        for &idx in row {
            place(&mut graph.nodes[idx], x, y, config.node_width, config.node_height);
            x += config.level_spacing_x;
        }
        last_row = Some((x - config.level_spacing_x + config.node_width, y));
        y += config.level_spacing_y;
    }

    let offset = terminal_offset(config);
    if let (Some((row_x, row_y)), Some(start)) =
        (first_row, find_kind(&mut graph.nodes, &NodeKind::Start))
    {
        let x = row_x - config.node_gap - config.terminal_size;
        place(start, x, row_y + offset, config.terminal_size, config.terminal_size);
    }
    if let (Some((row_right, row_y)), Some(stop)) =
        (last_row, find_kind(&mut graph.nodes, &NodeKind::Stop))
    {
        let x = row_right + config.node_gap;
        place(stop, x, row_y + offset, config.terminal_size, config.terminal_size);
    }
}
