use crate::bounds::{CardBox, Canvas, compute_bounds, node_cards, visible_key_rows};
use crate::config::{CardConfig, Config, RenderConfig};
use crate::i18n::Messages;
use crate::ir::{Edge, Node, NodeKind};
use crate::layout::Layout;
use crate::text::{ELLIPSIS, escape_xml, truncate_caption, truncate_key, wrap_label};
use crate::theme::Theme;
use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

const CAPTION_BASELINE: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const LABEL_LINE_HEIGHT: f32 = 18.0;
const VERSION_GAP: f32 = 24.0;
const CORNER_RADIUS: f32 = 8.0;
const CARD_RADIUS: f32 = 4.0;
const MARKER_INSET: f32 = 12.0;
const MARKER_RADIUS: f32 = 6.0;
const DURATION_INSET: f32 = 6.0;

/// Why the fixed-size placeholder was drawn instead of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// The caller had no plan, or the plan had no steps.
    PlanNotFound,
    /// A layout reached the renderer without any nodes.
    NoData,
}

struct TextStyle<'a> {
    fill: &'a str,
    size: f32,
    family: &'a str,
    anchor: Option<&'static str>,
    bold: bool,
    italic: bool,
}

impl<'a> TextStyle<'a> {
    fn new(fill: &'a str, size: f32, family: &'a str) -> Self {
        Self {
            fill,
            size,
            family,
            anchor: None,
            bold: false,
            italic: false,
        }
    }

    fn centered(mut self) -> Self {
        self.anchor = Some("middle");
        self
    }

    fn end(mut self) -> Self {
        self.anchor = Some("end");
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

fn push_text(svg: &mut String, x: f32, y: f32, style: &TextStyle<'_>, content: &str) {
    let _ = write!(svg, "<text x=\"{x:.2}\" y=\"{y:.2}\"");
    if let Some(anchor) = style.anchor {
        let _ = write!(svg, " text-anchor=\"{anchor}\"");
    }
    let _ = write!(
        svg,
        " fill=\"{}\" font-size=\"{}\" font-family=\"{}\"",
        style.fill,
        style.size,
        escape_xml(style.family)
    );
    if style.bold {
        svg.push_str(" font-weight=\"bold\"");
    }
    if style.italic {
        svg.push_str(" font-style=\"italic\"");
    }
    let _ = write!(svg, ">{}</text>", escape_xml(content));
}

fn open_svg(svg: &mut String, width: f32, height: f32) {
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
}

fn push_gradient(svg: &mut String, id: &str, top: &str, bottom: &str) {
    let _ = write!(
        svg,
        "<linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\"><stop offset=\"0%\" stop-color=\"{top}\"/><stop offset=\"100%\" stop-color=\"{bottom}\"/></linearGradient>"
    );
}

pub fn render_placeholder(
    reason: PlaceholderReason,
    theme: &Theme,
    render: &RenderConfig,
    messages: &Messages,
) -> String {
    let width = render.placeholder_width;
    let height = render.placeholder_height;
    let mut svg = String::new();
    open_svg(&mut svg, width, height);

    let (fill, caption, size) = match reason {
        PlaceholderReason::PlanNotFound => {
            svg.push_str("<defs>");
            push_gradient(&mut svg, "bgGrad", &theme.placeholder_top, &theme.placeholder_bottom);
            svg.push_str("</defs>");
            ("url(#bgGrad)".to_string(), messages.plan_not_found.as_str(), 16.0)
        }
        PlaceholderReason::NoData => (theme.placeholder_flat.clone(), messages.no_data.as_str(), 14.0),
    };
    let _ = write!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"2\"/>",
        theme.border
    );
    let style = TextStyle::new(&theme.placeholder_text, size, &theme.font_family).centered();
    push_text(&mut svg, width / 2.0, height / 2.0, &style, caption);
    svg.push_str("</svg>");
    svg
}

/// Renders a laid-out graph; an empty layout yields the "no data" placeholder.
pub fn render_layout_svg(layout: &Layout, config: &Config) -> String {
    let theme = &config.theme;
    let messages = Messages::for_locale(config.locale);
    if layout.is_empty() {
        return render_placeholder(PlaceholderReason::NoData, theme, &config.render, messages);
    }

    let card = &config.layout.card;
    let bounds = compute_bounds(layout, card);
    let canvas = Canvas::from_bounds(&bounds, &config.render);
    tracing::debug!(width = canvas.width, height = canvas.height, "rendering plan diagram");

    let mut svg = String::new();
    open_svg(&mut svg, canvas.width, canvas.height);
    push_defs(&mut svg, theme);
    let _ = write!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
        canvas.width, canvas.height, theme.background, theme.border
    );
    push_command_caption(&mut svg, layout, &canvas, theme, &config.render);

    for node in layout.nodes() {
        let placed = translated(node, &canvas);
        if node.kind.is_terminal() {
            push_terminal(&mut svg, &placed, theme);
        } else {
            push_step(&mut svg, &placed, theme, &config.render, card, messages);
        }
    }

    for edge in layout.edges() {
        push_edge(&mut svg, layout, edge, &canvas, theme);
    }

    svg.push_str("</svg>");
    svg
}

fn translated(node: &Node, canvas: &Canvas) -> Node {
    let mut placed = node.clone();
    placed.x += canvas.offset_x;
    placed.y += canvas.offset_y;
    placed
}

fn push_defs(svg: &mut String, theme: &Theme) {
    svg.push_str("<defs>");
    let _ = write!(
        svg,
        "<marker id=\"arrowhead\" markerWidth=\"8\" markerHeight=\"8\" refX=\"7\" refY=\"2.5\" orient=\"auto\" viewBox=\"0 0 8 8\"><polygon points=\"0,0 8,2.5 0,5\" fill=\"{0}\" stroke=\"{0}\" stroke-width=\"0.5\"/></marker>",
        theme.arrow_color
    );
    for (id, palette) in theme.palettes() {
        push_gradient(svg, id, &palette.top, &palette.bottom);
    }
    svg.push_str("</defs>");
}

fn push_command_caption(
    svg: &mut String,
    layout: &Layout,
    canvas: &Canvas,
    theme: &Theme,
    render: &RenderConfig,
) {
    let graph = layout.graph();
    if graph.command_path.is_empty() && graph.command_args.is_empty() {
        return;
    }
    let command = graph
        .command_path
        .iter()
        .chain(graph.command_args.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let caption = truncate_caption(&command, render.caption_max_chars);
    let style = TextStyle::new(&theme.caption_color, 10.0, &theme.caption_font_family)
        .centered()
        .italic();
    push_text(svg, canvas.width / 2.0, CAPTION_BASELINE, &style, &caption);
}

fn push_terminal(svg: &mut String, node: &Node, theme: &Theme) {
    let (cx, cy) = node.center();
    let radius = node.width / 2.0;
    let (fill, stroke, text) = if node.kind == NodeKind::Start {
        (&theme.start_fill, &theme.start_stroke, &theme.start_text)
    } else {
        (&theme.stop_fill, &theme.stop_stroke, &theme.stop_text)
    };
    let _ = write!(
        svg,
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"{}\"/>",
        cx + 1.0,
        cy + 1.0,
        theme.shadow
    );
    let _ = write!(
        svg,
        "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>"
    );
    let style = TextStyle::new(text, 10.0, &theme.font_family).centered().bold();
    push_text(svg, cx, cy + 4.0, &style, &node.label);
}

fn push_step(
    svg: &mut String,
    node: &Node,
    theme: &Theme,
    render: &RenderConfig,
    card: &CardConfig,
    messages: &Messages,
) {
    let (gradient, palette) = theme.node_style(&node.kind);
    let stroke_width = if node.is_current { 1.5 } else { 1.0 };
    let _ = write!(
        svg,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"{}\"/>",
        node.x + 2.0,
        node.y + 2.0,
        node.width,
        node.height,
        theme.shadow
    );
    let _ = write!(
        svg,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"url(#{gradient})\" stroke=\"{}\" stroke-width=\"{stroke_width:.1}\"/>",
        node.x, node.y, node.width, node.height, palette.stroke
    );

    let center_x = node.x + node.width / 2.0;
    let mut label_y = node.y + node.height / 2.0;
    if node.version.is_some() {
        label_y -= 10.0;
    }

    let label_style = TextStyle::new(&theme.label_color, LABEL_FONT_SIZE, &theme.font_family)
        .centered()
        .bold();
    let lines = wrap_label(&node.label, render.label_wrap_chars, render.label_max_lines);
    if lines.len() > 1 {
        let first_y = label_y - (lines.len() - 1) as f32 * LABEL_LINE_HEIGHT / 2.0;
        for (idx, line) in lines.iter().enumerate() {
            push_text(svg, center_x, first_y + idx as f32 * LABEL_LINE_HEIGHT, &label_style, line);
        }
    } else {
        push_text(svg, center_x, label_y + 4.0, &label_style, &node.label);
    }

    if let Some(version) = &node.version {
        let style = TextStyle::new(&theme.version_color, 9.0, &theme.font_family).centered();
        push_text(svg, center_x, label_y + VERSION_GAP, &style, &format!("v{version}"));
    }

    if let Some(cards) = node_cards(node, card) {
        push_card(
            svg,
            &cards.request,
            "in",
            &node.request_keys,
            (
                theme.request_fill.as_str(),
                theme.request_stroke.as_str(),
                theme.request_header.as_str(),
            ),
            theme,
            card,
            Some(messages.no_keys.as_str()),
        );
        if let Some(response) = &cards.response {
            push_card(
                svg,
                response,
                "out",
                &node.response_keys,
                (
                    theme.response_fill.as_str(),
                    theme.response_stroke.as_str(),
                    theme.response_header.as_str(),
                ),
                theme,
                card,
                None,
            );
        }
    }

    if node.is_current {
        let _ = write!(
            svg,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{MARKER_RADIUS}\" fill=\"{}\"/>",
            node.x + node.width - MARKER_INSET,
            node.y + MARKER_INSET,
            theme.current_marker
        );
    }

    if let Some(duration) = &node.duration {
        let style = TextStyle::new(&theme.duration_color, 8.0, &theme.font_family).end();
        push_text(
            svg,
            node.x + node.width - DURATION_INSET,
            node.y + node.height - DURATION_INSET,
            &style,
            duration,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn push_card(
    svg: &mut String,
    card_box: &CardBox,
    header: &str,
    keys: &[String],
    (fill, stroke, header_color): (&str, &str, &str),
    theme: &Theme,
    card: &CardConfig,
    empty_caption: Option<&str>,
) {
    let _ = write!(
        svg,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{CARD_RADIUS}\" ry=\"{CARD_RADIUS}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1\"/>",
        card_box.x, card_box.y, card_box.width, card_box.height
    );
    let header_style = TextStyle::new(header_color, 9.0, &theme.font_family)
        .centered()
        .bold();
    push_text(
        svg,
        card_box.x + card_box.width / 2.0,
        card_box.y + card.header_height - 2.0,
        &header_style,
        header,
    );

    let text_x = card_box.x + card.padding;
    let text_top = card_box.y + card.header_height + card.padding;
    if keys.is_empty() {
        if let Some(caption) = empty_caption {
            let style = TextStyle::new(&theme.empty_key_text, 8.0, &theme.font_family).italic();
            push_text(svg, text_x, text_top + 10.0, &style, caption);
        }
        return;
    }

    let key_style = TextStyle::new(&theme.key_text, 8.0, &theme.font_family);
    let (shown, ellipsis) = visible_key_rows(keys.len(), card);
    for (idx, key) in keys.iter().take(shown).enumerate() {
        let y = text_top + (idx + 1) as f32 * card.line_height;
        let display = truncate_key(key, card.key_max_chars, card.key_keep_chars);
        push_text(svg, text_x, y, &key_style, &display);
    }
    if ellipsis {
        let y = text_top + (shown + 1) as f32 * card.line_height;
        push_text(svg, text_x, y, &key_style, ELLIPSIS);
    }
}

fn push_edge(svg: &mut String, layout: &Layout, edge: &Edge, canvas: &Canvas, theme: &Theme) {
    let (Some(from), Some(to)) = (layout.node(&edge.from), layout.node(&edge.to)) else {
        tracing::warn!(from = %edge.from, to = %edge.to, "edge references a missing node");
        return;
    };
    let ((x1, y1), (x2, y2)) = clip_edge(from, to);
    let _ = write!(
        svg,
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1.5\" marker-end=\"url(#arrowhead)\" opacity=\"0.7\"/>",
        x1 + canvas.offset_x,
        y1 + canvas.offset_y,
        x2 + canvas.offset_x,
        y2 + canvas.offset_y,
        theme.edge_color(edge.kind)
    );
}

/// Center-to-center segment pulled in along its direction by each node's half extents.
pub fn clip_edge(from: &Node, to: &Node) -> ((f32, f32), (f32, f32)) {
    let (mut x1, mut y1) = from.center();
    let (mut x2, mut y2) = to.center();
    let dx = x2 - x1;
    let dy = y2 - y1;
    let length = (dx * dx + dy * dy).sqrt();
    if length > 0.0 {
        let ux = dx / length;
        let uy = dy / length;
        x1 += ux * (from.width / 2.0);
        y1 += uy * (from.height / 2.0);
        x2 -= ux * (to.width / 2.0);
        y2 -= uy * (to.height / 2.0);
    }
    ((x1, y1), (x2, y2))
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Arial".to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.png_scale.max(0.1);
    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or_else(|| anyhow::anyhow!("Invalid raster size"))?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::i18n::Locale;
    use crate::ir::Graph;
    use crate::layout::compute_layout;
    use crate::plan::{ExecutionPlan, PlanStep};

    fn render(plan: &ExecutionPlan) -> String {
        let config = Config::default();
        let graph = build_graph(plan, Messages::for_locale(config.locale)).unwrap();
        let layout = compute_layout(graph, &config.layout);
        render_layout_svg(&layout, &config)
    }

    fn single_step(step: PlanStep) -> ExecutionPlan {
        ExecutionPlan {
            steps: vec![step],
            ..Default::default()
        }
    }

    fn text_count(svg: &str, content: &str) -> usize {
        svg.matches(&format!(">{content}</text>")).count()
    }

    #[test]
    fn placeholder_plan_not_found() {
        let config = Config::default();
        let svg = render_placeholder(
            PlaceholderReason::PlanNotFound,
            &config.theme,
            &config.render,
            Messages::for_locale(Locale::En),
        );
        assert!(svg.contains("width=\"400\" height=\"150\""));
        assert!(svg.contains(">Plan not found</text>"));
        assert!(svg.contains("url(#bgGrad)"));
    }

    #[test]
    fn empty_layout_renders_no_data_placeholder() {
        let config = Config::default();
        let layout = compute_layout(Graph::new(), &config.layout);
        let svg = render_layout_svg(&layout, &config);
        assert!(svg.contains(">No data to visualize</text>"));
        assert!(svg.contains("width=\"400\" height=\"150\""));
        assert!(!svg.contains("arrowhead"));
    }

    #[test]
    fn canvas_size_matches_bounds() {
        let plan = ExecutionPlan {
            steps: vec![PlanStep::new("pre"), PlanStep::new("command"), PlanStep::new("post")],
            ..Default::default()
        };
        let svg = render(&plan);
        // start at 100, three boxes, stop ends at 870; cards bottom at 100+80+8+46
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"870\" height=\"264\""
        ));
    }

    #[test]
    fn renders_caption_from_command_path_and_args() {
        let plan = ExecutionPlan {
            steps: vec![PlanStep::new("command")],
            command_path: vec!["tg".into(), "build".into()],
            command_args: vec!["--fast".into()],
            ..Default::default()
        };
        let svg = render(&plan);
        assert!(svg.contains(">tg build --fast</text>"));
    }

    #[test]
    fn long_caption_is_truncated() {
        let plan = ExecutionPlan {
            steps: vec![PlanStep::new("command")],
            command_args: vec!["a".repeat(100)],
            ..Default::default()
        };
        let svg = render(&plan);
        let expected = format!(">{}...</text>", "a".repeat(77));
        assert!(svg.contains(&expected));
    }

    #[test]
    fn long_request_key_is_truncated() {
        let mut step = PlanStep::new("stage");
        step.request_keys = vec!["abcdefghijklmnopqrst".into()];
        let svg = render(&single_step(step));
        assert_eq!(text_count(&svg, "abcdefghijkl..."), 1);
        assert!(!svg.contains("abcdefghijklm"));
    }

    #[test]
    fn seven_keys_render_five_and_one_ellipsis() {
        let mut step = PlanStep::new("stage");
        step.request_keys = (1..=7).map(|i| format!("key{i}")).collect();
        let svg = render(&single_step(step));
        for i in 1..=5 {
            assert_eq!(text_count(&svg, &format!("key{i}")), 1);
        }
        assert_eq!(text_count(&svg, "key6"), 0);
        assert_eq!(text_count(&svg, "key7"), 0);
        assert_eq!(text_count(&svg, "..."), 1);
    }

    #[test]
    fn long_label_wraps_to_two_lines() {
        let step = PlanStep::new("stage").named("Validate incoming request payload and headers");
        let svg = render(&single_step(step));
        assert_eq!(text_count(&svg, "Validate incoming"), 1);
        assert_eq!(text_count(&svg, "request payload and"), 1);
        assert!(!svg.contains("headers"));
    }

    #[test]
    fn empty_request_card_shows_no_keys_line() {
        let svg = render(&single_step(PlanStep::new("stage")));
        assert_eq!(text_count(&svg, "(no keys)"), 1);
        assert_eq!(text_count(&svg, "in"), 1);
        assert_eq!(text_count(&svg, "out"), 0);
    }

    #[test]
    fn response_card_rendered_when_keys_exist() {
        let mut step = PlanStep::new("stage");
        step.response_keys = vec!["result".into()];
        let svg = render(&single_step(step));
        assert_eq!(text_count(&svg, "out"), 1);
        assert_eq!(text_count(&svg, "result"), 1);
    }

    #[test]
    fn current_node_gets_marker_and_thicker_stroke() {
        let plan = ExecutionPlan {
            current: 0,
            steps: vec![PlanStep::new("task"), PlanStep::new("task")],
            ..Default::default()
        };
        let svg = render(&plan);
        assert_eq!(svg.matches("stroke-width=\"1.5\"/>").count(), 2 + 1);
        assert_eq!(svg.matches("r=\"6\" fill=\"#27ae60\"").count(), 1);
    }

    #[test]
    fn gradients_follow_node_kind() {
        let plan = ExecutionPlan {
            steps: vec![
                PlanStep::new("pre"),
                PlanStep::new("native"),
                PlanStep::new("command"),
                PlanStep::new("transform"),
                PlanStep::new("mystery"),
            ],
            ..Default::default()
        };
        let svg = render(&plan);
        for id in ["wasmGrad", "nativeGrad", "commandGrad", "transformGrad", "defaultGrad"] {
            assert!(svg.contains(&format!("fill=\"url(#{id})\"")), "missing {id}");
        }
        assert!(!svg.contains("fill=\"url(#taskGrad)\""));
    }

    #[test]
    fn version_and_duration_are_drawn() {
        let mut step = PlanStep::new("stage");
        step.version = Some("1.4.2".into());
        step.duration = Some(std::time::Duration::from_millis(320));
        let svg = render(&single_step(step));
        assert_eq!(text_count(&svg, "v1.4.2"), 1);
        assert_eq!(text_count(&svg, "320ms"), 1);
    }

    #[test]
    fn labels_are_escaped() {
        let step = PlanStep::new("stage").named("a<b>&c");
        let svg = render(&single_step(step));
        assert!(svg.contains(">a&lt;b&gt;&amp;c</text>"));
    }

    #[test]
    fn one_line_per_edge() {
        let plan = ExecutionPlan {
            steps: vec![PlanStep::new("pre"), PlanStep::new("post")],
            ..Default::default()
        };
        let svg = render(&plan);
        assert_eq!(svg.matches("<line ").count(), 3);
        assert_eq!(svg.matches("marker-end=\"url(#arrowhead)\"").count(), 3);
    }

    #[test]
    fn clip_edge_stops_at_node_borders() {
        let mut a = Node::new("a", "A", NodeKind::Wasm);
        let mut b = Node::new("b", "B", NodeKind::Wasm);
        (a.x, a.y, a.width, a.height) = (100.0, 100.0, 150.0, 80.0);
        (b.x, b.y, b.width, b.height) = (300.0, 100.0, 150.0, 80.0);
        let ((x1, y1), (x2, y2)) = clip_edge(&a, &b);
        assert_eq!((x1, y1), (250.0, 140.0));
        assert_eq!((x2, y2), (300.0, 140.0));
    }

    #[test]
    fn missing_edge_endpoints_are_skipped() {
        let mut graph = Graph::new();
        graph.nodes.push(Node::new("a", "A", NodeKind::Wasm));
        graph.edges.push(Edge::sequential("a", "ghost"));
        let config = Config::default();
        let layout = compute_layout(graph, &config.layout);
        let svg = render_layout_svg(&layout, &config);
        assert_eq!(svg.matches("<line ").count(), 0);
    }
}
