//! Integration tests for the TraceRenderer API

use trellis::{
    TraceRenderer, TrellisError,
    config::AppConfig,
    draw::Node,
    geometry::{CellCoord, Point},
    surface::SvgSurface,
    trace::{StateInstance, Trace, TraceError},
};

const RAFT_TRACE: &str = r#"{
    "loopback": 1,
    "states": [
        {
            "signatures": { "Server": ["Server0", "Server1"] },
            "fields": {
                "role": { "Server0": ["Follower"], "Server1": ["Follower"] },
                "votedFor": {}
            }
        },
        {
            "signatures": { "Server": ["Server0", "Server1"] },
            "fields": {
                "role": { "Server0": ["Leader"], "Server1": ["Follower"] },
                "votedFor": { "Server0": ["Server0"], "Server1": ["Server0"] }
            }
        }
    ]
}"#;

fn render_positions(trace: &Trace) -> Vec<(String, Point)> {
    let renderer = TraceRenderer::default();
    let stage = renderer.build_stage(trace).expect("Failed to build stage");

    let mut surface = SvgSurface::new();
    stage.render(&mut surface).expect("Failed to render stage");

    surface
        .commands()
        .iter()
        .map(|cmd| (cmd.content().to_string(), cmd.position()))
        .collect()
}

#[test]
fn test_render_raft_trace() {
    let renderer = TraceRenderer::new(AppConfig::default());
    let trace = renderer.parse(RAFT_TRACE).expect("Failed to parse trace");
    let svg = renderer.render_svg(&trace).expect("Failed to render trace");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("State:0"));
    assert!(svg.contains("State:1 (loopback)"));
    assert!(svg.contains("role:Leader"));
    assert!(svg.contains("voted:Server0"));
}

#[test]
fn test_text_positions() {
    let trace = Trace::from_json(RAFT_TRACE).unwrap();
    let positions = render_positions(&trace);

    // 2 labels + 2 states * 2 servers * 3 cells
    assert_eq!(positions.len(), 14);

    // Outer grid: origin (10,10), cells 400x300
    assert_eq!(positions[0], ("State:0".to_string(), Point::new(10.0, 10.0)));

    // Inner grid at outer (1,0): origin (10,10), cells 120x40
    assert_eq!(positions[1], ("Server0".to_string(), Point::new(420.0, 20.0)));
    assert_eq!(positions[2], ("role:Follower".to_string(), Point::new(540.0, 20.0)));
    assert_eq!(positions[3], ("voted:".to_string(), Point::new(660.0, 20.0)));
    assert_eq!(positions[4], ("Server1".to_string(), Point::new(420.0, 60.0)));

    // Second state row starts 300px lower
    assert_eq!(
        positions[7],
        ("State:1 (loopback)".to_string(), Point::new(10.0, 310.0))
    );
    assert_eq!(positions[9], ("role:Leader".to_string(), Point::new(540.0, 320.0)));
}

#[test]
fn test_render_is_idempotent() {
    let renderer = TraceRenderer::default();
    let trace = renderer.parse(RAFT_TRACE).unwrap();

    let first = renderer.render_svg(&trace).unwrap();
    let second = renderer.render_svg(&trace).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_stage_twice_on_same_surface() {
    let renderer = TraceRenderer::default();
    let trace = renderer.parse(RAFT_TRACE).unwrap();
    let stage = renderer.build_stage(&trace).unwrap();

    let mut surface = SvgSurface::new();
    stage.render(&mut surface).unwrap();
    let first = surface.to_svg_string();
    stage.render(&mut surface).unwrap();

    assert_eq!(surface.commands().len(), 14);
    assert_eq!(first, surface.to_svg_string());
}

#[test]
fn test_build_stage_structure() {
    let trace = Trace::from_json(RAFT_TRACE).unwrap();
    let stage = TraceRenderer::default().build_stage(&trace).unwrap();

    let root = stage.root().and_then(Node::as_grid).expect("root grid");
    assert_eq!(root.occupied(), 4);
    assert!(root.get(CellCoord::new(1, 1)).and_then(Node::as_grid).is_some());
}

#[test]
fn test_loopback_override() {
    let trace = Trace::from_json(RAFT_TRACE).unwrap().with_loopback(Some(0));
    let positions = render_positions(&trace);

    assert_eq!(positions[0].0, "State:0 (loopback)");
    assert_eq!(positions[7].0, "State:1");
}

#[test]
fn test_loopback_out_of_range() {
    let trace = Trace::from_json(RAFT_TRACE).unwrap().with_loopback(Some(5));
    let result = TraceRenderer::default().render_svg(&trace);
    assert!(matches!(
        result,
        Err(TrellisError::Trace(TraceError::LoopbackOutOfRange { .. }))
    ));
}

#[test]
fn test_empty_trace_returns_error() {
    let trace = Trace::new(Vec::new());
    let result = TraceRenderer::default().render_svg(&trace);
    assert!(matches!(result, Err(TrellisError::Trace(TraceError::Empty))));
}

#[test]
fn test_invalid_json_returns_error() {
    let result = TraceRenderer::default().parse("this is not a trace");
    assert!(matches!(result, Err(TrellisError::Trace(TraceError::Parse(_)))));
}

#[test]
fn test_missing_field_returns_error() {
    let trace = Trace::new(vec![
        StateInstance::new()
            .with_atoms("Server", ["Server0"])
            .with_tuples("role", "Server0", ["Leader"]),
    ]);
    let result = TraceRenderer::default().render_svg(&trace);
    assert!(matches!(
        result,
        Err(TrellisError::Trace(TraceError::UnknownField(field))) if field == "votedFor"
    ));
}

#[test]
fn test_renderer_reusability() {
    let renderer = TraceRenderer::default();

    let trace1 = renderer.parse(RAFT_TRACE).unwrap();
    let trace2 = Trace::new(vec![
        StateInstance::new()
            .with_atoms("Server", ["Solo"])
            .with_tuples("role", "Solo", ["Leader"])
            .with_tuples("votedFor", "Solo", ["Solo"]),
    ]);

    let svg1 = renderer.render_svg(&trace1).unwrap();
    let svg2 = renderer.render_svg(&trace2).unwrap();

    assert!(svg1.contains("Server1"));
    assert!(svg2.contains("voted:Solo"));
    assert!(!svg2.contains("Server1"));
}

fn renderer_with_style(style: serde_json::Value) -> TraceRenderer {
    let config: AppConfig = serde_json::from_value(serde_json::json!({ "style": style }))
        .expect("Failed to deserialize config");
    TraceRenderer::new(config)
}

#[test]
fn test_document_size_follows_extent() {
    let renderer = TraceRenderer::default();
    let trace = renderer.parse(RAFT_TRACE).unwrap();
    let svg = renderer.render_svg(&trace).unwrap();

    // Outer lattice ends at (10 + 2 * 400, 10 + 2 * 300), plus 10 on the right and bottom
    assert!(svg.contains("viewBox=\"0 0 820 620\""));
    assert!(svg.contains("width=\"820\""));
    assert!(svg.contains("height=\"620\""));
}

#[test]
fn test_configured_document_size() {
    let renderer = renderer_with_style(serde_json::json!({ "width": 1000.0, "height": 700.0 }));
    let trace = renderer.parse(RAFT_TRACE).unwrap();
    let svg = renderer.render_svg(&trace).unwrap();

    assert!(svg.contains("viewBox=\"0 0 1000 700\""));
}

#[test]
fn test_invalid_document_size_returns_error() {
    let renderer = renderer_with_style(serde_json::json!({ "width": 0.0 }));
    let trace = renderer.parse(RAFT_TRACE).unwrap();

    let result = renderer.render_svg(&trace);
    assert!(matches!(result, Err(TrellisError::Config(msg)) if msg.contains("width")));

    let renderer = renderer_with_style(serde_json::json!({ "height": -1.0 }));
    let result = renderer.render_svg(&trace);
    assert!(matches!(result, Err(TrellisError::Config(msg)) if msg.contains("height")));
}

#[test]
fn test_background_color() {
    let trace = Trace::from_json(RAFT_TRACE).unwrap();

    let svg = TraceRenderer::default().render_svg(&trace).unwrap();
    assert!(!svg.contains("data-layer=\"background\""));

    let renderer = renderer_with_style(serde_json::json!({ "background_color": "white" }));
    let svg = renderer.render_svg(&trace).unwrap();
    assert!(svg.contains("data-layer=\"background\""));
    assert!(svg.contains("fill=\"white\""));
}

#[test]
fn test_invalid_background_color_returns_error() {
    let renderer = renderer_with_style(serde_json::json!({ "background_color": "not-a-color" }));
    let trace = renderer.parse(RAFT_TRACE).unwrap();

    let result = renderer.render_svg(&trace);
    assert!(matches!(result, Err(TrellisError::Config(_))));
}
