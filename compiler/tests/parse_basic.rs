//! Integration tests for the Parse phase: line grammar, ordering, subgraphs, classes.

mod helpers;

use helpers::*;
use ivr_compiler::parse::{self, DiagramGraph, Direction, ShapeKind, Stroke};
use pretty_assertions::assert_eq;

#[test]
fn parse_simple_callout() {
    let diagram = parse::parse(SIMPLE_CALLOUT);
    assert_eq!(diagram.direction, Some(Direction::TopDown));
    assert_eq!(
        node_ids(&diagram),
        vec!["start", "available", "input", "invalid", "accept", "decline", "done"]
    );
    assert_eq!(diagram.edges.len(), 8);
    assert_eq!(diagram.nodes["input"].shape, ShapeKind::Decision);
    assert_eq!(
        diagram.nodes["available"].text,
        r"Are you available?\nIf yes press 1, if no press 3"
    );
    assert_eq!(
        diagram.edges[2].label.as_deref(),
        Some(r"invalid input\nor no input")
    );
}

#[test]
fn text_is_independent_of_shape() {
    let shapes = [
        ("[", "]"),
        ("(", ")"),
        ("([", "])"),
        ("[[", "]]"),
        ("[(", ")]"),
        ("((", "))"),
        (">", "]"),
        ("{", "}"),
        ("{{", "}}"),
    ];
    let text = "Press 1 (or 2) & wait: [ok]?";
    for (open, close) in shapes {
        let diagram = parse::parse(&one_node("node_1", open, text, close));
        let node = &diagram.nodes["node_1"];
        assert_eq!(node.text, text, "shape {open}{close}");
    }
}

#[test]
fn every_shape_in_one_diagram() {
    let diagram = parse::parse(SHAPES_AND_STYLES);
    assert_eq!(diagram.direction, Some(Direction::LeftRight));
    let shapes: Vec<ShapeKind> = diagram.nodes.values().map(|n| n.shape).collect();
    assert_eq!(
        shapes,
        vec![
            ShapeKind::Rectangle,
            ShapeKind::Rounded,
            ShapeKind::Stadium,
            ShapeKind::Subroutine,
            ShapeKind::Cylinder,
            ShapeKind::Circle,
            ShapeKind::Asymmetric,
            ShapeKind::Decision,
            ShapeKind::Hexagon,
            ShapeKind::Rectangle,
        ]
    );
    assert_eq!(diagram.nodes["greet"].text, "Hello (caller)");
}

#[test]
fn subgraphs_and_classes() {
    let diagram = parse::parse(SHAPES_AND_STYLES);

    assert_eq!(diagram.subgraphs["intro"].title, "Introduction");
    assert_eq!(diagram.subgraphs["inner"].title, "Inner block");
    assert_eq!(diagram.subgraphs["inner"].parent.as_deref(), Some("intro"));
    assert_eq!(diagram.subgraphs["intro"].classes, vec!["loud".to_string()]);

    assert_eq!(diagram.nodes["greet"].subgraph.as_deref(), Some("intro"));
    assert_eq!(diagram.nodes["stadium"].subgraph.as_deref(), Some("inner"));
    assert_eq!(diagram.nodes["sub"].subgraph, None);

    // assigned before the nodes were declared
    assert_eq!(diagram.nodes["greet"].classes, vec!["loud".to_string()]);
    assert_eq!(diagram.nodes["outro"].classes, vec!["loud".to_string()]);
    assert_eq!(diagram.style_classes["loud"], "fill:#f96,stroke:#333");
}

#[test]
fn chains_groups_and_link_kinds() {
    let diagram = parse::parse(SHAPES_AND_STYLES);
    let pairs: Vec<(&str, &str)> = diagram
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("greet", "rounded"),
            ("rounded", "stadium"),
            ("stadium", "sub"),
            ("sub", "db"),
            ("sub", "circ"),
            ("ask", "flag"),
        ]
    );

    assert_eq!(diagram.edges[0].link.stroke, Stroke::Dotted);
    assert_eq!(diagram.edges[1].link.stroke, Stroke::Thick);
    assert!(!diagram.edges[2].link.head);
    assert_eq!(diagram.edges[3].label.as_deref(), Some("go on"));
    assert_eq!(diagram.edges[4].label.as_deref(), Some("go on"));
    assert_eq!(diagram.edges[5].label.as_deref(), Some("1 - one"));
    assert_eq!(diagram.edges[5].style.as_deref(), Some("linkStyle"));
}

#[test]
fn node_declaration_wins_over_edge_on_same_line() {
    let diagram = parse::parse("flowchart TD\n    a[\"A\"] --> b\n");
    assert_eq!(node_ids(&diagram), vec!["a"]);
    assert!(diagram.edges.is_empty());
}

#[test]
fn ampersand_groups_expand_to_every_pair() {
    let diagram = parse::parse(TRANSFER_FLOW);
    let into_end: Vec<&str> = diagram
        .edges
        .iter()
        .filter(|e| e.to == "end")
        .map(|e| e.from.as_str())
        .collect();
    assert_eq!(into_end, vec!["success", "fail"]);
    assert_eq!(diagram.nodes["end"].text, "End Call");
}

#[test]
fn parse_never_fails() {
    let inputs = [
        "",
        "end",
        "flowchart",
        "-->",
        "a -->",
        "a[\"unterminated",
        "a[\"\"]",
        "subgraph",
        "class a",
        "classDef x",
        "```mermaid",
    ];
    for input in inputs {
        let diagram = parse::parse(input);
        assert!(diagram.is_empty(), "input {input:?}");
    }
}

#[test]
fn graph_json_round_trip() {
    let diagram = parse::parse(SHAPES_AND_STYLES);
    let json = serde_json::to_string(&diagram).expect("Should serialize");
    let back: parse::FlowDiagram = serde_json::from_str(&json).expect("Should deserialize");
    assert_eq!(diagram, back);
}

#[test]
fn build_graph_from_simple_callout() {
    let (diagram, graph) = parse::parse_and_build(SIMPLE_CALLOUT);
    assert_eq!(graph.node_indices.len(), diagram.nodes.len());
    let targets: Vec<&str> = graph
        .outgoing_edges(&diagram, "input")
        .iter()
        .map(|e| e.to.as_str())
        .collect();
    assert_eq!(targets, vec!["invalid", "accept", "decline"]);
    assert_eq!(graph.reachable_from("start").len(), 7);
    assert!(diagram.dangling_references().is_empty());

    let dangling = parse::parse("a[\"A\"]\na --> ghost");
    let graph = DiagramGraph::build(&dangling);
    assert!(graph.graph[graph.node_indices["ghost"]].placeholder);
    assert_eq!(dangling.dangling_references(), vec!["ghost"]);
}
