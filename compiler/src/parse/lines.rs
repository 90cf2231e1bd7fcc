//! Line grammar for the supported flowchart subset.
//!
//! Each trimmed diagram line is classified into exactly one [`Line`], trying the
//! statement kinds in priority order. Trailing content after a node declaration
//! is ignored; anything that matches no statement yields `None`.

use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, eof, opt, separated};
use winnow::prelude::*;
use winnow::token::{literal, rest, take_until, take_while};

use super::shape::{SHAPES, ShapeDelimiters, ShapeKind};
use super::types::{Direction, LinkKind, Stroke};

#[derive(Debug, Clone, PartialEq)]
pub enum Line<'s> {
    Header(Direction),
    SubgraphOpen { id: &'s str, title: Option<&'s str> },
    SubgraphClose,
    /// `style` never ends in `;`: the statement terminator is dropped by
    /// `parse` before classification, on every line kind.
    ClassDef { name: &'s str, style: &'s str },
    ClassAssign { targets: Vec<&'s str>, class: &'s str },
    Node { id: &'s str, shape: ShapeKind, text: &'s str },
    Edges(Vec<EdgeDecl<'s>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDecl<'s> {
    pub from: &'s str,
    pub to: &'s str,
    pub label: Option<&'s str>,
    pub style: Option<&'s str>,
    pub link: LinkKind,
}

/// Classify one trimmed, non-comment line.
pub fn classify(line: &str) -> Option<Line<'_>> {
    let mut input = line;
    alt((
        header,
        subgraph_open,
        subgraph_close,
        class_def,
        class_assign,
        node_decl,
        edge_statement,
    ))
    .parse_next(&mut input)
    .ok()
}

/// Strip surrounding whitespace and one pair of enclosing double quotes.
pub fn unquote(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    if inner.is_empty() { None } else { Some(inner) }
}

fn identifier<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

// =============================================================================
// HEADER / SUBGRAPHS / CLASSES
// =============================================================================

fn header<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    alt(("flowchart", "graph")).parse_next(input)?;
    space1.parse_next(input)?;
    let direction = direction.parse_next(input)?;
    Ok(Line::Header(direction))
}

fn direction(input: &mut &str) -> winnow::Result<Direction> {
    alt((
        "TD".value(Direction::TopDown),
        "TB".value(Direction::TopDown),
        "BT".value(Direction::BottomUp),
        "LR".value(Direction::LeftRight),
        "RL".value(Direction::RightLeft),
    ))
    .parse_next(input)
}

fn subgraph_open<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    "subgraph".parse_next(input)?;
    space1.parse_next(input)?;
    let id = identifier.parse_next(input)?;
    space0.parse_next(input)?;
    let title = opt(bracket_title).parse_next(input)?.flatten();
    Ok(Line::SubgraphOpen { id, title })
}

fn bracket_title<'s>(input: &mut &'s str) -> winnow::Result<Option<&'s str>> {
    "[".parse_next(input)?;
    let text = take_while(1.., |c: char| c != ']').parse_next(input)?;
    "]".parse_next(input)?;
    Ok(unquote(text))
}

fn subgraph_close<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    ("end", space0, eof).parse_next(input)?;
    Ok(Line::SubgraphClose)
}

fn class_def<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    "classDef".parse_next(input)?;
    space1.parse_next(input)?;
    let name = identifier.parse_next(input)?;
    space1.parse_next(input)?;
    let style = rest.parse_next(input)?.trim();
    if style.is_empty() {
        return Err(winnow::error::ParserError::from_input(input));
    }
    Ok(Line::ClassDef { name, style })
}

fn class_assign<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    "class".parse_next(input)?;
    space1.parse_next(input)?;
    let targets: Vec<&str> = separated(1.., identifier, (space0, ",", space0)).parse_next(input)?;
    space1.parse_next(input)?;
    let class = identifier.parse_next(input)?;
    (space0, eof).parse_next(input)?;
    Ok(Line::ClassAssign { targets, class })
}

// =============================================================================
// NODE DECLARATIONS
// =============================================================================

fn node_decl<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    let id = identifier.parse_next(input)?;
    space0.parse_next(input)?;
    for row in SHAPES {
        let checkpoint = *input;
        match shape_body(row, input) {
            Ok(text) => {
                return Ok(Line::Node {
                    id,
                    shape: row.kind,
                    text,
                });
            }
            Err(_) => *input = checkpoint,
        }
    }
    Err(winnow::error::ParserError::from_input(input))
}

fn shape_body<'s>(row: &ShapeDelimiters, input: &mut &'s str) -> winnow::Result<&'s str> {
    literal(row.open).parse_next(input)?;
    "\"".parse_next(input)?;
    let text = take_while(1.., |c: char| c != '"').parse_next(input)?;
    "\"".parse_next(input)?;
    literal(row.close).parse_next(input)?;
    Ok(text)
}

// =============================================================================
// EDGES
// =============================================================================

fn edge_statement<'s>(input: &mut &'s str) -> winnow::Result<Line<'s>> {
    let mut sources = endpoints.parse_next(input)?;
    let (link, label, targets) = segment.parse_next(input)?;

    let mut edges = Vec::new();
    let mut last_segment = 0;
    push_segment(&mut edges, &sources, &targets, link, label);
    sources = targets;

    while let Some((link, label, targets)) = opt(segment).parse_next(input)? {
        last_segment = edges.len();
        push_segment(&mut edges, &sources, &targets, link, label);
        sources = targets;
    }

    let trailing = rest.parse_next(input)?.trim();
    if !trailing.is_empty() {
        for edge in &mut edges[last_segment..] {
            edge.style = Some(trailing);
        }
    }

    Ok(Line::Edges(edges))
}

fn push_segment<'s>(
    edges: &mut Vec<EdgeDecl<'s>>,
    sources: &[&'s str],
    targets: &[&'s str],
    link: LinkKind,
    label: Option<&'s str>,
) {
    for &from in sources {
        for &to in targets {
            edges.push(EdgeDecl {
                from,
                to,
                label,
                style: None,
                link,
            });
        }
    }
}

/// `a & b`: one or more identifiers joined by `&`.
fn endpoints<'s>(input: &mut &'s str) -> winnow::Result<Vec<&'s str>> {
    separated(1.., identifier, (space0, "&", space0)).parse_next(input)
}

type Segment<'s> = (LinkKind, Option<&'s str>, Vec<&'s str>);

fn segment<'s>(input: &mut &'s str) -> winnow::Result<Segment<'s>> {
    space0.parse_next(input)?;
    let (link, label) = alt((piped_link, text_link)).parse_next(input)?;
    space0.parse_next(input)?;
    let targets = endpoints.parse_next(input)?;
    Ok((link, label, targets))
}

/// `-->`, optionally followed by `|label|`.
fn piped_link<'s>(input: &mut &'s str) -> winnow::Result<(LinkKind, Option<&'s str>)> {
    let link = arrow.parse_next(input)?;
    let label = opt((space0, pipe_label).map(|(_, l)| l))
        .parse_next(input)?
        .flatten();
    Ok((link, label))
}

fn pipe_label<'s>(input: &mut &'s str) -> winnow::Result<Option<&'s str>> {
    "|".parse_next(input)?;
    let text = take_while(0.., |c: char| c != '|').parse_next(input)?;
    "|".parse_next(input)?;
    Ok(unquote(text))
}

/// `-- label -->` / `== label ==>`.
fn text_link<'s>(input: &mut &'s str) -> winnow::Result<(LinkKind, Option<&'s str>)> {
    let opener = alt(("--", "==")).parse_next(input)?;
    space1.parse_next(input)?;
    let text = take_until(1.., opener).parse_next(input)?;
    let link = arrow.parse_next(input)?;
    Ok((link, unquote(text)))
}

/// A run of `-`, `.` or `=` with an optional `>` head. Headless links need at
/// least three characters so that `--` stays free for the text form.
fn arrow(input: &mut &str) -> winnow::Result<LinkKind> {
    let checkpoint = *input;
    let body = take_while(2.., |c: char| c == '-' || c == '.' || c == '=').parse_next(input)?;
    let head = opt(">").parse_next(input)?.is_some();

    let starts_ok = body.starts_with('-') || body.starts_with('=');
    let uniform = !body.contains('=') || body.chars().all(|c| c == '=');
    if !(starts_ok && uniform && (head || body.len() >= 3)) {
        *input = checkpoint;
        return Err(winnow::error::ParserError::from_input(input));
    }

    let stroke = if body.contains('=') {
        Stroke::Thick
    } else if body.contains('.') {
        Stroke::Dotted
    } else {
        Stroke::Solid
    };
    Ok(LinkKind { stroke, head })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edges(line: &str) -> Vec<EdgeDecl<'_>> {
        match classify(line) {
            Some(Line::Edges(edges)) => edges,
            other => panic!("expected edges for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn header_direction() {
        assert_eq!(classify("flowchart TD"), Some(Line::Header(Direction::TopDown)));
        assert_eq!(classify("graph LR"), Some(Line::Header(Direction::LeftRight)));
    }

    #[test]
    fn every_shape_declaration() {
        let cases = [
            (r#"a["text"]"#, ShapeKind::Rectangle),
            (r#"a("text")"#, ShapeKind::Rounded),
            (r#"a(["text"])"#, ShapeKind::Stadium),
            (r#"a[["text"]]"#, ShapeKind::Subroutine),
            (r#"a[("text")]"#, ShapeKind::Cylinder),
            (r#"a(("text"))"#, ShapeKind::Circle),
            (r#"a>"text"]"#, ShapeKind::Asymmetric),
            (r#"a{"text"}"#, ShapeKind::Decision),
            (r#"a{{"text"}}"#, ShapeKind::Hexagon),
        ];
        for (line, shape) in cases {
            assert_eq!(
                classify(line),
                Some(Line::Node {
                    id: "a",
                    shape,
                    text: "text"
                }),
                "line {line}"
            );
        }
    }

    #[test]
    fn node_text_kept_verbatim() {
        let line = r#"available ["Are you available?\nIf yes press 1"] %% note"#;
        assert_eq!(
            classify(line),
            Some(Line::Node {
                id: "available",
                shape: ShapeKind::Rectangle,
                text: r"Are you available?\nIf yes press 1",
            })
        );
    }

    #[test]
    fn unquoted_or_unbalanced_node_is_not_a_node() {
        assert_eq!(classify("a[text]"), None);
        assert_eq!(classify(r#"a["text]"#), None);
        assert_eq!(classify(r#"a[""]"#), None);
    }

    #[test]
    fn subgraph_with_and_without_title() {
        assert_eq!(
            classify("subgraph menu"),
            Some(Line::SubgraphOpen { id: "menu", title: None })
        );
        assert_eq!(
            classify(r#"subgraph menu ["Main Menu"]"#),
            Some(Line::SubgraphOpen {
                id: "menu",
                title: Some("Main Menu")
            })
        );
        assert_eq!(classify("end"), Some(Line::SubgraphClose));
    }

    #[test]
    fn class_statements() {
        assert_eq!(
            classify("classDef warn fill:#f96,stroke:#333"),
            Some(Line::ClassDef {
                name: "warn",
                style: "fill:#f96,stroke:#333"
            })
        );
        assert_eq!(
            classify("class a,b warn"),
            Some(Line::ClassAssign {
                targets: vec!["a", "b"],
                class: "warn"
            })
        );
        assert_eq!(classify("class a warn extra"), None);
    }

    #[test]
    fn simple_edge() {
        let e = edges("a --> b");
        assert_eq!(e.len(), 1);
        assert_eq!((e[0].from, e[0].to, e[0].label), ("a", "b", None));
        assert_eq!(e[0].link, LinkKind::default());
    }

    #[test]
    fn piped_label_is_unquoted() {
        let e = edges(r#"input -->|"1 - accept"| accept"#);
        assert_eq!(e[0].label, Some("1 - accept"));
    }

    #[test]
    fn text_label_form() {
        let e = edges("a -- press one --> b");
        assert_eq!((e[0].from, e[0].to, e[0].label), ("a", "b", Some("press one")));
    }

    #[test]
    fn arrow_styles_are_accepted() {
        assert_eq!(edges("a -.-> b")[0].link.stroke, Stroke::Dotted);
        assert_eq!(edges("a ==> b")[0].link.stroke, Stroke::Thick);
        assert!(!edges("a --- b")[0].link.head);
    }

    #[test]
    fn two_dashes_alone_is_not_an_arrow() {
        assert_eq!(classify("a -- b"), None);
    }

    #[test]
    fn chains_and_groups() {
        let e = edges("a --> b --> c");
        let pairs: Vec<(&str, &str)> = e.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);

        let e = edges("success & fail --> done");
        let pairs: Vec<(&str, &str)> = e.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![("success", "done"), ("fail", "done")]);
    }

    #[test]
    fn trailing_text_is_style_of_last_segment() {
        let e = edges("a --> b --> c linkStyle thick");
        assert_eq!(e[0].style, None);
        assert_eq!(e[1].style, Some("linkStyle thick"));
    }

    #[test]
    fn garbage_is_ignored() {
        assert_eq!(classify("style a fill:#fff"), None);
        assert_eq!(classify("click a callback"), None);
    }
}
