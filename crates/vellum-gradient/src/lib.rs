//! Lexer, parser, AST and serializer for CSS gradient strings.
//!
//! This crate is intentionally dependency-free so the grammar can be consumed
//! by pickers, linters and tooling without pulling in engine or UI code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `GradientNode`, `Orientation`, `ColorStop`, `StopColor`, `Length` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` / `parse_gradient` entry points |
//! | [`serializer`] | `serialize_gradient` and its pieces |
//!
//! # Quick start
//!
//! ```rust
//! use vellum_gradient::{parse_gradient, serialize_gradient};
//!
//! let node = parse_gradient("linear-gradient(90deg, red 0%, blue 100%)").unwrap();
//! assert_eq!(node.color_stops.len(), 2);
//! assert_eq!(serialize_gradient(&node), "linear-gradient(90deg,red 0%,blue 100%)");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use ast::{ColorStop, GradientKind, GradientNode, Length, LengthUnit, Orientation, StopColor};
pub use error::ParseError;
pub use parser::{parse_gradient, parse_str};
pub use serializer::{serialize_color, serialize_gradient};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> GradientNode { parse_gradient(src).unwrap() }
    fn err(src: &str) { parse_gradient(src).unwrap_err(); }

    #[test] fn angular_linear() {
        let node = ok("linear-gradient(90deg, red 0%, blue 100%)");
        assert_eq!(node.kind, GradientKind::Linear);
        assert_eq!(node.orientation, Some(Orientation::Angular("90".into())));
        assert_eq!(node.color_stops[0].color, StopColor::Literal("red".into()));
        assert_eq!(node.color_stops[0].length, Some(Length::percent("0")));
        assert_eq!(node.color_stops[1].color, StopColor::Literal("blue".into()));
        assert_eq!(node.color_stops[1].length, Some(Length::percent("100")));
    }
    #[test] fn directional_corner() {
        let node = ok("linear-gradient(to bottom left, red, blue)");
        assert_eq!(node.orientation, Some(Orientation::Directional("bottom left".into())));
        assert!(node.color_stops.iter().all(|s| s.length.is_none()));
    }
    #[test] fn no_orientation() {
        assert_eq!(ok("linear-gradient(red, blue)").orientation, None);
    }
    #[test] fn functional_colors() {
        let node = ok("linear-gradient(135deg, rgba(6, 147, 227, 1) 0%, rgb(155, 81, 224) 100%)");
        assert_eq!(node.color_stops[0].color, StopColor::Rgba(vec!["6".into(), "147".into(), "227".into(), "1".into()]));
        assert_eq!(node.color_stops[1].color, StopColor::Rgb(vec!["155".into(), "81".into(), "224".into()]));
    }
    #[test] fn hsl_keeps_percent_components() {
        let node = ok("linear-gradient(hsl(120, 50%, 25%) 10%, hsla(0 0% 0% 0.5) 90%)");
        assert_eq!(node.color_stops[0].color, StopColor::Hsl(vec!["120".into(), "50%".into(), "25%".into()]));
        assert_eq!(node.color_stops[1].color, StopColor::Hsla(vec!["0".into(), "0%".into(), "0%".into(), "0.5".into()]));
    }
    #[test] fn hex_lengths() {
        ok("linear-gradient(#fff 0%, #ffff 50%, #ffffff 60%, #ffffffff 100%)");
    }
    #[test] fn px_and_em_lengths() {
        let node = ok("linear-gradient(red 10px, blue 2.5em)");
        assert_eq!(node.color_stops[0].length.as_ref().unwrap().unit, LengthUnit::Px);
        assert_eq!(node.color_stops[1].length.as_ref().unwrap().unit, LengthUnit::Em);
    }
    #[test] fn radial_with_prelude() {
        let node = ok("radial-gradient(circle at center, red 0%, blue 100%)");
        assert_eq!(node.kind, GradientKind::Radial);
        assert_eq!(node.orientation, Some(Orientation::Shape("circle at center".into())));
    }
    #[test] fn radial_without_prelude() {
        assert_eq!(ok("radial-gradient(red, blue)").orientation, None);
    }
    #[test] fn gradient_list() {
        let list = parse_str("linear-gradient(red, blue), radial-gradient(red, blue)").unwrap();
        assert_eq!(list.len(), 2);
    }
    #[test] fn case_insensitive_function_name() {
        assert_eq!(ok("Linear-Gradient(red, blue)").kind, GradientKind::Linear);
    }
    #[test] fn err_empty() { err(""); }
    #[test] fn err_unknown_function() { err("conic-gradient(red, blue)"); }
    #[test] fn err_bad_hex() { err("linear-gradient(#ggg 0%, red 100%)"); }
    #[test] fn err_five_digit_hex() { err("linear-gradient(#12345 0%, red 100%)"); }
    #[test] fn err_unclosed() { err("linear-gradient(red 0%, blue 100%"); }
    #[test] fn err_trailing_garbage() { err("linear-gradient(red, blue) x"); }
    #[test] fn err_bad_unit() { err("linear-gradient(red 10vh, blue)"); }
    #[test] fn err_to_without_side() { err("linear-gradient(to, red, blue)"); }
    #[test] fn err_column_reported() {
        let e = parse_gradient("linear-gradient(red 0%, )").unwrap_err();
        assert_eq!(e.col, 25);
    }
}

#[cfg(test)]
mod serialize_tests {
    use super::*;

    #[test]
    fn scenario_round_trip_string() {
        let node = parse_gradient("linear-gradient(90deg, red 0%, blue 100%)").unwrap();
        assert_eq!(serialize_gradient(&node), "linear-gradient(90deg,red 0%,blue 100%)");
    }

    #[test]
    fn stops_sorted_by_position() {
        let node = parse_gradient("linear-gradient(blue 100%, red 0%, green 50%)").unwrap();
        assert_eq!(serialize_gradient(&node), "linear-gradient(red 0%,green 50%,blue 100%)");
        // the node keeps its own order
        assert_eq!(node.color_stops[0].color, StopColor::Literal("blue".into()));
    }

    #[test]
    fn missing_positions_sort_first() {
        let node = parse_gradient("linear-gradient(red 40%, blue)").unwrap();
        assert_eq!(serialize_gradient(&node), "linear-gradient(blue,red 40%)");
    }

    #[test]
    fn non_angular_orientation_is_omitted() {
        let node = parse_gradient("linear-gradient(to right, red 0%, blue 100%)").unwrap();
        assert_eq!(serialize_gradient(&node), "linear-gradient(red 0%,blue 100%)");
        let node = parse_gradient("radial-gradient(circle, red 0%, blue 100%)").unwrap();
        assert_eq!(serialize_gradient(&node), "radial-gradient(red 0%,blue 100%)");
    }

    #[test]
    fn color_forms() {
        assert_eq!(serialize_color(&StopColor::Hex("abc".into())), "#abc");
        assert_eq!(serialize_color(&StopColor::Literal("transparent".into())), "transparent");
        assert_eq!(
            serialize_color(&StopColor::Rgba(vec!["1".into(), "2".into(), "3".into(), "0.5".into()])),
            "rgba(1,2,3,0.5)"
        );
    }
}

#[cfg(test)]
mod round_trip_props {
    use super::*;
    use proptest::prelude::*;

    fn color() -> impl Strategy<Value = StopColor> {
        prop_oneof![
            prop::sample::select(vec!["red", "blue", "transparent", "rebeccapurple"])
                .prop_map(|n| StopColor::Literal(n.to_string())),
            any::<u32>().prop_map(|v| StopColor::Hex(format!("{:06x}", v & 0xff_ffff))),
            any::<[u8; 3]>().prop_map(|c| StopColor::Rgb(c.iter().map(u8::to_string).collect())),
        ]
    }

    fn stop() -> impl Strategy<Value = ColorStop> {
        (color(), 0u16..=1000).prop_map(|(color, tenths)| ColorStop {
            color,
            length: Some(Length::percent((f64::from(tenths) / 10.0).to_string())),
        })
    }

    fn node() -> impl Strategy<Value = GradientNode> {
        (
            prop::option::of(-360i32..=360),
            prop::collection::vec(stop(), 2..8),
        )
            .prop_map(|(angle, color_stops)| GradientNode {
                kind: GradientKind::Linear,
                orientation: angle.map(|a| Orientation::Angular(a.to_string())),
                color_stops,
            })
    }

    proptest! {
        #[test]
        fn serialize_then_parse_preserves_stops_and_angle(node in node()) {
            let reparsed = parse_gradient(&serialize_gradient(&node)).unwrap();

            let mut expected = node.color_stops.clone();
            expected.sort_by(|a, b| a.position().total_cmp(&b.position()));

            prop_assert_eq!(reparsed.orientation, node.orientation);
            prop_assert_eq!(reparsed.color_stops, expected);
        }
    }
}
