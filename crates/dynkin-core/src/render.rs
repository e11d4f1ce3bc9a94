//! Rendering primitives shared by the per-family ASCII and LaTeX renderers

use std::collections::HashMap;

use crate::error::{DynkinError, Result};
use crate::model::{Bond, NodeId};

/// Maps a node index to the identifier printed under (or inside) it.
pub type LabelFn<'a> = &'a dyn Fn(usize) -> String;

/// The identity labeling: node `i` is printed as `i`.
pub fn default_label(i: usize) -> String {
    i.to_string()
}

/// Check that `label` gives every node a distinct identifier.
pub fn validate_labels(nodes: &[NodeId], label: LabelFn<'_>) -> Result<()> {
    let mut seen: HashMap<String, NodeId> = HashMap::new();
    for &node in nodes {
        let text = label(node.0);
        if let Some(&first) = seen.get(&text) {
            return Err(DynkinError::NonInjectiveLabel {
                label: text,
                first,
                second: node,
            });
        }
        seen.insert(text, node);
    }
    Ok(())
}

/// Two-line ASCII art of a chain diagram.
///
/// The first node is drawn with `first_glyph`, every other node with `O`.
/// Labels sit in 4-column cells so they line up under the node glyphs.
pub fn chain_ascii(first_glyph: &str, bonds: &[Bond], nodes: &[NodeId], label: LabelFn<'_>) -> String {
    debug_assert_eq!(bonds.len() + 1, nodes.len());

    let mut top = String::from(first_glyph);
    for bond in bonds {
        top.push_str(bond.glyph());
        top.push('O');
    }

    let mut bottom = String::new();
    for node in nodes {
        let cell = format!("{} ", label(node.0));
        bottom.push_str(&format!("{cell:<4}"));
    }

    format!("{}\n{}", top, bottom.trim_end())
}

/// A coordinate rounded to 12 significant digits, without trailing zeros:
/// `2.0` prints as `2`, `0.8499999999999999` as `0.85`.
pub fn format_coord(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }
    let scientific = format!("{:.11e}", x);
    let exponent: i32 = scientific
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    let decimals = (11 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, x);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// `x cm`, with `x` formatted by [`format_coord`].
pub fn latex_cm(x: f64) -> String {
    format!("{} cm", format_coord(x))
}

/// TikZ arrow tip centred at `(x, y)`; rotation 0 points right, 180 points left.
pub fn latex_arrow_tip(x: f64, y: f64, rotate: u32) -> String {
    format!(
        "\\draw[shift={{({}, {})}}, rotate={rotate}] (135 : 0.45cm) -- (0,0) -- (-135 : 0.45cm);",
        format_coord(x),
        format_coord(y)
    )
}

/// TikZ node circle at horizontal `position` with a label underneath.
pub fn latex_node(position: &str, fill: &str, label: &str) -> String {
    format!("\\draw[fill={fill}] ({position}, 0) circle (.25cm) node[below=4pt]{{${label}$}};")
}

/// Horizontal segment of length `length` starting at `(x, y)`.
pub fn latex_segment(x: &str, y: &str, length: f64) -> String {
    format!("\\draw ({x}, {y}) -- +({},0);", latex_cm(length))
}
