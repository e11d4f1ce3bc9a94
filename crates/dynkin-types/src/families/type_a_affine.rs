//! Untwisted affine type A_1^(1)

use dynkin_core::render::{chain_ascii, latex_arrow_tip, latex_cm, latex_node, latex_segment};
use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, NodeId};

use crate::RootSystem;

/// A_1^(1): nodes 0 and 1 joined by a double bond in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeAAffine;

impl RootSystem for TypeAAffine {
    fn cartan_type(&self) -> CartanType {
        CartanType::AffineA1
    }

    fn dynkin_diagram(&self) -> DynkinDiagram {
        tracing::debug!("building affine A1 Dynkin diagram");
        let mut diagram = DynkinDiagram::for_cartan_type(self.cartan_type());
        diagram.add_edge(0, 1, 2);
        diagram.add_edge(1, 0, 2);
        diagram
    }

    fn bonds(&self) -> Vec<Bond> {
        vec![Bond::Quadruple]
    }

    fn ascii_art(&self, label: LabelFn<'_>, options: &DisplayOptions) -> String {
        chain_ascii(
            options.special_glyph(),
            &self.bonds(),
            &[NodeId(0), NodeId(1)],
            label,
        )
    }

    /// Self-dual, so `dual` is ignored.
    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        _dual: bool,
        options: &DisplayOptions,
    ) -> String {
        [
            latex_segment("0", "0.05 cm", node_dist),
            latex_segment("0", "-0.05 cm", node_dist),
            latex_segment("0", "0.15 cm", node_dist),
            latex_segment("0", "-0.15 cm", node_dist),
            latex_arrow_tip(0.5 * node_dist + 0.2, 0.0, 0),
            latex_arrow_tip(0.5 * node_dist - 0.2, 0.0, 180),
            latex_node("0", options.special_fill(), &label(0)),
            latex_node(&latex_cm(node_dist), "white", &label(1)),
        ]
        .join("\n")
    }
}
