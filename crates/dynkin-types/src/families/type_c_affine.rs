//! Untwisted affine type C_n^(1)
//!
//! The extended diagram reads `O=>=O---O--- ... ---O=<=O`: a chain on
//! `0..=n` capped at both ends by a double bond whose arrow points inward.
//! For `n = 1` it coincides with the A_1^(1) diagram `O<=>O`.

use dynkin_core::render::{chain_ascii, latex_arrow_tip, latex_cm, latex_node, latex_segment};
use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, Result};

use super::check_rank;
use super::type_a_affine::TypeAAffine;
use super::type_c::TypeC;
use crate::RootSystem;

/// C_n^(1): the finite C_n chain extended by the special node 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCAffine {
    n: usize,
}

impl TypeCAffine {
    /// Fails with `InvalidRank` when `n` is outside `1..=MAX_RANK`.
    pub fn new(n: usize) -> Result<Self> {
        Ok(TypeCAffine { n: check_rank('C', n)? })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// The finite C_n obtained by removing node 0.
    pub fn classical(&self) -> TypeC {
        TypeC { n: self.n }
    }
}

impl RootSystem for TypeCAffine {
    fn cartan_type(&self) -> CartanType {
        CartanType::AffineC(self.n)
    }

    fn dynkin_diagram(&self) -> DynkinDiagram {
        let n = self.n;
        if n == 1 {
            let mut diagram = TypeAAffine.dynkin_diagram();
            diagram.set_cartan_type(self.cartan_type());
            return diagram;
        }

        tracing::debug!(n, "building affine C Dynkin diagram");
        let mut diagram = DynkinDiagram::for_cartan_type(self.cartan_type());
        for i in 1..n {
            diagram.add_edge(i, i + 1, 1);
        }
        // Overwrites the simple label n -> n-1; n-1 -> n stays 1.
        diagram.add_edge(n, n - 1, 2);
        diagram.add_edge(0, 1, 2);
        diagram
    }

    fn bonds(&self) -> Vec<Bond> {
        if self.n == 1 {
            return TypeAAffine.bonds();
        }
        let mut bonds = Vec::with_capacity(self.n);
        bonds.push(Bond::DoubleRight);
        bonds.extend(std::iter::repeat_n(Bond::Single, self.n - 2));
        bonds.push(Bond::DoubleLeft);
        bonds
    }

    fn ascii_art(&self, label: LabelFn<'_>, options: &DisplayOptions) -> String {
        if self.n == 1 {
            return TypeAAffine.ascii_art(label, options);
        }
        chain_ascii(
            options.special_glyph(),
            &self.bonds(),
            &self.cartan_type().index_set(),
            label,
        )
    }

    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        dual: bool,
        options: &DisplayOptions,
    ) -> String {
        if self.n == 1 {
            return TypeAAffine.latex_dynkin_diagram(label, node_dist, false, options);
        }

        let arrow = if dual {
            latex_arrow_tip(0.5 * node_dist - 0.2, 0.0, 180)
        } else {
            latex_arrow_tip(0.5 * node_dist + 0.2, 0.0, 0)
        };
        let lines = [
            latex_segment("0", "0.1 cm", node_dist),
            latex_segment("0", "-0.1 cm", node_dist),
            arrow,
            "{".to_string(),
            format!("\\pgftransformxshift{{{}}}", latex_cm(node_dist)),
            self.classical()
                .latex_dynkin_diagram(label, node_dist, dual, options),
            "}".to_string(),
            latex_node("0", options.special_fill(), &label(0)),
        ];
        tracing::trace!(n = self.n, dual, "rendered affine C LaTeX diagram");
        lines.join("\n")
    }
}
