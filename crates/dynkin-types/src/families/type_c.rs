//! Finite type C_n, the classical restriction of C_n^(1)

use dynkin_core::render::{latex_arrow_tip, latex_cm, latex_node, latex_segment};
use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, Result};

use super::check_rank;
use crate::RootSystem;

/// C_n: single bonds `1 — … — n-1`, then a double bond with the arrow
/// pointing at `n-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeC {
    pub(crate) n: usize,
}

impl TypeC {
    pub fn new(n: usize) -> Result<Self> {
        Ok(TypeC { n: check_rank('C', n)? })
    }
}

impl RootSystem for TypeC {
    fn cartan_type(&self) -> CartanType {
        CartanType::C(self.n)
    }

    fn dynkin_diagram(&self) -> DynkinDiagram {
        let n = self.n;
        tracing::debug!(n, "building type C Dynkin diagram");
        let mut diagram = DynkinDiagram::for_cartan_type(self.cartan_type());
        for i in 1..n.saturating_sub(1) {
            diagram.add_edge(i, i + 1, 1);
        }
        if n > 1 {
            diagram.add_edge(n, n - 1, 2);
        }
        diagram
    }

    fn bonds(&self) -> Vec<Bond> {
        let mut bonds = vec![Bond::Single; self.n.saturating_sub(2)];
        if self.n > 1 {
            bonds.push(Bond::DoubleLeft);
        }
        bonds
    }

    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        dual: bool,
        _options: &DisplayOptions,
    ) -> String {
        let n = self.n;
        let mut lines = Vec::with_capacity(n + 4);
        if n > 1 {
            let start = (n - 2) as f64 * node_dist;
            let at = latex_cm(start);
            lines.push(format!("\\draw (0 cm,0) -- ({at},0);"));
            lines.push(latex_segment(&at, "0.1 cm", node_dist));
            lines.push(latex_segment(&at, "-0.1 cm", node_dist));
            let mid = (n as f64 - 1.5) * node_dist;
            lines.push(if dual {
                latex_arrow_tip(mid + 0.2, 0.0, 0)
            } else {
                latex_arrow_tip(mid - 0.2, 0.0, 180)
            });
        }
        for i in 0..n {
            let x = i as f64 * node_dist;
            lines.push(latex_node(&latex_cm(x), "white", &label(i + 1)));
        }
        tracing::trace!(n, dual, "rendered type C LaTeX diagram");
        lines.join("\n")
    }
}
