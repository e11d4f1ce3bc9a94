//! Finite type A_n

use dynkin_core::render::{latex_cm, latex_node};
use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, Result};

use super::check_rank;
use crate::RootSystem;

/// A_n: a chain of `n` nodes joined by single bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeA {
    n: usize,
}

impl TypeA {
    pub fn new(n: usize) -> Result<Self> {
        Ok(TypeA { n: check_rank('A', n)? })
    }
}

impl RootSystem for TypeA {
    fn cartan_type(&self) -> CartanType {
        CartanType::A(self.n)
    }

    fn dynkin_diagram(&self) -> DynkinDiagram {
        tracing::debug!(n = self.n, "building type A Dynkin diagram");
        let mut diagram = DynkinDiagram::for_cartan_type(self.cartan_type());
        for i in 1..self.n {
            diagram.add_edge(i, i + 1, 1);
        }
        diagram
    }

    fn bonds(&self) -> Vec<Bond> {
        vec![Bond::Single; self.n - 1]
    }

    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        _dual: bool,
        _options: &DisplayOptions,
    ) -> String {
        let mut lines = Vec::with_capacity(self.n + 1);
        if self.n > 1 {
            let end = (self.n - 1) as f64 * node_dist;
            lines.push(format!("\\draw (0 cm,0) -- ({},0);", latex_cm(end)));
        }
        for i in 0..self.n {
            let x = i as f64 * node_dist;
            lines.push(latex_node(&latex_cm(x), "white", &label(i + 1)));
        }
        lines.join("\n")
    }
}
