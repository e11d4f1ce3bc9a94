//! Dual Cartan types: same index set, every arrow reversed

use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, Result};

use crate::{RootSystem, root_system};

/// Wraps the root system of the type being dualized.
pub struct DualType {
    inner: Box<dyn RootSystem>,
}

impl DualType {
    pub fn new(inner: &CartanType) -> Result<Self> {
        Ok(DualType {
            inner: root_system(inner)?,
        })
    }
}

impl std::fmt::Debug for DualType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DualType")
            .field("inner", &self.inner.cartan_type())
            .finish()
    }
}

impl RootSystem for DualType {
    fn cartan_type(&self) -> CartanType {
        CartanType::Dual(Box::new(self.inner.cartan_type()))
    }

    fn dynkin_diagram(&self) -> DynkinDiagram {
        let mut diagram = self.inner.dynkin_diagram().dual();
        diagram.set_cartan_type(self.cartan_type());
        diagram
    }

    fn bonds(&self) -> Vec<Bond> {
        self.inner.bonds().iter().map(Bond::dual).collect()
    }

    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        dual: bool,
        options: &DisplayOptions,
    ) -> String {
        self.inner
            .latex_dynkin_diagram(label, node_dist, !dual, options)
    }
}
