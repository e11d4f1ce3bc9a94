//! Root-system data per Cartan family
//!
//! Each family implements [`RootSystem`]: it builds its Dynkin diagram and
//! renders it as ASCII art or TikZ drawing directives. [`root_system`] picks
//! the implementation for a [`CartanType`].

pub mod families;


use dynkin_core::render::chain_ascii;
use dynkin_core::{Bond, CartanType, DisplayOptions, DynkinDiagram, LabelFn, Result};

pub use families::dual::DualType;
pub use families::type_a::TypeA;
pub use families::type_a_affine::TypeAAffine;
pub use families::type_c::TypeC;
pub use families::type_c_affine::TypeCAffine;

/// Diagram construction and rendering for one Cartan type.
pub trait RootSystem: Send + Sync {
    fn cartan_type(&self) -> CartanType;

    /// The Dynkin diagram, tagged with [`RootSystem::cartan_type`].
    fn dynkin_diagram(&self) -> DynkinDiagram;

    /// Bonds between consecutive nodes of the index set, left to right.
    fn bonds(&self) -> Vec<Bond>;

    /// Two-line ASCII art: node and bond glyphs over the node labels.
    fn ascii_art(&self, label: LabelFn<'_>, options: &DisplayOptions) -> String {
        let cartan_type = self.cartan_type();
        let first = if cartan_type.is_affine() {
            options.special_glyph()
        } else {
            "O"
        };
        chain_ascii(first, &self.bonds(), &cartan_type.index_set(), label)
    }

    /// TikZ directives drawing the diagram with nodes `node_dist` cm apart.
    /// `dual` flips every arrow tip.
    fn latex_dynkin_diagram(
        &self,
        label: LabelFn<'_>,
        node_dist: f64,
        dual: bool,
        options: &DisplayOptions,
    ) -> String;
}

/// Get the implementation for a Cartan type.
pub fn root_system(cartan_type: &CartanType) -> Result<Box<dyn RootSystem>> {
    let system: Box<dyn RootSystem> = match cartan_type {
        CartanType::A(n) => Box::new(TypeA::new(*n)?),
        CartanType::C(n) => Box::new(TypeC::new(*n)?),
        CartanType::AffineA1 => Box::new(TypeAAffine),
        CartanType::AffineC(n) => Box::new(TypeCAffine::new(*n)?),
        CartanType::Dual(inner) => Box::new(DualType::new(inner)?),
    };
    Ok(system)
}

/// ASCII art followed by the compact type name, e.g. `C3~`.
pub fn describe(cartan_type: &CartanType, label: LabelFn<'_>, options: &DisplayOptions) -> Result<String> {
    let system = root_system(cartan_type)?;
    Ok(format!(
        "{}\n{}",
        system.ascii_art(label, options),
        cartan_type.repr(true, options)
    ))
}
