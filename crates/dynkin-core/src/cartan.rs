//! Cartan types in scope: the affine type C family and its collaborators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DynkinError, Result};
use crate::model::NodeId;
use crate::options::DisplayOptions;

/// Largest rank accepted when building a type.
pub const MAX_RANK: usize = 1 << 16;

/// An irreducible, crystallographic Cartan type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartanType {
    /// Finite type A_n.
    A(usize),
    /// Finite type C_n.
    C(usize),
    /// Untwisted affine type A_1^(1).
    AffineA1,
    /// Untwisted affine type C_n^(1).
    AffineC(usize),
    /// Same index set as the inner type, every arrow reversed.
    Dual(Box<CartanType>),
}

impl CartanType {
    /// Build a type from its family letter, rank and affine marker
    /// (`None` for finite types, `Some(1)` for untwisted affine).
    pub fn new(letter: char, n: usize, affine: Option<u8>) -> Result<Self> {
        let letter = letter.to_ascii_uppercase();
        if !(1..=MAX_RANK).contains(&n) {
            return Err(DynkinError::InvalidRank { letter, rank: n });
        }
        match (letter, affine) {
            ('A', None) => Ok(CartanType::A(n)),
            ('C', None) => Ok(CartanType::C(n)),
            ('A', Some(1)) if n == 1 => Ok(CartanType::AffineA1),
            ('C', Some(1)) => Ok(CartanType::AffineC(n)),
            _ => {
                let marker = affine.map(|a| format!(", {a}")).unwrap_or_default();
                Err(DynkinError::UnsupportedType(format!("['{letter}', {n}{marker}]")))
            }
        }
    }

    /// C_n^(1).
    pub fn affine_c(n: usize) -> Result<Self> {
        Self::new('C', n, Some(1))
    }

    /// The type this one is the dual of, if any.
    pub fn dual_of(&self) -> Option<&CartanType> {
        match self {
            CartanType::Dual(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            CartanType::A(_) | CartanType::AffineA1 => 'A',
            CartanType::C(_) | CartanType::AffineC(_) => 'C',
            CartanType::Dual(inner) => inner.letter(),
        }
    }

    /// Rank of the classical restriction.
    pub fn n(&self) -> usize {
        match self {
            CartanType::A(n) | CartanType::C(n) | CartanType::AffineC(n) => *n,
            CartanType::AffineA1 => 1,
            CartanType::Dual(inner) => inner.n(),
        }
    }

    /// Number of nodes of the Dynkin diagram.
    pub fn rank(&self) -> usize {
        if self.is_affine() { self.n() + 1 } else { self.n() }
    }

    /// Node indices: `0..=n` for affine types, `1..=n` for finite ones.
    pub fn index_set(&self) -> Vec<NodeId> {
        let first = if self.is_affine() { 0 } else { 1 };
        (first..=self.n()).map(NodeId).collect()
    }

    /// The affine node, absent for finite types.
    pub fn special_node(&self) -> Option<NodeId> {
        self.is_affine().then_some(NodeId(0))
    }

    pub fn is_finite(&self) -> bool {
        match self {
            CartanType::A(_) | CartanType::C(_) => true,
            CartanType::AffineA1 | CartanType::AffineC(_) => false,
            CartanType::Dual(inner) => inner.is_finite(),
        }
    }

    pub fn is_affine(&self) -> bool {
        !self.is_finite()
    }

    /// Untwisted affine types; a dual is untwisted only when it is self-dual.
    pub fn is_untwisted_affine(&self) -> bool {
        matches!(self, CartanType::AffineA1 | CartanType::AffineC(_))
    }

    pub fn is_irreducible(&self) -> bool {
        true
    }

    pub fn is_crystallographic(&self) -> bool {
        true
    }

    /// Every bond is single. Rank one C types collapse onto A_1 and A_1^(1).
    pub fn is_simply_laced(&self) -> bool {
        match self {
            CartanType::A(_) | CartanType::AffineA1 => true,
            CartanType::C(n) | CartanType::AffineC(n) => *n == 1,
            CartanType::Dual(inner) => inner.is_simply_laced(),
        }
    }

    /// The finite type obtained by removing the affine node.
    pub fn classical(&self) -> CartanType {
        match self {
            CartanType::AffineA1 => CartanType::A(1),
            CartanType::AffineC(n) => CartanType::C(*n),
            CartanType::Dual(inner) => inner.classical().dual(),
            finite => finite.clone(),
        }
    }

    /// The dual type. Simply laced types are self-dual.
    pub fn dual(&self) -> CartanType {
        match self {
            CartanType::Dual(inner) => (**inner).clone(),
            t if t.is_simply_laced() => t.clone(),
            t => CartanType::Dual(Box::new(t.clone())),
        }
    }

    /// `['C', 4, 1]`, or `C4~` when `compact`.
    pub fn repr(&self, compact: bool, options: &DisplayOptions) -> String {
        match self {
            CartanType::A(n) | CartanType::C(n) => {
                if compact {
                    format!("{}{}", self.letter(), n)
                } else {
                    format!("['{}', {}]", self.letter(), n)
                }
            }
            CartanType::AffineA1 | CartanType::AffineC(_) => {
                if compact {
                    format!("{}{}~", self.letter(), self.n())
                } else {
                    format!("['{}', {}, 1]", self.letter(), self.n())
                }
            }
            CartanType::Dual(inner) => {
                let base = inner.repr(compact, options);
                if compact {
                    format!("{}{}", base, options.dual_str)
                } else {
                    format!("{}^{}", base, options.dual_str)
                }
            }
        }
    }

    /// `C_{4}^{(1)}`; a dual adds its marker inside the superscript, as in
    /// `C_{4}^{(1)\vee}` or `C_{3}^{\vee}`.
    pub fn latex_name(&self, options: &DisplayOptions) -> String {
        let (base, superscript) = self.latex_parts(options);
        if superscript.is_empty() {
            base
        } else {
            format!("{base}^{{{superscript}}}")
        }
    }

    fn latex_parts(&self, options: &DisplayOptions) -> (String, String) {
        match self {
            CartanType::A(n) | CartanType::C(n) => {
                (format!("{}_{{{}}}", self.letter(), n), String::new())
            }
            CartanType::AffineA1 | CartanType::AffineC(_) => {
                (format!("{}_{{{}}}", self.letter(), self.n()), "(1)".to_string())
            }
            CartanType::Dual(inner) => {
                let (base, superscript) = inner.latex_parts(options);
                (base, format!("{superscript}{}", options.dual_latex))
            }
        }
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(false, &DisplayOptions::default()))
    }
}

impl FromStr for CartanType {
    type Err = DynkinError;

    /// Accepts `C4~`, `C4`, `['C', 4, 1]`, and a trailing `*` or `^*` for the dual.
    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || DynkinError::UnsupportedType(s.to_string());
        let trimmed = s.trim();

        if let Some(rest) = trimmed.strip_suffix('*') {
            let rest = rest.strip_suffix('^').unwrap_or(rest);
            return Ok(rest.parse::<CartanType>()?.dual());
        }

        if let Some(body) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let parts: Vec<&str> = body
                .split(',')
                .map(|p| p.trim().trim_matches(|c| c == '\'' || c == '"'))
                .collect();
            let (letter, n, affine) = match parts.as_slice() {
                [letter, n] => (*letter, *n, None),
                [letter, n, affine] => (*letter, *n, Some(*affine)),
                _ => return Err(unsupported()),
            };
            let mut chars = letter.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                return Err(unsupported());
            };
            let n = n.parse::<usize>().map_err(|_| unsupported())?;
            let affine = affine
                .map(|a| a.parse::<u8>().map_err(|_| unsupported()))
                .transpose()?;
            return CartanType::new(letter, n, affine);
        }

        let (body, affine) = match trimmed.strip_suffix('~') {
            Some(body) => (body, Some(1)),
            None => (trimmed, None),
        };
        let mut chars = body.chars();
        let letter = chars.next().ok_or_else(unsupported)?;
        let n = chars.as_str().parse::<usize>().map_err(|_| unsupported())?;
        CartanType::new(letter, n, affine)
    }
}
