//! S1·Si correlation operators and whole-chain product operators.

use crate::error::ConfigError;
use crate::operators::{Spin, SpinOperators};
use sparse::CsrMatrix;

/// Spin component label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
    Z,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::X, Component::Y, Component::Z];

    pub fn label(self) -> &'static str {
        match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
        }
    }

    fn index(self) -> usize {
        match self {
            Component::X => 0,
            Component::Y => 1,
            Component::Z => 2,
        }
    }
}

/// Number of site-1-to-site-i correlators kept per component: site 1 paired
/// with each site up to the chain midpoint inclusive.
pub fn midpoint_sites(n: usize) -> usize {
    n / 2 + 1
}

/// The full correlator set for one chain length: for each component, the
/// S1·Si operators for i up to the midpoint, plus the literal whole-chain
/// product operator.
///
/// Everything is built once via left-to-right Kronecker folds and then
/// shared read-only across the sweep workers.
pub struct Correlators {
    n: usize,
    s1si: [Vec<CsrMatrix>; 3],
    prod: [CsrMatrix; 3],
}

impl Correlators {
    pub fn new(n: usize, ops: &SpinOperators) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ChainLength(n));
        }
        let d = ops.spin.states();
        let i_sup = midpoint_sites(n);

        let build_component = |c: Component| -> Vec<CsrMatrix> {
            // Index 0 is site 1 correlated with itself: the squared operator
            // at position 1, a single slot, identities elsewhere.
            let mut arr = Vec::with_capacity(i_sup);
            arr.push(
                ops.component_squared(c)
                    .kron(&CsrMatrix::identity(d.pow((n - 1) as u32))),
            );
            for i in 1..i_sup {
                arr.push(build_s1si(n, d, i, ops.component(c)));
            }
            arr
        };

        let s1si = [
            build_component(Component::X),
            build_component(Component::Y),
            build_component(Component::Z),
        ];
        let prod = [
            build_prod(n, ops.component(Component::X)),
            build_prod(n, ops.component(Component::Y)),
            build_prod(n, ops.component(Component::Z)),
        ];

        Ok(Self { n, s1si, prod })
    }

    /// Convenience constructor that also builds the operator registry.
    pub fn for_spin(n: usize, spin: Spin) -> Result<Self, ConfigError> {
        Self::new(n, &SpinOperators::new(spin))
    }

    pub fn chain_length(&self) -> usize {
        self.n
    }

    /// Number of correlator slots per component.
    pub fn sites(&self) -> usize {
        self.s1si[0].len()
    }

    /// S1·S(i+1) operator for one component; index 0 is the self-correlation.
    pub fn correlator(&self, c: Component, i: usize) -> &CsrMatrix {
        &self.s1si[c.index()][i]
    }

    /// Whole-chain product operator: the same single-site operator at every
    /// site, combined by tensor product. Deliberately the literal N-fold
    /// tensor product, not a sum of local terms.
    pub fn product(&self, c: Component) -> &CsrMatrix {
        &self.prod[c.index()]
    }
}

/// Operator at positions 1 and i+1 (0-based sites 0 and i), identity at
/// every other site, folded left to right.
fn build_s1si(n: usize, d: usize, i: usize, op: &CsrMatrix) -> CsrMatrix {
    let mut acc = op.clone();
    for j in 1..n {
        if j == i {
            acc = acc.kron(op);
        } else {
            acc = acc.kron(&CsrMatrix::identity(d));
        }
    }
    acc
}

fn build_prod(n: usize, op: &CsrMatrix) -> CsrMatrix {
    let mut acc = CsrMatrix::identity(1);
    for _ in 0..n {
        acc = acc.kron(op);
    }
    acc
}
