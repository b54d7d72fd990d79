//! Defines the quadrature rule variants
//!
//! Provides the [`Rule`] enum with each rule's nodes, weights and degree of
//! exactness. Nodes and weights are generated for an arbitrary `[a, b]`.
//!
//! | rule              | nodes on [0, 1]     | weights              | exact to degree |
//! |-------------------|---------------------|----------------------|-----------------|
//! | `Midpoint`        | 1/2                 | 1                    | 1               |
//! | `OpenTwoPoint`    | 1/3, 2/3            | 1/2, 1/2             | 1               |
//! | `Simpson`         | 0, 1/2, 1           | 1/6, 4/6, 1/6        | 3               |
//! | `ClosedFourPoint` | 0, 1/3, 2/3, 1      | 1/8, 3/8, 3/8, 1/8   | 3               |
//! | `GaussLegendre3`  | 1/2 ± sqrt(3/5)/2, 1/2 | 5/18, 5/18, 8/18  | 5               |

use crate::real::{Precision, Real};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Midpoint,
    OpenTwoPoint,
    Simpson,
    ClosedFourPoint,
    GaussLegendre3,
}

impl Rule {
    /// The equally spaced (Newton-Cotes type) rules.
    pub const NEWTON_COTES: [Rule; 4] = [
        Rule::Midpoint,
        Rule::OpenTwoPoint,
        Rule::Simpson,
        Rule::ClosedFourPoint,
    ];

    pub const ALL: [Rule; 5] = [
        Rule::Midpoint,
        Rule::OpenTwoPoint,
        Rule::Simpson,
        Rule::ClosedFourPoint,
        Rule::GaussLegendre3,
    ];

    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Midpoint        => "midpoint",
            Rule::OpenTwoPoint    => "open_two_point",
            Rule::Simpson         => "simpson",
            Rule::ClosedFourPoint => "closed_four_point",
            Rule::GaussLegendre3  => "gauss_legendre_3",
        }
    }

    /// Highest polynomial degree integrated exactly.
    pub const fn degree_of_exactness(self) -> u32 {
        match self {
            Rule::Midpoint | Rule::OpenTwoPoint     => 1,
            Rule::Simpson  | Rule::ClosedFourPoint  => 3,
            Rule::GaussLegendre3                    => 5,
        }
    }

    pub const fn node_count(self) -> usize {
        match self {
            Rule::Midpoint        => 1,
            Rule::OpenTwoPoint    => 2,
            Rule::Simpson         => 3,
            Rule::ClosedFourPoint => 4,
            Rule::GaussLegendre3  => 3,
        }
    }

    /// `(node, weight)` pairs on `[a, b]`; weights already carry the interval length.
    pub fn nodes_and_weights<T: Real>(self, a: f64, b: f64, precision: Precision) -> Vec<(T, T)> {
        self.nodes_and_weights_on(&T::from_f64(a, precision), &T::from_f64(b, precision), precision)
    }

    pub(crate) fn nodes_and_weights_on<T: Real>(self, a: &T, b: &T, precision: Precision) -> Vec<(T, T)> {
        let frac = |num: f64, den: f64| T::from_f64(num, precision) / T::from_f64(den, precision);
        let h    = b.clone() - a.clone();
        let at   = |num: f64, den: f64| a.clone() + h.clone() * frac(num, den);
        let w    = |num: f64, den: f64| h.clone() * frac(num, den);

        match self {
            Rule::Midpoint => vec![
                (at(1.0, 2.0), h.clone()),
            ],
            Rule::OpenTwoPoint => vec![
                (at(1.0, 3.0), w(1.0, 2.0)),
                (at(2.0, 3.0), w(1.0, 2.0)),
            ],
            Rule::Simpson => vec![
                (a.clone(),    w(1.0, 6.0)),
                (at(1.0, 2.0), w(4.0, 6.0)),
                (b.clone(),    w(1.0, 6.0)),
            ],
            Rule::ClosedFourPoint => vec![
                (a.clone(),    w(1.0, 8.0)),
                (at(1.0, 3.0), w(3.0, 8.0)),
                (at(2.0, 3.0), w(3.0, 8.0)),
                (b.clone(),    w(1.0, 8.0)),
            ],
            Rule::GaussLegendre3 => {
                let center = (a.clone() + b.clone()) * frac(1.0, 2.0);
                let radius = h.clone() * frac(1.0, 2.0);
                let offset = radius.clone() * frac(3.0, 5.0).sqrt();
                let outer  = radius.clone() * frac(5.0, 9.0);
                vec![
                    (center.clone() - offset.clone(), outer.clone()),
                    (center.clone(),                  radius * frac(8.0, 9.0)),
                    (center + offset,                 outer),
                ]
            }
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}
