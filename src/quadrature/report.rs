//! Defines the [`QuadratureEstimate`] struct returned by [`super::rules::compare_rules`].

use super::algorithms::Rule;


/// One rule's estimate against a known integral.
///
/// ├ `rule`      : [`Rule`] used
/// ├ `value`     : the weighted sum
/// └ `abs_error` : `|value - exact|`
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureEstimate<T> {
    pub rule      : Rule,
    pub value     : T,
    pub abs_error : T,
}
