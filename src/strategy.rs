//! `proptest` strategies for [`Optional`], enabled by the `proptest` feature.

use core::fmt::Debug;

use proptest::prelude::*;

use crate::Optional;

/// Generates empty and engaged containers, drawing values from `inner`.
///
/// Empty and engaged cases are weighted the same way as
/// `proptest::option::of`.
pub fn optional_strategy<S>(inner: S) -> impl Strategy<Value = Optional<S::Value>>
where
    S: Strategy,
    S::Value: Debug,
{
    proptest::option::of(inner).prop_map(Optional::<S::Value>::from)
}
