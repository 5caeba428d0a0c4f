/*!
# Weights

Vertices and edges carry a weight of any numeric type implementing [`Weight`].
`W::zero()` is the default vertex weight and `W::one()` the placeholder weight used when
a graph has to invent edges (see [`Complement`](crate::algo::Complement)).

Absent edges are *not* encoded by a reserved weight value: an adjacency cell is an
`Option<W>`, so zero is a perfectly valid edge weight.
*/

use std::fmt::Debug;

use num::{NumCast, One, ToPrimitive, Zero};

/// Helper trait for everything that can be used as vertex or edge weight
pub trait Weight: Copy + PartialEq + Debug + Zero + One {}

impl<W> Weight for W where W: Copy + PartialEq + Debug + Zero + One {}

/// Converts an arbitrary primitive number into the weight type `W`.
/// Returns `None` if `n` cannot be represented by `W`.
///
/// # Examples
/// ```
/// use wgraphs::weight::weight;
///
/// assert_eq!(weight::<f32, _>(3u8), Some(3.0));
/// assert_eq!(weight::<i64, _>(-2.0f64), Some(-2));
/// assert_eq!(weight::<u8, _>(-1i32), None);
/// ```
pub fn weight<W, N>(n: N) -> Option<W>
where
    W: Weight + NumCast,
    N: ToPrimitive,
{
    W::from(n)
}
