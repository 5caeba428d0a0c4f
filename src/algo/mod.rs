/*!
# Graph Algorithms

Derived-graph constructions that are implemented on the graphs itself.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
Traversals and shortest paths are not part of this crate.
*/

mod complement;

use crate::prelude::*;

pub use complement::*;
