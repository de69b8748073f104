/*!
Tools for building pools and targets from text.

Both pools and targets are built from a sequence of (label, count) pairs.
In text, a pair is written `label=count`, and pairs are separated by commas and/or whitespace.

# Examples

```rust
# use hat_draw::structures::{pool::Pool, target::Target};
let pool: Pool = "red=5, green=2, blue=4".parse().unwrap();
assert_eq!(pool.len(), 11);

let target: Target = "red=2 green=1".parse().unwrap();
assert_eq!(target.minimums().len(), 2);
```
*/

mod composition;
pub use composition::parse_composition;
