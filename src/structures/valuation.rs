/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(𝐚) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(𝐚) = false.
-  *v*\[a\] = None *if any only if* 𝐯(𝐚) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use propkb::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of(2), Some(false));
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
```

# Top

The first element of a valuation in a [knowledge base](crate::kb) is always true, as the atom 0 is [top](crate::structures::atom::TOP_ATOM).
*/

use super::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has a value.
    ///
    /// An atom outside the valuation has no value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal under the valuation, if the atom of the literal has a value.
    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }
}
