pub mod dna;

use bit_set::BitSet;
use std::borrow::Borrow;

/// A set of admissible byte symbols.
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        self.first_foreign(text).is_none()
    }

    /// Position and value of the first symbol not in the alphabet.
    pub fn first_foreign<C, T>(&self, text: T) -> Option<(usize, u8)>
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .map(|c| *c.borrow())
            .enumerate()
            .find(|&(_, c)| !self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
