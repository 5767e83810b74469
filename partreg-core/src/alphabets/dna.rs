use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// IUPAC nucleotide codes, both cases.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTRYSWKMBDHVNacgtryswkmbdhvn")
}

static IUPAC: LazyLock<Alphabet> = LazyLock::new(iupac_alphabet);

pub fn iupac() -> &'static Alphabet {
    &IUPAC
}

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"AGCTYRWSKMDVHBN"
        .iter()
        .zip(b"TCGARYWSMKHBDVN".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a as usize + 32] = b + 32;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// Upper-cased copy used as the haystack for exact motif search.
pub fn fold_case(text: &[u8]) -> Vec<u8> {
    text.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(iupac().is_word(b"GATTACA"));
        assert!(iupac().is_word(b"gattacaNRY"));
    }

    #[test]
    fn is_no_word() {
        assert!(!iupac().is_word(b"gaUUaca"));
        assert!(!iupac().is_word(b"#"));
        assert!(!iupac().is_word(b"42"));
    }

    #[test]
    fn reverse_complement_keeps_case() {
        assert_eq!(reverse_complement(b"GAATTC"), b"GAATTC".to_vec());
        assert_eq!(reverse_complement(b"ACGTn"), b"nACGT".to_vec());
        assert_eq!(reverse_complement(b"aacg"), b"cgtt".to_vec());
    }

    #[test]
    fn fold_case_upper() {
        assert_eq!(fold_case(b"acgTN"), b"ACGTN".to_vec());
    }
}
