//! Symbols and codes
//!
//! A Code is a fixed-length row of symbols. Symbols are written as letters by
//! their alphabetic offset, so with six symbols the alphabet is `A`..`F`.

use super::{BOARD_SIZE, CODE_SPACE, NUM_CODES};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One colour of the game, stored as its index in `[0, NUM_CODES)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its index, or `None` if the index is out of range
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_CODES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Map an upper- or lower-case ASCII letter to its symbol
    ///
    /// # Errors
    /// Returns `CodeError::InvalidCharacter` for anything that is not an ASCII
    /// letter and `CodeError::SymbolOutOfRange` for letters past the alphabet.
    pub fn from_char(c: char) -> Result<Self, CodeError> {
        let offset = match c {
            'A'..='Z' => c as u8 - b'A',
            'a'..='z' => c as u8 - b'a',
            _ => return Err(CodeError::InvalidCharacter(c)),
        };

        Self::new(offset).ok_or(CodeError::SymbolOutOfRange(c))
    }

    /// The raw index (0-based)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The upper-case letter for this symbol
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Letter of the highest symbol
const LAST_SYMBOL: char = (b'A' + NUM_CODES as u8 - 1) as char;

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly {len} symbols, got {0}", len = BOARD_SIZE)]
    InvalidLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
    #[error("'{0}' is outside the symbol range A-{last}", last = LAST_SYMBOL)]
    SymbolOutOfRange(char),
}

/// An ordered row of exactly `BOARD_SIZE` symbols
///
/// Both the secret and each guess are Codes. A Code can only be built from
/// in-range symbols, so the scoring engine never sees malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Symbol; BOARD_SIZE]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Symbol; BOARD_SIZE]) -> Self {
        Self(symbols)
    }

    /// Build a code from raw symbol indices
    ///
    /// Returns `None` if any index is `>= NUM_CODES`.
    #[must_use]
    pub fn from_indices(indices: [u8; BOARD_SIZE]) -> Option<Self> {
        let mut symbols = [Symbol(0); BOARD_SIZE];
        for (slot, index) in symbols.iter_mut().zip(indices) {
            *slot = Symbol::new(index)?;
        }
        Some(Self(symbols))
    }

    /// Draw a code uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [Symbol(0); BOARD_SIZE];
        for slot in &mut symbols {
            *slot = Symbol(rng.random_range(0..NUM_CODES as u8));
        }
        Self(symbols)
    }

    /// The `n`-th code of the code space in lexicographic order
    ///
    /// Position 0 is the most significant digit, so `nth(0)` is `AAAA` and
    /// `nth(1)` is `AAAB`.
    ///
    /// # Panics
    /// Panics in debug mode if `n >= CODE_SPACE`
    #[must_use]
    pub fn nth(n: usize) -> Self {
        debug_assert!(n < CODE_SPACE, "Code index must be < {CODE_SPACE}");

        let mut symbols = [Symbol(0); BOARD_SIZE];
        let mut rest = n;
        for slot in symbols.iter_mut().rev() {
            *slot = Symbol((rest % NUM_CODES) as u8);
            rest /= NUM_CODES;
        }
        Self(symbols)
    }

    /// Every possible code, `AAAA` first
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (0..CODE_SPACE).map(Self::nth)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; BOARD_SIZE] {
        &self.0
    }

    /// Number of positions holding `symbol`
    #[must_use]
    pub fn count_of(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse one line of player input such as `"abcd"` or `"FEED\n"`
    ///
    /// A single trailing line terminator is ignored; any other whitespace is
    /// rejected like every other non-letter.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError};
    ///
    /// let code: Code = "AbcD".parse().unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert_eq!("abc".parse::<Code>(), Err(CodeError::InvalidLength(3)));
    /// assert_eq!("ab1d".parse::<Code>(), Err(CodeError::InvalidCharacter('1')));
    /// assert_eq!("abcz".parse::<Code>(), Err(CodeError::SymbolOutOfRange('z')));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s
            .strip_suffix("\r\n")
            .or_else(|| s.strip_suffix('\n'))
            .unwrap_or(s);

        let len = line.chars().count();
        if len != BOARD_SIZE {
            return Err(CodeError::InvalidLength(len));
        }

        let mut symbols = [Symbol(0); BOARD_SIZE];
        for (slot, c) in symbols.iter_mut().zip(line.chars()) {
            *slot = Symbol::from_char(c)?;
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn symbol_from_char_both_cases() {
        assert_eq!(Symbol::from_char('A'), Ok(Symbol(0)));
        assert_eq!(Symbol::from_char('a'), Ok(Symbol(0)));
        assert_eq!(Symbol::from_char('F'), Ok(Symbol(5)));
        assert_eq!(Symbol::from_char('f'), Ok(Symbol(5)));
    }

    #[test]
    fn symbol_from_char_rejects_out_of_range() {
        assert_eq!(Symbol::from_char('G'), Err(CodeError::SymbolOutOfRange('G')));
        assert_eq!(Symbol::from_char('z'), Err(CodeError::SymbolOutOfRange('z')));
    }

    #[test]
    fn symbol_from_char_rejects_non_letters() {
        assert_eq!(Symbol::from_char('3'), Err(CodeError::InvalidCharacter('3')));
        assert_eq!(Symbol::from_char(' '), Err(CodeError::InvalidCharacter(' ')));
        assert_eq!(Symbol::from_char('é'), Err(CodeError::InvalidCharacter('é')));
    }

    #[test]
    fn symbol_new_bounds() {
        assert!(Symbol::new(0).is_some());
        assert!(Symbol::new(5).is_some());
        assert!(Symbol::new(6).is_none());
    }

    #[test]
    fn code_parse_valid() {
        let code: Code = "abcd".parse().unwrap();
        assert_eq!(code.symbols().map(Symbol::index), [0, 1, 2, 3]);

        let mixed: Code = "FaDe".parse().unwrap();
        assert_eq!(mixed.to_string(), "FADE");
    }

    #[test]
    fn code_parse_strips_one_line_terminator() {
        assert_eq!("abcd\n".parse::<Code>().unwrap().to_string(), "ABCD");
        assert_eq!("abcd\r\n".parse::<Code>().unwrap().to_string(), "ABCD");
        assert_eq!("abcd\n\n".parse::<Code>(), Err(CodeError::InvalidLength(5)));
    }

    #[test]
    fn code_parse_invalid_length() {
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
        assert_eq!("abc".parse::<Code>(), Err(CodeError::InvalidLength(3)));
        assert_eq!("abcde".parse::<Code>(), Err(CodeError::InvalidLength(5)));
        assert_eq!(" abcd".parse::<Code>(), Err(CodeError::InvalidLength(5)));
    }

    #[test]
    fn code_parse_invalid_characters() {
        assert_eq!("12ab".parse::<Code>(), Err(CodeError::InvalidCharacter('1')));
        assert_eq!("ab d".parse::<Code>(), Err(CodeError::InvalidCharacter(' ')));
        assert_eq!("abcg".parse::<Code>(), Err(CodeError::SymbolOutOfRange('g')));
    }

    #[test]
    fn code_from_indices() {
        assert_eq!(Code::from_indices([0, 0, 1, 1]).unwrap().to_string(), "AABB");
        assert!(Code::from_indices([0, 6, 1, 1]).is_none());
    }

    #[test]
    fn code_space_enumeration() {
        let all: Vec<Code> = Code::all().collect();
        assert_eq!(all.len(), CODE_SPACE);
        assert_eq!(all[0].to_string(), "AAAA");
        assert_eq!(all[1].to_string(), "AAAB");
        assert_eq!(all[NUM_CODES].to_string(), "AABA");
        assert_eq!(all[CODE_SPACE - 1].to_string(), "FFFF");

        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), CODE_SPACE);
    }

    #[test]
    fn code_random_is_in_range_and_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut again = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let code = Code::random(&mut rng);
            assert!(code.symbols().iter().all(|s| (s.index() as usize) < NUM_CODES));
            assert_eq!(code, Code::random(&mut again));
        }
    }

    #[test]
    fn code_count_of() {
        let code: Code = "AABA".parse().unwrap();
        assert_eq!(code.count_of(Symbol(0)), 3);
        assert_eq!(code.count_of(Symbol(1)), 1);
        assert_eq!(code.count_of(Symbol(2)), 0);
    }

    #[test]
    fn code_error_display() {
        assert_eq!(
            CodeError::InvalidLength(3).to_string(),
            "Code must be exactly 4 symbols, got 3"
        );
        assert_eq!(
            CodeError::SymbolOutOfRange('z').to_string(),
            "'z' is outside the symbol range A-F"
        );
    }
}
