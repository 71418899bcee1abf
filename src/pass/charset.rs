//! Character classes and pool building for password generation.

use std::fmt;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()";

/// A named category of symbols with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Letters,
    Digits,
    Special,
}

impl CharacterClass {
    /// All classes in pool order.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Letters => 0b001,
            CharacterClass::Digits => 0b010,
            CharacterClass::Special => 0b100,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Letters => write!(f, "Letters"),
            CharacterClass::Digits => write!(f, "Numbers"),
            CharacterClass::Special => write!(f, "Special Characters"),
        }
    }
}

/// Set of enabled character classes. Iterates in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b111)
    }

    pub fn only(class: CharacterClass) -> Self {
        ClassSet(class.bit())
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Build the character pool: enabled alphabets concatenated in pool order.
pub fn pool(classes: ClassSet) -> Vec<char> {
    classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

/// Pool size for the given classes (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|class| class.alphabet().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Letters.alphabet().len(), 52);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Special.alphabet().len(), 10);
    }

    #[test]
    fn full_pool_keeps_class_order() {
        let pool: String = pool(ClassSet::all()).into_iter().collect();
        assert_eq!(
            pool,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()"
        );
        assert_eq!(size(ClassSet::all()), 72);
    }

    #[test]
    fn pool_skips_absent_classes() {
        let classes = ClassSet::only(CharacterClass::Special).with(CharacterClass::Digits);
        let pool: String = pool(classes).into_iter().collect();
        assert_eq!(pool, "0123456789!@#$%^&*()");
        assert_eq!(size(classes), 20);
    }

    #[test]
    fn empty_set_has_empty_pool() {
        assert!(pool(ClassSet::empty()).is_empty());
        assert_eq!(size(ClassSet::empty()), 0);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = ClassSet::all();
        set.toggle(CharacterClass::Digits);
        assert!(!set.contains(CharacterClass::Digits));
        assert!(set.contains(CharacterClass::Letters));
        set.toggle(CharacterClass::Digits);
        assert_eq!(set, ClassSet::all());
    }

    #[test]
    fn iter_is_in_pool_order_regardless_of_insertion() {
        let set: ClassSet = [CharacterClass::Special, CharacterClass::Letters]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Letters, CharacterClass::Special]);
    }
}
