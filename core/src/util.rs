pub const ALPHABET: usize = 26;

pub fn letter_index(letter: char) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter as u8 - b'a') as usize
}

pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET);
    (b'a' + index as u8) as char
}
