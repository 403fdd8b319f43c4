/*!
 * Heuristic syllable estimation for single word tokens.
 *
 * The estimate counts vowel letters and then applies two spelling
 * corrections: a trailing silent 'e' is discounted, and a consonant-'le'
 * ending gets its syllable back. Words made of letters always count as at
 * least one syllable.
 */

/// Letters treated as vowels, 'y' included
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimate the syllable count of a single word token.
///
/// The token is lowercased and reduced to ASCII letters first; a token
/// with no letters left (digits, punctuation) estimates to zero.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return 0;
    }

    let mut count: i64 = letters.iter().filter(|&&c| is_vowel(c)).count() as i64;
    let len = letters.len();

    // Trailing silent 'e' after a consonant does not add a syllable
    if len > 2 && letters[len - 1] == 'e' && !is_vowel(letters[len - 2]) {
        count -= 1;
    }

    // Consonant + "le" endings ("little", "table") do form a syllable
    if len > 2 && letters[len - 2] == 'l' && letters[len - 1] == 'e' && !is_vowel(letters[len - 3])
    {
        count += 1;
    }

    count.max(1) as usize
}

/// Sum the syllable estimates of an iterator of word tokens.
pub fn estimate_total_syllables<'a, I>(words: I) -> usize
where
    I: Iterator<Item = &'a str>,
{
    words.map(estimate_syllables).sum()
}
