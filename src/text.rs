//! String helpers: ASCII case mapping, concatenation, naive substring
//! search, palindrome and anagram checks.
//!
//! Search positions are **byte** offsets into the haystack. Case folding is
//! ASCII-only, so folding never changes byte lengths and offsets found in
//! the folded text are valid for the original.
//!
//! # Sentinels
//!
//! The `search_*` functions keep the classic "not found" sentinels (`-1`
//! and `(-1, -1)`). The `find_*` functions return `Option` instead.

use std::ops::RangeInclusive;

/// Placeholder paragraph for layout and demo output.
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Integer non metus purus. Etiam lacus diam, feugiat sed neque sit amet, faucibus egestas enim. \
Nulla vestibulum pellentesque ipsum, sit amet facilisis diam volutpat at. \
Nulla et molestie eros. Nullam a aliquet sapien.";

/// Case handling for search and anagram comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Bytes must match exactly.
    #[default]
    Sensitive,
    /// ASCII letters match regardless of case.
    Insensitive,
}

// ============================================================================
// Case Mapping and Assembly
// ============================================================================

/// Maps ASCII `a-z` to `A-Z`; every other character passes through.
///
/// # Examples
/// ```
/// use u_basics::text::to_upper;
/// assert_eq!(to_upper("Hello, wörld"), "HELLO, WöRLD");
/// ```
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Maps ASCII `A-Z` to `a-z`; every other character passes through.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Concatenates the parts in order, without a separator.
///
/// # Examples
/// ```
/// use u_basics::text::join;
/// assert_eq!(join(["foo", "bar", "baz"]), "foobarbaz");
/// assert_eq!(join(Vec::<String>::new()), "");
/// ```
pub fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(String::new(), |mut acc, part| {
        acc.push_str(part.as_ref());
        acc
    })
}

/// Empties every given string in place.
///
/// # Examples
/// ```
/// use u_basics::text::clear;
/// let mut a = String::from("left");
/// let mut b = String::from("right");
/// clear([&mut a, &mut b]);
/// assert!(a.is_empty() && b.is_empty());
/// ```
pub fn clear<'a, I>(targets: I)
where
    I: IntoIterator<Item = &'a mut String>,
{
    for target in targets {
        target.clear();
    }
}

// ============================================================================
// Substring Search
// ============================================================================

/// Inclusive byte range `[start, end]` of a match.
///
/// Each search returns its own value; [`SubstringRange::NOT_FOUND`] is the
/// `(-1, -1)` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstringRange {
    /// First byte of the match, or `-1`.
    pub start: isize,
    /// Last byte of the match, or `-1`.
    pub end: isize,
}

impl SubstringRange {
    /// The "not found" sentinel `(-1, -1)`.
    pub const NOT_FOUND: Self = Self { start: -1, end: -1 };

    /// Whether this range denotes an actual match.
    pub fn is_found(&self) -> bool {
        self.start >= 0
    }

    /// Converts to a `usize` range, or `None` for the sentinel.
    pub fn to_range(&self) -> Option<RangeInclusive<usize>> {
        if !self.is_found() {
            return None;
        }
        Some(self.start as usize..=self.end as usize)
    }
}

impl From<RangeInclusive<usize>> for SubstringRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self {
            start: *range.start() as isize,
            end: *range.end() as isize,
        }
    }
}

impl From<SubstringRange> for (isize, isize) {
    fn from(range: SubstringRange) -> Self {
        (range.start, range.end)
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// # Algorithm
/// Naive scan: every start position `0..=n−m` is compared byte by byte.
/// With [`Case::Insensitive`] both operands are ASCII-lowercased first.
///
/// # Complexity
/// Time: O(n·m), Space: O(1) sensitive, O(n + m) insensitive
///
/// # Returns
/// `None` if `needle` is empty, longer than `haystack`, or absent.
///
/// # Examples
/// ```
/// use u_basics::text::{find_first_substring, Case};
/// assert_eq!(find_first_substring("abcABC", "BC", Case::Sensitive), Some(4));
/// assert_eq!(find_first_substring("abcABC", "BC", Case::Insensitive), Some(1));
/// assert_eq!(find_first_substring("abc", "", Case::Sensitive), None);
/// ```
pub fn find_first_substring(haystack: &str, needle: &str, case: Case) -> Option<usize> {
    match case {
        Case::Sensitive => naive_search(haystack.as_bytes(), needle.as_bytes()),
        Case::Insensitive => {
            naive_search(to_lower(haystack).as_bytes(), to_lower(needle).as_bytes())
        }
    }
}

/// Sentinel form of [`find_first_substring`]: the match offset, or `-1`.
///
/// # Examples
/// ```
/// use u_basics::text::{search_first_substring, Case};
/// let s = "I love programming in C++";
/// assert_eq!(search_first_substring(s, "programming", Case::Sensitive), 7);
/// assert_eq!(search_first_substring(s, "rust", Case::Sensitive), -1);
/// ```
pub fn search_first_substring(haystack: &str, needle: &str, case: Case) -> isize {
    find_first_substring(haystack, needle, case).map_or(-1, |i| i as isize)
}

/// Inclusive byte range of the first occurrence of `needle`.
///
/// # Returns
/// `None` under the same conditions as [`find_first_substring`]. A match
/// satisfies `end − start + 1 == needle.len()`.
pub fn find_substring_range(
    haystack: &str,
    needle: &str,
    case: Case,
) -> Option<RangeInclusive<usize>> {
    find_first_substring(haystack, needle, case).map(|start| start..=start + needle.len() - 1)
}

/// Sentinel form of [`find_substring_range`].
///
/// # Examples
/// ```
/// use u_basics::text::{search_substring_range, Case, SubstringRange};
/// let s = "I love programming in C++";
/// let r = search_substring_range(s, "programming", Case::Sensitive);
/// assert_eq!((r.start, r.end), (7, 17));
/// assert_eq!(search_substring_range(s, "", Case::Sensitive), SubstringRange::NOT_FOUND);
/// ```
pub fn search_substring_range(haystack: &str, needle: &str, case: Case) -> SubstringRange {
    find_substring_range(haystack, needle, case)
        .map_or(SubstringRange::NOT_FOUND, SubstringRange::from)
}

fn naive_search(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let (n, m) = (haystack.len(), needle.len());
    if m == 0 || m > n {
        return None;
    }
    (0..=n - m).find(|&i| haystack[i..i + m] == *needle)
}

// ============================================================================
// Palindromes and Anagrams
// ============================================================================

/// Whether `s` reads the same forwards and backwards.
///
/// Compares characters from both ends inward; the empty string is a
/// palindrome. Comparison is exact (case and punctuation matter).
///
/// # Examples
/// ```
/// use u_basics::text::is_palindrome;
/// assert!(is_palindrome("hellolleh"));
/// assert!(!is_palindrome("hello"));
/// assert!(is_palindrome(""));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Whether `a` and `b` contain the same characters with the same counts.
///
/// # Algorithm
/// Sorts a copy of each operand's characters and compares. With
/// [`Case::Insensitive`] both are ASCII-uppercased before sorting.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_basics::text::{is_anagram, Case};
/// assert!(is_anagram("anagram", "nagaram", Case::Sensitive));
/// assert!(is_anagram("Listen", "Silent", Case::Insensitive));
/// assert!(!is_anagram("Listen", "Silent", Case::Sensitive));
/// ```
pub fn is_anagram(a: &str, b: &str, case: Case) -> bool {
    if a.len() != b.len() {
        return false;
    }
    sorted_chars(a, case) == sorted_chars(b, case)
}

fn sorted_chars(s: &str, case: Case) -> Vec<char> {
    let mut chars: Vec<char> = match case {
        Case::Sensitive => s.chars().collect(),
        Case::Insensitive => s.chars().map(|c| c.to_ascii_uppercase()).collect(),
    };
    chars.sort_unstable();
    chars
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "I love programming in C++";

    // --- case mapping / join / clear ---

    #[test]
    fn test_case_mapping() {
        assert_eq!(to_upper("mixed Case 123"), "MIXED CASE 123");
        assert_eq!(to_lower("MIXED Case 123"), "mixed case 123");
        assert_eq!(to_upper(""), "");
    }

    #[test]
    fn test_case_mapping_non_ascii_passthrough() {
        assert_eq!(to_upper("straße"), "STRAßE");
        assert_eq!(to_lower("ÉCOLE"), "École");
    }

    #[test]
    fn test_join_any_arity() {
        assert_eq!(join(["a"]), "a");
        assert_eq!(join(["a", "b"]), "ab");
        assert_eq!(join(["a", "b", "c", "d", "e"]), "abcde");
        let owned = vec![String::from("x"), String::from("y")];
        assert_eq!(join(&owned), "xy");
    }

    #[test]
    fn test_clear() {
        let mut a = String::from("one");
        let mut b = String::from("two");
        let mut c = String::from("three");
        clear([&mut a, &mut b, &mut c]);
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("", "", ""));
    }

    #[test]
    fn test_lorem_ipsum() {
        assert!(LOREM_IPSUM.starts_with("Lorem ipsum dolor sit amet"));
        assert!(LOREM_IPSUM.ends_with("aliquet sapien."));
        assert!(!LOREM_IPSUM.contains("  "));
    }

    // --- search ---

    #[test]
    fn test_search_first_substring() {
        assert_eq!(search_first_substring(SENTENCE, "programming", Case::Sensitive), 7);
        assert_eq!(search_first_substring(SENTENCE, "I", Case::Sensitive), 0);
        assert_eq!(search_first_substring(SENTENCE, "C++", Case::Sensitive), 22);
        assert_eq!(search_first_substring(SENTENCE, "Programming", Case::Sensitive), -1);
    }

    #[test]
    fn test_search_first_substring_insensitive() {
        assert_eq!(search_first_substring(SENTENCE, "PROGRAMMING", Case::Insensitive), 7);
        assert_eq!(search_first_substring("aXbxc", "XC", Case::Insensitive), 3);
    }

    #[test]
    fn test_search_returns_first_of_many() {
        assert_eq!(search_first_substring("abababab", "bab", Case::Sensitive), 1);
    }

    #[test]
    fn test_search_sentinels() {
        assert_eq!(search_first_substring("abc", "", Case::Sensitive), -1);
        assert_eq!(search_first_substring("", "", Case::Sensitive), -1);
        assert_eq!(search_first_substring("abc", "abcd", Case::Sensitive), -1);
        assert_eq!(find_first_substring("abc", "abcd", Case::Insensitive), None);
    }

    #[test]
    fn test_search_whole_string() {
        assert_eq!(search_first_substring("same", "same", Case::Sensitive), 0);
        assert_eq!(
            search_substring_range("same", "same", Case::Sensitive),
            SubstringRange { start: 0, end: 3 }
        );
    }

    #[test]
    fn test_search_substring_range() {
        let r = search_substring_range(SENTENCE, "programming", Case::Sensitive);
        assert_eq!(<(isize, isize)>::from(r), (7, 17));
        assert!(r.is_found());
        assert_eq!(r.to_range(), Some(7..=17));

        let r = search_substring_range(SENTENCE, "C++", Case::Sensitive);
        assert_eq!((r.start, r.end), (22, 24));
    }

    #[test]
    fn test_search_substring_range_not_found() {
        let r = search_substring_range(SENTENCE, "Rust", Case::Sensitive);
        assert_eq!(r, SubstringRange::NOT_FOUND);
        assert!(!r.is_found());
        assert_eq!(r.to_range(), None);
        assert_eq!(find_substring_range(SENTENCE, "Rust", Case::Sensitive), None);
    }

    #[test]
    fn test_search_substring_range_results_are_independent() {
        let hit = search_substring_range(SENTENCE, "love", Case::Sensitive);
        let miss = search_substring_range(SENTENCE, "hate", Case::Sensitive);
        assert_eq!(hit, SubstringRange { start: 2, end: 5 });
        assert_eq!(miss, SubstringRange::NOT_FOUND);
        // an earlier result is not clobbered by a later call
        assert_eq!(hit, SubstringRange { start: 2, end: 5 });
    }

    #[test]
    fn test_search_substring_range_insensitive() {
        assert_eq!(
            find_substring_range(SENTENCE, "LOVE", Case::Insensitive),
            Some(2..=5)
        );
    }

    #[test]
    fn test_case_default_is_sensitive() {
        assert_eq!(Case::default(), Case::Sensitive);
    }

    // --- palindromes / anagrams ---

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("hellolleh"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("abca"));
        assert!(!is_palindrome("Abba"));
    }

    #[test]
    fn test_is_palindrome_multibyte() {
        assert!(is_palindrome("été"));
        assert!(!is_palindrome("étè"));
    }

    #[test]
    fn test_is_anagram() {
        assert!(is_anagram("anagram", "nagaram", Case::Sensitive));
        assert!(is_anagram("anagram", "nagaram", Case::Insensitive));
        assert!(!is_anagram("rat", "car", Case::Sensitive));
        assert!(!is_anagram("abc", "abcc", Case::Sensitive));
        assert!(is_anagram("", "", Case::Sensitive));
    }

    #[test]
    fn test_is_anagram_case() {
        assert!(!is_anagram("Dormitory", "dirtyroom", Case::Sensitive));
        assert!(is_anagram("Dormitory", "dirtyroom", Case::Insensitive));
        // folding must happen before ordering
        assert!(is_anagram("aB", "Ab", Case::Insensitive));
    }
}
