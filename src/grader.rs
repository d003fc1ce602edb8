// src/grader.rs

/// Reference words up to this length are ignored by the fallback match.
const MIN_TOKEN_LEN: usize = 2;

/// Decides whether a free-text answer is acceptable.
///
/// With synonyms, any synonym appearing inside the answer is enough. Without
/// them, any word of the reference answer longer than two characters has to
/// appear inside the answer. Matching is case-insensitive substring search.
pub fn grade<S: AsRef<str>>(user_answer: &str, reference_answer: &str, synonyms: &[S]) -> bool {
    if user_answer.is_empty() {
        return false;
    }

    let answer = user_answer.trim().to_lowercase();

    let keywords: Vec<String> = synonyms
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if keywords.is_empty() {
        return reference_answer
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_TOKEN_LEN)
            .any(|word| answer.contains(word));
    }

    keywords.iter().any(|k| answer.contains(k.as_str()))
}
