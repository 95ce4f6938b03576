//! Reply rendering shared by the list-producing commands

use vocabulary_types::WordRecord;

/// `1. <item>` lines, numbered from 1
pub fn numbered_list(words: &[WordRecord], render: impl Fn(&WordRecord) -> String) -> String {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| format!("{}. {}", index + 1, render(word)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `<item>` per line
pub fn plain_list<'a>(
    words: impl IntoIterator<Item = &'a WordRecord>,
    render: impl Fn(&WordRecord) -> String,
) -> String {
    words.into_iter().map(render).collect::<Vec<_>>().join("\n")
}

/// Progress towards the memorization threshold, e.g. `40.0`
pub fn score_percent(score: u32, threshold: u32) -> String {
    format!("{:.1}", score as f64 / threshold as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, word: &str, score: u32) -> WordRecord {
        WordRecord {
            id,
            word: word.to_string(),
            translation: format!("{}-tr", word),
            score,
        }
    }

    #[test]
    fn test_score_percent() {
        assert_eq!(score_percent(0, 5), "0.0");
        assert_eq!(score_percent(2, 5), "40.0");
        assert_eq!(score_percent(1, 3), "33.3");
        assert_eq!(score_percent(2, 3), "66.7");
    }

    #[test]
    fn test_numbered_list() {
        let words = vec![record(1, "cat", 0), record(2, "dog", 1)];
        let out = numbered_list(&words, |w| w.word.clone());
        assert_eq!(out, "1. cat\n2. dog");
    }

    #[test]
    fn test_plain_list() {
        let words = vec![record(1, "cat", 0), record(2, "dog", 1)];
        let out = plain_list(&words, |w| format!("{} - {}", w.word, w.translation));
        assert_eq!(out, "cat - cat-tr\ndog - dog-tr");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(numbered_list(&[], |w| w.word.clone()), "");
        assert_eq!(plain_list(&[], |w| w.word.clone()), "");
    }
}
