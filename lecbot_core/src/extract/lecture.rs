use regex::Regex;

use crate::error::BuildError;
use crate::tables::OrdinalEntry;

/// Upper bound of the accepted lecture range when none is configured.
pub const DEFAULT_MAX_LECTURE: u32 = 50;

/// Two-phase lecture number lookup.
///
/// Phase one checks ordinal words, highest number first, as whole words.
/// Phase two falls back to the first bare one- or two-digit number and
/// accepts it only inside `1..=max_lecture`.
#[derive(Debug, Clone)]
pub struct LectureExtractor {
    /// One compiled whole-word pattern per ordinal, sorted by number descending.
    ordinals: Vec<(u32, Regex)>,
    digits: Regex,
    max_lecture: u32,
}

impl LectureExtractor {
    /// Compile the ordinal table.
    ///
    /// # Errors
    /// Returns an error if `max_lecture` is zero or a pattern fails to compile.
    pub fn new(ordinals: &[OrdinalEntry], max_lecture: u32) -> Result<Self, BuildError> {
        if max_lecture == 0 {
            return Err(BuildError::EmptyRange);
        }

        let mut compiled = ordinals
            .iter()
            .filter(|entry| !entry.synonyms.is_empty())
            .map(|entry| Ok((entry.number, whole_word_pattern(&entry.synonyms)?)))
            .collect::<Result<Vec<_>, BuildError>>()?;
        compiled.sort_by_key(|(number, _)| std::cmp::Reverse(*number));

        Ok(Self {
            ordinals: compiled,
            digits: Regex::new(r"[0-9]+")?,
            max_lecture,
        })
    }

    #[must_use]
    pub const fn max_lecture(&self) -> u32 {
        self.max_lecture
    }

    /// Extract a lecture number from normalized text.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<u32> {
        self.from_ordinal_words(text)
            .or_else(|| self.from_bare_digits(text))
    }

    fn from_ordinal_words(&self, text: &str) -> Option<u32> {
        self.ordinals
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(number, _)| *number)
    }

    fn from_bare_digits(&self, text: &str) -> Option<u32> {
        self.digits
            .find_iter(text)
            .filter(|m| m.as_str().len() <= 2)
            .filter(|m| {
                let before = text[..m.start()].chars().next_back();
                let after = text[m.end()..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            })
            .find_map(|m| m.as_str().parse::<u32>().ok())
            .filter(|n| (1..=self.max_lecture).contains(n))
    }
}

/// Build a regex matching any of `words` bounded by non-alphanumeric characters.
fn whole_word_pattern(words: &[String]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?:^|[^\p{{L}}\p{{N}}\p{{M}}])(?:{alternation})(?:$|[^\p{{L}}\p{{N}}\p{{M}}])"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::default_ordinals;

    fn extractor() -> Result<LectureExtractor, BuildError> {
        LectureExtractor::new(&default_ordinals(), DEFAULT_MAX_LECTURE)
    }

    #[test]
    fn test_ordinal_words() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("the tenth lecture"), Some(10));
        assert_eq!(ex.extract("algorithm first lecture"), Some(1));
        assert_eq!(ex.extract("math lecture three"), Some(3));
        assert_eq!(ex.extract("momken mohadret al math al tanya"), Some(2));
        assert_eq!(ex.extract("محاضرة الرياضيات الثانية"), Some(2));
        assert_eq!(ex.extract("المحاضرة التالتة"), Some(3));
        assert_eq!(ex.extract("ds 4th"), Some(4));
        Ok(())
    }

    #[test]
    fn test_whole_word_only() -> Result<(), BuildError> {
        let ex = extractor()?;
        // "one" inside "someone", "ten" inside "often" and "attention".
        assert_eq!(ex.extract("someone often pays attention"), None);
        // "الثانية" must not be read from inside a longer word.
        assert_eq!(ex.extract("والثانيةx"), None);
        Ok(())
    }

    #[test]
    fn test_ordinal_beats_digits() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("course 42 second lecture"), Some(2));
        Ok(())
    }

    #[test]
    fn test_highest_ordinal_first() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("the first or the tenth"), Some(10));
        Ok(())
    }

    #[test]
    fn test_bare_digits() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("algorithm lecture 12"), Some(12));
        assert_eq!(ex.extract("ds lecture 50"), Some(50));
        assert_eq!(ex.extract("محاضرة 7"), Some(7));
        Ok(())
    }

    #[test]
    fn test_digits_out_of_range() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("algorithm lecture 99"), None);
        assert_eq!(ex.extract("algorithm lecture 0"), None);
        assert_eq!(ex.extract("algorithm lecture 51"), None);
        Ok(())
    }

    #[test]
    fn test_digits_need_word_boundaries() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("cs2024 term"), None);
        assert_eq!(ex.extract("year 2024"), None);
        assert_eq!(ex.extract("lec12b"), None);
        Ok(())
    }

    #[test]
    fn test_only_first_bare_number_counts() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract("cs 99 lecture 14"), None);
        assert_eq!(ex.extract("lecture 14 room 99"), Some(14));
        // Longer numbers are not candidates at all.
        assert_eq!(ex.extract("year 2024 lecture 14"), Some(14));
        Ok(())
    }

    #[test]
    fn test_custom_range() -> Result<(), BuildError> {
        let ex = LectureExtractor::new(&[], 12)?;
        assert_eq!(ex.extract("lecture 12"), Some(12));
        assert_eq!(ex.extract("lecture 13"), None);
        assert!(matches!(
            LectureExtractor::new(&[], 0),
            Err(BuildError::EmptyRange)
        ));
        Ok(())
    }

    #[test]
    fn test_nothing_found() -> Result<(), BuildError> {
        let ex = extractor()?;
        assert_eq!(ex.extract(""), None);
        assert_eq!(ex.extract("algorithm please"), None);
        Ok(())
    }
}
