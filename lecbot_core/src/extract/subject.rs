use crate::tables::KeywordTables;

/// First-match substring lookup over the subject table.
///
/// Subjects are tried in table order and, within a subject, synonyms in
/// their listed order. Short synonyms can fire inside unrelated words
/// (`cv`, `se`, `ai`); earlier subjects shadow later ones.
#[derive(Debug, Clone)]
pub struct SubjectExtractor {
    subjects: Vec<(String, Vec<String>)>,
}

impl SubjectExtractor {
    #[must_use]
    pub fn new(tables: &KeywordTables) -> Self {
        let subjects = tables
            .subjects
            .iter()
            .map(|entry| {
                let synonyms = entry.synonyms.iter().map(|s| s.to_lowercase()).collect();
                (entry.id.clone(), synonyms)
            })
            .collect();

        Self { subjects }
    }

    /// Return the canonical id of the first subject whose synonym occurs in `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<&str> {
        self.subjects
            .iter()
            .find(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s.as_str())))
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SubjectEntry;

    fn extractor() -> SubjectExtractor {
        SubjectExtractor::new(&KeywordTables::default())
    }

    #[test]
    fn test_english_synonyms() {
        let ex = extractor();
        assert_eq!(ex.extract("send me algorithms lecture 2"), Some("algorithm"));
        assert_eq!(ex.extract("data structures please"), Some("ds"));
        assert_eq!(ex.extract("theory of computation 3"), Some("automata"));
        assert_eq!(ex.extract("image processing 1"), Some("image_processing"));
        assert_eq!(ex.extract("computer vision"), Some("computer_vision"));
    }

    #[test]
    fn test_arabic_synonyms() {
        let ex = extractor();
        assert_eq!(ex.extract("محاضرة الرياضيات الثانية"), Some("math"));
        assert_eq!(ex.extract("عايز هياكل البيانات"), Some("ds"));
        assert_eq!(ex.extract("الذكاء الاصطناعي الاولى"), Some("ai"));
        assert_eq!(ex.extract("هندسة البرمجيات"), Some("software"));
    }

    #[test]
    fn test_misspellings() {
        let ex = extractor();
        assert_eq!(ex.extract("algorthim lec 1"), Some("algorithm"));
        assert_eq!(ex.extract("mathimatics"), Some("math"));
        assert_eq!(ex.extract("artifical inteligence"), Some("ai"));
    }

    #[test]
    fn test_table_order_wins() {
        // "discrete math" belongs to math, which precedes every later subject.
        let ex = extractor();
        assert_eq!(ex.extract("discrete math and dfa"), Some("math"));
        // Short abbreviations of later subjects fire inside other words.
        assert_eq!(ex.extract("please send"), Some("software"));
    }

    #[test]
    fn test_no_subject() {
        let ex = extractor();
        assert_eq!(ex.extract("hello there"), None);
        assert_eq!(ex.extract(""), None);
    }

    #[test]
    fn test_substitute_tables() {
        let tables = KeywordTables {
            subjects: vec![
                SubjectEntry::new("physics", &["Physics", "فيزياء"]),
                SubjectEntry::new("chemistry", &["chem"]),
            ],
            ordinals: vec![],
        };
        let ex = SubjectExtractor::new(&tables);
        assert_eq!(ex.extract("physics lecture"), Some("physics"));
        assert_eq!(ex.extract("biochem"), Some("chemistry"));
        assert_eq!(ex.extract("math"), None);
    }
}
