//! Subject and ordinal keyword tables.
//!
//! Tables are plain data. They are built once at startup (compiled-in
//! defaults or a JSON file), validated by [`KeywordTables::validate`], and
//! then shared read-only by the extractors. Entry order is match precedence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::BuildError;

/// A canonical subject and the surface forms that identify it in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Canonical identifier, also the token used in catalog file names.
    pub id: String,
    /// Surface forms checked in order.
    pub synonyms: Vec<String>,
}

impl SubjectEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            id: id.into(),
            synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A lecture number and the words that denote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalEntry {
    pub number: u32,
    pub synonyms: Vec<String>,
}

impl OrdinalEntry {
    #[must_use]
    pub fn new(number: u32, synonyms: &[&str]) -> Self {
        Self {
            number,
            synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The full lookup configuration consumed by the extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTables {
    pub subjects: Vec<SubjectEntry>,
    pub ordinals: Vec<OrdinalEntry>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            ordinals: default_ordinals(),
        }
    }
}

impl KeywordTables {
    /// Parse tables from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a `KeywordTables`.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Tables(e.to_string()))
    }

    /// Check the table invariants against the accepted lecture range `1..=max_lecture`.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self, max_lecture: u32) -> Result<(), BuildError> {
        let mut ids = HashSet::new();
        for subject in &self.subjects {
            if subject.id.trim().is_empty() {
                return Err(BuildError::EmptySubject);
            }
            if !ids.insert(subject.id.to_lowercase()) {
                return Err(BuildError::DuplicateSubject(subject.id.clone()));
            }
            if subject.synonyms.iter().any(|s| s.trim().is_empty()) {
                return Err(BuildError::EmptySynonym(subject.id.clone()));
            }
        }

        let mut numbers = HashSet::new();
        for ordinal in &self.ordinals {
            if ordinal.number == 0 || ordinal.number > max_lecture {
                return Err(BuildError::OrdinalOutOfRange {
                    number: ordinal.number,
                    max: max_lecture,
                });
            }
            if !numbers.insert(ordinal.number) {
                return Err(BuildError::DuplicateOrdinal(ordinal.number));
            }
            if ordinal.synonyms.iter().any(|s| s.trim().is_empty()) {
                return Err(BuildError::EmptySynonym(ordinal.number.to_string()));
            }
        }

        Ok(())
    }

    /// Look up a subject entry by canonical id.
    #[must_use]
    pub fn subject(&self, id: &str) -> Option<&SubjectEntry> {
        self.subjects.iter().find(|s| s.id == id)
    }
}

/// Default subject table. Order matters: the first subject with a matching
/// synonym wins, so short abbreviations of later subjects (`se`, `cv`) only
/// fire when no earlier subject matched.
#[must_use]
pub fn default_subjects() -> Vec<SubjectEntry> {
    vec![
        SubjectEntry::new(
            "algorithm",
            &[
                "algorithm",
                "algorithms",
                "algoritm",
                "algoritms",
                "algorthim",
                "algorthims",
                "algorhythm",
                "algorythm",
                "algo",
                "alg",
                "algoo",
                "algorit",
                "analysis of algorithm",
                "design and analysis of algorithms",
                "daa",
                "daaa",
                "algorithmz",
                "algorithims",
                "algorithem",
                "الالجوريزم",
                "الالگوريزم",
                "الالوجريزم",
                "الجواريزم",
                "الاجوريزم",
                "الاجوريثم",
                "الخوارزميات",
                "الخوارزميأت",
                "خوارزميات",
                "خوارزميه",
                "خوارزمي",
                "الخوازرميات",
                "الخوارزمياتت",
            ],
        ),
        SubjectEntry::new(
            "math",
            &[
                "math",
                "maths",
                "mathematics",
                "mathematic",
                "mathemathics",
                "mathmatic",
                "mathimatics",
                "applied math",
                "discrete math",
                "discret math",
                "descrete math",
                "disc math",
                "calc",
                "calculus",
                "calculs",
                "linear algebra",
                "lin algebra",
                "ماث",
                "مات",
                "ماثس",
                "رياضة",
                "رياضيات",
                "رياظيات",
                "رياضيت",
                "رياضه",
                "رياضيأت",
                "رياضة متقطعة",
                "رياضة متقطعه",
                "ديسكريت ماث",
                "دسكريت ماث",
                "دسكريت",
                "تفاضل",
                "تكامل",
                "جبر",
            ],
        ),
        SubjectEntry::new(
            "ds",
            &[
                "data structure",
                "data structures",
                "data stucture",
                "data stracture",
                "data structre",
                "data sturcture",
                "data strcture",
                "data strucure",
                "ds",
                "d.s",
                "dsa",
                "داتا ستراكشر",
                "داتا ستركتشر",
                "داتا ستراكتشر",
                "داتا ستراكتور",
                "داتا ستركتور",
                "داتا ستراكشرز",
                "داتاستراكشر",
                "هياكل البيانات",
                "هياكل البينات",
                "هيكل البيانات",
                "هيكل الداتا",
            ],
        ),
        SubjectEntry::new(
            "automata",
            &[
                "automata",
                "automatas",
                "automatta",
                "automata theory",
                "automata theroy",
                "theory of computation",
                "theroy of computation",
                "theory computation",
                "toc",
                "t.o.c",
                "tooc",
                "finite automata",
                "finite automatta",
                "dfa",
                "nfa",
                "pda",
                "pushdown automata",
                "push down automata",
                "turing machine",
                "turing mashine",
                "اوتوماتا",
                "أوتوماتا",
                "اوتوماته",
                "نظرية الحوسبة",
                "نظرية الحوسبه",
                "نظرية الحسابات",
                "نظرية الالات",
                "نظريه الالات",
                "لغات شكلية",
                "لغات شكليه",
                "لغات صورية",
            ],
        ),
        SubjectEntry::new(
            "ai",
            &[
                "ai",
                "a.i",
                "artificial intelligence",
                "artifical intelligence",
                "artificial inteligence",
                "artificial intellegence",
                "artifical inteligence",
                "machine intelligence",
                "intelligent systems",
                "ذكاء اصطناعي",
                "الذكاء الاصطناعي",
                "الزكاء الاصطناعي",
                "الذكاء الاصتناعي",
                "ذكاء صناعي",
                "زكاء اصطناعي",
                "aii",
                "aie",
            ],
        ),
        SubjectEntry::new(
            "software",
            &[
                "software",
                "softwear",
                "sofware",
                "soft ware",
                "software engineering",
                "softwear engineering",
                "sofware engineering",
                "software eng",
                "se",
                "s.e",
                "software development",
                "soft dev",
                "sw development",
                "هندسة البرمجيات",
                "هندسه البرمجيات",
                "هندسة البرمجات",
                "تطوير البرمجيات",
                "تطوير البرمجات",
                "سوفت وير",
                "سوفتوير",
                "سوفت ويرر",
            ],
        ),
        SubjectEntry::new(
            "image_processing",
            &[
                "image processing",
                "img processing",
                "image proccessing",
                "image procesing",
                "image proccesing",
                "digital image processing",
                "dip",
                "image analysis",
                "img analysis",
                "معالجة الصور",
                "معالجه الصور",
                "معالجة الصوره",
                "معالجة الصورر",
                "معالجة صوره",
                "ديجيتال ايمدج بروسيسنج",
                "ايمدج بروسيسنج",
            ],
        ),
        SubjectEntry::new(
            "computer_vision",
            &[
                "computer vision",
                "computer vission",
                "computer vison",
                "cmp vision",
                "cv",
                "c.v",
                "machine vision",
                "رؤية الحاسوب",
                "رؤية الحاسب",
                "رؤية الكمبيوتر",
                "روية الحاسوب",
                "رؤيه الحاسوب",
                "كمبيوتر فيجن",
                "كومبيوتر فيجن",
                "كمبيوتر ڤيجن",
            ],
        ),
    ]
}

/// Default ordinal table for lectures 1 through 10.
///
/// Lecture titles are feminine in Arabic (محاضرة), so both the `ة` and `ه`
/// endings are listed, along with the Egyptian `ت` for `ث`.
#[must_use]
pub fn default_ordinals() -> Vec<OrdinalEntry> {
    vec![
        OrdinalEntry::new(
            1,
            &[
                "1", "one", "first", "1st", "الأولى", "الاولى", "اولى", "الاولي", "الأولي",
                "اولي", "الأول", "الاول", "واحد", "oula", "awel", "wa7da",
            ],
        ),
        OrdinalEntry::new(
            2,
            &[
                "2", "two", "second", "2nd", "الثانية", "الثانيه", "التانية", "التانيه", "ثانية",
                "ثانيه", "تانية", "تانيه", "الثاني", "التاني", "اتنين", "اثنين", "tanya", "tania",
                "tanyah", "tany", "tani", "etnein",
            ],
        ),
        OrdinalEntry::new(
            3,
            &[
                "3", "three", "third", "3rd", "الثالثة", "الثالثه", "التالتة", "التالته", "ثالثة",
                "ثالثه", "تالتة", "تالته", "الثالث", "التالت", "ثلاثة", "تلاتة", "talta", "talata",
                "talet",
            ],
        ),
        OrdinalEntry::new(
            4,
            &[
                "4", "four", "fourth", "4th", "الرابعة", "الرابعه", "رابعة", "رابعه", "الرابع",
                "أربعة", "اربعة", "اربعه", "rab3a", "raba3a", "rabe3", "arba3a",
            ],
        ),
        OrdinalEntry::new(
            5,
            &[
                "5", "five", "fifth", "5th", "الخامسة", "الخامسه", "خامسة", "خامسه", "الخامس",
                "خمسة", "خمسه", "khamsa", "5amsa", "khames",
            ],
        ),
        OrdinalEntry::new(
            6,
            &[
                "6", "six", "sixth", "6th", "السادسة", "السادسه", "سادسة", "سادسه", "السادس",
                "ستة", "سته", "sadsa", "sitta", "sades",
            ],
        ),
        OrdinalEntry::new(
            7,
            &[
                "7", "seven", "seventh", "7th", "السابعة", "السابعه", "سابعة", "سابعه", "السابع",
                "سبعة", "سبعه", "sab3a", "saba3a", "sabe3",
            ],
        ),
        OrdinalEntry::new(
            8,
            &[
                "8", "eight", "eighth", "8th", "الثامنة", "الثامنه", "التامنة", "التامنه", "ثامنة",
                "تامنة", "الثامن", "التامن", "ثمانية", "تمانية", "tamna", "tamanya", "tamen",
            ],
        ),
        OrdinalEntry::new(
            9,
            &[
                "9", "nine", "ninth", "9th", "التاسعة", "التاسعه", "تاسعة", "تاسعه", "التاسع",
                "تسعة", "تسعه", "tas3a", "tes3a", "tase3",
            ],
        ),
        OrdinalEntry::new(
            10,
            &[
                "10", "ten", "tenth", "10th", "العاشرة", "العاشره", "عاشرة", "عاشره", "العاشر",
                "عشرة", "عشره", "3ashra", "ashra", "3ashera",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid() {
        let tables = KeywordTables::default();
        assert!(tables.validate(50).is_ok());
    }

    #[test]
    fn test_default_subject_order() {
        let ids: Vec<_> = default_subjects().into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "algorithm",
                "math",
                "ds",
                "automata",
                "ai",
                "software",
                "image_processing",
                "computer_vision"
            ]
        );
    }

    #[test]
    fn test_default_synonyms_are_lowercase() {
        let tables = KeywordTables::default();
        let all = tables
            .subjects
            .iter()
            .flat_map(|s| &s.synonyms)
            .chain(tables.ordinals.iter().flat_map(|o| &o.synonyms));
        for synonym in all {
            assert_eq!(synonym, &synonym.to_lowercase());
        }
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let tables = KeywordTables {
            subjects: vec![
                SubjectEntry::new("math", &["math"]),
                SubjectEntry::new("Math", &["maths"]),
            ],
            ordinals: vec![],
        };
        assert!(matches!(
            tables.validate(50),
            Err(BuildError::DuplicateSubject(id)) if id == "Math"
        ));
    }

    #[test]
    fn test_ordinal_range_enforced() {
        let zero = KeywordTables {
            subjects: vec![],
            ordinals: vec![OrdinalEntry::new(0, &["zeroth"])],
        };
        assert!(matches!(
            zero.validate(50),
            Err(BuildError::OrdinalOutOfRange { number: 0, max: 50 })
        ));

        let too_big = KeywordTables {
            subjects: vec![],
            ordinals: vec![OrdinalEntry::new(12, &["twelfth"])],
        };
        assert!(too_big.validate(10).is_err());
        assert!(too_big.validate(12).is_ok());
    }

    #[test]
    fn test_duplicate_ordinal_rejected() {
        let tables = KeywordTables {
            subjects: vec![],
            ordinals: vec![
                OrdinalEntry::new(2, &["second"]),
                OrdinalEntry::new(2, &["two"]),
            ],
        };
        assert!(matches!(
            tables.validate(50),
            Err(BuildError::DuplicateOrdinal(2))
        ));
    }

    #[test]
    fn test_empty_synonym_rejected() {
        let tables = KeywordTables {
            subjects: vec![SubjectEntry::new("math", &["math", " "])],
            ordinals: vec![],
        };
        assert!(matches!(
            tables.validate(50),
            Err(BuildError::EmptySynonym(_))
        ));
    }

    #[test]
    fn test_from_json() -> Result<(), BuildError> {
        let tables = KeywordTables::from_json(
            r#"{"subjects":[{"id":"physics","synonyms":["physics","فيزياء"]}],
                "ordinals":[{"number":1,"synonyms":["first"]}]}"#,
        )?;
        assert_eq!(tables.subjects.len(), 1);
        assert_eq!(
            tables.subject("physics").map(|s| s.synonyms.len()),
            Some(2)
        );
        assert!(KeywordTables::from_json("{not json").is_err());
        Ok(())
    }
}
