//! Heading synonym mapping.
//!
//! Documentation authors title the same idea many ways ("Why It Matters",
//! "Use Cases", "Overview"). [`SectionMappings`] lists the recognized
//! headings per [`SkillField`], in a fixed priority order, and
//! [`SectionMapper`] uses it to locate sections.
//!
//! Matching is case-insensitive. An exact match always beats a substring
//! match; among substring matches, the field listed first wins.

use std::fmt;

use skillgen_content::Section;

/// Canonical skill fields that are filled from mapped sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillField {
    WhenToUse,
    Prerequisites,
    ImplementationSteps,
    KeyPrinciples,
    WhenToApply,
    Techniques,
    Comparison,
    AntiPatterns,
    Troubleshooting,
    RelatedPatterns,
    References,
}

impl SkillField {
    /// Every field, in mapping priority order.
    pub const ALL: [SkillField; 11] = [
        SkillField::WhenToUse,
        SkillField::Prerequisites,
        SkillField::ImplementationSteps,
        SkillField::KeyPrinciples,
        SkillField::WhenToApply,
        SkillField::Techniques,
        SkillField::Comparison,
        SkillField::AntiPatterns,
        SkillField::Troubleshooting,
        SkillField::RelatedPatterns,
        SkillField::References,
    ];

    /// Canonical name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillField::WhenToUse => "WhenToUse",
            SkillField::Prerequisites => "Prerequisites",
            SkillField::ImplementationSteps => "ImplementationSteps",
            SkillField::KeyPrinciples => "KeyPrinciples",
            SkillField::WhenToApply => "WhenToApply",
            SkillField::Techniques => "Techniques",
            SkillField::Comparison => "Comparison",
            SkillField::AntiPatterns => "AntiPatterns",
            SkillField::Troubleshooting => "Troubleshooting",
            SkillField::RelatedPatterns => "RelatedPatterns",
            SkillField::References => "References",
        }
    }
}

impl fmt::Display for SkillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered synonym table, constructed once and passed to the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMappings {
    entries: Vec<(SkillField, Vec<String>)>,
}

impl SectionMappings {
    /// Creates a table from ordered `(field, synonyms)` entries.
    pub fn new(entries: Vec<(SkillField, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Synonyms recognized for `field`. Empty if the field is not mapped.
    pub fn synonyms(&self, field: SkillField) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, synonyms)| synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillField, &[String])> {
        self.entries.iter().map(|(f, s)| (*f, s.as_slice()))
    }
}

impl Default for SectionMappings {
    fn default() -> Self {
        fn entry(field: SkillField, synonyms: &[&str]) -> (SkillField, Vec<String>) {
            (field, synonyms.iter().map(|s| s.to_string()).collect())
        }

        Self::new(vec![
            entry(
                SkillField::WhenToUse,
                &[
                    "Why It Matters",
                    "When to Use",
                    "Use Cases",
                    "What You'll Learn",
                    "Abstract",
                    "Overview",
                ],
            ),
            entry(
                SkillField::Prerequisites,
                &["Prerequisites", "Before You Begin", "Requirements", "What You Need"],
            ),
            entry(
                SkillField::ImplementationSteps,
                &[
                    "Implementation",
                    "Quick Start",
                    "Getting Started",
                    "How to",
                    "Setup",
                    "Installation",
                    "Configuration",
                ],
            ),
            entry(
                SkillField::KeyPrinciples,
                &[
                    "Key Principles",
                    "Core Principles",
                    "Best Practices",
                    "Guidelines",
                    "Principles",
                ],
            ),
            entry(
                SkillField::WhenToApply,
                &["When to Apply", "Decision Matrix", "Choosing", "Selection Criteria"],
            ),
            entry(
                SkillField::Techniques,
                &["Techniques", "Strategies", "Approaches", "Methods"],
            ),
            entry(
                SkillField::Comparison,
                &["Comparison", "Versus", "Trade-offs", "Tradeoffs"],
            ),
            entry(
                SkillField::AntiPatterns,
                &[
                    "Anti-Patterns",
                    "Antipatterns",
                    "Common Mistakes",
                    "Pitfalls",
                    "What Not to Do",
                ],
            ),
            entry(
                SkillField::Troubleshooting,
                &[
                    "Troubleshooting",
                    "Common Issues",
                    "Debugging",
                    "FAQ",
                    "Frequently Asked Questions",
                    "Problems",
                ],
            ),
            entry(
                SkillField::RelatedPatterns,
                &["Related Patterns", "Related", "See Also"],
            ),
            entry(
                SkillField::References,
                &[
                    "References",
                    "Related",
                    "See Also",
                    "Further Reading",
                    "Additional Resources",
                    "Resources",
                ],
            ),
        ])
    }
}

/// Case-insensitive bidirectional containment. Empty strings never match.
fn fuzzy_match(title: &str, keyword: &str) -> bool {
    let title = title.trim().to_lowercase();
    let keyword = keyword.trim().to_lowercase();
    if title.is_empty() || keyword.is_empty() {
        return false;
    }
    title.contains(&keyword) || keyword.contains(&title)
}

/// Maps headings to skill fields and finds mapped sections.
#[derive(Debug, Clone, Default)]
pub struct SectionMapper {
    mappings: SectionMappings,
}

impl SectionMapper {
    /// Creates a mapper over the given synonym table.
    pub fn new(mappings: SectionMappings) -> Self {
        Self { mappings }
    }

    /// The synonym table in use.
    pub fn mappings(&self) -> &SectionMappings {
        &self.mappings
    }

    /// Synonyms for `field`.
    pub fn keywords(&self, field: SkillField) -> &[String] {
        self.mappings.synonyms(field)
    }

    /// Classify a heading title.
    ///
    /// Tries an exact case-insensitive match against every synonym first,
    /// then a substring match in either direction. Ties go to the field
    /// listed first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skillgen_skills::mapper::{SectionMapper, SkillField};
    ///
    /// let mapper = SectionMapper::default();
    /// assert_eq!(mapper.map_section("why it matters"), Some(SkillField::WhenToUse));
    /// assert_eq!(mapper.map_section("Common Pitfalls"), Some(SkillField::AntiPatterns));
    /// assert_eq!(mapper.map_section("Zebra"), None);
    /// ```
    pub fn map_section(&self, title: &str) -> Option<SkillField> {
        let normalized = title.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let exact = self.mappings.iter().find(|(_, synonyms)| {
            synonyms
                .iter()
                .any(|s| s.trim().to_lowercase() == normalized)
        });
        if let Some((field, _)) = exact {
            return Some(field);
        }

        self.mappings
            .iter()
            .find(|(_, synonyms)| synonyms.iter().any(|s| fuzzy_match(title, s)))
            .map(|(field, _)| field)
    }

    /// Find the first section, in document order, whose title matches any
    /// keyword.
    ///
    /// Each top-level section is checked before its direct subsections.
    pub fn find_section<'a, S: AsRef<str>>(
        &self,
        sections: &'a [Section],
        keywords: &[S],
    ) -> Option<&'a Section> {
        let matches = |section: &Section| {
            keywords
                .iter()
                .any(|k| fuzzy_match(&section.title, k.as_ref()))
        };

        for section in sections {
            if matches(section) {
                return Some(section);
            }
            if let Some(sub) = section.subsections.iter().find(|s| matches(s)) {
                return Some(sub);
            }
        }

        None
    }

    /// Find the first section mapped to `field`.
    pub fn find_field_section<'a>(
        &self,
        sections: &'a [Section],
        field: SkillField,
    ) -> Option<&'a Section> {
        self.find_section(sections, self.keywords(field))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, subsections: Vec<Section>) -> Section {
        Section {
            title: title.to_string(),
            level: 2,
            content: format!("{title} body"),
            preamble: format!("{title} body"),
            subsections,
            heading_start: 0,
            content_start: 0,
            content_end: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Table tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_default_table_covers_every_field() {
        let mappings = SectionMappings::default();
        for field in SkillField::ALL {
            assert!(!mappings.synonyms(field).is_empty(), "{field} has no synonyms");
        }
        let order: Vec<SkillField> = mappings.iter().map(|(f, _)| f).collect();
        assert_eq!(order, SkillField::ALL.to_vec());
    }

    #[test]
    fn test_unmapped_field_has_no_synonyms() {
        let mappings = SectionMappings::new(vec![]);
        assert!(mappings.synonyms(SkillField::Comparison).is_empty());
    }

    // ------------------------------------------------------------------------
    // map_section tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_map_exact_case_insensitive() {
        let mapper = SectionMapper::default();
        assert_eq!(mapper.map_section("TROUBLESHOOTING"), Some(SkillField::Troubleshooting));
        assert_eq!(mapper.map_section("Quick Start"), Some(SkillField::ImplementationSteps));
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        // Exact synonyms win over substring matches.
        let mapper = SectionMapper::default();
        assert_eq!(
            mapper.map_section("Related Patterns"),
            Some(SkillField::RelatedPatterns)
        );
        assert_eq!(mapper.map_section("Related"), Some(SkillField::RelatedPatterns));
        assert_eq!(mapper.map_section("Resources"), Some(SkillField::References));
    }

    #[test]
    fn test_anti_patterns_not_techniques() {
        let mapper = SectionMapper::default();
        assert_eq!(
            mapper.map_section("Common Anti-Patterns"),
            Some(SkillField::AntiPatterns)
        );
        assert_eq!(mapper.map_section("Anti-Patterns"), Some(SkillField::AntiPatterns));
        assert_eq!(mapper.map_section("Retry Patterns"), None);
    }

    #[test]
    fn test_substring_priority_is_table_order() {
        // "Troubleshooting" (Troubleshooting) and "Related" (RelatedPatterns)
        // both occur; Troubleshooting is listed first.
        let mapper = SectionMapper::default();
        assert_eq!(
            mapper.map_section("Troubleshooting Related Services"),
            Some(SkillField::Troubleshooting)
        );
        assert_eq!(mapper.map_section("Retry Strategies"), Some(SkillField::Techniques));
    }

    #[test]
    fn test_keyword_contains_title() {
        let mapper = SectionMapper::default();
        assert_eq!(mapper.map_section("Started"), Some(SkillField::ImplementationSteps));
    }

    #[test]
    fn test_empty_title_matches_nothing() {
        let mapper = SectionMapper::default();
        assert_eq!(mapper.map_section(""), None);
        assert_eq!(mapper.map_section("   "), None);
    }

    // ------------------------------------------------------------------------
    // find_section tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_find_checks_parent_before_children() {
        let sections = vec![
            section("Intro", vec![section("Setup", vec![])]),
            section("Installation", vec![]),
        ];
        let mapper = SectionMapper::default();

        let found = mapper
            .find_field_section(&sections, SkillField::ImplementationSteps)
            .unwrap();
        assert_eq!(found.title, "Setup");
    }

    #[test]
    fn test_find_document_order() {
        let sections = vec![
            section("Title", vec![section("FAQ", vec![]), section("Debugging", vec![])]),
        ];
        let mapper = SectionMapper::default();

        let found = mapper
            .find_field_section(&sections, SkillField::Troubleshooting)
            .unwrap();
        assert_eq!(found.title, "FAQ");
    }

    #[test]
    fn test_find_with_custom_keywords() {
        let sections = vec![section("Glossary", vec![])];
        let mapper = SectionMapper::default();

        assert!(mapper.find_section(&sections, &["glossary"]).is_some());
        assert!(mapper.find_section(&sections, &["terms"]).is_none());
    }

    #[test]
    fn test_find_none() {
        let mapper = SectionMapper::default();
        assert!(mapper.find_field_section(&[], SkillField::WhenToUse).is_none());
    }
}
