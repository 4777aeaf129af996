//! Skill extraction.
//!
//! [`SkillExtractor`] turns a parsed [`Document`] into a [`Skill`]:
//!
//! 1. Derive the skill name from the title and the category from the path.
//!    These are the only steps that can fail.
//! 2. Fill each mapped field from the first matching section.
//! 3. Decide which optional sub-documents exist and turn every code block
//!    into a script.
//!
//! Missing sections leave fields empty; they never fail extraction.

use std::path::{Component, Path};

use skillgen_content::{Document, Section, convert_admonitions, extract_first_paragraph};
use skillgen_core::{Error, Result, derive_skill_name};

use crate::filter::{DEFAULT_MAX_CODE_LINES, filter_long_code_blocks};
use crate::mapper::{SectionMapper, SectionMappings, SkillField};
use crate::model::{
    ExamplesDoc, ReferenceDoc, Script, Skill, SkillMetadata, Technique, TroubleshootingDoc,
};

/// Default category directories.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["patterns", "enforce", "build", "secure"];

/// Default published documentation site.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://adaptive-enforcement-lab.com";

/// Default body line count above which `reference.md` is produced.
pub const DEFAULT_REFERENCE_LINE_THRESHOLD: usize = 200;

/// Default cap on extracted techniques.
pub const DEFAULT_MAX_TECHNIQUES: usize = 5;

/// Maximum length of a technique description.
pub const TECHNIQUE_DESCRIPTION_CHARS: usize = 200;

/// Minimum code blocks for `examples.md`.
pub const MIN_EXAMPLE_BLOCKS: usize = 2;

/// Tunables for [`SkillExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Path segments recognized as categories, checked in order.
    pub categories: Vec<String>,
    /// `reference.md` is produced when the body has more newlines than this.
    pub reference_line_threshold: usize,
    /// Fenced blocks longer than this are replaced in filtered fields.
    pub long_code_block_lines: usize,
    /// Maximum techniques kept.
    pub max_techniques: usize,
    /// Base of the published documentation URL.
    pub source_base_url: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            reference_line_threshold: DEFAULT_REFERENCE_LINE_THRESHOLD,
            long_code_block_lines: DEFAULT_MAX_CODE_LINES,
            max_techniques: DEFAULT_MAX_TECHNIQUES,
            source_base_url: DEFAULT_SOURCE_BASE_URL.to_string(),
        }
    }
}

/// Builds skills from parsed documents.
#[derive(Debug, Clone, Default)]
pub struct SkillExtractor {
    config: ExtractorConfig,
    mapper: SectionMapper,
}

fn path_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .collect()
}

impl SkillExtractor {
    /// Creates an extractor with the given configuration and synonym table.
    pub fn new(config: ExtractorConfig, mappings: SectionMappings) -> Self {
        Self {
            config,
            mapper: SectionMapper::new(mappings),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a skill from `doc`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyName`] if the title is blank or yields no name
    /// - [`Error::UnknownCategory`] if no path segment is a category
    pub fn extract(&self, doc: &Document) -> Result<Skill> {
        let title = doc.front_matter.title.trim();
        let name = derive_skill_name(title);
        if name.is_empty() {
            return Err(Error::empty_name(title));
        }

        let category = self
            .category_for(&doc.path)
            .ok_or_else(|| Error::unknown_category(&doc.path))?;

        let mut metadata = SkillMetadata {
            name,
            title: title.to_string(),
            description: doc.front_matter.description.clone(),
            source_url: self.source_url(&doc.path, &category),
            category,
            tags: doc.front_matter.tags.clone(),
            source_path: doc.path.clone(),
            ..Default::default()
        };
        self.fill_mapped_fields(doc, &mut metadata);

        let examples = (doc.code_blocks.len() >= MIN_EXAMPLE_BLOCKS).then(|| ExamplesDoc {
            code_blocks: doc.code_blocks.clone(),
        });

        let troubleshooting = self
            .mapper
            .find_field_section(&doc.sections, SkillField::Troubleshooting)
            .map(|section| self.full_content(section))
            .filter(|content| !content.is_empty())
            .map(|content| TroubleshootingDoc { content });

        let reference = (doc.line_count() > self.config.reference_line_threshold).then(|| {
            ReferenceDoc {
                content: convert_admonitions(&doc.raw_content),
                tables: doc.tables.clone(),
                diagrams: doc.mermaid.clone(),
            }
        });

        let scripts = doc.code_blocks.iter().map(Script::from).collect();

        log::debug!(
            "extracted skill name={} category={} techniques={} scripts={}",
            metadata.name,
            metadata.category,
            metadata.techniques.len(),
            doc.code_blocks.len()
        );

        Ok(Skill {
            metadata,
            examples,
            troubleshooting,
            reference,
            scripts,
        })
    }

    /// First path segment that names a configured category.
    pub fn category_for(&self, path: &Path) -> Option<String> {
        path_segments(path)
            .into_iter()
            .find(|segment| self.config.categories.iter().any(|c| c.as_str() == *segment))
            .map(String::from)
    }

    /// Published URL of the document: `<base>/<category>/<topic>/`.
    ///
    /// Falls back to the base URL when no segment follows the category.
    pub fn source_url(&self, path: &Path, category: &str) -> String {
        let base = self.config.source_base_url.trim_end_matches('/');
        let segments = path_segments(path);

        segments
            .iter()
            .position(|s| *s == category)
            .and_then(|i| segments.get(i + 1))
            .map(|topic| format!("{base}/{category}/{topic}/"))
            .unwrap_or_else(|| base.to_string())
    }

    fn fill_mapped_fields(&self, doc: &Document, metadata: &mut SkillMetadata) {
        let find = |field| self.mapper.find_field_section(&doc.sections, field);

        metadata.when_to_use = match find(SkillField::WhenToUse) {
            Some(section) => self.full_content(section),
            None => convert_admonitions(&doc.introduction).trim().to_string(),
        };

        if let Some(section) = find(SkillField::Prerequisites) {
            metadata.prerequisites = self.full_content(section);
        }
        if let Some(section) = find(SkillField::ImplementationSteps) {
            metadata.implementation_steps = self.filtered_content(section);
        }
        if let Some(section) = find(SkillField::KeyPrinciples) {
            metadata.key_principles = self.full_content(section);
        }
        if let Some(section) = find(SkillField::WhenToApply) {
            metadata.when_to_apply = self.filtered_content(section);
        }
        if let Some(section) = find(SkillField::Techniques) {
            // "Related Approaches" and the like list links, not techniques
            if !section.title.to_lowercase().contains("related") {
                metadata.techniques = self.techniques(section);
            }
        }
        if let Some(section) = find(SkillField::Comparison) {
            metadata.comparison = self.filtered_content(section);
        }
        if let Some(section) = find(SkillField::AntiPatterns) {
            metadata.anti_patterns = self.filtered_content(section);
        }
        if let Some(section) = find(SkillField::RelatedPatterns) {
            metadata.related_patterns = related_patterns(&section.content);
        }
        if let Some(section) = find(SkillField::References) {
            metadata.references = self.full_content(section);
        }
    }

    /// Section preamble plus each direct subsection under a `###` heading,
    /// all admonition-converted.
    fn full_content(&self, section: &Section) -> String {
        let mut parts = Vec::with_capacity(section.subsections.len() + 1);

        if !section.preamble.is_empty() {
            parts.push(convert_admonitions(&section.preamble));
        }
        for sub in &section.subsections {
            parts.push(format!(
                "### {}\n\n{}",
                sub.title,
                convert_admonitions(&sub.content)
            ));
        }

        parts.join("\n\n").trim().to_string()
    }

    fn filtered_content(&self, section: &Section) -> String {
        filter_long_code_blocks(
            &self.full_content(section),
            self.config.long_code_block_lines,
        )
    }

    fn techniques(&self, section: &Section) -> Vec<Technique> {
        let technique = |name: &str, content: &str| Technique {
            name: name.to_string(),
            description: extract_first_paragraph(content, TECHNIQUE_DESCRIPTION_CHARS),
            content: convert_admonitions(content),
        };

        if section.subsections.is_empty() {
            if section.content.is_empty() {
                return Vec::new();
            }
            return vec![technique(&section.title, &section.content)];
        }

        section
            .subsections
            .iter()
            .take(self.config.max_techniques)
            .map(|sub| technique(&sub.title, &sub.content))
            .collect()
    }
}

/// Pattern names from bracketed link text, one per line at most.
///
/// Text containing `!` is skipped so embedded images are not mistaken for
/// patterns.
fn related_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let start = line.find('[')?;
            let end = line.find(']')?;
            (end > start).then(|| &line[start + 1..end])
        })
        .filter(|name| !name.is_empty() && !name.contains('!'))
        .map(String::from)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use skillgen_content::DocumentReader;

    fn parse(path: &str, content: &str) -> Document {
        DocumentReader::new().parse(path, content).unwrap()
    }

    fn extract(path: &str, content: &str) -> Result<Skill> {
        SkillExtractor::default().extract(&parse(path, content))
    }

    fn code_blocks(count: usize) -> String {
        (0..count)
            .map(|i| format!("```bash\necho {i}\n```\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ------------------------------------------------------------------------
    // Name and category
    // ------------------------------------------------------------------------

    #[test]
    fn test_blank_title_is_empty_name() {
        let err = extract("docs/patterns/x/index.md", "---\ntitle: \"  \"\n---\n# X\n").unwrap_err();
        assert!(matches!(err, Error::EmptyName { .. }));
    }

    #[test]
    fn test_symbol_title_is_empty_name() {
        let err = extract("docs/patterns/x/index.md", "---\ntitle: \"!!!\"\n---\n").unwrap_err();
        assert!(matches!(err, Error::EmptyName { .. }));
    }

    #[test]
    fn test_unknown_category() {
        let err = extract("docs/blog/post/index.md", "---\ntitle: Post\n---\n").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { .. }));
    }

    #[test]
    fn test_category_matches_whole_segment() {
        let extractor = SkillExtractor::default();
        assert_eq!(
            extractor.category_for(Path::new("/docs/secure/sbom/index.md")),
            Some("secure".to_string())
        );
        assert_eq!(extractor.category_for(Path::new("/docs/patterns-old/index.md")), None);
    }

    #[test]
    fn test_first_category_segment_wins() {
        let extractor = SkillExtractor::default();
        assert_eq!(
            extractor.category_for(Path::new("build/patterns/index.md")),
            Some("build".to_string())
        );
    }

    // ------------------------------------------------------------------------
    // Source URL
    // ------------------------------------------------------------------------

    #[test]
    fn test_source_url_with_topic() {
        let extractor = SkillExtractor::default();
        assert_eq!(
            extractor.source_url(Path::new("/docs/patterns/idempotency/index.md"), "patterns"),
            "https://adaptive-enforcement-lab.com/patterns/idempotency/"
        );
    }

    #[test]
    fn test_source_url_without_topic() {
        let extractor = SkillExtractor::new(
            ExtractorConfig {
                source_base_url: "https://docs.example.com/".into(),
                ..Default::default()
            },
            SectionMappings::default(),
        );
        assert_eq!(
            extractor.source_url(Path::new("patterns"), "patterns"),
            "https://docs.example.com"
        );
    }

    // ------------------------------------------------------------------------
    // Mapped fields
    // ------------------------------------------------------------------------

    #[test]
    fn test_when_to_use_falls_back_to_introduction() {
        let skill = extract(
            "docs/patterns/x/index.md",
            "---\ntitle: X\n---\n# X\n\n!!! note \"Intro\"\n    Hello.\n\n## Details\n\nMore.\n",
        )
        .unwrap();
        assert_eq!(skill.metadata.when_to_use, "> **Intro**\n>\n> Hello.");
    }

    #[test]
    fn test_full_content_includes_subsections() {
        let md = "---\ntitle: X\n---\n## Key Principles\n\nLead.\n\n### One\n\nFirst.\n\n### Two\n\nSecond.\n";
        let skill = extract("docs/patterns/x/index.md", md).unwrap();

        assert_eq!(
            skill.metadata.key_principles,
            "Lead.\n\n### One\n\nFirst.\n\n### Two\n\nSecond."
        );
    }

    #[test]
    fn test_implementation_filters_long_code() {
        let long: String = (0..11).map(|i| format!("step {i}\n")).collect();
        let md = format!(
            "---\ntitle: X\n---\n## Implementation\n\nDo it.\n\n```bash\n{long}```\n\n## Key Principles\n\n```bash\n{long}```\n"
        );
        let skill = extract("docs/patterns/x/index.md", &md).unwrap();

        assert!(skill.metadata.implementation_steps.contains("examples.md"));
        assert!(!skill.metadata.implementation_steps.contains("step 3"));
        // Unfiltered field keeps the block
        assert!(skill.metadata.key_principles.contains("step 3"));
    }

    #[test]
    fn test_missing_sections_leave_fields_empty() {
        let skill = extract("docs/patterns/x/index.md", "---\ntitle: X\n---\nJust text.\n").unwrap();

        assert!(skill.metadata.when_to_use.is_empty());
        assert!(skill.metadata.prerequisites.is_empty());
        assert!(skill.metadata.techniques.is_empty());
        assert!(skill.troubleshooting.is_none());
    }

    // ------------------------------------------------------------------------
    // Techniques
    // ------------------------------------------------------------------------

    #[test]
    fn test_techniques_capped_at_five() {
        let subs: String = (1..=7).map(|i| format!("### T{i}\n\nDoes {i}.\n\n")).collect();
        let md = format!("---\ntitle: X\n---\n## Techniques\n\n{subs}");
        let skill = extract("docs/patterns/x/index.md", &md).unwrap();

        let names: Vec<&str> = skill.metadata.techniques.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["T1", "T2", "T3", "T4", "T5"]);
        assert_eq!(skill.metadata.techniques[0].description, "Does 1.");
    }

    #[test]
    fn test_techniques_whole_section_without_subsections() {
        let md = "---\ntitle: X\n---\n## Strategies\n\nRetry then fail.\n\nDetails.\n";
        let skill = extract("docs/patterns/x/index.md", md).unwrap();

        assert_eq!(skill.metadata.techniques.len(), 1);
        assert_eq!(skill.metadata.techniques[0].name, "Strategies");
        assert_eq!(skill.metadata.techniques[0].description, "Retry then fail.");
    }

    #[test]
    fn test_related_patterns_section_not_techniques() {
        let md = "---\ntitle: X\n---\n## Related Patterns\n\n- [Fail Fast](../fail-fast/)\n- [Retry](../retry/) and [Other](x)\n- ![diagram](img.png)\n- [](empty)\n";
        let skill = extract("docs/patterns/x/index.md", md).unwrap();

        assert!(skill.metadata.techniques.is_empty());
        assert_eq!(skill.metadata.related_patterns, vec!["Fail Fast", "Retry", "diagram"]);
    }

    #[test]
    fn test_anti_patterns_before_techniques() {
        let md = "---\ntitle: X\n---\n## Anti-Patterns\n\n### Retry Forever\n\nNever stops.\n\n## Techniques\n\n### Backoff\n\nWait longer each time.\n";
        let skill = extract("docs/patterns/x/index.md", md).unwrap();

        let names: Vec<&str> = skill.metadata.techniques.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Backoff"]);
        assert!(skill.metadata.anti_patterns.contains("### Retry Forever"));
        assert!(!skill.metadata.anti_patterns.contains("Backoff"));
    }

    #[test]
    fn test_related_skips_bang_names() {
        assert_eq!(related_patterns("[Wow!](x)\n[Ok](y)\n] before [\n"), vec!["Ok"]);
    }

    // ------------------------------------------------------------------------
    // Sub-documents and scripts
    // ------------------------------------------------------------------------

    #[test]
    fn test_two_code_blocks_produce_examples() {
        let md = format!("---\ntitle: X\n---\n{}", code_blocks(2));
        let skill = extract("docs/patterns/x/index.md", &md).unwrap();
        assert_eq!(skill.examples.unwrap().code_blocks.len(), 2);
    }

    #[test]
    fn test_one_code_block_no_examples() {
        let md = format!("---\ntitle: X\n---\n{}", code_blocks(1));
        let skill = extract("docs/patterns/x/index.md", &md).unwrap();

        assert!(skill.examples.is_none());
        assert_eq!(skill.scripts.len(), 1);
        assert_eq!(skill.scripts[0].path, "scripts/example-1.sh");
    }

    #[test]
    fn test_troubleshooting_requires_content() {
        let empty = "---\ntitle: X\n---\n## Troubleshooting\n\n## Next\n\ntext\n";
        assert!(extract("docs/patterns/x/index.md", empty).unwrap().troubleshooting.is_none());

        let full = "---\ntitle: X\n---\n## Troubleshooting\n\nCheck logs.\n";
        let skill = extract("docs/patterns/x/index.md", full).unwrap();
        assert_eq!(skill.troubleshooting.unwrap().content, "Check logs.");
    }

    #[test]
    fn test_reference_threshold() {
        let config = ExtractorConfig {
            reference_line_threshold: 5,
            ..Default::default()
        };
        let extractor = SkillExtractor::new(config, SectionMappings::default());

        let short = parse("docs/patterns/x/index.md", "---\ntitle: X\n---\na\nb\nc\nd\ne\n");
        assert!(extractor.extract(&short).unwrap().reference.is_none());

        let long = parse(
            "docs/patterns/x/index.md",
            "---\ntitle: X\n---\n| A |\n|---|\n| 1 |\nd\ne\nf\n",
        );
        let reference = extractor.extract(&long).unwrap().reference.unwrap();
        assert_eq!(reference.tables.len(), 1);
    }

    #[test]
    fn test_graceful_degradation_end_to_end() {
        let md = r#"---
title: "Graceful Degradation"
description: Keep serving when dependencies fail
---

# Graceful Degradation

## Why It Matters

Partial service beats no service.

```go
cache.Get(key)
```

```yaml
fallback: true
```

```bash
curl /health
```
"#;
        let skill = extract("docs/patterns/graceful-degradation/index.md", md).unwrap();

        assert_eq!(skill.metadata.name, "graceful-degradation");
        assert_eq!(skill.metadata.category, "patterns");
        assert!(skill.metadata.when_to_use.starts_with("Partial service beats no service."));
        assert_eq!(skill.examples.as_ref().unwrap().code_blocks.len(), 3);
        let names: Vec<&str> = skill.scripts.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(names, vec!["example-1.go", "example-2.yaml", "example-3.sh"]);
        assert_eq!(
            skill.metadata.source_url,
            "https://adaptive-enforcement-lab.com/patterns/graceful-degradation/"
        );
    }
}
