//! Entity naming: the four derived forms every template needs.
//!
//! An [`EntityName`] is computed once per run from the raw name the user
//! typed and is read-only afterwards. The regular English suffix rules come
//! from `Inflector`; a small irregular table is consulted first because the
//! suffix rules get words like `person` wrong. Studly and snake forms follow
//! Laravel's `Str` helpers, so `API` stays `API` and `Project2` maps to the
//! `project2s` table the model expects.
//!
//! | Form            | `project`  | `blog_post`  |
//! |-----------------|------------|--------------|
//! | studly          | `Project`  | `BlogPost`   |
//! | camel           | `project`  | `blogPost`   |
//! | plural studly   | `Projects` | `BlogPosts`  |
//! | plural lower    | `projects` | `blogposts`  |

use std::fmt;

use inflector::Inflector;
use serde::Serialize;

use crate::domain::error::DomainError;

/// `(singular, plural)` pairs the suffix rules cannot produce.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("criterion", "criteria"),
    ("datum", "data"),
];

/// The entity being scaffolded, with every naming form precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityName {
    raw: String,
    studly: String,
    camel: String,
    plural_studly: String,
    plural_lower: String,
}

impl EntityName {
    /// Derive all naming forms from a raw entity name.
    ///
    /// Fails with [`DomainError::InvalidEntityName`] when the name is empty,
    /// does not start with a letter, or contains characters other than ASCII
    /// letters, digits, `_`, `-` and spaces.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        validate(trimmed)?;

        let studly = studly_case(trimmed);
        let camel = studly.to_camel_case();
        let plural_studly = plural_studly(&studly);
        let plural_lower = plural_studly.to_lowercase();

        Ok(Self {
            raw: trimmed.to_string(),
            studly,
            camel,
            plural_studly,
            plural_lower,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Type/class identifier, e.g. `Project`.
    pub fn studly(&self) -> &str {
        &self.studly
    }

    /// Local variable identifier, e.g. `project`.
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// e.g. `Projects`.
    pub fn plural_studly(&self) -> &str {
        &self.plural_studly
    }

    /// Route segment and view folder name, e.g. `projects`.
    pub fn plural_lower(&self) -> &str {
        &self.plural_lower
    }

    /// Database table name, e.g. `user_profiles` for `UserProfile`.
    pub fn table(&self) -> String {
        snake_case(&self.plural_studly)
    }

    pub fn controller(&self) -> String {
        format!("{}Controller", self.studly)
    }

    pub fn request(&self) -> String {
        format!("{}Request", self.studly)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.studly)
    }
}

fn validate(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidEntityName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name cannot be empty"));
    };
    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')))
    {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }
    Ok(())
}

// ── Inflection helpers ────────────────────────────────────────────────────────

/// Upper-case the first letter of each `_`, `-` or space separated word and
/// join. The rest of each word is kept, so `blogPost` and `API` survive.
pub fn studly_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .flat_map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase())
                .into_iter()
                .chain(chars)
        })
        .collect()
}

/// `UserProfiles` → `user_profiles`. A word boundary is an upper-case letter
/// after a lower-case letter or digit; digits never start a word.
fn snake_case(studly: &str) -> String {
    let mut out = String::with_capacity(studly.len() + 4);
    let mut prev: Option<char> = None;
    for c in studly.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}

/// Pluralise a single English noun, preserving a leading capital.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    let plural = IRREGULAR_NOUNS
        .iter()
        .find(|(singular, _)| *singular == lower)
        .map_or_else(|| lower.to_plural(), |(_, plural)| (*plural).to_string());
    match_leading_case(word, plural)
}

/// Singularise a single English noun, preserving a leading capital.
pub fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    let singular = IRREGULAR_NOUNS
        .iter()
        .find(|(_, plural)| *plural == lower)
        .map_or_else(|| lower.to_singular(), |(singular, _)| (*singular).to_string());
    match_leading_case(word, singular)
}

/// `UserProfile` → `UserProfiles`: only the last word is pluralised.
pub fn plural_studly(studly: &str) -> String {
    let (head, last) = split_last_word(studly);
    format!("{head}{}", pluralize(last))
}

/// Related-entity type for a relation name: `tasks` → `Task`,
/// `blog_posts` → `BlogPost`.
pub fn related_entity(relation_name: &str) -> String {
    let (head, last) = split_last_word(relation_name);
    studly_case(&format!("{head}{}", singularize(last)))
}

/// Split at the start of the last word: after the last `_`, `-` or space, or
/// at the last upper-case letter for camel/studly names.
fn split_last_word(name: &str) -> (&str, &str) {
    let after_separator = name
        .rfind(['_', '-', ' '])
        .map_or(0, |idx| idx + 1);
    let tail = &name[after_separator..];
    let camel_boundary = tail
        .char_indices()
        .filter(|(_, c)| c.is_uppercase())
        .map(|(idx, _)| idx)
        .last()
        .unwrap_or(0);
    name.split_at(after_separator + camel_boundary)
}

fn match_leading_case(original: &str, word: String) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return word;
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_forms_for_simple_name() {
        let name = EntityName::parse("project").unwrap();
        assert_eq!(name.studly(), "Project");
        assert_eq!(name.camel(), "project");
        assert_eq!(name.plural_studly(), "Projects");
        assert_eq!(name.plural_lower(), "projects");
        assert_eq!(name.table(), "projects");
        assert_eq!(name.controller(), "ProjectController");
        assert_eq!(name.request(), "ProjectRequest");
    }

    #[test]
    fn derives_forms_for_compound_names() {
        for raw in ["blog_post", "blog-post", "blog post", "blogPost", "BlogPost"] {
            let name = EntityName::parse(raw).unwrap();
            assert_eq!(name.studly(), "BlogPost", "studly for {raw}");
            assert_eq!(name.camel(), "blogPost", "camel for {raw}");
            assert_eq!(name.plural_studly(), "BlogPosts", "plural for {raw}");
        }
    }

    #[test]
    fn plural_lower_is_lowercased_plural_studly() {
        let name = EntityName::parse("user_profile").unwrap();
        assert_eq!(name.plural_lower(), "userprofiles");
        assert_eq!(name.table(), "user_profiles");
    }

    #[test]
    fn regular_suffix_rules() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("Task"), "Tasks");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("tasks"), "task");
    }

    #[test]
    fn irregular_table_wins_over_suffix_rules() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("Child"), "Children");
        assert_eq!(singularize("people"), "person");
        assert_eq!(
            EntityName::parse("person").unwrap().plural_lower(),
            "people"
        );
    }

    #[test]
    fn related_entity_singularizes_then_studly_cases() {
        assert_eq!(related_entity("tasks"), "Task");
        assert_eq!(related_entity("blog_posts"), "BlogPost");
        assert_eq!(related_entity("blogPosts"), "BlogPost");
        assert_eq!(related_entity("people"), "Person");
        assert_eq!(related_entity("owner"), "Owner");
        assert_eq!(related_entity("data"), "Datum");
    }

    #[test]
    fn table_keeps_digits_attached_to_their_word() {
        assert_eq!(EntityName::parse("project2").unwrap().table(), "project2s");
        assert_eq!(EntityName::parse("order2_item").unwrap().table(), "order2_items");
        assert_eq!(EntityName::parse("blogPost").unwrap().table(), "blog_posts");
    }

    #[test]
    fn studly_keeps_upper_case_acronyms() {
        let name = EntityName::parse("API").unwrap();
        assert_eq!(name.studly(), "API");
        assert_eq!(name.controller(), "APIController");
        assert_eq!(studly_case("api_key"), "ApiKey");
        assert_eq!(studly_case("user-profile settings"), "UserProfileSettings");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            EntityName::parse(""),
            Err(DomainError::InvalidEntityName { .. })
        ));
        assert!(EntityName::parse("   ").is_err());
    }

    #[test]
    fn rejects_unsafe_characters() {
        for raw in ["pro/ject", "project;", "9lives", "_hidden", "name.php"] {
            assert!(
                matches!(
                    EntityName::parse(raw),
                    Err(DomainError::InvalidEntityName { .. })
                ),
                "expected rejection for {raw}"
            );
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            EntityName::parse("order_item").unwrap(),
            EntityName::parse("order_item").unwrap()
        );
    }
}
