//! Explicit structured directives extracted from prompt sentences.
//!
//! Directive extraction is keyword/position based, idempotent, and never
//! invents ingredients: a referenced item that is not yet declared is
//! auto-created by the interpreter, not silently dropped.

use crate::core::types::Slug;
use crate::intent::spec::RecipeKind;
use crate::understanding::normalize::tokenize;

/// A parsed "cook X into Y" style directive.
#[derive(Debug, Clone, PartialEq)]
pub struct CookingDirective {
    pub kind: RecipeKind,
    pub ingredient: String,
    pub result: String,
}

impl CookingDirective {
    /// Deterministic recipe id: `{result}_from_{ingredient}_{kind}`.
    ///
    /// Repeated interpretation of the same text always yields the same id.
    pub fn recipe_id(&self) -> Slug {
        let result = Slug::from_text(&self.result);
        let ingredient = Slug::from_text(&self.ingredient);
        Slug::from_text(&format!(
            "{}_from_{}_{}",
            result,
            ingredient,
            self.kind.id_suffix()
        ))
    }
}

/// Cooking verbs in match order; the first verb found in the sentence wins.
const COOKING_VERBS: &[(&str, RecipeKind)] = &[
    ("smelt", RecipeKind::Smelting),
    ("blast", RecipeKind::Blasting),
    ("smoke", RecipeKind::Smoking),
    ("cook", RecipeKind::Campfire),
];

/// Parse a "smelt X into Y" directive from one sentence, if present.
pub fn parse_cooking(sentence: &str) -> Option<CookingDirective> {
    let tokens = tokenize(sentence);

    let (verb_pos, kind) = COOKING_VERBS.iter().find_map(|(verb, kind)| {
        tokens.iter().position(|t| t == verb).map(|p| (p, *kind))
    })?;
    let into_pos = tokens.iter().skip(verb_pos).position(|t| t == "into")? + verb_pos;
    if into_pos <= verb_pos + 1 || into_pos + 1 >= tokens.len() {
        return None;
    }

    let ingredient = strip_articles(&tokens[verb_pos + 1..into_pos]);
    let result = strip_articles(&tokens[into_pos + 1..]);
    if ingredient.is_empty() || result.is_empty() {
        return None;
    }

    Some(CookingDirective {
        kind,
        ingredient,
        result,
    })
}

/// Parse a "new wood type called Z" directive from one sentence, if present.
///
/// Accepted shapes: "... wood type called|named Z", "... wood called|named
/// Z", and "new Z wood type".
pub fn parse_wood_type(sentence: &str) -> Option<String> {
    let tokens = tokenize(sentence);
    let wood_pos = tokens.iter().position(|t| t == "wood")?;

    // "wood [type] called|named Z"
    if let Some(name_pos) = tokens
        .iter()
        .skip(wood_pos)
        .position(|t| t == "called" || t == "named")
        .map(|p| p + wood_pos + 1)
    {
        let name = strip_articles(&tokens[name_pos..]);
        if !name.is_empty() {
            return Some(name);
        }
    }

    // "new Z wood type"
    if let Some(new_pos) = tokens[..wood_pos].iter().position(|t| t == "new") {
        let name = strip_articles(&tokens[new_pos + 1..wood_pos]);
        if !name.is_empty() && name != "type" {
            return Some(name);
        }
    }

    None
}

fn strip_articles(tokens: &[String]) -> String {
    const ARTICLES: &[&str] = &["a", "an", "the", "some", "type", "of"];
    tokens
        .iter()
        .filter(|t| !ARTICLES.contains(&t.as_str()))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}
