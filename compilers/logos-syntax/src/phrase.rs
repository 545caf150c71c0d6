//! Adjective, adverb and prepositional phrases.

use logos_protocol::{Case, Category, DiscourseFunction, FeatureFlags, Features, Group, PartOfSpeech, Phrase, Realized};
use tracing::trace;

use crate::{merged, Realiser};

const ACCUSATIVE_PREPOSITIONS: &[&str] = &["durch", "für", "gegen", "ohne", "um", "bis", "entlang"];
const DATIVE_PREPOSITIONS: &[&str] = &["aus", "bei", "mit", "nach", "seit", "von", "zu", "gegenüber", "ab"];
const GENITIVE_PREPOSITIONS: &[&str] = &["wegen", "während", "trotz", "statt", "anstatt", "innerhalb", "außerhalb"];

/// Case a preposition governs when neither the phrase nor the lexicon says.
/// Two-way prepositions ("in", "auf") fall through to the dative.
pub fn default_governing_case(preposition: &str) -> Option<Case> {
    let preposition = preposition.to_lowercase();
    let preposition = preposition.as_str();
    if ACCUSATIVE_PREPOSITIONS.contains(&preposition) {
        Some(Case::Accusative)
    } else if DATIVE_PREPOSITIONS.contains(&preposition) {
        Some(Case::Dative)
    } else if GENITIVE_PREPOSITIONS.contains(&preposition) {
        Some(Case::Genitive)
    } else {
        None
    }
}

impl<'a> Realiser<'a> {
    /// Adjective and adverb phrases. The head takes the agreement features
    /// imposed by the noun phrase (if any) plus its degree.
    pub(crate) fn modifier_phrase(&self, phrase: &Phrase, imposed: &Features) -> Group {
        let features = merged(&phrase.features, imposed);
        let mut head_features = Features {
            case: features.case,
            number: features.number,
            gender: features.gender,
            article_form: features.article_form,
            function: Some(DiscourseFunction::Head),
            ..Features::default()
        };
        let degree = FeatureFlags::COMPARATIVE | FeatureFlags::SUPERLATIVE;
        head_features.flags |= features.flags & degree;

        let none = Features::default();
        let mut group = Group::new(Category::Phrase(phrase.kind)).with_features(features);
        group.push(self.list(DiscourseFunction::PreModifier, &phrase.pre_modifiers, &none).into());
        if let Some(head) = &phrase.head {
            group.push(self.element(head, &head_features));
        }
        group.push(self.list(DiscourseFunction::Complement, &phrase.complements, &none).into());
        group.push(self.list(DiscourseFunction::PostModifier, &phrase.post_modifiers, &none).into());
        group
    }

    /// The preposition, then its complements in the governed case. A merged
    /// article ("im", "zum") already contains the preposition, so the head
    /// is dropped when a complement used one.
    pub(crate) fn prepositional_phrase(&self, phrase: &Phrase, imposed: &Features) -> Group {
        let features = merged(&phrase.features, imposed);
        let head_word = phrase.head.as_ref().and_then(|head| head.as_word());
        let case = features
            .governing_case
            .or_else(|| {
                head_word
                    .and_then(|word| self.lookup(&word.base, PartOfSpeech::Preposition, word.entry.as_ref()))
                    .and_then(|entry| entry.governing_case)
            })
            .or_else(|| head_word.and_then(|word| default_governing_case(&word.base)))
            .unwrap_or(Case::Dative);
        trace!(preposition = ?head_word.map(|w| w.base.as_str()), ?case, "governed case");

        let governed = Features { case: Some(case), function: Some(DiscourseFunction::Complement), ..Features::default() };
        let complements: Vec<Realized> =
            phrase.complements.iter().map(|complement| self.element(complement, &governed)).collect();
        let merged_article = complements.iter().any(|complement| complement.features().has(FeatureFlags::MERGED_ARTICLE));

        let none = Features::default();
        let mut group = Group::new(Category::Phrase(phrase.kind)).with_features(features);
        group.push(self.list(DiscourseFunction::PreModifier, &phrase.pre_modifiers, &none).into());
        if let Some(head) = &phrase.head {
            if !merged_article {
                let head_features = Features { function: Some(DiscourseFunction::Head), ..none.clone() };
                group.push(self.element(head, &head_features));
            }
        }
        group.push(Group::list(DiscourseFunction::Complement, complements).into());
        group.push(self.list(DiscourseFunction::PostModifier, &phrase.post_modifiers, &none).into());
        group
    }
}
