use logos_morph::article::{der_word_stem, ein_word_stem, is_definite};
use logos_morph::{is_merged_article, personal_pronoun_features};
use logos_protocol::{
    ArticleForm, Case, Category, DiscourseFunction, Element, FeatureFlags, Features, Gender, Group, LexicalFlags,
    Number, PartOfSpeech, Phrase, PhraseKind, Realized, Word,
};

use crate::ordering::{order_by_admissible, Admissible};
use crate::{merged, Realiser};

/// The word a specifier element stands for, if it is a single word.
fn specifier_word(specifier: Option<&Element>) -> Option<&Word> {
    specifier.and_then(Element::as_word)
}

fn head_word(element: &Element) -> Option<&Word> {
    match element {
        Element::Word(word) => Some(word),
        Element::Phrase(phrase) => phrase.head.as_ref().and_then(head_word),
        _ => None,
    }
}

fn article_form(specifier: Option<&Word>) -> ArticleForm {
    let Some(word) = specifier else { return ArticleForm::Bare };
    if is_definite(&word.base) || der_word_stem(&word.base).is_some() || is_merged_article(&word.base) {
        ArticleForm::Definite
    } else if ein_word_stem(&word.base).is_some() {
        ArticleForm::Indefinite
    } else {
        ArticleForm::Bare
    }
}

fn gender_from_specifier(specifier: &str, number: Number) -> Option<Gender> {
    match specifier.to_lowercase().as_str() {
        "der" | "ein" => Some(Gender::Masculine),
        "die" if number == Number::Singular => Some(Gender::Feminine),
        "eine" => Some(Gender::Feminine),
        "das" => Some(Gender::Neuter),
        _ => None,
    }
}

impl<'a> Realiser<'a> {
    pub(crate) fn noun_phrase(&self, np: &Phrase, imposed: &Features) -> Group {
        let mut features = merged(&np.features, imposed);
        if features.has(FeatureFlags::POSSESSIVE) {
            features.case = Some(Case::Genitive);
        }
        let case = features.case_or_default();

        let head = np.head.as_ref().and_then(head_word);
        let entry = head.and_then(|word| self.entry(word));
        let specifier = specifier_word(np.specifier.as_ref());

        let number = features
            .number
            .or_else(|| head.and_then(|word| word.features.number))
            .or_else(|| head.filter(|w| w.pos == PartOfSpeech::Pronoun).and_then(|w| personal_pronoun_features(&w.base)).map(|(_, n, _)| n))
            .unwrap_or_else(|| {
                if entry.as_ref().map_or(false, |e| e.has(LexicalFlags::PLURAL_ONLY)) {
                    Number::Plural
                } else {
                    Number::Singular
                }
            });

        let gender = entry
            .as_ref()
            .and_then(|e| e.gender)
            .or_else(|| head.and_then(|word| word.features.gender))
            .or(features.gender)
            .or_else(|| specifier.and_then(|word| gender_from_specifier(&word.base, number)))
            .unwrap_or(Gender::Masculine);

        let article_form = article_form(specifier);
        let merged_article = specifier.map_or(false, |word| is_merged_article(&word.base));

        features.case = Some(case);
        features.number = Some(number);
        features.gender = Some(gender);
        features.set(FeatureFlags::MERGED_ARTICLE, merged_article);

        let agreement = Features {
            case: Some(case),
            number: Some(number),
            gender: Some(gender),
            article_form: Some(article_form),
            ..Features::default()
        };

        let mut group = Group::new(Category::Phrase(PhraseKind::Noun)).with_features(features);
        let none = Features::default();
        group.push(self.list(DiscourseFunction::FrontModifier, &np.front_modifiers, &none).into());
        if let Some(specifier) = &np.specifier {
            let specifier_features = Features { function: Some(DiscourseFunction::Specifier), ..agreement.clone() };
            group.push(self.element(specifier, &specifier_features));
        }
        group.push(self.pre_modifiers(&np.pre_modifiers, &agreement).into());
        group.push(self.modifier_list(&np.modifiers, &agreement).into());
        if let Some(head) = &np.head {
            let head_features = Features { function: Some(DiscourseFunction::Head), ..agreement.clone() };
            group.push(self.element(head, &head_features));
        }
        group.push(self.list(DiscourseFunction::Complement, &np.complements, &none).into());

        let post_modifiers = np.post_modifiers.iter().map(|modifier| {
            let nominal = matches!(modifier, Element::Phrase(p) if p.kind == PhraseKind::Noun)
                || matches!(modifier, Element::Word(w) if w.pos == PartOfSpeech::Noun);
            let imposed = if nominal && modifier.features().case.is_none() {
                Features { case: Some(Case::Genitive), ..none.clone() }
            } else {
                none.clone()
            };
            self.element(modifier, &imposed)
        });
        group.push(Group::list(DiscourseFunction::PostModifier, post_modifiers.collect()).into());
        group
    }

    /// Attributive modifiers, reordered into qualitative, colour and
    /// classifying slots when there is more than one.
    fn pre_modifiers(&self, modifiers: &[Element], agreement: &Features) -> Group {
        let mut ranked: Vec<(Admissible, &Element)> = modifiers
            .iter()
            .map(|modifier| {
                let admissible = head_word(modifier)
                    .map_or(Admissible::ANY, |word| Admissible::of(word.pos, self.entry(word).as_ref()));
                (admissible, modifier)
            })
            .collect();
        if self.config.order_adjectives && ranked.len() > 1 {
            order_by_admissible(&mut ranked);
        }
        let children: Vec<Realized> = ranked.into_iter().map(|(_, modifier)| self.element(modifier, agreement)).collect();
        Group::list(DiscourseFunction::PreModifier, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RealiserConfig;
    use logos_protocol::{InflectedWord, LexiconIndex, NoLexicon, WordEntry};

    fn realise_with(lexicon: &dyn logos_protocol::Lexicon, np: &Phrase, imposed: &Features) -> Group {
        Realiser::new(lexicon, RealiserConfig::default()).noun_phrase(np, imposed)
    }

    fn words(group: &Group) -> Vec<InflectedWord> {
        fn walk(node: &Realized, out: &mut Vec<InflectedWord>) {
            match node {
                Realized::Inflect(word) => out.push(word.clone()),
                Realized::Group(group) => group.children.iter().for_each(|c| walk(c, out)),
                Realized::Text(_) => {}
            }
        }
        let mut out = Vec::new();
        group.children.iter().for_each(|c| walk(c, &mut out));
        out
    }

    #[test]
    fn test_specifier_agrees_with_head() {
        let np = Phrase::noun(Some("das"), Word::noun("Spiel"));
        let imposed = Features { case: Some(Case::Dative), ..Features::default() };
        let group = realise_with(&NoLexicon, &np, &imposed);
        let words = words(&group);
        assert_eq!(words[0].features.gender, Some(Gender::Neuter));
        assert_eq!(words[0].features.case, Some(Case::Dative));
        assert_eq!(words[1].features.gender, Some(Gender::Neuter));
        assert_eq!(group.features.case, Some(Case::Dative));
    }

    #[test]
    fn test_lexicon_gender_wins() {
        let lexicon: LexiconIndex =
            vec![WordEntry::new("Sonne", PartOfSpeech::Noun).with_gender(Gender::Feminine)].into_iter().collect();
        let np = Phrase::noun(Some("ein"), Word::noun("Sonne"));
        let group = realise_with(&lexicon, &np, &Features::default());
        let words = words(&group);
        assert_eq!(words[1].features.gender, Some(Gender::Feminine));
        assert_eq!(words[0].features.article_form, Some(ArticleForm::Indefinite));
    }

    #[test]
    fn test_possessive_is_genitive() {
        let np = Phrase::noun(Some("der"), Word::noun("Mann")).with_flag(FeatureFlags::POSSESSIVE);
        let group = realise_with(&NoLexicon, &np, &Features::default());
        assert!(words(&group).iter().all(|w| w.features.case == Some(Case::Genitive)));
    }

    #[test]
    fn test_adjectives_take_article_form() {
        let np = Phrase::noun(Some("die"), Word::noun("Frau")).with_pre_modifier(Word::adjective("alt"));
        let group = realise_with(&NoLexicon, &np, &Features::default());
        assert_eq!(group.plain_text(), "die alt Frau");
        let words = words(&group);
        assert_eq!(words[1].features.article_form, Some(ArticleForm::Definite));
        assert_eq!(words[1].features.gender, Some(Gender::Feminine));
    }

    #[test]
    fn test_adjectives_are_ordered() {
        let lexicon: LexiconIndex = vec![
            WordEntry::new("deutsch", PartOfSpeech::Adjective).with_flags(LexicalFlags::CLASSIFYING),
            WordEntry::new("rot", PartOfSpeech::Adjective).with_flags(LexicalFlags::COLOUR),
        ]
        .into_iter()
        .collect();
        let np = Phrase::noun(Some("das"), Word::noun("Auto"))
            .with_pre_modifier(Word::adjective("deutsch"))
            .with_pre_modifier(Word::adjective("rot"));
        assert_eq!(realise_with(&lexicon, &np, &Features::default()).plain_text(), "das rot deutsch Auto");

        let unordered = Realiser::new(&lexicon, RealiserConfig::default().with_adjective_ordering(false))
            .noun_phrase(&np, &Features::default());
        assert_eq!(unordered.plain_text(), "das deutsch rot Auto");
    }

    #[test]
    fn test_merged_article_is_flagged() {
        let np = Phrase::noun(Some("im"), Word::noun("Haus"));
        let group = realise_with(&NoLexicon, &np, &Features::default());
        assert!(group.features.has(FeatureFlags::MERGED_ARTICLE));
    }

    #[test]
    fn test_nominal_post_modifier_is_genitive() {
        let np = Phrase::noun(Some("der"), Word::noun("Sohn"))
            .with_post_modifier(Phrase::noun(Some("der"), Word::noun("Mann")));
        let group = realise_with(&NoLexicon, &np, &Features::default());
        let words = words(&group);
        assert_eq!(words[2].features.case, Some(Case::Genitive));
        assert_eq!(words[0].features.case, Some(Case::Nominative));
    }

    #[test]
    fn test_plural_only_nouns() {
        let lexicon: LexiconIndex =
            vec![WordEntry::new("Leute", PartOfSpeech::Noun).with_flags(LexicalFlags::PLURAL_ONLY)].into_iter().collect();
        let np = Phrase::noun(Some("die"), Word::noun("Leute"));
        let group = realise_with(&lexicon, &np, &Features::default());
        assert_eq!(group.features.number, Some(Number::Plural));
    }
}
