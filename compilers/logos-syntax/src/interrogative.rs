use logos_protocol::{Case, DiscourseFunction, Element, FeatureFlags, Features, InterrogativeType, Word};

use crate::clause::ClauseRoles;

fn pronoun(base: &str, case: Case, function: DiscourseFunction) -> Element {
    let features = Features { case: Some(case), ..Features::default() };
    Element::from(Word::pronoun(base).with_features(features)).tagged(function)
}

/// Question types that put the finite verb before the subject.
pub fn inverts(kind: InterrogativeType) -> bool {
    !kind.questions_subject()
}

impl ClauseRoles {
    /// Rewrites the clause roles for a question and returns the question
    /// word that goes before the finite verb, if any.
    pub(crate) fn question(&mut self, kind: InterrogativeType) -> Option<Element> {
        match kind {
            InterrogativeType::YesNo => None,
            InterrogativeType::How => Some(
                Element::from(Word::adverb("wie"))
                    .tagged(DiscourseFunction::FrontModifier)
                    .with_flag(FeatureFlags::VERB_SPLITTING),
            ),
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject => {
                let base = if kind == InterrogativeType::WhoSubject { "wer" } else { "was" };
                self.subjects = vec![pronoun(base, Case::Nominative, DiscourseFunction::Subject)];
                None
            }
            InterrogativeType::WhoObject | InterrogativeType::WhatObject => {
                self.objects.clear();
                let base = if kind == InterrogativeType::WhoObject { "wer" } else { "was" };
                Some(pronoun(base, Case::Accusative, DiscourseFunction::Object).with_flag(FeatureFlags::VERB_SPLITTING))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> ClauseRoles {
        ClauseRoles {
            subjects: vec![Word::noun("Klaus").into()],
            objects: vec![Word::noun("Spiel").into()],
            ..ClauseRoles::default()
        }
    }

    #[test]
    fn test_subject_question_replaces_subject() {
        let mut roles = roles();
        assert_eq!(roles.question(InterrogativeType::WhoSubject), None);
        assert_eq!(roles.subjects.len(), 1);
        assert_eq!(roles.subjects[0].as_word().map(|w| w.base.as_str()), Some("wer"));
        assert_eq!(roles.objects.len(), 1);
    }

    #[test]
    fn test_object_question_fronts_pronoun() {
        let mut roles = roles();
        let fronted = roles.question(InterrogativeType::WhatObject).unwrap();
        assert!(roles.objects.is_empty());
        assert_eq!(fronted.as_word().map(|w| w.base.as_str()), Some("was"));
        assert_eq!(fronted.features().case, Some(Case::Accusative));
        assert!(fronted.features().has(FeatureFlags::VERB_SPLITTING));
    }

    #[test]
    fn test_inversion() {
        assert!(inverts(InterrogativeType::YesNo));
        assert!(inverts(InterrogativeType::How));
        assert!(!inverts(InterrogativeType::WhoSubject));
    }
}
