//! Clause linearization: role assignment, agreement, verb group and the
//! German field order.

use logos_morph::{is_modal, personal_pronoun_features, separable_particle};
use logos_protocol::{
    Case, Category, ClauseStatus, Coordination, DiscourseFunction, Element, FeatureFlags, Features, Form, Group, InflectedWord,
    LexicalFlags, Number, PartOfSpeech, Person, Phrase, PhraseKind, Realized, Tense, TextLeaf, Word,
};
use tracing::debug;

use crate::interrogative::inverts;
use crate::literal::split_verb_literal;
use crate::verb_group::{Placement, SplitVerbGroup, VerbGroup};
use crate::{merged, Realiser};

/// Clause-level flags that may also be written on the verb phrase.
const VERB_PHRASE_FLAGS: FeatureFlags = FeatureFlags::PASSIVE
    .union(FeatureFlags::NEGATED)
    .union(FeatureFlags::PERFECT)
    .union(FeatureFlags::PROGRESSIVE)
    .union(FeatureFlags::CONTAINS_MODAL)
    .union(FeatureFlags::SEPARABLE);

const COPULAS: &[&str] = &["sein", "werden", "bleiben"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// Subject, finite verb, middle field, clause-final verbs.
    Declarative,
    /// Fronted constituent, finite verb, subject, ...; yes/no questions
    /// leave the front empty.
    Inverted,
    /// Complementiser, subject, middle field, all verbs.
    Subordinate,
    /// zu-infinitive and gerund clauses: no complementiser, verbs last.
    NonFinite,
    /// Finite verb first, no subject.
    Imperative,
}

impl Order {
    fn placement(self) -> Placement {
        match self {
            Order::Declarative | Order::Inverted | Order::Imperative => Placement::Split,
            Order::Subordinate | Order::NonFinite => Placement::Final,
        }
    }
}

/// The clause's arguments, sorted by role.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClauseRoles {
    pub subjects: Vec<Element>,
    pub objects: Vec<Element>,
    pub indirect_objects: Vec<Element>,
    pub complements: Vec<Element>,
    /// Demoted subjects of a passive clause.
    pub agents: Vec<Element>,
}

impl ClauseRoles {
    fn collect(clause: &Phrase, vp: Option<&Phrase>) -> Self {
        let mut roles = ClauseRoles { subjects: clause.subjects.clone(), ..ClauseRoles::default() };
        let complements = vp.into_iter().flat_map(|vp| vp.complements.iter()).chain(clause.complements.iter());
        for complement in complements {
            match complement.function() {
                Some(DiscourseFunction::Object) => roles.objects.push(complement.clone()),
                Some(DiscourseFunction::IndirectObject) => roles.indirect_objects.push(complement.clone()),
                _ => roles.complements.push(complement.clone()),
            }
        }
        roles
    }

    /// Objects become subjects; the old subjects become the "von" agent.
    pub(crate) fn promote_passive(&mut self) {
        self.agents = std::mem::take(&mut self.subjects);
        self.subjects = std::mem::take(&mut self.objects)
            .into_iter()
            .map(|object| object.tagged(DiscourseFunction::Subject))
            .collect();
    }
}

/// Clauses and bare verb phrases are realized as clauses of their own.
fn is_clausal(element: &Element) -> bool {
    matches!(element, Element::Phrase(phrase) if matches!(phrase.kind, PhraseKind::Clause | PhraseKind::Verb))
}

impl<'a> Realiser<'a> {
    /// A verb phrase on its own is realized as a subjectless clause.
    pub(crate) fn verb_phrase(&self, vp: &Phrase, imposed: &Features) -> Group {
        let clause = Phrase {
            features: vp.features.clone(),
            verb_phrase: Some(Element::from(vp.clone()).tagged(DiscourseFunction::VerbPhrase)),
            ..Phrase::new(PhraseKind::Clause)
        };
        self.clause(&clause, imposed)
    }

    pub(crate) fn clause(&self, clause: &Phrase, imposed: &Features) -> Group {
        let mut features = merged(&clause.features, imposed);
        let vp = clause.verb_phrase.as_ref().and_then(Element::as_phrase);
        if let Some(vp) = vp {
            features.inherit(&vp.features, VERB_PHRASE_FLAGS);
        }

        let form = features.form_or_default();
        let non_finite = matches!(form, Form::Infinitive | Form::BareInfinitive | Form::Gerund);
        if non_finite {
            features.set(FeatureFlags::SUPPRESS_COMPLEMENTISER, true);
        }
        let interrogative = if features.is_subordinate() || non_finite { None } else { features.interrogative };

        let mut roles = ClauseRoles::collect(clause, vp);
        if features.has(FeatureFlags::PASSIVE) {
            roles.promote_passive();
        }
        let question_word = interrogative.and_then(|kind| roles.question(kind));

        let (person, number) = self.subject_agreement(&roles.subjects, &features);

        let order = if non_finite {
            Order::NonFinite
        } else if form == Form::Imperative {
            Order::Imperative
        } else if features.is_subordinate() {
            Order::Subordinate
        } else if let Some(kind) = interrogative {
            let splits = question_word.as_ref().map_or(false, |word| word.features().has(FeatureFlags::VERB_SPLITTING));
            if splits || inverts(kind) {
                Order::Inverted
            } else {
                Order::Declarative
            }
        } else if !clause.front_modifiers.is_empty() {
            Order::Inverted
        } else {
            Order::Declarative
        };

        let verb = clause.verb_phrase.as_ref().and_then(|vp| self.verb_group(vp, &features, form, person, number));
        let copular = verb.as_ref().map_or(false, |(_, copular)| *copular);
        let split = match verb {
            Some((group, _)) => group.split(order.placement()),
            None => {
                debug!("clause without a verb head, realizing the remaining constituents");
                SplitVerbGroup::default()
            }
        };

        let mut group_features = features.clone();
        if interrogative.is_some() {
            group_features.set(FeatureFlags::INTERROGATIVE, true);
        }
        let mut group = Group::new(Category::Phrase(PhraseKind::Clause)).with_features(group_features);

        if order == Order::Subordinate && !features.has(FeatureFlags::SUPPRESS_COMPLEMENTISER) {
            let complementiser = features.complementiser.clone().unwrap_or_else(|| "dass".to_string());
            let mut leaf = TextLeaf::new(complementiser);
            leaf.features.function = Some(DiscourseFunction::Complementiser);
            group.push(leaf.into());
        }
        if let Some(cue) = &clause.cue_phrase {
            group.push(Group::list(DiscourseFunction::CuePhrase, vec![self.element(cue, &Features::default())]).into());
        }

        // In questions the first position belongs to the verb or the
        // question word, so front modifiers follow the subject.
        let questioned = interrogative.is_some() && matches!(order, Order::Declarative | Order::Inverted);
        let front_function = if questioned { DiscourseFunction::Modifier } else { DiscourseFunction::FrontModifier };
        let front = self.list(front_function, &clause.front_modifiers, &Features::default());
        let subjects = self.subjects(&roles.subjects, form);
        let finite = Group::list(DiscourseFunction::VerbPhrase, split.finite);

        match order {
            Order::Declarative => {
                group.push(subjects.into());
                group.push(finite.into());
                if questioned {
                    group.push(front.into());
                }
            }
            Order::Inverted => {
                if let Some(word) = &question_word {
                    group.push(Group::list(DiscourseFunction::FrontModifier, vec![self.element(word, &Features::default())]).into());
                }
                if questioned {
                    group.push(finite.into());
                    group.push(subjects.into());
                    group.push(front.into());
                } else {
                    group.push(front.into());
                    group.push(finite.into());
                    group.push(subjects.into());
                }
            }
            Order::Subordinate => {
                group.push(front.into());
                group.push(subjects.into());
            }
            Order::NonFinite => {
                group.push(subjects.into());
            }
            Order::Imperative => {
                group.push(front.into());
                group.push(finite.into());
            }
        }

        let mut negation = split.negation;
        group.extend(self.middle_field(clause, vp, &roles, copular, &mut negation));

        let mut right = Vec::new();
        right.extend(negation);
        right.extend(split.clause_final);
        group.push(Group::list(DiscourseFunction::VerbPhrase, right).into());

        if order == Order::NonFinite {
            // Infinitive clauses move their front content behind the verb.
            let front = self.list(DiscourseFunction::PostModifier, &clause.front_modifiers, &Features::default());
            group.push(front.into());
        }
        group.extend(self.trailing_field(clause, vp, &roles, form));
        group
    }

    fn subjects(&self, subjects: &[Element], form: Form) -> Group {
        let mut imposed = Features {
            case: Some(Case::Nominative),
            function: Some(DiscourseFunction::Subject),
            ..Features::default()
        };
        if form == Form::Gerund {
            imposed.case = Some(Case::Genitive);
            imposed.set(FeatureFlags::POSSESSIVE, true);
        }
        let children = match subjects {
            [] => Vec::new(),
            [single] => vec![self.subject(single, &imposed)],
            several => {
                let coordination = Coordination::and(several.to_vec());
                vec![self.coordination(&coordination, &imposed).into()]
            }
        };
        Group::list(DiscourseFunction::Subject, children)
    }

    /// Clausal subjects are realized as gerunds.
    fn subject(&self, subject: &Element, imposed: &Features) -> Realized {
        if is_clausal(subject) {
            let clause_imposed = Features {
                form: Some(Form::Gerund),
                function: Some(DiscourseFunction::Subject),
                ..Features::default()
            };
            return self.element(subject, &clause_imposed);
        }
        self.element(subject, imposed)
    }

    /// Everything between the two verb positions: pre-modifiers, modifiers,
    /// the passive agent, dative then accusative objects, then the other
    /// complements. A copula's negation goes before its predicate.
    fn middle_field(
        &self,
        clause: &Phrase,
        vp: Option<&Phrase>,
        roles: &ClauseRoles,
        copular: bool,
        negation: &mut Option<Realized>,
    ) -> Vec<Realized> {
        let none = Features::default();
        let empty = Phrase::new(PhraseKind::Verb);
        let vp = vp.unwrap_or(&empty);

        let mut pre_modifiers = clause.pre_modifiers.clone();
        pre_modifiers.extend(vp.pre_modifiers.iter().cloned());

        let mut modifiers = clause.modifiers.clone();
        modifiers.extend(vp.modifiers.iter().cloned());
        modifiers.extend(vp.post_modifiers.iter().filter(|m| !is_clausal(m)).cloned());

        let mut field: Vec<Realized> = vec![
            self.list(DiscourseFunction::PreModifier, &pre_modifiers, &none).into(),
            self.modifier_list(&modifiers, &none).into(),
        ];

        if !roles.agents.is_empty() {
            field.push(self.agent(&roles.agents).into());
        }

        let dative = Features { case: Some(Case::Dative), function: Some(DiscourseFunction::IndirectObject), ..none.clone() };
        let accusative = Features { case: Some(Case::Accusative), function: Some(DiscourseFunction::Object), ..none.clone() };
        let indirect: Vec<Element> = roles.indirect_objects.iter().filter(|e| !is_clausal(e)).cloned().collect();
        let objects: Vec<Element> = roles.objects.iter().filter(|e| !is_clausal(e)).cloned().collect();
        field.push(self.list(DiscourseFunction::IndirectObject, &indirect, &dative).into());
        field.push(self.list(DiscourseFunction::Object, &objects, &accusative).into());

        let predicate_case = if copular { Case::Nominative } else { Case::Accusative };
        let complement = Features { case: Some(predicate_case), function: Some(DiscourseFunction::Complement), ..none };
        let others: Vec<Element> = roles.complements.iter().filter(|e| !is_clausal(e)).cloned().collect();
        let mut predicate = Vec::new();
        if copular && !others.is_empty() {
            predicate.extend(negation.take());
        }
        predicate.extend(others.iter().map(|element| self.element(element, &complement)));
        field.push(Group::list(DiscourseFunction::Complement, predicate).into());
        field
    }

    /// Clausal complements and post-modifiers, after the clause-final verbs.
    fn trailing_field(&self, clause: &Phrase, vp: Option<&Phrase>, roles: &ClauseRoles, form: Form) -> Vec<Realized> {
        let mut complements = Vec::new();
        let clausal_roles = [
            (&roles.indirect_objects, DiscourseFunction::IndirectObject),
            (&roles.objects, DiscourseFunction::Object),
            (&roles.complements, DiscourseFunction::Complement),
        ];
        for (elements, function) in clausal_roles {
            for element in elements.iter().filter(|e| is_clausal(e)) {
                complements.push(self.element(element, &clausal_complement(element, function, form)));
            }
        }

        let mut post_modifiers: Vec<Element> =
            vp.map(|vp| vp.post_modifiers.iter().filter(|m| is_clausal(m)).cloned().collect()).unwrap_or_default();
        post_modifiers.extend(clause.post_modifiers.iter().cloned());

        vec![
            Group::list(DiscourseFunction::Complement, complements).into(),
            self.list(DiscourseFunction::PostModifier, &post_modifiers, &Features::default()).into(),
        ]
    }

    /// Demoted passive subjects: "von" + dative.
    fn agent(&self, agents: &[Element]) -> Group {
        let head: Element = Word::preposition("von").into();
        let complement = match agents {
            [single] => single.clone(),
            several => Coordination::and(several.to_vec()).into(),
        };
        let mut pp = Phrase::preposition(head, complement);
        pp.features.governing_case = Some(Case::Dative);
        pp.features.function = Some(DiscourseFunction::Modifier);
        self.prepositional_phrase(&pp, &Features::default())
    }

    /// Builds the verb group for the clause's verb phrase. Also reports
    /// whether the verb is a bare copula.
    fn verb_group(
        &self,
        vp: &Element,
        features: &Features,
        form: Form,
        person: Person,
        number: Number,
    ) -> Option<(VerbGroup, bool)> {
        let word = match vp {
            Element::Phrase(phrase) => phrase.head.as_ref().and_then(Element::as_word),
            Element::Word(word) => Some(word),
            _ => None,
        }?;

        let literal = split_verb_literal(&word.base);
        let (base, literal_particle, particles) = match &literal {
            Some(literal) => match literal.separable() {
                Some((full, particle)) => (full, Some(particle.to_string()), Vec::new()),
                None => (literal.verb.clone(), None, literal.particles.clone()),
            },
            None => (word.base.clone(), None, Vec::new()),
        };

        let entry = self.lookup(&base, PartOfSpeech::Verb, word.entry.as_ref());
        let flagged = word.features.has(FeatureFlags::SEPARABLE) || features.has(FeatureFlags::SEPARABLE);
        let particle = literal_particle.or_else(|| separable_particle(&base, entry.as_ref(), flagged));

        let pos = if is_modal(&base) { PartOfSpeech::Modal } else { word.pos };
        let mut head = InflectedWord::new(base.clone(), pos).with_features(word.features.clone());
        head.features.function = Some(DiscourseFunction::Head);
        head.entry = word.entry.clone();
        head.particle = particle;

        let tense = features.tense_or_default();
        let passive = features.has(FeatureFlags::PASSIVE);
        let mut group = VerbGroup::new(head).with_particles(particles);

        if passive {
            group = group.passive(tense, features.has(FeatureFlags::PROGRESSIVE));
        }
        if features.has(FeatureFlags::PERFECT) {
            let aux = match (&entry, passive) {
                (_, true) => "sein".to_string(),
                (Some(entry), false) => entry.perfect_auxiliary.clone().unwrap_or_else(|| "haben".to_string()),
                (None, false) => "haben".to_string(),
            };
            group = group.perfect(&aux);
        }
        if let Some(modal) = &features.modal {
            group = group.modal(modal);
        }
        if tense == Tense::Future && form == Form::Normal {
            group = group.future();
        }
        if features.has(FeatureFlags::NEGATED) {
            group = group.negate();
        }

        let copula = COPULAS.contains(&base.as_str()) || entry.map_or(false, |e| e.has(LexicalFlags::COPULA));
        let bare_copula = copula && group.len() == 1;
        Some((group.agree(form, tense, person, number), bare_copula))
    }

    /// Plural for several subjects, a plural coordination or a plural
    /// subject; person is the lowest among the subjects.
    pub(crate) fn subject_agreement(&self, subjects: &[Element], features: &Features) -> (Person, Number) {
        if subjects.is_empty() {
            return (features.person_or_default(), features.number_or_default());
        }
        let number = if subjects.len() > 1 { Number::Plural } else { self.element_number(&subjects[0]) };
        let person = subjects.iter().map(|s| self.element_person(s)).min().unwrap_or(Person::Third);
        (person, number)
    }

    fn element_number(&self, element: &Element) -> Number {
        if let Some(number) = element.features().number {
            return number;
        }
        match element {
            Element::Word(word) => self.word_number(word),
            Element::Phrase(phrase) if phrase.kind == PhraseKind::Noun => {
                phrase.head.as_ref().map_or(Number::Singular, |head| self.element_number(head))
            }
            Element::Coordination(coord) if coord.is_plural() => Number::Plural,
            Element::Coordination(coord) => {
                coord.coordinates.first().map_or(Number::Singular, |first| self.element_number(first))
            }
            _ => Number::Singular,
        }
    }

    fn word_number(&self, word: &Word) -> Number {
        if word.pos == PartOfSpeech::Pronoun {
            if let Some((_, number, _)) = personal_pronoun_features(&word.base) {
                return number;
            }
        }
        let plural_only = self.entry(word).map_or(false, |e| e.has(LexicalFlags::PLURAL_ONLY));
        if plural_only {
            Number::Plural
        } else {
            Number::Singular
        }
    }

    fn element_person(&self, element: &Element) -> Person {
        if let Some(person) = element.features().person {
            return person;
        }
        match element {
            Element::Word(word) if word.pos == PartOfSpeech::Pronoun => {
                personal_pronoun_features(&word.base).map_or(Person::Third, |(person, _, _)| person)
            }
            Element::Phrase(phrase) if phrase.kind == PhraseKind::Noun => {
                phrase.head.as_ref().map_or(Person::Third, |head| self.element_person(head))
            }
            Element::Coordination(coord) => {
                coord.coordinates.iter().map(|c| self.element_person(c)).min().unwrap_or(Person::Third)
            }
            _ => Person::Third,
        }
    }
}

/// Bare verb phrases and clause objects of an imperative become
/// zu-infinitives; other complement clauses are subordinate.
fn clausal_complement(element: &Element, function: DiscourseFunction, parent_form: Form) -> Features {
    let mut features = Features { function: Some(function), ..Features::default() };
    let object = matches!(function, DiscourseFunction::Object | DiscourseFunction::IndirectObject);
    let bare_verb_phrase = !element.is_clause();
    if bare_verb_phrase || (object && parent_form == Form::Imperative) {
        features.form = Some(Form::Infinitive);
        features.set(FeatureFlags::SUPPRESS_COMPLEMENTISER, true);
    } else {
        features.clause_status = Some(ClauseStatus::Subordinate);
    }
    features
}
