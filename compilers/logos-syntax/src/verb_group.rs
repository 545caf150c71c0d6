//! The verb group: auxiliaries, modal and main verb of one clause.
//!
//! A group is built from the lexical verb outwards by named steps. The
//! chain is stored innermost first, so the last part is always the finite
//! verb. `split` then distributes the chain over the two verb positions of
//! the clause: the finite slot after the first constituent (main clauses)
//! and the clause-final slot.

use logos_protocol::{FeatureFlags, Form, InflectedWord, Number, PartOfSpeech, Person, Realized, Tense, TextLeaf};

#[derive(Debug, Clone, PartialEq)]
pub enum VerbPart {
    Verb(InflectedWord),
    /// A form the morphology pass must not touch ("worden").
    Fixed(TextLeaf),
}

impl VerbPart {
    fn into_realized(self) -> Realized {
        match self {
            VerbPart::Verb(word) => Realized::Inflect(word),
            VerbPart::Fixed(leaf) => Realized::Text(leaf),
        }
    }
}

/// Where the finite verb goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Main clauses: finite verb second (or first), the rest clause-final.
    Split,
    /// Subordinate and non-finite clauses: everything clause-final.
    Final,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitVerbGroup {
    pub finite: Vec<Realized>,
    pub clause_final: Vec<Realized>,
    pub negation: Option<Realized>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerbGroup {
    chain: Vec<VerbPart>,
    negated: bool,
    particles: Vec<String>,
}

fn auxiliary(base: &str) -> VerbPart {
    VerbPart::Verb(InflectedWord::new(base, PartOfSpeech::Verb))
}

impl VerbGroup {
    pub fn new(head: InflectedWord) -> Self {
        Self { chain: vec![VerbPart::Verb(head)], negated: false, particles: Vec::new() }
    }

    fn outer_mut(&mut self) -> Option<&mut InflectedWord> {
        match self.chain.last_mut() {
            Some(VerbPart::Verb(word)) => Some(word),
            _ => None,
        }
    }

    fn set_outer_form(&mut self, form: Form) {
        if let Some(word) = self.outer_mut() {
            word.features.form = Some(form);
        }
    }

    /// The lexical verb, innermost in the chain.
    pub fn head(&self) -> Option<&InflectedWord> {
        match self.chain.first() {
            Some(VerbPart::Verb(word)) => Some(word),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Past participle plus "werden" for progressive or past passives,
    /// "sein" otherwise.
    pub fn passive(mut self, tense: Tense, progressive: bool) -> Self {
        self.set_outer_form(Form::PastParticiple);
        let aux = if progressive || tense == Tense::Past { "werden" } else { "sein" };
        let mut part = auxiliary(aux);
        if let VerbPart::Verb(word) = &mut part {
            word.features.set(FeatureFlags::PASSIVE, true);
        }
        self.chain.push(part);
        self
    }

    /// Past participle plus the perfect auxiliary. A passive "werden"
    /// becomes "worden".
    pub fn perfect(mut self, aux: &str) -> Self {
        let passive_werden = matches!(
            self.chain.last(),
            Some(VerbPart::Verb(word)) if word.base == "werden" && word.features.has(FeatureFlags::PASSIVE)
        );
        if passive_werden {
            self.chain.pop();
            self.chain.push(VerbPart::Fixed(TextLeaf::new("worden")));
        } else {
            self.set_outer_form(Form::PastParticiple);
        }
        self.chain.push(auxiliary(aux));
        self
    }

    /// The current outer verb drops to a bare infinitive under the modal.
    pub fn modal(mut self, modal: &str) -> Self {
        self.set_outer_form(Form::BareInfinitive);
        self.chain.push(VerbPart::Verb(InflectedWord::new(modal, PartOfSpeech::Modal)));
        self
    }

    pub fn future(mut self) -> Self {
        self.set_outer_form(Form::BareInfinitive);
        self.chain.push(auxiliary("werden"));
        self
    }

    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn with_particles(mut self, particles: Vec<String>) -> Self {
        self.particles = particles;
        self
    }

    /// Gives the outer verb the clause's form and, when finite, its tense
    /// and agreement. Future has been spelled out by `future`, so the finite
    /// verb is present.
    pub fn agree(mut self, form: Form, tense: Tense, person: Person, number: Number) -> Self {
        if let Some(word) = self.outer_mut() {
            word.features.form = Some(form);
            word.features.person = Some(person);
            word.features.number = Some(number);
            if form == Form::Normal {
                word.features.tense = Some(if tense == Tense::Future { Tense::Present } else { tense });
            }
        }
        self
    }

    pub fn split(self, placement: Placement) -> SplitVerbGroup {
        let VerbGroup { mut chain, negated, particles } = self;
        let negation = negated.then(|| Realized::Inflect(InflectedWord::new("nicht", PartOfSpeech::Particle)));
        let particle_leaves = particles
            .into_iter()
            .map(|p| Realized::Inflect(InflectedWord::new(p, PartOfSpeech::Particle)));

        let Some(outer) = chain.pop() else {
            return SplitVerbGroup { negation, ..SplitVerbGroup::default() };
        };
        let inner: Vec<Realized> = chain.into_iter().map(VerbPart::into_realized).collect();

        match placement {
            Placement::Final => {
                let mut clause_final: Vec<Realized> = particle_leaves.collect();
                clause_final.extend(inner);
                clause_final.push(outer.into_realized());
                SplitVerbGroup { finite: Vec::new(), clause_final, negation }
            }
            Placement::Split => {
                let mut clause_final = inner;
                let outer = match outer {
                    VerbPart::Verb(mut word) => {
                        if let Some(particle) = word.particle.clone() {
                            word.features.set(FeatureFlags::DETACHED_PARTICLE, true);
                            let mut leaf = InflectedWord::new(particle, PartOfSpeech::Particle);
                            leaf.features.set(FeatureFlags::SEPARABLE, true);
                            clause_final.push(Realized::Inflect(leaf));
                        }
                        Realized::Inflect(word)
                    }
                    fixed => fixed.into_realized(),
                };
                clause_final.extend(particle_leaves);
                SplitVerbGroup { finite: vec![outer], clause_final, negation }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(base: &str) -> InflectedWord {
        InflectedWord::new(base, PartOfSpeech::Verb)
    }

    fn bases(parts: &[Realized]) -> Vec<String> {
        parts.iter().map(Realized::plain_text).collect()
    }

    fn form_of(part: &Realized) -> Option<Form> {
        part.features().form
    }

    #[test]
    fn test_simple_present_main_clause() {
        let split = VerbGroup::new(verb("verlieren"))
            .agree(Form::Normal, Tense::Present, Person::Third, Number::Singular)
            .split(Placement::Split);
        assert_eq!(bases(&split.finite), vec!["verlieren"]);
        assert!(split.clause_final.is_empty());
        assert_eq!(split.finite[0].features().tense, Some(Tense::Present));
    }

    #[test]
    fn test_perfect_puts_participle_last() {
        // "Klaus hat das Spiel verloren"
        let split = VerbGroup::new(verb("verlieren"))
            .perfect("haben")
            .agree(Form::Normal, Tense::Present, Person::Third, Number::Singular)
            .split(Placement::Split);
        assert_eq!(bases(&split.finite), vec!["haben"]);
        assert_eq!(bases(&split.clause_final), vec!["verlieren"]);
        assert_eq!(form_of(&split.clause_final[0]), Some(Form::PastParticiple));
    }

    #[test]
    fn test_subordinate_keeps_finite_last() {
        // "..., dass Klaus das Spiel verloren haben muss"
        let split = VerbGroup::new(verb("verlieren"))
            .perfect("haben")
            .modal("müssen")
            .agree(Form::Normal, Tense::Present, Person::Third, Number::Singular)
            .split(Placement::Final);
        assert!(split.finite.is_empty());
        assert_eq!(bases(&split.clause_final), vec!["verlieren", "haben", "müssen"]);
        assert_eq!(form_of(&split.clause_final[1]), Some(Form::BareInfinitive));
    }

    #[test]
    fn test_passive_perfect_uses_worden() {
        let split = VerbGroup::new(verb("verlieren"))
            .passive(Tense::Past, false)
            .perfect("sein")
            .split(Placement::Split);
        assert_eq!(bases(&split.finite), vec!["sein"]);
        assert_eq!(bases(&split.clause_final), vec!["verlieren", "worden"]);
        assert!(matches!(split.clause_final[1], Realized::Text(_)));
    }

    #[test]
    fn test_present_passive_uses_sein() {
        let split = VerbGroup::new(verb("verlieren")).passive(Tense::Present, false).split(Placement::Split);
        assert_eq!(bases(&split.finite), vec!["sein"]);
    }

    #[test]
    fn test_future_turns_finite_into_infinitive() {
        let split = VerbGroup::new(verb("verlieren"))
            .future()
            .agree(Form::Normal, Tense::Future, Person::First, Number::Plural)
            .split(Placement::Split);
        assert_eq!(bases(&split.finite), vec!["werden"]);
        assert_eq!(split.finite[0].features().tense, Some(Tense::Present));
        assert_eq!(form_of(&split.clause_final[0]), Some(Form::BareInfinitive));
    }

    #[test]
    fn test_separable_particle_detaches_in_main_clause() {
        let mut head = verb("abschließen");
        head.particle = Some("ab".to_string());
        let split = VerbGroup::new(head.clone()).split(Placement::Split);
        assert!(split.finite[0].features().has(FeatureFlags::DETACHED_PARTICLE));
        assert_eq!(bases(&split.clause_final), vec!["ab"]);

        let split = VerbGroup::new(head).split(Placement::Final);
        assert!(!split.clause_final[0].features().has(FeatureFlags::DETACHED_PARTICLE));
        assert_eq!(split.clause_final.len(), 1);
    }

    #[test]
    fn test_negation_is_returned_separately() {
        let split = VerbGroup::new(verb("verlieren")).negate().split(Placement::Split);
        assert_eq!(split.negation.map(|n| n.plain_text()), Some("nicht".to_string()));
    }

    #[test]
    fn test_literal_particles_go_last() {
        let split = VerbGroup::new(verb("gehen"))
            .with_particles(vec!["los".to_string(), "weg".to_string()])
            .split(Placement::Split);
        assert_eq!(bases(&split.clause_final), vec!["los", "weg"]);
    }
}
