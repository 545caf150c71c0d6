use logos_ortho::OrthographyConfig;
use logos_protocol::{
    Case, Coordination, Element, FeatureFlags, Features, Gender, InterrogativeType, LexiconIndex, PartOfSpeech,
    Phrase, Tense, Word, WordEntry,
};
use logos_wasm::Pipeline;

fn lexicon() -> LexiconIndex {
    vec![
        WordEntry::new("Spiel", PartOfSpeech::Noun).with_gender(Gender::Neuter).with_plural("Spiele"),
        WordEntry::new("Sonne", PartOfSpeech::Noun).with_gender(Gender::Feminine).with_plural("Sonnen"),
        WordEntry::new("Fahrrad", PartOfSpeech::Noun).with_gender(Gender::Neuter).with_plural("Fahrräder"),
        WordEntry::new("verlieren", PartOfSpeech::Verb).with_preterite("verlor").with_past_participle("verloren"),
    ]
    .into_iter()
    .collect()
}

fn realise(element: impl Into<Element>) -> String {
    Pipeline::new(lexicon()).realise(&element.into())
}

fn klaus_verliert_das_spiel() -> Phrase {
    Phrase::clause(Word::noun("Klaus"), Word::verb("verlieren"))
        .with_object(Phrase::noun(Some("das"), Word::noun("Spiel")))
}

#[test]
fn declarative() {
    assert_eq!(realise(klaus_verliert_das_spiel()), "Klaus verliert das Spiel.");
}

#[test]
fn yes_no_question() {
    let clause = klaus_verliert_das_spiel().with_interrogative(InterrogativeType::YesNo);
    assert_eq!(realise(clause), "Verliert Klaus das Spiel?");
}

#[test]
fn who_subject_question() {
    let clause = klaus_verliert_das_spiel().with_interrogative(InterrogativeType::WhoSubject);
    assert_eq!(realise(clause), "Wer verliert das Spiel?");
}

#[test]
fn what_object_question() {
    let clause = klaus_verliert_das_spiel().with_interrogative(InterrogativeType::WhatObject);
    assert_eq!(realise(clause), "Was verliert Klaus?");
}

#[test]
fn how_question() {
    let clause = klaus_verliert_das_spiel().with_interrogative(InterrogativeType::How);
    assert_eq!(realise(clause), "Wie verliert Klaus das Spiel?");
}

#[test]
fn separable_verb_in_main_clause() {
    let clause = Phrase::clause(Word::noun("Bob"), Word::verb("abschließen").with_flag(FeatureFlags::SEPARABLE))
        .with_verb_modifier(Word::adverb("schnell"))
        .with_object(Phrase::noun(Some("das"), Word::noun("Fahrrad")));
    assert_eq!(realise(clause), "Bob schließt schnell das Fahrrad ab.");
}

#[test]
fn separable_verb_in_subordinate_clause() {
    let inner = Phrase::clause(Word::noun("Bob"), Word::verb("abschließen").with_flag(FeatureFlags::SEPARABLE))
        .with_object(Phrase::noun(Some("das"), Word::noun("Fahrrad")))
        .subordinate("dass");
    let clause = Phrase::clause(Word::noun("Klaus"), Word::verb("wissen")).with_object(inner);
    assert_eq!(realise(clause), "Klaus weiß, dass Bob das Fahrrad abschließt.");
}

#[test]
fn invariant_noun_in_genitive() {
    let np = Phrase::noun(Some("der"), Word::noun("fonds"))
        .with_features(Features { case: Some(Case::Genitive), ..Features::default() });
    assert_eq!(realise(np), "Des Fonds.");
}

#[test]
fn subordinate_post_modifier() {
    let rain = Phrase::clause(Word::pronoun("es"), Word::verb("regnen")).subordinate("während");
    let clause = Phrase::clause(Phrase::noun(Some("die"), Word::noun("Sonne")), Word::verb("scheinen"))
        .with_post_modifier(rain);
    assert_eq!(realise(clause), "Die Sonne scheint, während es regnet.");
}

#[test]
fn past_passive_with_agent() {
    let clause = klaus_verliert_das_spiel().with_flag(FeatureFlags::PASSIVE).with_tense(Tense::Past);
    assert_eq!(realise(clause), "Das Spiel wurde von Klaus verloren.");
}

#[test]
fn present_perfect() {
    let clause = klaus_verliert_das_spiel().with_flag(FeatureFlags::PERFECT);
    assert_eq!(realise(clause), "Klaus hat das Spiel verloren.");
}

#[test]
fn negation() {
    let clause = klaus_verliert_das_spiel().with_flag(FeatureFlags::NEGATED);
    assert_eq!(realise(clause), "Klaus verliert das Spiel nicht.");
}

#[test]
fn modal() {
    let clause = klaus_verliert_das_spiel().with_modal("können");
    assert_eq!(realise(clause), "Klaus kann das Spiel verlieren.");
}

#[test]
fn coordinated_subjects_agree_in_plural() {
    let subject = Coordination::and(vec![Word::noun("Klaus").into(), Word::noun("Maria").into()]);
    let clause = Phrase::clause(subject, Word::verb("verlieren"))
        .with_object(Phrase::noun(Some("das"), Word::noun("Spiel")));
    assert_eq!(realise(clause), "Klaus und Maria verlieren das Spiel.");
}

#[test]
fn orthography_settings_apply() {
    let clause = klaus_verliert_das_spiel().with_front_modifier(Word::adverb("heute"));
    let pipeline = Pipeline::new(lexicon());
    assert_eq!(pipeline.realise(&clause.clone().into()), "Heute verliert Klaus das Spiel.");

    let pipeline = pipeline.with_orthography_config(OrthographyConfig::default().with_front_modifier_comma(true));
    assert_eq!(pipeline.realise(&clause.into()), "Heute, verliert Klaus das Spiel.");
}

#[test]
fn questions_keep_front_modifier_after_subject() {
    let heute = || klaus_verliert_das_spiel().with_front_modifier(Word::adverb("heute"));
    assert_eq!(realise(heute().with_interrogative(InterrogativeType::WhatObject)), "Was verliert Klaus heute?");
    assert_eq!(realise(heute().with_interrogative(InterrogativeType::YesNo)), "Verliert Klaus heute das Spiel?");
    assert_eq!(realise(heute().with_interrogative(InterrogativeType::How)), "Wie verliert Klaus heute das Spiel?");
}

#[test]
fn parallel_modifiers_are_listed() {
    let clause = Phrase::clause(Word::noun("Bob"), Word::verb("arbeiten"))
        .with_verb_modifier(Word::adverb("schnell"))
        .with_verb_modifier(Word::adverb("leise"))
        .with_verb_modifier(Word::adverb("sicher"));
    assert_eq!(realise(clause), "Bob arbeitet schnell, leise und sicher.");
}

#[test]
fn phrase_modifier_blocks_the_list() {
    let clause = Phrase::clause(Word::noun("Bob"), Word::verb("arbeiten"))
        .with_verb_modifier(Word::adverb("schnell"))
        .with_verb_modifier(Phrase::adverb(Word::adverb("leise")).with_pre_modifier(Word::adverb("sehr")));
    assert_eq!(realise(clause), "Bob arbeitet schnell sehr leise.");
}

#[test]
fn passive_perfect_auxiliaries() {
    let perfect = || klaus_verliert_das_spiel().with_flag(FeatureFlags::PASSIVE).with_flag(FeatureFlags::PERFECT);
    assert_eq!(realise(perfect()), "Das Spiel ist von Klaus verloren gewesen.");
    assert_eq!(realise(perfect().with_tense(Tense::Past)), "Das Spiel war von Klaus verloren worden.");
}
