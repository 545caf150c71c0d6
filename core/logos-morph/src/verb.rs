use logos_protocol::{FeatureFlags, Features, Form, LexicalFlags, Number, Person, Tense, WordEntry};
use tracing::trace;

use crate::phonology::{drop_chars, ends_with_any, is_consonant, last_char, penultimate_char};

/// Detachable verb particles, longest first so "zurück" wins over "zu".
pub const SEPARABLE_PREFIXES: &[&str] = &[
    "zusammen", "zurück", "vorbei", "weiter", "heraus", "herein", "fest", "nach", "fort", "frei", "hin",
    "her", "los", "mit", "vor", "weg", "aus", "auf", "bei", "ein", "an", "ab", "zu",
];

const INSEPARABLE_PREFIXES: &[&str] = &["miss", "emp", "ent", "ver", "zer", "be", "er", "ge"];

/// Closed-class verbs the realizer introduces itself (auxiliaries and
/// modals). Present forms in 1sg, 2sg, 3sg, 1pl, 2pl, 3pl order.
struct ClosedClassVerb {
    base: &'static str,
    present: [&'static str; 6],
    preterite: &'static str,
    participle: &'static str,
}

const CLOSED_CLASS: &[ClosedClassVerb] = &[
    ClosedClassVerb { base: "sein", present: ["bin", "bist", "ist", "sind", "seid", "sind"], preterite: "war", participle: "gewesen" },
    ClosedClassVerb { base: "haben", present: ["habe", "hast", "hat", "haben", "habt", "haben"], preterite: "hatte", participle: "gehabt" },
    ClosedClassVerb { base: "werden", present: ["werde", "wirst", "wird", "werden", "werdet", "werden"], preterite: "wurde", participle: "geworden" },
    ClosedClassVerb { base: "können", present: ["kann", "kannst", "kann", "können", "könnt", "können"], preterite: "konnte", participle: "gekonnt" },
    ClosedClassVerb { base: "müssen", present: ["muss", "musst", "muss", "müssen", "müsst", "müssen"], preterite: "musste", participle: "gemusst" },
    ClosedClassVerb { base: "dürfen", present: ["darf", "darfst", "darf", "dürfen", "dürft", "dürfen"], preterite: "durfte", participle: "gedurft" },
    ClosedClassVerb { base: "sollen", present: ["soll", "sollst", "soll", "sollen", "sollt", "sollen"], preterite: "sollte", participle: "gesollt" },
    ClosedClassVerb { base: "wollen", present: ["will", "willst", "will", "wollen", "wollt", "wollen"], preterite: "wollte", participle: "gewollt" },
    ClosedClassVerb { base: "mögen", present: ["mag", "magst", "mag", "mögen", "mögt", "mögen"], preterite: "mochte", participle: "gemocht" },
    ClosedClassVerb { base: "wissen", present: ["weiß", "weißt", "weiß", "wissen", "wisst", "wissen"], preterite: "wusste", participle: "gewusst" },
];

fn closed_class(base: &str) -> Option<&'static ClosedClassVerb> {
    CLOSED_CLASS.iter().find(|verb| verb.base == base)
}

/// True for the modal verbs of the built-in table.
pub fn is_modal(base: &str) -> bool {
    matches!(base, "können" | "müssen" | "dürfen" | "sollen" | "wollen" | "mögen")
}

/// Index into 1sg..3pl.
fn slot(features: &Features) -> usize {
    let person = match features.person_or_default() {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    };
    match features.number_or_default() {
        Number::Singular => person,
        Number::Plural => person + 3,
    }
}

/// Finds the separable particle of `base`: the lexicon's particle, a
/// particle split off a two-token lexicon form ("schließt ab"), or a known
/// prefix. Only verbs flagged separable (by feature or lexicon) qualify.
pub fn separable_particle(base: &str, entry: Option<&WordEntry>, flagged: bool) -> Option<String> {
    if let Some(particle) = entry.and_then(|e| e.particle.clone()) {
        return Some(particle);
    }
    let separable = flagged || entry.map_or(false, |e| e.has(LexicalFlags::SEPARABLE));
    if !separable {
        return None;
    }
    if let Some(e) = entry {
        let split = [&e.present_3s, &e.preterite, &e.present_1s]
            .into_iter()
            .flatten()
            .find_map(|form| form.split_whitespace().nth(1).map(str::to_string));
        if split.is_some() {
            return split;
        }
    }
    SEPARABLE_PREFIXES
        .iter()
        .find(|prefix| base.starts_with(**prefix) && base.len() > prefix.len() + 2)
        .map(|prefix| prefix.to_string())
}

/// Strips the infinitive ending: "-en", or just "-n" after "-el"/"-er".
pub fn verb_stem(base: &str) -> &str {
    if ends_with_any(base, &["eln", "ern"]) || (base.ends_with('n') && !base.ends_with("en")) {
        drop_chars(base, 1)
    } else if base.ends_with("en") {
        drop_chars(base, 2)
    } else {
        base
    }
}

/// Stems ending in -t/-d, or a consonant + m/n cluster ("regn", "atm"),
/// insert "e" before consonantal endings.
pub fn needs_e_insertion(stem: &str) -> bool {
    match (penultimate_char(stem), last_char(stem)) {
        (_, Some('t' | 'd')) => true,
        (Some(before), Some('m' | 'n')) => {
            is_consonant(before) && !matches!(before, 'l' | 'r' | 'h' | 'm' | 'n')
        }
        _ => false,
    }
}

pub fn inflect_verb(base: &str, features: &Features, entry: Option<&WordEntry>, particle: Option<&str>) -> String {
    if features.has(FeatureFlags::NON_MORPH) {
        return base.to_string();
    }
    let detached = features.has(FeatureFlags::DETACHED_PARTICLE);
    let stem_verb = particle.and_then(|p| base.strip_prefix(p)).unwrap_or(base);

    match features.form_or_default() {
        Form::BareInfinitive | Form::Gerund => {
            if detached { stem_verb.to_string() } else { base.to_string() }
        }
        Form::Infinitive => match particle {
            Some(p) => format!("{}zu{}", p, stem_verb),
            None => format!("zu {}", base),
        },
        Form::PresentParticiple => format!("{}d", base),
        Form::PastParticiple => past_participle(stem_verb, entry, particle),
        Form::Imperative => {
            let form = imperative(stem_verb, features);
            place_particle(&form, particle, detached)
        }
        Form::Normal => {
            let form = finite(stem_verb, features, entry);
            place_particle(&form, particle, detached)
        }
    }
}

/// Reattaches or drops the particle. Two-token lexicon forms carry their
/// own particle after the verb.
fn place_particle(form: &str, particle: Option<&str>, detached: bool) -> String {
    let mut tokens = form.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let trailing = tokens.last();

    match particle.or(trailing) {
        Some(_) if detached => head.to_string(),
        Some(p) => format!("{}{}", p, head),
        None => form.to_string(),
    }
}

fn finite(stem_verb: &str, features: &Features, entry: Option<&WordEntry>) -> String {
    let slot = slot(features);
    let past = features.tense == Some(Tense::Past);

    if let Some(form) = entry.and_then(|e| lexical_finite(e, past, slot)) {
        return form;
    }
    if let Some(verb) = closed_class(stem_verb) {
        return if past { conjugate_preterite(verb.preterite, slot) } else { verb.present[slot].to_string() };
    }
    trace!(verb = stem_verb, "regular conjugation");
    if past {
        regular_preterite(stem_verb, slot)
    } else {
        regular_present(stem_verb, slot)
    }
}

fn lexical_finite(entry: &WordEntry, past: bool, slot: usize) -> Option<String> {
    if past {
        return entry.preterite.as_deref().map(|pret| conjugate_preterite(pret, slot));
    }
    let field = match slot {
        0 => &entry.present_1s,
        1 => &entry.present_2s,
        2 => &entry.present_3s,
        4 => &entry.present_2p,
        _ => &entry.present_plural,
    };
    field.clone()
}

fn regular_present(stem_verb: &str, slot: usize) -> String {
    let stem = verb_stem(stem_verb);
    let insert_e = needs_e_insertion(stem);
    match slot {
        0 if stem.ends_with("el") => format!("{}le", drop_chars(stem, 2)),
        0 => format!("{}e", stem),
        1 if ends_with_any(stem, &["s", "ß", "x", "z"]) => format!("{}t", stem),
        1 if insert_e => format!("{}est", stem),
        1 => format!("{}st", stem),
        2 | 4 if insert_e => format!("{}et", stem),
        2 | 4 => format!("{}t", stem),
        _ => stem_verb.to_string(),
    }
}

fn regular_preterite(stem_verb: &str, slot: usize) -> String {
    let stem = verb_stem(stem_verb);
    let pret = if needs_e_insertion(stem) { format!("{}ete", stem) } else { format!("{}te", stem) };
    conjugate_preterite(&pret, slot)
}

/// Person/number endings on a 1sg preterite form ("verlor", "hatte",
/// "schloss ab").
fn conjugate_preterite(pret: &str, slot: usize) -> String {
    let mut tokens = pret.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let rest: Vec<&str> = tokens.collect();

    let weak = head.ends_with('e');
    let dental = matches!(last_char(head), Some('t' | 'd'));
    let form = match slot {
        0 | 2 => head.to_string(),
        1 if weak => format!("{}st", head),
        1 if dental || ends_with_any(head, &["s", "ß", "x", "z"]) => format!("{}est", head),
        1 => format!("{}st", head),
        4 if weak => format!("{}t", head),
        4 if dental => format!("{}et", head),
        4 => format!("{}t", head),
        _ if weak => format!("{}n", head),
        _ => format!("{}en", head),
    };
    if rest.is_empty() {
        form
    } else {
        format!("{} {}", form, rest.join(" "))
    }
}

fn past_participle(stem_verb: &str, entry: Option<&WordEntry>, particle: Option<&str>) -> String {
    if let Some(pp) = entry.and_then(|e| e.past_participle.clone()) {
        return pp;
    }
    let core = match closed_class(stem_verb) {
        Some(verb) => verb.participle.to_string(),
        None => regular_participle(stem_verb),
    };
    match particle {
        Some(p) => format!("{}{}", p, core),
        None => core,
    }
}

fn regular_participle(verb: &str) -> String {
    let stem = verb_stem(verb);
    let suffix = if needs_e_insertion(stem) { "et" } else { "t" };
    let inseparable = INSEPARABLE_PREFIXES
        .iter()
        .any(|prefix| verb.starts_with(prefix) && verb.len() > prefix.len() + 3);
    if inseparable || verb.ends_with("ieren") {
        format!("{}{}", stem, suffix)
    } else {
        format!("ge{}{}", stem, suffix)
    }
}

fn imperative(stem_verb: &str, features: &Features) -> String {
    if stem_verb == "sein" {
        return if features.number_or_default() == Number::Plural { "seid" } else { "sei" }.to_string();
    }
    let stem = verb_stem(stem_verb);
    match features.number_or_default() {
        Number::Plural => regular_present(stem_verb, 4),
        Number::Singular if needs_e_insertion(stem) => format!("{}e", stem),
        Number::Singular => stem.to_string(),
    }
}
