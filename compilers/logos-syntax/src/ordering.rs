use logos_protocol::{LexicalFlags, PartOfSpeech, WordEntry};

/// Slots a pre-modifier may occupy before the head noun:
/// 0 qualitative, 1 colour, 2 classifying, 3 noun modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admissible {
    pub min: u8,
    pub max: u8,
}

impl Admissible {
    /// Any adjective slot; only nouns take the last one.
    pub const ANY: Admissible = Admissible { min: 0, max: 2 };

    fn exactly(slot: u8) -> Self {
        Admissible { min: slot, max: slot }
    }

    /// Unclassified adjectives may go anywhere.
    pub fn of(pos: PartOfSpeech, entry: Option<&WordEntry>) -> Self {
        if pos == PartOfSpeech::Noun {
            return Self::exactly(3);
        }
        let Some(entry) = entry else { return Self::ANY };
        let mut slots = (u8::MAX, 0u8);
        for (flag, slot) in [
            (LexicalFlags::QUALITATIVE, 0),
            (LexicalFlags::COLOUR, 1),
            (LexicalFlags::CLASSIFYING, 2),
        ] {
            if entry.has(flag) {
                slots = (slots.0.min(slot), slots.1.max(slot));
            }
        }
        if slots.0 == u8::MAX {
            Self::ANY
        } else {
            Admissible { min: slots.0, max: slots.1 }
        }
    }
}

/// Bubble sort that only swaps neighbours whose ranges cannot overlap, so
/// unclassified modifiers keep their authored position.
pub fn order_by_admissible<T>(items: &mut [(Admissible, T)]) {
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..items.len() {
            if items[i - 1].0.min > items[i].0.max {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
    }
}
