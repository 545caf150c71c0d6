use logos_protocol::{
    Category, Coordination, DiscourseFunction, Features, Group, InflectedWord, Number, PartOfSpeech, TextLeaf,
};

use crate::{merged, Realiser};

impl<'a> Realiser<'a> {
    /// "a, b und c". Members receive the coordination's own features plus
    /// whatever the parent imposes; the group itself reads as plural when
    /// the conjunction is additive.
    pub(crate) fn coordination(&self, coord: &Coordination, imposed: &Features) -> Group {
        let member_imposed = merged(&coord.features, imposed);
        let mut features = member_imposed.clone();
        if coord.is_plural() {
            features.number = Some(Number::Plural);
        }

        let none = Features::default();
        let mut group = Group::new(Category::Coordinated).with_features(features);
        group.push(self.list(DiscourseFunction::PreModifier, &coord.pre_modifiers, &none).into());

        let last = coord.coordinates.len().saturating_sub(1);
        for (i, member) in coord.coordinates.iter().enumerate() {
            if i > 0 && i < last {
                group.push(TextLeaf::new(",").into());
            } else if i > 0 && !coord.conjunction.is_empty() {
                let mut conjunction = InflectedWord::new(coord.conjunction.clone(), PartOfSpeech::Conjunction);
                conjunction.features.function = Some(DiscourseFunction::Conjunction);
                group.push(conjunction.into());
            }
            group.push(self.element(member, &member_imposed));
        }

        group.push(self.list(DiscourseFunction::PostModifier, &coord.post_modifiers, &none).into());
        group.push(self.list(DiscourseFunction::Complement, &coord.complements, &none).into());
        group
    }
}
