use super::domain::{Dimension, Grade};

/// Fixed sentence for a dimension grade. D and F share the lowest template.
pub(crate) fn dimension_explanation(dimension: Dimension, grade: Grade) -> String {
    let sentence = match (dimension, grade) {
        (Dimension::Quality, Grade::A) => {
            "Exceptional materials and finishing put this piece at the top of its category."
        }
        (Dimension::Quality, Grade::B) => {
            "Good material choices deliver solid quality for everyday wear."
        }
        (Dimension::Quality, Grade::C) => {
            "Average quality: the materials are serviceable but unremarkable."
        }
        (Dimension::Quality, _) => {
            "Below-average materials suggest the quality may not hold up to the price."
        }
        (Dimension::Construction, Grade::A) => {
            "Premium construction with the craftsmanship expected from a trusted maker."
        }
        (Dimension::Construction, Grade::B) => {
            "Quality construction with reliable seams and finishing."
        }
        (Dimension::Construction, Grade::C) => {
            "Standard construction typical of mainstream retail garments."
        }
        (Dimension::Construction, _) => {
            "Basic construction; expect shortcuts in stitching and finishing."
        }
        (Dimension::Durability, Grade::A) => {
            "Built to last: expect five or more years of regular wear with proper care."
        }
        (Dimension::Durability, Grade::B) => {
            "Durable enough for three to four years of regular wear."
        }
        (Dimension::Durability, Grade::C) => {
            "Moderate durability: plan on two to three years of regular wear."
        }
        (Dimension::Durability, _) => {
            "Limited durability: likely to show wear within one to two years."
        }
        (Dimension::Ethics, Grade::A) => {
            "Positive ethical profile backed by responsible sourcing and brand practices."
        }
        (Dimension::Ethics, Grade::B) => {
            "Good ethical practices with room for further transparency."
        }
        (Dimension::Ethics, Grade::C) => {
            "Neutral ethical profile: no strong signals either way."
        }
        (Dimension::Ethics, _) => {
            "Concerning ethical signals around sourcing or labour practices."
        }
    };
    sentence.to_string()
}

pub(crate) fn overall_explanation(grade: Grade) -> String {
    let sentence = match grade {
        Grade::A => "An excellent purchase that balances quality, construction and ethics.",
        Grade::B => "A good purchase with only minor trade-offs.",
        Grade::C => "A middle-of-the-road purchase; weigh the trade-offs before buying.",
        Grade::D | Grade::F => "A weak purchase; consider better-made alternatives.",
    };
    sentence.to_string()
}
