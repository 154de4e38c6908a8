use crate::domain::model::ReadingType;

const YES_NO_TEXT: &str =
    "Reflect on the meaning of this card in relation to your yes-or-no question.";
const THREE_CARD_TEXT: &str = "Here is your 3-card reading. Consider how each card \
     relates to the others and to your situation.";
const SEVEN_CARD_TEXT: &str = "Here is your 7-card reading. Consider how each card \
     relates to the others and to your situation.";

/// Static interpretation text for a reading type. Total over the enum, no
/// failure mode.
pub fn for_reading(reading_type: ReadingType) -> &'static str {
    match reading_type {
        ReadingType::YesNo => YES_NO_TEXT,
        ReadingType::ThreeCard => THREE_CARD_TEXT,
        ReadingType::SevenCard => SEVEN_CARD_TEXT,
    }
}
