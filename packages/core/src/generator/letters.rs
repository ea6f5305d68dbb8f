//! Letter question builders, one per [`LetterExerciseKind`].

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Letter;

use super::{
    pick_template, shuffle_options, ExerciseKind, FocusItem, LetterExerciseKind, Question,
};

/// English word demonstrating a letter's sound, used by the
/// word-association prompts. Falls back to the letter's first example
/// word for sounds without a curated entry.
fn sound_word(letter: &Letter) -> &'static str {
    match letter.sound {
        "ah" => "father",
        "beh" => "baby",
        "gah" => "game",
        "theh" => "this",
        "eh" => "bed",
        "dzeh" => "zebra",
        "ee" => "see",
        "oh" => "more",
        "pee" => "pie",
        "roh" => "road",
        "sih" => "sing",
        "tah" => "take",
        "fee" => "phone",
        "hee" => "loch",
        "psee" => "lapse",
        "lah" => "lamp",
        "mee" => "mouse",
        "nee" => "nice",
        "ksee" => "taxi",
        "kah" => "kite",
        _ => letter.example_words.first().copied().unwrap_or(""),
    }
}

type Template = fn(&Letter) -> String;

const NAME_FROM_SOUND: &[Template] = &[
    |l| format!("Which letter makes the \"{}\" sound?", l.sound),
    |l| format!("Which letter is pronounced \"{}\"?", l.sound),
];

const SOUND_FROM_GLYPH: &[Template] = &[
    |l| format!("What sound does \"{}\" make?", l.uppercase),
    |l| format!("How is \"{}\" pronounced?", l.uppercase),
];

const GLYPH_FROM_SOUND: &[Template] = &[
    |l| {
        format!(
            "Which Greek letter makes the \"{}\" sound (like \"{}\")?",
            l.sound,
            l.example_words.first().copied().unwrap_or("")
        )
    },
    |l| format!("Which Greek letter do you hear in \"{}\"?", l.sound),
];

const WORD_ASSOCIATION: &[Template] = &[
    |l| {
        format!(
            "Which letter makes the \"{}\" sound (like in \"{}\")?",
            l.sound,
            sound_word(l)
        )
    },
    |l| {
        format!(
            "The word \"{}\" starts with which letter's sound?",
            sound_word(l)
        )
    },
];

pub(super) fn build(
    kind: LetterExerciseKind,
    rng: &mut ChaCha8Rng,
    focus: &'static Letter,
    distractors: &[&'static Letter],
) -> Question {
    let mut audio_text = None;
    let mut hint = None;

    let (prompt, answer_of): (String, fn(&Letter) -> String) = match kind {
        LetterExerciseKind::MultipleChoice => {
            (pick_template(rng, NAME_FROM_SOUND)(focus), |l| {
                l.name.to_string()
            })
        }
        LetterExerciseKind::LetterToSound => {
            hint = Some(focus.comparison.to_string());
            (pick_template(rng, SOUND_FROM_GLYPH)(focus), |l| {
                l.sound.to_string()
            })
        }
        LetterExerciseKind::SoundToLetter => {
            (pick_template(rng, GLYPH_FROM_SOUND)(focus), |l| {
                l.uppercase.to_string()
            })
        }
        LetterExerciseKind::LetterMatching => {
            // random direction: uppercase to lowercase, or the reverse
            if rng.gen_bool(0.5) {
                (
                    format!(
                        "Match the uppercase \"{}\" to its lowercase form",
                        focus.uppercase
                    ),
                    (|l| l.lowercase.to_string()) as fn(&Letter) -> String,
                )
            } else {
                (
                    format!(
                        "Match the lowercase \"{}\" to its uppercase form",
                        focus.lowercase
                    ),
                    (|l| l.uppercase.to_string()) as fn(&Letter) -> String,
                )
            }
        }
        LetterExerciseKind::WordAssociation => {
            (pick_template(rng, WORD_ASSOCIATION)(focus), |l| {
                l.name.to_string()
            })
        }
        LetterExerciseKind::SoundIdentification => {
            // word-based when the letter carries vocabulary, otherwise
            // play the bare letter sound
            if let Some(word) = focus
                .common_words
                .get(rng.gen_range(0..focus.common_words.len().max(1)))
            {
                audio_text = Some(word.greek.to_string());
                (
                    "Listen to the word and choose the letter it begins with".to_string(),
                    (|l| l.name.to_string()) as fn(&Letter) -> String,
                )
            } else {
                audio_text = Some(focus.lowercase.to_string());
                (
                    "Listen to the sound and choose the letter you hear".to_string(),
                    (|l| l.name.to_string()) as fn(&Letter) -> String,
                )
            }
        }
    };

    let correct_answer = answer_of(focus);
    let options = shuffle_options(
        rng,
        correct_answer.clone(),
        distractors.iter().map(|l| answer_of(*l)).collect(),
    );

    Question {
        kind: ExerciseKind::Letter(kind),
        prompt,
        correct_answer,
        options,
        focus: Some(FocusItem::Letter(focus.id)),
        audio_text,
        hint,
        context: None,
    }
}
