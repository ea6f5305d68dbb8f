//! Phrase question builders, one per [`PhraseExerciseKind`].

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Phrase;
use crate::types::PhraseCategory;

use super::{
    pick_template, shuffle_options, ExerciseKind, FocusItem, PhraseExerciseKind, Question,
};

/// Situational framings used by the conversation-context exercise.
/// Categories without a curated list share a generic fallback.
fn contexts_for(category: PhraseCategory) -> &'static [&'static str] {
    match category {
        PhraseCategory::Greetings => &[
            "meeting someone for the first time",
            "arriving at a hotel",
            "entering a shop",
        ],
        PhraseCategory::Dining => &[
            "in a restaurant",
            "ordering drinks",
            "complimenting food",
        ],
        PhraseCategory::Directions => &[
            "asking for help finding a place",
            "when lost",
            "at a tourist information",
        ],
        PhraseCategory::Shopping => &["in a store", "at a market", "buying souvenirs"],
        PhraseCategory::Emergencies => &[
            "at a hospital",
            "calling for help",
            "reporting a problem",
        ],
        PhraseCategory::Social => &["at a party", "making conversation", "saying goodbye"],
        PhraseCategory::Communication | PhraseCategory::Numbers => &["in conversation"],
    }
}

type Template = fn(&Phrase) -> String;

const GREEK_FROM_ENGLISH: &[Template] = &[
    |p| format!("What is the Greek phrase for: \"{}\"?", p.english),
    |p| format!("How would you say \"{}\" in Greek?", p.english),
];

const ENGLISH_FROM_GREEK: &[Template] = &[
    |p| format!("What does \"{}\" mean in English?", p.greek),
    |p| format!("Choose the English meaning of \"{}\"", p.greek),
];

pub(super) fn build(
    kind: PhraseExerciseKind,
    rng: &mut ChaCha8Rng,
    focus: &'static Phrase,
    distractors: &[&'static Phrase],
) -> Question {
    let mut audio_text = None;
    let mut hint = None;
    let mut context = None;

    let (prompt, answer_of): (String, fn(&Phrase) -> String) = match kind {
        PhraseExerciseKind::TranslationToGreek => {
            context = Some(focus.notes.to_string());
            (pick_template(rng, GREEK_FROM_ENGLISH)(focus), |p| {
                p.greek.to_string()
            })
        }
        PhraseExerciseKind::GreekToTranslation => {
            (pick_template(rng, ENGLISH_FROM_GREEK)(focus), |p| {
                p.english.to_string()
            })
        }
        PhraseExerciseKind::PronunciationMatching => {
            audio_text = Some(focus.greek.to_string());
            (
                "Listen to the Greek phrase and choose the correct pronunciation".to_string(),
                (|p| p.pronunciation.to_string()) as fn(&Phrase) -> String,
            )
        }
        PhraseExerciseKind::ConversationContext => {
            let situations = contexts_for(focus.category);
            let situation = situations[rng.gen_range(0..situations.len())];
            hint = Some(focus.english.to_string());
            context = Some(format!(
                "You are {}. Choose the most appropriate Greek phrase.",
                situation
            ));
            (
                format!("What would you say {}?", situation),
                (|p| p.greek.to_string()) as fn(&Phrase) -> String,
            )
        }
    };

    let correct_answer = answer_of(focus);
    let options = shuffle_options(
        rng,
        correct_answer.clone(),
        distractors.iter().map(|p| answer_of(*p)).collect(),
    );

    Question {
        kind: ExerciseKind::Phrase(kind),
        prompt,
        correct_answer,
        options,
        focus: Some(FocusItem::Phrase(focus.id)),
        audio_text,
        hint,
        context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use rand::SeedableRng;

    fn fixture() -> (ChaCha8Rng, &'static Phrase, Vec<&'static Phrase>) {
        let rng = ChaCha8Rng::seed_from_u64(2);
        let focus = catalog::phrase_by_id(1).unwrap();
        let distractors: Vec<&'static Phrase> = [2, 3, 4]
            .iter()
            .map(|&id| catalog::phrase_by_id(id).unwrap())
            .collect();
        (rng, focus, distractors)
    }

    #[test]
    fn test_translation_to_greek() {
        let (mut rng, focus, distractors) = fixture();
        let q = build(
            PhraseExerciseKind::TranslationToGreek,
            &mut rng,
            focus,
            &distractors,
        );
        assert_eq!(q.correct_answer, "Γεια σας");
        assert!(q.prompt.contains("Hello (formal)"));
        assert_eq!(q.context.as_deref(), Some(focus.notes));
    }

    #[test]
    fn test_greek_to_translation() {
        let (mut rng, focus, distractors) = fixture();
        let q = build(
            PhraseExerciseKind::GreekToTranslation,
            &mut rng,
            focus,
            &distractors,
        );
        assert_eq!(q.correct_answer, "Hello (formal)");
        assert!(q.prompt.contains("Γεια σας"));
    }

    #[test]
    fn test_pronunciation_matching_plays_greek_text() {
        let (mut rng, focus, distractors) = fixture();
        let q = build(
            PhraseExerciseKind::PronunciationMatching,
            &mut rng,
            focus,
            &distractors,
        );
        assert_eq!(q.correct_answer, "YAH-sahs");
        assert_eq!(q.audio_text.as_deref(), Some("Γεια σας"));
    }

    #[test]
    fn test_conversation_context_frames_the_situation() {
        let (mut rng, focus, distractors) = fixture();
        let q = build(
            PhraseExerciseKind::ConversationContext,
            &mut rng,
            focus,
            &distractors,
        );
        assert_eq!(q.correct_answer, "Γεια σας");
        assert_eq!(q.hint.as_deref(), Some("Hello (formal)"));
        let context = q.context.unwrap();
        assert!(context.starts_with("You are "));
        let situation = contexts_for(focus.category)
            .iter()
            .find(|s| q.prompt.contains(**s));
        assert!(situation.is_some(), "{}", q.prompt);
    }

    #[test]
    fn test_every_category_has_contexts() {
        for category in PhraseCategory::ALL {
            assert!(!contexts_for(category).is_empty());
        }
    }
}
