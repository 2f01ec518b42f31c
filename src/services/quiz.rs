use crate::models::{QuizAnswer, QuizOption, QuizQuestion, Style};

fn option(key: char, text: &str, style: Style) -> QuizOption {
    QuizOption {
        key,
        text: text.to_string(),
        style,
    }
}

fn question(id: u32, text: &str, options: Vec<QuizOption>) -> QuizQuestion {
    QuizQuestion {
        id,
        text: text.to_string(),
        options,
    }
}

/// The static style-quiz question set. Every question carries exactly
/// four options, each voting for one style.
pub fn questions() -> Vec<QuizQuestion> {
    use Style::*;

    vec![
        question(
            1,
            "Wie soll dein Zuhause auf Gäste wirken?",
            vec![
                option('A', "Hell, freundlich und natürlich", Skandinavisch),
                option('B', "Ruhig und aufgeräumt", Minimalistisch),
                option('C', "Roh, urban und markant", Industrial),
                option('D', "Bunt, verspielt und gemütlich", Boho),
            ],
        ),
        question(
            2,
            "Welche Materialien sprechen dich am meisten an?",
            vec![
                option('A', "Helles Holz und Leinen", Skandinavisch),
                option('B', "Glas und lackierte Flächen", Minimalistisch),
                option('C', "Stahl, Leder und Beton", Industrial),
                option('D', "Rattan, Jute und Samt", Boho),
            ],
        ),
        question(
            3,
            "Welche Farbwelt fühlt sich nach dir an?",
            vec![
                option('A', "Weiß mit sanften Pastelltönen", Skandinavisch),
                option('B', "Monochrom in Schwarz und Weiß", Minimalistisch),
                option('C', "Anthrazit und Rostbraun", Industrial),
                option('D', "Warme Erdtöne und Terrakotta", Boho),
            ],
        ),
        question(
            4,
            "Wie viel Dekoration darf es sein?",
            vec![
                option('A', "So wenig wie möglich", Minimalistisch),
                option('B', "Ein paar natürliche Akzente", Skandinavisch),
                option('C', "Einzelne Vintage-Fundstücke", Industrial),
                option('D', "Viele Pflanzen, Kissen und Körbe", Boho),
            ],
        ),
        question(
            5,
            "Welches Möbelstück würdest du zuerst kaufen?",
            vec![
                option('A', "Einen schlichten Esstisch aus Eiche", Skandinavisch),
                option('B', "Ein grifflos weißes Sideboard", Minimalistisch),
                option('C', "Ein Bücherregal aus Metallrohren", Industrial),
                option('D', "Einen geflochtenen Hängesessel", Boho),
            ],
        ),
    ]
}

/// Classifies a quiz session into its dominant style.
///
/// Pure and order-independent: each answer casts one vote for the style of
/// its selected option. Ties resolve to the first declared [`Style`]
/// variant, so an empty answer list yields `Style::ALL[0]`. Answers
/// referencing unknown questions or options are skipped.
pub fn classify(answers: &[QuizAnswer]) -> Style {
    let questions = questions();
    let mut votes = [0u32; Style::ALL.len()];

    for answer in answers {
        let question = match questions.iter().find(|q| q.id == answer.question_id) {
            Some(q) => q,
            None => continue,
        };
        let option = match question
            .options
            .iter()
            .find(|o| o.key == answer.selected_option)
        {
            Some(o) => o,
            None => continue,
        };
        votes[option.style as usize] += 1;
    }

    let mut best = Style::ALL[0];
    for style in Style::ALL {
        if votes[style as usize] > votes[best as usize] {
            best = style;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: u32, selected_option: char) -> QuizAnswer {
        QuizAnswer {
            question_id,
            selected_option,
        }
    }

    #[test]
    fn test_every_question_has_four_options() {
        for q in questions() {
            assert_eq!(q.options.len(), 4, "question {} option count", q.id);
        }
    }

    #[test]
    fn test_all_answers_a_yields_skandinavisch() {
        // Four "A" options vote Skandinavisch; question 4's "A" votes
        // Minimalistisch. Four beats one.
        let answers: Vec<QuizAnswer> = (1..=5).map(|id| answer(id, 'A')).collect();
        assert_eq!(classify(&answers), Style::Skandinavisch);
    }

    #[test]
    fn test_empty_answers_yield_first_declared_style() {
        assert_eq!(classify(&[]), Style::Skandinavisch);
        assert_eq!(classify(&[]), Style::ALL[0]);
    }

    #[test]
    fn test_classification_is_order_independent() {
        let mut answers: Vec<QuizAnswer> = vec![
            answer(1, 'D'),
            answer(2, 'D'),
            answer(3, 'C'),
            answer(4, 'D'),
            answer(5, 'C'),
        ];
        let forward = classify(&answers);
        answers.reverse();
        assert_eq!(classify(&answers), forward);
        assert_eq!(forward, Style::Boho);
    }

    #[test]
    fn test_ties_resolve_to_declaration_order() {
        // Two votes Industrial, two votes Boho: Industrial is declared
        // earlier and wins.
        let answers = vec![
            answer(1, 'C'),
            answer(2, 'C'),
            answer(3, 'D'),
            answer(4, 'D'),
        ];
        assert_eq!(classify(&answers), Style::Industrial);
    }

    #[test]
    fn test_unknown_question_or_option_is_skipped() {
        let answers = vec![
            answer(99, 'A'),
            answer(1, 'X'),
            answer(2, 'C'),
        ];
        assert_eq!(classify(&answers), Style::Industrial);
    }

    #[test]
    fn test_same_answers_always_classify_the_same() {
        let answers: Vec<QuizAnswer> = (1..=5).map(|id| answer(id, 'B')).collect();
        let first = classify(&answers);
        for _ in 0..10 {
            assert_eq!(classify(&answers), first);
        }
    }
}
