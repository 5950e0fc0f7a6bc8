//! Interview question banks and sequencing.
//!
//! Curated per-skill banks grouped by question type, a generic fallback for
//! skills without a bank, and deterministic follow-up selection.

use crate::interview::types::{Difficulty, Question, QuestionType};

// ────────────────────────────────────────────────────────────────────────────
// Question banks
// ────────────────────────────────────────────────────────────────────────────

struct QuestionSeed {
    id: &'static str,
    text: &'static str,
    difficulty: Difficulty,
    expected_elements: &'static [&'static str],
}

struct QuestionBank {
    skill: &'static str,
    experience_probing: &'static [QuestionSeed],
    practical_application: &'static [QuestionSeed],
    problem_solving: &'static [QuestionSeed],
}

const QUESTION_BANKS: &[QuestionBank] = &[
    QuestionBank {
        skill: "react",
        experience_probing: &[
            QuestionSeed {
                id: "react-exp-1",
                text: "Tell me about your experience with React. How long have you been using it?",
                difficulty: Difficulty::Junior,
                expected_elements: &["years of experience", "types of projects", "components built"],
            },
            QuestionSeed {
                id: "react-exp-2",
                text: "What's the most complex React application you've built?",
                difficulty: Difficulty::Mid,
                expected_elements: &["scale", "architecture decisions", "state management"],
            },
        ],
        practical_application: &[
            QuestionSeed {
                id: "react-app-1",
                text: "Walk me through how you've managed state in a React application. What approaches have you used?",
                difficulty: Difficulty::Mid,
                expected_elements: &[
                    "useState",
                    "useReducer",
                    "Context",
                    "Redux/Zustand",
                    "when to use each",
                ],
            },
            QuestionSeed {
                id: "react-app-2",
                text: "How have you handled performance optimization in React?",
                difficulty: Difficulty::Senior,
                expected_elements: &[
                    "React.memo",
                    "useMemo",
                    "useCallback",
                    "code splitting",
                    "profiling",
                ],
            },
        ],
        problem_solving: &[
            QuestionSeed {
                id: "react-ps-1",
                text: "You notice a React component is re-rendering too frequently. How would you debug and fix this?",
                difficulty: Difficulty::Mid,
                expected_elements: &[
                    "React DevTools",
                    "profiler",
                    "dependency arrays",
                    "memoization",
                ],
            },
            QuestionSeed {
                id: "react-ps-2",
                text: "Design a component architecture for a dashboard with real-time updates. What would you consider?",
                difficulty: Difficulty::Senior,
                expected_elements: &[
                    "component hierarchy",
                    "state management",
                    "WebSocket/SSE",
                    "error boundaries",
                ],
            },
        ],
    },
    QuestionBank {
        skill: "javascript",
        experience_probing: &[QuestionSeed {
            id: "js-exp-1",
            text: "Tell me about your JavaScript background. How would you rate your proficiency?",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "js-app-1",
            text: "Explain how you've used async/await and Promises in your projects.",
            difficulty: Difficulty::Mid,
            expected_elements: &[
                "Promise chaining",
                "error handling",
                "parallel execution",
                "real example",
            ],
        }],
        problem_solving: &[QuestionSeed {
            id: "js-ps-1",
            text: "You have an API that sometimes returns slowly. How would you implement a timeout and retry mechanism?",
            difficulty: Difficulty::Mid,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "typescript",
        experience_probing: &[QuestionSeed {
            id: "ts-exp-1",
            text: "How has TypeScript changed the way you write code?",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "ts-app-1",
            text: "Give me an example of how you've used generics in TypeScript.",
            difficulty: Difficulty::Mid,
            expected_elements: &[],
        }],
        problem_solving: &[QuestionSeed {
            id: "ts-ps-1",
            text: "How would you type a function that can accept different shapes of input and return corresponding outputs?",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "python",
        experience_probing: &[QuestionSeed {
            id: "py-exp-1",
            text: "What types of applications have you built with Python?",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "py-app-1",
            text: "How have you used Python for data processing or automation?",
            difficulty: Difficulty::Mid,
            expected_elements: &[],
        }],
        problem_solving: &[QuestionSeed {
            id: "py-ps-1",
            text: "Design a Python script to process and analyze a large dataset efficiently.",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "aws",
        experience_probing: &[QuestionSeed {
            id: "aws-exp-1",
            text: "Which AWS services have you worked with? Give me an overview of your experience.",
            difficulty: Difficulty::Junior,
            expected_elements: &["specific services", "use cases", "certifications"],
        }],
        practical_application: &[QuestionSeed {
            id: "aws-app-1",
            text: "Describe an architecture you've designed or implemented on AWS.",
            difficulty: Difficulty::Mid,
            expected_elements: &[
                "services used",
                "why those services",
                "scalability",
                "cost considerations",
            ],
        }],
        problem_solving: &[QuestionSeed {
            id: "aws-ps-1",
            text: "How would you design a highly available, scalable web application on AWS?",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "salesforce",
        experience_probing: &[QuestionSeed {
            id: "sf-exp-1",
            text: "Tell me about your Salesforce experience. What aspects have you worked with?",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "sf-app-1",
            text: "Describe a Salesforce integration or automation you've implemented.",
            difficulty: Difficulty::Mid,
            expected_elements: &[],
        }],
        problem_solving: &[QuestionSeed {
            id: "sf-ps-1",
            text: "How would you design a data governance strategy for a Salesforce org with multiple business units?",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "partner operations",
        experience_probing: &[QuestionSeed {
            id: "partnerops-exp-1",
            text: "Tell me about your experience managing partner programs and operations.",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "partnerops-app-1",
            text: "Describe how you've optimized a partner deal registration process.",
            difficulty: Difficulty::Mid,
            expected_elements: &["process improvement", "tools used", "metrics improved"],
        }],
        problem_solving: &[QuestionSeed {
            id: "partnerops-ps-1",
            text: "How would you design a partner tier system that incentivizes the right behaviors?",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
    QuestionBank {
        skill: "technical program management",
        experience_probing: &[QuestionSeed {
            id: "tpm-exp-1",
            text: "What's your background in technical program management?",
            difficulty: Difficulty::Junior,
            expected_elements: &[],
        }],
        practical_application: &[QuestionSeed {
            id: "tpm-app-1",
            text: "Describe a complex cross-functional program you've managed.",
            difficulty: Difficulty::Mid,
            expected_elements: &["scope", "stakeholders", "challenges", "outcome"],
        }],
        problem_solving: &[QuestionSeed {
            id: "tpm-ps-1",
            text: "You're managing a program with three teams that have conflicting priorities. How do you resolve this?",
            difficulty: Difficulty::Senior,
            expected_elements: &[],
        }],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Bank lookup and generation
// ────────────────────────────────────────────────────────────────────────────

fn find_bank(skill: &str) -> Option<&'static QuestionBank> {
    QUESTION_BANKS
        .iter()
        .find(|bank| bank.skill.eq_ignore_ascii_case(skill))
}

fn seed_question(seed: &QuestionSeed, skill: &str, question_type: QuestionType) -> Question {
    Question {
        id: seed.id.to_string(),
        text: seed.text.to_string(),
        question_type,
        skill: skill.to_string(),
        difficulty: seed.difficulty,
        expected_elements: seed
            .expected_elements
            .iter()
            .map(|element| element.to_string())
            .collect(),
    }
}

/// All questions for a skill in experience/application/problem-solving
/// order, optionally filtered by difficulty. Skills without a bank get
/// generated generics.
pub fn questions_for_skill(skill: &str, difficulty: Option<Difficulty>) -> Vec<Question> {
    let questions: Vec<Question> = match find_bank(skill) {
        Some(bank) => bank
            .experience_probing
            .iter()
            .map(|seed| seed_question(seed, bank.skill, QuestionType::ExperienceProbing))
            .chain(
                bank.practical_application
                    .iter()
                    .map(|seed| seed_question(seed, bank.skill, QuestionType::PracticalApplication)),
            )
            .chain(
                bank.problem_solving
                    .iter()
                    .map(|seed| seed_question(seed, bank.skill, QuestionType::ProblemSolving)),
            )
            .collect(),
        None => generic_questions(skill),
    };

    match difficulty {
        Some(level) => questions
            .into_iter()
            .filter(|question| question.difficulty == level)
            .collect(),
        None => questions,
    }
}

fn generic_questions(skill: &str) -> Vec<Question> {
    vec![
        Question {
            id: format!("{skill}-generic-exp"),
            text: format!("Tell me about your experience with {skill}."),
            question_type: QuestionType::ExperienceProbing,
            skill: skill.to_string(),
            difficulty: Difficulty::Junior,
            expected_elements: Vec::new(),
        },
        Question {
            id: format!("{skill}-generic-app"),
            text: format!("Give me a specific example of how you've applied {skill} in a project."),
            question_type: QuestionType::PracticalApplication,
            skill: skill.to_string(),
            difficulty: Difficulty::Mid,
            expected_elements: Vec::new(),
        },
        Question {
            id: format!("{skill}-generic-ps"),
            text: format!("Walk me through how you would approach a complex problem using {skill}."),
            question_type: QuestionType::ProblemSolving,
            skill: skill.to_string(),
            difficulty: Difficulty::Senior,
            expected_elements: Vec::new(),
        },
    ]
}

/// Skills with a curated bank, in bank order.
pub fn available_skills() -> Vec<&'static str> {
    QUESTION_BANKS.iter().map(|bank| bank.skill).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Interview sequencing
// ────────────────────────────────────────────────────────────────────────────

/// Default number of questions per skill in a generated sequence.
pub const DEFAULT_QUESTIONS_PER_SKILL: usize = 3;

/// Builds an interview plan: for each skill, up to one question per type in
/// experience/application/problem-solving order, capped at
/// `questions_per_skill`.
pub fn interview_sequence(skills: &[String], questions_per_skill: usize) -> Vec<Question> {
    let mut sequence = Vec::new();
    for skill in skills {
        let questions = questions_for_skill(skill, None);
        let wanted = [
            QuestionType::ExperienceProbing,
            QuestionType::PracticalApplication,
            QuestionType::ProblemSolving,
        ];
        for question_type in wanted.into_iter().take(questions_per_skill) {
            if let Some(question) = questions
                .iter()
                .find(|question| question.question_type == question_type)
            {
                sequence.push(question.clone());
            }
        }
    }
    sequence
}

// ────────────────────────────────────────────────────────────────────────────
// Follow-ups
// ────────────────────────────────────────────────────────────────────────────

const FOLLOW_UP_PROMPTS: [&str; 4] = [
    "Can you go deeper on that? What specific steps did you take?",
    "What challenges did you face and how did you overcome them?",
    "How did you measure the success of that approach?",
    "If you had to do it again, what would you do differently?",
];

/// Derives a follow-up to a previous question. Prompt choice hashes the
/// keyword count plus total keyword length, so the same response keywords
/// always produce the same follow-up.
pub fn follow_up_question(previous: &Question, response_keywords: &[String]) -> Question {
    let index = (response_keywords.len()
        + response_keywords.iter().map(String::len).sum::<usize>())
        % FOLLOW_UP_PROMPTS.len();
    Question {
        id: format!("{}-fu-{}", previous.id, index + 1),
        text: FOLLOW_UP_PROMPTS[index].to_string(),
        question_type: QuestionType::FollowUp,
        skill: previous.skill.clone(),
        difficulty: previous.difficulty,
        expected_elements: Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_react_bank_returns_all_types_in_order() {
        let questions = questions_for_skill("react", None);
        assert_eq!(questions.len(), 6);

        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "react-exp-1",
                "react-exp-2",
                "react-app-1",
                "react-app-2",
                "react-ps-1",
                "react-ps-2",
            ]
        );
        assert_eq!(questions[0].question_type, QuestionType::ExperienceProbing);
        assert_eq!(questions[2].question_type, QuestionType::PracticalApplication);
        assert_eq!(questions[4].question_type, QuestionType::ProblemSolving);
        assert!(questions[0]
            .expected_elements
            .contains(&"years of experience".to_string()));
    }

    #[test]
    fn test_difficulty_filter() {
        let mid = questions_for_skill("react", Some(Difficulty::Mid));
        let ids: Vec<&str> = mid.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["react-exp-2", "react-app-1", "react-ps-1"]);
    }

    #[test]
    fn test_bank_lookup_is_case_insensitive() {
        let questions = questions_for_skill("React", None);
        assert_eq!(questions.len(), 6);
        assert_eq!(questions[0].skill, "react");
    }

    #[test]
    fn test_unknown_skill_gets_generic_questions() {
        let generic = questions_for_skill("blockchain", None);
        assert_eq!(generic.len(), 3);
        assert_eq!(generic[0].id, "blockchain-generic-exp");
        assert_eq!(
            generic[0].text,
            "Tell me about your experience with blockchain."
        );
        assert_eq!(generic[1].question_type, QuestionType::PracticalApplication);
        assert_eq!(generic[2].difficulty, Difficulty::Senior);
        assert!(generic.iter().all(|q| q.expected_elements.is_empty()));
    }

    #[test]
    fn test_interview_sequence_takes_one_per_type() {
        let sequence = interview_sequence(&strs(&["react", "blockchain"]), 3);
        assert_eq!(sequence.len(), 6);
        assert_eq!(sequence[0].id, "react-exp-1");
        assert_eq!(sequence[1].id, "react-app-1");
        assert_eq!(sequence[2].id, "react-ps-1");
        assert_eq!(sequence[3].id, "blockchain-generic-exp");
    }

    #[test]
    fn test_interview_sequence_caps_questions_per_skill() {
        let sequence = interview_sequence(&strs(&["react"]), 1);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence[0].question_type, QuestionType::ExperienceProbing);
    }

    #[test]
    fn test_follow_up_is_deterministic() {
        let questions = questions_for_skill("react", None);
        let previous = &questions[0];
        let keywords = strs(&["state", "hooks"]);

        let first = follow_up_question(previous, &keywords);
        let second = follow_up_question(previous, &keywords);
        assert_eq!(first.id, second.id);
        assert_eq!(first.text, second.text);

        // (2 keywords + 10 chars) % 4 == 0
        assert_eq!(first.id, "react-exp-1-fu-1");
        assert_eq!(first.text, FOLLOW_UP_PROMPTS[0]);
        assert_eq!(first.question_type, QuestionType::FollowUp);
        assert_eq!(first.skill, "react");
        assert_eq!(first.difficulty, previous.difficulty);
    }

    #[test]
    fn test_follow_up_varies_with_keywords() {
        let questions = questions_for_skill("react", None);
        let previous = &questions[0];

        // (1 keyword + 5 chars) % 4 == 2
        let follow_up = follow_up_question(previous, &strs(&["redux"]));
        assert_eq!(follow_up.id, "react-exp-1-fu-3");
        assert_eq!(follow_up.text, FOLLOW_UP_PROMPTS[2]);
    }

    #[test]
    fn test_available_skills_lists_bank_order() {
        let skills = available_skills();
        assert_eq!(skills.len(), 8);
        assert_eq!(skills[0], "react");
        assert_eq!(skills[7], "technical program management");
    }
}
