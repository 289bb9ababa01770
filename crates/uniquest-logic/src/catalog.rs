//! Static catalog — universities, islands, questionnaire and scenario data.
//!
//! The catalog is read-only input: the core never mutates it, and an id
//! that does not resolve here is a benign miss (`None`), never an error.
//! All tables are `&'static` data in the binary.

use serde::Serialize;

use crate::direction::Direction;
use crate::profile::{StudentProfile, TraitKind};

// ============================================================================
// UNIVERSITIES & FACULTIES
// ============================================================================

/// One faculty of a university — the smallest collectible unit.
#[derive(Debug, Clone, Serialize)]
pub struct Faculty {
    pub id: u32,
    pub name: &'static str,
    pub direction: Direction,
    pub subjects: &'static [&'static str],
    /// Admission total required for a budget-funded place.
    pub score_budget: u32,
    /// Admission total required for a paid place.
    pub score_paid: u32,
    /// Yearly tuition for a paid place, rubles.
    pub fee_paid: u32,
}

/// A university and its faculties.
#[derive(Debug, Clone, Serialize)]
pub struct University {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    /// Reputation ranking, 0–100.
    pub ranking: u32,
    pub faculties: &'static [Faculty],
}

pub const UNIVERSITIES: &[University] = &[
    University {
        id: 1,
        name: "МГУ им. Ломоносова",
        city: "Москва",
        ranking: 100,
        faculties: &[
            Faculty { id: 101, name: "ВМК", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 295, score_paid: 250, fee_paid: 767_000 },
            Faculty { id: 102, name: "Юридический", direction: Direction::Law, subjects: &["Рус", "Обществ", "История"], score_budget: 280, score_paid: 240, fee_paid: 600_000 },
            Faculty { id: 103, name: "Экономический", direction: Direction::Economics, subjects: &["Рус", "Матем", "Обществ"], score_budget: 285, score_paid: 245, fee_paid: 650_000 },
        ],
    },
    University {
        id: 2,
        name: "НИУ ВШЭ",
        city: "Москва",
        ranking: 93,
        faculties: &[
            Faculty { id: 201, name: "Экономика", direction: Direction::Economics, subjects: &["Рус", "Матем", "Обществ"], score_budget: 289, score_paid: 235, fee_paid: 520_000 },
            Faculty { id: 202, name: "Прикладная математика", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 292, score_paid: 240, fee_paid: 580_000 },
            Faculty { id: 203, name: "Менеджмент", direction: Direction::Management, subjects: &["Рус", "Матем", "Обществ"], score_budget: 275, score_paid: 220, fee_paid: 480_000 },
        ],
    },
    University {
        id: 3,
        name: "СПбГУ",
        city: "Санкт-Петербург",
        ranking: 95,
        faculties: &[
            Faculty { id: 301, name: "Математика и ИТ", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 282, score_paid: 230, fee_paid: 400_000 },
            Faculty { id: 302, name: "Биология", direction: Direction::NaturalSciences, subjects: &["Рус", "Биология", "Химия"], score_budget: 260, score_paid: 210, fee_paid: 350_000 },
            Faculty { id: 303, name: "Филология", direction: Direction::Humanities, subjects: &["Рус", "Литература", "История"], score_budget: 268, score_paid: 215, fee_paid: 320_000 },
        ],
    },
    University {
        id: 4,
        name: "МФТИ",
        city: "Москва",
        ranking: 92,
        faculties: &[
            Faculty { id: 401, name: "Прикладная физика", direction: Direction::NaturalSciences, subjects: &["Рус", "Матем", "Физика"], score_budget: 290, score_paid: 245, fee_paid: 450_000 },
            Faculty { id: 402, name: "Информатика", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 296, score_paid: 255, fee_paid: 500_000 },
        ],
    },
    University {
        id: 5,
        name: "ИТМО",
        city: "Санкт-Петербург",
        ranking: 88,
        faculties: &[
            Faculty { id: 501, name: "ИТ и программирование", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 288, score_paid: 240, fee_paid: 380_000 },
            Faculty { id: 502, name: "Фотоника", direction: Direction::NaturalSciences, subjects: &["Рус", "Матем", "Физика"], score_budget: 265, score_paid: 215, fee_paid: 350_000 },
        ],
    },
    University {
        id: 6,
        name: "НГУ",
        city: "Новосибирск",
        ranking: 85,
        faculties: &[
            Faculty { id: 601, name: "Механико-математический", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 268, score_paid: 220, fee_paid: 250_000 },
            Faculty { id: 602, name: "Экономический", direction: Direction::Economics, subjects: &["Рус", "Матем", "Обществ"], score_budget: 255, score_paid: 210, fee_paid: 220_000 },
        ],
    },
    University {
        id: 7,
        name: "КФУ",
        city: "Казань",
        ranking: 82,
        faculties: &[
            Faculty { id: 701, name: "Юридический", direction: Direction::Law, subjects: &["Рус", "Обществ", "История"], score_budget: 250, score_paid: 200, fee_paid: 180_000 },
            Faculty { id: 702, name: "ИТиМО", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 255, score_paid: 205, fee_paid: 200_000 },
        ],
    },
    University {
        id: 8,
        name: "УрФУ",
        city: "Екатеринбург",
        ranking: 80,
        faculties: &[
            Faculty { id: 801, name: "ИРИТ-РтФ", direction: Direction::It, subjects: &["Рус", "Матем", "Информ"], score_budget: 250, score_paid: 200, fee_paid: 210_000 },
            Faculty { id: 802, name: "Гуманитарный институт", direction: Direction::Humanities, subjects: &["Рус", "Литература", "История"], score_budget: 238, score_paid: 190, fee_paid: 170_000 },
        ],
    },
    University {
        id: 9,
        name: "ТГУ",
        city: "Томск",
        ranking: 83,
        faculties: &[
            Faculty { id: 901, name: "Физический", direction: Direction::NaturalSciences, subjects: &["Рус", "Матем", "Физика"], score_budget: 245, score_paid: 200, fee_paid: 180_000 },
            Faculty { id: 902, name: "Менеджмент", direction: Direction::Management, subjects: &["Рус", "Матем", "Обществ"], score_budget: 240, score_paid: 195, fee_paid: 170_000 },
        ],
    },
    University {
        id: 10,
        name: "РАНХиГС",
        city: "Москва",
        ranking: 84,
        faculties: &[
            Faculty { id: 1001, name: "Государственное управление", direction: Direction::Management, subjects: &["Рус", "Матем", "Обществ"], score_budget: 270, score_paid: 220, fee_paid: 420_000 },
            Faculty { id: 1002, name: "Экономика", direction: Direction::Economics, subjects: &["Рус", "Матем", "Обществ"], score_budget: 265, score_paid: 215, fee_paid: 380_000 },
        ],
    },
];

/// Look up a university by id.
pub fn find_university(id: u32) -> Option<&'static University> {
    UNIVERSITIES.iter().find(|u| u.id == id)
}

/// Look up a faculty by id, together with its parent university.
pub fn find_faculty(id: u32) -> Option<(&'static University, &'static Faculty)> {
    UNIVERSITIES.iter().find_map(|u| {
        u.faculties
            .iter()
            .find(|f| f.id == id)
            .map(|f| (u, f))
    })
}

// ============================================================================
// ISLANDS
// ============================================================================

/// A direction-scoped exploration region, gated by an energy threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Island {
    pub id: &'static str,
    pub direction: Direction,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Energy level at which the island is revealed (inclusive).
    pub energy_threshold: u32,
}

pub const ISLANDS: &[Island] = &[
    Island { id: "isle-it", direction: Direction::It, name: "Остров Кода", emoji: "💻", description: "Алгоритмы, данные и цифровые миры", energy_threshold: 20 },
    Island { id: "isle-econ", direction: Direction::Economics, name: "Остров Рынков", emoji: "📊", description: "Финансы, аналитика и стратегия", energy_threshold: 18 },
    Island { id: "isle-mgmt", direction: Direction::Management, name: "Остров Команд", emoji: "📋", description: "Люди, проекты и решения", energy_threshold: 18 },
    Island { id: "isle-law", direction: Direction::Law, name: "Остров Весов", emoji: "⚖️", description: "Право, справедливость и аргументы", energy_threshold: 22 },
    Island { id: "isle-sci", direction: Direction::NaturalSciences, name: "Остров Открытий", emoji: "🔬", description: "Природа, эксперименты и гипотезы", energy_threshold: 22 },
    Island { id: "isle-hum", direction: Direction::Humanities, name: "Остров Историй", emoji: "📚", description: "Языки, культура и смыслы", energy_threshold: 20 },
];

/// Look up an island by id.
pub fn find_island(id: &str) -> Option<&'static Island> {
    ISLANDS.iter().find(|i| i.id == id)
}

/// The island for a given direction. Total — there is exactly one per
/// direction.
pub fn island_for_direction(direction: Direction) -> &'static Island {
    ISLANDS
        .iter()
        .find(|i| i.direction == direction)
        .expect("one island per direction")
}

/// The island a university belongs to, derived from the direction of its
/// leading faculty.
pub fn university_island(university_id: u32) -> Option<&'static Island> {
    let uni = find_university(university_id)?;
    let fac = uni.faculties.first()?;
    Some(island_for_direction(fac.direction))
}

// ============================================================================
// QUESTIONNAIRE
// ============================================================================

/// One selectable answer with its trait-score contribution.
#[derive(Debug, Clone)]
pub struct QuizOption {
    pub text: &'static str,
    pub scores: &'static [(TraitKind, u32)],
}

impl QuizOption {
    /// Expand the sparse score list into a delta bundle.
    pub fn delta(&self) -> StudentProfile {
        let mut delta = StudentProfile::default();
        for &(kind, amount) in self.scores {
            delta = delta.add(kind, amount);
        }
        delta
    }
}

/// One questionnaire item.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

/// The main questionnaire that produces the persisted profile blob.
pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "Свободный вечер. Чем займёшься?",
        options: &[
            QuizOption { text: "Соберу пет-проект или разберу новую библиотеку", scores: &[(TraitKind::Technical, 3), (TraitKind::Analytical, 1)] },
            QuizOption { text: "Почитаю разборы рынков и статистику", scores: &[(TraitKind::Analytical, 3)] },
            QuizOption { text: "Порисую, попишу или смонтирую видео", scores: &[(TraitKind::Creative, 3)] },
            QuizOption { text: "Встречусь с друзьями, организую вылазку", scores: &[(TraitKind::Social, 2), (TraitKind::Leadership, 1)] },
        ],
    },
    QuizQuestion {
        prompt: "В групповом проекте ты обычно…",
        options: &[
            QuizOption { text: "Берёшь техническую часть на себя", scores: &[(TraitKind::Technical, 3)] },
            QuizOption { text: "Раскладываешь задачу на шаги и считаешь риски", scores: &[(TraitKind::Analytical, 2), (TraitKind::Technical, 1)] },
            QuizOption { text: "Придумываешь подачу и оформление", scores: &[(TraitKind::Creative, 2), (TraitKind::Social, 1)] },
            QuizOption { text: "Распределяешь роли и следишь за сроками", scores: &[(TraitKind::Leadership, 3)] },
        ],
    },
    QuizQuestion {
        prompt: "Какая задача тебя скорее увлечёт?",
        options: &[
            QuizOption { text: "Оптимизировать медленный алгоритм", scores: &[(TraitKind::Technical, 2), (TraitKind::Analytical, 2)] },
            QuizOption { text: "Найти противоречие в длинном договоре", scores: &[(TraitKind::Analytical, 2), (TraitKind::Social, 1)] },
            QuizOption { text: "Придумать кампанию для нового продукта", scores: &[(TraitKind::Creative, 2), (TraitKind::Leadership, 1)] },
            QuizOption { text: "Помирить двух поссорившихся коллег", scores: &[(TraitKind::Social, 3)] },
        ],
    },
    QuizQuestion {
        prompt: "Что тебе важнее в будущей работе?",
        options: &[
            QuizOption { text: "Решать сложные инженерные задачи", scores: &[(TraitKind::Technical, 3)] },
            QuizOption { text: "Видеть картину в цифрах и влиять на решения", scores: &[(TraitKind::Analytical, 2), (TraitKind::Leadership, 1)] },
            QuizOption { text: "Создавать то, чего раньше не было", scores: &[(TraitKind::Creative, 3)] },
            QuizOption { text: "Работать с людьми и для людей", scores: &[(TraitKind::Social, 2), (TraitKind::Creative, 1)] },
        ],
    },
    QuizQuestion {
        prompt: "Команда зашла в тупик. Твоя реакция?",
        options: &[
            QuizOption { text: "Молча сесть и запрототипировать выход", scores: &[(TraitKind::Technical, 2), (TraitKind::Creative, 1)] },
            QuizOption { text: "Вернуться к данным и пересчитать", scores: &[(TraitKind::Analytical, 3)] },
            QuizOption { text: "Предложить совершенно другой угол", scores: &[(TraitKind::Creative, 2), (TraitKind::Analytical, 1)] },
            QuizOption { text: "Собрать всех и перераспределить работу", scores: &[(TraitKind::Leadership, 2), (TraitKind::Social, 1)] },
        ],
    },
];

/// Short self-discovery items shown on the map before exploration opens.
pub const SELF_DISCOVERY_QUIZZES: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "Что тебе ближе?",
        options: &[
            QuizOption { text: "Разобраться, как устроено", scores: &[(TraitKind::Technical, 2)] },
            QuizOption { text: "Понять, почему так вышло", scores: &[(TraitKind::Analytical, 2)] },
            QuizOption { text: "Представить, как могло бы быть", scores: &[(TraitKind::Creative, 2)] },
        ],
    },
    QuizQuestion {
        prompt: "В незнакомой компании ты…",
        options: &[
            QuizOption { text: "Наблюдаешь со стороны", scores: &[(TraitKind::Analytical, 1), (TraitKind::Technical, 1)] },
            QuizOption { text: "Знакомишься первым", scores: &[(TraitKind::Social, 2)] },
            QuizOption { text: "Затеваешь общую игру", scores: &[(TraitKind::Leadership, 2)] },
        ],
    },
    QuizQuestion {
        prompt: "Лучший подарок для тебя — это…",
        options: &[
            QuizOption { text: "Новый гаджет или конструктор", scores: &[(TraitKind::Technical, 2)] },
            QuizOption { text: "Билет на выставку или спектакль", scores: &[(TraitKind::Creative, 2)] },
            QuizOption { text: "Настольная игра на большую компанию", scores: &[(TraitKind::Social, 1), (TraitKind::Leadership, 1)] },
        ],
    },
];

/// A role the student can try on during self-discovery.
#[derive(Debug, Clone)]
pub struct RoleChoice {
    pub id: &'static str,
    pub title: &'static str,
    pub scores: &'static [(TraitKind, u32)],
}

pub const ROLE_CHOICES: &[RoleChoice] = &[
    RoleChoice { id: "engineer", title: "Инженер", scores: &[(TraitKind::Technical, 3), (TraitKind::Analytical, 1)] },
    RoleChoice { id: "analyst", title: "Аналитик", scores: &[(TraitKind::Analytical, 3)] },
    RoleChoice { id: "artist", title: "Творец", scores: &[(TraitKind::Creative, 3)] },
    RoleChoice { id: "mediator", title: "Посредник", scores: &[(TraitKind::Social, 3)] },
    RoleChoice { id: "captain", title: "Капитан", scores: &[(TraitKind::Leadership, 3)] },
];

/// Look up a role by id.
pub fn find_role(id: &str) -> Option<&'static RoleChoice> {
    ROLE_CHOICES.iter().find(|r| r.id == id)
}

/// The single situation item closing the self-discovery phase.
pub const SITUATION: QuizQuestion = QuizQuestion {
    prompt: "Школьный фестиваль через неделю, ничего не готово. Что делаешь?",
    options: &[
        QuizOption { text: "Собираю план и раздаю задачи", scores: &[(TraitKind::Leadership, 2), (TraitKind::Social, 1)] },
        QuizOption { text: "Делаю сайт-афишу за вечер", scores: &[(TraitKind::Technical, 2), (TraitKind::Creative, 1)] },
        QuizOption { text: "Считаю бюджет и что успеем реально", scores: &[(TraitKind::Analytical, 2)] },
        QuizOption { text: "Придумываю тему, которая всех зажжёт", scores: &[(TraitKind::Creative, 2), (TraitKind::Social, 1)] },
    ],
};

// ============================================================================
// SCENARIOS & CHALLENGES
// ============================================================================

/// One choice inside a scenario step, with its harmony contribution.
#[derive(Debug, Clone)]
pub struct SimulationChoice {
    pub text: &'static str,
    /// Compatibility contribution in [0, 1].
    pub harmony: f32,
    pub feedback: &'static str,
}

/// One step of a city scenario.
#[derive(Debug, Clone)]
pub struct SimulationStep {
    pub prompt: &'static str,
    pub choices: &'static [SimulationChoice],
}

/// A "day at this university" scenario gating a city.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub university_id: u32,
    pub steps: &'static [SimulationStep],
}

pub const SIMULATIONS: &[Simulation] = &[
    Simulation {
        university_id: 1,
        steps: &[
            SimulationStep {
                prompt: "Первая пара — лекция потока на 300 человек. Куда сядешь?",
                choices: &[
                    SimulationChoice { text: "Первый ряд, буду записывать", harmony: 0.9, feedback: "Лектор тебя заметил — и это к лучшему" },
                    SimulationChoice { text: "Середина, рядом с знакомыми", harmony: 0.6, feedback: "Комфортно, но конспект у соседа" },
                    SimulationChoice { text: "Галёрка, досплю", harmony: 0.2, feedback: "К коллоквиуму придётся навёрстывать" },
                ],
            },
            SimulationStep {
                prompt: "После пар зовут в студсовет и на кружок по ML одновременно.",
                choices: &[
                    SimulationChoice { text: "Кружок — знания важнее", harmony: 0.8, feedback: "Через месяц у тебя первый пет-проект" },
                    SimulationChoice { text: "Студсовет — связи решают", harmony: 0.6, feedback: "Зато теперь ты знаешь всех" },
                    SimulationChoice { text: "Домой — баланс важнее", harmony: 0.4, feedback: "Отдых тоже нужен, но не каждый день" },
                ],
            },
        ],
    },
    Simulation {
        university_id: 2,
        steps: &[
            SimulationStep {
                prompt: "Семинар по микроэкономике. Преподаватель спрашивает желающих к доске.",
                choices: &[
                    SimulationChoice { text: "Выйти и попробовать", harmony: 0.9, feedback: "Ошибся в знаке, но получил плюс за смелость" },
                    SimulationChoice { text: "Подсказывать с места", harmony: 0.6, feedback: "Полезно, но баллы ушли другому" },
                    SimulationChoice { text: "Сидеть тихо", harmony: 0.3, feedback: "Зато никто не заметил" },
                ],
            },
        ],
    },
    Simulation {
        university_id: 3,
        steps: &[
            SimulationStep {
                prompt: "Дождь, Нева, окно между парами два часа. План?",
                choices: &[
                    SimulationChoice { text: "Библиотека — курсовая сама себя не напишет", harmony: 0.8, feedback: "Научник оценил черновик" },
                    SimulationChoice { text: "Кофейня с однокурсниками", harmony: 0.6, feedback: "Узнал про стажировку от старшекурсника" },
                    SimulationChoice { text: "Гулять по набережной", harmony: 0.4, feedback: "Красиво, но промок" },
                ],
            },
        ],
    },
];

/// Look up the scenario for a university.
pub fn find_simulation(university_id: u32) -> Option<&'static Simulation> {
    SIMULATIONS.iter().find(|s| s.university_id == university_id)
}

/// A challenge question gating one faculty.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub faculty_id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index of the correct option.
    pub answer: usize,
}

pub const CHALLENGES: &[Challenge] = &[
    Challenge { faculty_id: 101, question: "Какова сложность бинарного поиска?", options: &["O(n)", "O(log n)", "O(n log n)"], answer: 1 },
    Challenge { faculty_id: 103, question: "Что растёт при инфляции?", options: &["Покупательная способность", "Общий уровень цен", "Курс рубля"], answer: 1 },
    Challenge { faculty_id: 201, question: "Спрос вырос, предложение неизменно. Цена…", options: &["Падает", "Растёт", "Не меняется"], answer: 1 },
    Challenge { faculty_id: 301, question: "Чему равна производная x²?", options: &["x", "2x", "x²/2"], answer: 1 },
    Challenge { faculty_id: 302, question: "Какая органелла производит энергию клетки?", options: &["Рибосома", "Митохондрия", "Ядро"], answer: 1 },
    Challenge { faculty_id: 501, question: "Что выведет 2 + 2 * 2?", options: &["8", "6", "4"], answer: 1 },
];

/// Look up the challenge for a faculty.
pub fn find_challenge(faculty_id: u32) -> Option<&'static Challenge> {
    CHALLENGES.iter().find(|c| c.faculty_id == faculty_id)
}

/// Check a challenge answer. Unknown faculty is a benign miss (`false`).
pub fn check_challenge_answer(faculty_id: u32, option_index: usize) -> bool {
    find_challenge(faculty_id).is_some_and(|c| c.answer == option_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_ids_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for uni in UNIVERSITIES {
            for fac in uni.faculties {
                assert!(seen.insert(fac.id), "duplicate faculty id {}", fac.id);
            }
        }
    }

    #[test]
    fn one_island_per_direction() {
        for dir in Direction::ALL {
            let matches = ISLANDS.iter().filter(|i| i.direction == dir).count();
            assert_eq!(matches, 1, "{dir:?}");
        }
    }

    #[test]
    fn unknown_ids_are_benign_misses() {
        assert!(find_university(999).is_none());
        assert!(find_faculty(999).is_none());
        assert!(find_island("isle-nowhere").is_none());
        assert!(find_simulation(999).is_none());
        assert!(find_challenge(999).is_none());
        assert!(!check_challenge_answer(999, 0));
    }

    #[test]
    fn find_faculty_returns_parent_university() {
        let (uni, fac) = find_faculty(302).unwrap();
        assert_eq!(uni.id, 3);
        assert_eq!(fac.direction, Direction::NaturalSciences);
    }

    #[test]
    fn challenge_answers_in_range() {
        for ch in CHALLENGES {
            assert!(ch.answer < ch.options.len(), "faculty {}", ch.faculty_id);
        }
    }

    #[test]
    fn simulation_harmony_in_unit_range() {
        for sim in SIMULATIONS {
            for step in sim.steps {
                for choice in step.choices {
                    assert!((0.0..=1.0).contains(&choice.harmony));
                }
            }
        }
    }

    #[test]
    fn quiz_options_expand_to_deltas() {
        let delta = QUIZ_QUESTIONS[0].options[0].delta();
        assert_eq!(delta.technical, 3);
        assert_eq!(delta.analytical, 1);
        assert_eq!(delta.creative, 0);
    }
}
