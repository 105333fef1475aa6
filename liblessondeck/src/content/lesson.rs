//! Static lesson tables for the authored slides

use crate::types::Phrase;

/// One example line on an MFP examples slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MfpExample {
    pub text: &'static str,
    pub is_correct: bool,
    pub note: Option<&'static str>,
}

/// A target item taught in three phases: intro, meaning & form, examples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MfpTopic {
    pub target: &'static str,
    pub pronunciation: &'static str,
    pub meaning: Phrase,
    pub form: Option<&'static str>,
    pub examples: &'static [MfpExample],
}

const fn ok(text: &'static str) -> MfpExample {
    MfpExample {
        text,
        is_correct: true,
        note: None,
    }
}

const fn wrong(text: &'static str, note: &'static str) -> MfpExample {
    MfpExample {
        text,
        is_correct: false,
        note: Some(note),
    }
}

pub const IDIOM_TOPIC: MfpTopic = MfpTopic {
    target: "Put your foot in it",
    pronunciation: "pʊt jɔː fʊt ɪn ɪt",
    meaning: Phrase::new(
        "To accidentally say something that embarrasses or upsets someone.",
        "Сболтнуть лишнее; попасть впросак.",
        "Qovun tushurmoq; noo'rin gapirib qo'ymoq.",
    ),
    form: Some("Idiom: Verb Phrase"),
    examples: &[
        ok("I really put my foot in it when I asked about her ex-husband."),
        ok("He put his foot in it by mentioning the surprise party."),
        wrong("I put my leg in it yesterday.", "Wrong body part! Always 'foot'."),
    ],
};

pub const SUBJECT_QUESTION_TOPIC: MfpTopic = MfpTopic {
    target: "Who called you?",
    pronunciation: "huː kɔːld juː",
    meaning: Phrase::new(
        "Asking about the person who did the action (Subject).",
        "Вопрос к подлежащему (Кто звонил?). Вспомогательный глагол не нужен.",
        "Ega so'roq gapi (Sizga kim qo'ng'iroq qildi?).",
    ),
    form: Some("Who / What + Verb + Object?"),
    examples: &[
        ok("Who broke the window?"),
        ok("What happened next?"),
        wrong(
            "Who did break the window?",
            "Do NOT use 'did' for Subject questions.",
        ),
    ],
};

pub const STATIONERY_TOPIC: MfpTopic = MfpTopic {
    target: "Stationery",
    pronunciation: "ˈsteɪʃənri",
    meaning: Phrase::new(
        "Materials used for writing, such as paper, pens, pencils.",
        "Канцелярские товары.",
        "Kantselyariya mollari.",
    ),
    form: Some("Uncountable Noun"),
    examples: &[
        ok("I need to buy some stationery."),
        ok("The stationery was beautiful."),
        wrong("I bought many stationeries.", "Uncountable! No plural 's'."),
    ],
};

pub const PRESENT_PERFECT_CONTINUOUS_TOPIC: MfpTopic = MfpTopic {
    target: "Have been running",
    pronunciation: "hæv biːn ˈrʌnɪŋ",
    meaning: Phrase::new(
        "Present Perfect Continuous: Focuses on the activity or recent side effects.",
        "Акцент на процессе или видимом результате.",
        "Harakat jarayoniga urg'u beriladi.",
    ),
    form: Some("Have/Has + been + Verb-ing"),
    examples: &[
        ok("Sorry I'm late, I've been waiting for the bus."),
        ok("She has been working here for 10 years."),
        wrong(
            "I have been knowing him for years.",
            "Stative verbs (know, like) cannot be continuous.",
        ),
    ],
};

pub const COLLOCATION_TOPIC: MfpTopic = MfpTopic {
    target: "Depend on",
    pronunciation: "dɪˈpend ɒn",
    meaning: Phrase::new(
        "To be determined by something else; to rely on.",
        "Зависеть от (кого-то/чего-то).",
        "...ga bog'liq bo'lmoq; tayanmoq.",
    ),
    form: Some("Verb + Preposition 'ON'"),
    examples: &[
        ok("Our trip depends on the weather."),
        ok("You can always depend on me."),
        wrong("It depends from the price.", "Common Error! Always 'depend ON'."),
    ],
};

/// Columns of the "Rules of Conversation" sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationRule {
    AimToDo,
    Avoid,
}

pub const CONVERSATION_ITEMS: &[(&str, ConversationRule)] = &[
    ("have a row", ConversationRule::Avoid),
    ("put someone at ease", ConversationRule::AimToDo),
    ("listen enthusiastically", ConversationRule::AimToDo),
    ("have awkward silences", ConversationRule::Avoid),
    ("put your foot in it", ConversationRule::Avoid),
    ("establish shared interests", ConversationRule::AimToDo),
    ("dominate conversation", ConversationRule::Avoid),
    ("hit it off", ConversationRule::AimToDo),
];

/// Columns of the "Communication Channels" sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Paper,
    Electronic,
    Both,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Paper, Channel::Electronic, Channel::Both];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Paper => "Paper",
            Channel::Electronic => "Electronic",
            Channel::Both => "Both",
        }
    }
}

pub const CHANNEL_ITEMS: &[(&str, Channel)] = &[
    ("Handwriting", Channel::Paper),
    ("Emoticon", Channel::Electronic),
    ("Postage stamp", Channel::Paper),
    ("Texting", Channel::Electronic),
    ("Inbox", Channel::Electronic),
    ("Stationery", Channel::Paper),
    ("Confidential", Channel::Both),
    ("Punctuation", Channel::Both),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdiomCard {
    pub term: &'static str,
    pub definition: Phrase,
    pub example: &'static str,
}

pub const IDIOM_CARDS: &[IdiomCard] = &[
    IdiomCard {
        term: "Put your foot in it",
        definition: Phrase::new(
            "To say something embarrassing.",
            "Сказать что-то неловкое.",
            "Noqulay gap aytib qo'ymoq.",
        ),
        example: "I asked about his wife, forgetting they divorced.",
    },
    IdiomCard {
        term: "Hit it off",
        definition: Phrase::new(
            "To like someone immediately.",
            "Сразу поладить с кем-то.",
            "Bir ko'rishda yoqtirib qolmoq.",
        ),
        example: "We met at the party and just hit it off.",
    },
    IdiomCard {
        term: "Small talk",
        definition: Phrase::new(
            "Polite conversation about unimportant matters.",
            "Светская беседа.",
            "Kichik suhbat (havo haqida).",
        ),
        example: "I hate small talk about the weather.",
    },
];

/// A question to rebuild from shuffled word tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnscrambleQuestion {
    pub words: &'static [&'static str],
    pub scrambled: &'static [&'static str],
}

pub const UNSCRAMBLE_QUESTIONS: &[UnscrambleQuestion] = &[
    UnscrambleQuestion {
        words: &["What", "makes", "you", "laugh", "?"],
        scrambled: &["laugh", "makes", "What", "you", "?"],
    },
    UnscrambleQuestion {
        words: &["Who", "do", "you", "think", "will", "go", "out", "tonight", "?"],
        scrambled: &["out", "think", "go", "do", "will", "you", "Who", "tonight", "?"],
    },
    UnscrambleQuestion {
        words: &[
            "Do", "you", "know", "why", "your", "parents", "chose", "your", "name", "?",
        ],
        scrambled: &[
            "your", "why", "name", "Do", "parents", "chose", "know", "your", "you", "?",
        ],
    },
];

/// Piece of a gapped paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    /// Index into the part's gap list
    Gap(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapSpec {
    pub hint: &'static str,
    pub answers: &'static [&'static str],
}

/// One half of the "Letters of Note" reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPart {
    pub number: u8,
    pub paragraphs: &'static [&'static [Segment]],
    pub gaps: &'static [GapSpec],
}

pub const LETTER_PART_1: LetterPart = LetterPart {
    number: 1,
    paragraphs: &[
        &[
            Segment::Text("Shaun Usher is a blogger who, since 2009, "),
            Segment::Gap(0),
            Segment::Text(" letters written by famous people."),
        ],
        &[
            Segment::Text("He "),
            Segment::Gap(1),
            Segment::Text(" them on his website, which "),
            Segment::Gap(2),
            Segment::Text(" extremely popular."),
        ],
    ],
    gaps: &[
        GapSpec {
            hint: "collect",
            answers: &["has collected", "has been collecting"],
        },
        GapSpec {
            hint: "post",
            answers: &["has posted", "has been posting"],
        },
        GapSpec {
            hint: "become",
            answers: &["has become"],
        },
    ],
};

pub const LETTER_PART_2: LetterPart = LetterPart {
    number: 2,
    paragraphs: &[
        &[
            Segment::Text("He "),
            Segment::Gap(0),
            Segment::Text(" together 900 letters. He "),
            Segment::Gap(1),
            Segment::Text(" the letters in a book."),
        ],
        &[
            Segment::Text("Usher "),
            Segment::Gap(2),
            Segment::Text(" a new project..."),
        ],
    ],
    gaps: &[
        GapSpec {
            hint: "get",
            answers: &["has got", "has gotten"],
        },
        GapSpec {
            hint: "just / release",
            answers: &["has just released", "has released"],
        },
        GapSpec {
            hint: "recently / start",
            answers: &["has recently started", "has started"],
        },
    ],
};

pub const PREPOSITION_PAIRS: &[(&str, &str)] = &[
    ("depend", "on"),
    ("contribute", "to"),
    ("prevent", "from"),
    ("disapprove", "of"),
    ("confuse", "with"),
    ("result", "in"),
    ("heard", "of"),
];

/// One side of the "Result vs Activity" choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub picture: &'static str,
    pub sentence: &'static str,
    pub correct: bool,
    pub verdict: &'static str,
    pub explanation: &'static str,
}

pub const RESULT_VS_ACTIVITY: [ChoiceOption; 2] = [
    ChoiceOption {
        picture: "hot and out of breath",
        sentence: "I have run.",
        correct: false,
        verdict: "Incorrect",
        explanation: "\"Have run\" focuses on the finished result, not the side effects.",
    },
    ChoiceOption {
        picture: "hot and out of breath, stopwatch running",
        sentence: "I have been running.",
        correct: true,
        verdict: "Correct!",
        explanation: "Continuous form explains WHY you are hot/tired now.",
    },
];

/// A present-perfect timeline illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub title: &'static str,
    pub focus: Phrase,
    pub sentence_before: &'static str,
    pub highlight: &'static str,
    pub sentence_after: &'static str,
    pub label: Phrase,
    pub explanation: Phrase,
    /// Continuous timelines draw a duration wave instead of a single event
    pub continuous: bool,
}

pub const TIMELINE_SIMPLE: Timeline = Timeline {
    title: "Present Perfect Simple",
    focus: Phrase::new("Focus on Result", "Акцент на результате", "Natijaga urg'u"),
    sentence_before: "I ",
    highlight: "have broken",
    sentence_after: " my leg.",
    label: Phrase::new("RESULT", "РЕЗУЛЬТАТ", "NATIJA"),
    explanation: Phrase::new(
        "The action happened in the past. The result (broken leg) is important NOW.",
        "Действие произошло в прошлом. Результат (сломанная нога) важен СЕЙЧАС.",
        "Harakat o'tmishda sodir bo'lgan. Natija (singan oyoq) HOZIR muhim.",
    ),
    continuous: false,
};

pub const TIMELINE_CONTINUOUS: Timeline = Timeline {
    title: "Present Perfect Continuous",
    focus: Phrase::new(
        "Focus on Activity / Duration",
        "Акцент на действии / длительности",
        "Harakat / davomiylikka urg'u",
    ),
    sentence_before: "I ",
    highlight: "have been running",
    sentence_after: ".",
    label: Phrase::new("ACTIVITY", "ПРОЦЕСС", "JARAYON"),
    explanation: Phrase::new(
        "We started in the past and continued until now. We are tired/sweating.",
        "Начали в прошлом, продолжали до сих пор. Мы устали/вспотели.",
        "O'tmishda boshlab, hozirgacha davom etdik. Charchaganmiz/terlaganmiz.",
    ),
    continuous: true,
};

/// Subject or object question, as toggled on the grammar slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionForm {
    pub label: &'static str,
    pub headline: &'static str,
    pub explanation: Phrase,
    pub wrong: &'static str,
    pub right: &'static str,
}

pub const SUBJECT_QUESTION: QuestionForm = QuestionForm {
    label: "Subject",
    headline: "WHO called you?",
    explanation: Phrase::new(
        "We don't know the person performing the action (Subject). Do NOT use auxiliary verbs.",
        "Мы не знаем, кто совершает действие (Подлежащее). НЕ используйте вспомогательные глаголы.",
        "Biz harakat bajaruvchisini (Ega) bilmaymiz. Yordamchi fe'llardan foydalanmang.",
    ),
    wrong: "Who did call you?",
    right: "Who called you?",
};

pub const OBJECT_QUESTION: QuestionForm = QuestionForm {
    label: "Object",
    headline: "WHO did you call?",
    explanation: Phrase::new(
        "We know the subject (You). We want the recipient (Object). Use auxiliary verbs.",
        "Мы знаем подлежащее (Ты). Нам нужен получатель (Объект). Используйте вспомогательные глаголы.",
        "Biz egani bilamiz (Siz). Bizga qabul qiluvchi (To'ldiruvchi) kerak. Yordamchi fe'llardan foydalaning.",
    ),
    wrong: "Who you called?",
    right: "Who DID you call?",
};

pub const UNIT_TITLE: &str = "Unit 1: Communication";

pub const UNIT_SUMMARY: Phrase = Phrase::new(
    "The rules of conversation, question types, and the evolution of written correspondence.",
    "Правила разговора, типы вопросов и эволюция письменной переписки.",
    "Suhbat qoidalari, savol turlari va yozma yozishmalarning rivojlanishi.",
);

pub const SILENCE_BLURB: Phrase = Phrase::new(
    "In some cultures silence shows respect. In others it causes anxiety. Test your tolerance.",
    "В некоторых культурах молчание — знак уважения. В других оно вызывает тревогу. Проверьте себя.",
    "Ba'zi madaniyatlarda sukunat hurmat belgisidir. Boshqalarida esa xavotir uyg'otadi. O'zingizni sinab ko'ring.",
);

/// Seconds represented by one full turn of the silence ring
pub const SILENCE_RING_SECS: u64 = 60;

pub const EMAIL_PLACEHOLDER: &str = "I've been thinking about...";
