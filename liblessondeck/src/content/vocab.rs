//! Unit 1 wordlist
//!
//! Each entry produces one teaching slide and one timed quiz slide when the
//! registry is expanded.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ContentError;
use crate::types::{LocalizedText, VocabEntry};

struct RawEntry {
    id: &'static str,
    word: &'static str,
    pronunciation: &'static str,
    part_of_speech: &'static str,
    en: &'static str,
    ru: &'static str,
    uz: &'static str,
    examples: &'static [&'static str],
}

impl RawEntry {
    fn to_entry(&self) -> VocabEntry {
        VocabEntry {
            id: self.id.to_string(),
            word: self.word.to_string(),
            pronunciation: self.pronunciation.to_string(),
            part_of_speech: self.part_of_speech.to_string(),
            definitions: LocalizedText::new(self.en, self.ru, self.uz),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The Unit 1 wordlist, in alphabetical (teaching) order
pub fn unit1_vocab() -> Vec<Arc<VocabEntry>> {
    UNIT1_VOCAB
        .iter()
        .map(|raw| Arc::new(raw.to_entry()))
        .collect()
}

/// Check that every entry id is unique
pub fn validate_vocab(entries: &[Arc<VocabEntry>]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(ContentError::DuplicateVocabId(entry.id.clone()));
        }
    }
    Ok(())
}

const UNIT1_VOCAB: &[RawEntry] = &[
    RawEntry {
        id: "adapt",
        word: "adapt (to)",
        pronunciation: "/əˈdæpt tə/",
        part_of_speech: "v.",
        en: "To change your behaviour in order to deal more successfully with a new situation.",
        ru: "Адаптироваться, приспосабливаться.",
        uz: "Moslashmoq, ko'nikmoq.",
        examples: &[
            "The locals adapted the whistling language to Spanish.",
            "It took him a while to adapt to the new school.",
            "Animals adapt to their environment to survive.",
        ],
    },
    RawEntry {
        id: "ages",
        word: "ages",
        pronunciation: "/eɪdʒɪz/",
        part_of_speech: "n.",
        en: "A very long time.",
        ru: "Вечность (очень долго).",
        uz: "Asrlar (juda uzoq vaqt).",
        examples: &[
            "It seems like ages since we were in touch.",
            "I have been waiting for ages.",
            "It will take ages to finish this job.",
        ],
    },
    RawEntry {
        id: "appreciate",
        word: "appreciate",
        pronunciation: "/əˈpriːʃieɪt/",
        part_of_speech: "v.",
        en: "To recognize the good qualities of somebody/something.",
        ru: "Ценить, оценивать по достоинству.",
        uz: "Qadrlamoq.",
        examples: &[
            "There is so much to appreciate when you receive a handwritten letter.",
            "I really appreciate your help.",
            "She didn't appreciate the complexity of the problem.",
        ],
    },
    RawEntry {
        id: "arrest",
        word: "arrest",
        pronunciation: "/əˈrest/",
        part_of_speech: "v.",
        en: "If the police arrest somebody, the person is taken to a police station.",
        ru: "Арестовывать.",
        uz: "Hibsga olmoq.",
        examples: &[
            "In the Philippines, what can you be arrested for?",
            "He was arrested for speeding.",
            "The police arrested two suspects yesterday.",
        ],
    },
    RawEntry {
        id: "attempt",
        word: "attempt",
        pronunciation: "/əˈtempt/",
        part_of_speech: "n.",
        en: "An act of trying to do something, especially something difficult.",
        ru: "Попытка.",
        uz: "Urinish.",
        examples: &[
            "Several campaigns sprung up in an attempt to save letter-writing.",
            "This is my second attempt at the exam.",
            "They made no attempt to escape.",
        ],
    },
    RawEntry {
        id: "awkward",
        word: "awkward",
        pronunciation: "/ˈɔːkwəd/",
        part_of_speech: "adj.",
        en: "Making you feel embarrassed.",
        ru: "Неловкий, неудобный.",
        uz: "Noqulay, xijolatli.",
        examples: &[
            "Stand too close and you might make someone feel awkward.",
            "There was an awkward silence.",
            "He asked some awkward questions.",
        ],
    },
    RawEntry {
        id: "ban",
        word: "ban (from)",
        pronunciation: "/bæn frɒm/",
        part_of_speech: "v.",
        en: "To decide or say officially that something is not allowed.",
        ru: "Запрещать.",
        uz: "Taqiqlamoq.",
        examples: &[
            "Henry Ford banned his employees from whistling.",
            "Smoking is banned in public places.",
            "He was banned from driving for six months.",
        ],
    },
    RawEntry {
        id: "bear_with",
        word: "bear with",
        pronunciation: "/ˈbeə(r) ˌwɪð/",
        part_of_speech: "phr v.",
        en: "To be patient with somebody/something.",
        ru: "Подождать, потерпеть.",
        uz: "Sabr qilmoq, kutib turmoq.",
        examples: &[
            "Just bear with me a moment.",
            "Please bear with us while we fix the technical fault.",
            "If you bear with me, I will explain everything.",
        ],
    },
    RawEntry {
        id: "catch_up",
        word: "catch up",
        pronunciation: "/ˌkætʃ ˈʌp/",
        part_of_speech: "phr v.",
        en: "To find out about things that have happened.",
        ru: "Узнать последние новости, наверстать.",
        uz: "Yetib olmoq; yangiliklardan xabardor bo'lmoq.",
        examples: &[
            "It would be great if we could catch up properly soon.",
            "Let's meet for coffee and catch up.",
            "I have a lot of work to catch up on.",
        ],
    },
    RawEntry {
        id: "cause",
        word: "cause",
        pronunciation: "/kɔːz/",
        part_of_speech: "v.",
        en: "To make something happen.",
        ru: "Быть причиной, вызывать.",
        uz: "Sabab bo'lmoq.",
        examples: &[
            "Getting these things wrong can cause offence.",
            "The bad weather caused many delays.",
            "What caused the fire?",
        ],
    },
    RawEntry {
        id: "confidential",
        word: "confidential",
        pronunciation: "/ˌkɒnfɪˈdenʃl/",
        part_of_speech: "adj.",
        en: "Meant to be kept secret and not told to or seen by other people.",
        ru: "Конфиденциальный, секретный.",
        uz: "Maxfiy.",
        examples: &[
            "If an email is confidential, you shouldn’t share it.",
            "These documents are strictly confidential.",
            "Keep this information confidential.",
        ],
    },
    RawEntry {
        id: "confuse",
        word: "confuse",
        pronunciation: "/kənˈfjuːz/",
        part_of_speech: "v.",
        en: "To think wrongly that one person or thing is someone or something else.",
        ru: "Путать, сбивать с толку.",
        uz: "Adashtirmoq, chalkashtirmoq.",
        examples: &[
            "It’s easy to confuse Silbo with birdsong.",
            "I always confuse him with his brother.",
            "The instructions completely confused me.",
        ],
    },
    RawEntry {
        id: "consist_of",
        word: "consist (of)",
        pronunciation: "/kənˈsɪst ɒv/",
        part_of_speech: "v.",
        en: "To be formed from the people or things mentioned.",
        ru: "Состоять из.",
        uz: "...dan iborat bo'lmoq.",
        examples: &[
            "Silbo consists of four vowels and four consonants.",
            "The team consists of five members.",
            "Breakfast consisted of bread and cheese.",
        ],
    },
    RawEntry {
        id: "contribute",
        word: "contribute (to)",
        pronunciation: "/kɒnˈtrɪbjuːt/",
        part_of_speech: "v.",
        en: "To be one of the causes of something.",
        ru: "Способствовать, вносить вклад.",
        uz: "Hissa qo'shmoq.",
        examples: &[
            "Mobile phones contributed to the decline of Silbo.",
            "Stress contributed to his illness.",
            "Everyone should contribute to the discussion.",
        ],
    },
    RawEntry {
        id: "die_out",
        word: "die out",
        pronunciation: "/daɪ ˈaʊt/",
        part_of_speech: "phr v.",
        en: "To stop existing.",
        ru: "Вымирать, исчезать.",
        uz: "Yo'q bo'lib ketmoq.",
        examples: &[
            "If letters died out completely, it would be a loss.",
            "Many species are in danger of dying out.",
            "The tradition has died out in recent years.",
        ],
    },
    RawEntry {
        id: "disapprove",
        word: "disapprove (of)",
        pronunciation: "/ˌdɪsəˈpruːv/",
        part_of_speech: "v.",
        en: "To think that somebody/something is not good or suitable.",
        ru: "Не одобрять.",
        uz: "Ma'qullamaslik.",
        examples: &[
            "Spectators whistle when they disapprove of a decision.",
            "Her parents disapprove of her job.",
            "I strongly disapprove of smoking.",
        ],
    },
    RawEntry {
        id: "dominate",
        word: "dominate",
        pronunciation: "/ˈdɒmɪneɪt/",
        part_of_speech: "v.",
        en: "To control or have a lot of influence over something.",
        ru: "Доминировать, преобладать.",
        uz: "Ustunlik qilmoq, hukmronlik qilmoq.",
        examples: &[
            "I don’t like how she dominates the conversation.",
            "The skyline is dominated by skyscrapers.",
            "One company dominates the market.",
        ],
    },
    RawEntry {
        id: "handwriting",
        word: "handwriting",
        pronunciation: "/ˈhændraɪtɪŋ/",
        part_of_speech: "n.",
        en: "Writing done with a pen or pencil.",
        ru: "Почерк.",
        uz: "Husnixat, qo'l yozuvi.",
        examples: &[
            "I’ve always had terrible handwriting.",
            "Can you read his handwriting?",
            "The note was in her own handwriting.",
        ],
    },
    RawEntry {
        id: "hit_it_off",
        word: "hit it off",
        pronunciation: "/hɪt ɪt ɒf/",
        part_of_speech: "phr v.",
        en: "To have a good friendly relationship with somebody.",
        ru: "Сразу поладить.",
        uz: "Chiqishib ketmoq.",
        examples: &[
            "We hit it off immediately.",
            "Did you hit it off with your new colleagues?",
            "They didn't really hit it off at first.",
        ],
    },
    RawEntry {
        id: "interrupt",
        word: "interrupt",
        pronunciation: "/ˌɪntəˈrʌpt/",
        part_of_speech: "v.",
        en: "To say or do something that makes somebody stop what they are saying or doing.",
        ru: "Перебивать, прерывать.",
        uz: "Bo'lmoq, gapini bo'lmoq.",
        examples: &[
            "Is it OK to interrupt a person?",
            "Sorry to interrupt, but I have a question.",
            "Don't interrupt me while I'm speaking.",
        ],
    },
    RawEntry {
        id: "misunderstanding",
        word: "misunderstanding",
        pronunciation: "/ˌmɪsʌndəˈstændɪŋ/",
        part_of_speech: "n.",
        en: "A situation where people do not understand each other correctly.",
        ru: "Недопонимание.",
        uz: "Tushunmovchilik.",
        examples: &[
            "Getting these things wrong can lead to misunderstandings.",
            "There must be some misunderstanding.",
            "We cleared up the misunderstanding quickly.",
        ],
    },
    RawEntry {
        id: "offend",
        word: "offend",
        pronunciation: "/əˈfend/",
        part_of_speech: "v.",
        en: "To make somebody feel upset because of something you say or do.",
        ru: "Обижать, оскорблять.",
        uz: "Xafa qilmoq.",
        examples: &[
            "The weather is a topic unlikely to offend anybody.",
            "I didn't mean to offend you.",
            "He is easily offended.",
        ],
    },
    RawEntry {
        id: "put_foot_in",
        word: "put your foot in it",
        pronunciation: "/pʊt jɔː fʊt ɪn ɪt/",
        part_of_speech: "idiom",
        en: "To accidentally say something that embarrasses or upsets someone.",
        ru: "Сболтнуть лишнее, попасть впросак.",
        uz: "Qovun tushurmoq.",
        examples: &[
            "Can you remember a time you put your foot in it?",
            "I put my foot in it by asking about her ex-husband.",
            "He really put his foot in it this time.",
        ],
    },
    RawEntry {
        id: "tell_story",
        word: "tell an entertaining story",
        pronunciation: "/tel æn ˌentəˈteɪnɪŋ ˈstɔːri/",
        part_of_speech: "phr.",
        en: "To narrate something interesting or funny.",
        ru: "Рассказать занимательную историю.",
        uz: "Qiziqarli hikoya aytib bermoq.",
        examples: &[
            "Can you tell me an entertaining story?",
            "He is good at telling entertaining stories.",
            "She told an entertaining story about her trip.",
        ],
    },
    RawEntry {
        id: "whistle",
        word: "whistle",
        pronunciation: "/ˈwɪsl/",
        part_of_speech: "v.",
        en: "To make a high sound by forcing air through your lips.",
        ru: "Свистеть.",
        uz: "Hushtak chalmoq.",
        examples: &[
            "We whistle when we want to get someone's attention.",
            "He whistled a happy tune.",
            "The referee whistled for full time.",
        ],
    },
];
