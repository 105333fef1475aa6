//! Localized interface text
//!
//! Lesson content lives in `liblessondeck::content`; this is the text of the
//! terminal interface around it.

use liblessondeck::Phrase;

// === Chrome ===

pub const NAV_HINT: Phrase = Phrase::new(
    "←/→ navigate · F1 help · F2-F4 language · q quit",
    "←/→ навигация · F1 справка · F2-F4 язык · q выход",
    "←/→ harakat · F1 yordam · F2-F4 til · q chiqish",
);

pub const HELP_TITLE: Phrase = Phrase::new("Keyboard Shortcuts", "Горячие клавиши", "Tezkor tugmalar");

pub const HELP_GLOBAL: Phrase = Phrase::new("Everywhere", "Везде", "Hamma joyda");

pub const HELP_SLIDE: Phrase = Phrase::new("On this slide", "На этом слайде", "Ushbu slaydda");

pub const HELP_CLOSE: Phrase = Phrase::new(
    "Press Esc or F1 to close",
    "Нажмите Esc или F1, чтобы закрыть",
    "Yopish uchun Esc yoki F1 ni bosing",
);

pub const ERROR_TITLE: Phrase = Phrase::new("Error", "Ошибка", "Xato");

pub const ERROR_DISMISS: Phrase = Phrase::new(
    "Press Esc to dismiss",
    "Нажмите Esc, чтобы закрыть",
    "Yopish uchun Esc ni bosing",
);

// === Shared slide text ===

pub const CHECK: Phrase = Phrase::new("Check", "Проверить", "Tekshirish");
pub const REVEAL_ALL: Phrase = Phrase::new("Reveal All", "Показать все", "Hammasini ko'rsatish");
pub const SCORE: Phrase = Phrase::new("Score", "Счёт", "Natija");
pub const CORRECT: Phrase = Phrase::new("Correct!", "Верно!", "To'g'ri!");
pub const TRY_AGAIN: Phrase = Phrase::new("Try again", "Попробуйте ещё раз", "Qayta urinib ko'ring");
pub const TAP_TO_LISTEN: Phrase =
    Phrase::new("Press s to listen", "Нажми s, чтобы послушать", "Eshitish uchun s ni bosing");

// === Hints ===

pub const HINT_CONTINUE: Phrase = Phrase::new("Enter: continue", "Enter: продолжить", "Enter: davom etish");

pub const HINT_START: Phrase =
    Phrase::new("Enter: start lesson", "Enter: начать урок", "Enter: darsni boshlash");

pub const HINT_LISTEN: Phrase = Phrase::new(
    "s: listen · Enter: continue",
    "s: слушать · Enter: продолжить",
    "s: tinglash · Enter: davom etish",
);

pub const HINT_SILENCE: Phrase = Phrase::new(
    "Enter: start/pause · r: reset",
    "Enter: старт/пауза · r: сброс",
    "Enter: boshlash/to'xtatish · r: qayta",
);

pub const HINT_CONVERSATION: Phrase = Phrase::new(
    "↑/↓ pick · a aim to do · v avoid · u unplace · c check · r reveal",
    "↑/↓ выбрать · a делай · v избегай · u убрать · c проверить · r показать",
    "↑/↓ tanlash · a qil · v qoch · u olib tashlash · c tekshirish · r ko'rsatish",
);

pub const HINT_CHANNELS: Phrase = Phrase::new(
    "↑/↓ pick · p paper · e electronic · b both · u unplace · r reveal",
    "↑/↓ выбрать · p бумага · e электронные · b оба · u убрать · r показать",
    "↑/↓ tanlash · p qog'oz · e elektron · b ikkalasi · u olib tashlash · r ko'rsatish",
);

pub const HINT_IDIOMS: Phrase = Phrase::new(
    "↑/↓ pick card · Enter flip",
    "↑/↓ выбрать карточку · Enter перевернуть",
    "↑/↓ kartani tanlash · Enter aylantirish",
);

pub const HINT_GRAMMAR: Phrase = Phrase::new(
    "Tab: switch question type",
    "Tab: сменить тип вопроса",
    "Tab: savol turini almashtirish",
);

pub const HINT_UNSCRAMBLE: Phrase = Phrase::new(
    "1-9 place word · Backspace undo · Enter check · a answer · r retry · n next",
    "1-9 поставить слово · Backspace отменить · Enter проверить · a ответ · r заново · n далее",
    "1-9 so'z qo'yish · Backspace bekor · Enter tekshirish · a javob · r qayta · n keyingi",
);

pub const HINT_TIMELINE: Phrase =
    Phrase::new("Enter: replay", "Enter: повторить", "Enter: qayta ko'rsatish");

pub const HINT_CHOICE: Phrase =
    Phrase::new("1/2: choose a sentence", "1/2: выбрать предложение", "1/2: gapni tanlash");

pub const HINT_LETTER: Phrase = Phrase::new(
    "↑/↓ pick gap · Enter type · c check · a show answers",
    "↑/↓ выбрать пропуск · Enter ввод · c проверить · a показать ответы",
    "↑/↓ bo'shliqni tanlash · Enter yozish · c tekshirish · a javoblar",
);

pub const HINT_TYPING: Phrase = Phrase::new(
    "Enter: done · Esc: cancel",
    "Enter: готово · Esc: отмена",
    "Enter: tayyor · Esc: bekor qilish",
);

pub const HINT_MATCH: Phrase = Phrase::new(
    "↑/↓ pick verb · 1-9 choose preposition · r reveal",
    "↑/↓ выбрать глагол · 1-9 выбрать предлог · r показать",
    "↑/↓ fe'lni tanlash · 1-9 predlogni tanlash · r ko'rsatish",
);

pub const HINT_EMAIL: Phrase = Phrase::new("Enter: write", "Enter: писать", "Enter: yozish");

pub const HINT_EMAIL_TYPING: Phrase = Phrase::new(
    "Ctrl+S: send · Esc: stop writing",
    "Ctrl+S: отправить · Esc: закончить ввод",
    "Ctrl+S: yuborish · Esc: yozishni to'xtatish",
);

pub const HINT_QUIZ: Phrase = Phrase::new("1-4: answer", "1-4: ответить", "1-4: javob berish");
