//! Compiled-in translations for backend strings known to reach the UI.

/// `(uz, ru)` pairs.
pub(crate) const ENTRIES: &[(&str, &str)] = &[
    // Lesson titles
    (
        "Ko'phadlar va ularning xossalari",
        "Многочлены и их свойства",
    ),
    // Professions
    ("Kasb tanlanmagan", "Профессия не выбрана"),
    (
        "O'zingizga mos kasbni tanlang va biz sizga o'rganish yo'l xaritasini tuzib beramiz.",
        "Выберите подходящую профессию, и мы составим для вас дорожную карту обучения.",
    ),
    ("Barcha kasblarni ko'rish", "Посмотреть все профессии"),
    // Courses
    ("Matematika: Olimpiada Master", "Математика: Олимпиада Мастер"),
];
