// src/i18n.rs
use crate::session::Grade;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "tr")]
    Turkish,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::English, Lang::German, Lang::Turkish];

    pub fn texts(self) -> &'static Texts {
        match self {
            Lang::English => &EN,
            Lang::German => &DE,
            Lang::Turkish => &TR,
        }
    }
}

/// Every string shown by the UI, per language.
pub struct Texts {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub main_menu: &'static str,
    pub mode_select: &'static str,
    pub mode_topic: &'static str,
    pub mode_exam: &'static str,
    pub topic_learning_help: &'static str,
    pub exam_help: &'static str,
    pub further_options: &'static str,
    pub load_questions: &'static str,
    pub reload_questions: &'static str,
    pub load_info: &'static str,
    pub folder_path: &'static str,
    pub load: &'static str,
    pub questions_loaded: &'static str,
    pub no_questions: &'static str,
    pub available_topics: &'static str,
    pub total_questions: &'static str,
    pub avg_per_topic: &'static str,
    pub topic_overview: &'static str,
    pub topic_select: &'static str,
    pub topic_dropdown: &'static str,
    pub questions_word: &'static str,
    pub start: &'static str,
    pub start_quiz: &'static str,
    pub all_topics: &'static str,
    pub simulation_info: &'static str,
    pub back: &'static str,
    pub main_page: &'static str,
    pub question: &'static str,
    pub of: &'static str,
    pub current_status: &'static str,
    pub topic_label: &'static str,
    pub your_answer: &'static str,
    pub answer_hint: &'static str,
    pub confirm_answer: &'static str,
    pub empty_answer: &'static str,
    pub next_question: &'static str,
    pub evaluation: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub model_answer: &'static str,
    pub results_title: &'static str,
    pub score: &'static str,
    pub percentage: &'static str,
    pub grade: &'static str,
    pub excellent: &'static str,
    pub good: &'static str,
    pub practice: &'static str,
    pub perfect: &'static str,
    pub weak_topics: &'static str,
    pub errors: &'static str,
    pub detailed_evaluation: &'static str,
    pub repeat_quiz: &'static str,
    pub to_main_menu: &'static str,
    pub language: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    /// Excellent, very good, good, satisfactory, sufficient, failed.
    pub grades: [&'static str; 6],
}

impl Texts {
    pub fn grade_label(&self, grade: Grade) -> &'static str {
        let idx = match grade {
            Grade::Excellent => 0,
            Grade::VeryGood => 1,
            Grade::Good => 2,
            Grade::Satisfactory => 3,
            Grade::Sufficient => 4,
            Grade::Failed => 5,
        };
        self.grades[idx]
    }
}

static EN: Texts = Texts {
    name: "English",
    title: "🩺 Nursing training quiz",
    subtitle: "Digital self-study for professional nursing education",
    main_menu: "Main menu",
    mode_select: "Choose a learning mode:",
    mode_topic: "📚 Learn topics",
    mode_exam: "🎯 Exam simulation",
    topic_learning_help: "Study individual topics",
    exam_help: "Simulate a real exam with mixed questions",
    further_options: "Further options",
    load_questions: "📁 Load questions",
    reload_questions: "🔄 Reload questions",
    load_info: "Pick a folder or a .zip file that contains a 'pflegepool' folder with one sub-folder per topic",
    folder_path: "Folder or .zip file:",
    load: "Load",
    questions_loaded: "questions loaded",
    no_questions: "No questions found",
    available_topics: "Available topics",
    total_questions: "Total questions",
    avg_per_topic: "Ø questions per topic",
    topic_overview: "Topic overview",
    topic_select: "Choose a topic to study:",
    topic_dropdown: "Alternative: pick a topic from the list",
    questions_word: "questions",
    start: "🚀 Start",
    start_quiz: "🚀 Start quiz",
    all_topics: "🎲 All topics (mixed)",
    simulation_info: "Questions from all topics are asked in random order.",
    back: "⬅ Back",
    main_page: "🏠 Home",
    question: "Question",
    of: "of",
    current_status: "Current status",
    topic_label: "Topic:",
    your_answer: "Your answer:",
    answer_hint: "Type your answer here...",
    confirm_answer: "✅ Confirm answer",
    empty_answer: "⚠ Type an answer before confirming.",
    next_question: "➡ Next question",
    evaluation: "📊 Evaluation",
    correct: "✅ Correct!",
    incorrect: "❌ Wrong.",
    model_answer: "Model answer:",
    results_title: "📊 Quiz results",
    score: "Score",
    percentage: "Success rate",
    grade: "Grade",
    excellent: "🌟 Excellent! You did very well.",
    good: "👍 Well done! You are on the right track.",
    practice: "📚 Practice makes perfect! Feel free to try again.",
    perfect: "Perfect! You answered every question correctly! 🎉",
    weak_topics: "Weak areas to revise:",
    errors: "errors",
    detailed_evaluation: "📋 Show detailed evaluation",
    repeat_quiz: "🔄 Repeat quiz",
    to_main_menu: "🏠 To main menu",
    language: "🌐 Language",
    dark_mode: "🌙 Dark mode",
    light_mode: "☀ Light mode",
    grades: [
        "Excellent",
        "Very good",
        "Good",
        "Satisfactory",
        "Sufficient",
        "Failed",
    ],
};

static DE: Texts = Texts {
    name: "Deutsch",
    title: "🩺 Lernprogramm für die Pflegeausbildung",
    subtitle: "Digitales Lernsystem für professionelle Pflegeausbildung",
    main_menu: "Hauptmenü",
    mode_select: "Wähle einen Lernmodus:",
    mode_topic: "📚 Themen lernen",
    mode_exam: "🎯 Prüfungssimulation",
    topic_learning_help: "Lerne gezielt einzelne Themen",
    exam_help: "Simulation einer echten Prüfung mit gemischten Fragen",
    further_options: "Weitere Optionen",
    load_questions: "📁 Fragen laden",
    reload_questions: "🔄 Fragen neu laden",
    load_info: "Wähle einen Ordner oder eine .zip-Datei, die einen 'pflegepool'-Ordner mit Themen-Unterordnern enthält",
    folder_path: "Ordner oder .zip-Datei:",
    load: "Laden",
    questions_loaded: "Fragen erfolgreich geladen",
    no_questions: "Keine Fragen gefunden",
    available_topics: "Verfügbare Themen",
    total_questions: "Gesamte Fragen",
    avg_per_topic: "Ø Fragen pro Thema",
    topic_overview: "Themenübersicht",
    topic_select: "Wähle ein Thema zum Lernen:",
    topic_dropdown: "Alternative: Thema aus Liste auswählen",
    questions_word: "Fragen",
    start: "🚀 Starten",
    start_quiz: "🚀 Quiz starten",
    all_topics: "🎲 Alle Themen (gemischt)",
    simulation_info: "Fragen aus allen Themen werden in zufälliger Reihenfolge gestellt.",
    back: "⬅ Zurück",
    main_page: "🏠 Startseite",
    question: "Frage",
    of: "von",
    current_status: "Aktueller Stand",
    topic_label: "Thema:",
    your_answer: "Deine Antwort:",
    answer_hint: "Gib hier deine Antwort ein...",
    confirm_answer: "✅ Antwort bestätigen",
    empty_answer: "⚠ Bitte gib zuerst eine Antwort ein.",
    next_question: "➡ Nächste Frage",
    evaluation: "📊 Bewertung",
    correct: "✅ Richtig!",
    incorrect: "❌ Falsch.",
    model_answer: "Musterlösung:",
    results_title: "📊 Quiz-Ergebnisse",
    score: "Ergebnis",
    percentage: "Erfolgsquote",
    grade: "Note",
    excellent: "🌟 Ausgezeichnet! Du hast sehr gut abgeschnitten.",
    good: "👍 Gut gemacht! Du bist auf dem richtigen Weg.",
    practice: "📚 Übung macht den Meister! Versuche es gerne nochmal.",
    perfect: "Perfekt! Du hast alle Fragen richtig beantwortet! 🎉",
    weak_topics: "Schwache Bereiche zum Wiederholen:",
    errors: "Fehler",
    detailed_evaluation: "📋 Detaillierte Auswertung anzeigen",
    repeat_quiz: "🔄 Quiz wiederholen",
    to_main_menu: "🏠 Zum Hauptmenü",
    language: "🌐 Sprache",
    dark_mode: "🌙 Dunkel",
    light_mode: "☀ Hell",
    grades: [
        "Ausgezeichnet",
        "Sehr gut",
        "Gut",
        "Befriedigend",
        "Ausreichend",
        "Nicht bestanden",
    ],
};

static TR: Texts = Texts {
    name: "Türkçe",
    title: "🩺 Hemşirelik Eğitimi için Öğrenme Programı",
    subtitle: "Profesyonel hemşirelik eğitimi için dijital öğrenme sistemi",
    main_menu: "Ana Menü",
    mode_select: "Bir öğrenme modu seçin:",
    mode_topic: "📚 Konuları öğren",
    mode_exam: "🎯 Sınav simülasyonu",
    topic_learning_help: "Belirli konuları hedefli olarak öğren",
    exam_help: "Karışık sorularla gerçek sınav simülasyonu",
    further_options: "Diğer Seçenekler",
    load_questions: "📁 Soru yükle",
    reload_questions: "🔄 Soruları yeniden yükle",
    load_info: "Konu alt klasörleri içeren bir 'pflegepool' klasörü olan bir klasör veya .zip dosyası seçin",
    folder_path: "Klasör veya .zip dosyası:",
    load: "Yükle",
    questions_loaded: "Sorular başarıyla yüklendi",
    no_questions: "Soru bulunamadı",
    available_topics: "Mevcut Konular",
    total_questions: "Toplam Sorular",
    avg_per_topic: "Ø Konu başına soru",
    topic_overview: "Konu genel bakışı",
    topic_select: "Öğrenmek için bir konu seçin:",
    topic_dropdown: "Alternatif: listeden bir konu seçin",
    questions_word: "soru",
    start: "🚀 Başlat",
    start_quiz: "🚀 Quiz başlat",
    all_topics: "🎲 Tüm konular (karışık)",
    simulation_info: "Tüm konulardan sorular rastgele sırada sorulacak.",
    back: "⬅ Geri",
    main_page: "🏠 Ana sayfa",
    question: "Soru",
    of: "/",
    current_status: "Mevcut Durum",
    topic_label: "Konu:",
    your_answer: "Cevabınız:",
    answer_hint: "Cevabınızı buraya yazın...",
    confirm_answer: "✅ Cevabı onayla",
    empty_answer: "⚠ Lütfen önce bir cevap yazın.",
    next_question: "➡ Sonraki soru",
    evaluation: "📊 Değerlendirme",
    correct: "✅ Doğru!",
    incorrect: "❌ Yanlış.",
    model_answer: "Örnek çözüm:",
    results_title: "📊 Quiz sonuçları",
    score: "Sonuç",
    percentage: "Başarı oranı",
    grade: "Not",
    excellent: "🌟 Mükemmel! Çok iyi bir performans sergilediniz.",
    good: "👍 İyi iş çıkardınız! Doğru yoldasınız.",
    practice: "📚 Pratik mükemmelleştirir! Tekrar deneyebilirsiniz.",
    perfect: "Mükemmel! Tüm soruları doğru cevapladınız! 🎉",
    weak_topics: "Tekrar edilmesi gereken zayıf alanlar:",
    errors: "hata",
    detailed_evaluation: "📋 Detaylı değerlendirmeyi göster",
    repeat_quiz: "🔄 Quiz'i tekrarla",
    to_main_menu: "🏠 Ana menüye",
    language: "🌐 Dil",
    dark_mode: "🌙 Koyu",
    light_mode: "☀ Açık",
    grades: [
        "Pekiyi",
        "Çok iyi",
        "İyi",
        "Orta",
        "Geçer",
        "Başarısız",
    ],
};
