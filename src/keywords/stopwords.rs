//! Stop-word lists per language.
//!
//! Lists are matched against lower-cased tokens. Unknown languages fall back
//! to English.

static EN: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "even", "ever", "every", "few",
    "for", "from", "further", "get", "got", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "let", "like",
    "may", "me", "might", "more", "most", "much", "must", "my", "myself", "never", "new", "no",
    "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "same", "say", "said", "she", "should", "shouldn't", "so",
    "some", "still", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "upon", "us", "use", "used", "using", "very", "via", "was",
    "wasn't", "we", "well", "were", "weren't", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "within", "without", "won't", "would", "wouldn't", "yes", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

static DE: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "andere",
    "anderen", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "das",
    "dass", "dein", "dem", "den", "denn", "der", "des", "dich", "die", "dies", "diese", "diesem",
    "diesen", "dieser", "dieses", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem",
    "einen", "einer", "eines", "er", "es", "etwas", "euch", "euer", "für", "gegen", "hab",
    "habe", "haben", "hat", "hatte", "hier", "hin", "ich", "ihr", "ihre", "ihrem", "ihren", "im",
    "in", "ist", "jede", "jeder", "jetzt", "kann", "kein", "keine", "man", "mehr", "mein", "mit",
    "muss", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein",
    "seine", "sich", "sie", "sind", "so", "über", "um", "und", "uns", "unser", "unter", "vom",
    "von", "vor", "war", "waren", "was", "weil", "wenn", "werden", "wie", "wieder", "wir", "wird",
    "wo", "zu", "zum", "zur", "zwischen",
];

static FR: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "cette", "dans", "de", "des", "du", "elle", "elles", "en",
    "est", "et", "été", "être", "eu", "il", "ils", "je", "la", "le", "les", "leur", "leurs",
    "lui", "ma", "mais", "me", "même", "mes", "moi", "mon", "ne", "nos", "notre", "nous", "on",
    "ont", "ou", "où", "par", "pas", "plus", "pour", "qu", "que", "qui", "sa", "sans", "se",
    "ses", "son", "sont", "sur", "ta", "te", "tes", "toi", "ton", "tous", "tout", "toute",
    "tu", "un", "une", "vos", "votre", "vous", "c'est", "d'un", "d'une", "l'on", "n'est",
];

static ES: &[&str] = &[
    "al", "algo", "ante", "como", "con", "contra", "cual", "cuando", "de", "del", "desde", "donde",
    "durante", "el", "ella", "ellas", "ellos", "en", "entre", "era", "es", "esa", "ese", "eso",
    "esta", "está", "este", "esto", "estos", "fue", "ha", "han", "hasta", "hay", "la", "las",
    "le", "les", "lo", "los", "más", "me", "mi", "muy", "nada", "ni", "no", "nos", "nosotros",
    "o", "otra", "otro", "para", "pero", "poco", "por", "porque", "que", "qué", "quien", "se",
    "sea", "ser", "si", "sí", "sin", "sobre", "son", "su", "sus", "también", "tanto", "te",
    "tiene", "todo", "todos", "tu", "un", "una", "uno", "unos", "y", "ya", "yo",
];

static IT: &[&str] = &[
    "a", "ad", "al", "alla", "alle", "anche", "che", "chi", "ci", "come", "con", "cui", "da",
    "dal", "dalla", "degli", "dei", "del", "della", "delle", "di", "dove", "e", "è", "ed", "gli",
    "ha", "hanno", "i", "il", "in", "io", "la", "le", "lo", "loro", "ma", "mi", "nei", "nel",
    "nella", "non", "noi", "o", "per", "più", "perché", "quale", "quando", "questa", "questo",
    "se", "si", "sia", "sono", "su", "sua", "suo", "sul", "sulla", "tra", "tu", "un", "una",
    "uno", "voi",
];

static RU: &[&str] = &[
    "а", "без", "более", "бы", "был", "была", "были", "было", "быть", "в", "вам", "вас", "весь",
    "во", "вот", "все", "всех", "вы", "где", "да", "даже", "для", "до", "его", "ее", "её", "если",
    "есть", "еще", "ещё", "же", "за", "здесь", "и", "из", "или", "им", "их", "к", "как", "ко",
    "когда", "кто", "ли", "либо", "мне", "может", "мы", "на", "над", "надо", "наш", "не", "него",
    "нее", "нет", "ни", "них", "но", "ну", "о", "об", "однако", "он", "она", "они", "оно", "от",
    "очень", "по", "под", "при", "с", "со", "так", "также", "такой", "там", "те", "тем", "то",
    "того", "тоже", "той", "только", "том", "ты", "у", "уже", "хотя", "чего", "чей", "чем",
    "что", "чтобы", "эта", "эти", "это", "я",
];

/// Stop words for a language tag such as `en`, `de-AT` or `pt_BR`.
#[must_use]
pub fn for_language(lang: &str) -> &'static [&'static str] {
    match primary_subtag(lang).as_str() {
        "de" => DE,
        "fr" => FR,
        "es" => ES,
        "it" => IT,
        "ru" => RU,
        _ => EN,
    }
}

/// Lower-cased primary subtag of a language tag.
#[must_use]
pub fn primary_subtag(lang: &str) -> String {
    lang.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
