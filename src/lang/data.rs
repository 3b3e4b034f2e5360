use crate::dictionary::Dictionary;
use crate::lang::Lang;

use paste::paste;
use phf::{Map, Set, phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates every language constant, word set and lookup table
///    from the single table below
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $konst:ident, $code:literal, $iso3:literal, $name:literal,
        aliases: [ $($alias:literal),* $(,)? ],
        words: [ $($word:literal),* $(,)? ]
    );* $(;)?) => {
        // Public `Lang` constants
        $(
            pub const $konst: Lang = Lang { code: $code, iso3: $iso3, name: $name };
        )*

        paste! {
            // Per-language perfect-hash word sets
            $(
                static [<$konst _WORDS>]: Set<&'static str> = phf_set! { $($word),* };
            )*

            /// Built-in stop-word dictionaries keyed by two-letter code.
            pub static STOP_WORDS: Map<&'static str, Dictionary> = phf_map! {
                $( $code => Dictionary::from_static($konst, &[<$konst _WORDS>]), )*
            };
        }

        /// Three-letter and legacy codes folded onto the two-letter code.
        pub static ALIASES: Map<&'static str, &'static str> = phf_map! {
            $( $iso3 => $code, $( $alias => $code, )* )*
        };

        pub static ALL_LANGS: &[Lang] = &[$($konst),*];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Adding a language is one more entry here. Words are stored lowercase
//    and NFC-composed; each must be a single token under the default pattern.
// ---------------------------------------------------------------------------
define_languages! {
    ARA, "ar", "ara", "Arabic",
        aliases: [],
        words: [
            "في", "من", "على", "إلى", "عن", "مع", "هذا", "هذه", "ذلك", "تلك", "التي", "الذي",
            "الذين", "اللذين", "اللتين", "اللواتي", "هو", "هي", "هم", "هن", "أنا", "نحن", "أنت",
            "أنتم", "كان", "كانت", "يكون", "تكون", "ليس", "لم", "لن", "لا", "ما", "ماذا", "متى",
            "أين", "كيف", "هل", "قد", "ثم", "أو", "أم", "بل", "لكن", "إن", "أن", "إذا", "حتى", "كل",
            "بعض", "غير", "بين", "عند", "عندما", "منذ", "حيث", "أي", "التى", "الى", "الي", "او",
            "ان", "انه", "أنه", "إنه", "وقد", "وفي", "ومن", "وعلى", "وهو", "وهي", "وكان", "ولا",
            "وما", "كما", "لقد", "هناك", "هنا", "فيه", "فيها", "منه", "منها", "عليه", "عليها", "له",
            "لها", "به", "بها", "ذات", "أيضا", "ايضا", "يمكن", "قبل", "بعد", "خلال", "ضد", "دون",
            "نحو", "لدى", "حول", "عبر",
        ];

    BUL, "bg", "bul", "Bulgarian",
        aliases: [],
        words: [
            "а", "аз", "ако", "ала", "бе", "без", "беше", "би", "бил", "била", "били", "било",
            "благодаря", "близо", "бъдат", "бъде", "бяха", "в", "вас", "ваш", "ваша", "вероятно",
            "вече", "ви", "вие", "винаги", "време", "все", "всеки", "всички", "всичко", "всяка",
            "във", "въпреки", "върху", "ги", "главно", "го", "да", "дали", "два", "двама",
            "двамата", "две", "двете", "днес", "до", "добре", "докато", "докога", "дори", "досега",
            "доста", "друг", "друга", "други", "е", "едва", "един", "една", "еднаква", "еднакви",
            "еднакъв", "едно", "ето", "за", "зад", "заедно", "заради", "засега", "затова", "защо",
            "защото", "и", "из", "или", "им", "има", "имат", "иска", "й", "каза", "как", "каква",
            "какво", "както", "какъв", "като", "кога", "когато", "което", "които", "кой", "който",
            "колко", "която", "къде", "където", "към", "ли", "май", "малко", "ме", "между", "мен",
            "ми", "много", "мнозина", "мога", "могат", "може", "моля", "момента", "му", "на", "над",
            "назад", "най", "направи", "напред", "например", "нас", "не", "него", "нещо", "нея",
            "ни", "ние", "никой", "нито", "нищо", "но", "нов", "нова", "нови", "някои", "някой",
            "няколко", "няма", "обаче", "около", "освен", "особено", "от", "отгоре", "отново",
            "още", "пак", "по", "повече", "повечето", "под", "поне", "поради", "после", "почти",
            "прави", "пред", "преди", "през", "при", "пък", "първата", "първи", "първо", "пъти",
            "равен", "равна", "с", "са", "сам", "само", "се", "сега", "си", "скоро", "след",
            "следващ", "сме", "според", "сред", "срещу", "сте", "съм", "със", "също", "тази",
            "така", "такива", "такъв", "там", "твой", "те", "тези", "ти", "то", "това", "тогава",
            "този", "той", "толкова", "точно", "три", "трябва", "тук", "тъй", "тя", "тях", "у",
            "утре", "хиляди", "че", "често", "чрез", "ще", "щом", "я",
        ];

    CAT, "ca", "cat", "Catalan",
        aliases: [],
        words: [
            "a", "abans", "ací", "així", "això", "al", "aleshores", "algun", "alguna", "algunes",
            "alguns", "alhora", "allà", "allí", "allò", "als", "altra", "altre", "altres", "amb",
            "ambdues", "ambdós", "aquell", "aquella", "aquelles", "aquells", "aquest", "aquesta",
            "aquestes", "aquests", "aquí", "baix", "bastant", "bé", "cada", "cadascuna",
            "cadascunes", "cadascuns", "cadascú", "com", "contra", "d'un", "d'una", "d'unes",
            "d'uns", "dalt", "de", "del", "dels", "des", "després", "dins", "dintre", "donat",
            "doncs", "durant", "e", "el", "elles", "ells", "els", "em", "en", "encara", "ens",
            "entre", "era", "érem", "eren", "eres", "es", "està", "estan", "estat", "estava",
            "estem", "esteu", "estic", "estàvem", "estàveu", "et", "ets", "fins", "fora", "gairebé",
            "ha", "han", "has", "havia", "he", "hem", "heu", "hi", "ho", "i", "igual", "iguals",
            "ja", "l'hi", "la", "les", "li", "llavors", "mai", "mateix", "mateixa", "mateixes",
            "mateixos", "me", "mentre", "meu", "meus", "meva", "meves", "molt", "molta", "moltes",
            "molts", "mon", "mons", "més", "n'he", "n'hi", "ne", "ni", "no", "nogensmenys", "només",
            "nosaltres", "nostra", "nostre", "nostres", "o", "on", "pas", "pel", "pels", "per",
            "perquè", "però", "poc", "poca", "pocs", "poques", "potser", "propi", "qual", "quals",
            "quan", "quant", "que", "quelcom", "qui", "quin", "quina", "quines", "quins", "què",
            "s'ha", "s'han", "sa", "semblant", "semblants", "ses", "seu", "seus", "seva", "seves",
            "si", "sobre", "sobretot", "solament", "sols", "son", "sons", "sota", "sou", "sóc",
            "són", "tal", "també", "tampoc", "tan", "tant", "tanta", "tantes", "teu", "teus",
            "teva", "teves", "ton", "tons", "tot", "tota", "totes", "tots", "un", "una", "unes",
            "uns", "us", "va", "vaig", "vam", "van", "vas", "veu", "vosaltres", "vostra", "vostre",
            "vostres",
        ];

    CES, "cs", "ces", "Czech",
        aliases: ["cze"],
        words: [
            "a", "aby", "ačkoli", "ale", "anebo", "ani", "ano", "asi", "aspoň", "atd", "až", "bez",
            "beze", "blízko", "bohužel", "brzo", "bude", "budeme", "budete", "budeš", "budou",
            "budu", "by", "byl", "byla", "byli", "bylo", "byly", "bys", "být", "během", "chce",
            "chceme", "chcete", "chceš", "chci", "chtít", "chtějí", "co", "což", "daleko", "další",
            "dnes", "do", "docela", "dva", "dvě", "dál", "dále", "ho", "hodně", "i", "jak",
            "jakmile", "jako", "jakož", "jde", "je", "jeden", "jedna", "jedno", "jednou", "jedou",
            "jeho", "jehož", "jej", "jejich", "její", "jelikož", "jemu", "jen", "jenom", "jestli",
            "jestliže", "ještě", "jež", "ji", "jich", "jimi", "jinak", "jiné", "již", "jsem",
            "jseš", "jsi", "jsme", "jsou", "jste", "já", "jí", "jím", "jíž", "k", "kam", "kde",
            "kdo", "kdy", "když", "ke", "kolik", "kromě", "kterou", "která", "které", "který",
            "kteří", "kvůli", "mají", "mezi", "mi", "mne", "mnou", "mně", "moc", "mohl", "mohou",
            "moje", "moji", "možná", "musí", "může", "my", "má", "málo", "mám", "máme", "máte",
            "máš", "mé", "mí", "mít", "mě", "můj", "na", "nad", "nade", "naproti", "načež", "naše",
            "naši", "ne", "nebo", "nebyl", "nebyla", "nebyli", "nebyly", "nechť", "nejsi", "nejsou",
            "nemají", "nemáme", "nemáte", "neměl", "není", "než", "nic", "nich", "nimi", "nové",
            "nový", "nám", "námi", "o", "od", "ode", "on", "ona", "oni", "ono", "ony", "pak", "po",
            "pod", "podle", "pokud", "pouze", "potom", "pro", "proto", "protože", "proč", "první",
            "před", "přede", "přes", "přese", "při", "přičemž", "s", "se", "si", "sice", "skoro",
            "smí", "snad", "spolu", "své", "svých", "svým", "svými", "ta", "tady", "tak", "takhle",
            "taky", "také", "takže", "tam", "tato", "tebe", "tebou", "tedy", "ten", "tento", "této",
            "ti", "tím", "tímto", "to", "tobě", "tohle", "toho", "tohoto", "tom", "tomto", "tomu",
            "tomuto", "toto", "tu", "tuto", "tvoje", "tvá", "tvé", "tvůj", "ty", "tyto", "tě",
            "těm", "těma", "u", "určitě", "už", "v", "vaše", "vaši", "ve", "vedle", "vlastně", "vy",
            "vám", "vámi", "vás", "váš", "více", "však", "všechen", "všechno", "všichni", "vůbec",
            "vždy", "z", "za", "zatímco", "zač", "zda", "zde", "ze", "že",
        ];

    DAN, "da", "dan", "Danish",
        aliases: [],
        words: [
            "og", "i", "jeg", "det", "at", "en", "den", "til", "er", "som", "på", "de", "med",
            "han", "af", "for", "ikke", "der", "var", "mig", "sig", "men", "et", "har", "om", "vi",
            "min", "havde", "ham", "hun", "nu", "over", "da", "fra", "du", "ud", "sin", "dem", "os",
            "op", "man", "hans", "hvor", "eller", "hvad", "skal", "selv", "her", "alle", "vil",
            "blev", "kunne", "ind", "når", "være", "dog", "noget", "ville", "jo", "deres", "efter",
            "ned", "skulle", "denne", "end", "dette", "mit", "også", "under", "have", "dig",
            "anden", "hende", "mine", "alt", "meget", "sit", "sine", "vor", "mod", "disse", "hvis",
            "din", "nogle", "hos", "blive", "mange", "ad", "bliver", "hendes", "været", "thi",
            "jer", "sådan",
        ];

    DEU, "de", "deu", "German",
        aliases: ["ger"],
        words: [
            "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
            "andere", "anderem", "anderen", "anderer", "anderes", "anderm", "andern", "anders",
            "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "der", "den",
            "des", "dem", "die", "das", "dass", "daß", "derselbe", "derselben", "denselben",
            "desselben", "demselben", "dieselbe", "dieselben", "dasselbe", "dazu", "dein", "deine",
            "deinem", "deinen", "deiner", "deines", "denn", "derer", "dessen", "dich", "dir", "du",
            "dies", "diese", "diesem", "diesen", "dieser", "dieses", "doch", "dort", "durch", "ein",
            "eine", "einem", "einen", "einer", "eines", "einig", "einige", "einigem", "einigen",
            "einiger", "einiges", "einmal", "er", "ihn", "ihm", "es", "etwas", "euer", "eure",
            "eurem", "euren", "eurer", "eures", "für", "gegen", "gewesen", "hab", "habe", "haben",
            "hat", "hatte", "hatten", "hier", "hin", "hinter", "ich", "mich", "mir", "ihr", "ihre",
            "ihrem", "ihren", "ihrer", "ihres", "euch", "im", "in", "indem", "ins", "ist", "jede",
            "jedem", "jeden", "jeder", "jedes", "jene", "jenem", "jenen", "jener", "jenes", "jetzt",
            "kann", "kein", "keine", "keinem", "keinen", "keiner", "keines", "können", "könnte",
            "machen", "man", "manche", "manchem", "manchen", "mancher", "manches", "mein", "meine",
            "meinem", "meinen", "meiner", "meines", "mit", "muss", "musste", "nach", "nicht",
            "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein", "seine", "seinem",
            "seinen", "seiner", "seines", "selbst", "sich", "sie", "ihnen", "sind", "so", "solche",
            "solchem", "solchen", "solcher", "solches", "soll", "sollte", "sondern", "sonst",
            "über", "um", "und", "uns", "unsere", "unserem", "unseren", "unser", "unseres", "unter",
            "viel", "vom", "von", "vor", "während", "war", "waren", "warst", "was", "weg", "weil",
            "weiter", "welche", "welchem", "welchen", "welcher", "welches", "wenn", "werde",
            "werden", "wie", "wieder", "will", "wir", "wird", "wirst", "wo", "wollen", "wollte",
            "würde", "würden", "zu", "zum", "zur", "zwar", "zwischen",
        ];

    ELL, "el", "ell", "Greek",
        aliases: ["gre"],
        words: [
            "ο", "η", "το", "οι", "τα", "του", "της", "των", "τον", "την", "και", "κι", "κ",
            "ειμαι", "εισαι", "ειναι", "ειμαστε", "ειστε", "στο", "στον", "στη", "στην", "μα",
            "αλλα", "απο", "για", "προς", "με", "σε", "ως", "παρα", "αντι", "κατα", "μετα", "θα",
            "να", "δε", "δεν", "μη", "μην", "επι", "ενω", "εαν", "αν", "τοτε", "που", "πως",
            "ποιος", "ποια", "ποιο", "ποιοι", "ποιες", "ποιων", "ποιους", "αυτος", "αυτη", "αυτο",
            "αυτοι", "αυτων", "αυτους", "αυτες", "αυτα", "εκεινος", "εκεινη", "εκεινο", "εκεινοι",
            "εκεινες", "εκεινα", "εκεινων", "εκεινους", "οπως", "ομως", "ισως", "οσο", "οτι",
            "είμαι", "είσαι", "είναι", "είμαστε", "είστε", "αλλά", "από", "πού", "πώς", "αυτός",
            "αυτή", "αυτό", "αυτοί", "αυτών", "αυτούς", "αυτές", "αυτά", "εκείνος", "εκείνη",
            "εκείνο", "όπως", "όμως", "ίσως", "όσο", "ότι", "μετά", "παρά", "κατά", "επί", "εάν",
            "τότε", "στα", "στις", "στους", "τους", "τις", "ένα", "ένας", "μια", "μία", "έναν",
            "ενός", "μιας",
        ];

    ENG, "en", "eng", "English",
        aliases: [],
        words: [
            "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
            "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
            "between", "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did",
            "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few",
            "for", "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
            "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him",
            "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into",
            "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't",
            "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
            "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
            "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
            "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
            "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
            "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
            "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
            "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
            "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
            "yourself", "yourselves", "also", "just", "will", "may", "might", "shall", "must",
        ];

    SPA, "es", "spa", "Spanish",
        aliases: [],
        words: [
            "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
            "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
            "este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
            "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos",
            "uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí",
            "antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa",
            "estos", "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas",
            "algunas", "algo", "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas",
            "nosotras", "vosotros", "vosotras", "os", "mío", "mía", "míos", "mías", "tuyo", "tuya",
            "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro", "nuestra", "nuestros",
            "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas", "estoy",
            "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos", "estéis",
            "estén", "estaba", "estabas", "estábamos", "estaban", "he", "has", "ha", "hemos",
            "habéis", "han", "haya", "hayas", "hayamos", "hayan", "había", "habían", "soy", "eres",
            "es", "somos", "sois", "son", "sea", "seas", "seamos", "sean", "era", "eras", "éramos",
            "eran", "fue", "fueron", "ser", "tengo", "tienes", "tiene", "tenemos", "tienen",
            "tenía", "tenían",
        ];

    FAS, "fa", "fas", "Persian",
        aliases: ["per"],
        words: [
            "و", "در", "به", "از", "که", "این", "را", "با", "است", "برای", "آن", "یک", "خود", "تا",
            "کرد", "بر", "هم", "نیز", "شد", "شده", "شود", "گفت", "وی", "او", "ما", "من", "تو",
            "شما", "آنها", "ایشان", "اما", "یا", "اگر", "هر", "همه", "باید", "بود", "بودن", "باشد",
            "دارد", "داشت", "کند", "کرده", "کنند", "نه", "چه", "چون", "پس", "بین", "پیش", "همین",
            "همان", "آنچه", "دیگر", "روی", "زیر", "بی", "ای", "هیچ", "چند", "نیست", "هست", "هستند",
            "بوده", "خواهد", "خیلی",
        ];

    FRA, "fr", "fra", "French",
        aliases: ["fre"],
        words: [
            "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
            "il", "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes",
            "moi", "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu",
            "que", "qui", "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu",
            "un", "une", "vos", "votre", "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y",
            "été", "étée", "étées", "étés", "étant", "suis", "es", "est", "sommes", "êtes", "sont",
            "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait", "serions",
            "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus", "fut",
            "fûmes", "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse",
            "fusses", "fût", "fussions", "fussiez", "fussent", "ayant", "eu", "eue", "eues", "eus",
            "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura", "aurons", "aurez",
            "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais", "avait",
            "avions", "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies", "ait",
            "ayons", "ayez", "aient", "eusse", "eusses", "eût", "eussions", "eussiez", "eussent",
            "ceci", "cela", "cet", "cette", "ici", "leurs", "quel", "quels", "quelle", "quelles",
            "sans", "soi",
        ];

    FIN, "fi", "fin", "Finnish",
        aliases: [],
        words: [
            "olla", "olen", "olet", "on", "olemme", "olette", "ovat", "ole", "oli", "olisi",
            "olisit", "olisin", "olisimme", "olisitte", "olisivat", "olit", "olin", "olimme",
            "olitte", "olivat", "ollut", "olleet", "en", "et", "ei", "emme", "ette", "eivät",
            "minä", "minun", "minut", "minua", "minussa", "minusta", "minuun", "minulla", "minulta",
            "minulle", "sinä", "sinun", "sinut", "sinua", "sinussa", "sinusta", "sinuun", "sinulla",
            "sinulta", "sinulle", "hän", "hänen", "hänet", "häntä", "hänessä", "hänestä", "häneen",
            "hänellä", "häneltä", "hänelle", "me", "meidän", "meidät", "meitä", "meissä", "meistä",
            "meihin", "meillä", "meiltä", "meille", "te", "teidän", "teidät", "teitä", "teissä",
            "teistä", "teihin", "teillä", "teiltä", "teille", "he", "heidän", "heidät", "heitä",
            "heissä", "heistä", "heihin", "heillä", "heiltä", "heille", "tämä", "tämän", "tätä",
            "tässä", "tästä", "tähän", "tällä", "tältä", "tälle", "tänä", "täksi", "tuo", "tuon",
            "tuota", "tuossa", "tuosta", "tuohon", "tuolla", "tuolta", "tuolle", "tuona", "tuoksi",
            "se", "sen", "sitä", "siinä", "siitä", "siihen", "sillä", "siltä", "sille", "siksi",
            "nämä", "näiden", "näitä", "näissä", "näistä", "näihin", "näillä", "näiltä", "näille",
            "näinä", "näiksi", "nuo", "noiden", "noita", "noissa", "noista", "noihin", "noilla",
            "noilta", "noille", "noina", "noiksi", "ne", "niiden", "niitä", "niissä", "niistä",
            "niihin", "niillä", "niiltä", "niille", "niinä", "niiksi", "kuka", "kenen", "kenet",
            "ketä", "kenessä", "kenestä", "keneen", "kenellä", "keneltä", "kenelle", "kenä",
            "keneksi", "ketkä", "keiden", "keitä", "keissä", "keistä", "keihin", "keillä", "keiltä",
            "keille", "keinä", "keiksi", "mikä", "minkä", "mitä", "missä", "mistä", "mihin",
            "millä", "miltä", "mille", "miksi", "mitkä", "joka", "jonka", "jota", "jossa", "josta",
            "johon", "jolla", "jolta", "jolle", "jona", "joksi", "jotka", "joiden", "joita",
            "joissa", "joista", "joihin", "joilla", "joilta", "joille", "joina", "joiksi", "että",
            "ja", "jos", "koska", "kuin", "mutta", "niin", "sekä", "tai", "vaan", "vai", "vaikka",
            "kanssa", "mukaan", "noin", "poikki", "yli", "kun", "nyt", "itse",
        ];

    HUN, "hu", "hun", "Hungarian",
        aliases: [],
        words: [
            "a", "ahogy", "ahol", "aki", "akik", "akkor", "alatt", "által", "általában", "amely",
            "amelyek", "amelyekben", "amelyeket", "amelyet", "amelynek", "ami", "amit", "amolyan",
            "amíg", "amikor", "át", "abban", "ahhoz", "annak", "arra", "arról", "az", "azok",
            "azon", "azt", "azzal", "azért", "aztán", "azután", "azonban", "bár", "be", "belül",
            "benne", "csak", "de", "e", "eddig", "egész", "egy", "egyes", "egyetlen", "egyéb",
            "egyik", "egyre", "ekkor", "el", "elég", "ellen", "elő", "először", "előtt", "első",
            "én", "éppen", "ebben", "ehhez", "emilyen", "ennek", "erre", "ez", "ezt", "ezek",
            "ezen", "ezzel", "ezért", "és", "fel", "felé", "hanem", "hiszen", "hogy", "hogyan",
            "igen", "így", "illetve", "ilyen", "ilyenkor", "is", "ismét", "itt", "jó", "jól",
            "jobban", "kell", "kellett", "keresztül", "ki", "kívül", "között", "közül", "legalább",
            "lehet", "lehetett", "legyen", "lenne", "lenni", "lesz", "lett", "maga", "magát",
            "majd", "már", "más", "másik", "meg", "még", "mellett", "mert", "mely", "melyek", "mi",
            "mit", "míg", "miért", "milyen", "mikor", "minden", "mindent", "mindenki", "mindig",
            "mint", "mintha", "mivel", "most", "nagy", "nagyobb", "nagyon", "ne", "néha", "nekem",
            "neki", "nem", "néhány", "nélkül", "nincs", "olyan", "ott", "össze", "ő", "ők", "őket",
            "pedig", "persze", "rá", "s", "saját", "sem", "semmi", "sok", "sokat", "sokkal",
            "számára", "szemben", "szerint", "szinte", "talán", "tehát", "teljes", "tovább",
            "továbbá", "több", "úgy", "ugyanis", "új", "újabb", "újra", "után", "utána", "utolsó",
            "vagy", "vagyis", "valaki", "valami", "valamint", "való", "vagyok", "van", "vannak",
            "volt", "voltam", "voltak", "voltunk", "vissza", "vele", "viszont", "volna",
        ];

    IND, "id", "ind", "Indonesian",
        aliases: ["in"],
        words: [
            "ada", "adalah", "agar", "akan", "aku", "anda", "antara", "apa", "apabila", "atau",
            "bagaimana", "bagi", "bahwa", "banyak", "beberapa", "belum", "berapa", "bisa", "boleh",
            "bukan", "dalam", "dan", "dapat", "dari", "demikian", "dengan", "di", "dia", "ia",
            "ini", "itu", "jadi", "jika", "juga", "kalau", "kami", "kamu", "karena", "ke", "kita",
            "lagi", "lain", "maka", "masih", "mereka", "namun", "oleh", "pada", "para", "pula",
            "saja", "sangat", "saat", "sebagai", "sebelum", "sedang", "sehingga", "sekarang",
            "semua", "sendiri", "seperti", "serta", "setelah", "sudah", "supaya", "tanpa", "telah",
            "tentang", "terhadap", "tetapi", "tidak", "untuk", "yaitu", "yakni", "yang", "harus",
            "hanya", "hingga", "kemudian", "ketika", "pun", "secara", "selama", "sementara",
        ];

    ITA, "it", "ita", "Italian",
        aliases: [],
        words: [
            "ad", "al", "allo", "ai", "agli", "all", "agl", "alla", "alle", "con", "col", "coi",
            "da", "dal", "dallo", "dai", "dagli", "dall", "dagl", "dalla", "dalle", "di", "del",
            "dello", "dei", "degli", "dell", "degl", "della", "delle", "in", "nel", "nello", "nei",
            "negli", "nell", "negl", "nella", "nelle", "su", "sul", "sullo", "sui", "sugli", "sull",
            "sugl", "sulla", "sulle", "per", "tra", "contro", "io", "tu", "lui", "lei", "noi",
            "voi", "loro", "mio", "mia", "miei", "mie", "tuo", "tua", "tuoi", "tue", "suo", "sua",
            "suoi", "sue", "nostro", "nostra", "nostri", "nostre", "vostro", "vostra", "vostri",
            "vostre", "mi", "ti", "ci", "vi", "lo", "la", "li", "le", "gli", "ne", "il", "un",
            "uno", "una", "ma", "ed", "se", "perché", "anche", "come", "dov", "dove", "che", "chi",
            "cui", "non", "più", "quale", "quanto", "quanti", "quanta", "quante", "quello",
            "quelli", "quella", "quelle", "questo", "questi", "questa", "queste", "si", "tutto",
            "tutti", "a", "c", "e", "i", "l", "o", "ho", "hai", "ha", "abbiamo", "avete", "hanno",
            "abbia", "avevo", "aveva", "avevano", "sono", "sei", "è", "siamo", "siete", "era",
            "erano", "fu", "furono", "essere", "stato", "stata", "fare", "fa", "faccio",
        ];

    JPN, "ja", "jpn", "Japanese",
        aliases: [],
        words: [
            "これ", "それ", "あれ", "この", "その", "あの", "ここ", "そこ", "あそこ", "こちら", "どこ", "だれ", "なに", "なん",
            "何", "私", "貴方", "貴方方", "我々", "私達", "あの人", "あのかた", "彼女", "彼", "です", "あります", "おります",
            "います", "は", "が", "の", "に", "を", "で", "え", "から", "まで", "より", "も", "どの", "と", "し", "それで",
            "しかし", "ので", "のに", "ため", "こと", "もの", "よう", "ない", "なる", "する", "いる", "ある",
        ];

    KHM, "km", "khm", "Khmer",
        aliases: [],
        words: [
            "និង", "ដែល", "នៅ", "ជា", "មាន", "ពី", "ទៅ", "នេះ", "នោះ", "បាន", "ក្នុង", "របស់", "ថា",
            "ដើម្បី", "ហើយ", "ក៏", "គឺ", "ដោយ", "ទេ", "ផង", "តែ", "មិន", "លើ", "ឲ្យ", "អោយ", "នឹង",
            "ខ្ញុំ", "គាត់", "យើង", "គេ", "វា", "ពួក", "ទាំង",
        ];

    LAV, "lv", "lav", "Latvian",
        aliases: ["lvs"],
        words: [
            "aiz", "ap", "ar", "apakš", "ārpus", "augšpus", "bez", "caur", "dēļ", "gar", "iekš",
            "iz", "kopš", "labad", "lejpus", "līdz", "no", "otrpus", "pa", "par", "pār", "pēc",
            "pie", "pirms", "pret", "priekš", "starp", "šaipus", "uz", "viņpus", "virs", "virspus",
            "zem", "apakšpus", "un", "bet", "jo", "ja", "ka", "lai", "tomēr", "tikko", "turpretī",
            "arī", "kaut", "gan", "tādēļ", "tā", "ne", "tikvien", "vien", "kā", "ir", "te", "vai",
            "kamēr", "diezin", "droši", "diemžēl", "nebūt", "ik", "it", "taču", "nu", "pat",
            "tiklab", "iekšpus", "nedz", "tik", "nevis", "turpretim", "jeb", "iekam", "iekām",
            "iekāms", "kolīdz", "līdzko", "tiklīdz", "jebšu", "tālab", "tāpēc", "nekā", "itin",
            "jā", "jau", "jel", "nē", "nezin", "tad", "tikai", "vis", "tak", "iekams", "būt",
            "biju", "biji", "bija", "bijām", "bijāt", "esmu", "esi", "esam", "esat", "būšu", "būsi",
            "būs", "būsim", "būsiet", "tikt", "tiku", "tiki", "tika", "tikām", "tikāt", "tieku",
            "tiec", "tiek", "tiekam", "tiekat", "tikšu", "tiks", "tiksim", "tiksiet", "tapt",
            "tapi", "tapāt", "topat", "tapšu", "tapsi", "taps", "tapsim", "tapsiet", "kļūt",
            "kļuvu", "kļuvi", "kļuva", "kļuvām", "kļuvāt", "kļūstu", "kļūsti", "kļūst", "kļūstam",
            "kļūstat", "kļūšu", "kļūsi", "kļūs", "kļūsim", "kļūsiet", "varēt", "varēju", "varējām",
            "varēšu", "varēsim", "var", "varēji", "varējāt", "varēsi", "varēsiet", "varat",
            "varēja", "varēs",
        ];

    NLD, "nl", "nld", "Dutch",
        aliases: ["dut"],
        words: [
            "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn",
            "is", "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan",
            "zou", "of", "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij",
            "ook", "tot", "je", "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft",
            "hebben", "deze", "u", "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat",
            "iets", "worden", "toch", "al", "waren", "veel", "meer", "doen", "toen", "moet", "ben",
            "zonder", "kan", "hun", "dus", "alles", "onder", "ja", "eens", "hier", "wie", "werd",
            "altijd", "doch", "wordt", "wezen", "kunnen", "ons", "zelf", "tegen", "na", "reeds",
            "wil", "kon", "niets", "uw", "iemand", "geweest", "andere",
        ];

    NOR, "no", "nor", "Norwegian",
        aliases: ["nb", "nn", "nob", "nno"],
        words: [
            "og", "i", "jeg", "det", "at", "en", "et", "den", "til", "er", "som", "på", "de", "med",
            "han", "av", "ikke", "ikkje", "der", "så", "var", "meg", "seg", "men", "ett", "har",
            "om", "vi", "min", "mitt", "ha", "hadde", "hun", "nå", "over", "da", "ved", "fra", "du",
            "ut", "sin", "dem", "oss", "opp", "man", "kan", "hans", "hvor", "eller", "hva", "skal",
            "selv", "sjøl", "her", "alle", "vil", "bli", "ble", "blei", "blitt", "kunne", "inn",
            "når", "være", "kom", "noen", "noe", "ville", "dere", "deres", "kun", "ja", "etter",
            "ned", "skulle", "denne", "for", "deg", "si", "sine", "sitt", "mot", "å", "meget",
            "hvorfor", "dette", "disse", "uten", "hvordan", "ingen", "din", "ditt", "blir", "samme",
            "hvilken", "hvilke", "sånn", "inni", "mellom", "vår", "hver", "hvem", "vors", "hvis",
            "både", "bare", "enn", "fordi", "før", "mange", "også", "slik", "vært", "begge",
            "siden", "dei", "deira", "deim", "di", "då", "eg", "ein", "eit", "eitt", "elles",
            "honom", "hjå", "ho", "henne", "hennar", "hennes", "ingi", "inkje", "korleis", "kva",
            "kvar", "kven", "kvi", "kvifor", "me", "medan", "mi", "mine", "mykje", "no", "nokon",
            "noka", "nokor", "noko", "nokre", "sidan", "so", "somt", "somme", "um", "upp", "vere",
            "vore", "verte", "vort", "varte", "vart",
        ];

    POL, "pl", "pol", "Polish",
        aliases: [],
        words: [
            "a", "aby", "ach", "acz", "aczkolwiek", "aj", "albo", "ale", "ależ", "ani", "aż",
            "bardziej", "bardzo", "bo", "bowiem", "by", "byli", "bynajmniej", "być", "był", "była",
            "było", "były", "będzie", "będą", "cali", "cała", "cały", "ci", "cię", "ciebie", "co",
            "cokolwiek", "coś", "czasami", "czasem", "czemu", "czy", "czyli", "daleko", "dla",
            "dlaczego", "dlatego", "do", "dobrze", "dokąd", "dość", "dużo", "dwa", "dwaj", "dwie",
            "dwoje", "dziś", "dzisiaj", "gdy", "gdyby", "gdyż", "gdzie", "gdziekolwiek", "gdzieś",
            "i", "ich", "ile", "im", "inna", "inne", "inny", "innych", "iż", "ja", "ją", "jak",
            "jakaś", "jakby", "jaki", "jakichś", "jakie", "jakiś", "jakiż", "jakkolwiek", "jako",
            "jakoś", "je", "jeden", "jedna", "jedno", "jednak", "jednakże", "jego", "jej", "jemu",
            "jest", "jestem", "jeszcze", "jeśli", "jeżeli", "już", "każdy", "kiedy", "kilka",
            "kimś", "kto", "ktokolwiek", "ktoś", "która", "które", "którego", "której", "który",
            "których", "którym", "którzy", "ku", "lecz", "lub", "ma", "mają", "mało", "mam", "mi",
            "mimo", "między", "mną", "mnie", "mogą", "moi", "moim", "moja", "moje", "może",
            "możliwe", "można", "mój", "mu", "musi", "my", "na", "nad", "nam", "nami", "nas",
            "nasi", "nasz", "nasza", "nasze", "naszego", "naszych", "natomiast", "natychmiast",
            "nawet", "nią", "nic", "nich", "nie", "niech", "niego", "niej", "niemu", "nigdy", "nim",
            "nimi", "niż", "no", "o", "obok", "od", "około", "on", "ona", "one", "oni", "ono",
            "oraz", "oto", "owszem", "pan", "pana", "pani", "po", "pod", "podczas", "pomimo",
            "ponad", "ponieważ", "powinien", "powinna", "powinni", "powinno", "poza", "prawie",
            "przecież", "przed", "przede", "przedtem", "przez", "przy", "również", "sam", "sama",
            "są", "się", "skąd", "sobie", "sobą", "sposób", "swoje", "ta", "tak", "taka", "taki",
            "takie", "także", "tam", "te", "tego", "tej", "temu", "ten", "teraz", "też", "to",
            "tobą", "tobie", "toteż", "trzeba", "tu", "tutaj", "twoi", "twoim", "twoja", "twoje",
            "twój", "twym", "ty", "tych", "tylko", "tym", "u", "w", "wam", "wami", "was", "wasz",
            "wasza", "wasze", "we", "według", "wiele", "wielu", "więc", "więcej", "wszyscy",
            "wszystkich", "wszystkie", "wszystkim", "wszystko", "wtedy", "wy", "właśnie", "z", "za",
            "zapewne", "zawsze", "ze", "znowu", "znów", "został", "żaden", "żadna", "żadne",
            "żadnych", "że", "żeby",
        ];

    POR, "pt", "por", "Portuguese",
        aliases: [],
        words: [
            "de", "a", "o", "que", "e", "do", "da", "em", "um", "para", "com", "não", "uma", "os",
            "no", "se", "na", "por", "mais", "as", "dos", "como", "mas", "ao", "ele", "das", "à",
            "seu", "sua", "ou", "quando", "muito", "nos", "já", "eu", "também", "só", "pelo",
            "pela", "até", "isso", "ela", "entre", "depois", "sem", "mesmo", "aos", "seus", "quem",
            "nas", "me", "esse", "eles", "você", "essa", "num", "nem", "suas", "meu", "às", "minha",
            "numa", "pelos", "elas", "qual", "nós", "lhe", "deles", "essas", "esses", "pelas",
            "este", "dele", "tu", "te", "vocês", "vos", "lhes", "meus", "minhas", "teu", "tua",
            "teus", "tuas", "nosso", "nossa", "nossos", "nossas", "dela", "delas", "esta", "estes",
            "estas", "aquele", "aquela", "aqueles", "aquelas", "isto", "aquilo", "estou", "está",
            "estamos", "estão", "estive", "esteve", "estivemos", "estiveram", "estava", "estávamos",
            "estavam", "hei", "há", "havemos", "hão", "houve", "sou", "é", "somos", "são", "era",
            "éramos", "eram", "fui", "foi", "fomos", "foram", "seja", "sejam", "ser", "tenho",
            "tem", "temos", "têm", "tinha", "tinham", "tive", "teve", "tiveram", "ter",
        ];

    RON, "ro", "ron", "Romanian",
        aliases: ["rum", "mo"],
        words: [
            "a", "abia", "acea", "aceasta", "această", "aceea", "aceeași", "acei", "aceia", "acel",
            "acela", "același", "acele", "acelea", "acest", "acesta", "aceste", "acestea",
            "acestei", "aceștia", "acestui", "acolo", "acum", "adică", "ai", "aia", "aibă", "aici",
            "al", "ale", "alea", "alt", "alta", "altceva", "altcineva", "alte", "altfel", "alții",
            "altul", "am", "anume", "apoi", "ar", "are", "aș", "așa", "asta", "astăzi", "astea",
            "astfel", "asupra", "atare", "atât", "atâta", "atâtea", "atâția", "ați", "atunci", "au",
            "avea", "avem", "aveți", "avut", "azi", "aşadar", "ba", "bine", "ca", "când", "care",
            "căreia", "cărora", "căruia", "cât", "către", "ce", "cea", "ceea", "cei", "ceilalți",
            "cel", "cele", "celor", "ceva", "chiar", "ci", "cine", "cineva", "cu", "cui", "cum",
            "cumva", "câte", "câtva", "câți", "că", "căci", "cărei", "căror", "cărui", "da", "dacă",
            "dar", "dat", "dată", "dau", "de", "deasupra", "deci", "decât", "deja", "deoarece",
            "departe", "deși", "despre", "din", "dinaintea", "dintr", "dintre", "doar", "doi",
            "două", "drept", "după", "dă", "e", "ea", "ei", "el", "ele", "era", "eram", "este",
            "eu", "ești", "face", "fără", "fi", "fie", "fiecare", "fii", "fim", "fiu", "fiți",
            "foarte", "fost", "i", "ia", "iar", "ieri", "ii", "il", "îi", "îl", "îmi", "împotriva",
            "în", "înainte", "înaintea", "încât", "între", "întrucât", "îți", "la", "le", "li",
            "lor", "lui", "lângă", "ma", "mai", "mare", "mea", "mei", "mele", "mereu", "meu", "mi",
            "mie", "mine", "mod", "mult", "multă", "multe", "mulți", "mâine", "mă", "ne", "nevoie",
            "ni", "nici", "niciodată", "nicăieri", "nimeni", "nimic", "niște", "noastre", "noastră",
            "noi", "nostru", "nouă", "noștri", "nu", "numai", "o", "or", "ori", "oricare", "orice",
            "oricine", "oricum", "oricând", "oricât", "oriunde", "pe", "pentru", "peste", "poate",
            "pot", "prea", "prima", "primul", "prin", "puțin", "puțină", "până", "sa", "sale",
            "sau", "se", "si", "să", "săi", "său", "sub", "sunt", "suntem", "sunteți", "sus", "și",
            "ta", "tale", "te", "ti", "timp", "tine", "toată", "toate", "tocmai", "tot", "toți",
            "totul", "totuși", "trei", "tu", "tuturor", "tăi", "tău", "un", "una", "unde", "undeva",
            "unei", "uneia", "unele", "uneori", "unii", "unor", "unora", "unu", "unui", "unuia",
            "unul", "va", "vi", "voastre", "voastră", "voi", "vom", "vor", "vostru", "vouă",
            "voștri", "vreo", "vreun", "vă", "şi", "ţi",
        ];

    RUS, "ru", "rus", "Russian",
        aliases: [],
        words: [
            "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
            "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
            "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
            "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
            "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
            "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
            "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
            "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
            "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
            "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
            "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
            "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
            "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
            "конечно", "всю", "между", "её", "ещё",
        ];

    SLK, "sk", "slk", "Slovak",
        aliases: ["slo"],
        words: [
            "a", "aby", "aj", "ak", "ako", "ale", "alebo", "ani", "áno", "asi", "až", "bez", "bude",
            "budem", "budeš", "budeme", "budete", "budú", "by", "bol", "bola", "boli", "bolo",
            "byť", "cez", "čo", "či", "ďalší", "ďalšia", "ďalšie", "dnes", "do", "ho", "ešte", "i",
            "iba", "ich", "im", "iné", "iný", "ja", "je", "jeho", "jej", "jemu", "ju", "k", "kam",
            "každý", "každá", "každé", "každí", "kde", "keď", "kto", "ktorá", "ktoré", "ktorou",
            "ktorý", "ktorí", "ku", "lebo", "len", "ma", "mať", "má", "máte", "medzi", "mi", "mňa",
            "mne", "mnou", "môj", "môže", "my", "na", "nad", "nám", "náš", "naši", "nie", "nech",
            "než", "nič", "niektorý", "nové", "nový", "o", "od", "odo", "on", "ona", "ono", "oni",
            "ony", "po", "pod", "podľa", "pokiaľ", "potom", "práve", "pre", "prečo", "preto",
            "pretože", "prvý", "prvá", "prvé", "prví", "pred", "predo", "pri", "s", "sa", "so",
            "si", "svoje", "svoj", "svojich", "svojím", "svojimi", "ta", "tak", "takže", "táto",
            "teda", "ten", "tento", "tieto", "tým", "týmto", "tiež", "to", "toto", "toho", "tohto",
            "tom", "tomto", "tomu", "tomuto", "tu", "tú", "túto", "tvoj", "ty", "už", "v", "vám",
            "váš", "vaše", "vo", "viac", "však", "všetok", "vy", "z", "za", "zo", "že",
        ];

    SWE, "sv", "swe", "Swedish",
        aliases: [],
        words: [
            "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var",
            "sig", "för", "så", "till", "är", "men", "ett", "om", "hade", "de", "av", "icke", "mig",
            "du", "henne", "då", "sin", "nu", "har", "inte", "hans", "honom", "skulle", "hennes",
            "där", "min", "man", "ej", "vid", "kunde", "något", "från", "ut", "när", "efter", "upp",
            "vi", "dem", "vara", "vad", "över", "än", "dig", "kan", "sina", "här", "ha", "mot",
            "alla", "under", "någon", "eller", "allt", "mycket", "sedan", "ju", "denna", "själv",
            "detta", "åt", "utan", "varit", "hur", "ingen", "mitt", "ni", "bli", "blev", "oss",
            "din", "dessa", "några", "deras", "blir", "mina", "samma", "vilken", "er", "sådan",
            "vår", "blivit", "dess", "inom", "mellan", "sådant", "varför", "varje", "vilka", "ditt",
            "vem", "vilket", "sitta", "sådana", "vart", "dina", "vars", "vårt", "våra", "ert",
            "era", "vilkas",
        ];

    THA, "th", "tha", "Thai",
        aliases: [],
        words: [
            "ไว้", "ไม่", "ไป", "ได้", "ให้", "ใน", "โดย", "แห่ง", "แล้ว", "และ", "แรก", "แบบ",
            "แต่", "เอง", "เห็น", "เลย", "เริ่ม", "เรา", "เมื่อ", "เพื่อ", "เพราะ", "เป็นการ",
            "เป็น", "เปิด", "เนื่องจาก", "เดียวกัน", "เดียว", "เช่น", "เฉพาะ", "เคย", "เข้า", "เขา",
            "อีก", "อาจ", "อะไร", "ออก", "อย่าง", "อยู่", "อยาก", "หาก", "หลาย", "หลังจาก", "หลัง",
            "หรือ", "หนึ่ง", "ส่วน", "ส่ง", "สุด", "สำหรับ", "ว่า", "วัน", "ลง", "ร่วม", "ราย",
            "รับ", "ระหว่าง", "รวม", "ยัง", "มี", "มาก", "มา", "พร้อม", "พบ", "ผ่าน", "ผล", "บาง",
            "น่า", "นี้", "นำ", "นั้น", "นัก", "นอกจาก", "ทุก", "ที่สุด", "ที่", "ทำให้", "ทำ",
            "ทาง", "ทั้งนี้", "ทั้ง", "ถ้า", "ถูก", "ถึง", "ต้อง", "ต่างๆ", "ต่าง", "ต่อ", "ตาม",
            "ตั้งแต่", "ตั้ง", "ด้วย", "ด้าน", "ตลอด", "ดัง", "ซึ่ง", "ช่วง", "จึง", "จาก", "จัด",
            "จะ", "คือ", "ความ", "ครั้ง", "คง", "ขึ้น", "ของ", "ขอ", "ขณะ", "ก่อน", "ก็", "การ",
            "กับ", "กัน", "กว่า", "กล่าว",
        ];

    TUR, "tr", "tur", "Turkish",
        aliases: [],
        words: [
            "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey", "biz",
            "bu", "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem",
            "hep", "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki", "kim", "mı", "mu",
            "mü", "nasıl", "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o",
            "sanki", "şey", "siz", "şu", "tüm", "ve", "veya", "ya", "yani", "bir", "ben", "sen",
            "onlar", "bunu", "şunu", "onu", "bunlar", "şunlar", "olan", "olarak", "oldu", "olduğu",
            "olur", "değil", "var", "yok", "sonra", "önce", "kadar", "göre", "ancak", "artık",
        ];
}
