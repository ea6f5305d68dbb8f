//! The 24-letter Greek alphabet table.
//!
//! Curated content; ids are stable and referenced by persisted progress.

use crate::types::LetterCategory::{Consonant, Vowel};

use super::{GreekWord, Letter};

const fn word(greek: &'static str, gloss: &'static str) -> GreekWord {
    GreekWord { greek, gloss }
}

pub static LETTERS: [Letter; 24] = [
    Letter {
        id: 1,
        name: "Alpha",
        uppercase: "Α",
        lowercase: "α",
        sound: "ah",
        comparison: "Like \"a\" in \"father\"",
        example_words: &["apple", "father", "alpha"],
        category: Vowel,
        tier: 1,
        visual_aid: "Think of it as an upside-down \"A\" without the bar",
        common_words: &[
            word("άλφα", "alpha"),
            word("αέρας", "air"),
            word("άνθρωπος", "human"),
            word("αυτός", "this"),
            word("αλλά", "but"),
            word("αγάπη", "love"),
            word("αυτοκίνητο", "car"),
            word("αδερφός", "brother"),
        ],
    },
    Letter {
        id: 2,
        name: "Beta",
        uppercase: "Β",
        lowercase: "β",
        sound: "beh",
        comparison: "Like \"b\" in \"baby\"",
        example_words: &["baby", "ball", "beta"],
        category: Consonant,
        tier: 1,
        visual_aid: "Like a \"B\" but with the loops connected",
        common_words: &[
            word("βήτα", "beta"),
            word("βιβλίο", "book"),
            word("βασιλιάς", "king"),
            word("βαλίτσα", "suitcase"),
            word("βενζίνη", "gasoline"),
            word("βιταμίνη", "vitamin"),
            word("βιολί", "violin"),
            word("βραβείο", "award"),
            word("βόλος", "marble"),
        ],
    },
    Letter {
        id: 3,
        name: "Gamma",
        uppercase: "Γ",
        lowercase: "γ",
        sound: "gah",
        comparison: "Like \"g\" in \"game\" (hard g)",
        example_words: &["game", "go", "gamma"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like an upside-down \"L\" or a right angle",
        common_words: &[
            word("γάμμα", "gamma"),
            word("γάτα", "cat"),
            word("γρήγορος", "fast"),
            word("γυναίκα", "woman"),
            word("γράμμα", "letter"),
            word("γέφυρα", "bridge"),
            word("γυαλί", "glass"),
            word("γιορτή", "celebration"),
        ],
    },
    Letter {
        id: 4,
        name: "Delta",
        uppercase: "Δ",
        lowercase: "δ",
        sound: "theh",
        comparison: "Like \"th\" in \"this\"",
        example_words: &["this", "that", "delta"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like a triangle pointing up",
        common_words: &[
            word("δέλτα", "delta"),
            word("δέντρο", "tree"),
            word("δρόμος", "road"),
            word("δάσκαλος", "teacher"),
            word("δωμάτιο", "room"),
            word("δεξιά", "right"),
            word("δυο", "two"),
            word("δουλειά", "work"),
        ],
    },
    Letter {
        id: 5,
        name: "Epsilon",
        uppercase: "Ε",
        lowercase: "ε",
        sound: "eh",
        comparison: "Like \"e\" in \"bed\"",
        example_words: &["bed", "egg", "epsilon"],
        category: Vowel,
        tier: 1,
        visual_aid: "Like a backwards \"3\" or a square \"E\"",
        common_words: &[
            word("έψιλον", "epsilon"),
            word("ένα", "one"),
            word("εγώ", "I"),
            word("εσύ", "you"),
            word("εδώ", "here"),
            word("έξω", "outside"),
            word("ελληνικά", "Greek language"),
            word("εστιατόριο", "restaurant"),
            word("εφημερίδα", "newspaper"),
        ],
    },
    Letter {
        id: 6,
        name: "Zeta",
        uppercase: "Ζ",
        lowercase: "ζ",
        sound: "dzeh",
        comparison: "Like \"ds\" in \"suds\"",
        example_words: &["suds", "zebra", "zeta"],
        category: Consonant,
        tier: 3,
        visual_aid: "Like a \"Z\" but with a horizontal line through it",
        common_words: &[
            word("ζήτα", "zeta"),
            word("ζώο", "animal"),
            word("ζέστη", "heat"),
            word("ζωή", "life"),
            word("ζωγραφιά", "painting"),
            word("ζαχαρούχο", "sugary"),
            word("ζώνη", "belt"),
            word("ζυμαρικά", "pasta"),
        ],
    },
    Letter {
        id: 7,
        name: "Eta",
        uppercase: "Η",
        lowercase: "η",
        sound: "ee",
        comparison: "Like \"ee\" in \"see\"",
        example_words: &["see", "tree", "eta"],
        category: Vowel,
        tier: 2,
        visual_aid: "Like an \"H\" or a square \"n\"",
        common_words: &[
            word("ήτα", "eta"),
            word("ήλιος", "sun"),
            word("ήρεμος", "calm"),
            word("ήδη", "already"),
            word("ήχος", "sound"),
            word("ήρωας", "hero"),
            word("ήσυχος", "quiet"),
            word("ήπειρος", "continent"),
        ],
    },
    Letter {
        id: 8,
        name: "Theta",
        uppercase: "Θ",
        lowercase: "θ",
        sound: "theh",
        comparison: "Like \"th\" in \"think\"",
        example_words: &["think", "thick", "theta"],
        category: Consonant,
        tier: 3,
        visual_aid: "Like an \"O\" with a horizontal line through the middle",
        common_words: &[
            word("θήτα", "theta"),
            word("θέατρο", "theater"),
            word("θεός", "god"),
            word("θέλω", "want"),
            word("θερμός", "hot"),
            word("θέμα", "topic"),
            word("θεία", "aunt"),
            word("θεωρία", "theory"),
        ],
    },
    Letter {
        id: 9,
        name: "Iota",
        uppercase: "Ι",
        lowercase: "ι",
        sound: "ee",
        comparison: "Like \"i\" in \"machine\"",
        example_words: &["machine", "police", "iota"],
        category: Vowel,
        tier: 1,
        visual_aid: "Like a straight line \"I\"",
        common_words: &[
            word("ιώτα", "iota"),
            word("ιδέα", "idea"),
            word("ίσως", "maybe"),
            word("είμαι", "am/are"),
            word("ιδιος", "own"),
            word("ιερός", "sacred"),
            word("ιστορία", "history"),
            word("ιδιωτικός", "private"),
        ],
    },
    Letter {
        id: 10,
        name: "Kappa",
        uppercase: "Κ",
        lowercase: "κ",
        sound: "kah",
        comparison: "Like \"k\" in \"kite\"",
        example_words: &["kite", "car", "kappa"],
        category: Consonant,
        tier: 1,
        visual_aid: "Like a \"K\" without the bottom line",
        common_words: &[
            word("κάππα", "kappa"),
            word("καλό", "good"),
            word("κόκκινος", "red"),
            word("καιρός", "weather"),
            word("καφές", "coffee"),
            word("κάθε", "each"),
            word("κεντρικός", "central"),
            word("καθαρός", "clean"),
            word("κοντά", "near"),
        ],
    },
    Letter {
        id: 11,
        name: "Lambda",
        uppercase: "Λ",
        lowercase: "λ",
        sound: "lah",
        comparison: "Like \"l\" in \"lamp\"",
        example_words: &["lamp", "light", "lambda"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like an upside-down \"V\" or a triangle without base",
        common_words: &[
            word("λάμδα", "lambda"),
            word("λάθος", "wrong"),
            word("λόγος", "word"),
            word("λεπτό", "minute"),
            word("λιώνω", "melt"),
            word("λευκός", "white"),
            word("λαχανικά", "vegetables"),
            word("λυπημένος", "sad"),
            word("λόφος", "hill"),
        ],
    },
    Letter {
        id: 12,
        name: "Mu",
        uppercase: "Μ",
        lowercase: "μ",
        sound: "mee",
        comparison: "Like \"m\" in \"mouse\"",
        example_words: &["mouse", "man", "mu"],
        category: Consonant,
        tier: 1,
        visual_aid: "Like an \"M\" but with curved sides",
        common_words: &[
            word("μυ", "mu"),
            word("μαμά", "mom"),
            word("μήλο", "apple"),
            word("μαζί", "together"),
            word("μουσική", "music"),
            word("μαύρος", "black"),
            word("μάτι", "eye"),
            word("μικρός", "small"),
            word("μόνος", "alone"),
        ],
    },
    Letter {
        id: 13,
        name: "Nu",
        uppercase: "Ν",
        lowercase: "ν",
        sound: "nee",
        comparison: "Like \"n\" in \"nice\"",
        example_words: &["nice", "now", "nu"],
        category: Consonant,
        tier: 1,
        visual_aid: "Like a \"N\" but with the diagonal line straighter",
        common_words: &[
            word("νυ", "nu"),
            word("ναι", "yes"),
            word("νούμερο", "number"),
            word("νέος", "new"),
            word("νοσοκομείο", "hospital"),
            word("νόμος", "law"),
            word("νύχτα", "night"),
            word("νησί", "island"),
            word("νόστιμος", "tasty"),
        ],
    },
    Letter {
        id: 14,
        name: "Xi",
        uppercase: "Ξ",
        lowercase: "ξ",
        sound: "ksee",
        comparison: "Like \"ks\" in \"taxi\"",
        example_words: &["taxi", "box", "xi"],
        category: Consonant,
        tier: 4,
        visual_aid: "Like three horizontal lines of different lengths",
        common_words: &[
            word("ξι", "xi"),
            word("ξένος", "stranger"),
            word("ξενοδοχείο", "hotel"),
            word("ξύλο", "wood"),
            word("ξέχασα", "forgot"),
            word("ξανθός", "blonde"),
            word("ξηρός", "dry"),
            word("ξυπνάω", "wake up"),
            word("ξαφνικός", "sudden"),
        ],
    },
    Letter {
        id: 15,
        name: "Omicron",
        uppercase: "Ο",
        lowercase: "ο",
        sound: "oh",
        comparison: "Like \"o\" in \"more\"",
        example_words: &["more", "go", "omicron"],
        category: Vowel,
        tier: 1,
        visual_aid: "Like a perfect circle \"O\"",
        common_words: &[
            word("όμικρον", "omicron"),
            word("όμορφος", "beautiful"),
            word("όνομα", "name"),
            word("όπου", "where"),
            word("όχι", "no"),
            word("όροφος", "floor"),
            word("όλα", "all"),
            word("όμοιος", "similar"),
            word("όσο", "as much as"),
        ],
    },
    Letter {
        id: 16,
        name: "Pi",
        uppercase: "Π",
        lowercase: "π",
        sound: "pee",
        comparison: "Like \"p\" in \"pie\"",
        example_words: &["pie", "pizza", "pi"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like a \"n\" with a horizontal line on top",
        common_words: &[
            word("πι", "pi"),
            word("πίτα", "pie"),
            word("παιδί", "child"),
            word("πρώτος", "first"),
            word("πόλη", "city"),
            word("πράσινος", "green"),
            word("παράδειγμα", "example"),
            word("πηγαίνω", "go"),
            word("πολύ", "very"),
        ],
    },
    Letter {
        id: 17,
        name: "Rho",
        uppercase: "Ρ",
        lowercase: "ρ",
        sound: "roh",
        comparison: "Like \"r\" in \"road\"",
        example_words: &["road", "run", "rho"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like a \"P\" without the loop closed",
        common_words: &[
            word("ρω", "rho"),
            word("ρόδα", "rose"),
            word("ρήμα", "verb"),
            word("ρούχα", "clothes"),
            word("ρόλος", "role"),
            word("ρίχνω", "throw"),
            word("ραβδί", "stick"),
            word("ρυθμός", "rhythm"),
            word("ρέμα", "stream"),
        ],
    },
    Letter {
        id: 18,
        name: "Sigma",
        uppercase: "Σ",
        lowercase: "σ/ς",
        sound: "sih",
        comparison: "Like \"s\" in \"sing\"",
        example_words: &["sing", "sun", "sigma"],
        category: Consonant,
        tier: 2,
        visual_aid: "Like a \"C\" rotated 90 degrees clockwise, or \"ς\" at end of words",
        common_words: &[
            word("σίγμα", "sigma"),
            word("σημαία", "flag"),
            word("σπίτι", "house"),
            word("σαν", "like"),
            word("σήμερα", "today"),
            word("σχολείο", "school"),
            word("σύζυγος", "spouse"),
            word("συγνώμη", "sorry"),
            word("σώμα", "body"),
        ],
    },
    Letter {
        id: 19,
        name: "Tau",
        uppercase: "Τ",
        lowercase: "τ",
        sound: "tah",
        comparison: "Like \"t\" in \"take\"",
        example_words: &["take", "time", "tau"],
        category: Consonant,
        tier: 1,
        visual_aid: "Like a \"T\" without the left side",
        common_words: &[
            word("ταυ", "tau"),
            word("τραπέζι", "table"),
            word("τηλέφωνο", "phone"),
            word("τέλος", "end"),
            word("τέχνη", "art"),
            word("τόπος", "place"),
            word("τυχαίος", "random"),
            word("τρελός", "crazy"),
            word("τυρί", "cheese"),
        ],
    },
    Letter {
        id: 20,
        name: "Upsilon",
        uppercase: "Υ",
        lowercase: "υ",
        sound: "ee",
        comparison: "Like \"ee\" in \"free\" (French u)",
        example_words: &["free", "machine", "unique"],
        category: Vowel,
        tier: 3,
        visual_aid: "Like a \"Y\" or a \"u\" with a tail",
        common_words: &[
            word("ύψιλον", "upsilon"),
            word("ύμνος", "hymn"),
            word("υγιής", "healthy"),
            word("υπό", "under"),
            word("υπάρχω", "exist"),
            word("υψηλός", "high"),
            word("υπολογιστή", "computer"),
            word("υπεύθυνος", "responsible"),
            word("υδραυλικός", "plumber"),
        ],
    },
    Letter {
        id: 21,
        name: "Phi",
        uppercase: "Φ",
        lowercase: "φ",
        sound: "fee",
        comparison: "Like \"f\" in \"phone\"",
        example_words: &["phone", "photo", "phi"],
        category: Consonant,
        tier: 3,
        visual_aid: "Like an \"O\" with a vertical line through it",
        common_words: &[
            word("φι", "phi"),
            word("φίλος", "friend"),
            word("φως", "light"),
            word("φαγητό", "food"),
            word("φυσικά", "naturally"),
            word("φοιτητής", "student"),
            word("φωτιά", "fire"),
            word("φάρμακο", "medicine"),
            word("φίδι", "snake"),
        ],
    },
    Letter {
        id: 22,
        name: "Chi",
        uppercase: "Χ",
        lowercase: "χ",
        sound: "hee",
        comparison: "Like \"ch\" in \"loch\" (Scottish)",
        example_words: &["loch", "achoo", "chi"],
        category: Consonant,
        tier: 4,
        visual_aid: "Like an \"X\" or two crossing lines",
        common_words: &[
            word("χι", "chi"),
            word("χρόνος", "time"),
            word("χέρι", "hand"),
            word("χρήμα", "money"),
            word("χώρος", "space"),
            word("χαρά", "joy"),
            word("χθες", "yesterday"),
            word("χήρα", "widow"),
            word("χαμόγελο", "smile"),
        ],
    },
    Letter {
        id: 23,
        name: "Psi",
        uppercase: "Ψ",
        lowercase: "ψ",
        sound: "psee",
        comparison: "Like \"ps\" in \"lapse\"",
        example_words: &["lapse", "psychology", "psi"],
        category: Consonant,
        tier: 4,
        visual_aid: "Like a trident or \"n\" with a vertical line",
        common_words: &[
            word("ψι", "psi"),
            word("ψυχή", "soul"),
            word("ψάρι", "fish"),
            word("ψέμα", "lie"),
            word("ψυγείο", "fridge"),
            word("ψήφος", "vote"),
            word("ψαλιδίζει", "cuts"),
            word("ψιλή", "fine"),
            word("ψύχραιμος", "calm"),
        ],
    },
    Letter {
        id: 24,
        name: "Omega",
        uppercase: "Ω",
        lowercase: "ω",
        sound: "oh",
        comparison: "Like \"o\" in \"more\" (longer)",
        example_words: &["more", "go", "omega"],
        category: Vowel,
        tier: 2,
        visual_aid: "Like a rounded \"W\" or horseshoe shape",
        common_words: &[
            word("ωμέγα", "omega"),
            word("ωραίος", "beautiful"),
            word("ώμος", "shoulder"),
            word("ώρα", "hour"),
            word("ωκεανός", "ocean"),
            word("ώστε", "so that"),
            word("ωφέλιμος", "beneficial"),
            word("ώριμος", "ripe"),
            word("ωραίο", "nice"),
        ],
    },
];
