//! The 100-phrase table: everyday Greek across eight categories.
//!
//! Curated content; ids are stable and referenced by persisted progress.

use crate::types::PhraseCategory::{
    Communication, Dining, Directions, Emergencies, Greetings, Numbers, Shopping, Social,
};

use super::Phrase;

pub static PHRASES: [Phrase; 100] = [
    // -------- Greetings & Politeness (1-15) --------
    Phrase {
        id: 1,
        category: Greetings,
        greek: "Γεια σας",
        pronunciation: "YAH-sahs",
        english: "Hello (formal)",
        tier: 1,
        notes: "Used when addressing someone formally or a group of people",
    },
    Phrase {
        id: 2,
        category: Greetings,
        greek: "Γεια σου",
        pronunciation: "YAH-soo",
        english: "Hello (informal)",
        tier: 1,
        notes: "Used with friends, family, or people your age or younger",
    },
    Phrase {
        id: 3,
        category: Greetings,
        greek: "Καλημέρα",
        pronunciation: "kah-lee-MEH-rah",
        english: "Good morning",
        tier: 1,
        notes: "Used until about noon",
    },
    Phrase {
        id: 4,
        category: Greetings,
        greek: "Καλησπέρα",
        pronunciation: "kah-lee-SPEH-rah",
        english: "Good evening",
        tier: 1,
        notes: "Used from late afternoon onwards",
    },
    Phrase {
        id: 5,
        category: Greetings,
        greek: "Καληνύχτα",
        pronunciation: "kah-lee-NEEKH-tah",
        english: "Good night",
        tier: 1,
        notes: "Used when saying goodbye late in the evening",
    },
    Phrase {
        id: 6,
        category: Greetings,
        greek: "Αντίο",
        pronunciation: "ahn-DEE-oh",
        english: "Goodbye",
        tier: 1,
        notes: "Standard way to say goodbye",
    },
    Phrase {
        id: 7,
        category: Greetings,
        greek: "Ευχαριστώ",
        pronunciation: "ef-khah-ree-STOH",
        english: "Thank you",
        tier: 1,
        notes: "Essential polite expression",
    },
    Phrase {
        id: 8,
        category: Greetings,
        greek: "Παρακαλώ",
        pronunciation: "pah-rah-kah-LOH",
        english: "Please / You're welcome",
        tier: 1,
        notes: "Used both for \"please\" and \"you're welcome\"",
    },
    Phrase {
        id: 9,
        category: Greetings,
        greek: "Συγγνώμη",
        pronunciation: "see-GNOH-mee",
        english: "Excuse me / Sorry",
        tier: 2,
        notes: "Used to apologize or get someone's attention",
    },
    Phrase {
        id: 10,
        category: Greetings,
        greek: "Με συγχωρείτε",
        pronunciation: "meh see-khoh-REE-teh",
        english: "Excuse me (formal)",
        tier: 2,
        notes: "More formal way to get attention or apologize",
    },
    Phrase {
        id: 11,
        category: Greetings,
        greek: "Τι κάνετε;",
        pronunciation: "tee KAH-neh-teh",
        english: "How are you? (formal)",
        tier: 2,
        notes: "Polite way to ask how someone is doing",
    },
    Phrase {
        id: 12,
        category: Greetings,
        greek: "Τι κάνεις;",
        pronunciation: "tee KAH-nees",
        english: "How are you? (informal)",
        tier: 2,
        notes: "Casual way to ask how someone is doing",
    },
    Phrase {
        id: 13,
        category: Greetings,
        greek: "Καλά, ευχαριστώ",
        pronunciation: "kah-LAH, ef-khah-ree-STOH",
        english: "Fine, thank you",
        tier: 2,
        notes: "Standard response to \"How are you?\"",
    },
    Phrase {
        id: 14,
        category: Greetings,
        greek: "Χαίρομαι που σας γνωρίζω",
        pronunciation: "KHEH-roh-meh poo sahs gnoh-REE-zoh",
        english: "Nice to meet you",
        tier: 3,
        notes: "Used when meeting someone for the first time",
    },
    Phrase {
        id: 15,
        category: Greetings,
        greek: "Καλώς ήρθατε",
        pronunciation: "kah-LOHS EER-thah-teh",
        english: "Welcome",
        tier: 2,
        notes: "Used to welcome guests or visitors",
    },
    // -------- Basic Communication (16-30) --------
    Phrase {
        id: 16,
        category: Communication,
        greek: "Ναι",
        pronunciation: "neh",
        english: "Yes",
        tier: 1,
        notes: "Basic affirmative response",
    },
    Phrase {
        id: 17,
        category: Communication,
        greek: "Όχι",
        pronunciation: "OH-khee",
        english: "No",
        tier: 1,
        notes: "Basic negative response",
    },
    Phrase {
        id: 18,
        category: Communication,
        greek: "Δεν καταλαβαίνω",
        pronunciation: "thehn kah-tah-lah-VEH-noh",
        english: "I don't understand",
        tier: 2,
        notes: "Very useful when learning",
    },
    Phrase {
        id: 19,
        category: Communication,
        greek: "Μιλάτε αγγλικά;",
        pronunciation: "mee-LAH-teh ah-glee-KAH",
        english: "Do you speak English?",
        tier: 2,
        notes: "Helpful when you need assistance",
    },
    Phrase {
        id: 20,
        category: Communication,
        greek: "Μιλάω λίγα ελληνικά",
        pronunciation: "mee-LAH-oh LEE-gah eh-lee-nee-KAH",
        english: "I speak a little Greek",
        tier: 2,
        notes: "Good to know when starting conversations",
    },
    Phrase {
        id: 21,
        category: Communication,
        greek: "Πώς λέγεται;",
        pronunciation: "pohs LEH-geh-teh",
        english: "How do you say it?",
        tier: 2,
        notes: "For learning new words",
    },
    Phrase {
        id: 22,
        category: Communication,
        greek: "Τι σημαίνει;",
        pronunciation: "tee see-MEH-nee",
        english: "What does it mean?",
        tier: 2,
        notes: "For understanding new words",
    },
    Phrase {
        id: 23,
        category: Communication,
        greek: "Μπορείτε να επαναλάβετε;",
        pronunciation: "boh-REE-teh nah eh-pah-nah-LAH-veh-teh",
        english: "Can you repeat?",
        tier: 3,
        notes: "When you need something said again",
    },
    Phrase {
        id: 24,
        category: Communication,
        greek: "Πιο αργά, παρακαλώ",
        pronunciation: "pee-oh ahr-GAH, pah-rah-kah-LOH",
        english: "Slower, please",
        tier: 2,
        notes: "When someone is speaking too fast",
    },
    Phrase {
        id: 25,
        category: Communication,
        greek: "Μπορείτε να με βοηθήσετε;",
        pronunciation: "boh-REE-teh nah meh voh-ee-THEE-seh-teh",
        english: "Can you help me?",
        tier: 3,
        notes: "When you need assistance",
    },
    Phrase {
        id: 26,
        category: Communication,
        greek: "Δεν ξέρω",
        pronunciation: "thehn KSEH-roh",
        english: "I don't know",
        tier: 1,
        notes: "Honest response when you don't have an answer",
    },
    Phrase {
        id: 27,
        category: Communication,
        greek: "Είμαι από την Αμερική",
        pronunciation: "EE-meh ah-POH teen ah-meh-ree-KEE",
        english: "I am from America",
        tier: 2,
        notes: "Change country name as needed",
    },
    Phrase {
        id: 28,
        category: Communication,
        greek: "Με λένε...",
        pronunciation: "meh LEH-neh",
        english: "My name is...",
        tier: 2,
        notes: "Add your name after this phrase",
    },
    Phrase {
        id: 29,
        category: Communication,
        greek: "Πώς σας λένε;",
        pronunciation: "pohs sahs LEH-neh",
        english: "What is your name?",
        tier: 2,
        notes: "Polite way to ask someone's name",
    },
    Phrase {
        id: 30,
        category: Communication,
        greek: "Μαθαίνω ελληνικά",
        pronunciation: "mah-THEH-noh eh-lee-nee-KAH",
        english: "I am learning Greek",
        tier: 2,
        notes: "Great conversation starter",
    },
    // -------- Directions & Travel (31-45) --------
    Phrase {
        id: 31,
        category: Directions,
        greek: "Που είναι...;",
        pronunciation: "poo EE-neh",
        english: "Where is...?",
        tier: 2,
        notes: "Essential for finding places",
    },
    Phrase {
        id: 32,
        category: Directions,
        greek: "Πώς πάω στο...;",
        pronunciation: "pohs PAH-oh stoh",
        english: "How do I get to...?",
        tier: 2,
        notes: "For getting directions",
    },
    Phrase {
        id: 33,
        category: Directions,
        greek: "Δεξιά",
        pronunciation: "theh-kee-AH",
        english: "Right",
        tier: 1,
        notes: "Direction indicator",
    },
    Phrase {
        id: 34,
        category: Directions,
        greek: "Αριστερά",
        pronunciation: "ah-ree-steh-RAH",
        english: "Left",
        tier: 1,
        notes: "Direction indicator",
    },
    Phrase {
        id: 35,
        category: Directions,
        greek: "Ευθεία",
        pronunciation: "ef-THEE-ah",
        english: "Straight",
        tier: 2,
        notes: "Direction indicator",
    },
    Phrase {
        id: 36,
        category: Directions,
        greek: "Κοντά",
        pronunciation: "kohn-DAH",
        english: "Near",
        tier: 1,
        notes: "Distance indicator",
    },
    Phrase {
        id: 37,
        category: Directions,
        greek: "Μακριά",
        pronunciation: "mah-kree-AH",
        english: "Far",
        tier: 1,
        notes: "Distance indicator",
    },
    Phrase {
        id: 38,
        category: Directions,
        greek: "Εδώ",
        pronunciation: "eh-THOH",
        english: "Here",
        tier: 1,
        notes: "Location indicator",
    },
    Phrase {
        id: 39,
        category: Directions,
        greek: "Εκεί",
        pronunciation: "eh-KEE",
        english: "There",
        tier: 1,
        notes: "Location indicator",
    },
    Phrase {
        id: 40,
        category: Directions,
        greek: "Στο κέντρο",
        pronunciation: "stoh KEHN-troh",
        english: "In the center",
        tier: 2,
        notes: "Referring to city center",
    },
    Phrase {
        id: 41,
        category: Directions,
        greek: "Ο σταθμός",
        pronunciation: "oh stah-THOS",
        english: "The station",
        tier: 2,
        notes: "Train or bus station",
    },
    Phrase {
        id: 42,
        category: Directions,
        greek: "Το αεροδρόμιο",
        pronunciation: "toh ah-eh-roh-THROH-mee-oh",
        english: "The airport",
        tier: 3,
        notes: "Important for travelers",
    },
    Phrase {
        id: 43,
        category: Directions,
        greek: "Το ξενοδοχείο",
        pronunciation: "toh kseh-noh-thoh-KHEE-oh",
        english: "The hotel",
        tier: 2,
        notes: "Common destination",
    },
    Phrase {
        id: 44,
        category: Directions,
        greek: "Η παραλία",
        pronunciation: "ee pah-rah-LEE-ah",
        english: "The beach",
        tier: 2,
        notes: "Popular destination in Greece",
    },
    Phrase {
        id: 45,
        category: Directions,
        greek: "Χάθηκα",
        pronunciation: "KHAH-thee-kah",
        english: "I am lost",
        tier: 2,
        notes: "When you need help finding your way",
    },
    // -------- Dining & Food (46-60) --------
    Phrase {
        id: 46,
        category: Dining,
        greek: "Πεινάω",
        pronunciation: "pee-NAH-oh",
        english: "I am hungry",
        tier: 1,
        notes: "When you need food",
    },
    Phrase {
        id: 47,
        category: Dining,
        greek: "Διψάω",
        pronunciation: "thee-PSAH-oh",
        english: "I am thirsty",
        tier: 1,
        notes: "When you need a drink",
    },
    Phrase {
        id: 48,
        category: Dining,
        greek: "Το μενού, παρακαλώ",
        pronunciation: "toh meh-NOO, pah-rah-kah-LOH",
        english: "The menu, please",
        tier: 2,
        notes: "First thing to ask in a restaurant",
    },
    Phrase {
        id: 49,
        category: Dining,
        greek: "Θα θέλω...",
        pronunciation: "thah THEH-loh",
        english: "I would like...",
        tier: 2,
        notes: "For ordering food or drinks",
    },
    Phrase {
        id: 50,
        category: Dining,
        greek: "Νερό",
        pronunciation: "neh-ROH",
        english: "Water",
        tier: 1,
        notes: "Essential drink",
    },
    Phrase {
        id: 51,
        category: Dining,
        greek: "Κρασί",
        pronunciation: "krah-SEE",
        english: "Wine",
        tier: 1,
        notes: "Popular Greek drink",
    },
    Phrase {
        id: 52,
        category: Dining,
        greek: "Μπίρα",
        pronunciation: "BEE-rah",
        english: "Beer",
        tier: 1,
        notes: "Popular drink",
    },
    Phrase {
        id: 53,
        category: Dining,
        greek: "Καφές",
        pronunciation: "kah-FEHS",
        english: "Coffee",
        tier: 1,
        notes: "Very important in Greek culture",
    },
    Phrase {
        id: 54,
        category: Dining,
        greek: "Το λογαριασμό, παρακαλώ",
        pronunciation: "toh loh-gah-ree-ahs-MOH, pah-rah-kah-LOH",
        english: "The bill, please",
        tier: 3,
        notes: "To ask for the check",
    },
    Phrase {
        id: 55,
        category: Dining,
        greek: "Νόστιμο!",
        pronunciation: "NOH-stee-moh",
        english: "Delicious!",
        tier: 2,
        notes: "To compliment the food",
    },
    Phrase {
        id: 56,
        category: Dining,
        greek: "Χορτάτος",
        pronunciation: "khor-TAH-tohs",
        english: "Full (satisfied)",
        tier: 2,
        notes: "When you've had enough to eat",
    },
    Phrase {
        id: 57,
        category: Dining,
        greek: "Ψάρι",
        pronunciation: "PSAH-ree",
        english: "Fish",
        tier: 2,
        notes: "Common Greek food",
    },
    Phrase {
        id: 58,
        category: Dining,
        greek: "Κρέας",
        pronunciation: "KREH-ahs",
        english: "Meat",
        tier: 2,
        notes: "General term for meat",
    },
    Phrase {
        id: 59,
        category: Dining,
        greek: "Χορτοφάγος είμαι",
        pronunciation: "khor-toh-FAH-gohs EE-meh",
        english: "I am vegetarian",
        tier: 3,
        notes: "Important dietary information",
    },
    Phrase {
        id: 60,
        category: Dining,
        greek: "Πολύ καλό!",
        pronunciation: "poh-LEE kah-LOH",
        english: "Very good!",
        tier: 2,
        notes: "To praise something",
    },
    // -------- Shopping (61-70) --------
    Phrase {
        id: 61,
        category: Shopping,
        greek: "Πόσο κοστίζει;",
        pronunciation: "POH-soh koh-STEE-zee",
        english: "How much does it cost?",
        tier: 2,
        notes: "Essential for shopping",
    },
    Phrase {
        id: 62,
        category: Shopping,
        greek: "Ακριβό",
        pronunciation: "ah-kree-VOH",
        english: "Expensive",
        tier: 2,
        notes: "When something costs too much",
    },
    Phrase {
        id: 63,
        category: Shopping,
        greek: "Φθηνό",
        pronunciation: "fthee-NOH",
        english: "Cheap",
        tier: 2,
        notes: "When something is affordable",
    },
    Phrase {
        id: 64,
        category: Shopping,
        greek: "Θα το πάρω",
        pronunciation: "thah toh PAH-roh",
        english: "I'll take it",
        tier: 2,
        notes: "When you decide to buy something",
    },
    Phrase {
        id: 65,
        category: Shopping,
        greek: "Μόνο κοιτάζω",
        pronunciation: "MOH-noh kee-TAH-zoh",
        english: "Just looking",
        tier: 2,
        notes: "When browsing without buying",
    },
    Phrase {
        id: 66,
        category: Shopping,
        greek: "Έχετε...;",
        pronunciation: "EH-kheh-teh",
        english: "Do you have...?",
        tier: 2,
        notes: "To ask for specific items",
    },
    Phrase {
        id: 67,
        category: Shopping,
        greek: "Τι ώρα κλείνετε;",
        pronunciation: "tee OH-rah KLEE-neh-teh",
        english: "What time do you close?",
        tier: 2,
        notes: "Important for planning",
    },
    Phrase {
        id: 68,
        category: Shopping,
        greek: "Μεγάλο",
        pronunciation: "meh-GAH-loh",
        english: "Big/Large",
        tier: 1,
        notes: "For sizes",
    },
    Phrase {
        id: 69,
        category: Shopping,
        greek: "Μικρό",
        pronunciation: "mee-KROH",
        english: "Small",
        tier: 1,
        notes: "For sizes",
    },
    Phrase {
        id: 70,
        category: Shopping,
        greek: "Πληρώνω με κάρτα",
        pronunciation: "plee-ROH-noh meh KAR-tah",
        english: "I pay by card",
        tier: 2,
        notes: "Modern payment method",
    },
    // -------- Numbers & Time (71-80) --------
    Phrase {
        id: 71,
        category: Numbers,
        greek: "Ένα",
        pronunciation: "EH-nah",
        english: "One",
        tier: 1,
        notes: "Basic number",
    },
    Phrase {
        id: 72,
        category: Numbers,
        greek: "Δύο",
        pronunciation: "THEE-oh",
        english: "Two",
        tier: 1,
        notes: "Basic number",
    },
    Phrase {
        id: 73,
        category: Numbers,
        greek: "Τρία",
        pronunciation: "TREE-ah",
        english: "Three",
        tier: 1,
        notes: "Basic number",
    },
    Phrase {
        id: 74,
        category: Numbers,
        greek: "Τι ώρα είναι;",
        pronunciation: "tee OH-rah EE-neh",
        english: "What time is it?",
        tier: 2,
        notes: "To ask the time",
    },
    Phrase {
        id: 75,
        category: Numbers,
        greek: "Σήμερα",
        pronunciation: "SEE-meh-rah",
        english: "Today",
        tier: 1,
        notes: "Time reference",
    },
    Phrase {
        id: 76,
        category: Numbers,
        greek: "Αύριο",
        pronunciation: "AV-ree-oh",
        english: "Tomorrow",
        tier: 1,
        notes: "Time reference",
    },
    Phrase {
        id: 77,
        category: Numbers,
        greek: "Χθες",
        pronunciation: "khthehs",
        english: "Yesterday",
        tier: 2,
        notes: "Time reference",
    },
    Phrase {
        id: 78,
        category: Numbers,
        greek: "Δέκα",
        pronunciation: "THEH-kah",
        english: "Ten",
        tier: 1,
        notes: "Important round number",
    },
    Phrase {
        id: 79,
        category: Numbers,
        greek: "Εκατό",
        pronunciation: "eh-kah-TOH",
        english: "One hundred",
        tier: 2,
        notes: "Large round number",
    },
    Phrase {
        id: 80,
        category: Numbers,
        greek: "Πόσα χρόνια είστε;",
        pronunciation: "POH-sah KHROH-nee-ah EE-steh",
        english: "How old are you?",
        tier: 3,
        notes: "To ask someone's age",
    },
    // -------- Emergencies (81-90) --------
    Phrase {
        id: 81,
        category: Emergencies,
        greek: "Βοήθεια!",
        pronunciation: "voh-EE-thee-ah",
        english: "Help!",
        tier: 1,
        notes: "Emergency call for help",
    },
    Phrase {
        id: 82,
        category: Emergencies,
        greek: "Καλέστε την αστυνομία",
        pronunciation: "kah-LEH-steh teen ah-stee-noh-MEE-ah",
        english: "Call the police",
        tier: 3,
        notes: "In case of trouble",
    },
    Phrase {
        id: 83,
        category: Emergencies,
        greek: "Καλέστε γιατρό",
        pronunciation: "kah-LEH-steh yah-TROH",
        english: "Call a doctor",
        tier: 2,
        notes: "Medical emergency",
    },
    Phrase {
        id: 84,
        category: Emergencies,
        greek: "Πονάω",
        pronunciation: "poh-NAH-oh",
        english: "I'm in pain",
        tier: 2,
        notes: "Medical issue",
    },
    Phrase {
        id: 85,
        category: Emergencies,
        greek: "Που είναι το νοσοκομείο;",
        pronunciation: "poo EE-neh toh noh-soh-koh-MEE-oh",
        english: "Where is the hospital?",
        tier: 3,
        notes: "Medical emergency",
    },
    Phrase {
        id: 86,
        category: Emergencies,
        greek: "Έχασα το διαβατήριό μου",
        pronunciation: "EH-khah-sah toh thee-ah-vah-TEE-ree-oh moo",
        english: "I lost my passport",
        tier: 3,
        notes: "Travel emergency",
    },
    Phrase {
        id: 87,
        category: Emergencies,
        greek: "Πυρκαγιά!",
        pronunciation: "peer-kah-YAH",
        english: "Fire!",
        tier: 2,
        notes: "Emergency alert",
    },
    Phrase {
        id: 88,
        category: Emergencies,
        greek: "Είμαι άρρωστος",
        pronunciation: "EE-meh AH-roh-stohs",
        english: "I am sick",
        tier: 2,
        notes: "Health problem",
    },
    Phrase {
        id: 89,
        category: Emergencies,
        greek: "Χρειάζομαι βοήθεια",
        pronunciation: "khree-AH-zoh-meh voh-EE-thee-ah",
        english: "I need help",
        tier: 2,
        notes: "General request for assistance",
    },
    Phrase {
        id: 90,
        category: Emergencies,
        greek: "Τηλέφωνο",
        pronunciation: "tee-LEH-foh-noh",
        english: "Telephone",
        tier: 1,
        notes: "To ask for a phone",
    },
    // -------- Social Interactions (91-100) --------
    Phrase {
        id: 91,
        category: Social,
        greek: "Τι δουλειά κάνετε;",
        pronunciation: "tee thoo-lee-AH KAH-neh-teh",
        english: "What do you do for work?",
        tier: 3,
        notes: "Getting to know someone",
    },
    Phrase {
        id: 92,
        category: Social,
        greek: "Από πού είστε;",
        pronunciation: "ah-POH poo EE-steh",
        english: "Where are you from?",
        tier: 2,
        notes: "Common conversation starter",
    },
    Phrase {
        id: 93,
        category: Social,
        greek: "Μου αρέσει η Ελλάδα",
        pronunciation: "moo ah-REH-see ee eh-LAH-thah",
        english: "I like Greece",
        tier: 2,
        notes: "Positive comment about the country",
    },
    Phrase {
        id: 94,
        category: Social,
        greek: "Συγχαρητήρια!",
        pronunciation: "see-gkha-ree-TEE-ree-ah",
        english: "Congratulations!",
        tier: 3,
        notes: "For celebrations",
    },
    Phrase {
        id: 95,
        category: Social,
        greek: "Χρόνια πολλά!",
        pronunciation: "KHROH-nee-ah poh-LAH",
        english: "Happy birthday/Many happy returns",
        tier: 2,
        notes: "Used for birthdays and celebrations",
    },
    Phrase {
        id: 96,
        category: Social,
        greek: "Πολύ ωραία!",
        pronunciation: "poh-LEE oh-REH-ah",
        english: "Very beautiful/nice!",
        tier: 2,
        notes: "To express admiration",
    },
    Phrase {
        id: 97,
        category: Social,
        greek: "Με παρακολουθείτε;",
        pronunciation: "meh pah-rah-koh-loo-THEE-teh",
        english: "Do you follow me?",
        tier: 3,
        notes: "To check understanding in conversation",
    },
    Phrase {
        id: 98,
        category: Social,
        greek: "Έχω οικογένεια",
        pronunciation: "EH-khoh ee-koh-GEH-nee-ah",
        english: "I have a family",
        tier: 2,
        notes: "Personal information sharing",
    },
    Phrase {
        id: 99,
        category: Social,
        greek: "Καλή τύχη!",
        pronunciation: "kah-LEE TEE-khee",
        english: "Good luck!",
        tier: 2,
        notes: "Wishing someone well",
    },
    Phrase {
        id: 100,
        category: Social,
        greek: "Τα λέμε αργότερα",
        pronunciation: "tah LEH-meh ahr-GOH-teh-rah",
        english: "See you later",
        tier: 2,
        notes: "Casual way to say goodbye until later",
    },
];
