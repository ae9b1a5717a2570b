//! Word lists for generated records.

pub const CONTINENTS: &[&str] = &[
    "Asia",
    "Africa",
    "North America",
    "South America",
    "Antarctica",
    "Europe",
    "Australia",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Czech Republic",
    "Denmark",
    "Egypt",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Ghana",
    "Greece",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Peru",
    "Poland",
    "Portugal",
    "Senegal",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "Uruguay",
    "Vietnam",
];

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Amara", "Ana", "Arjun", "Beatriz", "Carlos", "Chen", "Dmitri", "Elena", "Emeka",
    "Fatima", "Hana", "Ines", "Ivan", "Jamal", "Julia", "Kenji", "Lars", "Leila", "Lucas",
    "Maria", "Mateo", "Mei", "Nadia", "Olu", "Omar", "Priya", "Rosa", "Sofia", "Tomas",
    "Yusuf", "Zara",
];

pub const LAST_NAMES: &[&str] = &[
    "Abe", "Almeida", "Andersen", "Bauer", "Costa", "Dubois", "Eze", "Fischer", "Garcia",
    "Haddad", "Ivanova", "Jensen", "Kim", "Kowalski", "Lopez", "Moreau", "Mwangi", "Nakamura",
    "Novak", "Okafor", "Patel", "Rossi", "Santos", "Silva", "Tanaka", "Virtanen", "Weber",
    "Yilmaz", "Zhang",
];

pub const WORDS: &[&str] = &[
    "able", "about", "above", "across", "act", "after", "again", "against", "age", "ago",
    "agree", "air", "all", "almost", "alone", "along", "already", "also", "always", "among",
    "and", "another", "answer", "any", "area", "arm", "around", "art", "as", "ask", "at",
    "away", "back", "bad", "bank", "bar", "be", "beautiful", "become", "bed", "begin",
    "behind", "best", "better", "between", "big", "bit", "black", "blue", "body", "book",
    "both", "box", "boy", "break", "bring", "brother", "build", "business", "buy", "call",
    "camera", "capital", "car", "card", "care", "carry", "case", "catch", "cause", "center",
    "century", "certain", "chair", "chance", "change", "child", "choice", "city", "class",
    "clear", "close", "cold", "color", "come", "common", "community", "cover", "culture",
    "cup", "current", "dark", "data", "day", "deal", "decade", "deep", "degree", "describe",
    "design", "detail", "develop", "different", "difficult", "dinner", "direction", "do",
    "door", "down", "draw", "dream", "drive", "during", "each", "early", "east", "easy",
    "eat", "edge", "effect", "either", "else", "end", "energy", "enjoy", "enough", "enter",
    "even", "evening", "event", "ever", "every", "example", "experience", "eye", "face",
    "fact", "fall", "family", "far", "fast", "father", "fear", "feel", "few", "field",
    "figure", "fill", "film", "final", "find", "fine", "fire", "first", "fish", "five",
    "floor", "fly", "follow", "food", "force", "forget", "form", "forward", "free", "friend",
    "front", "full", "future", "game", "garden", "general", "get", "girl", "give", "glass",
    "go", "good", "great", "green", "ground", "group", "grow", "guess", "hair", "half",
    "hand", "happen", "happy", "hard", "have", "head", "hear", "heart", "heavy", "help",
    "here", "high", "history", "hold", "home", "hope", "hot", "hour", "house", "idea",
    "image", "important", "indeed", "inside", "instead", "interest", "into", "itself",
    "job", "join", "just", "keep", "kind", "kitchen", "know", "land", "language", "large",
    "last", "late", "later", "laugh", "lead", "learn", "leave", "less", "letter", "level",
    "life", "light", "like", "line", "list", "listen", "little", "live", "local", "long",
    "look", "lose", "lot", "love", "low", "main", "majority", "make", "many", "market",
    "matter", "maybe", "mean", "measure", "meet", "memory", "middle", "might", "mind",
    "minute", "miss", "modern", "moment", "money", "month", "more", "morning", "most",
    "mother", "mouth", "move", "much", "music", "must", "name", "nation", "natural", "near",
    "need", "never", "new", "news", "next", "night", "north", "nothing", "now", "number",
    "occur", "off", "office", "often", "old", "once", "only", "open", "order", "other",
    "our", "out", "over", "own", "page", "paper", "part", "party", "pass", "past", "pay",
    "people", "perhaps", "person", "pick", "picture", "piece", "place", "plan", "play",
    "point", "poor", "popular", "power", "present", "pretty", "price", "private", "program",
    "pull", "put", "quality", "question", "quickly", "quite", "rather", "reach", "read",
    "ready", "real", "reason", "red", "remain", "remember", "rest", "result", "return",
    "rich", "right", "rise", "river", "road", "rock", "room", "rule", "run", "safe", "same",
    "save", "say", "scene", "school", "science", "sea", "season", "seat", "second", "see",
    "seek", "sell", "send", "sense", "serve", "set", "several", "shake", "share", "short",
    "show", "side", "sign", "simple", "since", "sing", "single", "sister", "sit", "size",
    "skill", "small", "social", "some", "song", "soon", "sound", "south", "space", "speak",
    "special", "spring", "stage", "stand", "star", "start", "state", "stay", "step", "still",
    "stop", "story", "street", "strong", "student", "study", "style", "success", "summer",
    "sure", "system", "table", "take", "talk", "teach", "team", "tell", "ten", "term",
    "test", "than", "that", "their", "then", "there", "these", "thing", "think", "those",
    "though", "three", "through", "time", "today", "together", "tonight", "too", "total",
    "toward", "town", "trade", "travel", "tree", "true", "try", "turn", "two", "under",
    "until", "up", "upon", "use", "value", "very", "view", "visit", "voice", "wait", "walk",
    "wall", "want", "war", "watch", "water", "way", "wear", "week", "well", "west", "what",
    "when", "where", "which", "while", "white", "whole", "why", "wide", "wife", "will",
    "win", "window", "wish", "with", "within", "without", "woman", "wonder", "word", "work",
    "world", "write", "year", "yes", "yet", "young", "yourself",
];
