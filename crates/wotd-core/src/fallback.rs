/// A fully pre-authored word used when the remote lookup fails
pub struct FallbackWord {
    pub word: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
}

pub const FALLBACK_WORDS: [FallbackWord; 8] = [
    FallbackWord {
        word: "serendipity",
        definition: "The occurrence and development of events by chance in a happy or beneficial way",
        example: "Her unexpected job offer was a perfect example of serendipity.",
    },
    FallbackWord {
        word: "ephemeral",
        definition: "Lasting for a very short time",
        example: "The ephemeral beauty of cherry blossoms only lasts a few days.",
    },
    FallbackWord {
        word: "ubiquitous",
        definition: "Present, appearing, or found everywhere",
        example: "Mobile phones have become ubiquitous in modern society.",
    },
    FallbackWord {
        word: "eloquent",
        definition: "Fluent or persuasive in speaking or writing",
        example: "Her eloquent speech moved the entire audience.",
    },
    FallbackWord {
        word: "resilience",
        definition: "The capacity to recover quickly from difficulties; toughness",
        example: "The resilience of the human spirit is remarkable in times of crisis.",
    },
    FallbackWord {
        word: "mellifluous",
        definition: "Sweet or musical; pleasant to hear",
        example: "The singer had a mellifluous voice that captivated the audience.",
    },
    FallbackWord {
        word: "quintessential",
        definition: "Representing the most perfect or typical example of a quality or class",
        example: "The small café is the quintessential Parisian dining experience.",
    },
    FallbackWord {
        word: "surreptitious",
        definition: "Kept secret, especially because it would not be approved of",
        example: "He took a surreptitious glance at his watch during the meeting.",
    },
];
