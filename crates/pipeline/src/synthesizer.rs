//! Overview synthesizer: a templated placeholder description per genre.
//!
//! The request protocol carries no prose for a hypothetical film, but the
//! text channel of the feature vector needs one. The synthesizer picks a
//! stock sentence for the request's primary genre; it does not attempt any
//! real language generation.

use rand::Rng;

/// Returned when the primary genre has no template set.
pub const FALLBACK_OVERVIEW: &str = "An engaging film that combines multiple genres to create a unique and entertaining cinematic experience.";

/// Stock descriptions per genre, three per entry.
const GENRE_TEMPLATES: &[(&str, [&str; 3])] = &[
    (
        "Action",
        [
            "An explosive action thriller featuring intense combat sequences and high-stakes missions. The hero must overcome impossible odds to save the day.",
            "A high-octane adventure with breathtaking stunts, car chases, and epic battle scenes that will keep you on the edge of your seat.",
            "Non-stop action as an elite team faces dangerous enemies in a race against time to prevent global catastrophe.",
        ],
    ),
    (
        "Comedy",
        [
            "A hilarious comedy that follows quirky characters through laugh-out-loud situations and unexpected mishaps.",
            "A heartwarming and funny story about life, love, and the absurdities we all face in our daily adventures.",
            "Comedy gold with witty dialogue, memorable characters, and situations that will have you laughing from start to finish.",
        ],
    ),
    (
        "Drama",
        [
            "A powerful drama exploring complex human emotions, relationships, and life-changing decisions.",
            "An emotional journey through triumph and tragedy, examining the depths of the human experience.",
            "A thought-provoking story about family, love, loss, and the resilience of the human spirit.",
        ],
    ),
    (
        "Horror",
        [
            "A terrifying horror experience with spine-chilling moments and supernatural threats lurking in every shadow.",
            "Pure terror as unsuspecting victims face unspeakable horrors in this nightmare-inducing thriller.",
            "A frightening tale of survival against malevolent forces that will haunt your dreams.",
        ],
    ),
    (
        "Romance",
        [
            "A beautiful love story about two souls finding each other against all odds in this heartfelt romance.",
            "Romance blooms in unexpected ways as two people discover the transformative power of true love.",
            "A passionate tale of love, heartbreak, and second chances that will touch your heart.",
        ],
    ),
    (
        "Science Fiction",
        [
            "A mind-bending sci-fi adventure exploring futuristic technology, space travel, and the boundaries of human potential.",
            "Journey to distant galaxies and alternate realities in this thrilling science fiction epic.",
            "An imaginative exploration of advanced technology, artificial intelligence, and humanity's future among the stars.",
        ],
    ),
    (
        "Thriller",
        [
            "A pulse-pounding thriller with unexpected twists, psychological tension, and edge-of-your-seat suspense.",
            "Mystery and danger collide in this gripping thriller that will keep you guessing until the final reveal.",
            "A suspenseful cat-and-mouse game where every decision could mean life or death.",
        ],
    ),
    (
        "Fantasy",
        [
            "An epic fantasy adventure in a magical world filled with mythical creatures, ancient prophecies, and heroic quests.",
            "Journey through enchanted realms where magic is real and destiny awaits those brave enough to seek it.",
            "A fantastical tale of wizards, warriors, and wonder in a realm beyond imagination.",
        ],
    ),
    (
        "Adventure",
        [
            "An exciting adventure across exotic locations, filled with danger, discovery, and unforgettable experiences.",
            "Join brave explorers on a thrilling quest for treasure, glory, and the adventure of a lifetime.",
            "An epic journey through uncharted territories where courage and determination are tested at every turn.",
        ],
    ),
];

/// Synthesize a placeholder overview for a comma-separated genre string.
///
/// The primary genre is the first comma-separated entry, trimmed. A genre
/// without a template set gets the generic fallback sentence; that is an
/// expected outcome, not an error.
pub fn synthesize(genre_input: &str, rng: &mut impl Rng) -> &'static str {
    let primary = genre_input
        .split(',')
        .next()
        .map(str::trim)
        .unwrap_or_default();

    match GENRE_TEMPLATES.iter().find(|(genre, _)| *genre == primary) {
        Some((_, templates)) => templates[rng.random_range(0..templates.len())],
        None => FALLBACK_OVERVIEW,
    }
}

/// Template sentences for one genre, if it has any.
pub fn templates_for(genre: &str) -> Option<&'static [&'static str; 3]> {
    GENRE_TEMPLATES
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, templates)| templates)
}
