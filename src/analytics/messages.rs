//! Fixed vocabularies used by the summary: the 17-slot mood descriptor table
//! and the cheer-up message pools.

use super::sentiment::Sentiment;

/// Mood descriptor table. Exactly 17 entries; a mood score indexes this table
/// directly, so any score outside `0..=16` (other than the `-1` sentinel) is
/// invalid.
pub const MOOD_DESCRIPTIONS: [&str; 17] = [
    "sad",
    "melancholic",
    "frustrated",
    "concerned",
    "nostalgic",
    "calm",
    "angry",
    "livid",
    "happy",
    "elated",
    "joyful",
    "content",
    "motivated",
    "relieved",
    "celebratory",
    "energetic",
    "optimistic",
];

const POSITIVE_MESSAGES: [&str; 10] = [
    "Keep nurturing those moments of joy, and let the beauty of life's small wonders always brighten your path. Keep up the good work of introspecting your emotional experiences!",
    "Embrace the happiness in these fleeting moments, and may your journey be forever illuminated by the radiance of life's simple pleasures. Carry on with your practice of thoughtful self-feeling examination!",
    "Stay attuned to the enchanting symphony of life's small delights, and let the melody of happiness accompany you each step of the way. Persist in your pursuit of understanding your feelings!",
    "Cherish these fragments of bliss, and may your days be forever adorned with the jewels of life's modest treasures. Continue your journey of self-emotional exploration!",
    "Your ability to find joy in life's little marvels is a gift; keep unwrapping it and delighting in the magic that surrounds you. Stay dedicated to reflecting your emotions!",
    "May the tapestry of your days be woven with the threads of happiness found in the intricacies of life's miniature wonders. Persist in your endeavor to reflect on your emotions!",
    "Your heart's receptivity to life's small joys is truly remarkable; keep your spirit open to the abundance of happiness that exists all around you. Sustain your habit of introspective thinking about your feelings!",
    "As you journey through life, may you always find solace and elation in the embrace of the gentle moments that grace your path. Stay committed to introspecting on your emotions!",
    "Let the kaleidoscope of happiness formed by life's petite treasures continue to infuse your days with vibrant colors and radiant smiles. Continue contemplating your emotions!",
    "Stay on this beautiful path of cherishing life's simplicity, and may the wellspring of joy within you never run dry. Keep reflecting your feelings!",
];

const BALANCED_MESSAGES: [&str; 10] = [
    "Remember that life is a tapestry of various emotions, and finding equilibrium amidst the ups and downs is a commendable endeavor. Stay the course in your endeavor to understand your emotions!",
    "Embrace the ebb and flow of life's moments, for in the balance lies the tapestry that forms your unique journey. Sustain your efforts to delve into the depths of your feelings!",
    "Life's path is a blend of diverse experiences; let the neutrality of this moment guide you through the intricate weave of emotions. Continue the process of self-discovery through emotional reflection!",
    "Amidst the shades of gray, seek the nuances that add depth to your days, and let each hue contribute to the canvas of your story. Carry on with your emotional introspection!",
    "Just as a scale requires both sides for balance, your journey encompasses a range of emotions that shape the person you're becoming. Keep up the habit of pondering your emotions!",
    "Find comfort in the neutrality of this moment, for it's a canvas upon which you can paint the spectrum of emotions that color your life. Continue your journey of self-feeling exploration!",
    "The middle ground between highs and lows is where you discover the stability that can support you as you navigate life's twists and turns. Stay dedicated to understanding your emotional landscape!",
    "Life's pendulum swings between various feelings; use the equilibrium as an opportunity to reflect on the richness of your experiences. Persist in your practice of self-emotional exploration!",
    "In this moment of neutrality, take a breath and appreciate the mosaic of emotions that combine to create the masterpiece of your existence. Stay on the path of self-discovery through feeling contemplation!",
    "Just as a compass points to true north, your emotional equilibrium guides you through the ever-changing landscapes of your journey. Keep on examining and contemplating your emotions!",
];

const NEGATIVE_MESSAGES: [&str; 11] = [
    "Adversity is but a chapter in the grand story of your life; with each challenge, you gather the ink to write more inspiring chapters ahead.",
    "Amidst the challenges, remember that you possess the strength to shape your narrative and emerge from adversity with newfound wisdom.",
    "Difficult moments are threads in the fabric of resilience; each challenge you face weaves a tapestry of strength that fortifies your spirit.",
    "'Hardwork outweighs talent - every time.' - Kobe Bryant",
    "In the shadows, you find the contrast that makes the light shine even brighter. Your journey is composed of both, each enhancing the other.",
    "Just as a phoenix rises from its ashes, your spirit too can soar above difficulties, fueled by the energy of transformation.",
    "Storms may obscure the horizon, but beneath the clouds lies a landscape of opportunities waiting for your discovery.",
    "The beauty of life's mosaic is its diversity of emotions. Even in tough times, your canvas is being painted with hues of growth and resilience.",
    "The road may be tough at times, but your resilience is an unwavering guide that leads you through the darkest of moments.",
    "When life's rhythm falters, embrace the dissonance, for it's through these moments that the symphony of your life gains depth and beauty.",
    "While the clouds may momentarily dim the sky, remember that the sun's brilliance will break through once again, lighting your path.",
];

/// Cheer-up message pool for a sentiment category.
pub fn cheer_up_pool(category: Sentiment) -> &'static [&'static str] {
    match category {
        Sentiment::Positive => &POSITIVE_MESSAGES,
        Sentiment::Balanced => &BALANCED_MESSAGES,
        Sentiment::Negative => &NEGATIVE_MESSAGES,
    }
}

/// Looks up a mood descriptor, or `None` when the score is out of the table's
/// bounds (including the `-1` sentinel).
pub fn mood_description(score: i32) -> Option<&'static str> {
    usize::try_from(score)
        .ok()
        .and_then(|idx| MOOD_DESCRIPTIONS.get(idx))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_has_17_entries() {
        assert_eq!(MOOD_DESCRIPTIONS.len(), 17);
    }

    #[test]
    fn test_mood_description_bounds() {
        assert_eq!(mood_description(0), Some("sad"));
        assert_eq!(mood_description(16), Some("optimistic"));
        assert_eq!(mood_description(17), None);
        assert_eq!(mood_description(-1), None);
        assert_eq!(mood_description(i32::MAX), None);
    }

    #[test]
    fn test_pools_are_non_empty() {
        for category in [Sentiment::Positive, Sentiment::Balanced, Sentiment::Negative] {
            assert!(!cheer_up_pool(category).is_empty());
        }
    }
}
