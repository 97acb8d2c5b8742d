//! Coaching message catalog and selection.
//!
//! Each category carries a fixed set of template messages. Selection scores
//! every template against the current context scores and the user's
//! preferences, then picks the highest scorer (first wins on ties).

use rand::Rng;

use crate::personalize;
use crate::profile::UserProfile;
use crate::scoring::{Category, CategoryScores};

const PRODUCTIVITY_TEMPLATES: [&str; 5] = [
    "Break down your current task into 3 smaller, manageable steps",
    "Set a 25-minute focused work session and eliminate distractions",
    "Prioritize your top 3 tasks for today and tackle the most important one first",
    "Use the 2-minute rule: if it takes less than 2 minutes, do it now",
    "Review your goals and align your current activity with your priorities",
];

const WELLBEING_TEMPLATES: [&str; 5] = [
    "Take 5 deep breaths and notice how you feel in this moment",
    "Stand up, stretch your arms overhead, and roll your shoulders",
    "Drink a glass of water and take a 2-minute walk",
    "Practice gratitude: think of 3 things you're thankful for today",
    "Check in with your posture and adjust for comfort and health",
];

const FOCUS_TEMPLATES: [&str; 5] = [
    "Close unnecessary browser tabs and applications to reduce cognitive load",
    "Put your phone in another room or enable focus mode",
    "Set a clear intention for the next 30 minutes of work",
    "Use noise-canceling headphones or find a quieter workspace",
    "Try the Pomodoro technique: 25 minutes focused work, 5-minute break",
];

const MOTIVATION_TEMPLATES: [&str; 5] = [
    "Remind yourself why this task matters to your bigger goals",
    "Celebrate a recent win, no matter how small",
    "Visualize how you'll feel when you complete this task",
    "Connect with a colleague or friend for accountability",
    "Start with the easiest part to build momentum",
];

/// Keywords whose presence in a template ties it to a category's relevance.
const KEYWORDS: [(&str, Category); 4] = [
    ("task", Category::Productivity),
    ("break", Category::Wellbeing),
    ("focus", Category::Focus),
    ("goal", Category::Motivation),
];

/// Imperative verbs that mark a template as action-oriented.
const ACTION_WORDS: [&str; 4] = ["do", "try", "set", "take"];

/// Template messages for a category.
pub fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Productivity => &PRODUCTIVITY_TEMPLATES,
        Category::Wellbeing => &WELLBEING_TEMPLATES,
        Category::Focus => &FOCUS_TEMPLATES,
        Category::Motivation => &MOTIVATION_TEMPLATES,
    }
}

/// Score a template against context relevance and user preferences.
///
/// Base 0.5; each keyword occurrence adds `0.3 * relevance` of its category,
/// short templates get +0.2 when the user prefers short messages, templates
/// containing an imperative verb get +0.2 when the user prefers
/// action-oriented coaching. Capped at 1.0.
pub fn template_score(template: &str, scores: &CategoryScores, profile: &UserProfile) -> f64 {
    let mut score = 0.5;
    let lowered = template.to_lowercase();

    for (keyword, category) in KEYWORDS {
        if lowered.contains(keyword) {
            score += scores.get(category) * 0.3;
        }
    }

    if profile.preferences.prefers_short_messages && template.len() < 60 {
        score += 0.2;
    }
    if profile.preferences.prefers_action_oriented
        && ACTION_WORDS.iter().any(|word| lowered.contains(word))
    {
        score += 0.2;
    }

    score.min(1.0)
}

/// Generate a personalized coaching message for a category.
///
/// Picks the highest-scoring template for the category (earlier template
/// wins on ties) and runs it through personalization.
pub fn generate<R: Rng>(
    category: Category,
    scores: &CategoryScores,
    profile: &UserProfile,
    rng: &mut R,
) -> String {
    let candidates = templates(category);

    let mut best = candidates[0];
    let mut best_score = template_score(best, scores, profile);
    for &template in &candidates[1..] {
        let score = template_score(template, scores, profile);
        if score > best_score {
            best = template;
            best_score = score;
        }
    }

    personalize::personalize(best, profile, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn neutral_scores() -> CategoryScores {
        CategoryScores::baseline()
    }

    #[test]
    fn test_every_category_has_templates() {
        for category in Category::ALL {
            assert_eq!(templates(category).len(), 5);
        }
    }

    #[test]
    fn test_keyword_raises_score() {
        let profile = UserProfile::new("u-1");
        let mut scores = neutral_scores();
        scores.productivity = 1.0;

        let with_keyword = template_score("Finish the task", &scores, &profile);
        let without = template_score("Finish the thing", &scores, &profile);
        assert!(with_keyword > without);
        assert!((with_keyword - without - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_short_message_preference() {
        let mut profile = UserProfile::new("u-1");
        profile.preferences.prefers_short_messages = true;
        profile.preferences.prefers_action_oriented = false;
        let scores = neutral_scores();

        let short = template_score("Quick win", &scores, &profile);
        let long = template_score(
            "A much longer message that certainly exceeds the sixty character limit",
            &scores,
            &profile,
        );
        assert!((short - long - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_action_oriented_preference() {
        let profile = UserProfile::new("u-1");
        let scores = neutral_scores();

        // "Take 5 deep breaths..." contains both "take" and "break" ("breaths").
        let action = template_score(WELLBEING_TEMPLATES[0], &scores, &profile);
        assert!(action > 0.5);
    }

    #[test]
    fn test_score_capped_at_one() {
        let mut profile = UserProfile::new("u-1");
        profile.preferences.prefers_short_messages = true;
        let mut scores = neutral_scores();
        scores.productivity = 1.0;
        scores.focus = 1.0;

        let score = template_score("do set take task focus", &scores, &profile);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_generate_is_deterministic_for_fixed_seed() {
        let profile = UserProfile::new("u-1");
        let scores = neutral_scores();

        let a = generate(Category::Focus, &scores, &profile, &mut Pcg64::seed_from_u64(7));
        let b = generate(Category::Focus, &scores, &profile, &mut Pcg64::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_returns_template_for_plain_profile() {
        let profile = UserProfile::new("u-1");
        let scores = neutral_scores();
        let mut rng = Pcg64::seed_from_u64(1);

        let message = generate(Category::Motivation, &scores, &profile, &mut rng);
        assert!(MOTIVATION_TEMPLATES.contains(&message.as_str()));
    }
}
