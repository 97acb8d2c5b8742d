//! Message personalization.
//!
//! Adapts a template message to a user's profile: name prefix for longer
//! messages, softener stripping for the direct style, and a randomized
//! encouragement prefix for the encouraging style.

use rand::Rng;

use crate::profile::{CommunicationStyle, UserProfile};

/// Softeners removed for users who prefer direct phrasing.
const SOFTENERS: [&str; 3] = ["Consider ", "Try ", "You might want to "];

/// Prefixes prepended for users who prefer encouraging phrasing.
const ENCOURAGEMENTS: [&str; 3] = [
    "You've got this! ",
    "Great job so far. ",
    "You're doing well. ",
];

/// Messages at or below this length skip the name prefix.
const NAME_PREFIX_MIN_LEN: usize = 50;

/// Personalize a coaching message for a user.
///
/// The name prefix is only applied to longer messages, and lowercases the
/// original text so the greeting reads as one sentence.
pub fn personalize<R: Rng>(message: &str, profile: &UserProfile, rng: &mut R) -> String {
    let mut message = message.to_string();

    if !profile.name.is_empty() && message.len() > NAME_PREFIX_MIN_LEN {
        message = format!("{}, {}", profile.name, message.to_lowercase());
    }

    match profile.communication_style {
        CommunicationStyle::Direct => {
            for softener in SOFTENERS {
                message = message.replace(softener, "");
            }
        }
        CommunicationStyle::Encouraging => {
            let prefix = ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())];
            message = format!("{prefix}{message}");
        }
        CommunicationStyle::Friendly => {}
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(42)
    }

    #[test]
    fn test_friendly_leaves_message_unchanged() {
        let profile = UserProfile::new("u-1");
        let out = personalize("Take a short walk", &profile, &mut rng());
        assert_eq!(out, "Take a short walk");
    }

    #[test]
    fn test_name_prefix_only_for_long_messages() {
        let profile = UserProfile::new("u-1").with_name("Sam");

        let short = personalize("Take a short walk", &profile, &mut rng());
        assert_eq!(short, "Take a short walk");

        let long = personalize(
            "Review your goals and align your current activity with your priorities",
            &profile,
            &mut rng(),
        );
        assert!(long.starts_with("Sam, review your goals"));
    }

    #[test]
    fn test_direct_strips_softeners() {
        let profile = UserProfile::new("u-1").with_style(CommunicationStyle::Direct);
        let out = personalize(
            "Try the Pomodoro technique: 25 minutes focused work, 5-minute break",
            &profile,
            &mut rng(),
        );
        assert!(out.starts_with("the Pomodoro technique"));
    }

    #[test]
    fn test_encouraging_prepends_known_prefix() {
        let profile = UserProfile::new("u-1").with_style(CommunicationStyle::Encouraging);
        let out = personalize("Start with the easiest part", &profile, &mut rng());
        assert!(ENCOURAGEMENTS.iter().any(|prefix| out.starts_with(prefix)));
        assert!(out.ends_with("Start with the easiest part"));
    }

    #[test]
    fn test_encouraging_is_seed_deterministic() {
        let profile = UserProfile::new("u-1").with_style(CommunicationStyle::Encouraging);
        let a = personalize("Start with the easiest part", &profile, &mut rng());
        let b = personalize("Start with the easiest part", &profile, &mut rng());
        assert_eq!(a, b);
    }
}
