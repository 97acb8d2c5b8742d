//! Coaching orchestrator.
//!
//! Ties together context scoring, message selection, and personalization.
//! Holds per-user profiles, a bounded interaction history, and performance
//! metrics updated from user feedback. All state is in-memory; the scoring
//! core itself stays pure and stateless.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::UserContext;
use crate::messages;
use crate::profile::UserProfile;
use crate::scoring::{self, Category, CategoryScores};

/// Default cap on retained interactions.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Satisfaction below this triggers preference adaptation.
const LOW_SATISFACTION: f64 = 0.3;
/// Satisfaction above this marks the category as liked.
const HIGH_SATISFACTION: f64 = 0.8;
/// Messages longer than this are candidates for the short-message preference.
const LONG_MESSAGE_LEN: usize = 80;

/// One delivered coaching interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub message: String,
    pub scores: CategoryScores,
}

/// User feedback on a delivered interaction. Scores are on a 0-1 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Feedback {
    pub satisfaction: f64,
    pub usefulness: f64,
    pub followed_advice: bool,
}

/// Result of one coaching pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingOutcome {
    pub interaction_id: Uuid,
    pub category: Category,
    /// Context score of the chosen category.
    pub relevance: f64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate coaching metrics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub messages_sent: u64,
    /// Exponentially weighted average of satisfaction scores.
    pub user_engagement: f64,
    /// Running effectiveness estimate in [0, 1].
    pub effectiveness_score: f64,
}

/// Snapshot report over metrics and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub total_messages: u64,
    pub avg_user_engagement: f64,
    pub effectiveness_score: f64,
    pub active_users: usize,
    pub categories_used: usize,
    pub generated_at: DateTime<Utc>,
}

/// Coaching orchestrator.
pub struct Coach {
    profiles: HashMap<String, UserProfile>,
    history: Vec<Interaction>,
    metrics: PerformanceMetrics,
    history_limit: usize,
    rng: Pcg64,
}

impl Default for Coach {
    fn default() -> Self {
        Self::new()
    }
}

impl Coach {
    /// Create a coach with default settings.
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            history: Vec::new(),
            metrics: PerformanceMetrics::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            rng: Pcg64::from_entropy(),
        }
    }

    /// Create a coach with a fixed RNG seed, for reproducible message
    /// personalization.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Override the interaction history cap.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Register or replace a user profile.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profiles.insert(profile.user_id.clone(), profile);
    }

    /// Profile for a user, if one exists yet.
    pub fn profile(&self, user_id: &str) -> Option<&UserProfile> {
        self.profiles.get(user_id)
    }

    /// Retained interactions, oldest first.
    pub fn history(&self) -> &[Interaction] {
        &self.history
    }

    /// Current aggregate metrics.
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Run one coaching pass for a user.
    ///
    /// Scores the context, picks the most relevant category, generates a
    /// personalized message, and records the interaction. A default profile
    /// is created on first sight of the user id.
    pub fn coach_user(&mut self, user_id: &str, context: &UserContext) -> CoachingOutcome {
        let profile = self
            .profiles
            .entry(user_id.to_string())
            .or_insert_with(|| UserProfile::new(user_id));

        let scores = scoring::evaluate(context);
        let (category, relevance) = scores.best();
        let message = messages::generate(category, &scores, profile, &mut self.rng);

        let interaction = Interaction {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            category,
            message: message.clone(),
            scores,
        };
        let outcome = CoachingOutcome {
            interaction_id: interaction.id,
            category,
            relevance,
            message,
            timestamp: interaction.timestamp,
        };

        tracing::debug!(
            user_id,
            category = category.name(),
            relevance,
            "coaching interaction recorded"
        );

        self.history.push(interaction);
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
        self.metrics.messages_sent += 1;

        outcome
    }

    /// Process user feedback for a delivered interaction.
    ///
    /// Updates engagement (EWMA over satisfaction) and effectiveness
    /// (+0.1 when advice was followed, -0.05 otherwise, clamped to [0, 1]),
    /// and adapts the user's preferences: very low satisfaction on a long
    /// message flips the short-message preference, very high satisfaction
    /// marks the category as liked.
    ///
    /// Returns `false` (after logging a warning) when the interaction is not
    /// in the retained history.
    pub fn process_feedback(
        &mut self,
        user_id: &str,
        interaction_id: Uuid,
        feedback: &Feedback,
    ) -> bool {
        let interaction = self
            .history
            .iter()
            .find(|i| i.user_id == user_id && i.id == interaction_id);

        let Some(interaction) = interaction else {
            tracing::warn!(user_id, %interaction_id, "interaction not found for feedback");
            return false;
        };

        self.metrics.user_engagement =
            self.metrics.user_engagement * 0.9 + feedback.satisfaction * 0.1;

        let effectiveness_boost = if feedback.followed_advice { 0.1 } else { -0.05 };
        self.metrics.effectiveness_score =
            (self.metrics.effectiveness_score + effectiveness_boost).clamp(0.0, 1.0);

        let message_len = interaction.message.len();
        let category = interaction.category;
        if let Some(profile) = self.profiles.get_mut(user_id) {
            if feedback.satisfaction < LOW_SATISFACTION {
                if message_len > LONG_MESSAGE_LEN {
                    profile.preferences.prefers_short_messages = true;
                }
            } else if feedback.satisfaction > HIGH_SATISFACTION
                && !profile.preferences.liked_categories.contains(&category)
            {
                profile.preferences.liked_categories.push(category);
            }
        }

        tracing::info!(user_id, satisfaction = feedback.satisfaction, "processed feedback");
        true
    }

    /// Build a snapshot performance report.
    pub fn performance_report(&self) -> PerformanceReport {
        let mut categories_used: Vec<Category> = Vec::new();
        for interaction in &self.history {
            if !categories_used.contains(&interaction.category) {
                categories_used.push(interaction.category);
            }
        }

        PerformanceReport {
            total_messages: self.metrics.messages_sent,
            avg_user_engagement: self.metrics.user_engagement,
            effectiveness_score: self.metrics.effectiveness_score,
            active_users: self.profiles.len(),
            categories_used: categories_used.len(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Environment, EnergyLevel, Location, NoiseLevel, StressLevel, UserState};
    use crate::profile::CommunicationStyle;

    fn stressed_afternoon_context() -> UserContext {
        let mut ctx = UserContext::at_hour(14).unwrap();
        ctx.state = UserState { energy: EnergyLevel::Low, stress: StressLevel::High };
        ctx.environment = Environment { noise: NoiseLevel::High, location: Location::Other };
        ctx
    }

    #[test]
    fn test_coach_user_creates_default_profile() {
        let mut coach = Coach::with_seed(1);
        let ctx = UserContext::at_hour(0).unwrap();

        assert!(coach.profile("u-1").is_none());
        coach.coach_user("u-1", &ctx);
        let profile = coach.profile("u-1").unwrap();
        assert_eq!(profile.communication_style, CommunicationStyle::Friendly);
    }

    #[test]
    fn test_coach_user_picks_most_relevant_category() {
        let mut coach = Coach::with_seed(1);
        let outcome = coach.coach_user("u-1", &stressed_afternoon_context());

        // wellbeing = 0.5 + 0.2 (time) + 0.4 (low energy) + 0.5 (stress) -> 1.0
        assert_eq!(outcome.category, Category::Wellbeing);
        assert_eq!(outcome.relevance, 1.0);
        assert!(!outcome.message.is_empty());
    }

    #[test]
    fn test_coach_user_records_history_and_metrics() {
        let mut coach = Coach::with_seed(1);
        let ctx = UserContext::at_hour(10).unwrap();

        let outcome = coach.coach_user("u-1", &ctx);
        assert_eq!(coach.history().len(), 1);
        assert_eq!(coach.history()[0].id, outcome.interaction_id);
        assert_eq!(coach.metrics().messages_sent, 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut coach = Coach::with_seed(1).with_history_limit(3);
        let ctx = UserContext::at_hour(0).unwrap();

        for i in 0..5 {
            coach.coach_user(&format!("u-{i}"), &ctx);
        }
        assert_eq!(coach.history().len(), 3);
        // Oldest entries were evicted.
        assert_eq!(coach.history()[0].user_id, "u-2");
        assert_eq!(coach.metrics().messages_sent, 5);
    }

    #[test]
    fn test_feedback_updates_metrics() {
        let mut coach = Coach::with_seed(1);
        let ctx = UserContext::at_hour(0).unwrap();
        let outcome = coach.coach_user("u-1", &ctx);

        let applied = coach.process_feedback(
            "u-1",
            outcome.interaction_id,
            &Feedback { satisfaction: 0.8, usefulness: 0.9, followed_advice: true },
        );
        assert!(applied);
        assert!((coach.metrics().user_engagement - 0.08).abs() < 1e-9);
        assert!((coach.metrics().effectiveness_score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_effectiveness_clamps_at_zero() {
        let mut coach = Coach::with_seed(1);
        let ctx = UserContext::at_hour(0).unwrap();
        let outcome = coach.coach_user("u-1", &ctx);

        coach.process_feedback(
            "u-1",
            outcome.interaction_id,
            &Feedback { satisfaction: 0.5, usefulness: 0.5, followed_advice: false },
        );
        assert_eq!(coach.metrics().effectiveness_score, 0.0);
    }

    #[test]
    fn test_feedback_for_unknown_interaction_is_noop() {
        let mut coach = Coach::with_seed(1);
        let ctx = UserContext::at_hour(0).unwrap();
        coach.coach_user("u-1", &ctx);

        let applied = coach.process_feedback(
            "u-1",
            Uuid::new_v4(),
            &Feedback { satisfaction: 1.0, usefulness: 1.0, followed_advice: true },
        );
        assert!(!applied);
        assert_eq!(coach.metrics().user_engagement, 0.0);
        assert_eq!(coach.metrics().effectiveness_score, 0.0);
    }

    #[test]
    fn test_low_satisfaction_on_long_message_adapts_preferences() {
        let mut coach = Coach::with_seed(1);
        // Stressed afternoon yields a wellbeing message; the name prefix plus
        // the encouraging prefix push it past the long-message threshold.
        coach.set_profile(
            UserProfile::new("u-1")
                .with_name("Alexandra")
                .with_style(CommunicationStyle::Encouraging),
        );
        let outcome = coach.coach_user("u-1", &stressed_afternoon_context());
        assert!(outcome.message.len() > LONG_MESSAGE_LEN);

        coach.process_feedback(
            "u-1",
            outcome.interaction_id,
            &Feedback { satisfaction: 0.1, usefulness: 0.2, followed_advice: false },
        );
        assert!(coach.profile("u-1").unwrap().preferences.prefers_short_messages);
    }

    #[test]
    fn test_high_satisfaction_marks_category_liked() {
        let mut coach = Coach::with_seed(1);
        let outcome = coach.coach_user("u-1", &stressed_afternoon_context());

        coach.process_feedback(
            "u-1",
            outcome.interaction_id,
            &Feedback { satisfaction: 0.9, usefulness: 0.9, followed_advice: true },
        );
        let profile = coach.profile("u-1").unwrap();
        assert_eq!(profile.preferences.liked_categories, vec![Category::Wellbeing]);
    }

    #[test]
    fn test_performance_report() {
        let mut coach = Coach::with_seed(1);
        coach.coach_user("u-1", &UserContext::at_hour(10).unwrap());
        coach.coach_user("u-2", &stressed_afternoon_context());

        let report = coach.performance_report();
        assert_eq!(report.total_messages, 2);
        assert_eq!(report.active_users, 2);
        assert_eq!(report.categories_used, 2);
    }
}
