//! # Coachkit Core Library
//!
//! This library provides the core business logic for Coachkit, a contextual
//! behavioral coaching engine. It follows a CLI-first philosophy: every
//! operation is available through the `coachkit` binary, with the library
//! usable as an embedded component by other frontends.
//!
//! ## Architecture
//!
//! - **Scoring**: A pure, stateless scorer that maps a user context snapshot
//!   (time of day, energy, stress, environment) to relevance scores for the
//!   four coaching categories
//! - **Messages**: A fixed template catalog with context- and
//!   preference-aware selection
//! - **Coach**: Orchestration over scoring and message generation, with
//!   per-user profiles, interaction history, and feedback-driven metrics
//! - **Config**: TOML-based configuration under `~/.config/coachkit/`
//!
//! ## Key Components
//!
//! - [`scoring::evaluate`]: Context scoring core
//! - [`Coach`]: Coaching orchestrator
//! - [`UserContext`]: Typed context snapshot
//! - [`Config`]: Application configuration management

pub mod coach;
pub mod config;
pub mod context;
pub mod error;
pub mod messages;
pub mod personalize;
pub mod profile;
pub mod scoring;

pub use coach::{Coach, CoachingOutcome, Feedback, Interaction, PerformanceMetrics, PerformanceReport};
pub use config::Config;
pub use context::{Environment, EnergyLevel, Location, NoiseLevel, StressLevel, UserContext, UserState};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use profile::{CommunicationStyle, Preferences, UserProfile};
pub use scoring::{Category, CategoryScores};
