pub mod coach;
pub mod config;
pub mod score;

use chrono::{Duration, Utc};
use clap::Args;

use coachkit_core::{Environment, EnergyLevel, Location, NoiseLevel, StressLevel, UserContext};

/// Context flags shared by the score and coach commands.
///
/// Categorical values are free-form strings: unrecognized values are
/// accepted and simply carry no scoring effect, matching the library's
/// treatment of absent fields.
#[derive(Args)]
pub struct ContextArgs {
    /// Hour of day (0-23); defaults to the current local hour
    #[arg(long)]
    pub hour: Option<u32>,
    /// Energy level (low/medium/high)
    #[arg(long)]
    pub energy: Option<String>,
    /// Stress level (low/medium/high)
    #[arg(long)]
    pub stress: Option<String>,
    /// Ambient noise level (low/medium/high)
    #[arg(long)]
    pub noise: Option<String>,
    /// Current location (home/office/...)
    #[arg(long)]
    pub location: Option<String>,
}

impl ContextArgs {
    /// Build a context from the flags. When `--hour` is absent, the current
    /// time shifted by the configured timezone offset is used.
    pub fn build(&self, timezone_offset_hours: i32) -> Result<UserContext, Box<dyn std::error::Error>> {
        let mut context = match self.hour {
            Some(hour) => UserContext::at_hour(hour)?,
            None => UserContext::new(Utc::now() + Duration::hours(timezone_offset_hours as i64)),
        };

        if let Some(ref raw) = self.energy {
            context.state.energy = EnergyLevel::parse(raw);
        }
        if let Some(ref raw) = self.stress {
            context.state.stress = StressLevel::parse(raw);
        }
        context.environment = Environment {
            noise: self.noise.as_deref().map(NoiseLevel::parse).unwrap_or_default(),
            location: self.location.as_deref().map(Location::parse).unwrap_or_default(),
        };

        Ok(context)
    }
}
