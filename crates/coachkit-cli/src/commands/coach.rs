//! Coaching suggestion command.

use clap::Args;

use coachkit_core::{Coach, CommunicationStyle, Config, UserProfile};

use super::ContextArgs;

#[derive(Args)]
pub struct CoachArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// User id to coach
    #[arg(long, default_value = "local")]
    pub user: String,
    /// Display name used for message personalization
    #[arg(long)]
    pub name: Option<String>,
    /// Communication style (friendly/direct/encouraging)
    #[arg(long)]
    pub style: Option<String>,
    /// Emit the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CoachArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let context = args.context.build(config.display.timezone_offset_hours)?;

    let style = args
        .style
        .as_deref()
        .map(CommunicationStyle::parse)
        .unwrap_or(config.coaching.communication_style);
    let mut profile = UserProfile::new(args.user.as_str()).with_style(style);
    if let Some(name) = args.name {
        profile = profile.with_name(name);
    }

    let mut coach = Coach::new().with_history_limit(config.coaching.history_limit);
    coach.set_profile(profile);
    let outcome = coach.coach_user(&args.user, &context);

    if args.json || config.display.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("=== Coaching Suggestion ===");
    println!("  Category:  {}", outcome.category.name());
    println!("  Relevance: {:.0}%", outcome.relevance * 100.0);
    println!("\n  {}", outcome.message);
    Ok(())
}
