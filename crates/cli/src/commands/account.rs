//! Account commands: register, login, logout, whoami, survey.

use clap::Subcommand;

use pawsome_core::{
    ActivityLevel, ExperienceLevel, HomeType, Personality, Preferences,
};
use pawsome_client::api::{Credentials, RegisterProfile};
use pawsome_client::state::AppState;

/// Errors specific to account commands.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A survey answer is outside the fixed vocabulary.
    #[error("invalid survey answer for {field}: {value}")]
    InvalidAnswer {
        field: &'static str,
        value: String,
    },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign in
    Login {
        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out (clears the cart)
    Logout,
    /// Show the signed-in identity
    Whoami {
        /// Ask the backend instead of the local session
        #[arg(long)]
        refresh: bool,
    },
    /// Submit the lifestyle survey used for recommendations
    Survey {
        /// apartment, house, or farm
        #[arg(long)]
        home_type: String,

        /// low, moderate, or high
        #[arg(long)]
        activity_level: String,

        /// Whether kids live in the home
        #[arg(long)]
        has_kids: bool,

        /// beginner, intermediate, or experienced
        #[arg(long)]
        experience_level: String,

        /// playful, calm, independent, or social
        #[arg(long)]
        personality: String,
    },
}

pub async fn run(
    state: &AppState,
    action: AccountAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AccountAction::Register {
            name,
            email,
            password,
        } => {
            let identity = state
                .session()
                .register(&RegisterProfile {
                    name,
                    email,
                    password,
                })
                .await?;
            println!("Welcome, {}! Signed in as {}", identity.name, identity.email);
        }
        AccountAction::Login { email, password } => {
            let identity = state
                .session()
                .login(&Credentials { email, password })
                .await?;
            println!("Signed in as {} ({})", identity.name, identity.role);
        }
        AccountAction::Logout => {
            state.session().logout()?;
            println!("Signed out; cart cleared");
        }
        AccountAction::Whoami { refresh } => {
            let identity = if refresh {
                Some(state.session().fetch_self().await?)
            } else {
                state.session().current()
            };

            match identity {
                Some(identity) => {
                    println!("{} <{}> role={}", identity.name, identity.email, identity.role);
                    match identity.preferences {
                        Some(prefs) => println!(
                            "survey: home={:?} activity={:?} kids={} experience={:?} personality={:?}",
                            prefs.home_type,
                            prefs.activity_level,
                            prefs.has_kids,
                            prefs.experience_level,
                            prefs.preferred_personality
                        ),
                        None => println!("survey: not taken"),
                    }
                }
                None => println!("Not signed in"),
            }
        }
        AccountAction::Survey {
            home_type,
            activity_level,
            has_kids,
            experience_level,
            personality,
        } => {
            let prefs = Preferences {
                home_type: parse_home_type(&home_type)?,
                activity_level: parse_activity_level(&activity_level)?,
                has_kids,
                experience_level: parse_experience_level(&experience_level)?,
                preferred_personality: parse_personality(&personality)?,
            };
            state.session().update_preferences(prefs).await?;
            println!("Survey saved; run `paws recommendations` to see matches");
        }
    }
    Ok(())
}

// The survey vocabulary is closed; reject anything else up front rather than
// letting the backend bounce it.

fn parse_home_type(value: &str) -> Result<HomeType, AccountError> {
    match value {
        "apartment" => Ok(HomeType::Apartment),
        "house" => Ok(HomeType::House),
        "farm" => Ok(HomeType::Farm),
        _ => Err(AccountError::InvalidAnswer {
            field: "home-type",
            value: value.to_owned(),
        }),
    }
}

fn parse_activity_level(value: &str) -> Result<ActivityLevel, AccountError> {
    match value {
        "low" => Ok(ActivityLevel::Low),
        "moderate" => Ok(ActivityLevel::Moderate),
        "high" => Ok(ActivityLevel::High),
        _ => Err(AccountError::InvalidAnswer {
            field: "activity-level",
            value: value.to_owned(),
        }),
    }
}

fn parse_experience_level(value: &str) -> Result<ExperienceLevel, AccountError> {
    match value {
        "beginner" => Ok(ExperienceLevel::Beginner),
        "intermediate" => Ok(ExperienceLevel::Intermediate),
        "experienced" => Ok(ExperienceLevel::Experienced),
        _ => Err(AccountError::InvalidAnswer {
            field: "experience-level",
            value: value.to_owned(),
        }),
    }
}

fn parse_personality(value: &str) -> Result<Personality, AccountError> {
    match value {
        "playful" => Ok(Personality::Playful),
        "calm" => Ok(Personality::Calm),
        "independent" => Ok(Personality::Independent),
        "social" => Ok(Personality::Social),
        _ => Err(AccountError::InvalidAnswer {
            field: "personality",
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_vocabulary_parses() {
        assert_eq!(parse_home_type("farm").ok(), Some(HomeType::Farm));
        assert_eq!(
            parse_activity_level("moderate").ok(),
            Some(ActivityLevel::Moderate)
        );
        assert_eq!(
            parse_experience_level("intermediate").ok(),
            Some(ExperienceLevel::Intermediate)
        );
        assert_eq!(parse_personality("social").ok(), Some(Personality::Social));
    }

    #[test]
    fn test_unknown_answers_are_rejected() {
        assert!(parse_home_type("boat").is_err());
        assert!(parse_activity_level("extreme").is_err());
        assert!(parse_experience_level("guru").is_err());
        assert!(parse_personality("grumpy").is_err());
    }
}
