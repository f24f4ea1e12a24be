pub mod profile;

pub use profile::LifeStageProfile;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::utils::error::Result;
    use crate::utils::parse;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "age-engine")]
    #[command(about = "Chronological engine: age breakdown, zodiac, birthday cycle, life-stage estimates")]
    pub struct CliConfig {
        /// Birth date, YYYY-MM-DD with optional THH:MM[:SS]
        #[arg(long)]
        pub birth: String,

        /// Reference date in the same format; defaults to now
        #[arg(long)]
        pub reference: Option<String>,

        /// TOML profile with life-stage inputs (country, lifestyle, pet, pregnancy)
        #[arg(long)]
        pub profile: Option<String>,

        /// Country code for the life-expectancy table, overriding the profile
        #[arg(long)]
        pub country: Option<String>,

        /// Sex for the life-expectancy table ('M' or 'F'), overriding the profile
        #[arg(long)]
        pub sex: Option<String>,

        /// Print the full report as JSON instead of the human summary
        #[arg(long)]
        pub json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            parse::parse_instant("birth", &self.birth)?;
            if let Some(reference) = &self.reference {
                parse::parse_instant("reference", reference)?;
            }
            if let Some(sex) = &self.sex {
                sex.parse::<crate::domain::model::Sex>()?;
            }
            Ok(())
        }
    }
}
