
#[macro_use]
mod error;

mod person;
mod scenarios;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub use crate::error::DemoError;
pub use crate::person::{emperors, Person};
pub use crate::scenarios::{Scenario, ScenarioOptions};

pub struct DemoFrontend;

impl Default for DemoFrontend {
    fn default() -> Self {
        Self
    }
}

impl DemoFrontend {
    pub fn args(application_name: &'static str) -> Command {
        Command::new(application_name)
            .about("Exercises a fixed-capacity ring buffer with a few element types")
            .arg(
                Arg::new("log-level")
                    .short('l')
                    .long("log-level")
                    .help("Set the type of log messages to print"),
            )
            .arg(
                Arg::new("scenario")
                    .short('s')
                    .long("scenario")
                    .action(ArgAction::Append)
                    .value_parser(["int", "float", "string", "person", "nested"])
                    .help("Run only the given scenario (can be repeated)"),
            )
            .arg(
                Arg::new("capacity")
                    .short('c')
                    .long("capacity")
                    .value_parser(value_parser!(isize))
                    .allow_negative_numbers(true)
                    .default_value("20")
                    .help("Capacity of the buffer used by the int scenario"),
            )
    }

    pub fn start(self, matches: ArgMatches) -> Result<(), DemoError> {
        let log_level = match matches.get_one("log-level").map(|s: &String| s.as_str()) {
            Some("trace") => log::Level::Trace,
            Some("debug") => log::Level::Debug,
            Some("info") => log::Level::Info,
            Some("warn") => log::Level::Warn,
            Some("error") => log::Level::Error,
            _ => log::Level::Info,
        };

        // Start the logger
        simple_logger::SimpleLogger::new()
            .with_level(log_level.to_level_filter())
            .without_timestamps()
            .init()?;

        let (scenarios, options) = Self::select(&matches);
        for scenario in scenarios {
            scenario.run(&options)?;
        }
        log::info!("all scenarios passed");
        Ok(())
    }

    fn select(matches: &ArgMatches) -> (Vec<Scenario>, ScenarioOptions) {
        let mut scenarios: Vec<Scenario> = matches
            .get_many::<String>("scenario")
            .map(|names| names.filter_map(|name| Scenario::from_name(name)).collect())
            .unwrap_or_default();
        if scenarios.is_empty() {
            scenarios = Scenario::ALL.to_vec();
        }
        scenarios.dedup();

        let mut options = ScenarioOptions::default();
        if let Some(capacity) = matches.get_one::<isize>("capacity") {
            options.capacity = *capacity;
        }
        (scenarios, options)
    }
}
