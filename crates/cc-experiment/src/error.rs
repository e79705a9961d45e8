use cc_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("scenario set is empty")]
    NoScenarios,

    #[error("duplicate scenario name {0:?}")]
    DuplicateScenario(String),

    #[error("baseline scenario {0:?} is not in the set")]
    UnknownBaseline(String),

    #[error("scenario {name:?}: {source}")]
    Scenario {
        name:   String,
        #[source]
        source: SimError,
    },

    #[error("scenario file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExperimentResult<T> = Result<T, ExperimentError>;
