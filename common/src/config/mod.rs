pub mod aws_client_config;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

#[derive(Default, Serialize, Deserialize, Clone, Eq, PartialEq, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the test configuration for the project. This is used
    /// for unit and integration tests.
    ///
    /// This will load the following files, in order:
    ///  - OS environment variables
    ///  - .env.test.local
    ///  - .env.test
    ///  - .env.local
    ///  - .env
    ///
    /// Variables are not overriden, the first file to contain
    /// a definition for a variable is the one that will be set.
    pub fn load_test<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.test.local").ok();
        dotenv::from_filename(".env.test").ok();
        ConfigLoader::load::<TConfig>()
    }

    /// Loads the default configuration for the project. This is the
    /// configuration used by the deployed lambdas.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - `.env.development.local` then `.env.development`
    /// - `.env.qa.local` then `.env.qa`
    /// - `.env.staging.local` then `.env.staging`
    /// - `.env.production.local` then `.env.production`
    /// - `.env.local`
    /// - `.env`
    ///
    /// Variables are not overriden, the first file to contain
    /// a definition for a variable is the one that will be set.
    ///
    /// Panics if the environment does not deserialize into `TConfig`; lambdas
    /// must not start with a broken configuration.
    pub fn load_default<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{environment}.local")).ok();
                dotenv::from_filename(format!(".env.{environment}")).ok();
            }
        }

        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        envy::from_env::<TConfig>().expect("Could not load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use rstest::rstest;

    #[rstest]
    #[case::development(Environment::Development, "development")]
    #[case::qa(Environment::QA, "qa")]
    #[case::production(Environment::Production, "production")]
    fn environment_names_match_dotenv_suffixes(
        #[case] environment: Environment,
        #[case] expected: &str,
    ) {
        assert_eq!(expected, environment.to_string());
    }
}
