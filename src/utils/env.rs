use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// MevnEnv allows us to mock environment variables while
/// running tests. That way tests can run in parallel and the
/// local development environment does not leak into them.
///
/// Values inserted at runtime only shadow the process environment,
/// they are never written back to it.
#[derive(Debug, Clone)]
pub struct MevnEnv {
    overrides: HashMap<String, String>,
    read_process_env: bool,
}

impl Default for MevnEnv {
    fn default() -> MevnEnv {
        MevnEnv::new()
    }
}

impl MevnEnv {
    /// creates a new environment variable store
    pub fn new() -> MevnEnv {
        MevnEnv {
            overrides: HashMap::new(),
            read_process_env: !cfg!(test),
        }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: MevnEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match self.overrides.get(&key_str) {
            Some(value) => Some(value.to_owned()),
            None if self.read_process_env => match env::var(&key_str) {
                Ok(data) => Some(data),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    ));
                }
            },
            None => None,
        };

        match &result {
            Some(value) => tracing::debug!("read environment variable ${} = {}", &key_str, value),
            None => tracing::trace!("could not find ${}", &key_str),
        }

        Ok(result)
    }

    /// shadows an environment variable with a value
    pub fn insert(&mut self, key: MevnEnvKey, value: &str) {
        tracing::debug!("overriding ${} = {}", key, value);
        self.overrides.insert(key.to_string(), value.into());
    }

    /// drops a previously inserted override
    pub fn remove(&mut self, key: MevnEnvKey) {
        tracing::debug!("removing override for ${}", key);
        self.overrides.remove(&key.to_string());
    }
}

/// MevnEnvKey defines all of the environment variables respected by mevn.
/// Each one is prefixed with `MEVN_` and the suffix is the variant name
/// converted from CamelCase to SHOUTY_SNAKE_CASE, so
/// `MevnEnvKey::GitPath.to_string()` becomes `MEVN_GIT_PATH`.
#[derive(Debug, Copy, Clone)]
pub enum MevnEnvKey {
    GitPath,
    Log,
}

impl fmt::Display for MevnEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        write!(fmt, "MEVN_{}", &dbg)
    }
}
