use crate::Error;
use std::{env, fmt, str::FromStr};
use zbase32::Policy;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Unknown mode '{}'", name))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    policy: Policy,
    mode: Mode,
    verbose: bool,
}

fn var_map<T, E: fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    f: impl FnOnce(&str) -> Result<T, E>,
    default: T,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {} ({})", key, value, error))),
        None => Ok(default),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let policy = var_map(&lookup, "ZBASE32_POLICY", |policy| policy.parse(), Policy::Standard)?;
        let mode = var_map(&lookup, "ZBASE32_MODE", |mode| mode.parse(), Mode::Encode)?;
        let verbose = var_map(&lookup, "ZBASE32_VERBOSE", |verbose| verbose.parse(), false)?;
        Ok(Self { policy, mode, verbose })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
