#![allow(dead_code)]

use cmdstream::config::{ColorsSection, Config, RawConfigFile, RunnerSection};
use cmdstream::types::ResolvePolicy;

/// Builder for `Config` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                colors: ColorsSection::default(),
                runner: RunnerSection::default(),
            },
        }
    }

    pub fn stdout_color(mut self, value: &str) -> Self {
        self.config.colors.stdout = Some(value.to_string());
        self
    }

    pub fn stderr_color(mut self, value: &str) -> Self {
        self.config.colors.stderr = Some(value.to_string());
        self
    }

    pub fn status_color(mut self, value: &str) -> Self {
        self.config.colors.status = Some(value.to_string());
        self
    }

    pub fn reset(mut self, value: &str) -> Self {
        self.config.colors.reset = Some(value.to_string());
        self
    }

    pub fn resolve(mut self, policy: ResolvePolicy) -> Self {
        self.config.runner.resolve = policy;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> Config {
        Config::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
