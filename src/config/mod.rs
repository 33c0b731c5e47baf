// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Environment-backed search configuration.
//!
//! Every setting has a default. Override with `LIBRERO_*` environment
//! variables; the CLI's flags override both.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::search::{DEFAULT_FALLBACK_LIMIT, DEFAULT_RANK_LIMIT};

/// Catalog rows considered per request when nothing else is configured.
pub const DEFAULT_MAX_CATALOG_ITEMS: usize = 10_000;

/// Limits applied to one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ranked results kept. Default: `5`.
    pub rank_limit: usize,

    /// Fallback items offered when nothing ranks. Default: `3`.
    pub fallback_limit: usize,

    /// Rows read from the catalog; the rest are ignored. Default: `10_000`.
    pub max_catalog_items: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rank_limit: DEFAULT_RANK_LIMIT,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            max_catalog_items: DEFAULT_MAX_CATALOG_ITEMS,
        }
    }
}

impl SearchConfig {
    pub const ENV_RANK_LIMIT: &'static str = "LIBRERO_RANK_LIMIT";
    pub const ENV_FALLBACK_LIMIT: &'static str = "LIBRERO_FALLBACK_LIMIT";
    pub const ENV_MAX_CATALOG_ITEMS: &'static str = "LIBRERO_MAX_CATALOG_ITEMS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            rank_limit: Self::parse_usize_from_env(Self::ENV_RANK_LIMIT, defaults.rank_limit)?,
            fallback_limit: Self::parse_usize_from_env(
                Self::ENV_FALLBACK_LIMIT,
                defaults.fallback_limit,
            )?,
            max_catalog_items: Self::parse_usize_from_env(
                Self::ENV_MAX_CATALOG_ITEMS,
                defaults.max_catalog_items,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace limits with explicit overrides, where given.
    pub fn with_overrides(self, rank_limit: Option<usize>, fallback_limit: Option<usize>) -> Self {
        Self {
            rank_limit: rank_limit.unwrap_or(self.rank_limit),
            fallback_limit: fallback_limit.unwrap_or(self.fallback_limit),
            ..self
        }
    }

    /// Rejects zero limits; a zero limit would silently empty every response.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (Self::ENV_RANK_LIMIT, self.rank_limit),
            (Self::ENV_FALLBACK_LIMIT, self.fallback_limit),
            (Self::ENV_MAX_CATALOG_ITEMS, self.max_catalog_items),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(ConfigError::ZeroLimit { name });
            }
        }
        Ok(())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
