//! Application configuration
//!
//! Configuration is read once at startup from the environment (and a `.env`
//! file when present). Every value is optional; unset values fall back to the
//! built-in defaults, including the default shipping rate table.
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `APP_HOST` | `0.0.0.0` |
//! | `APP_PORT` | `8080` |
//! | `SHIPPING_ZONE1_CITIES` | `Casablanca,Mohammédia` |
//! | `SHIPPING_ZONE1_FLAT_COST` | `25` |
//! | `SHIPPING_ZONE1_FREE_THRESHOLD` | `400` |
//! | `SHIPPING_ZONE2_FLAT_COST` | `45` |
//! | `SHIPPING_ZONE2_FREE_THRESHOLD` | `600` |

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::shipping::{
    DEFAULT_ZONE1_CITIES, RateTable, ShippingRate, ShippingZone, default_rate_table,
};
use crate::simple_types::Amount;

const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8080;

/// Configuration loading errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set to a value that cannot be used
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable
        key: String,
        /// Why the value is invalid
        message: String,
    },
}

impl ConfigError {
    fn invalid_value(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Shipping rate table settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingConfig {
    /// Cities billed at the Zone1 rate
    pub zone1_cities: Vec<String>,
    /// Zone1 rate
    pub zone1_rate: ShippingRate,
    /// Zone2 rate
    pub zone2_rate: ShippingRate,
}

impl ShippingConfig {
    /// Builds the immutable rate table these settings describe
    #[must_use]
    pub fn to_rate_table(&self) -> RateTable {
        RateTable::new(&self.zone1_cities, self.zone1_rate, self.zone2_rate)
    }
}

impl Default for ShippingConfig {
    fn default() -> Self {
        let table = default_rate_table();
        Self {
            zone1_cities: DEFAULT_ZONE1_CITIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            zone1_rate: *table.rate_for(ShippingZone::Zone1),
            zone2_rate: *table.rate_for(ShippingZone::Zone2),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address
    pub app_host: String,
    /// HTTP server port
    pub app_port: u16,
    /// Shipping rate table settings
    pub shipping: ShippingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_APP_HOST.to_string(),
            app_port: DEFAULT_APP_PORT,
            shipping: ShippingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is set but unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use storefront_checkout::config::AppConfig;
    ///
    /// let variables = HashMap::from([("APP_PORT", "9000"), ("SHIPPING_ZONE1_CITIES", "Rabat, Salé")]);
    /// let config = AppConfig::from_lookup(|key| variables.get(key).map(ToString::to_string)).unwrap();
    ///
    /// assert_eq!(config.app_port, 9000);
    /// assert_eq!(config.shipping.zone1_cities, vec!["Rabat", "Salé"]);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_host = lookup("APP_HOST").unwrap_or(defaults.app_host);
        let app_port = parse_or(&lookup, "APP_PORT", defaults.app_port)?;

        let zone1_cities = lookup("SHIPPING_ZONE1_CITIES").map_or(
            defaults.shipping.zone1_cities,
            |value| parse_city_list(&value),
        );
        let zone1_rate = ShippingRate::new(
            amount_or(
                &lookup,
                "SHIPPING_ZONE1_FLAT_COST",
                defaults.shipping.zone1_rate.flat_cost(),
            )?,
            amount_or(
                &lookup,
                "SHIPPING_ZONE1_FREE_THRESHOLD",
                defaults.shipping.zone1_rate.free_threshold(),
            )?,
        );
        let zone2_rate = ShippingRate::new(
            amount_or(
                &lookup,
                "SHIPPING_ZONE2_FLAT_COST",
                defaults.shipping.zone2_rate.flat_cost(),
            )?,
            amount_or(
                &lookup,
                "SHIPPING_ZONE2_FREE_THRESHOLD",
                defaults.shipping.zone2_rate.free_threshold(),
            )?,
        );

        Ok(Self {
            app_host,
            app_port,
            shipping: ShippingConfig {
                zone1_cities,
                zone1_rate,
                zone2_rate,
            },
        })
    }

    /// `host:port` string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::invalid_value(key, error.to_string()))
    })
}

fn amount_or<F>(lookup: &F, key: &str, default: Amount) -> Result<Amount, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(_) => {
            let value: Decimal = parse_or(lookup, key, Decimal::ZERO)?;
            Amount::create_field(key, value)
                .map_err(|error| ConfigError::invalid_value(key, error.message))
        }
    }
}

/// Splits a comma separated city list, dropping blank entries
fn parse_city_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(ToString::to_string)
        .collect()
}
