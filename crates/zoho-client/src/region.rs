//! Zoho data centers and the base URLs they serve.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Zoho data center hosting an organization's account.
///
/// Every product host and the accounts server are derived from the
/// region's domain, e.g. `people.zoho.eu` and `accounts.zoho.eu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// United States (`zoho.com`).
    #[default]
    Us,
    /// Europe (`zoho.eu`).
    Eu,
    /// India (`zoho.in`).
    In,
    /// Australia (`zoho.com.au`).
    Au,
    /// Japan (`zoho.jp`).
    Jp,
    /// Canada (`zohocloud.ca`).
    Ca,
    /// China (`zoho.com.cn`).
    Cn,
    /// Saudi Arabia (`zoho.sa`).
    Sa,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 8] = [
        Region::Us,
        Region::Eu,
        Region::In,
        Region::Au,
        Region::Jp,
        Region::Ca,
        Region::Cn,
        Region::Sa,
    ];

    /// Short code used in configuration (`us`, `eu`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::In => "in",
            Region::Au => "au",
            Region::Jp => "jp",
            Region::Ca => "ca",
            Region::Cn => "cn",
            Region::Sa => "sa",
        }
    }

    /// Registrable domain of the data center.
    pub fn domain(&self) -> &'static str {
        match self {
            Region::Us => "zoho.com",
            Region::Eu => "zoho.eu",
            Region::In => "zoho.in",
            Region::Au => "zoho.com.au",
            Region::Jp => "zoho.jp",
            Region::Ca => "zohocloud.ca",
            Region::Cn => "zoho.com.cn",
            Region::Sa => "zoho.sa",
        }
    }

    /// OAuth accounts server.
    pub fn accounts_url(&self) -> String {
        format!("https://accounts.{}", self.domain())
    }

    /// Zoho People REST API root.
    pub fn people_api_url(&self) -> String {
        format!("https://people.{}/people/api", self.domain())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Accepts region codes as well as bare domain suffixes (`com`, `com.au`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let region = match normalized.as_str() {
            "us" | "com" => Region::Us,
            "eu" => Region::Eu,
            "in" => Region::In,
            "au" | "com.au" => Region::Au,
            "jp" => Region::Jp,
            "ca" | "zohocloud.ca" => Region::Ca,
            "cn" | "com.cn" => Region::Cn,
            "sa" => Region::Sa,
            _ => {
                return Err(Error::new(ErrorKind::Config(format!(
                    "Unknown Zoho region: {}",
                    s
                ))))
            }
        };
        Ok(region)
    }
}
