// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use lazy_regex::{regex_captures, regex_is_match};
use std::{net::Ipv4Addr, str::FromStr};

#[derive(Debug, PartialEq, Eq, foxerror::FoxError)]
pub enum Error {
    /// expected a number or an ipv4 address
    NotNumeral(String),
    /// number does not fit in 32 bits
    Overflow(String),
    /// invalid ipv4 address
    BadAddress(String),
}

/// one end of a range, remembering how it was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    value: u32,
    ipv4: bool,
}

impl Endpoint {
    const fn number(value: u32) -> Self {
        Self { value, ipv4: false }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn is_ipv4(&self) -> bool {
        self.ipv4
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((_, hex)) = regex_captures!(r"^0[xX]([0-9a-fA-F]+)$", s) {
            return u32::from_str_radix(hex, 16)
                .map(Self::number)
                .map_err(|_| Error::Overflow(s.to_string()));
        }
        if regex_is_match!(r"^[0-9]+$", s) {
            return s
                .parse()
                .map(Self::number)
                .map_err(|_| Error::Overflow(s.to_string()));
        }
        if regex_is_match!(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$", s) {
            let addr: Ipv4Addr = s.parse().map_err(|_| Error::BadAddress(s.to_string()))?;
            return Ok(Self {
                value: addr.into(),
                ipv4: true,
            });
        }
        Err(Error::NotNumeral(s.to_string()))
    }
}
