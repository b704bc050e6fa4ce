use crate::error::Result;
use crate::locale::Locale;
use crate::numerals::parse_numeral;

/// Unit words for one currency, as spoken in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyUnits {
    pub major_singular: &'static str,
    pub major_plural: &'static str,
    pub minor_singular: &'static str,
    pub minor_plural: &'static str,
    /// Said for an amount of exactly zero.
    pub zero: &'static str,
}

pub const DOLLARS: CurrencyUnits = CurrencyUnits {
    major_singular: "dollar",
    major_plural: "dollars",
    minor_singular: "cent",
    minor_plural: "cents",
    zero: "zero dollars",
};

// Azerbaijani and Turkish nouns stay singular after a numeral.
pub const DOLLARS_AZ: CurrencyUnits = CurrencyUnits {
    major_singular: "dollar",
    major_plural: "dollar",
    minor_singular: "sent",
    minor_plural: "sent",
    zero: "sıfır dollar",
};

pub const MANAT: CurrencyUnits = CurrencyUnits {
    major_singular: "manat",
    major_plural: "manat",
    minor_singular: "qəpik",
    minor_plural: "qəpik",
    zero: "sıfır manat",
};

pub const DOLLARS_TR: CurrencyUnits = CurrencyUnits {
    major_singular: "dolar",
    major_plural: "dolar",
    minor_singular: "sent",
    minor_plural: "sent",
    zero: "sıfır dolar",
};

pub const LIRA: CurrencyUnits = CurrencyUnits {
    major_singular: "lira",
    major_plural: "lira",
    minor_singular: "kuruş",
    minor_plural: "kuruş",
    zero: "sıfır lira",
};

/// An amount such as `12.50`, split at the decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub major: u64,
    pub minor: u64,
    pub raw: String,
}

impl CurrencyAmount {
    /// `Ok(None)` when `raw` has more than one decimal point.
    ///
    /// Empty parts count as zero and the fractional part is taken as the
    /// integer it spells, so `0.5` is five minor units.
    pub fn parse(raw: &str, locale: Locale) -> Result<Option<Self>> {
        let digits = raw.replace(',', "");
        let parts: Vec<&str> = digits.split('.').collect();
        if parts.len() > 2 {
            return Ok(None);
        }

        let part = |s: &str| -> Result<u64> {
            if s.is_empty() {
                Ok(0)
            } else {
                parse_numeral(s, locale)
            }
        };

        let minor = match parts.get(1) {
            Some(&fraction) => part(fraction)?,
            None => 0,
        };

        Ok(Some(Self {
            major: part(parts[0])?,
            minor,
            raw: raw.to_string(),
        }))
    }
}

impl CurrencyUnits {
    /// Spells a matched amount with unit words, leaving the numerals as
    /// digits for the cardinal rule that runs later.
    pub fn spell(&self, raw: &str, locale: Locale) -> Result<String> {
        let Some(amount) = CurrencyAmount::parse(raw, locale)? else {
            return Ok(format!("{raw} {}", self.major_plural));
        };

        let major = |n: u64| if n == 1 { self.major_singular } else { self.major_plural };
        let minor = |n: u64| if n == 1 { self.minor_singular } else { self.minor_plural };

        Ok(match (amount.major, amount.minor) {
            (0, 0) => self.zero.to_string(),
            (m, 0) => format!("{m} {}", major(m)),
            (0, c) => format!("{c} {}", minor(c)),
            (m, c) => format!("{m} {}, {c} {}", major(m), minor(c)),
        })
    }
}
