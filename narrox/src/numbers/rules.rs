use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::currency::{CurrencyUnits, DOLLARS, DOLLARS_AZ, DOLLARS_TR, LIRA, MANAT};
use super::words::NumberWordConverter;
use crate::error::Result;
use crate::locale::Locale;
use crate::numerals::parse_numeral;
use crate::rewrite::rewrite;

lazy_static! {
    static ref COMMA_NUM_RE: Regex = Regex::new(r"([0-9][0-9,]+[0-9])").unwrap();
    static ref POUNDS_RE: Regex = Regex::new(r"£([0-9,]*[0-9]+)").unwrap();
    static ref DOLLARS_RE: Regex = Regex::new(r"\$([0-9.,]*[0-9]+)").unwrap();
    static ref MANATS_RE: Regex = Regex::new(r"₼([0-9.,]*[0-9]+)").unwrap();
    static ref LIRAS_RE: Regex = Regex::new(r"₺([0-9.,]*[0-9]+)").unwrap();
    static ref DECIMAL_NUM_RE: Regex = Regex::new(r"([0-9]+\.[0-9]+)").unwrap();
    static ref ORDINAL_RE: Regex = Regex::new(r"[0-9]+(?i:st|nd|rd|th)").unwrap();
    static ref ORDINAL_TURKIC_RE: Regex =
        Regex::new(r"[0-9]+(?i:-?(ıncı|[iİ]nc[iİ]|uncu|üncü|nc[ıiİ]|ncu|ncü)|-(c[ıiİ]|cu|cü))").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// What a rule does with each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// `12,345` -> `12345`
    StripCommas,
    /// Drops the currency sign and puts the unit word after the amount.
    AppendUnit(&'static str),
    /// Amount with major and minor units, see [`CurrencyUnits::spell`].
    Currency(CurrencyUnits),
    /// `3.14` -> `3 <word> 14`
    DecimalPoint(&'static str),
    Ordinal,
    Cardinal,
}

impl RuleAction {
    fn expand(&self, caps: &Captures<'_>, words: &NumberWordConverter) -> Result<String> {
        match self {
            RuleAction::StripCommas => Ok(caps[1].replace(',', "")),
            RuleAction::AppendUnit(unit) => Ok(format!("{} {unit}", &caps[1])),
            RuleAction::Currency(units) => units.spell(&caps[1], words.locale()),
            RuleAction::DecimalPoint(word) => Ok(caps[1].replace('.', &format!(" {word} "))),
            RuleAction::Ordinal => words.ordinal(&caps[0]),
            RuleAction::Cardinal => words.cardinal(parse_numeral(&caps[0], words.locale())?),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    action: RuleAction,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: Regex, action: RuleAction) -> Self {
        Self {
            name,
            pattern,
            action,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// One full pass of this rule over `text`.
    pub fn apply(&self, text: &str, words: &NumberWordConverter) -> Result<String> {
        rewrite(text, &self.pattern, |caps| self.action.expand(caps, words))
    }
}

/// The ordered rule table of one locale.
///
/// Order is load-bearing: currency and decimal rules must see their digits
/// before the cardinal rule turns every remaining digit run into words.
#[derive(Debug, Clone)]
pub struct NumberRules {
    locale: Locale,
    rules: Vec<RewriteRule>,
}

impl NumberRules {
    pub fn new(locale: Locale, rules: Vec<RewriteRule>) -> Self {
        Self { locale, rules }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Azerbaijani => Self::azerbaijani(),
            Locale::Turkish => Self::turkish(),
        }
    }

    pub fn english() -> Self {
        Self::new(
            Locale::English,
            vec![
                RewriteRule::new("commas", COMMA_NUM_RE.clone(), RuleAction::StripCommas),
                RewriteRule::new("pounds", POUNDS_RE.clone(), RuleAction::AppendUnit("pounds")),
                RewriteRule::new("dollars", DOLLARS_RE.clone(), RuleAction::Currency(DOLLARS)),
                RewriteRule::new("decimal", DECIMAL_NUM_RE.clone(), RuleAction::DecimalPoint("point")),
                RewriteRule::new("ordinal", ORDINAL_RE.clone(), RuleAction::Ordinal),
                RewriteRule::new("number", NUMBER_RE.clone(), RuleAction::Cardinal),
            ],
        )
    }

    pub fn azerbaijani() -> Self {
        Self::new(
            Locale::Azerbaijani,
            vec![
                RewriteRule::new("commas", COMMA_NUM_RE.clone(), RuleAction::StripCommas),
                RewriteRule::new("pounds", POUNDS_RE.clone(), RuleAction::AppendUnit("sterlin")),
                RewriteRule::new("dollars", DOLLARS_RE.clone(), RuleAction::Currency(DOLLARS_AZ)),
                RewriteRule::new("manat", MANATS_RE.clone(), RuleAction::Currency(MANAT)),
                RewriteRule::new("decimal", DECIMAL_NUM_RE.clone(), RuleAction::DecimalPoint("nöqtə")),
                RewriteRule::new("ordinal", ORDINAL_TURKIC_RE.clone(), RuleAction::Ordinal),
                RewriteRule::new("number", NUMBER_RE.clone(), RuleAction::Cardinal),
            ],
        )
    }

    pub fn turkish() -> Self {
        Self::new(
            Locale::Turkish,
            vec![
                RewriteRule::new("commas", COMMA_NUM_RE.clone(), RuleAction::StripCommas),
                RewriteRule::new("pounds", POUNDS_RE.clone(), RuleAction::AppendUnit("sterlin")),
                RewriteRule::new("dollars", DOLLARS_RE.clone(), RuleAction::Currency(DOLLARS_TR)),
                RewriteRule::new("manat", MANATS_RE.clone(), RuleAction::Currency(MANAT)),
                RewriteRule::new("lira", LIRAS_RE.clone(), RuleAction::Currency(LIRA)),
                RewriteRule::new("decimal", DECIMAL_NUM_RE.clone(), RuleAction::DecimalPoint("nokta")),
                RewriteRule::new("ordinal", ORDINAL_TURKIC_RE.clone(), RuleAction::Ordinal),
                RewriteRule::new("number", NUMBER_RE.clone(), RuleAction::Cardinal),
            ],
        )
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }
}
