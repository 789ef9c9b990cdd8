use super::rejected;
use crate::utils::error::SmartecError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Brazilian federative units (UF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateCode {
    Acre,
    Alagoas,
    Amapa,
    Amazonas,
    Bahia,
    Ceara,
    DistritoFederal,
    EspiritoSanto,
    Goias,
    Maranhao,
    MatoGrosso,
    MatoGrossoDoSul,
    MinasGerais,
    Para,
    Paraiba,
    Parana,
    Pernambuco,
    Piaui,
    RioDeJaneiro,
    RioGrandeDoNorte,
    RioGrandeDoSul,
    Rondonia,
    Roraima,
    SantaCatarina,
    SaoPaulo,
    Sergipe,
    Tocantins,
}

static STATE_CODES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| StateCode::ALL.iter().map(|uf| uf.as_str()).collect());

impl StateCode {
    pub const ALL: [StateCode; 27] = [
        StateCode::Acre,
        StateCode::Alagoas,
        StateCode::Amapa,
        StateCode::Amazonas,
        StateCode::Bahia,
        StateCode::Ceara,
        StateCode::DistritoFederal,
        StateCode::EspiritoSanto,
        StateCode::Goias,
        StateCode::Maranhao,
        StateCode::MatoGrosso,
        StateCode::MatoGrossoDoSul,
        StateCode::MinasGerais,
        StateCode::Para,
        StateCode::Paraiba,
        StateCode::Parana,
        StateCode::Pernambuco,
        StateCode::Piaui,
        StateCode::RioDeJaneiro,
        StateCode::RioGrandeDoNorte,
        StateCode::RioGrandeDoSul,
        StateCode::Rondonia,
        StateCode::Roraima,
        StateCode::SantaCatarina,
        StateCode::SaoPaulo,
        StateCode::Sergipe,
        StateCode::Tocantins,
    ];

    /// Two-letter abbreviation.
    pub fn as_str(self) -> &'static str {
        match self {
            StateCode::Acre => "AC",
            StateCode::Alagoas => "AL",
            StateCode::Amapa => "AP",
            StateCode::Amazonas => "AM",
            StateCode::Bahia => "BA",
            StateCode::Ceara => "CE",
            StateCode::DistritoFederal => "DF",
            StateCode::EspiritoSanto => "ES",
            StateCode::Goias => "GO",
            StateCode::Maranhao => "MA",
            StateCode::MatoGrosso => "MT",
            StateCode::MatoGrossoDoSul => "MS",
            StateCode::MinasGerais => "MG",
            StateCode::Para => "PA",
            StateCode::Paraiba => "PB",
            StateCode::Parana => "PR",
            StateCode::Pernambuco => "PE",
            StateCode::Piaui => "PI",
            StateCode::RioDeJaneiro => "RJ",
            StateCode::RioGrandeDoNorte => "RN",
            StateCode::RioGrandeDoSul => "RS",
            StateCode::Rondonia => "RO",
            StateCode::Roraima => "RR",
            StateCode::SantaCatarina => "SC",
            StateCode::SaoPaulo => "SP",
            StateCode::Sergipe => "SE",
            StateCode::Tocantins => "TO",
        }
    }
}

/// Uppercases and trims `uf`, then checks it against the 27 UF codes.
pub fn validate_state_code(uf: &str) -> Option<String> {
    if uf.is_empty() {
        return rejected("uf", uf, "empty input");
    }

    let normalized = uf.to_uppercase().trim().to_string();
    if STATE_CODES.contains(normalized.as_str()) {
        Some(normalized)
    } else {
        rejected("uf", uf, "unknown state code")
    }
}

pub fn is_valid_state_code(uf: &str) -> bool {
    validate_state_code(uf).is_some()
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = SmartecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SmartecError::UnknownStateCode {
            value: s.to_string(),
        };
        let normalized = validate_state_code(s).ok_or_else(unknown)?;

        StateCode::ALL
            .iter()
            .copied()
            .find(|uf| uf.as_str() == normalized)
            .ok_or_else(unknown)
    }
}

impl Serialize for StateCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
