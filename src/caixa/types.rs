//! Typed deserialization of the Caixa lottery results payload.

use crate::cli::types::ContestNumber;
use crate::error::{LotoError, Result};
use crate::store::models::{Draw, DRAW_SIZE};
use serde::Deserialize;

/// Raw JSON body returned by the Caixa results API for one contest.
///
/// The API reports the drawn numbers twice: `listaDezenas` sorted ascending
/// and `dezenasSorteadasOrdemSorteio` in draw order. Both come as strings
/// with leading zeros ("01", "02", ...). Either may be absent on bad
/// responses, so both default to empty and validation happens in
/// [`DrawPayload::into_draw`].
#[derive(Debug, Clone, Deserialize)]
pub struct DrawPayload {
    pub numero: u32,

    #[serde(rename = "listaDezenas", default)]
    pub lista_dezenas: Vec<String>,

    #[serde(rename = "dezenasSorteadasOrdemSorteio", default)]
    pub dezenas_ordem_sorteio: Vec<String>,

    #[serde(rename = "dataApuracao", default)]
    pub data_apuracao: Option<String>,
}

impl DrawPayload {
    /// Validate the payload into a [`Draw`], preferring the sorted numbers
    /// list and falling back to the draw-order list.
    pub fn into_draw(self) -> Result<Draw> {
        let raw = if self.lista_dezenas.len() == DRAW_SIZE {
            self.lista_dezenas
        } else if self.dezenas_ordem_sorteio.len() == DRAW_SIZE {
            self.dezenas_ordem_sorteio
        } else {
            return Err(LotoError::InvalidDraw {
                reason: format!(
                    "contest {}: response carries no {}-number list",
                    self.numero, DRAW_SIZE
                ),
            });
        };

        let numbers = raw
            .iter()
            .map(|s| s.trim().parse::<u8>())
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|e| LotoError::InvalidDraw {
                reason: format!("contest {}: bad number field: {e}", self.numero),
            })?;

        Draw::new(ContestNumber::new(self.numero), numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dezenas(range: std::ops::RangeInclusive<u8>) -> Vec<String> {
        range.map(|n| format!("{n:02}")).collect()
    }

    #[test]
    fn test_payload_deserializes_caixa_fields() {
        let body = json!({
            "numero": 3301,
            "dataApuracao": "06/02/2025",
            "listaDezenas": dezenas(1..=15),
            "dezenasSorteadasOrdemSorteio": dezenas(1..=15),
            "acumulado": false
        });

        let payload: DrawPayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.numero, 3301);
        assert_eq!(payload.data_apuracao.as_deref(), Some("06/02/2025"));
        assert_eq!(payload.lista_dezenas.len(), 15);
    }

    #[test]
    fn test_into_draw_prefers_sorted_list() {
        let payload = DrawPayload {
            numero: 10,
            lista_dezenas: dezenas(1..=15),
            dezenas_ordem_sorteio: vec!["15".into(); 15],
            data_apuracao: None,
        };

        let draw = payload.into_draw().unwrap();
        assert_eq!(draw.contest(), ContestNumber::new(10));
        assert_eq!(draw.numbers()[0], 1);
    }

    #[test]
    fn test_into_draw_falls_back_to_draw_order() {
        let mut ordem = dezenas(1..=15);
        ordem.reverse();
        let payload = DrawPayload {
            numero: 11,
            lista_dezenas: vec![],
            dezenas_ordem_sorteio: ordem,
            data_apuracao: None,
        };

        let draw = payload.into_draw().unwrap();
        assert_eq!(draw.numbers()[0], 15);
    }

    #[test]
    fn test_into_draw_rejects_short_lists() {
        let payload = DrawPayload {
            numero: 12,
            lista_dezenas: dezenas(1..=14),
            dezenas_ordem_sorteio: vec![],
            data_apuracao: None,
        };

        let err = payload.into_draw().unwrap_err();
        assert!(err.to_string().contains("no 15-number list"));
    }

    #[test]
    fn test_into_draw_rejects_non_numeric_dezenas() {
        let mut list = dezenas(1..=15);
        list[0] = "xx".to_string();
        let payload = DrawPayload {
            numero: 13,
            lista_dezenas: list,
            dezenas_ordem_sorteio: vec![],
            data_apuracao: None,
        };

        assert!(payload.into_draw().is_err());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let payload: DrawPayload = serde_json::from_value(json!({ "numero": 1 })).unwrap();
        assert!(payload.lista_dezenas.is_empty());
        assert!(payload.into_draw().is_err());
    }
}
