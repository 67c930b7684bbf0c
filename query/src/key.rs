//! Cache keys.

use nameflow_types::ChainId;
use serde::Serialize;

use crate::error::QueryError;

/// Cache key: (function name, canonical parameters, chain id).
///
/// Chain-independent lookups (DNS, the Safe service keyed by its own chain
/// id parameter) leave `chain_id` unset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub function: &'static str,
    pub params: String,
    pub chain_id: Option<ChainId>,
}

impl QueryKey {
    /// Build a key from a function name and serialisable parameters.
    ///
    /// Parameters are canonicalised through `serde_json`, whose maps keep
    /// keys sorted, so logically equal parameter sets produce equal keys.
    pub fn new<P: Serialize>(
        function: &'static str,
        params: &P,
        chain_id: Option<ChainId>,
    ) -> Result<Self, QueryError> {
        let value =
            serde_json::to_value(params).map_err(|e| QueryError::Key(e.to_string()))?;
        Ok(Self {
            function,
            params: value.to_string(),
            chain_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct ParamsA {
        name: String,
        flag: bool,
    }

    #[derive(Serialize)]
    struct ParamsB {
        flag: bool,
        name: String,
    }

    #[test]
    fn field_order_does_not_change_the_key() {
        let a = QueryKey::new(
            "lookup",
            &ParamsA {
                name: "nick.eth".into(),
                flag: true,
            },
            Some(ChainId::MAINNET),
        )
        .unwrap();
        let b = QueryKey::new(
            "lookup",
            &ParamsB {
                flag: true,
                name: "nick.eth".into(),
            },
            Some(ChainId::MAINNET),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chain_id_separates_keys() {
        let params = ParamsA {
            name: "nick.eth".into(),
            flag: false,
        };
        let mainnet = QueryKey::new("lookup", &params, Some(ChainId::MAINNET)).unwrap();
        let sepolia = QueryKey::new("lookup", &params, Some(ChainId::SEPOLIA)).unwrap();
        assert_ne!(mainnet, sepolia);
    }
}
