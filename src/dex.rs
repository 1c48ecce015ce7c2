/// DEX program mapping
///
/// Maps GeckoTerminal DEX identifiers to the on-chain program id and pool
/// type expected by the downstream trading config schema. Identifiers not
/// in the table fall back to the Raydium CLMM entry.
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Pool type as understood by the downstream trading system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
    Amm,
    Clmm,
    Orderbook,
}

impl PoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolType::Amm => "amm",
            PoolType::Clmm => "clmm",
            PoolType::Orderbook => "orderbook",
        }
    }
}

/// Program id and pool type for one DEX
#[derive(Debug, Clone, Copy)]
pub struct DexProgramInfo {
    pub program_id: &'static str,
    pub pool_type: PoolType,
}

/// Fallback mapping for DEX ids missing from the table
pub const FALLBACK_DEX_PROGRAM: DexProgramInfo = DexProgramInfo {
    program_id: "CLMMmwW4ardRXn1VqkVW38oywYcXoCskswJso1hHc5m",
    pool_type: PoolType::Clmm,
};

/// GeckoTerminal DEX id (lowercase) -> program info
pub static DEX_TO_PROGRAM_ID: Lazy<HashMap<&'static str, DexProgramInfo>> = Lazy::new(|| {
    HashMap::from([
        (
            "raydium",
            DexProgramInfo {
                program_id: "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
                pool_type: PoolType::Amm,
            },
        ),
        ("raydium_clmm", FALLBACK_DEX_PROGRAM),
        (
            "orca",
            DexProgramInfo {
                program_id: "9W959DqEETiGZocYWCQPaJ6sBmUzgfxXfqGeTEdp3aQP",
                pool_type: PoolType::Amm,
            },
        ),
        (
            "orca_whirlpool",
            DexProgramInfo {
                program_id: "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc",
                pool_type: PoolType::Clmm,
            },
        ),
        (
            "phoenix",
            DexProgramInfo {
                program_id: "PhoeNiXZ8ByJGLkxNfZRnkUfjvmuYqLR89jjFHGqdXY",
                pool_type: PoolType::Orderbook,
            },
        ),
        (
            "meteora",
            DexProgramInfo {
                program_id: "Eo7WjKq67rjJQSZxS6z3YkapzY3eMj6Xy8X5EQVn5UaB",
                pool_type: PoolType::Amm,
            },
        ),
        (
            "meteora_dlmm",
            DexProgramInfo {
                program_id: "LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo",
                pool_type: PoolType::Clmm,
            },
        ),
    ])
});

/// Resolves a DEX identifier (case-insensitively) to its program info,
/// substituting the fallback entry for unrecognized ids
pub fn resolve_dex_program(dex_id: &str) -> DexProgramInfo {
    let key = dex_id.to_lowercase();
    DEX_TO_PROGRAM_ID
        .get(key.as_str())
        .copied()
        .unwrap_or(FALLBACK_DEX_PROGRAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dex_resolves() {
        let info = resolve_dex_program("raydium");
        assert_eq!(info.pool_type, PoolType::Amm);
        assert_eq!(
            info.program_id,
            "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8"
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let info = resolve_dex_program("Orca_Whirlpool");
        assert_eq!(info.pool_type, PoolType::Clmm);
    }

    #[test]
    fn test_unknown_dex_falls_back_to_raydium_clmm() {
        let info = resolve_dex_program("some_new_dex");
        assert_eq!(info.pool_type, PoolType::Clmm);
        assert_eq!(info.program_id, FALLBACK_DEX_PROGRAM.program_id);
    }

    #[test]
    fn test_pool_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PoolType::Orderbook).unwrap(),
            "\"orderbook\""
        );
        assert_eq!(PoolType::Amm.as_str(), "amm");
    }
}
