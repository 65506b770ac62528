//! Configuration schema definitions.
//!
//! Secrets come from the environment ([`Settings`]); the distribution itself
//! comes from a [`DistributionPlan`], which defaults to the built-in
//! recipient list and can be overridden from a TOML file.

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Environment variable holding the JSON-RPC endpoint URL.
pub const RPC_URL_ENV_VAR: &str = "BSC_TESTNET_URL";

/// Default location of the compiled token artifact.
pub const DEFAULT_ARTIFACT_PATH: &str = "./build/contracts/TokenMintERC20Token.json";

/// Deployed token contract the built-in plan distributes from.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x1d966E407f7ecFd5a55BCf6258a353Ff2560Dc49";

/// Decimal precision of the token.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Key used to sign every transfer.
    pub signing_key: SigningKey,

    /// JSON-RPC endpoint.
    pub rpc_url: Url,
}

/// A private key that never shows up in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key material. Only the wallet should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Distribution plan: which token, at what precision, to whom.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Address of the deployed token contract.
    pub contract_address: String,

    /// Token decimals used to scale whole-token amounts.
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Ordered recipients. Transfers are issued in this order.
    pub recipients: Vec<RecipientConfig>,
}

/// One recipient entry of a plan.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecipientConfig {
    /// Recipient address (0x-prefixed hex).
    pub address: String,

    /// Amount in whole tokens, e.g. "100000" or "0.5".
    pub amount: String,
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl RecipientConfig {
    fn new(address: &str, amount: &str) -> Self {
        Self {
            address: address.to_string(),
            amount: amount.to_string(),
        }
    }
}

impl Default for DistributionPlan {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            decimals: DEFAULT_DECIMALS,
            recipients: vec![
                RecipientConfig::new("0x8BB222C0EEa48Fa6Da6870Dc2ed448E9B98906Ef", "100000"),
                RecipientConfig::new("0xC9D1452cdA2d6E8E5a7c12A536Df4a27307f6b3F", "500000"),
                RecipientConfig::new("0x14ccF15D6b9cc06d039Dea39EC3cD5233628280C", "10000000"),
                RecipientConfig::new("0xf4bFE5Ba904dD8c8a9E3a7A776735760b30B6813", "5000"),
            ],
        }
    }
}
