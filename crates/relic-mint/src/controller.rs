//! # Minting Controller
//!
//! The orchestrator: holds one instance of each collaborator and is the
//! sole writer of all issuance state. Every caller-facing operation is a
//! fixed pipeline of checks followed by a single commit. Any failure
//! short-circuits before any state mutation, so a failing call leaves
//! every counter exactly as it was.
//!
//! ## Pipelines
//!
//! - administrative: owner → quantity → batch rule → admin reservation
//! - public: quantity → phase + key → quota → payment → reservation
//! - allowlist: quantity → phase → proof → quota → payment → reservation
//!
//! The supply reservation is the last failable stage; the quota and
//! treasury commits that follow it cannot fail.
//!
//! ## Execution model
//!
//! Strictly serialized: every mutating operation takes `&mut self`, which
//! gives a total ordering over state-changing calls. A concurrent host
//! must wrap the controller in a single mutex or a single-writer actor,
//! since none of the invariants survive interleaved read-modify-write.

use tracing::{debug, info};

use relic_allowlist::MerkleProof;
use relic_core::{Address, ConfigError, Digest32, IssuanceConfig, Wei};

use crate::error::MintError;
use crate::metadata::TokenMetadata;
use crate::payment::PaymentValidator;
use crate::phase::SalePhaseController;
use crate::quota::QuotaTracker;
use crate::supply::SupplyLedger;
use crate::treasury::Treasury;
use crate::verifier::AllowlistVerifier;

/// The result of a successful mint: a contiguous run of newly issued ids.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MintReceipt {
    /// Who the tokens were issued to.
    pub recipient: Address,
    /// First id in the issued run; ids are sequential from 1.
    pub first_token_id: u64,
    /// Number of tokens issued.
    pub quantity: u64,
}

impl MintReceipt {
    /// The issued token ids.
    pub fn token_ids(&self) -> std::ops::RangeInclusive<u64> {
        self.first_token_id..=self.first_token_id + self.quantity - 1
    }
}

/// Orchestrates the issuance collaborators; sole writer of shared state.
#[derive(Debug, Clone)]
pub struct MintingController {
    owner: Address,
    config: IssuanceConfig,
    supply: SupplyLedger,
    phase: SalePhaseController,
    verifier: AllowlistVerifier,
    quota: QuotaTracker,
    payment: PaymentValidator,
    treasury: Treasury,
    metadata: TokenMetadata,
}

impl MintingController {
    /// Construct a controller for a validated configuration. All mutable
    /// state starts empty: both channels inactive, no key, zero root, no
    /// tokens issued.
    pub fn new(owner: Address, config: IssuanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            owner,
            supply: SupplyLedger::new(config.max_supply, config.reserved_for_admin),
            phase: SalePhaseController::new(),
            verifier: AllowlistVerifier::new(),
            quota: QuotaTracker::new(config.max_public_mint, config.max_allowlist_mint),
            payment: PaymentValidator::new(config.public_price, config.allowlist_price),
            treasury: Treasury::new(),
            metadata: TokenMetadata::new(),
            config,
        })
    }

    // ─── Mint Operations ─────────────────────────────────────────────

    /// Administrative mint to the owner. Bypasses phase, quota, and
    /// payment, but quantity must be a positive multiple of the batch
    /// unit and the reserved allocation caps the path independently of
    /// remaining total supply.
    pub fn admin_mint(&mut self, caller: Address, quantity: u64) -> Result<MintReceipt, MintError> {
        self.ensure_owner(caller)?;
        Self::ensure_positive(quantity)?;
        if quantity % self.config.admin_batch_size != 0 {
            return Err(MintError::InvalidBatchSize {
                quantity,
                batch_size: self.config.admin_batch_size,
            });
        }

        let start = self.supply.reserve_admin(quantity)?;
        let receipt = MintReceipt {
            recipient: self.owner,
            first_token_id: start + 1,
            quantity,
        };
        info!(
            recipient = %receipt.recipient,
            first_token_id = receipt.first_token_id,
            quantity,
            "administrative mint committed"
        );
        Ok(receipt)
    }

    /// Public-channel mint to the caller.
    pub fn public_mint(
        &mut self,
        caller: Address,
        quantity: u64,
        supplied_key: u64,
        paid: Wei,
    ) -> Result<MintReceipt, MintError> {
        Self::ensure_positive(quantity)?;
        self.phase.check_public(supplied_key)?;
        self.quota.check_public(&caller, quantity)?;
        self.payment.check_public(paid, quantity)?;

        let start = self.supply.reserve(quantity)?;
        self.quota.record_public(caller, quantity);
        self.treasury.deposit(paid);

        let receipt = MintReceipt {
            recipient: caller,
            first_token_id: start + 1,
            quantity,
        };
        info!(
            recipient = %receipt.recipient,
            first_token_id = receipt.first_token_id,
            quantity,
            %paid,
            "public mint committed"
        );
        Ok(receipt)
    }

    /// Allowlist-channel mint to the caller. The phase gate runs before
    /// proof verification, so an authorized address still sees the
    /// inactive-sale error while the channel is off; an active channel
    /// with a failing proof reports `UnauthorizedAddress`.
    pub fn allowlist_mint(
        &mut self,
        caller: Address,
        proof: &MerkleProof,
        quantity: u64,
        paid: Wei,
    ) -> Result<MintReceipt, MintError> {
        Self::ensure_positive(quantity)?;
        self.phase.check_allowlist()?;
        if !self.verifier.verify(&caller, proof) {
            return Err(MintError::UnauthorizedAddress);
        }
        self.quota.check_allowlist(&caller, quantity)?;
        self.payment.check_allowlist(paid, quantity)?;

        let start = self.supply.reserve(quantity)?;
        self.quota.record_allowlist(caller, quantity);
        self.treasury.deposit(paid);

        let receipt = MintReceipt {
            recipient: caller,
            first_token_id: start + 1,
            quantity,
        };
        info!(
            recipient = %receipt.recipient,
            first_token_id = receipt.first_token_id,
            quantity,
            %paid,
            "allowlist mint committed"
        );
        Ok(receipt)
    }

    // ─── Administrative Mutators (owner-only) ────────────────────────

    /// Flip the public channel flag; returns the new state.
    pub fn toggle_public_sale(&mut self, caller: Address) -> Result<bool, MintError> {
        self.ensure_owner(caller)?;
        let active = !self.phase.public_active();
        self.phase.set_public_active(active);
        debug!(active, "public sale toggled");
        Ok(active)
    }

    /// Flip the allowlist channel flag; returns the new state.
    pub fn toggle_allowlist_sale(&mut self, caller: Address) -> Result<bool, MintError> {
        self.ensure_owner(caller)?;
        let active = !self.phase.allowlist_active();
        self.phase.set_allowlist_active(active);
        debug!(active, "allowlist sale toggled");
        Ok(active)
    }

    /// Replace the public access key.
    pub fn set_public_sale_key(&mut self, caller: Address, key: u64) -> Result<(), MintError> {
        self.ensure_owner(caller)?;
        self.phase.set_public_key(key);
        debug!("public sale key replaced");
        Ok(())
    }

    /// Replace the allowlist commitment root.
    pub fn set_merkle_root(&mut self, caller: Address, root: Digest32) -> Result<(), MintError> {
        self.ensure_owner(caller)?;
        self.verifier.set_root(root);
        debug!(root = %root, "allowlist root replaced");
        Ok(())
    }

    /// Replace the metadata base URI.
    pub fn set_base_uri(&mut self, caller: Address, uri: String) -> Result<(), MintError> {
        self.ensure_owner(caller)?;
        self.metadata.set_base_uri(uri);
        Ok(())
    }

    /// Replace the collection URI.
    pub fn set_contract_uri(&mut self, caller: Address, uri: String) -> Result<(), MintError> {
        self.ensure_owner(caller)?;
        self.metadata.set_contract_uri(uri);
        Ok(())
    }

    /// Drain the accumulated payment balance to the owner; returns the
    /// withdrawn amount.
    pub fn withdraw(&mut self, caller: Address) -> Result<Wei, MintError> {
        self.ensure_owner(caller)?;
        let amount = self.treasury.withdraw_all();
        info!(%amount, "treasury withdrawn");
        Ok(amount)
    }

    /// Hand the administrative capability to a new owner.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), MintError> {
        self.ensure_owner(caller)?;
        info!(old = %self.owner, new = %new_owner, "ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    // ─── Read-Only Surface ───────────────────────────────────────────

    /// The metadata URI for an issued token.
    pub fn token_uri(&self, token_id: u64) -> Result<String, MintError> {
        if token_id == 0 || token_id > self.supply.total_minted() {
            return Err(MintError::TokenNotFound(token_id));
        }
        Ok(self.metadata.render_token_uri(token_id))
    }

    /// The collection URI.
    pub fn contract_uri(&self) -> &str {
        self.metadata.contract_uri()
    }

    /// The current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Tokens issued so far.
    pub fn total_minted(&self) -> u64 {
        self.supply.total_minted()
    }

    /// Tokens issued through the administrative path.
    pub fn admin_minted(&self) -> u64 {
        self.supply.admin_minted()
    }

    /// Accumulated payment balance.
    pub fn treasury_balance(&self) -> Wei {
        self.treasury.balance()
    }

    /// Whether the public channel is active.
    pub fn public_sale_active(&self) -> bool {
        self.phase.public_active()
    }

    /// Whether the allowlist channel is active.
    pub fn allowlist_sale_active(&self) -> bool {
        self.phase.allowlist_active()
    }

    /// The published allowlist root.
    pub fn merkle_root(&self) -> Digest32 {
        self.verifier.root()
    }

    /// Per-address public-channel count.
    pub fn public_minted(&self, address: &Address) -> u64 {
        self.quota.public_minted(address)
    }

    /// Per-address allowlist-channel count.
    pub fn allowlist_minted(&self, address: &Address) -> u64 {
        self.quota.allowlist_minted(address)
    }

    /// The immutable deployment parameters.
    pub fn config(&self) -> &IssuanceConfig {
        &self.config
    }

    // ─── Guards ──────────────────────────────────────────────────────

    fn ensure_owner(&self, caller: Address) -> Result<(), MintError> {
        if caller != self.owner {
            return Err(MintError::NotOwner);
        }
        Ok(())
    }

    fn ensure_positive(quantity: u64) -> Result<(), MintError> {
        if quantity == 0 {
            return Err(MintError::InvalidQuantity);
        }
        Ok(())
    }
}
