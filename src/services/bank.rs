//! Bank accounts: a per-character balance ledger separate from wallets.

use std::collections::HashMap;

use tracing::debug;

use crate::character::{Character, CharacterId};

/// A named bank holding one account per character.
///
/// Accounts are keyed by [`CharacterId`], so two characters sharing a
/// display name keep separate balances. Every mutating operation is
/// all-or-nothing: either each debit and credit lands, or nothing changes.
#[derive(Debug, Default)]
pub struct BankService {
    name: String,
    accounts: HashMap<CharacterId, u64>,
}

impl BankService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves `amount` from the character's wallet into their account,
    /// creating the account at 0 if absent.
    ///
    /// Returns false with wallet and ledger untouched if the wallet is
    /// short.
    pub fn deposit_from(&mut self, character: &mut Character, amount: u64) -> bool {
        if !character.remove_currency(amount) {
            return false;
        }
        *self.accounts.entry(character.id()).or_insert(0) += amount;
        debug!(bank = %self.name, character = %character.id(), amount, "deposit");
        true
    }

    /// Moves `amount` from the character's account back into their wallet.
    ///
    /// Returns false if no account exists or the balance is short.
    pub fn withdraw_to(&mut self, character: &mut Character, amount: u64) -> bool {
        let Some(balance) = self.accounts.get_mut(&character.id()) else {
            return false;
        };
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        character.add_currency(amount);
        debug!(bank = %self.name, character = %character.id(), amount, "withdrawal");
        true
    }

    /// Current account balance; 0 if no account exists. Never fails.
    pub fn check_balance(&self, character: &Character) -> u64 {
        self.accounts.get(&character.id()).copied().unwrap_or(0)
    }

    /// Moves `amount` between two accounts, creating the receiver's account
    /// at 0 if absent. Wallets are untouched.
    ///
    /// Returns false if the sender has no account or the balance is short.
    pub fn transfer_between(
        &mut self,
        sender: &Character,
        receiver: &Character,
        amount: u64,
    ) -> bool {
        let Some(balance) = self.accounts.get_mut(&sender.id()) else {
            return false;
        };
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        *self.accounts.entry(receiver.id()).or_insert(0) += amount;
        debug!(
            bank = %self.name,
            sender = %sender.id(),
            receiver = %receiver.id(),
            amount,
            "transfer"
        );
        true
    }
}
