use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Minimum fee a registrant must attach; everything attached is escrowed.
    pub register_fee: Coin,
}

#[cw_serde]
pub struct Record {
    /// Account that registered the name
    pub owner: Addr,
    /// DID address in canonical form (0x + 40 lowercase hex digits)
    pub did: String,
    /// Funds escrowed at registration, returned in full on unregistration
    pub deposit: Vec<Coin>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Active registrations indexed by name (case-sensitive)
pub const NAMES: Map<&str, Record> = Map::new("names");

/// Reverse lookup: canonical DID to name
pub const DIDS: Map<&str, String> = Map::new("dids");
