use cosmwasm_std::StdError;
use thiserror::Error;

use crate::address::AddressError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("Register fee must be positive")]
    InvalidFee {},

    #[error("Insufficient fund")]
    InsufficientFund {},

    #[error("Empty name")]
    EmptyName {},

    #[error("Name already registered")]
    NameAlreadyRegistered {},

    #[error("DID already registered")]
    DidAlreadyRegistered {},

    #[error("Unregistered name")]
    UnregisteredName {},

    #[error("Unregistered DID")]
    UnregisteredDid {},

    #[error("Not a owner")]
    NotOwner {},
}
