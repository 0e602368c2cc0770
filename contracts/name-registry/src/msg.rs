use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

#[cw_serde]
pub struct InstantiateMsg {
    /// Minimum registration fee; must have a positive amount.
    pub register_fee: Coin,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Bind a name to a DID address. The attached funds must cover the
    /// registration fee and stay escrowed until unregistration.
    Register { name: String, did: String },
    /// Release a registration and refund the escrowed deposit. Owner only.
    Unregister { name: String },
    /// Look up the DID bound to a name. Owner only; the result is returned
    /// in the response data as `FindDidResponse`.
    FindDid { name: String },
    /// Look up the name bound to a DID. Owner only; the result is returned
    /// in the response data as `FindNameResponse`.
    FindName { did: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration. Registry entries are owner-scoped and are
    /// deliberately not exposed here.
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub register_fee: Coin,
}

#[cw_serde]
pub struct FindDidResponse {
    /// Canonical DID (0x + 40 lowercase hex digits)
    pub did: String,
}

#[cw_serde]
pub struct FindNameResponse {
    pub name: String,
}
