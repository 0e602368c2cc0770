use cosmwasm_std::{
    entry_point, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::address;
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, FindDidResponse, FindNameResponse, InstantiateMsg, QueryMsg,
};
use crate::state::{Config, Record, CONFIG, DIDS, NAMES};

const CONTRACT_NAME: &str = "crates.io:name-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // A zero fee would let records exist with an empty deposit
    if msg.register_fee.amount.is_zero() {
        return Err(ContractError::InvalidFee {});
    }

    CONFIG.save(
        deps.storage,
        &Config {
            register_fee: msg.register_fee,
        },
    )?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register { name, did } => execute_register(deps, info, name, did),
        ExecuteMsg::Unregister { name } => execute_unregister(deps, info, name),
        ExecuteMsg::FindDid { name } => execute_find_did(deps, info, name),
        ExecuteMsg::FindName { did } => execute_find_name(deps, info, did),
    }
}

pub fn execute_register(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    did: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let fee = config.register_fee;

    let paid: Uint128 = info
        .funds
        .iter()
        .filter(|coin| coin.denom == fee.denom)
        .map(|coin| coin.amount)
        .sum();
    if paid < fee.amount {
        return Err(ContractError::InsufficientFund {});
    }

    let did = address::canonicalize(&did)?;

    if name.is_empty() {
        return Err(ContractError::EmptyName {});
    }

    if NAMES.has(deps.storage, &name) {
        return Err(ContractError::NameAlreadyRegistered {});
    }

    if DIDS.has(deps.storage, &did) {
        return Err(ContractError::DidAlreadyRegistered {});
    }

    // The full attached value becomes the deposit, overpayment included
    let record = Record {
        owner: info.sender.clone(),
        did: did.clone(),
        deposit: info.funds,
    };
    NAMES.save(deps.storage, &name, &record)?;
    DIDS.save(deps.storage, &did, &name)?;

    Ok(Response::new()
        .add_attribute("method", "register")
        .add_attribute("name", name)
        .add_attribute("did", did)
        .add_attribute("owner", info.sender))
}

pub fn execute_unregister(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let record = NAMES
        .may_load(deps.storage, &name)?
        .ok_or(ContractError::UnregisteredName {})?;

    if info.sender != record.owner {
        return Err(ContractError::NotOwner {});
    }

    let Record {
        owner,
        did,
        deposit,
    } = record;

    // Both entries go together, keeping the two maps a bijection
    NAMES.remove(deps.storage, &name);
    DIDS.remove(deps.storage, &did);

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: owner.to_string(),
            amount: deposit,
        })
        .add_attribute("method", "unregister")
        .add_attribute("name", name)
        .add_attribute("did", did)
        .add_attribute("owner", owner))
}

pub fn execute_find_did(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let record = NAMES
        .may_load(deps.storage, &name)?
        .ok_or(ContractError::UnregisteredName {})?;

    if info.sender != record.owner {
        return Err(ContractError::NotOwner {});
    }

    Ok(Response::new()
        .set_data(to_json_binary(&FindDidResponse {
            did: record.did.clone(),
        })?)
        .add_attribute("method", "find_did")
        .add_attribute("name", name)
        .add_attribute("did", record.did))
}

pub fn execute_find_name(
    deps: DepsMut,
    info: MessageInfo,
    did: String,
) -> Result<Response, ContractError> {
    let did = address::canonicalize(&did)?;

    let name = DIDS
        .may_load(deps.storage, &did)?
        .ok_or(ContractError::UnregisteredDid {})?;

    // Every DIDS entry has a NAMES entry
    let record = NAMES.load(deps.storage, &name)?;
    if info.sender != record.owner {
        return Err(ContractError::NotOwner {});
    }

    Ok(Response::new()
        .set_data(to_json_binary(&FindNameResponse { name: name.clone() })?)
        .add_attribute("method", "find_name")
        .add_attribute("did", did)
        .add_attribute("name", name))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        register_fee: config.register_fee,
    })
}
