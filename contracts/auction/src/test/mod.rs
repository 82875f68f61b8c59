
use crate::{
    AssetRef, AuctionConfig, AuctionContract, AuctionContractClient, AuctionMode, RefundPolicy,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, Event,
};

pub const ITEM_ID: u64 = 7;
pub const START_TIME: u64 = 1_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    NotOwner = 1,
    Frozen = 2,
}

#[contracttype]
enum RegistryKey {
    Owner(u64),
    Frozen,
}

/// Minimal asset registry: one owner per item id, and a switch that makes
/// every transfer fail.
#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn mint(env: Env, to: Address, item_id: u64) {
        env.storage().persistent().set(&RegistryKey::Owner(item_id), &to);
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().instance().set(&RegistryKey::Frozen, &frozen);
    }

    pub fn owner_of(env: Env, item_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&RegistryKey::Owner(item_id))
            .unwrap()
    }

    pub fn transfer(env: Env, from: Address, to: Address, item_id: u64) {
        from.require_auth();

        let frozen: bool = env
            .storage()
            .instance()
            .get(&RegistryKey::Frozen)
            .unwrap_or(false);
        if frozen {
            panic_with_error!(&env, RegistryError::Frozen);
        }

        let owner: Option<Address> = env
            .storage()
            .persistent()
            .get(&RegistryKey::Owner(item_id));
        if owner != Some(from) {
            panic_with_error!(&env, RegistryError::NotOwner);
        }
        env.storage().persistent().set(&RegistryKey::Owner(item_id), &to);
    }
}

pub struct Setup {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub registry: MockRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
}

pub fn setup_test(mode: AuctionMode, start_price: i128, end_price: i128) -> Setup {
    setup_with_policy(mode, start_price, end_price, RefundPolicy::Push)
}

pub fn setup_with_policy(
    mode: AuctionMode,
    start_price: i128,
    end_price: i128,
    refund_policy: RefundPolicy,
) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let registry_id = env.register(MockRegistry, ());
    let registry = MockRegistryClient::new(&env, &registry_id);
    registry.mint(&seller, &ITEM_ID);

    let token_client = create_payment_token(&env, &[&alice, &bob]);

    let config = AuctionConfig {
        asset: AssetRef {
            registry: registry_id,
            item_id: ITEM_ID,
        },
        payment_token: token_client.address.clone(),
        start_price,
        end_price,
        mode,
        refund_policy,
    };
    let client = deploy_auction(&env, &seller, config);

    Setup {
        env,
        client,
        registry,
        token: token_client,
        seller,
        alice,
        bob,
    }
}

/// Register a payment token and fund each holder with 10_000 units.
pub fn create_payment_token(env: &Env, holders: &[&Address]) -> token::TokenClient<'static> {
    let token_admin = Address::generate(env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_admin_client = token::StellarAssetClient::new(env, &token_address);
    for holder in holders {
        token_admin_client.mint(holder, &10_000);
    }
    token::TokenClient::new(env, &token_address)
}

pub fn deploy_auction(
    env: &Env,
    seller: &Address,
    config: AuctionConfig,
) -> AuctionContractClient<'static> {
    let contract_id = env.register(AuctionContract, (seller.clone(), config));
    AuctionContractClient::new(env, &contract_id)
}

/// Number of times `event` was published by `contract` during the last
/// top-level invocation.
pub fn count_events(env: &Env, contract: &Address, event: &impl Event) -> u32 {
    let expected = vec![env, (contract.clone(), event.topics(env), event.data(env))];
    env.events()
        .all()
        .iter()
        .filter(|published| vec![env, published.clone()] == expected)
        .count() as u32
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}
