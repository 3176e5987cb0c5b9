//! Provider and signer construction.

use std::time::Duration;

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{FillProvider, JoinFill, WalletFiller},
        utils::JoinedRecommendedFillers,
        ProviderBuilder, RootProvider,
    },
    rpc::client::RpcClient,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
    transports::http::reqwest::Url,
};

/// Type alias that connects to providers with recommended fillers and wallet
pub type HttpProviderWithWallet = FillProvider<
    JoinFill<JoinedRecommendedFillers, WalletFiller<EthereumWallet>>,
    RootProvider,
    Ethereum,
>;

/// a handy thin wrapper around wallet builder and provider builder that directly
/// returns an instantiated `Provider` with default fillers with wallet, ready to send tx
pub fn build_provider(
    mnemonic: String,
    account_index: u32,
    url: Url,
    poll_interval: Option<Duration>,
) -> HttpProviderWithWallet {
    let signer = build_signer(mnemonic, account_index);
    let wallet = EthereumWallet::from(signer);

    // alloy guesses whether an RPC is local to pick a polling interval; the
    // guess is wrong for an RPC inside docker, so allow overriding it.
    if let Some(interval) = poll_interval {
        tracing::info!("Using custom poll interval: {interval:?}");
        let client = RpcClient::new_http(url.clone()).with_poll_interval(interval);
        ProviderBuilder::new().wallet(wallet).on_client(client)
    } else {
        tracing::info!("Using default poll interval");
        ProviderBuilder::new().wallet(wallet).on_http(url)
    }
}

pub fn build_signer(mnemonic: String, account_index: u32) -> PrivateKeySigner {
    MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(account_index)
        .expect("wrong mnemonic or index")
        .build()
        .expect("fail to build signer")
}

/// similar to [`build_provider()`] but using a random wallet
pub fn build_random_provider(url: Url) -> HttpProviderWithWallet {
    let signer = MnemonicBuilder::<English>::default()
        .build_random()
        .expect("fail to build signer");
    let wallet = EthereumWallet::from(signer);
    ProviderBuilder::new().wallet(wallet).on_http(url)
}
