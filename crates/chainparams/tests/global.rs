use bscd_chainparams::{global, init_global, params, ChainParamsError};
use bscd_consensus::Network;

#[test]
fn global_registry_installs_once() {
    assert!(global().is_none());
    assert!(params().is_none());

    let registry = init_global().expect("first install");
    assert_eq!(params().expect("installed").network(), Network::Mainnet);

    registry.select_from_flag(true).expect("testnet");
    assert_eq!(params().expect("installed").network(), Network::Testnet);

    assert!(matches!(
        init_global(),
        Err(ChainParamsError::AlreadyInitialized)
    ));
    assert_eq!(
        global().expect("installed").current().network(),
        Network::Testnet
    );
}
