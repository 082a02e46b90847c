mod common;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use lamden_network::network::SeededSelector;
use lamden_network::{NetworkConfig, NetworkKind};
use test_log::test;

use common::mock_network;

const HOSTS: [&str; 3] = ["https://a.io", "https://b.io", "https://c.io"];

#[test]
fn test_single_host_always_selected() -> anyhow::Result<()> {
    let network = mock_network(NetworkConfig::new(["HTTPS://ONLY.IO"], "testnet"))?;
    for _ in 0..1000 {
        assert_eq!(network.host(), "https://only.io");
        assert_eq!(network.url(), "https://only.io");
    }
    Ok(())
}

#[test]
fn test_selection_is_roughly_uniform() -> anyhow::Result<()> {
    const TRIALS: usize = 30_000;

    let network = mock_network(NetworkConfig::new(HOSTS, "testnet"))?;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..TRIALS {
        *counts.entry(network.host().to_string()).or_default() += 1;
    }

    assert_eq!(counts.len(), HOSTS.len());
    let expected = TRIALS / HOSTS.len();
    for (host, count) in counts {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "{host} picked {count} times, expected about {expected}"
        );
    }
    Ok(())
}

#[test]
fn test_injected_selector_pins_host() -> anyhow::Result<()> {
    let network = mock_network(NetworkConfig::new(HOSTS, "testnet"))?
        .with_selector(|len: usize| len - 1);

    for _ in 0..10 {
        assert_eq!(network.host(), "https://c.io");
    }
    Ok(())
}

#[test]
fn test_out_of_range_selection_wraps() -> anyhow::Result<()> {
    let network =
        mock_network(NetworkConfig::new(HOSTS, "testnet"))?.with_selector(|_: usize| 7usize);
    assert_eq!(network.host(), "https://b.io");
    Ok(())
}

#[test]
fn test_seeded_selector_is_reproducible() -> anyhow::Result<()> {
    let first = mock_network(NetworkConfig::new(HOSTS, "testnet"))?
        .with_selector(SeededSelector::new(7));
    let second = mock_network(NetworkConfig::new(HOSTS, "testnet"))?
        .with_selector(SeededSelector::new(7));

    let picks = |network: &lamden_network::Network<common::MockApi>| {
        (0..50).map(|_| network.host().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(picks(&first), picks(&second));
    Ok(())
}

#[test]
fn test_info_snapshot() -> anyhow::Result<()> {
    let network = mock_network(
        NetworkConfig::new(HOSTS, "Mockchain")
            .name("local")
            .lamden(false),
    )?
    .with_selector(|_: usize| 1usize);

    let info = network.info();
    assert_eq!(info.name, "local");
    assert!(!info.lamden);
    assert_eq!(info.kind, NetworkKind::Mockchain);
    assert_eq!(info.hosts, HOSTS);
    assert_eq!(info.url, "https://b.io");
    assert!(!info.online);
    assert!(!info.mainnet && !info.testnet && info.mockchain);

    assert_eq!(
        serde_json::to_value(&info)?,
        serde_json::json!({
            "name": "local",
            "lamden": false,
            "type": "mockchain",
            "hosts": HOSTS,
            "url": "https://b.io",
            "online": false,
            "mainnet": false,
            "testnet": false,
            "mockchain": true,
        })
    );
    Ok(())
}

#[test]
fn test_info_selects_a_fresh_url() -> anyhow::Result<()> {
    let next = AtomicUsize::new(0);
    let network = mock_network(NetworkConfig::new(HOSTS, "testnet"))?
        .with_selector(move |_: usize| next.fetch_add(1, Ordering::SeqCst));

    let first = network.info();
    let second = network.info();

    assert_eq!(first.url, "https://a.io");
    assert_eq!(second.url, "https://b.io");
    assert_eq!(first.hosts, second.hosts);
    Ok(())
}
