use soulbound_common::{
    crypto::Address,
    sbt::{SbtError, SharedRegistry, TokenRegistry},
};

fn admin() -> Address {
    Address::new([1u8; 32])
}

fn holder(seed: u8) -> Address {
    Address::new([seed; 32])
}

fn shared() -> SharedRegistry {
    TokenRegistry::new("Soulbound Token", "SBT", admin())
        .unwrap()
        .into()
}

#[tokio::test]
async fn test_shared_registry_basic_flow() {
    let registry = shared();

    assert_eq!(registry.name().await, "Soulbound Token");
    assert_eq!(registry.symbol().await, "SBT");
    assert_eq!(registry.administrator().await, admin());

    assert_eq!(registry.mint(&admin(), holder(2), "123").await, Ok(0));
    assert_eq!(registry.owner_of(0).await, Ok(holder(2)));
    assert_eq!(registry.token_uri(0).await, Ok("123".to_string()));
    assert_eq!(registry.exists(0).await, Ok(true));

    assert_eq!(registry.burn(&holder(2), 0).await, Err(SbtError::Unauthorized));
    assert_eq!(registry.burn(&admin(), 0).await, Ok(()));
    assert_eq!(registry.balance_of(&holder(2)).await, Ok(0));
    assert_eq!(registry.drain_events().await.len(), 2);
    assert!(registry.events().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mints_get_unique_sequential_ids() {
    let registry = shared();

    let mut handles = Vec::new();
    for task in 0..8u8 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for _ in 0..10 {
                ids.push(registry.mint(&admin(), holder(task + 2), "uri").await.unwrap());
            }
            ids
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (0..80).collect::<Vec<u64>>());
    assert_eq!(registry.next_token_id().await, Ok(80));
    assert_eq!(registry.total_supply().await, Ok(80));
    for task in 0..8u8 {
        assert_eq!(registry.balance_of(&holder(task + 2)).await, Ok(10));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batches_are_not_interleaved() {
    let registry = shared();

    let mut handles = Vec::new();
    for task in 0..4u8 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            let recipients = vec![holder(task + 2); 5];
            let uris = (0..5).map(|i| format!("{task}-{i}")).collect();
            registry.batch_mint(&admin(), recipients, uris).await.unwrap()
        }));
    }

    let mut all_ids = Vec::new();
    for handle in handles {
        let ids = handle.await.unwrap();
        // Each batch owns a contiguous id range held by a single recipient
        assert_eq!(ids.len(), 5);
        assert!(ids.windows(2).all(|pair| pair[1] == pair[0] + 1));
        let owner = registry.owner_of(ids[0]).await.unwrap();
        for id in &ids {
            assert_eq!(registry.owner_of(*id).await, Ok(owner));
        }
        all_ids.extend(ids);
    }

    // Ranges never overlap and together cover every allocated id
    all_ids.sort_unstable();
    assert_eq!(all_ids, (0..20).collect::<Vec<u64>>());
    assert_eq!(registry.next_token_id().await, Ok(20));
    assert_eq!(registry.total_supply().await, Ok(20));
    for task in 0..4u8 {
        assert_eq!(registry.balance_of(&holder(task + 2)).await, Ok(5));
    }
}

#[tokio::test]
async fn test_shared_administrator_hand_off() {
    let registry = shared();
    let observer = registry.clone();

    assert_eq!(registry.set_administrator(&admin(), holder(9)).await, Ok(admin()));
    assert_eq!(observer.administrator().await, holder(9));
    assert_eq!(
        observer.mint(&admin(), holder(2), "x").await,
        Err(SbtError::Unauthorized)
    );
    assert_eq!(
        observer.batch_mint(&holder(9), vec![holder(2)], vec!["x".to_string()]).await,
        Ok(vec![0])
    );
    assert_eq!(observer.token(0).await.map(|t| t.owner), Ok(holder(2)));
}
