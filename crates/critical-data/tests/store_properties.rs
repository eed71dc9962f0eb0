mod common;

use common::{Call, Host, dn, dns, store};
use critical_data::{
    AccessKind, AccessValidator, BlockOptions, CachedCriticalDataStore, CommitOutcome,
    Compression, CriticalDataBlock, CriticalDataError, CriticalDataStore, DataBlock, ErrorKind,
    GameCycleState, GameMode, HistoryStoreValidator, StoreCollection, StoreKind,
    TransactionWeight,
};

const LIGHT: TransactionWeight = TransactionWeight::Lightweight;

fn play() -> std::sync::Arc<Host> {
    Host::new(GameMode::Play, GameCycleState::Active)
}

fn block(entries: &[(&str, &str)]) -> CriticalDataBlock {
    let mut block = CriticalDataBlock::default();
    for (name, value) in entries {
        block.set_raw(dn(name), value.as_bytes().to_vec()).unwrap();
    }
    block
}

#[test]
fn read_twice_hits_remote_once() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"one");
    remote.seed("b", b"two");

    let first = store.read(&dns(&["a", "b", "c"])).unwrap();
    let second = store.read(&dns(&["a", "b", "c"])).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.get_raw(&dn("a")).unwrap(), b"one");
    // "c" is absent remotely, so it stays a miss on every read.
    assert_eq!(
        remote.calls(),
        vec![
            Call::Read(vec!["a".into(), "b".into(), "c".into()]),
            Call::Read(vec!["c".into()]),
        ]
    );
}

#[test]
fn local_write_wins_before_commit() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Theme, &host, BlockOptions::default());
    remote.seed("a", b"remote");

    store.write(&block(&[("a", "local")])).unwrap();
    let read = store.read(&dns(&["a"])).unwrap();

    assert_eq!(read.get_raw(&dn("a")).unwrap(), b"local");
    assert!(remote.calls().is_empty());
}

#[test]
fn commit_sends_exactly_the_pending_bytes() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());

    store
        .write(&block(&[("credits", "1"), ("denom", "25")]))
        .unwrap();
    assert!(store.has_pending_writes());

    let outcome = store.commit_pending_writes(LIGHT).unwrap();
    assert_eq!(outcome, CommitOutcome::Committed(2));
    assert!(!store.has_pending_writes());
    assert_eq!(
        remote.calls(),
        vec![Call::Write(vec![
            ("credits".into(), b"1".to_vec()),
            ("denom".into(), b"25".to_vec()),
        ])]
    );

    remote.clear_calls();
    assert_eq!(store.commit_pending_writes(LIGHT).unwrap(), CommitOutcome::Clean);
    assert!(remote.calls().is_empty());
}

#[test]
fn miss_fill_does_not_dirty() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"b1");

    store.read(&dns(&["a"])).unwrap();
    assert!(store.cache().contains(&dn("a")));
    assert!(!store.cache().is_pending(&dn("a")));

    remote.clear_calls();
    assert_eq!(store.commit_pending_writes(LIGHT).unwrap(), CommitOutcome::Clean);
    assert!(remote.calls().is_empty());
}

#[test]
fn remove_is_immediate() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"b1");
    store.read(&dns(&["a"])).unwrap();
    remote.clear_calls();

    store.remove(&dns(&["a"])).unwrap();

    assert!(!store.cache().contains(&dn("a")));
    assert_eq!(remote.calls(), vec![Call::Remove(vec!["a".into()])]);
    assert_eq!(remote.get("a"), None);
}

#[test]
fn history_mode_denies_entity_writes() {
    let host = Host::new(GameMode::History, GameCycleState::Idle);
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());

    let err = store.write(&block(&[("a", "x")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
    assert!(matches!(
        err,
        CriticalDataError::AccessDenied {
            access: AccessKind::Write,
            ..
        }
    ));
    assert!(!store.has_pending_writes());
    assert!(remote.calls().is_empty());
}

#[test]
fn idle_play_denies_every_history_access() {
    let host = Host::new(GameMode::Play, GameCycleState::Idle);
    let validator = HistoryStoreValidator::new(host.clone(), host.clone());
    for access in [AccessKind::Read, AccessKind::Write, AccessKind::Remove] {
        let err = validator.validate(access, "coplayer_history").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied, "{access}");
    }

    host.set_cycle(GameCycleState::Active);
    assert!(validator.validate(AccessKind::Write, "coplayer_history").is_ok());
}

#[test]
fn access_is_checked_per_call() {
    let host = play();
    let (mut store, remote) = store(StoreKind::CoplayerHistory, &host, BlockOptions::default());
    remote.seed("last_game", b"g1");

    host.set_mode(GameMode::History);
    let read = store.read(&dns(&["last_game"])).unwrap();
    assert_eq!(read.get_raw(&dn("last_game")).unwrap(), b"g1");

    let err = store.remove(&dns(&["last_game"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
    assert!(store.cache().contains(&dn("last_game")));
}

#[test]
fn reset_forces_refetch() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"b1");
    store.read(&dns(&["a"])).unwrap();
    store.write(&block(&[("b", "dropped")])).unwrap();

    store.reset_cache();
    assert!(store.cache().is_empty());
    assert!(!store.has_pending_writes());

    remote.clear_calls();
    store.read(&dns(&["a"])).unwrap();
    assert_eq!(remote.calls(), vec![Call::Read(vec!["a".into()])]);
}

#[test]
fn failed_read_leaves_cache_unchanged() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"b1");

    remote.fail_next();
    let err = store.read(&dns(&["a"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.is_retryable());
    assert!(store.cache().is_empty());

    let read = store.read(&dns(&["a"])).unwrap();
    assert_eq!(read.get_raw(&dn("a")).unwrap(), b"b1");
}

#[test]
fn failed_commit_retries_same_snapshot() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Theme, &host, BlockOptions::default());
    store.write(&block(&[("reels", "5")])).unwrap();

    remote.fail_next();
    assert!(store.commit_pending_writes(LIGHT).is_err());
    assert!(store.cache().is_pending(&dn("reels")));
    assert_eq!(remote.get("reels"), None);

    assert_eq!(
        store.commit_pending_writes(LIGHT).unwrap(),
        CommitOutcome::Committed(1)
    );
    let expected = Call::Write(vec![("reels".into(), b"5".to_vec())]);
    assert_eq!(remote.calls(), vec![expected.clone(), expected]);
}

#[test]
fn failed_remove_keeps_cached_entry() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"b1");
    store.read(&dns(&["a"])).unwrap();

    remote.fail_next();
    assert!(store.remove(&dns(&["a"])).is_err());
    assert!(store.cache().contains(&dn("a")));
}

#[test]
fn empty_name_lists_fail_before_any_remote_call() {
    let host = Host::new(GameMode::History, GameCycleState::Idle);
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());

    let err = store.read(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let mut target = CriticalDataBlock::default();
    let err = store.fill(&[], &mut target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = store.remove(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert!(!target.has_data());
    assert!(remote.calls().is_empty());
}

#[test]
fn commit_rechecks_write_access() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    store.write(&block(&[("credits", "9")])).unwrap();

    host.set_mode(GameMode::History);
    let err = store.commit_pending_writes(LIGHT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
    assert!(remote.calls().is_empty());
    assert!(store.has_pending_writes());

    host.set_mode(GameMode::Play);
    assert_eq!(
        store.commit_pending_writes(LIGHT).unwrap(),
        CommitOutcome::Committed(1)
    );
}

#[test]
fn block_with_other_compression_is_rejected() {
    let host = play();
    let options = BlockOptions::new(Compression::zstd());
    let (mut store, remote) = store(StoreKind::Theme, &host, options);
    assert_eq!(store.options(), options);

    let mut plain = CriticalDataBlock::default();
    plain.set(dn("credits"), &500_u64).unwrap();
    let err = store.write(&plain).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!store.has_pending_writes());
    assert_eq!(store.commit_pending_writes(LIGHT).unwrap(), CommitOutcome::Clean);
    assert!(remote.calls().is_empty());

    let mut matching = CriticalDataBlock::new(store.options());
    matching.set(dn("credits"), &500_u64).unwrap();
    store.write(&matching).unwrap();
    store.commit_pending_writes(LIGHT).unwrap();
    store.reset_cache();
    let read = store.read(&dns(&["credits"])).unwrap();
    assert_eq!(read.get::<u64>(&dn("credits")).unwrap(), 500);
}

#[test]
fn payvar_waits_for_heavyweight_commit() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Payvar, &host, BlockOptions::default());
    store.write(&block(&[("variant", "2")])).unwrap();

    assert_eq!(
        store.commit_pending_writes(LIGHT).unwrap(),
        CommitOutcome::Deferred(1)
    );
    assert!(remote.calls().is_empty());

    assert_eq!(
        store
            .commit_pending_writes(TransactionWeight::Heavyweight)
            .unwrap(),
        CommitOutcome::Committed(1)
    );
    assert_eq!(remote.get("variant"), Some(b"2".to_vec()));
}

#[test]
fn revert_to_original_still_writes() {
    let host = play();
    let (mut store, remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    remote.seed("a", b"orig");
    store.read(&dns(&["a"])).unwrap();

    store.write(&block(&[("a", "changed")])).unwrap();
    store.write(&block(&[("a", "orig")])).unwrap();
    remote.clear_calls();

    assert_eq!(
        store.commit_pending_writes(LIGHT).unwrap(),
        CommitOutcome::Committed(1)
    );
    assert_eq!(
        remote.calls(),
        vec![Call::Write(vec![("a".into(), b"orig".to_vec())])]
    );
}

#[test]
fn compressed_store_passes_bytes_through_unchanged() {
    let host = play();
    let options = BlockOptions::new(Compression::zstd());
    let (mut store, remote) = store(StoreKind::Theme, &host, options);

    let mut values = CriticalDataBlock::new(options);
    values.set(dn("title"), &"Lucky Sevens".to_string()).unwrap();
    let stored = values.get_raw(&dn("title")).unwrap().to_vec();
    store.write(&values).unwrap();
    store.commit_pending_writes(LIGHT).unwrap();

    assert_eq!(remote.get("title"), Some(stored));

    store.reset_cache();
    let read = store.read(&dns(&["title"])).unwrap();
    assert_eq!(read.get::<String>(&dn("title")).unwrap(), "Lucky Sevens");
}

#[test]
fn collection_commits_and_resets_every_store() {
    let host = play();
    let (shell, shell_remote) = store(StoreKind::Shell, &host, BlockOptions::default());
    let (payvar, payvar_remote) = store(StoreKind::Payvar, &host, BlockOptions::default());
    let mut stores = StoreCollection::default()
        .with_store(shell)
        .with_store(payvar);

    for name in ["shell", "payvar"] {
        stores
            .store_mut(name)
            .unwrap()
            .write(&block(&[("k", "v")]))
            .unwrap();
    }

    let outcomes = stores.commit_all_pending_writes(LIGHT).unwrap();
    assert_eq!(
        outcomes,
        vec![
            ("shell".to_string(), CommitOutcome::Committed(1)),
            ("payvar".to_string(), CommitOutcome::Deferred(1)),
        ]
    );
    assert_eq!(shell_remote.get("k"), Some(b"v".to_vec()));
    assert_eq!(payvar_remote.get("k"), None);

    stores.reset_all();
    assert!(!stores.has_pending_writes());
}
