use crate::{ClientError, LoadState};

#[tokio::test]
async fn given_successful_fetch_when_resolved_then_ready() {
    let state = LoadState::resolve(async { Ok::<_, ClientError>(3) }).await;

    assert_eq!(state.ready(), Some(&3));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn given_failed_fetch_when_resolved_then_failed() {
    let state: LoadState<u8> =
        LoadState::resolve(async { Err(ClientError::network(500, "http://x/users")) }).await;

    assert!(matches!(
        state.error(),
        Some(ClientError::Network { status: 500, .. })
    ));
    assert_eq!(state.ready(), None);
}

#[test]
fn test_map_keeps_variant() {
    let loading: LoadState<u8> = LoadState::Loading;
    assert!(loading.map(|v| v + 1).is_loading());

    let ready = LoadState::Ready(1u8).map(|v| v + 1);
    assert_eq!(ready.ready(), Some(&2));
}
