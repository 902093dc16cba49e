//! A three-level hierarchy declared entirely through the derive.

use outcome::{Kind, Outcome, is_subkind};

#[derive(Debug, thiserror::Error, Kind)]
#[error("io")]
struct IoFailure;

#[derive(Debug, thiserror::Error, Kind)]
#[kind(parent = IoFailure)]
enum NetworkFailure {
    #[error("connection refused")]
    Refused,
    #[error("connection reset")]
    Reset,
}

#[derive(Debug, thiserror::Error, Kind)]
#[error("tls")]
#[kind(parent = NetworkFailure)]
struct TlsFailure {
    alert: u8,
}

fn main() {
    assert!(is_subkind::<TlsFailure, IoFailure>());
    assert!(is_subkind::<NetworkFailure, IoFailure>());
    assert!(!is_subkind::<IoFailure, NetworkFailure>());

    let outcome: Outcome<()> = Outcome::fail(TlsFailure { alert: 40 });
    assert!(outcome.matches::<NetworkFailure>());
    assert_eq!(outcome.failure_as::<TlsFailure>().map(|f| f.alert), Some(40));

    for failure in [NetworkFailure::Refused, NetworkFailure::Reset] {
        assert!(Outcome::<()>::fail(failure).matches::<IoFailure>());
    }
}
