//! The derive honours a renamed path to the `outcome` crate.

mod reexport {
    pub use outcome as failures;
}

#[derive(Debug, thiserror::Error, outcome::Kind)]
#[error("aliased")]
#[kind(crate = "crate::reexport::failures")]
struct Aliased;

fn main() {
    assert!(outcome::is_subkind::<Aliased, Aliased>());
}
