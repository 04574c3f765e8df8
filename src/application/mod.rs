//! Application layer - the venture store that coordinates domain rules with
//! the storage and credential ports.

mod venture_store;

pub use venture_store::{Mutation, StoreError, StoreOptions, VentureStore, VENTURES_KEY};
