mod changelist_provider;
mod depot_oracle;

pub use changelist_provider::ChangelistProvider;
pub use depot_oracle::DepotOracle;
