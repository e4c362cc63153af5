pub(crate) mod validate;

use clap::Args;

#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Changelist being submitted (`%change%` in the trigger table)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub changelist: u32,
}
