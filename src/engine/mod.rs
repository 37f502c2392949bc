//! The target-processing engine: traversal, filtering, destination
//! resolution and the copy/move executor.

mod filter;
mod path_util;
mod resolve;
mod target;
mod transfer;

pub use filter::{FilterPipeline, PatternSet, Rejection};
pub use path_util::{has_allowed_extension, is_hidden, unique_destination};
pub use resolve::{DestinationResolver, ensure_parent_dir};
pub use target::{RunSummary, TargetSummary, process_target, run_targets};
pub use transfer::{TransferOutcome, transfer_file};
