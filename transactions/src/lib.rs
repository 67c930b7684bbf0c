//! Transaction descriptors and assembly for the manager's flows.
//!
//! Two producers live here:
//! - **Send name**: form state → ordered list of [`TransactionItem`]s,
//!   handed to the external transaction-flow executor.
//! - **Record updates**: a [`RecordSet`](nameflow_types::RecordSet) →
//!   resolver `multicall` calldata, ready for signing.

pub mod error;
pub mod item;
pub mod records;
pub mod send_name;

pub use error::TxError;
pub use item::TransactionItem;
pub use records::{
    encode_multicall, prepare_record_update, record_update_calls, RecordUpdate,
};
pub use send_name::{send_name_transactions, SendNameRequest};
