use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::numbering;
use crate::store::StorageBackend;

/// Shows the number the next invoice will get, without reserving it.
pub fn next<B: StorageBackend>(store: &B) -> Result<CmdResult> {
    let number = numbering::peek_next(store)?;
    Ok(CmdResult::default().with_doc_number(number))
}

/// Clears the counter. The UI is expected to confirm first.
pub fn reset<B: StorageBackend>(store: &B) -> Result<CmdResult> {
    numbering::reset(store)?;
    let number = numbering::peek_next(store)?;
    let mut result = CmdResult::default().with_doc_number(number);
    result.add_message(CmdMessage::success(format!(
        "Counter reset successfully! Next invoice: {}",
        number
    )));
    Ok(result)
}
