use crate::core::error::GenError;

pub type NodeId = u32;

pub fn checked_node_count(n: usize) -> Result<NodeId, GenError> {
    if n == 0 || n > NodeId::MAX as usize {
        return Err(GenError::invalid(
            "n",
            n,
            format!("a vertex count in 1..={}", NodeId::MAX),
        ));
    }
    Ok(n as NodeId)
}
