//! ERC-20 `approve` calldata

use std::str::FromStr;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};

use crate::errors::{SwapError, SwapResult};

sol! {
	function approve(address spender, uint256 amount) external returns (bool);
}

/// 4-byte selector of `approve(address,uint256)`
pub const APPROVE_SELECTOR: [u8; 4] = approveCall::SELECTOR;

/// Encode `approve(spender, amount)`: selector, then the spender and amount
/// each left-padded to 32 bytes
pub fn encode_approve_calldata(spender: &str, amount: U256) -> SwapResult<Bytes> {
	let spender = Address::from_str(spender).map_err(|e| SwapError::Approval {
		provider: "erc20".to_string(),
		reason: format!("invalid spender address {}: {}", spender, e),
	})?;

	Ok(Bytes::from(approveCall { spender, amount }.abi_encode()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_selector() {
		assert_eq!(APPROVE_SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
	}

	#[test]
	fn test_calldata_layout() {
		let spender = "0x1111111254EEB25477B68fb85Ed929f73A960582";
		let data = encode_approve_calldata(spender, U256::from(1_500_000u64)).unwrap();

		assert_eq!(data.len(), 68);
		assert_eq!(&data[..4], &APPROVE_SELECTOR);
		assert!(data[4..16].iter().all(|b| *b == 0));
		assert_eq!(
			&data[16..36],
			Address::from_str(spender).unwrap().as_slice()
		);
		assert_eq!(&data[36..68], &U256::from(1_500_000u64).to_be_bytes::<32>());
	}

	#[test]
	fn test_invalid_spender() {
		let err = encode_approve_calldata("not-an-address", U256::from(1u64)).unwrap_err();
		assert_eq!(err.code(), "APPROVAL_ERROR");
	}
}
