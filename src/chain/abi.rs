//! Contract interfaces called over `eth_call`.
//!
//! Generated at compile time, so the encoders and decoders are immutable
//! statics shared by every request.

use alloy_sol_types::sol;

sol! {
    /// Uniswap-V2 style pair.
    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }

    /// ERC-20 metadata extension.
    interface IERC20Metadata {
        function symbol() external view returns (string);
        // Read as a full word so values above 255 are rejected, not truncated.
        function decimals() external view returns (uint256);
    }
}
