use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ERC20 {
        function balanceOf(address account) external view returns (uint256);
    }
}
