//! Interface-only bindings shared between the system contracts. These carry
//! no bytecode; they are cast over already-deployed addresses.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
    }

    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IAccountability {
        function distributeRewards(address _validator) external payable;
        function finalize(bool _epochEnd) external;
        function setEpochPeriod(uint256 _newPeriod) external;
    }

    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface IOracle {
        function getRound() external view returns (uint256);
        function getPrecision() external pure returns (uint256);
        function setVoters(address[] memory _newVoters) external;
        function finalize() external;
    }
}
