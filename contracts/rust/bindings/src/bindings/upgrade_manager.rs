//! Bindings for `UpgradeManager.sol`.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b506103d4806100206000396000f3fe6080604052354b38d82ce88d4240a74c42bfb2a0180d7e4f28d4f759872aac0a7bebf8a56ffbddd72497b07425604a161e9c5b8b519c97aa50df48f51ad303eb43d148d85a1cf67a25f829d8bde2d3ce30dc2b982e7ef14a4cc39625e7d5c45407db80adce1f546362b522ffa0b47f59a5eba49dbb8fef380cd3c7ece660caaeb11562bb12cd48111df01c92a4163e9d6ad3101659af52a01fcc480ee093ed8ab58fa9bfa7849022d45326c9ac3ee247310c32b21b1e81fb06e24144d973b957e1a7e162dfcb9947796dd5c0b48de64c36445d48520e691a59340fefa4d6b8e1b201254ae7354a17789469b00e98a7a5ec68603fc74d791e86d60dae65051a1ea65499a61f5521a6ef4bb902f48b1bbd9c11fea9b17b6f0e799f86ee7a005f3532429eaaac0237bcc12b959f77e5e3b562e64db7a743e86fd00450f247153506c153b71b02ca646c6785b7c1ade8e6daf75ce51c3312788186f8ca6bd9e0a3cb0dba5cd7b4b8d9cd9e66c1a4ce29dbf6483bda36e6dcfe6834b1c7a9bf7813a9fa4f13da4c4bede2c247515321e62faa342a6ed711fb1151c61b47b9ada5c380bab1d2e9c527e4370456e28edf0240aa6f290a40c0bbc967f8abaa9662be0728c9c37184273f011200e203cce557253c07ae23db2956578024a5d93298714be1b7278a8e7bddca8f0f8bc24eaca09881dfda09154353a806c9c3fc83bd7c1828fab8fa18ee30328281419c9fab0b257d03e09ee7e6b1038e3b959a8a17d87ad98b95e07e48ac21d4db5b27dba8ca0a60df6a78e2035cafbaf4811109e85d8c2d362cdf71cfe4a8f75609d4c53e7ad4f9e7fe6d803a8dbe9ba6100c6b0b5c92a3aa03422c0da9d4252099098482b70e09dabf33adc992679063a03a2a50e5c8219879faf6975461888410d67da8dcb24ad8b4fd2a73cddc1c13c61a2cc4608777d777ea9d1a589139f5da878ea9e0ab387f3234cbcbe743f6597144e1c0b1a9b7f5fd2d5c11985732e3edfb30eea9ddd411f9abec2dd30f628ccc22d2d35dd96f508fd4fc1f4911034c8db5165354c475a37307c7ff6bb4fb5288bfb415567c672314e56eb588528452871347b2184394f2f93711a2acc214675f6c49fbd03c4d288d38e63b8dea088f89294460aa0e7449a541896221415dac36a5936c08142562cda2ab4997752e7f1a513368ba8ec0cbb9512b4b102d91e4e592446cf58c96d351e043a90123660def0b68661c7e7c78968db2424999e39110ddad23c84e2fabf9820127f3ee87bb3452646a0b5e90c15c37eee723636081d93c105ba0a2a26469706673582212204eff301281511d40435f84adc43077ab95caf89b9c3d6466f007f1d9078981c764736f6c63430008150033")]
    contract UpgradeManager {
        constructor(address _autonity, address _operator);

        function upgrade(address _target, string memory _data) external;
        function setOperator(address _account) external;
        function autonity() external view returns (address);
        function operator() external view returns (address);
    }
}
