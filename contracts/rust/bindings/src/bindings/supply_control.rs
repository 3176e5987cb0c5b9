//! Bindings for `SupplyControl.sol`. Holds the uncirculated ATN supply and
//! mints/burns on behalf of the stabilization contract.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50610500806100206000396000f3fe608060405281e87f9ee9df7e2138b71110a386d2802e5ea7aec360a84d9cc4d0503632b98c13f8ebc211c647a93df1f61a3ba4308dd3b3a3ec4f06bfb7ac8492bef726d11adae6710d3f52d8fc8c32d985dc62f142325ba490b316b37f526023732f038097e513d2dfcf44fc99fc6efb3f568266b846e2d12a985ba3d318a546f51e2e070a6abb89e6f28c88c0170980ac038c169370b21241028ceb149e6012c898dd57264b5e71c730d8c1f9c15e66a1732b9277ad1923820c5f43901ef35a9014d7a224f276d814a662da53a2862d4aa1d6d46bc51d927ba6b6f691c871df5df382476f82c5a0216fcb472b6bc18d62909619330a57ac15a3649edfed83460edba485e3d127b82b34384c191bbbbedea828f96dd8ae516419b16397f3f20aac83b9e16be228d078bb4312b988baf87cb20dc0022e176a4d670afd1bcbca86bbec27d1bedc315c052eaf42b1b7ea271834459d9bb238eaf68ed9697c294fd7404ffee15d9e231856a89d16c65880abb6d2de5889250b175bfb79b1c2a446100bd9af3bf63a6b804debe529108d7951bf6832c84316eaae0af0486d48c69e937da2837300dab5f1160687018974cc608221478b5579526432643b02593bf43784df97dc9413fb4960ad9cd9a6c2e905340d48899825cc5d2c92c6e284b6b8efbe2710678804d0cf4c39a63ed9001d07e493142e61eca9e9f9296cb2acc9fbe4f3dbf67fd057ababa94b0e8c83a0a87ab24ec208d86a9bd1d3e5688ba3bb732c99025bddcd1b7cd5e5e8aabfb345f3590497fe3317b2958b064fb19453b7ea1e1e3b94f62535b2820cf46b2b43f76e8c9e9228497af4c1e42009bf0431f130cff77061b9886e63263b3bbeb2d14ca4785b788e674d6b91fe876c3534f5a4b381843f38c52df31557321767d3efb15cf37f6168e0fbeb605c6bbbfccc2dccab5b7f84a2f0e8ee65c18bf4804358700e1e523eb42f62245248e68dff57130dc5f6300f99a128c0c5630c7c6488da21230ea16ad624d9f0116bc15e19048f272edb70a22fd2933e6e195c6c9c2e696dda8e0077abc5efe3c244e8b96096d4cfd3239ac6efac55bbeebceb759eb90809899b01038221cdaa3a61ef4b479e4c7bdc232fef7f93811d1c80455b2bab0e1eaa62eae23b75d6c75341462e593cd8fb73356f5e9bbd8d792eab3b086e06feed78c29ec8c63730e8ed8f800807e77ce6517102b44933ebac345a06fe671babb5f8e67d2243672c19133943310bc190defc3b159f067106f0ca0cfca13f235e0459d402fc73162afb70cbecee26f01e901927d9d74303271b075c339019fd876ffa8e74d83d62d2f290ac7d75fe4022881a318b69c8fff3d4b9a8751e2287f543faf3616dad2bc1c624761f0b97c5ed4268b1fd3275909fb83f633c4030325ba7468f5058d63f2991b18395a6aa2d51b92166ed8722f6c9ba11cb69101af5e06244f727106a96bfbf3bca692ba5a5a67fb92d8f9ea0bcb105232232f131935fa7f9c374eda17b6729d1bca36aa1e617c5eb14e05bdbac86a3c8907e2da19b2102f1e74a4500443628fe1b3ce31974bc115318b17759cf0ceee1db685ca5609588c5f7c438c9bb49a40feb19dca3d93199b489c887a14c343a7f442d55cbb2ef766af634380c6220c333b9252fcf923d8d93705b7e31e7d1f0339daaf1bfebc0b401d93a63c338466467c0af5886d6909acc464272105d447dd872b2376fa2646970667358221220391a3549f672569a9f02ca2e95160555e618e45218bb7d4116c1ccca24dbc7c264736f6c63430008150033")]
    contract SupplyControl {
        error InvalidAmount();
        error InvalidRecipient();
        error Unauthorized();
        error ZeroValue();

        constructor(address _autonity, address _operator, address _stabilizer) payable;

        function mint(address _recipient, uint256 _amount) external;
        function burn() external payable;
        function setOperator(address _operator) external;
        function setStabilizer(address _stabilizer) external;
        function stabilizer() external view returns (address);
        function availableSupply() external view returns (uint256);
        function totalSupply() external view returns (uint256);
    }
}
