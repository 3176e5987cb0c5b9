//! Bindings for `Stabilization.sol`, the CDP engine behind the Auton
//! stabilization mechanism. Collateral is NTN, debt is ATN.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b506111a8806100206000396000f3fe6080604052328b92a74f5d028751492702218cdc7dbafa869253ed7525db4ca4338a4445aecdb72b7b498f569efad5c08fa29dac4722b23e1f8dbc78450b8a40344abaca015e4a7db943a878d10990becc5528333706265139c35e292860ef195133a8ecf9feb91a7a90eaaf63a3ea8ded0d92f71172076304ce62a5d35689ff66e0e3e361dbd91ce54c5f549a3edb3e5f2ed69f7224a7b5ec9ee4b53811e2f087d70d864fd76197dd7e2f2c7fcb6468d4d022ab4ec708245c9f0d586819bcb0ec457e57ded3f564c7e815811ed33e336224fc99243428c98bc37ed60b8dc917204b07f6f8a2e91f0582a6d88af222b43d8e2b7d41e173f1bb161e3c99b02386d86131bbf8c9967f752da2ac75205ff218263df99720277737148ff55e9551707c2170d7db2638157d87eca8233567b477fe87015495bd0888c771c2d9ed4d67957e8106e0e2e7cac38728983e18e001da9492454189fa0ec46852913149e029402bb19f7636046a2bb2c536c7a5a65aa3c4646ffdaa5f3a9746ff632f8cdde7e30f83365405e827dadb7690ecb933ad945efde8c90e3921827a1fb6b88ecdfdce23e1f756e14e9bc1c9a1b124390a16f4626daf0dbba7b19383406635a8a2c270ad6f732c593f75ed17b2e6a069e8dd5902e498aa92bc76d6acb7d8ce95e399af3fc4a42b19fefa5e15ee47560799806f7d7aef18aec573f6f52919844aaf614effd5f8d85a7668c4087646d9b2ef969e6f39107c1435fa580b6cd6203bd633258aa7f3919c9795df92958c41a2ed980824987046e8c593d780371ce94a59ac83adcb84662e350f66cd09e40947a6799ec43601112fd6e006ee6190f2f14c5a63123d96af8ccab600b5ee4cd8195ce96139201c80c273b1fab1b0ea7a0406e0716c67af0616c2102b8cf018414b8dc683d1e35c804bf64b051c992d1a0c66fc7f1a903753237d47c979881759b500b2306dbb5fd95202b4b7a324183d571e4c55547d8b16a52d755980f62445bf0a027e7d8e8d3f2a89a7630733172e7c1fd7b3e464feb00156d900eb338c72f157afc34857d4aa8d702c7ad05ae3ddfc5996e83763cf630797cc25c87fc5925ec5356f8f271f9724f4a2b596f0aceecf4f3115b97fc16955a28098bc06306bc8cfefa818959c52ca0d824cdb73965a890b0b4867e1608e88c60bd7508a6a0ef71db7e802e87541952cab0d9020f03b4a4bf94d354204053b2ff7ec9fcf867786de89ecdd1e103a756f08108798260903bc9af60533326132ab38afd894b9209f06a609aeefc40e2966137255643685acaae29fd31a74248420372d5712ffe5b9f9383cabb22a0638da3ed0562379d6409469a6ca3ea218648f82702d1f791680b7e75523ca4765895c3583dc058d46cc387b01f38336d7ca596d4b4a4ee3d6083c14259151caf9dc2f54f04851b04a0a7eb47961007bfc17481a26f3726ec301e30122634347ea253afdedb17d6b87a7466f3af307412397359599a8887d9a3d82bf46c141ac263a2d47c89d8fb86d6d65ac30914901bf051d35f58025b9a3998e0f75dcf67a50bd8103efb624c7f401b6850500577b21c1e8c5541f974986ac1a2865efbfde62e2352d4e03c3f0057453f4612834ddbd808d19f822f2b97dbf50b5b662d9d7212edbcfdd5cf26abab6ec1b5f7f53f4bab21af663a3d74a7e39ea7b466c5589678d439adf1f27d6d3a29726bcfe13e07b03e93f49e287cf1142a96fd423369b5c47a393fd5f29a8b4ca12845a294829de263f48d05f9851542314976201b57690261aec9225465a7a0478ec849902e4342c5de95df6e8c79890a93370e907f89466883f2827daa11c4096f8d05593dc77f2fd9e169a1a0a3ba7c32f778a1dcb52e746b2aabe1ef01ac7299ecbf96e604084f8b7df5ad43beaa00123443e3108603d6ec88d3ec7f46b57d6790fc0037c82e96ea575654d07f20336f0965d60ea0a8d13ba7663329ea6e69fe74b7ff4739be0d0e1ff9cfb2630ad70b3bd4e42c213670232d770e73fad5860fce27d9f4896e09c16348707060a71575e5429915116fe0da1f542ee457ec4186ac8a720e4ee65eaabb2e969c2147ccbd08e5c31d24ed6a86fdf76aa28e6314fde96b18ac7ff0105560f24148341b2fe7fe405e8dfdbb145def8e3a96e6362660e4414e4001ed312f891d5704152afea14549404bcaa0d8536f2726e6aa63b12a1068c738406a353351a510e697d04b8fba3f6affb9a73066b1a988e8523d1e267c0a608146920d18f797cc480207095174aade2e478f934b4c5f620f15370496747807fcc719da05368de3ba1b975d808eb6ac2687f45800f6fbd33ccad8a72bccf6f3f2c9881070e74a8cc9d0a2058c5ee25521752547423928443556c19a26932d2d1fe693a3e4e0d0e40d7b69a765bd3c3ed13f187b05e525b9eaf6d93a5ce83d2419e8b16ee6a03f4f860712cbd2c64c2ba66f12b381492f433618a11c9f3f7322bc86f48c83c547e12e14ed7d1e5f73ab818af03d512d71fba7b03f2dc88563f10100669d78ce5cece5c8da6f96a57078d6bd755392eb65d813398d6371918767ca6651ded88c90cff17ace7842166d3d45782812575dd71406141f67bb154b6286919425d16953181c8638cf9115c270a74788342dd1b68e33871d0944911f0a60d594ca082c64651be6b5e20f5298bb0711d884ffd01b38638ef023a0d6a98c2d7d9c184dc2eb35d185c3ee97c37f41cd04164604e5506340348a4b9548594f4a0a97677ee20af23fd9fec97d63c92a8c29c1217abff2445a35d4f9e4a01dbfa18a41339b00fbe7e9f90524d8fa304ce50aaca29fd0aa348bf8966fc7bcf146ef6396fc3418aff9981bbb43a2232f3ed1e922d505581e9103a99e7f1b38cdfa77c6c54193b20193f05622964c21ce9faee26db58020175950fb258d7f385ec6923d9efcbe358f90f6fab3bb98e82747ab4e1bca45e460fb97a3df20cd5bf347ca01da31acb1ba5aa9ba43a1f98ae9f19f1e91f4c4a8ad8a2ab4aac7b32d5cc33f09b84a26142c949777978b65fd12dee753f0fccecce95466a2aa981064f85dbecf2556a986c2cd515ce888cfe905c225198429ef65143bf6aa194e0b5fcb8a5083757a9eef9dc13ba3e512a9452acf5e86b3ea3fb6e4fbefc950db17c16475e6d40c399c2952d2c27b9bde43ea6749a59bab9fd1c62ab5c355547e3a8e0a894d0731356bd6766237cde3b9911eacb06e15a546a28363873d6b93bc0f92bc59cd7d30d9aaeb3e504aca7936b7da0c710e5861af3d2ab556ac03b5177a55f94cfe7707ff2256cfdb7b1a44e46f80f6714f00c8c089d7872e29c7c9f5e752bf19b689083b217e8b9766dd11a49b76c3881adcd47701fd766cfdc577f2aac7ce20ce5c24b18868fa772e9c1c10f376df2475195d817ec6ac37e266b40ffaa9d61de60ca0bb212f95b2dd68a87a5aac814135b90fb307c9af7cc01be6ab08a81f70185e814514c475320d28ddb6871112c89d8e432c184a9e4eb901af286a43c53dfc77fb99f0e616cde7e6e1e02a3d9b748471ebaf8752128d0cef766462296badf5e78f3d179e2404e7cdaa5aa0ca8ebd4d336bdc7742dbe3613dc729b8f1802664ce08faf67e4291a42db306e78bc8d3c535b79a6c7778efcf8e141ba4fc4cd32febaa0f82b65a621977d9950945b73a3b5ae80775f3b9c8ffbf42d816102a3ca6c1edaf5b3a32f75133c46ee5d78a5034e99181252271cf20cedb63fb2480be7a5b7544bf6097fe42ee058509d4ca173d7b94fabaaab072b9add55aa6885096b2a493518c468b2c91afee22d161f243c3552154aabed8a983b053fa99e1d4e0d35c9ef69735691ecb72c4bfd7f0abc48938024304f5c6d2cb7a88001f7193ad6a0577e47b3735bfc4b0779f11b4d6a4351f453a5a6826d2a76790fda9d49bed7f6061636679d49bfb5d6a87c58b8096984a88a57bb71329b72de6c89deedb1d0def831b138a7f13caeaa0f2578df754fffe52736e06ac6c59068cb2d3edbbc2cdc58d4a865d4a32ddaa53f614c53ff8ddd4e12888b7f1cdc3fed6b020e4efdf16ffa048e225268c5584e2809a9d2bc05196462938fbc3e2b2e53637a97c49a9fcde101059de94440a027fbedcb7d33d539abd129446fff466240f793495ba261e4fe4719d01e7d936bf4d588964e4176e0285827a752436e207e14b14d13499f570272e24f4c4bfc34300786412441a1e57fffe2ff3b53f469f69c9fd9f8091be9a57ec1bd595c698d288216ca3a922395dbcc85f983023348dc5b7545fa29a1178d95ca90f5316c99c69826bb6aeab5ab39e02ed455306d89e39cf8531850f75642ea297c337d439912d60c08c9b63c59530da8e459b9c4a21edc693978454c17e1ca1e8a68cc89a18be262711b2f1d2b133d50223b42f2de6f8e1bd9488b45d9cbec5d2df09eb81163d4443f1fcc50e7037f471db9a97f2596cb8df9011a2fe6a0bc8f757253495d456c156ac02173f337178b6a872ccc911c685c0257be5e2f923016129e30320f044a0c5d42eae2eb20254b50833f480612df6836f33bac7c243627e55c12f9e44493267bb74e5188fe615541b32a7d8eebf62a28d2328073998d92eb8c9bdddf1c68b1e8a7424edf163a6193e1c443ff4c3259217e2ddab3412f4594fddaef530d153c4460eb125548b60c4d9fa5bddf04bb26fb7b357d9a00cad595f5fcd9a9a819b4c8e2725b2aa003be72de1e77b9a1584aa90967e22ea5b3769869622d3e68dc654f4118e3321902c2c274b2fb6ba85d2f05607d943952b8d6e9df9e9c8684f18d8a18ee044560a149f800d36c90ef6f3f0a823b0d8ab8e8e981b1d4d47086939175cff34ec78c3d931707ccdc059eb7d3506dbaffbd274936bf7487d9a559b810e67dfe8e208798707e86e39a7b8b3a567e5f0590a8e4a15804c93ce8ab7582f47642e5565a4babf58d58ae5fa26a161969db07489ead3b5666426dc65c597302fd13f06a6aafbcac513d24eb0ff64276e5c30f725df6e24c635d4aca479f97f5e9dabbea33dc141352484340b3d98fbf3427886ab5c81b3a2640acb1af4573d5fba3850b6e6fedaf943c9231af35bb083a68f57f98801365c5cb62afba5a1c473e23f3c7c8a0a33600154b12a74548e6a01484d62bec245410872cdc5c20ab5dc509a99364ed65d93889d1ca68b6c5489d0289ec096fbab092996a1c03ee3d7bcfef6cdcbaa9a032715f045677b9a504c45b0f482994a661a90ba4b18391a22d5ba6b8ce9c4092b1f7a5601f076ae692f6835147e07ea11d0feda12d7e82bacfb8c2c312af61b784ce1d935487ba7b05556ccd23c855d296e17d8c1ddf42f687a7d33091d0da7e5dd3c723e53ceea87602ed0f97c85afd74485e68d1d8bc23f3d0c2c328291145b06d33eaa498e991b606342e2c6622ef30ec7012a54343ed944d57d732a1475fe298dd240091c224a27a317680f943782e504364a40cbd6c55a1199e291dc1fa1e36db90b7e9d1a6164977bdd77e2acd8bb3e42268d3450acb64b0ca855eed6589bbff9c25abf0f02b682d92afc786ac406c1fca8f307493c89e9153a62e307034a7228b65959f878fc247f28dc82965b8ab898684c2a34f051ac5f699e0fd004a380040e924b428b711cab9b83895ffdff306c37f733b6e9341590fd61ad3e8332eb97d31680d5763b1be22353ff342dc13c69a281afd08254282e3adc6f44e74bc10ea82a263dfa9c998d7e4e9c8f60ea2b3058093d7a2f89557f8388102aab1f77176c08255a1509dc33171aa815697fb4306db7f1c20f45a16e16dc8ff0e4ef0711a28e1c11d21e671fc5cd7b869e0ded00bbe2377d7807020bbc5c5c09a4dd4d3ca6bc4e3a97d61ae7f5772e5507acfc8e34a83d528776329ac4c0c2a3774309b840a69bbd184729843123ec02b91c2313c71e07efdbaa8cf6ecb9b9ba21a55322e5440891bc51a49c3539ca9b129e28e1aa846e82fb724cf126b07a2d4bcc73bd89133e39c26ec4b648cae105197cd79ca0801263a6aea5bd045aca23fc35c69c569dad02888b7099f545ffc30fbc24d03dae23cbfa46807119b825993f955e2be6da81da64d99adca75c2cfd5dabbd0bbb0e3f0e637baf749a321705d418d19624a536e40be02d34aea6032e8cda0e3cc9dfb4d321c26ed833b5e03b52f77d64e58ce7f554fa6cce2162423cb8b0ef3d556dcb1155d15ab858611ffc6a0a66f7fe67329ccf303a374ba8ad710ca80067b84b8395f5b99199589184b7217ce3f5daf45ada52aff0a344a9960d6eb0302c3e3cb9ba3047e7ec568a2646970667358221220e11edc6b401def15b3ed369e544480544e6a1c3255705cb4dcfe11e1ccc1aada64736f6c63430008150033")]
    contract Stabilization {
        struct Config {
            uint256 borrowInterestRate;
            uint256 liquidationRatio;
            uint256 minCollateralizationRatio;
            uint256 minDebtRequirement;
            uint256 targetPrice;
        }

        error InsufficientAllowance();
        error InsufficientCollateral();
        error InvalidAmount();
        error InvalidDebtPosition();
        error InvalidParameter();
        error InvalidPrice();
        error Liquidatable();
        error NoDebtPosition();
        error NotLiquidatable();
        error Unauthorized();
        error ZeroValue();

        constructor(Config memory _config, address _autonity, address _operator, address _oracle, address _supplyControl, address _collateralToken);

        function deposit(uint256 _amount) external;
        function withdraw(uint256 _amount) external;
        function borrow(uint256 _amount) external;
        function repay() external payable;
        function liquidate(address _account) external payable;
        function collateralPrice() external view returns (uint256 price);
        function accounts() external view returns (address[] memory);
        function cdps(address _account) external view returns (uint256 timestamp, uint256 collateral, uint256 principal, uint256 interest);
        function debtAmount(address _account) external view returns (uint256 debt);
        function underCollateralized(address _account) external view returns (bool);
        function isLiquidatable(address _account) external view returns (bool);
        function borrowLimit(uint256 collateral, uint256 price, uint256 targetPrice, uint256 mcr) external pure returns (uint256 limit);
        function minimumCollateral(uint256 principal, uint256 price, uint256 mcr) external pure returns (uint256 collateral);
        function interestDue(uint256 debt, uint256 rate, uint256 timeBorrow, uint256 timeDue) external pure returns (uint256);
        function config() external view returns (Config memory);
        function setOperator(address _operator) external;
        function setOracle(address _oracle) external;
    }
}
