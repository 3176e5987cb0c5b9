//! Bindings for `Accountability.sol`.
//!
//! Misbehaviour reporting: fault proofs, accusations and innocence proofs
//! are submitted as [`Accountability::Event`] records carrying the raw
//! accountability proof bytes. The slashing math itself lives in the
//! contract.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50611824806100206000396000f3fe60806040524f0ea68d4435d1bac1e20de6c0b29afc540663191dd37296720cb689263b9533753a9ca80ca5ad28847d162bd2d7a7418a370951888185ca40b3a035a89e57cc9aace2969b02fecb35c169fc5736113925d4ce641895061bfd2e4523cc4434a76275a48117a15154df44febefe0ea84ca5e453e5a1aea51baa6db2ff04e2891a2f5446bb423c1eebc5530173df844faa370ae53ed328a890edaaa27916139389e375bed671dd879da8e34e4a70d7ca7eee9cabe878070bac80e0665e32e173a3eb3ae416a6104510add4b0fda31afef56d84eb4a8c493cedd45105294ae81a1d8b2317eb9ba71b53cbf4122d230af4fde1fcb4f49173515fc4fea4b3e9ec574eda50298dac6271d974e8cb278e6c7f319ec39f950ffcf8c35b256caf0d9315dbe684ae1f5399d7d313f21eb197ba8bc3daf522cf60696a5a713e7d2ebefd1af28906f3835d1c6e2aae2a4edc6220cc6c9a4ef8e11d504d0322b1fbf7b12584a90e2f2ed6b5f43ed7e1ae6367897dc156ca22b2fedeea4e35f847feb45896616e21cf7ca53f550e326127aa01048333b16d2746c94c2dc95e2b6fbeb62a46911cd595c1e0dc5a38efbee26c6cbda372ff917f3bb0dd0a088daada43cb9b093e7d310a367a21f503dd41bdbe3533b1fa9b7baf2ea2c5a998c252ceb275691a1c1d2e5ddf9c4a3f44fe4dec441c996cef83a8f1fccaf01e0bfb8c9c7363aefcc67a87739f1d7211a4bc7e4c82605a90131fa7df4f0462d2207889d23cb8ab91d0015fafe70111e554b3d40ce20bb028caabff632dd5f50a4b041d2726ce723fb02b06b9697066f54f4214b417e0e81bdfaf8c8641f13dba59df4d12bd1c417c1c411682083730e635c908b3c9a8c1e339d080a3c16e09557c6003bac8d10a0cd3b823339b00cbfbc5c0aa40113b3fc96ad50d6016e8468d53a8ffe00f32ea9fb70272ff79d096bb9a2470b189a12bab02d42b05851908617796623152b2150c891199e3f06b1c254433f5ce282a834e6fb2d98cabd62b053c7a7bf387ed647420c42679ad6a77a13b65ee41bf14ae25ec7994842969c88d435eb67b3dae59852d37835b67dd649624331a67e1183038647db422a7e3112b8f9842f5db527ae24e0281084bc88345965e6357be2b06a810498957881163054112b8ccdef9fd67c445f5a6fe147c37fbe1c27f95ef08e39efdd02001b464fbd6dbb946c81efd0945583ac8ca8553ba74a9dcc5ca220d103075da76082c09b267522a77a94168b47d5c85375c27323d9508025c864dc94326b88805590f46c63839a2f9b36a1952e57da6c4761fef62ab37126f0c082b61b4be6dfffc49a7319bf40a82a2dd0ddfdb5bcfe9ab5e7f2715842b348d79c338306c9be2c2d62b0726032800da1c8f0f7b2205750933e988b0ddc75b18407f2f295bd1974664192e5c6fb2ee906d2f0ff3a339facddde4bb2a8649a4de0bae58b1b6bd60f1e31a4180d639ee38b186696737e08289939656ff9c0f20ff9d36531b4c58471c856a087c286b5f972418e72247172c3e988a0d9d2003a29195a79fe8f786dfb522f893bdff2b25fd9934e8568250d71909244009ea8282657a7498899a9149d952f22351b98b40f83e4afe2e13dc9d564c96f58270e82924932102bb0e9c4032c477988dd4a43edf7ca33cd79465667f72e5bfb6423396d49f1dcafc10a6ba76cb1cdfda2ee85314f57a8c3c2d4c73d4aedd69b88c63cf3b7bdd92d3a8a5994aa92fd12dc89c928106e5288c3389a20d0a21d6a62e3f5a4310ed255c8c062f176fdfdb9200e0ed7a3b84e258c98800478515fda7dbd8415b2f70f1c9e79ee5645ff47dbb9e8c9396f9f9550a87144b995fb854d2b790960531e0e863c28dffa597942e4c561874f571f781745987ca932cae43580692001796e6366d1efbfd20ff899a2cb5f367afc41f3e0252ef6e11fd6315b3e325f3c52db82bc8f4424ed1836c161bd1e21935be29b65ed76ba1b0b4299e3df795f38e8e108c95b871e5bfc7cab1356bb1b13ae25685720b09983554b36a2c4468308b1799dc5cde76b58218bad74ac79d94c6c58343778ae36d24b557dbb2d63ab4b080b1f3a56675194d6603b171e1bcd781a2e37da3758a3c196144dd37f3fa224cd48673f2262b8f3068b32d95b6c3af07787ab1b65f941385459d4919147d2577c9a0721c1708c153951cb1e32f630f1539427eb2a18b3fa54fd835fa22e55c9dab1d23c5706ee3180f64982a682439832ddf22c048af4ab1bad16cc082cf027a860bce0b975ef1321a038912181653a0a895f9b749433cd8e4aedb123f7f9eefc9895a830dc9909c49350bdecf36e319ed8283874cdfe82cd62be79c2c0f96ea59a13494d268d44d2dd721350bd02bca5030b4de6ba771d9dd6856602e7622215f0d2121b9dcf4937d147769c834ba6406f0e4fbbc7b1a718081cfb0fe022038212208f1795ba3c80242b5d4c0f43d173ba4dee34b021337c310b4b2678c271d3bd3042941abd9536ebb13afaf160033a873520ed7fe4b1a50393a52f47b2c8923a0c3b1335452351e9e0460b0bb41c5e16b0423cac14c14efde173048163919d12dccac90a79b3361fac16f1b6a1cb6067d1d23f6dd256a3b93d4906131c828238a7354992ac07064e16eb9e1383161554b15c18871864df26c3985cb6a8443d2cada90f94c97ecc640172e311ecfda27974e0025c0b13255f53305d868f9a70d9b85abffd07f29efc58309d2ca71b00bc49fe030f4015333b3bad733ef3f36efa63ee795b1a943d98c46fd92f4fc2d5c85bbca167cd0160cd06755b2e8713359cae00050286694ee07b034339bdfa07d77accf98161b4687bfe06ed73a4c74e47ea34102501e4c36fbe4c7ad4a4886a6a352707e86e343b9a686dfc7e9b5ce89ffd563d9d3e852b02eb86120fae0796ec187fedd2c7573d410c6affae410546d7533eef6d77fa5059f0426912da7be261437bb84ebad9eb16fe4fdb3b4e2ec4b79cf669ab033d5c6e4111ad96cdd53aa82b6c8a9c723a81c2410974baae6e9ae86b63515106829c90780aedff85924e97ff8dc03e6f03d676203b16ff83c232eaaf78a0fab956abcb0c864665c6a991680aa9907a71cf770a44c549d35550d54f848611c4e93311c355515395c4691ced562c53c54f38ebc9d239d6f7169a6091a8dc8bbe69e4e7ef119d3882b83ff11cafbc9e8ca7b70d9f0aa7e3cb8276fe13dbd60bba0a24a11306afbf84d9ead6913599deefd9f2b2f71a88f6727981eb3006bc914c2b100192183ac1e9f339959d0b3b76686ef895655522a110f8515eb4b0ca9442421180f38ad56b3af5cafeb202972f0b4fc15c8f212cdd591f18cba44b194953c62532a2e6d24bbc26c305be6b7721fba0c8ff93e6c22e56077a0bdbb055d703cb84984a6326021befd008d6edaa8928fb86159fdcc8aaf64b9f32c5bc1dd1d9b5cd40246d3e41a917deb4768f0f3ef35b8ec718c59ee30300390780d8192368a2a453a7ab9de8512b8fbe2a9bc05df983f22b1b5984a875c193465c20f17021db9b1c9b36ab7a90247bd82ef75a0afc90c8a2a2735fc387fb32f24bf4df2b0a6c0cb06a25392f7a111999b4d685df56f283b61184b7bf7ad6dcd4048a9a8bed179a980202c70893c8169a9377d773f2bebe4d7abaf197c70cd174b27e0851edc7bdf07679af7d4e9940294774f5ab642797924f68041ac4dafcf81f5e17925de49fc06f6be88e6abfba3d6dfb8232a2b298a13988c4c803b4a232b791d5b4538d08b404e67da484fc455137a09cd86ba0c12cf3471e04a542fb69e1a577317598d9ea25eb66a9f6f2c64cf04f81a61c4c248bb5a79e8c2398500de17a9f5a452401596795e5566b9fcb41cd20db868b40fe99d45517ea7e3860ffba928ee6983a33528f28491447335e20644d2776402626d1f0c5df716ac5cb44f3fde85f24beda799fe55a59b9c99d6521ee89923ac6584f5ba9083767daae7c1d70e196fbcf29d5e8bde540384aa2303056994e4ae54d551a1533c08097f79935d18deec97704608eba79f05cf4f4a07f561285a96148cceb7686d738f651dd0d6dd79fc58befb69cdb26a57e1173d7c2ec3b99e246806c022209b606857b88571352925923bce0c78139137d5ef5d9d31c882ef17585e69c3fc05fab2e1505b2f15d4ef69f985bb916a48f69e2923f24b15df0428eb7885ebd80ff117d5347d2d1db92175f7d6ecddf60c95fee1719dc2f6c5b7972d8fb3d06694106a32550edf3b8d70ea858f0287a0d60ad7b26e13ff6703332af416850aba050493f051903ae6696443b39ac93c4e3044bb997ce77c403e00c2701744047f73a6e33813da0a1c632fabfb3f190f6c0f869bb26a076f6cf76367c81df3ee08756f827b9f015024770a391bb318ccea3d7d457e53002654da8f2b2f3e024c0b3b5b2ea06f8a05bda5c02a5b4f24b3cc4efc2fbd2d6ecc844534bd2e7096e4a9d51a137c7b687a6b863200e281de281f524ec40a10779361035ecb064325aa16bb77cbdb6836f36dd8c1b1dd30d66bdf195d47ec9067231247f5ca57e98c7e057514e5fa88d55fd9f2fcae78484a89c2e3456ee224c11ae607efb43e4fdf4242ee8086a1973aa1024038415618062388f33838f6d2d2468267b61d3291483e3bfd496b4db570faf08811db0a30928a8b2b99ed6ab227a12e84f615ab5bbea912cbcaffa6727b5a7db7c815816e5154f6b5fad475eac593f7900cb595707109ba57b98ee2443cf384ad0861c3f4613056a31e71f612b57b4c15c717b7b35d2f7f8410d34af3b64a6b07e268ca90052cf724d6b2903ded2523bf0e6dde19a053e4fb4eca0933f18928f9f70077528e5f32767b0532e4fb483283181aec73d236eb8b1312e4447fae0da520a9dcba6d949cc1666692d20d5c854a1c185b2c1682acdcd81935bace50aa188a7e966dd205fee20ae94a173faa09ef8985509853eee3ad0718114104c0b2020cb21775e475bed8fc5400a05af106433841fea247132699d33a5a6c5850cf392d1735672793883310fd3fac9403bdc106ad99b4ee2f69cfaa5f9221f92b40136e75672317b6db60a77dfcd15353194f63f2d8560575a75f31046c84b856bc0515141a003fcec3847e1436606ca37716fb07565a9bc910aee4cdaa0bc3c4cd465b0cdbbaf1f181a004a7e918b6fedf8eee00b22913583f6ee74357ec661e1ded25cc7fa11be6df4d370b6e79f20844b5cbdb458e0c292cb4b660ab2c7cbce9d7b7035a5a1e9490cf531cf2ed7e3584c567ae7695b6bbe045a6e9c44000a8b4567dd3e3626cc15be615f7ec6af901eadbc3457301ca3fff551250ee4e853d693a15ddd8b4f385afcab938e783556a1667fb806e84ebf67c8300d3896880addf4ceba8b86c8933c36a68eecd6dd9bb417ab882c0791867bae62c234d878ed5c78c2f72867398701a16926147bfec09eebb8ddf18c5c0e73b875786a542a820ef4c14a66543fc2726679533348b7ab485d780c17814512de06c366ed34244ab1197293683bd3d466a313625c50f35f8f00ea4b75b2a870385cb74cbe03eec6c1fc6202dc098c41b5ee4c1209032640acdb00095e4fe4bc5f119f6bd849d458a6dd97205f12350ac7f38753efd40dd85fdd61ee3f77884562707711b6db8ab512d42f7bd261595710b585e08dc155d35b7182821eaa91a66434bd66990eb986c7cab07982af16d91c009f18464a163ba1fc60b39f1b109cc3f5d3a6c2cbd290d7d759c9fa1cd6f03b61b8f081352904e934af2840db707f1481e977a0dc45d2f67563a27e3815ea40316e33f8b74a0625ba69d827c3d891fe1bd993f425c1f2979dd7f5b3379bad23ace25bfed72a6943098941ff1dc434629bd1cb5cf11e8030df021d08f97600c2f983d0efc1747c759d997afa7f2a76f319f1ac41e6a06d0da0b3add0c6dbc1171e39f3e15caf5f25e26fe6fd7ff9140f6982780e9f11e94e5913a975445b6eb43315faa7a9176d5d70c3a0238b8ecf95e3c2b2a9ee5ea006254e588122eede79339feede5481676325136250fe6bc3252f67ac7019de4c56ee3f72aab53af8da2f800a3aa4abdc0167d349189dc559e717fd53bc71cdb8b0b4e9b97c90d522ab10e885ec1616e4ba718cedf119847b70d764d395fe1cc2588e7c9a954022b0631ffa7c89cf308ec6b7f0d343d656dc64e55d0d28c771d374f13d3f3ccb0845d6233f199cb7037e3ae4d47cd3fd89e14a56eed1f302e6489c1dfbd1237a479b2cb0dcfb14992ff68fe19cadfc39c679358d1435e64f2d540a0a51bfc67473a75ddb8c06dec94bbadc462d226fc9746b5695393a2a8560cd04e79a1a79c1534f4f8949059a702572cdd537b9e5bf30991c28b1042b37acc2b13becd5e4662528e9cc5951b0d9791554f289e4dc22743f09af3ebc864a688334571880b78f8303fe570a9052b0471a6944c42f5ca97e2d60e4ed72c86f62a744fc0011fb3d87f5d40fbdda036260d2105f524a8b692e70ffd7cbb6a1af18854d47ca1080c5ac746c0b5c23614cdf4d8d7a3f16f2ee6ccbcf6ec79873308d7b3dd1a3be6c411f7df83ae683620dbccfa597eb71263721d35b0b97de8f538261fe784b95cb6a9ee1d9d1868743d0d80d9d2f01e87a5d41002a9af6e32a147c00f0760a2edf2b48e0fd2e31463c46e905386a12d7f0f1f124f94a7b550f4b022a494c637a2011a0c52585049053b8c853ad2c4e24bae04e216d8d02dc07013e3f6b8925fb23f43df725413ee2066c2767e0d48a4e0e7126b8ecc73222ed7b7305cf05e9fd273861d6e64d774fac5f380ee87753bdf4fd4e502d6db31cc3b840cf297b5a3178e6c5358aafbb4cd673a05463cadd42ba343745c5202b8b433294355a74ed61be9f1add617de3925571212e04e854098b22dcef049bb13d001414d9d272a0f941bef4210eb9600d17d5e5ef7f486dbdcf658844228e0bd9b19be45d04632843a80d3adffa7c4cc1b8f95620c8a95a6659b9f99c14f9d54dee4e014f141d53c9f147bec8e63fe0ce8c3ca089c6afc1392c7d79582425f768f87828b9b9b6959d9c15a8b04ab96394840b2f7b7b62b37bd0d20aaa6409e2f59c8aa61ba26c18a48144277e4690a20f1b7568650bd45f6a846f226d802d03d37d1e262cef4abd1b1250f938c68ade30326c3bd5b21c3d83bd8131340d57af86dade83d803aa3910d3d1cb6299525503232cd42eede193239b4fae6118762d45957aa088c487fab845ae24bf218ea49072a6804c86e6adf980fa8097be893436f00e6ec8e19c6adc018a129641b5299893558c24a82facd55cbcccf62ce8236839829ac0b1d54e78d7b0b0d7b86d99b3f9eb2aa41ce7e6fbe73b2c86a090ca54f04ff9fead87da72167e07ddbbeb102cb0ff9afd4994f00bb984e2b51518e710c09a208c7947df92bfc8427be4d2030b282c49060cbf4f39c3204ff25244bea18c12cfbd09001782c314a5d3f6b98792386b588b857a0ed5100d2609653ba40d8bc3829330bdcc6ec538a21173b1de90fcde277906f010342cfed95930a76f65a6506bd75e8e737a8e41751e42a8483d81f6a7edc43f57b84351ebc6cf30563ed2c1f0d1130cb6eca3937d816c50f4706cb35681869c59f585bb0112213e0ed315f63745ba3732fdb19a297669e4ccef180a5112501a72fd84ee18481b22a36d18851c622dd424953832969ef88cac25d2553a183dc8b95c9574b384e667b720147be5ddd8984341eaaff8b19acb9abb881157f3218cc59fb610e8ef0f684ade56ac78ec997172acc7432e3676546198c8d44c84c144ba9d8b2fd644ff4994a91f73d3816146d161d6560cc83bb6983bcd3840d3d1b2a67a3fc4beba0fa42b7959a44efb8b3bde9c05aa28f063197e682ea9063212492f1792a784919717143ccc91027688d2537a03ee31962591f5c30c1f163d76c4f8e69c0412c4e10f039824f6900be78bbd35d8d21fd01b72f2e2f245da18fa8e4ee95675091f9bba5d2cba67f493a5e2c5ebd21834e24b7d7462961ae774d8930825d4b0001dcf2ab43cb9f0a8fc664c27edc24ee4f3c33e229d2f121578348984fa4dba1470dd206ca0181e5e0b8475737d9af37df2952d3b77afbd8df55e30f5db7a320eb965df4e2aa32cb62a864c8584c0e02b2a06c14ba10014d67a3d13b7bdc641d1fd980e7d3ad62353e4d3cd0135c180d7663715427e106760e0017fb8b7d3373cd7f69499452e7847ceec6ae1bfd406bd632ccc403b30a9eb7faee0f995756460230fa584d48908cda9904ebdf8303d31e9acf486c1abf09fb13cff0226a27b5a6fe3cc11bbc882f03e40d6cfc8501b8cc1d12ab25fdb78e5f5e0ab139faa10337097a98d2a7695d147f37b767ba9b06efbd03fabeb57184ff77c7c6680eb343b8486a2a1ef49439901723ec2782b8e94118556b4d2fbc015c5c196e8090d28f8bd9ae339567d55dbf5f14c1a781ebe1cc4940c069dc5c8aad59dbe12f076982893bc1aaa92572e3c972f5a34bc0b53896142e3b027346f5d7a0def6c9e2f9cecda547e54e5e1fd47b47c2c404c5b7cbc4a5321d873230acc060c72f4c15c26f96b4f925b4f592a33bd221f180568e2a9c5d978bc8bf0709cb68a66b44245a5f4055b18d2967cfa2646970667358221220cab3acbff7ab62c44396ef47caafbd8c1158adad18081f92991618c95f394e0364736f6c63430008150033")]
    contract Accountability {
        enum EventType { FaultProof, Accusation, InnocenceProof }

        enum Rule { PN, PO, PVN, PVO, C, C1, InvalidProposal, InvalidProposer, Equivocation }

        struct Config {
            uint256 innocenceProofSubmissionWindow;
            uint256 baseSlashingRateLow;
            uint256 baseSlashingRateMid;
            uint256 collusionFactor;
            uint256 historyFactor;
            uint256 jailFactor;
            uint256 slashingRatePrecision;
        }

        struct Event {
            EventType eventType;
            Rule rule;
            address reporter;
            address offender;
            bytes rawProof;
            uint256 id;
            uint256 block;
            uint256 epoch;
            uint256 reportingBlock;
            bytes32 messageHash;
        }

        constructor(address _autonity, Config memory _config);

        function handleEvent(Event memory _event) external;
        function canSlash(address _offender, Rule _rule, uint256 _block) external view returns (bool);
        function canAccuse(address _offender, Rule _rule, uint256 _block) external view returns (bool _result, uint256 _deadline);
        function getValidatorAccusation(address _val) external view returns (Event memory);
        function getValidatorFaults(address _val) external view returns (Event[] memory);
        function slashingHistory(address _val, uint256 _epoch) external view returns (uint256);
        function events(uint256 _id) external view returns (Event memory);
        function epochPeriod() external view returns (uint256);
        function config() external view returns (Config memory);
        function distributeRewards(address _validator) external payable;
        function finalize(bool _epochEnd) external;
        function setEpochPeriod(uint256 _newPeriod) external;
    }
}
