//! Bindings for `Oracle.sol`, the commit-reveal price oracle voted on by
//! the committee members.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50611220806100206000396000f3fe6080604052876fc5ec92433574dca7a421464c9561299e912249f57e80d18ad7ec917b1e5716e8dd0cf4033a45b9141a56c3dfb0d8b5e6d65bf05a5dbbe23f5059790a6230e6bb432b18203ccb2944c5ca3f539eb6625fd7f467ddec0e56365de5e9c34704df08e37b7bbc1239abcb462780105cff5c1dc7c5185da128a498cc91173f1c09f495459558db72cf7caf66afe3477440dcc5c7efc3bec118eb9c6b1292b2137b4dd0dbcbf9ed784ed04c3bda8ef5cb4630e32cb2a06167ee2d6297878ee474564fb06c7c0c9321549b94734af8b76535c10d92dd48504ffb97e609b3db5147452d5e2b281f5903c6652353a4985a488a1dbd983599bd0d9e78578a2d8c9bda4a2fd557fe35e2e6f24ed5793266a4a02c61ee9921784250ede71922cb86306ee3637b84c771add4834d983bd7e3d81c62fd16ac554c81fa8bafee8508b067a345525991d916a6de5d7a4bf42d05ad0b589782070d21aa7c30b722ade3ded91f305cf9a1b149df283c48397622d0aff6dbf980da8369b3304e98376613b6cfa4ee76243b7db8851eb00a0942b8c30be3e1af98e038ca5d5b7401b1e04ded9a7ce2dbdc11bd751135f205874b4981d3093cbd5e23f1a8c1630cced723a2e2818211ac4b68b94e57462e1021372e358f46685f88af32074304ca979080cac42a97b92eb5c4fb8e51390be63683c5c6294eb8004568fe7fcb0ca675ebb41ab8e7d1439d8f0ff82c0e9deae910bcac335b545cb94526b341fcdc2090ff434ecc673f9552e9fe6ae0557e58d87b254f7534e9434bb490a8e2d257397cb78f86905c26ea39fe9047a17da7d765a1a5064bef6daa920587752bd7b1ea77a2caccec1862d04beca8a0658ebd8eb9526b294e91c3c18b5261c568af014bd931d92fdc896a150a1a4dd365e6de3dfcd78d660a45829cd42a6ad312f5fbc466ffb886dbf03589fb17e9efaf02df2ea91db7e36c0240d3e7dc77eb1a02999b0686014340c4886a07192fb797b7ed3ba045b6202a8750b8a6dcf75f1c3ad62514eae6d973b731a340e5cdc6819badf7f17112ae3b21a581dd4a97661179d1d03e0cba7731c661bef1c678e866414a3a721e3b9895a6d1e01ebb438a4a85b843548ac41df305937de78b8236e357df9978fe70a93a242c059fe447f06fa4b2bf5b991fe0567b569d3486f169149f830ba683fb6fa8d7db1ed85118e6d9ab9f7344a90da78ce11f616206877fcfb4a78d6d520820687e51d9f898dd236e7d8b8c2baf860cc217f2431f8c4ccd8dfc60220768ea5541f134afa5402da6bd47f0dbda60a116a75af96e4bba56409af8fd2fbb98d33f91ba74cd12f3e4f076580d630a735ed57932b6a747bf78f31cc77915cf3bd5f660a84de459ce22f565ec27d62cab857e0ba72f4ba25f01fdea16239d23826de3d97959e55b2c48051fcb81f9130c5f7ff33618d058d916057054027dc6d03c8880878786c3ad12a996050bede9537cd22bde8814d531e85398e50ef37794c725f5e50477bab1169b41399c670b2da8190b640dcecbac15414bda15d7c4f4461572204d4f021a41e5628db23a2fdbeddc6af7709b574b62c1c29c333a46989de77721f0445e64e7b01524122d3ac4d70efd0355e6c28ecde6a8949d500218aba054c5b7113278a3cf67a2971e51933d9e2d9f26a70bb9f18a74ce6f1b4a6bd49694de0152b187e173d9ce6a257b73546261159325bb500d96a5c2de0f96aacf65dad74d514c490031f34aeeb3f73f3f2c2189a7af40bdd3b0d1bd6de7ba8ae0318f41b6a99d2d1c150fb2f1e48fcb68045d586fa5d71720bbc0c633a38c550dcd0ffb1276fa25c0441c31375e2c6cd4b4715148f6bf8e6fde89d014da216a8a98799ee96aef38ec56cf42c1a03d6df64dcf6ef3288d2966781db421c11a392532e3148e4aca9913716b7898f394cee45045ac0451d77a7911f2a6f43a66d438d4a23814e90ef3cdb2c256b5cfc24cd260027eec589b9d9c48cf6018961648a191416c76dfc99a6f18ac60c4aa060c4a8df8e43e666b5f9457d2da9c8ad999f8d8565d9387414f9b0c3a08abc53dc1267ccb8c7fbd3f809da1e7dd0d2c8f159e03abb1304e403540408ecc1395fffb36a7969ecd24a916652dda115501aa52379338259a47efc3ba31bf740066345fc79834e1af1b88f8d0c6dabcab13a72f56b35e478f75ad40a73634415052a33c25351b7999077118a08bc1c5b48df95d388a5ba8ca11e89cfeb7ca59919fb21fb7534407bf0be153acfa9f5f930b8d3989a4eac92503401a1cd5b233d84f1ec146bea83ddd70b1830b47e50412bc8c9d24b4344aa5236cbe90fee55a67c2e679d7748f3db1f39c6d05fcbee11cb9e1f41bae6139cfa1845b4871b5c6c9c75905622a542d76f161e34d2d900c93ac67b972fc4a00698a8a5c9af1ffa0971724709d04c47e3abe5f3baf87a8b4c70237e19f24c68560e70d134f596c5a9d88804e9f2d7f53412b7d1c2d5260749182c0fafa8db48813b319a87c4adcc4e26172c49118b058878f4e3659d7bd19ea0ad02dc6a3fc79f46c95739d228f26b7f2cae41d3b56f55c11f9ffdf2e6d918bcab1df65c1a59973ee1b63a32f2bc06f9fbae15d0ce2c86d2b80bf3fbcf986719b3d7114f8f7f962cf537d98e34b177cc4e0fceaf41d914a256ab13d00616f942aa1ead54fe551043637ab120aa84cae82b44f93662dfc673f836481074336d5188aea567e697007c8b4305bfaefda881d0622c125de6c1e1cbcf15af6edddbd05b5f91b48d08ee02e230c09d35aa951873488f0349ef26b3518877faec3e4d7f708a91b2206b86cc5955e2a61c190745b6dc05dbeb1d3f34a577b911ba65ae9d1dd80ad3f1f5d7bd92a816d918894837f0c3c754ae785f20eba8f7431d9cd9c02f68984d425b60cd6e980c099b179a699c825c5a18888b4d1913723fbf84d9948af841c26fcd44574ab5e3e7f5b14dadf9afd10f267289aff102741adfd6cd7ea3e0c594bd6ec0ccae4f2d15bc828ed8f035584c1c1449dfbd3be0464bbba353f5599e6a8334575fc20b0b67d591d768100f1b6ffd1c89b2799f4c6c139ab53b836088878d2f441c634514be46d5b708f421dd1fbdbb2e6a6d9949c0c1681d2ec3612bad0a18a431cada67552afd866b9a26d23244e39f0320085a9f3daa31a8764039c29ee72b5f60ced874225edb1679255256b94cac90c7eb5045c83403df19f37462f0e6cb0e959c3a020d50c63a1adf1699ca9aa4512526e564c1485f066e01f412a9f1789311f2af2afb6bf7137c59059ec14f67a7a03d2f9c2357c703bc527c14bab2e76559f7cd3a3241258a7e004a50c24ed7650c69c11fbc982185083cde6bf5f4eb4e9a2c767da66c379851e5da98d3b60037bad576730f98f0139646fa7f6a4357ba8a11fb11c76da551b3ed880bad24d6cefee91a2882b5b3e1beeb8b9b0d8f046dc8ce024cdec325f0090c1eed6808ea0128adab1b8d730503ae8b714a4734f79a88758b151233e055344b99be4f973db876e0b9c4861a79f107b2cc9cc7323dcd34c6b6074bc37f55972c22a609545f1bc77b0ff5f6001d96dccf64d27d9c9e50d44245f18532243c841e66cf82a635e4e3f3d6e0a5461ebe7b7ef26a5f952046f4ad1a3294b0f707e5e8df0a84f9de3903df61cb460d33716a46ec0195f4bfe5c3f45e2551be61ea8460491ee4d323a0c91b63bf50af3729a9d07b7653cb6aaadf5756536e5a289b63caf603c96129c502a65cced646d1a30adce4eb7384e021080d00fa50c38e35d512e6380ba3c7d303bc56129600f6a6e0b74f17d24090d3948436658aba5cae61982429343e4b255818c6b5f2ab2675d9ba1eb8804f10c1808e83c283250a32fd0cfbdb52260fefac5f008c6a87dc2099c9c3f14cf74ca41267fbcf9c2d82b7bd798a2ef6b90b0b3ea3c7be6333f400d104b050588c81897affe1091b7798b071d25718bba424244e915c9800028ddb17de0704bab0b9f196167bdc7e07198e35c116d1a47c4a72b997eae586311d2bb7104dfbfe66e702f26fac00e70def53a398f8e617b377dfa0aa6fd1b47130e3d1b52ca07a0af2499b866cb0cc7c0e20b2d8614b5cfd27dd54b2d25e71b60e97d81904ab94f1b1aed471f2de43066f61dccbd97f003799b59271ae9cc36aab19959243bd3e7b92ae461828df0e73bd10a6e0bbdda78226c88bd083d1d5d53658e807dfc062fe03becf7b55a19bc4b32437d862992c083c803eb12e7af6c439116ecea673170af9a34e9e384786ad6e027c2cdf8c7d704a171c233b380dd24541e27c99785ff781423f7b6da02f943cd752f9f17b0900968eea229c1b3a51a4ff7d51a2d74edc22f6f515bf5ab3e5ccede77206db0125c8fcebf84001c8713e0dbafdce6feeb52eb433c1524cb5ca84d0a6067a20699521c4f26b105701054e4075dd3bb9e8a5287da1390d2fb41f868bc72b10024806dad7af0ae1ad8124eb7c4b876587c20546ec2b37e96b607e4b7c67c5ba06b89f05af5b46de5fa3b3b74fb2c6d266faba1c2cc7fc085bde77a4c9c2fcd3152ba6009b4c62498d37abd8dbb155cb8875fb40e04374ac2a09dad613a0c002cb8d217d96476e5c1e0876ac4e4398d66cdda686f14e2d2f5308d3ad18d4208bada4a051b98115847bf1fc43b4e5ce3abc080a273f0bc92b909c46c23055cc2490c78dc66e64f7f70145b651bfe8eada6501f9d6ea9cb49b97031ad0881796ad981bd407034174307b9a9b1b02dbe2607333c2047b48bd1f150aaea768125781c71cd21a900405bd31b78e98c9f02110d435ce035a765b478fc25241ffeed5686c3f5f716ed79e8954bd69d1b9afc800e2af451e3cd8c12a80428762361520c99f1f564ddedd5a0f7b0462389f5d9570f8b83e95e19d90d0ae649dbe00998b554b0f76e07789f96ca6362f1e1e94df675aa29e964ad01584940df871375040a52b53991bf0c9deaf037b81f0615a977016c3584bd29d5ac929678650d9e5c046b89b4d2a1ce1142170e6b1faa26c4af7b8abd4043e8949b990bfc9c520ff0d4340ed6ec5f27e7039e8567ba6df0a5466fb9196b5022f7e6eca1a96845d6757a6f9cfd336a97264b32476d055cec1b7d4d68467d98af8d70d898b12156d023f89098f932d3618b13cc8fb548b200476ff6b5b70a8ec7f4aa2a2127fa01fc7e722d57ca310d1b2cf7a9f50c87e9f82fa1733b05cfdf755600c929be67ad7b61df2aa31d3f5226a8bae0dedf4a6ce15fe0e676062633f6c1f649e7280b00ba4b00ba568fde0462f7aae438d6257f1872d019f25903d86cc4abba5d85e4be598f242af0c9f08805b7ba30bd93c6ee8f49d0788f7bd8731dc64362812699eb9686f14f2c81cc2722f56e015e4ca5f0c25a9254930e64ce9edbebd073caf0291db20a0e34e8c07992c67057355725c600a378e1733d86c9bc1ebdf0fdfbb3004204e645de9dcd0955266afce3191febd88b6c2df49e399f2e2359b4918313fbdf0996329ade0b307b627ca1c9e0e008e584e42e4ae4a3e8dcd36056c116afa063c966ee404b3397dd6058a0647b99216e544d9925c44d0f405060d0cbb33743ecec781904393976100431e21eb34d57d9e6e6f3654235ecd0c28507b7846f9ce15a68c2df7ce507c66b3ac9b28d7be45c336659f3ff705c9ff9c8ea7af04c71b6fedabf422898fb4c17322e0e09531d7f98f71b0d346d0e16b4a18a41e0b754e1894421b2952a052557354ab7c75957be224a264ef7fc11e73c46cc61b661414ca89f334f679dcf160273c23e1b0345a27e6a47f25b6861304219551c238e2e3ef9a31856ffd06372c97524c3772d3f1df7107460ac60520430da46ee16df0f8ef872d7b084df144e7fe8d1b58a8a0ce0788cd709f2c5d5ed2f0ba25145612dd31260dfe4ac88dda2b979b0fb515f2f8191c99a3b5db9119d4f5e7a61c81ac1162a8f277f13940a0bb20f3c3ec009b1d04b16d8d489bf081013e9846e6e90dc46546e9a98a2ceb0679d363b8d192bd48010844a33eed33564c035a2a8d94192911a78c476888ddf60e01425b42981c9bb474531b52c2c05d239c9a19d33b08dfb5c402628265c82b0fd6bb61f5182fda1609d08b289b1184a6b96d5b7055bcadcbe73510d3995fab1e523793cc1529c8bf3f6d849b978788b66933926c144ca45c37c5260ce98eeb17e4f4c97fb87f9365f3e54f913abb342ceccebabbfc6ce6d98fdc5c2aac7cf3789e8c99a34471f58aa9311812d81c4f7dcf1ee4a474a04677e061ecad4548af35afba9662902ddcbcdd72c17934efab6881558919865a492de586e6060536844bce7e09c424889f04f4123a0687aadc719bffeb557a25a91da177ab513ac26ac6aebc02a67a77b3120f82e6e90b0807e3baa3a7cb859b0720dc90226934887b1f6396d03f635e1b23c14c593baeaa842cfb17734627eea8f566c70c2de5b13bdb1fb507816ffa2646970667358221220a621f656002987d1c27da9b195425dfd057cc4876858bf7fe8809aa90df16d3a64736f6c63430008150033")]
    contract Oracle {
        struct RoundData {
            uint256 round;
            int256 price;
            uint256 timestamp;
            uint256 status;
        }

        constructor(address[] memory _voters, address _autonity, address _operator, string[] memory _symbols, uint256 _votePeriod);

        function vote(uint256 _commit, int256[] memory _reports, uint256 _salt) external;
        function finalize() external;
        function getRound() external view returns (uint256);
        function getRoundData(uint256 _round, string memory _symbol) external view returns (RoundData memory data);
        function latestRoundData(string memory _symbol) external view returns (RoundData memory data);
        function getSymbols() external view returns (string[] memory);
        function getVotePeriod() external view returns (uint256);
        function getVoters() external view returns (address[] memory);
        function getPrecision() external pure returns (uint256);
        function setSymbols(string[] memory _symbols) external;
        function setVoters(address[] memory _newVoters) external;
        function setOperator(address _operator) external;
    }
}
