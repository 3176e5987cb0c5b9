//! Bindings for `Autonity.sol`, the main protocol contract.
//!
//! Autonity is the Newton (NTN) ERC-20 token, the staking ledger and the
//! validator registry in one contract. The protocol-only entry points
//! (`finalize`, `computeCommittee`, `finalizeInitialization`) are callable
//! only by the client at block boundaries; they are declared here so the
//! harness can drive them against a dev node.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50612bfc806100206000396000f3fe608060405286bce9488f3c41540dcbaa2a3d1d3f748a0148e17a3b8e5a18635bf3abbe4cc0c0ec8398482d8e935ff89e57de19694c88f4f7544348c7765f5386e777eed5621a60a55f39b99916da63c28e955ec863e264ef1ef3ff463383838246c390b5c15feb9d63ca4426b018ad32dcc7875c598a474e9e2e584f0fdda38eea5853b4add01762e1dc21aaf6b6ed8564ded589216be9b79c5ae2571b31840d191363eada447ae588f3828f4ab23f602a99966d6b064407f54707a7fd22ce3f7d51e5880a840faea2f490cab43df0a647769debb3840305dd76cd7b53057d0f7816c5cd89a3860b0359e6e2a9c171ef490c8636d5f8ba94c03b210f5acd0c53a5951758e728d0a51fd3f211bc79c36bc41f82f009b29f4225506653429ccb33adb4fb2de02a0a4da8bad7352d8a2af3dc3f3c4368b9e817eda599599fc6f862507aa74534e6ce5c11b1ae10d6de27d72c3416785baffb4c1e4b74636901aa0abf5726eb85b8cdeb1cdec0278fdb686a5a84b4f16f29fad3275df86cc59f41e00b6fb44e8145931a0903409efc56ab9b8dadb349c3616b582db71a4e9853fa9ab35da0358b82ed0c161e539c9534a120186364b41ab34c3030da47478253dd06cfe4d36639360511404d8121b7e45d5f0f1b227ce6819e4fab4a6abfd191fe0b4ddc3c629857799bd05219bce1c07e10a5766298ae3651cac95358448b8b14dce4806f691161dc1a578eeea5192756125bf9c854911098beb91e6c4d06e934ab34cf4ce6531787bfae65aec49456498ea70732334f7b1f8ed3cbf58712ba64babe4650c84ae77026d67c8fe058dc300ea6678818dd32fa62db880fcab2c5fe019ff04fe45b7a99752f51c77b8110c6c1bca462cf510fe7b9e7ee52b1a169d7d2a80ccc7c52a279c470747ab86e476a5097f1f7f99781e8ca9aafcfd0e8c4020144ffcccc5a634be7748cf3d643fa9d0fa6cafab21c0157e908cd79554e075cfa30fe4ac4a89b9654f4c88ab0ce45975dc911874c1680dbcb1f820ea1f8c1028e71ff5c04e244bafe9a064141e52963a7fe1154e08a46c5b6372fceaac716e3322122e509438f356bf6665dc9b76a037a9b64be3fb96b71cfdb9b2d6c8401d985de50eaf6a48df7920f5e183514e5470d2445835ceaa34e50b6b6692f07dd7ece74229a0d82f9874bc21dfec7bdb91032595f5108f040abb08855e5f2b4ab07833ba29af035c317320f7c283c550eade050d6df882e9a8098ea52bb7de18c5f0e53ea6a30ff1f57d325a1287baa71b9f0562e3d2791766dea848f570dbb273a2bacac7ed975de64f3674431ee3e822f2a97877c35344ad9bd38874154ab38ae3543eef56b2761a39d8e2648cab41882c2799c2c3cae2058c1c1caf6b797e5a2aa426c7812e59639848b484f713f86ebd69fd8160597b3da8bce4d7d0e58d4634369fc937de7a4ab9d21146b5b1fbac8320319d8cfd4d0e451fdc4a26176705e5ab205d163ba88f5d9954a73efe6d9285305621e2e4a099d64cd786c8c32528f2abedc3c6db5c4a113a833c53e70475b648b0e119d2d37f60c26e3fd5c0d71ae4227907d80e2b948d1e919b81e189509d9987d3034f75044b1caed42696e3cabb7cf51cf0c030a78042c405f740fbcc84473497befba45f39a18944d3c34754a9931442701dda51067d9597b53e02e50a624f90f8f664e65d94b3282b0b33fbd52a4a8ac1120505335739d3fcfe22d7c79a5a59d41e85d8df013ed33db4c91d1920c2c7f65df0ad464f356292332c7515391a00706fd32395daa6a0bd2c95295df4d86a1b0f20f0b66b76e652011064398b5b06adc0beede488e682739c3751ce5310421dad984f77d931af141c768620a7491cb7831b1b86f5a5b77272e09f31641c53c968c8435e51fda6965544d936ed1c7c99a6b3e2f388abef5409d636d5b3ebe3cb322da6948c04ae63f3e36c979efc7157cc11fdeaa75ccd4a3151909ccb4a616b7baa2dccc468dbecd214f176688783dcef218ba97aafb9b250c05402f512674138308cc0cabbfc1db52ce1609ffd06dd3d56dcbfd805835d6b0e57b38eb42338c3060213fd722a7fc75ee8b8414117a47d99cbf9dee96db6ac6f68588dfd6c117afe76c464e63b2061b7104150b6d839fdf6fd60b5f837f3de9b57e14ef1a366162b842403e656397f41c852198ffa505b40153f68f38942f50e003b3d4acb771deae7d11aca8e7ef62d19ef2b05eb44b9d8723c880c196c54df62059244427e0fa1db6881f18c960ede284217e75646211b0d2096b79db7d78b81e426081131ba496be22b230801d42f22e197c49f4a75e653a253e750f0ee642cc091d0e98ca6bf094ffffae786ce570a25eb3d85f2f0dc2373d41872c38d3572fc3afeb000d779337661fbd7af5f13dbf886c8d3e2c70a6ccd42b4df90532a3a78746f6b845c428e2fa5eac1ecf38ff7040bc111beb68218d47d62dfe4190d75662c4cad74926fefeeb4381b0439e6044d2abf9c6aa8870142af85f24af92673fb115d2afebd825ff82d7d3287ef769b60530bbe62c9d19106f11012516f18ed77697ed40a02c48e47f9f3ddb79378972385832296245fc0400cd704798ac3d9f2ae032896657b52a17d4c6bd7a97997cbc4697fbbc1128ee856bd6ee39f88f98407b0ab3003f9c6b369ffc05e4c517e74f73c13309ba76ebd6a5b25ea6fac991c1f8ba6c0791359bdab1e625add0d64bc8fd8b7eb95cb76b81977bb48212615e2fa7f10cfe58c9ec6ca3e6ad9dc03cdbab7ecc188e5d2543a45f6119435738e0a53fd728d19d576f7c041097235b4c6938df18f8fe4a35d76b6151a42b72177c31d6352cf1d1d523001aa721898c138ec8ef77f0e759a0c58a9c7fca7bd7a57dd267155be2bd40c492407601e8477cc87c431889cb31e134960b6340fabb9e3decb3290db35e15789352d89dd2bba397e47377c64c6ab788d7c4054e0f33057d0d0295eaaa512eac95297852dabc9b6f91baaae48dea02220b0b78e877f59e57d0894a868500b5a125523cbf4ed16b0e38204ccbfd8dc19f29a244b6fb39e0d0dbb996339e54c836921f39e19d3cf38658f3165968b6c64f4cc4b6a4ce3505c520c848f7f8e58e12a15b575a934954b0164d5d4f89f8d9622c482b5cd9a51a686e8a5d245da41b068f4cf183d8ee9e3f0b645e2417146d4154c49e549ef75901e6b7d93d2f3c0a76574c4b87347df0b9110d7d921f2c1298004ffe539444e933335ba4b67b176ba300adb273d7e09908737e3eb44dd38be2ae37ea2b8b7c8f35972b00f6bca203b3f3484343ab6c2caf7765f5f501fc8c0b9c2991a116834a0ced0130a83f8997c7f04cc1412a31bd6571e96a0c611b964e41b66349a5b1752f9344f6660079c042e97001f1639e9dc73171b24e0a151e693982b3fbcc9b70fc56ad498e54b18878ede0c973d99e3562fef7f1ff85908fb6d9f52519a9a1495a33c74964fb2b4a8e6162a34c1a5fa3ce010849e74e9869a2ce261879eb40929dc8d1cd44561d5ec9cfd569506b9c5fab356f911b8cb2f4c268649a60cdf90c76b2ab61b12c4dd8461087ae38b24652c61d839628be4a0de0f7a605ecdd3915af87a23111d5366e67575fe7b334b11e65793e3f137e293aef5210e736dd4ccff19201a63b4c6d31e70cf8d49629e5fc45dd21b60cc7311e98880fbd2c8f4f4bf62678b838c2bff5be074c4bae92d3e9356adc191b69f7373472462bc8578e1dab1ae329c76ba867d076ac7a868a2c8b6431b3bbe61d207bbfc0a8241bcdf9800f65db17ddb2810c503b8e2ead6a13d6710c108dc5041c9f5c3de36326a0af3d60721c0805f97d6135f6a58bace03ee6710b230ea115cf3c236c273fba5895be316768826cc2ff0c9b4d12fc54ecf104fa4388cfccfef0323bf1c6ac4869995a8b273acc5942a07e190296536e70bb92e5ade1a892e7773fa81ec57573e4726fd40b7a30ce6ef2f3535939ca34462190f437af973043e38e2995855b68de0ccb701f3c73f279e335550a386a180e23f280f28238f8ee2b77aaf5b498f3a4f5ce5ce1d1e78399496fe28e1e23c4a9ba1e44f28584d8d07a19562f2fa471c492d88e8c09d3e1d9b9e06b26f151bdfd5801f7189ee0d26ca32526c09f8aac875f325382514d00e4b5dc5a4f601ad4f66efd74913c2836e9bfc9e4067f2497831694e0aa203dca001ed752a66baabfe557ac98df03f1283fd055a160b94ae58a4b1cff91f9ef390e5788e73f5c6db65a99fefe35a5a0aa657cc606d0ee67ff92efaf4530b34bf0430434af0c917144b295d7bb74dbe4c3e445054422bd6ffa2ac3be0cd9fd76e25c79fb9d52a0993594c649ff8e5b8dbb68af700bebc3c757adab9377b27a2ff787a86efbcb7d13676a1eacab24126b2f3b0f61f468cf772e33712bebafc4819affbe74e5f5b7072ab5e9dd781f2284a01e9bbe9b52c63437c763aba478208f7793c121380032b99d08ec03ef3683bc06c113c97526798cd2fe4efe596d8dc6e06aebc6815484430ea4c774a6aaa9fbdd2c41de0c30231dc24c47c893a6cf3ad003d4aaf0c49bee5fd7fc48bca90943d5627b1256cfb39b067bf2d60caf46f6784aa11ac6397a969503355b8e572b52c31a7d514c16352bb2150b8b6caf983cc2e89e9e6d5248241821432619529e07a660637f47e50b8faf8faf5dbf0ddcc0d763c6b83508bd82cdbd4c8e37fe5edd320b775789a99c7a8a922263931e0f047ab44022b59d6917407b6172e6bc993cc0039958a7a10ce4d48dd1cba4bdf8515dc76fc1e12ae5be06654472febfaf5caa241a57e7aa1fca4783ae485bd9d75d119d39691c684982f4e4fe6690a80b00fa8e8b07312d3e8cc38ac5adebc57031af767c4f6d30345b90c807ae61dd9c119e49eae6a9d6b035b3c7a0d8b05d2eaecd75fd18d226ee37d19c2b333a4047a335698f8a1d068815c38e980405726085ee7bc50053f1cc78523bc2676c7ee06e0f44a6e516dada3e998e5aadd33d39a4e5bd3fcbb001d7285d32a4a11db7649a621451a501ada8570da4fff843605ed3990fedf02624af8e4ac414b94c4b1179a2dcd510653055c13d2d4d7b609b04f0a550fcf7caf0191f234593e896b451883fe9be015e47fde1216ccc1f8afde802018764b571b81ad2ee5f1defc2d3e72d8c7311249ad9628f4ecbd9eed3d944e8351e53848f6e1128e0a57d604134cfceada255caa26d29edb7c4ec9f281221782643cdf4a44a42d17017950414a9ce392cf2a198eceaf54c56c8f572d2c0c5013bf3be74a81871b0dc28ef494d65b05ef007e701cd6b2a7d8e3f42953f8d4f297f28d1f68662464d3c237724710b160a8ff268867c929085ebcd857505d49852a1476ad83dfd859c5b55d90c2dc326f4d7f5dbe28ccbd56cde13fbebe0fe77d646f2787ad2b6592c03eec90d4b426cf204ed7b3cf0d19d8111b91a9ecfebbbba11eb46f499255fb27fcd954fdabae5ef14920ccbdbe85002217127b7358dbb22ea509406d9d48f0aaa2dc8833916782b192cdbecbcea9b3a354d330777b82a171740268c1e8741cbcf411af23440b674c122cfeda720b70e36922fcb0d5baba9137abef4a45be62dffd1c5838aa00686152c3fea0fb8be7db99d02ccdd817db25a4208e1836e08b9b4f95fd9a9b7bfca8f090f6f80de8d4e9605f925f2f94280dc1c3a6a2a15f6101d69541147862d6bf2f73fa45c9f137bd9fbfcebacd5564fe2ac5e7fa599712d1b9e6b0b2fb07e83865ce4c2d8029c410496795e44d1dba873bb6e2c8f5553941892ab7635b9f8d16c367364619f89fdf0db3c8c3b765e5f16c97ed39e0a749d2e24d9bb1d4783e6f7cd987269208502932be821af76602eaa02acf9c3596ba936c206472f2c9500dcbd2d39439e621a38ae5acef06bd5c97a3442b9e9dca2a63d9e34fc6df50c5e366772aed09cf9c4e551c7ebe39e0b8df5824b8393560c2e11970602e731c8cbf1fc802eb36fa8e1864d2812657d2e5c478f6e265e0b81818fb70231ae825c546eb1be84c85d26228257ca01213211ed4d179f7c317dfbac3d61f58b569b3f381f54cd13571c0ec302ad71b9128c2a01ce15a37e59e1777ed4b616a2dcefe727a1c2058832426587166dbf2d437d0d5357cc262c326fe6f5db6db3f8824a2f48430898edd63de5104b6fa048ce6d87edd96ab4712d53d16fc31807ebc5ca396fd7648abb1f4cc67db340a33b090781578bebebd9ee78811a5ca76b0eb8bfbe7402e2124081a57ba2b0e2f993f9c603032231d9f36b824e397a74470361781b3a86e5d027cb12bb313466faa2ae9a11c921e62dd397f4dd5fe205cc0e533067cbf8f5838b26d6aeba38c5a4f0d6c414bd96e06ec0a8f746829a419bda03145ffc069871afaab902487ee259c7d99293d936e412f1efda7b16aa65385db91a56a4e82471f979d1d73a13315d2262d2299c80131ff67eb75aa80aa468eb5a8ebad5ee83f8c89142e4ad688c3379c9d6b5351f62473b099fcb387fc24078a6f102c6ac3b4290f5121b47c537235b4b825bbf4d69601f73b8f5e781bdf5e2523e486e507d6b6b596f4f7886c61654006aec16480bf12d1305ea2a67641a0ef4ab990f2b89d5925964db8942e472d034711b8135f5471710ae1aae896d7417f9cdf9483da2f1db0721a25fa558a088049426436316b45bb4650fca663ca93b7acbc77683b2387c58079f0b208f784c78cde0200290ffd091afb346c3fd9bad13d39cd63514adfa273bcbbf9cf3d62d7e2a145dc6912ff6308925ee9e656f635b54ba9d3f867cd74e9a50227fc6a246f2ab1d10ec20e37cf02f7ae50389f61a10bed4ce20defd3e5c060f17914fccb48a36ed795fdd254eb7ff1f55735657e035e852d4b608010228e0fcdbba8794b00dad7d8b45b0cdf7180f78456f5523bb802ec00243e568c7691fc20761691bffb5643579cd789575409966ea54405fbe0ca18c1af5f3d86c3dcec56a4da02ea3ef97050e6d6986ce87741b80ce64bbcddfaad0f9450afbfbd617a12b95b59d96e00105d96122a7e88ef2edb0604987ccc6624ac730abf17bdda1625df75a11bbfa791e57e868534a5405db11517352cc161117e45d8f582c71ccb0acdbfa250c6ccade71753b48f4dc24a451660cca06f31d412f890804c5e42427e0576e7124404e5d33e270e00ba9c48e21862a3f39c420fbabe57b5b55581a50086c59312dcfe80cf00690601a0a5579193a68070993b261effcd1f6e723fefe48185a98537c2ba9596d3dfbea5fa3ac64df899596e0ce7942bd6b024bcec560e2d3441a54ace9eef1a1132c477a37a4a836223211fe20124a9952e04607929f33e0d4408b3d0641964069d9516a9afb1b8e8a49dfd238240f448a75af6dae1a4f71aa9c0350606d2ae319981948d2ffcbcbee1af97a38c9e46ae419fc2cf46de8a1af5021d8f8ee926a68475577e1825f92615b99a7b74db76cf0a01c37e1a25559d78be81333a8f62cf69240f50c81b16a50635847dc0e984ce387a2c74752ceafce79e20b41e4f6d98e93d2eea33792255bf6b4ac7e149d5254a4a6a1eb6c6791d02362c0cdd3a02b86e1cc32c494981e6a5e2e9af8768ef5784ac9a39cbc35079c4ac43101e34ec26b8c15d7cf734bb0c1944e5ad16c3244e7931ea683c968bcd6914c5e94708f4d59d693e074ccb5c9801e1644549e0eac7660ad99346876c81ff09f742306cd03b0901083cbd3749502003a00aa0385721ed1149cb1c34485af2bce4f6fbe14729a1fffa8be2fdfbbf7ea12b8b1e8623e7b639878712649125eafad38959f0c9db23da3dc70c591f7eaafbbd7bc90b85dc28bb6e508a6e9baf3114d6fea7e32fd4f38a87c2564572d8f0b3e0419697cbc98ed437b96479e4d6f76568ccdb30960b63b52c3be40482783281923d74c7066a64700db9db202b91fc510ccd9e117d01be469e90b954f04d2ce8cb31dead70edd626911a39be0ec0a8d29f3a22b58a332772e43a17e7ab4b1e37d3ee12b8be20705ad505810ae62cb7b71fe94dce61f6c771be498376798ecc641e37e6857dd6113b363c5c5d9a7ff2f404fb5011f56b9df3e2890f408afc39e2190e01f97ae7a69c55d39680bfbdd1b686003aa4da059cca2a34dffd472934f38d7a1e7f77fb187ffd81ed7cb588ed4f3c5c2e7cf69d6a9d3127d81ecea5a59f0461bc126a157cf47a78bcb4c580b24e5eac5c5f3b25c78dc52d47e24ad4b285b1be4bb69875584908721231adc57fd2756e7fced0c105e1d57cdab866b8d974504a236ad8d7ea894bff81315c5bfa44f0af490582f7d9270c51d1c0a0f3a39094920bd7ae4726696240fe08d15c5fa139a0f74106bcc9169c21fd525f44abc3e7028a842a66057f024473cafd275c3b82fd6a316ce0eb981c64f0004d0a7ea86ff7b24b5961ad1e00ffe39e6bd3e28f123dd86d18858fc7fdfb9fcd9ae48b9c9113f4dbead86d1169d94d5c0aaf7f258fe2705850b1d388e1f454efbe927e4e395b74e290703fbf7f6ff57e79eb2615217d50a4cc416911d9eb266d9738a30de415bb9fa75f3a108dc567004156e45050891d11bb462feafe6555e7f1b0eb7682502052c765446f581a6a1f38f779d6963efa6de762606b2f8e7b7022aa1700ba2f2f681a68204d2f67b3b77a832fbebbf176f1365b40f33c9bb623f79cd74993c81a96ee844541ecfd838650b8b0675d1e6e135d31d10b836316b2dcfd4f61371f121663aac36105ecd54fce544f02d4def55461dbbc7fa18025fd7a7a5d976188e5925cfcac2adb50eb472882e08510748e553cb9935426e0a3b5f951124abaaaf77f73e090a59cdafa259db9d73f63d5bcd85b4eb07d641e4d9526b1741474d8153fe0194a8deed8a9c85968f78a23c4e44ceb3c94183e76b15b7af1f28a0e6abe1d1f6a5b125eb85d5fe2ab71629bf7b0cefa19c8a629bd6045d5dd04c5c619eb39a6270eafe1802a92e7cacfbcb8554c869be29d5e32ddd53ea274e1d4c79f0822e48c5eaf0eb0915d1db4471cad17eb8b20ac60f4b9a7d78fe97ed5d812f4f89653627f44e49c99e3ec166292d644ac21ac85776c865b92d185731530e18e61d7346501a7ca6b2813a7b7d3c20e69ade123d1b16ce697eef8784df30b3c9d9516f587b099e5d142274aa3977d376a5faa9d3ebac4f87a47099c7f425b7ddade5625246a3c1ca0f6fb737abc11e11fa35e7077e638d410036fa12f2bbb285330fd44497b66c8e616048f8138f47f7009243b8fa0db5eb24d106b8b6710dba337bd1b9763140d949bc995c4a85319b017ab8f1ff52eb1ebc6bc15a9a741d1bb4950868b90927b4cd856a98cad9e4c7c20ccfb674da0c30eba1797fe8b7321691b700f6ba85d1d4fcd464fd9b02a72dc4054aa9758f0340f90908636a33f6f182d14daa1162357f9fc7ec57b63d041858f8527883ddc1e8e81a0b950109542d5373588ae8b8922d2a218a1c9484dbb7e041536e0c9d5e81bcd1e71b8eedb152019208f28d69c2b4d6c1b76861a204e376b489f6fdf6b788a27d84e81ef65386be2c5af626ef63a94740ffdb1cec0b27cb0f0665b6e51b4d4087870f9dec2a572992d2a2fdc695d6f9a7f1f38c0f45177f209d6b64b1e6f73384a752f80d8ccc997f9bbed5dff4df52242a6e9c4999219e060e53edf72eac6b02ce4a8ff2831da15e25e0484bd234d54e843f3f9be8ce23f1b2d0110f88b16e53b48eda57af13e4540a46121cd6ba0ba9a5c9974509224f13ff402956e373f98b3aba51a71edf3fcdbf71c3f851f9a0e6d5f05dd7cc7371f385e5bdc81be91b0d53855c6b77bbf58d166cc47d53fcea7a10eab45bf03d97007511350b3894d56f4436f505e93f8f16f4940133a258db066d16650d3c8b48d0dbe8b1cbf7c044ba5493d9b961e6a1e9b77e05173f84cedaceb79fa11ff4ac4b9160a376ab444a6ac910d1249ed503a3b49f3355da9e6dacf2aea440d6f58c59cd1127ac061da1e7c46a3eb4d2a15ba38199fff983074d8bda06f42716fe773d5b6747c7e9e6cf935eec6d8575568ada4d2e0448ab333d77e6e083d0222be15212fd4d10133325a7996600a8425d138d8597253ed421a38305e67a4f507b06a74cb65852cb017b50202436b2062c56965b61053713061194121df495ae752d409160492d8842690c5c506b450b792eb10ce6e35a7f83f32fd3588513ab1d47393433455c6d8c60b199226eedb2ec3e77581fcb1c9f4ba13c30f450f0ca33caf36c4bfdd7d1843c23edce31dede03b82d4b2dbb1ab4ff6e27fba686399b45fda4d563c4baf1d3ed9bb128f5f05ef24672dc9ac0a12f407e88d6fd905c81d6ae8266c040bf075dd4355e6ffed2aef766bbc253aca196e7678c129fd9ab424dde480010f7b72b251151f3b613826262f3d8cbe7ce4738dc8b35655b6f8dfe01ec1e51dd9cdacae9f38fc759e8a960d657bac5578e2a2a82e28a28a7d678a4e6425f68703f755cb8a074d99a7604fdc62effe353aa84b80a029da885009dfe37fd8c611759ef13f6db162342a109a804f35152a8d1ba4b10cd8f42a8c243cf65c4630339a711b3a239757ceac1f4cb15887eb4bf14a5e95e2efc8df3671b56de940dda23846b1d294874e9dd35f7b548d9050607a020670752352bf50f3ec7fe1366d31346d10cd6d16f3ab6af5cabb9333c905eefd8b48a6068a9eb9d300a1880cf5f94a1b7d4e697a9ef0b0b429588278fd8dfef0e960d0d5ff80fe5838f536b494d60c68e5c7379ac5369d916f43d0ea4488cf8bf65acdadaa87959585634ec4231fa4e3be11d99edf20d33ff4054de4942dd31b93d878b01190650c79c7d8d18f3e270666d801e882cb3bd6908af6fd33f1d454656ea6213b2ff5d9392002a118e4abfb8e4a131820f9539f55ae62eb1324956ada22312175f0ef7b0b0b99627abebb09568370080a8c88f7c9edc945472dc29e2258a1149e8668b76404c0f4edff41a102e35ec932c211e4255103f0d31294c605608af960c5ef3c2f31dff5f4ec79537fbaee684c394c94a4b18081f501fda1a97a2934cc9910d0921da3aa7eb48fa77c412bc3701266fd89183eae72a11fe95bb1301ef195ebeac97d13b66d4ee203f930fd7b4dfb383101ea561e7a6a10fa075617bfaa4fd2c8177f674483754ec93362c047299958f77df01188b9550818a7ff6ae855884c60f8e007de12a3b36c2ee3fb23447efbc93f0d4b8498186e361a27c7a7dfc16e345263365c2c1c512297028deb52d6b2e745242332f309553353ac49a3a82cff14d888e4b946c7e9b535df8b99e55bd209854845c48e1ad89f1d31e78ebc875f966367b8d5f8021348e782e2b9d213d02b12d3dbc2c961c549978bc16c7d431639992f53da2b533203c0404ed6ec847ed45c02775381b9af9e7b281aefee861328233df83dffceabf19a22e0333d19e3cdb75c34bcab6842b80b9210b0c5dd88ad2420d9d4ed3f78bb59d251d1597e6f3e3b4f30bea710bf29bc483ecb65fea5c6e8285519366768c77b713df87687cd9ef825c298cf8bee5414866300ff5658b830288991e3d5efa82b103b65dbf081306144797600d38def9aaf46c359aa66625911887b85af0557ab7cbde741ede34c41a7eaedea9f743035b3701de3fddf87028ba2afb50b544157b92a5e4c5be48b84f29d390248e37526ab879e68942092cff05c29512da387b5ba8a3a95ae1431d027cfcf3058834af335ea92df3e900efd04b9c1413095b794fe32f7a66f2dd4b57f0dea2d7ef08c808a626bdf262b77515664815be145f7f38346a8cebfa7dda4b65b4e02e5a331f1e417dfa3ba7c0992d4091f22e8ef8f7e5b0e70190d7feff8975048b56f5d30b71c9d79e69ea4f8190445f9c4f048500088099af1aeb3e3a1aba2b11936be0eac2a052fe4c6ed8dcae2560f64a620d03eb7fff1887bcedafcb6c9dcd86cd7b26c4d22832e25566824d6affadbac0799199c356cbfcf710c3f119d11f7dbdd17779dd778698fca3109fb170e814147ae21539d49a3ff6709741aabb254f2843db69379b31d9e36282012efe0c6e03f4bae984bb3b10680421c48e8bce8bbab20d88df5000b79061aadd0bf8d1625b8c5bfbade37f52c3f932a6f66edc781bf15de5c0f7fed1c19d96490983b2512c116dbd3238274a428d4b8f0b43e629b2691edcc420e3739e33898bae5823d6494c079e607bb9c201901d3098328935e50eeef0e68950c8ef41e256d929e7dd2eb0bb27feeb6682cec7eadeb6a037184fde78bc2e854b9d68865078a900ee66ba7a522cc712e5429c08ed098678dd5b45c6277d61c133af3f5cac5f83c63f52229ee45bb668ba13bd902e27210585c446f6d2a45d8fb3881d660fe80da911a2ccaeafd608cfd7751abd6f667a8065631a12a13ce385f6b5b32a9fafd624544a7db6bc00e5e661bf368870a142fa923e56f1333c1a9af66512049539702fde92659d005eb6b5ea30b7c9cc3a65f4ffb1f2ced941bdf8e6000497f7ade9faf312dee75c5533c663333f2f0ecce11ec20ce55dd83af5f41ce977aa48201ffde885540fc24c972f0fa0c69c2befe5ced43ac2be0966bb6a261abe85ee2c66354ce1836edd11411f3d2afd589506d75975a13fa5f46cdbc64d0c67ae89959b2f2c188823f592ef5ec5886c6dd707cd35fa3f0becab1f527a3b3be7115bce7dba724965673ba1a363b8e2b231bad03be9f8d0b98d7088aeebaf2108a99f20ab11b11507c0a5ba7fa64ea145efc50c18cfe7d94a75147d9660d5ed09dbc19b751c8025420c58802abf609260d011742e465b40794183dcdd42d0122cdc090db81a0776c63d70ab23561ffda86046124c4d5d2efaf7d222fc30868f3f8044e4c3644be2f6b4968834906fc199fce13c6e12844c4ccea55403b5b6fb4b79ca3dcdb7d97ad6c1e9553f1a0bb6f2439d5f5df01f97443c5310c00d315004e34a23ba6d085d61407cae9e4613a2ca643acba8c9e1b9a4b05d6a9758e2d1b7ef4ce826d634e96a3a99a647887d610f39f14f727dd7fb98eedec24a442c255e90a29e1cdffd2f16cdbf7f2a0b7e85cdfb6f1cfea463681c015f0a59d7e69919b43ce7c897cd917cc90036442ea22beb287a5b6723642f7f3de98dbf5634ec8156b6366567924c18a5d565ecbe12fb2f32ed13dc54a340413b95ed948916db9e334ce77d33b61d50a5b9feae3e5099a8d6772f3b368e852273950f91b956876ac740abaf786cc327fa054f11ce5a5fcd3546047ed4a08d07c31841a3198d976344d987f4467c1dc45b657d52f09676bb76fe7a2fd1077c8f860978fbb7ef8607e665024a33da1920da2757bca9fcce2682f88902b6d94243c2cec60bd4fe170d0ee7e73d46759d7cfb0d095d48dd34003c85c48123797948948fa109a484a23ee709ebb2b90a07f57d07c4e7abe46361944fb2c4364df23a3f26db6cf5574f5bce567fd8b9b43856aaac5d0f8e829980f8d5caff3a7809d004d63c8be169f92d4f884dcb8a8e43524e5d018b5c4c1f3e6838a789e8778fb86261c26d9227c38a83ba7ee4defc725c24d0fddf3897f8564d4c41061116076dbafa4cc8c011c06931517fd11e2c349276cf01400502d1edcdbc9db7d911a784f85df8bd233ed39e140a1787ca0e4ee684232232caab6e64bf6135355a71dbc358f0fb0d7aaf5cdf450a3a2c6981c5c1316eeadc00ed9a95969b0854e46332edbeb2654f988fd67d8d5ce79dd72d760c3bd5ed9c0353e732455675a15ec6e942fa27010a1dd2903feff5c881e8ba95417e45bde4083f3260efc449ebe3f2c78f9c82cdc113ed60e6b1348f9f59407ab0678a13d89a6c8d35cc3ca4037ab1e67128f92d9ca6d55bc082beecff020635dc571f2a672f28e5f4c3c4e76f2ebda9e1a24ac7ba2fec142150d34222b25922704a1c3bb33d342103f5983ebda28c7dd09905c83ae29c26fe02ffc829ff1e2ca45835b9040ccf43e5c2c341bfcb9ff431bbd9b5c684dbd0081e846185b05632c456070529362247ce43b1fac68c7b3a38ea94950c173fc0c971d3af52ffd41b03f57f75dcb44dddb239f253108bd2458ac5cfff7393e9d86173db61f7760a40b33c65ce83b152e8895f140b26415b997b5efff7e9c1e0eecd22e23497278606c8979bb7d50e9f594545b7add75fb9cabf8b6692f60493e9b98564f75f794fe01380014e6befc63d0f20759083992f1463ec307d1b37e0fe3ae11f01785dd5d57e22ac1764a9da609e97040ef78e85730a42973a1a70ceb6f68135a4874e0d0f69d0ff63bd954a03a0e3a1faaecf425c1dedfea548b757a4d1699b03e332dfb137332630487795ccf4f7f263103485a32334c17ee2b7481a743399794e0e5545486b268dc13bbe3ae08d24a5619201a5b3390e6f924515935a2ed9ea7fa2ae34ec7997916980157bfc7fcdfb5678d06b9a82366ecc8edf023bdfd733e7394cb1d568568e61acd8bd71fed17a33dc621928e1143dd93a0653c6e42371bee59702e7ebf229ce9c4e4da5444345951b5523047b198534909bda14613d8bce0c02560b7534798dabfbbcd1dee0f8f4fbe3c7b1244f0528306a7b8df0b1b720b9278b0dcf5c12e940084b912b9bc65573c7cbcecabb7d06e15cbf937ccb1387a643378e2216f3dc4eadb275be73b7c1faffb9c644f5eebf0de13a88d1589507789d8ba9f4e6e77d4dfdbd1ebe5a0ac4e9a9bc6882ee68d25872a922c234f0835a6afd5b4b27cf185d6bd18c32b7bf65bffaf458b7ce9b4c6ec92039ede42f03922f1afa01fa46c9d8390ab2afd30664de62efb416dd7977cab420996ea750f2e68a71508e5af08e5c951a4fe06f392f4b390341717cc838df8560c548b4ed7dea56f4b79a3d95551b50440ca5eb6eb7873045edceada4f21376b7a6b61d6ef461dfe21fd42f094aab006c2cb4bc2a3dcfd4a8f8f5155bc1d9714c173788deba0fb619e75ed20efd97a9f7a00248ff9bd6ead38fd1aa7ea09d998f01a3624995bd8352eca023687435a21a3fda061d26e746db69dccf7acb1d2bb7c24888d6eeaec9cef5f339563fe96ab7ced0cb9f866621af8b48eb85de75bccd74827a549d526b1c9ac8c459d8a9718fb0e3373881c920e80627b44594507444e1d4af435687ea94abf0e1897b970367645f60c9c8e501f5220ba3171684434ec9518e1dbf41f9c5aa0e1cfbf77952aa9b5b1cc2bea81a73d21f59219fdc2b2772a478a1357ee75c4652abf1b9fdf7937d6a62ec4692799b1ff9b5c398f3c6afc1b31fa77652e8aea608603ba2a3735fc31243ed4158ffbe165b25071a549de2887c5bf76ae309c142edbd47b8a0a79a0363404031242aa0595d024235b9f2b87b72bfef3c0c6886356850060109b467810b084a63906452d2669f780fc17e71ed5089734680f73b92019b0cdd727bd17c7986268c1ae999ad19622629c053e83d17d847615800df5a7321fa6491ff691f3451192027ec14d9d0016c390713ade0f337044fc09e74fe9a59ff2777637435aeb2183fa2b53f98f29dbc668215090d5601a98c8f091b1f18a7db2cdba4f5a5ecab6afccb7a6bcd91866bbf7ec1822012309c5ab2b405174b823e4fca84a94754f77621045315ab898aa324ce73cd8d9cb0062e93057144a640d5362bca06d780f407ef0690c5feee8e57557bcfbd639d249004dd4897531ef16deb81a5bade55931f36a2f1964ad40e7203bba7714225bd2291d36b4b0b752868ad9c3972456067160d0fbdefadbd1c2ab53a1a01d2c0c9aa3630caa1d92a55e2debdc62da9eda6a25c5ac031323a58823c082314ff70080d7accf702777ce58485a2646970667358221220d14cb7d03e89a6042eeba973a57a44911c5ed469a68bbe4f996787c10f90788b64736f6c63430008150033")]
    contract Autonity {
        enum ValidatorState { active, paused, jailed, jailbound }

        struct Validator {
            address treasury;
            address nodeAddress;
            address oracleAddress;
            string enode;
            uint256 commissionRate;
            uint256 bondedStake;
            uint256 unbondingStake;
            uint256 unbondingShares;
            uint256 selfBondedStake;
            uint256 selfUnbondingStake;
            uint256 selfUnbondingShares;
            uint256 selfUnbondingStakeLocked;
            address liquidContract;
            uint256 liquidSupply;
            uint256 registrationBlock;
            uint256 totalSlashed;
            uint256 jailReleaseBlock;
            uint256 provableFaultCount;
            bytes consensusKey;
            ValidatorState state;
        }

        struct CommitteeMember {
            address addr;
            uint256 votingPower;
            bytes consensusKey;
        }

        struct Policy {
            uint256 treasuryFee;
            uint256 minBaseFee;
            uint256 delegationRate;
            uint256 unbondingPeriod;
            address treasuryAccount;
        }

        struct Contracts {
            address accountabilityContract;
            address oracleContract;
            address acuContract;
            address supplyControlContract;
            address stabilizationContract;
            address upgradeManagerContract;
        }

        struct Protocol {
            address operatorAccount;
            uint256 epochPeriod;
            uint256 blockPeriod;
            uint256 committeeSize;
        }

        struct Config {
            Policy policy;
            Contracts contracts;
            Protocol protocol;
            uint256 contractVersion;
        }

        constructor(Validator[] memory _validators, Config memory _config);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external pure returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address _addr) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address _recipient, uint256 _amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function mint(address _addr, uint256 _amount) external;
        function burn(address _addr, uint256 _amount) external;
        function bond(address _validator, uint256 _amount) external;
        function unbond(address _validator, uint256 _amount) external;
        function registerValidator(string memory _enode, address _oracleAddress, bytes memory _consensusKey, bytes memory _signatures) external;
        function pauseValidator(address _address) external;
        function activateValidator(address _address) external;
        function updateEnode(address _nodeAddress, string memory _enode) external;
        function changeCommissionRate(address _validator, uint256 _rate) external;
        function getValidator(address _addr) external view returns (Validator memory);
        function getValidators() external view returns (address[] memory);
        function getCommittee() external view returns (CommitteeMember[] memory);
        function getCommitteeEnodes() external view returns (string[] memory);
        function getTreasuryAccount() external view returns (address);
        function getTreasuryFee() external view returns (uint256);
        function getMinimumBaseFee() external view returns (uint256);
        function getOperator() external view returns (address);
        function getOracle() external view returns (address);
        function getEpochPeriod() external view returns (uint256);
        function getBlockPeriod() external view returns (uint256);
        function getUnbondingPeriod() external view returns (uint256);
        function getMaxCommitteeSize() external view returns (uint256);
        function getVersion() external view returns (uint256);
        function getNewContract() external view returns (bytes memory, string memory);
        function getLastEpochBlock() external view returns (uint256);
        function getEpochFromBlock(uint256 _block) external view returns (uint256);
        function config() external view returns (Config memory);
        function epochID() external view returns (uint256);
        function epochTotalBondedStake() external view returns (uint256);
        function totalRedistributed() external view returns (uint256);
        function deployer() external view returns (address);
        function setMinimumBaseFee(uint256 _price) external;
        function setCommitteeSize(uint256 _size) external;
        function setEpochPeriod(uint256 _period) external;
        function setUnbondingPeriod(uint256 _period) external;
        function setTreasuryAccount(address _account) external;
        function setTreasuryFee(uint256 _treasuryFee) external;
        function setOperatorAccount(address _account) external;
        function setAccountabilityContract(address _address) external;
        function setOracleContract(address _address) external;
        function setAcuContract(address _address) external;
        function setSupplyControlContract(address _address) external;
        function setStabilizationContract(address _address) external;
        function setUpgradeManagerContract(address _address) external;
        function finalize() external returns (bool, CommitteeMember[] memory);
        function finalizeInitialization() external;
        function computeCommittee() external returns (address[] memory);
        function upgradeContract(bytes memory _bytecode, string memory _abi) external;
        function completeContractUpgrade() external;
        function resetContractUpgrade() external;
    }
}
