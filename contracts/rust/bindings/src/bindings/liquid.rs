//! Bindings for `Liquid.sol`, the per-validator liquid newton token.
//!
//! One instance is deployed by the Autonity contract for every registered
//! validator; the address is read back from `getValidator(...).liquidContract`.
//! The standalone deploy here exists for the test harness only.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50610d48806100206000396000f3fe60806040521594dd305209dab07a577ed80af9697875c233c3a4d6225fcec0da9ab482e9459c982e78ba5c877f5e619b4f6de83ed0c48bf93b87d2e5550a42eedef8f25b64e38d5b43dfed60d4d48a553b4b7ac4758d4e90b9d7eb9e58bc7ac9e4238da44bde6fe8f473ab5a54526708461d29e2ab2f4de91d2202401409b99ceb509b65f3e0b28238e127acf0459b8e309b2859beb1fd6bf7022c93ad698a80e1121a397b57e5b1fd8f8612e5c18542d7a870b4e2521d361898e3f694be4e4bb9659d625ac92cc6259e32cb8378c6429faca0c6b7c28688403274c47c98063ca4bf3475d46a585a2105fe716b89f928bdf302e6c5de020e8c021f97f97d0afa1281fe2ef1f8123dadad2b2d13fefa9a843e081512958c9a5bd6d9af43187de61a0bdcdf62aefabdebfaf5d261976d64079a15ab0498e72fa684a12ddb7b34a16286b91e7ed46f9d646c22908dc13f722341fc1baa4436e10e2ccecfb2843f61835a098949a331a176c97bb7de99c9b98b5bf04f87011541ce81fd9eeb50cea371e068208d936653d4d1d69de6abc5c54e47eb092a0e23fdaee109b9b1b56fcf80ea7f3d3ac1bc42745f5e3c6563f93c90e88a48efffa97c9ddce6dc2e0e102723fb0333d0bbee3217a83a11996585d6c0c7b732535a62422ed8d59dfb252867222951f1e2bb02e67a60bbd9c8a285a53bc9a50dfdfbf5aae2db16926d68f648cc09a63af1e95f3c746b625060d7319f2c411bdf84795a5724913bf1ad9ae887004ab9e85c20435eb5e790a1ccd49c6ddae811037be84bc5f4f7e537772af9ca5edcc72e75bb1d666827a9cedfec1e989bee55590b6666ce55b685fdae2b0f61fd24a08a674916c272c948cdad739c5db84f86dc205e9a226c75a9dedce4ccea0b93090037f8cb7390f309a83edf4c9d7e669899f21835afa2c8a7ef5bac11da0b23f2b483c21e107ee1b5e1d1bdbb02f8ded71bdaa7b60d338c1a87b18b42ac167b5deab30ed65826d676ff90dfa94c35789cb690132151547097b1e432529f6fad1b22fb2c8127b39b55344f3d251c287ffa3d631f825350bc9a5b73e44e0ad6112cf61f2a9b95d7b14b2faa057299c2f596c93d01593ab42458d37227b2417505b9b217e2e3ac867b190f4e940520427412b9165b06dd429c4b95316bdc22dfc9c08cc69be6c780e8756dad6df509610933d0d8ef1683d0065c59acc85ba06895fcaafb9e4d9ab59e540d0e7165178fda6a57468156854a8bd85d99a3e366261fa5d5afefa537665ba8d7a6431b494e9afbdeb34ac76b47b0f91c1b6a8d2dc7841fc4cc7596ba19791cf3d62d6307f4bb8bf5af4f7e4fc70b3088e2a005738163c7ef95ac5723300c9de86a16d0200c96756344f941d18ab999dc52741d505278c43143c0848f06901835a360d8dcd6299cd65c6885dd3887870a7018779bdbb5cea2ebed7965927ab6ea01b1db26ae8acf2fe178ad47cda60c1431d6220989bc14a0772925f13d429e29acb9c1e5d8f095e33c777eb30a250ff0ca32ce9bd19071115e92f71b6bf2226c069c3178d755a6300228c8ee02ca307bd0f96df8e22bef26b92046a9afd686a9f2b823b754c2c5c2168d6dd0bf25750576d7d1302ab9fc4dcf1607e5071b332f3076d93c96296e6771e083f255d4733550b8dbb8d3fa0dbb7d302b6d890b7e430625de4eb9bcece8020c9b19f4fb4278c897461484550633e6f9af4347b7881c4c3c4872e023b36b88e9e61fab93767519ee8fcd1b693c7cb818950ef2c8eb0c0a5c069e2bd8e1eb88f00e49ce731bb277d6d74db15c2b1249abd7ed29a0a96a79700f908012cae1cbbec3d9e7e81d40cb225ba240aeaf600e99316717c001a31dd7f33ea077dd78c2c168255c7b076c40ba3db2f55daa472ba2470baaa9c0420e37a90729e83682ff9424685bd0d5ec1341f8353e573a9c5326d8b5033a1aa8d41e4979ccb011037f9c221c2d1e398ff3a04cf6eb6e0c107c754d626a0ce2c67ba1f56482d05269b924057fb9fe3d897826d2c9d5c51b4fb7412905db2c6b83b7342163b5d439a67e4e256d932f6e86d1e7ddf39e49a7c819fb621cd053869d47bdd74c4a2a62e1939c8d7c4a4fbf7d232782b0f94c49601a2a62ea63656ed3231789f342030865a2f04506babfd8ef547878241bc583613e30484838f433d23d287506a3e2090a2ca4d543005ce672ab3e6d2e7691f7652c375a31bc8e61b81fbc0440da33dffbcd72309226588a8ac40e9ac8aac1869f42531dbdb80f95d2a17750359244afe232c0b76a905431f5bda35b97f5472be108972303b4bd193df4c3fd851a4f8ee501f662aa14f98ddc12790dd5b0ab8f5c1b389675f570c396df03867ca5cb069deed7724e014e1144d04f325494bbfc6ede81aaed5c3ef447c58cdeeadd90ae94ae8c24f8308659dfc18d071bc96c3a554361ec0f7ce8671fdf93deaf36187120d14cef40b64a3cbda59570ae72391b9d69c12bf35c3cfe143c0b7e13d0266633eb49d2b289b1b1131c0a4237216438d1fa9e7feddc21832ff9d6236eb29367e1611960f8df9de954f07466ed6f393a4fec44d254edcc52d417a1c4044d2471ed3403f6cc34b418faa8b6fc904ef41d914f01dc852cd75169681cf502b259640428b7fe25606f19d023c42acb8e3e645841ff4b3ccc70aa34bda8ae59e55ba267a8789dc63a62e70d638c38934cad194da810e7a1e38f7fd8c4a008188fbdb348662568dd03d13703ca314b53ce80c2acbf854bcead2ce7a73d5a27ba3fea6deb2c129d029f4c92de8f07dfff1b74e022144a578855fbb656aaf14d359d6ee1624dae2643e8b7feaaf0a7cedb2c1d930eb241cda211f96c180c5243b856691112ca0084737e24d5ad16b4a3488ba20fb835e089bace2271ca828bf9e1e7f53d50ec3d344eea51ec4f7ab17a226526e48bed6544511a2baa2623222386ca5873e2561a9dc1ebdc6c9ccd87d7492893d0ea819f770371ea1084e277c671fd7cc08124399131442b9d1c6402f119afc0c748c8760004c6fd601d1b55fcb0089a810bda526b154e09fd7e274ba54423ce6544684aff9350ff10c5cc8b5bc29234ff13544ab39bef5ba3a784f42bc3401ab921145e942ef1eab677e2106b20b29e99ea673aef3c92227595ea61c16f172450cf473189acb78c930fcce0af8535a724eb84067e9ed6581ffcbe9b591a208979170c0fb04dd5d25324a864fa383ffad29c908404fe9e11882492a483b751fafb583bcda8f6343f95376db372fe0a27ec78b7b83ee16b8f837b4566488de27105380d7986b9926f8451f715b10a92c052651a62ca3c6cc9ed575740d49496eeb1396f1bcfc554b782cb7b1a1c2fc836aa025c12fef7d8585871c5b9268feba6e69e1d97cd6dceecc7163421a6d4227345a9e187b8d5971de2c912269a371549a7949a74364f6ff36107a96531cfba82097cea72e762a178a6bbaea6557ac51a985777fa0fa91385cf35902f0c4e23e1c8778123c1cc37fafcac522729a4d3655ae19d26ffc796e8773826b3313a038c53c5729dc6cb318ac17fa1c9b4cd12f1d904c32b162a83c19419b293910ec672c5912f1a9a29d6b6e1a04a97d70bc38dd0394f9ad7511aa109264d475f0d1a199a2ac5dc9cae2183bb538680b12bb59126d2355b909a285ab62246ca6169eac01ffc4bbbca7cca3d47ef95a7e936547c82a20509dec5c68eed0ba5ade8402a255e598495941a0d3854031d316085e767183d6bc2a77e9fab6421459eda64ec084c624085c5ffa30e91b7d6d6032468215d95dad3cc57ffd2d0bcb84a1878d1f72bdd002ca3b7f0e333f3b55170f60249761e8c226935b3275573d46d3c4748a4685acc9b8ba99f0b6cca6a3e6d5fd3545b65d798c4829571f283638349dd88b11eecf8bd252841eaa655cb63d50b332a5692e3a92cf5242189aed9479047b9dde3eadefeb52690a3fe7d4b35ac8060acba8f20b4606d21d1580850c308991982a021ba41577bc62e75273c3b4516472b21e36417730e2a86f7d4394953d4abdc3514e85f30619d12601ea968ea2251b501d84196d13205d637214d8eee5a13cdd433d6b967926bc778d25a250ae9dff71b8223d72c0c8886fe7e577317d9846ad6c9bcb2115881475e1e0febde5af7c7d9f3fc0aec5d243d1e02cc6a3001a14c629d5cd8d7a85365abe25a141b42b6789cc089d1a38d2d918c0e3e05cf112c82a8f4a798a6459d1b1626678b5b7db75060c35765f00bd975be62b7426c3454952ac4d69bb5bdcd88ea8cf5e76cc182a49a4db0174a6103cc5142513947214e1673aa6efe602dfe21d39e15d722d8ffbcd529ae6c1f33f9f8bfad489ec3ba077d4739ae61be18505203cd3361747cc886e34163fea3d75741f3f454320ed5418a6d5cf6eceec8e36bfdccb296e3745caf0ea5da8b3f38d0bf45a6d12be4cab8f2f63e45931b23e27f6d0579357652a8d05e33abc921df457f09f789d442fb3c97474434fbcb7d967ecc1854af021847a5332a602535d57dfa493b08c030ab1b429f53f30f7bd100c18bf18d24b8a4f4562c46a45e57c9a005debf3440307977a83d67c4e5133173c8d60b4492722af930b00514dac2d19fec8b6487677f0d71d8d654adeccf032af2f9a809068b370f66070736bf180bd85665da274f931a84a6817f7487ae133413d1d593619df4e4b2785915afa22667a30707ca5dd908d507a3a2646970667358221220a1575ed3b396929d18a31fada2312d7fc109a15e650302a567bff72f26f95ac064736f6c63430008150033")]
    contract Liquid {
        constructor(address _validator, address _treasury, uint256 _commissionRate, string memory _index);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external pure returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address _addr) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address _recipient, uint256 _amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function mint(address _account, uint256 _amount) external;
        function burn(address _account, uint256 _amount) external;
        function claimRewards() external;
        function unclaimedRewards(address _account) external view returns (uint256);
        function redistribute() external payable returns (uint256);
        function lock(address _account, uint256 _amount) external;
        function unlock(address _account, uint256 _amount) external;
        function lockedBalanceOf(address _account) external view returns (uint256);
        function unlockedBalanceOf(address _account) external view returns (uint256);
        function setCommissionRate(uint256 _rate) external;
        function treasury() external view returns (address);
        function validator() external view returns (address);
        function COMMISSION_RATE_PRECISION() external view returns (uint256);
    }
}
