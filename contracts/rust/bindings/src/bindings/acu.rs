//! Bindings for `ACU.sol`, the Autonomous Currency Unit: a currency-basket
//! index computed from oracle prices.

alloy::sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc, bytecode = "608060405234801561001057600080fd5b50610910806100206000396000f3fe60806040528ae66feebf494e7ec9a8c7a34fecd4d40bfb03416182673d2a33bfa9db87e1e20934a8c352153071f4db6d20b575f6103ff1fa3a10b34ec0e8d762bcbebc238bf5020d4a4e7ac45b149579e5fe55fa02b903c8496a01d761ffa7c28698ac9cbcb8658962bf101b37fe567831655a526ccba505f14f48f30966551515fcec0dd939cbbce5a0c1627eb6ed3b603b8cac37cc45cc8058f68d52025777c3fa2e9bee075cd216bf63c58be34de411cc91670f03b4c4f54ec926d3998bf8f061093177b7e4107976b7543aabcda498947345b79e8a2d467418a1cda86fd0a90ea631d0df2c0118b5342a7fef370b7c74d1e91d7a308a544beb4195154c46f4949e8ce1a5b4df4c0f99512ca5705c0b6ac130b66bc25a31569ee4bc558064a0999389aaea59c9fbc7cc381e98e36f158575d1fd055a6b6b6ad0fad5a67ce6bba98bfcfc930fbb1902bc6a8713083df2571c647956701bcc5ba528a57c67c6fcfa6476d08ae46151c343c9b99cfcf90b647dce0476d47b6c7f6fcf96ce1267e67453cc75cc09a7a64946712bf4d8d6bbcc1b38b2d391eec9ff958c9bdf6844636384a04ac2591a3fc0b41ded1d190ae8dd960a9245bc40cbc50c53c42979b7eb319f6c1a8de58d38db4dd5b7995db4917fbea1c4fba94b442f9f4c045d3ffdafac11e64f2a2a4c9ecdaebd382dcf1dce4fc272bc2952ac6e2e76ecddd65d5f880cf95c7dddcb4bf4afa857f8caf3bd8ddac0ecffa50d50f7812f8ad86b37e9fd1eb863e6491223ac6356723a2879db6b556faa1fd23ae50fa19ccaa1a85ce16042e3f6466a2d46ce9b0e5ae8e1230df762698af0cf35b798017dec779ae81b6115957daf1c637ea76e86d2bbf3b19a9e653e7a097ac21bd95ca81df9174b2f1db37d338456e1d73bb80c935bf5d44c17879f1d80c488bf6a330fb48e5a07572adcaa7316402ea19f80fe72751830cb620561ddbe26cffc438233e2aa88f5b918ea06df31d8fc44a01ddef8318bca4ce3c74402b78554c6d8f5aa4f2b941473340e12f6b49bbcfe2af61abc1113b3448be49edf0672d3c0ea6a96697d511b7a85174eb9ad80d5fb31c89e8a881f27b1602cc7dd1b3e3f3fdaf1bea8a62213337fc87bc2da869d280e10055e7985c4a455b4270bce5194005adc760185825c8a84272102803de252303764d6345604a87e5cd6889ad06b78c5ed81ad92005f422ba7fbf794fce0e13255614173dd2d9d73d549a1e3fe2d3ed60ebbfb2a90d1474bbf878d96d2a9fe9739baf3da7df734fd66c38176d6f71c55e164e366c8f71a6996549cc6aa639b8209b6ddc8c0b5f5117aaec8dc4256d258dcedc9d857ba864f46a288a298d0d5fc282beaf3e97afc3417767b9dfa052b56efeec9543d343cabf07c7665ee51a014fd19c271fdcd8b411783657df79d9a8a84f3dafb8754db59308e0a2242495222bffea742f571b239416aca9129c56df300e96269539bb17b38e2d984ac32b37599752603bbda77be7d1b6cd3e185175e5eed79e2ffc20cffde9c005439035efdd8a49f044e40b41454b99c399a65063711a5ff6cb0387ec238b225efe614bbd76c8893d48dbea33a067a7fe0279b4b1ffbb5c4b72cd9a025a97787f8ca2ddac9cbf8d949f8c34afe1b2c3788bcdc58d310fea8029dd4977b690282bbc3093168da637afcbe098de914fe64d909d7456111ae273163ddf5e7642a064a7ef61db490e17d51cca34ac477697f57db396fd5e889fc25427ba355998dc383084de1071a8c6786b22f54d1aa844f8bc022101717166a253f3e1963096ce78211e7126966896a75b040935705d46c46fd56117469ad09ae9d510662428e4bfbd62c5ea0853574ae3872b36f71c64b5aa915d010bdcf8acac2f3795b28fa1cd961ae4b70f7d1045497066b2a41439d57a4c962162b3767fe6a51ea3e117e4a53c3d159866581b0b8bd05990756c873f2a3f7001955d5cc149a6d9900e84366d117a1ff0b37630cbba778b8dc55dae846ba3537bfbd08c3383cc92a01485c9172d554db6a1c01bafd484308df99075df4aebb6bdcf10eac57f8b38178dae040e2fd20967dbe1d239e0cc27df9b8a3fc3ce55425e983de50b6be3971abb4901969074d37e6c01e82ecceeb60d5d05d8cc91c5304d6d6a0677509700a5539c57b260bbcc4a22955b9a912dd2fb32ed0f1fe721a757c9ec0cd292b9524681d1f199cab00c4c3797a3a33228ab7dcece8b632ca9cf863ff6855d8d6cf016fe9d812363ceeb25ebba4fb2cbf28cd35f2b20218893467b66306348cb0d16159929a9b65ccb317bc3346f59144d5e5a74c8012444c44a5b22c7215830b87ff0232e17936518edf4abfd9808ac3c0a1baf10f2ecc299ba90ffa60d73572d9792a1535b0d3aa00bc9bd73ddd2aedacdeb001abc967af615b97808c9dd790b3bde956a59a881527592eef33000587ae697c6593d7934e8ec1bf3b96fd01451dff840a7e8ba7051044950dce7104c55f0e9cf051c67397a7a780d03fe59c623046fb51d2dd80776544205f8f78a597c34665f31e5d236a025e0d1e5a1ff414c93150186524a7790e8b506bc52b393ba210d77a6d5ae2ae139a4712300f9a9d92c438d2ddecd57768828ddb8387fba5b76d2a5e32c78a42417f508c2ed959255b51e4418a4d1e47e53c07f8a868fb19119d0945407232e01de0399e73ec855371cf8bc92588287e1eb35db98d215101e3cd3bf72bb015c88296d37776a94d8e86f6dfcabd62e310c61ca92977737c84a40bacf2e2a68bdc0d2eade58e929c9e4c0b324ffded93e5df18036eb05ecbd00660a9f1e8470b5cfc7a14f5182173854ecc742fe18b372197eaa49319795e39e1faf72fb57a5a046806eab51745ed86de553c268f2b33cf0e1c4b0ecbb1d45fbc2864d8a41068ea76107f4ae44bc820cfa80a508810978c50d86ab0187c9f683ffbdf0806d1a56202e0b2b8bf9e3b3c3afcd61673724728d1baaf3d04e308a3ba8f7282e37cc28ec6fbbebed5b21d687771d15e04f1acfe14a5a8dbc618b05bfeedabceb5ed95f56046ae402b9413be3b0f8ea9e2e85414c2c53fbe9e8c3c209fe1294b89e8eb9b3673c8b7ff842e819ebb944d0491f64c331277870fb1c1118fa5405bea142c3fc37f66b58bc78b4e81bb7ca4a5c400fdd03b30f80e647c779fd18a52261b8ce51547f104f7a26469706673582212202d031925afab6ee932864a0c15fa16a9dfd968da2f7c9d41748c35597421b3c264736f6c63430008150033")]
    contract ACU {
        error InvalidBasket();
        error NoACUValue();
        error Unauthorized();

        constructor(string[] memory _symbols, uint256[] memory _quantities, uint256 _scale, address _autonity, address _operator, address _oracle);

        function value() external view returns (int256);
        function round() external view returns (uint256);
        function scale() external view returns (uint256);
        function scaleFactor() external view returns (uint256);
        function symbols() external view returns (string[] memory);
        function quantities() external view returns (uint256[] memory);
        function update() external returns (bool status);
        function modifyBasket(string[] memory _symbols, uint256[] memory _quantities) external;
        function setOperator(address _operator) external;
        function setOracle(address _oracle) external;
    }
}
