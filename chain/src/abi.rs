//! ENS contract ABIs.

use alloy_sol_types::sol;

sol! {
    /// ENS registry.
    contract EnsRegistry {
        function resolver(bytes32 node) external view returns (address);
        function owner(bytes32 node) external view returns (address);
    }

    /// ENS NameWrapper.
    contract NameWrapper {
        function isWrapped(bytes32 node) external view returns (bool);
    }

    /// ENS public resolver, multi-coin profile.
    contract PublicResolver {
        function setAddr(bytes32 node, uint256 coinType, bytes memory a) external;
        function addr(bytes32 node, uint256 coinType) external view returns (bytes memory);
        function setText(bytes32 node, string calldata key, string calldata value) external;
        function setContenthash(bytes32 node, bytes calldata hash) external;
        function clearRecords(bytes32 node) external;
        function multicall(bytes[] calldata data) external returns (bytes[] memory results);
    }

    /// ERC-165 interface detection.
    contract Erc165 {
        function supportsInterface(bytes4 interfaceID) external view returns (bool);
    }
}
