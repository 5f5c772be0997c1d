//! Client integration tests for ethrpc-client
//!
//! Drives every binding through `MockTransport` with canned reply bodies.

use ethrpc_client::{
    Address, BlockTag, BlockTransactions, Client, ClientError, MockTransport, H256, U256,
};
use serde_json::{json, Value};

fn address() -> Address {
    Address::from_hex("0x407d73d8a49eeb85d32cf465507dd71d507100c1").unwrap()
}

fn setup() -> (Client, MockTransport) {
    let transport = MockTransport::new();
    let client = Client::with_transport(transport.clone());
    (client, transport)
}

// ==================== Request Envelope Tests ====================

#[tokio::test]
async fn test_request_params_and_id() {
    let (client, transport) = setup();
    transport.set_result("eth_getBalance", json!("0x0"));

    client
        .get_balance(&address(), BlockTag::Number(16))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": ["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "0x10"],
            "id": 1,
        })
    );
}

#[tokio::test]
async fn test_every_request_uses_id_one() {
    let (client, transport) = setup();
    transport.set_result("net_version", json!("1"));
    transport.set_result("eth_blockNumber", json!("0x1"));

    client.net_version().await.unwrap();
    client.block_number().await.unwrap();
    client.net_version().await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r["id"] == 1 && r["jsonrpc"] == "2.0"));
    assert_eq!(requests[1]["params"], json!([]));
}

// ==================== Account Query Tests ====================

#[tokio::test]
async fn test_get_balance() {
    let (client, transport) = setup();
    transport.set_result("eth_getBalance", json!("0x0234c8a3397aab58"));

    let balance = client.get_balance(&address(), BlockTag::Latest).await.unwrap();
    assert_eq!(balance, U256::from(158972490234375000u64));
}

#[tokio::test]
async fn test_get_balance_beyond_u64() {
    let (client, transport) = setup();
    transport.set_result("eth_getBalance", json!("0x1000000000000000000000000"));

    let balance = client.get_balance(&address(), BlockTag::Latest).await.unwrap();
    assert_eq!(
        balance,
        U256::from_dec_str("79228162514264337593543950336").unwrap()
    );
}

#[tokio::test]
async fn test_get_balance_malformed_hex() {
    let (client, transport) = setup();
    transport.set_result("eth_getBalance", json!("0xnothex"));

    let err = client.get_balance(&address(), BlockTag::Latest).await.unwrap_err();
    match err {
        ClientError::Decode { method, body, .. } => {
            assert_eq!(method, "eth_getBalance");
            assert!(body.contains("0xnothex"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_transaction_count() {
    let (client, transport) = setup();
    transport.set_result("eth_getTransactionCount", json!("0x1"));

    let count = client
        .get_transaction_count(&address(), BlockTag::Latest)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let requests = transport.requests();
    assert_eq!(requests[0]["params"][1], "latest");
}

#[tokio::test]
async fn test_get_transaction_count_decimal_reply() {
    let (client, transport) = setup();
    transport.set_result("eth_getTransactionCount", json!("42"));

    let count = client
        .get_transaction_count(&address(), BlockTag::Pending)
        .await
        .unwrap();
    assert_eq!(count, 42);
}

#[tokio::test]
async fn test_get_transaction_count_malformed() {
    let (client, transport) = setup();
    transport.set_result("eth_getTransactionCount", json!("0xzz"));

    let err = client
        .get_transaction_count(&address(), BlockTag::Latest)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

// ==================== Chain Info Tests ====================

#[tokio::test]
async fn test_net_version() {
    let (client, transport) = setup();
    transport.set_result("net_version", json!("3"));
    assert_eq!(client.net_version().await.unwrap(), 3);
}

#[tokio::test]
async fn test_net_version_not_a_number() {
    let (client, transport) = setup();
    transport.set_result("net_version", json!("mainnet"));
    assert!(matches!(
        client.net_version().await,
        Err(ClientError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_block_number() {
    let (client, transport) = setup();
    transport.set_result("eth_blockNumber", json!("0x4b7"));
    assert_eq!(client.block_number().await.unwrap(), U256::from(1207u64));
}

#[tokio::test]
async fn test_block_number_missing_result() {
    let (client, transport) = setup();
    transport.set_response("eth_blockNumber", r#"{"jsonrpc":"2.0","id":1}"#);
    assert!(matches!(
        client.block_number().await,
        Err(ClientError::Decode { .. })
    ));
}

// ==================== Error Envelope Tests ====================

#[tokio::test]
async fn test_rpc_error_is_surfaced() {
    let (client, transport) = setup();
    transport.set_error("eth_blockNumber", -32601, "the method eth_blockNumber does not exist");

    match client.block_number().await {
        Err(ClientError::Rpc { code, message }) => {
            assert_eq!(code, -32601);
            assert_eq!(message, "the method eth_blockNumber does not exist");
        }
        other => panic!("expected RPC error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rpc_error_wins_over_result() {
    let (client, transport) = setup();
    transport.set_response(
        "eth_blockNumber",
        r#"{"jsonrpc":"2.0","id":1,"result":"0x1","error":{"code":-32000,"message":"boom"}}"#,
    );

    assert!(matches!(
        client.block_number().await,
        Err(ClientError::Rpc { code: -32000, .. })
    ));
}

#[tokio::test]
async fn test_zero_error_code_is_success() {
    let (client, transport) = setup();
    transport.set_response(
        "eth_blockNumber",
        r#"{"jsonrpc":"2.0","id":1,"result":"0x10","error":{"code":0,"message":"ignored"}}"#,
    );
    assert_eq!(client.block_number().await.unwrap(), U256::from(16u64));
}

#[tokio::test]
async fn test_raw_call_returns_checked_body() {
    let (client, transport) = setup();
    transport.set_result("eth_getUncleCountByBlockNumber", json!("0x1"));

    let body = client
        .call("eth_getUncleCountByBlockNumber", &["0xe8".into()])
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["result"], "0x1");
}

#[tokio::test]
async fn test_transport_failure() {
    let (client, _transport) = setup();
    assert!(matches!(
        client.net_version().await,
        Err(ClientError::Transport(_))
    ));
}

// ==================== Transaction Submission Tests ====================

#[tokio::test]
async fn test_send_raw_transaction() {
    let (client, transport) = setup();
    let hash = "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331";
    transport.set_result("eth_sendRawTransaction", json!(hash));

    let result = client.send_raw_transaction("0xd46e8dd67c5d32be").await.unwrap();
    assert_eq!(result, hash);
    assert_eq!(transport.requests()[0]["params"], json!(["0xd46e8dd67c5d32be"]));
}

#[tokio::test]
async fn test_send_raw_transaction_empty_result() {
    let (client, transport) = setup();
    transport.set_response("eth_sendRawTransaction", r#"{"jsonrpc":"2.0","id":1,"result":""}"#);

    match client.send_raw_transaction("0x00").await {
        Err(ClientError::UnknownReply { body }) => assert!(body.contains(r#""result":"""#)),
        other => panic!("expected unknown reply, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_raw_transaction_missing_result() {
    let (client, transport) = setup();
    transport.set_response("eth_sendRawTransaction", r#"{"jsonrpc":"2.0","id":1}"#);

    assert!(matches!(
        client.send_raw_transaction("0x00").await,
        Err(ClientError::UnknownReply { .. })
    ));
}

#[tokio::test]
async fn test_send_raw_transaction_rejected() {
    let (client, transport) = setup();
    transport.set_error("eth_sendRawTransaction", -32000, "nonce too low");

    match client.send_raw_transaction("0x00").await {
        Err(ClientError::Rpc { code, message }) => {
            assert_eq!(code, -32000);
            assert_eq!(message, "nonce too low");
        }
        other => panic!("expected RPC error, got {other:?}"),
    }
}

// ==================== Block Query Tests ====================

fn block_fixture(transactions: Value) -> Value {
    json!({
        "difficulty": "0x4ea3f27bc",
        "extraData": "0x",
        "gasLimit": "0x1388",
        "gasUsed": "0x5208",
        "hash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
        "logsBloom": "0x00",
        "miner": "0xbb7b8287f3f0a933474a79eae42cbca977791171",
        "mixHash": "0x4fffe9ae21f1c9e15207b1f472d5bbdd68c9595d461666602f2be20daf5e7843",
        "nonce": "0x689056015818adbe",
        "number": "0x1b4",
        "parentHash": "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "size": "0x220",
        "stateRoot": "0xddc8b0234c2e0cad087c8b389aa7ef01f7d79b2570bccb77ce48648aa61c904d",
        "timestamp": "0x55ba467c",
        "totalDifficulty": "0x78ed983323d",
        "transactions": transactions,
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "uncles": ["0x1606e5b48e01b996cadc001622fb5e363b421dc0818cf78f21a8e70579cb46a"]
    })
}

fn transaction_fixture(hash: &str) -> Value {
    json!({
        "blockHash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
        "blockNumber": "0x1b4",
        "from": "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
        "gas": "0x5208",
        "gasPrice": "0x4a817c800",
        "hash": hash,
        "input": "0x",
        "nonce": "0x0",
        "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "transactionIndex": "0x0",
        "value": "0x1",
        "v": "0x25",
        "r": "0x1b5e176d927f8e9ab405058b2d2457392da3e20f328b16ddabcebc33eaac5fea",
        "s": "0x4ba69724e8f69de52f0125ad8b3c5c2cef33019bac3249e2c0a2192766d1721c"
    })
}

#[tokio::test]
async fn test_get_block_hashes() {
    let (client, transport) = setup();
    transport.set_result(
        "eth_getBlockByNumber",
        block_fixture(json!(["0xaa", "0xbb"])),
    );

    let block = client
        .get_block_by_number(BlockTag::Number(436), false)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(block.number, Some(U256::from(436u64)));
    assert_eq!(block.gas_used, U256::from(21000u64));
    assert_eq!(block.uncles.len(), 1);
    match block.transactions {
        BlockTransactions::Hashes(hashes) => assert_eq!(hashes, vec!["0xaa", "0xbb"]),
        other => panic!("expected hashes, got {other:?}"),
    }
    assert_eq!(
        transport.requests()[0]["params"],
        json!(["0x1b4", false])
    );
}

#[tokio::test]
async fn test_get_block_full() {
    let (client, transport) = setup();
    transport.set_result(
        "eth_getBlockByNumber",
        block_fixture(json!([transaction_fixture("0xaa"), transaction_fixture("0xbb")])),
    );

    let block = client
        .get_block_by_number(BlockTag::Latest, true)
        .await
        .unwrap()
        .unwrap();

    match &block.transactions {
        BlockTransactions::Full(txs) => {
            assert_eq!(txs.len(), 2);
            assert_eq!(txs[1].hash, "0xbb");
        }
        other => panic!("expected full transactions, got {other:?}"),
    }
    assert_eq!(block.transactions.hashes(), vec!["0xaa", "0xbb"]);
    assert_eq!(transport.requests()[0]["params"], json!(["latest", true]));
}

#[tokio::test]
async fn test_get_block_flag_mismatch_is_decode_error() {
    let (client, transport) = setup();
    transport.set_result("eth_getBlockByNumber", block_fixture(json!(["0xaa"])));

    match client.get_block_by_number(BlockTag::Latest, true).await {
        Err(ClientError::Decode { method, .. }) => assert_eq!(method, "eth_getBlockByNumber"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_block_null() {
    let (client, transport) = setup();
    transport.set_result("eth_getBlockByNumber", Value::Null);

    let block = client
        .get_block_by_number(BlockTag::Number(99_999_999), false)
        .await
        .unwrap();
    assert!(block.is_none());
}

// ==================== Receipt Query Tests ====================

#[tokio::test]
async fn test_get_transaction_receipt() {
    let (client, transport) = setup();
    transport.set_result(
        "eth_getTransactionReceipt",
        json!({
            "blockHash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
            "blockNumber": "0x1b4",
            "contractAddress": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
            "cumulativeGasUsed": "0x33bc",
            "gasUsed": "0x4dc",
            "logs": [],
            "logsBloom": "0x00",
            "status": "0x1",
            "transactionHash": "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
            "transactionIndex": "0x1"
        }),
    );

    let hash = H256::from_hex("0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238")
        .unwrap();
    let receipt = client.get_transaction_receipt(&hash).await.unwrap().unwrap();

    assert_eq!(
        receipt.contract_address.as_deref(),
        Some("0xb60e8dd61c5d32be8058bb8eb970870f07233155")
    );
    assert_eq!(receipt.cumulative_gas_used, "0x33bc");
    assert!(receipt.logs.is_empty());
    assert_eq!(transport.requests()[0]["params"], json!([hash.to_hex()]));
}

#[tokio::test]
async fn test_get_transaction_receipt_pending() {
    let (client, transport) = setup();
    transport.set_result("eth_getTransactionReceipt", Value::Null);

    let receipt = client.get_transaction_receipt(&H256::ZERO).await.unwrap();
    assert!(receipt.is_none());
}
