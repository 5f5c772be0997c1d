//! Raw JSON-RPC request command

use ethrpc_client::Param;
use ethrpc_primitives::parse_u64_auto;
use serde_json::Value;

use super::client;
use crate::{config::Config, CliError};

/// Turn command-line arguments into positional params for `method`.
///
/// Block-number methods take a number in any base and send it as hex. Every
/// other method gets its arguments as strings.
pub fn build_params(method: &str, args: &[String]) -> Result<Vec<Param>, CliError> {
    match method {
        "eth_getBlockByNumber" => {
            let [number, full] = args else {
                return Err(CliError::InvalidInput(format!(
                    "{} takes <number> <include-transactions>",
                    method
                )));
            };
            Ok(vec![block_number_param(number)?, parse_bool(full)?.into()])
        }
        "eth_getUncleCountByBlockNumber" => {
            let [number] = args else {
                return Err(CliError::InvalidInput(format!("{} takes <number>", method)));
            };
            Ok(vec![block_number_param(number)?])
        }
        _ => Ok(args.iter().map(|a| Param::from(a.as_str())).collect()),
    }
}

fn block_number_param(s: &str) -> Result<Param, CliError> {
    let n = parse_u64_auto(s)
        .map_err(|e| CliError::InvalidInput(format!("invalid block number {:?}: {}", s, e)))?;
    Ok(Param::from(format!("0x{:x}", n)))
}

fn parse_bool(s: &str) -> Result<bool, CliError> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(CliError::InvalidInput(format!("invalid boolean {:?}", s))),
    }
}

/// Send `method` and print the reply, pretty-printed
pub async fn execute(config: &Config, method: &str, args: &[String]) -> Result<(), CliError> {
    let params = build_params(method, args)?;
    let body = client(config).call(method, &params).await?;
    let reply: Value = serde_json::from_slice(&body)?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    fn encode(params: &[Param]) -> Value {
        serde_json::to_value(params).unwrap()
    }

    #[test]
    fn test_get_block_by_number_params() {
        let params = build_params("eth_getBlockByNumber", &args(&["436", "true"])).unwrap();
        assert_eq!(encode(&params), json!(["0x1b4", true]));

        let params = build_params("eth_getBlockByNumber", &args(&["0x10", "0"])).unwrap();
        assert_eq!(encode(&params), json!(["0x10", false]));
    }

    #[test]
    fn test_get_block_by_number_bad_args() {
        assert!(build_params("eth_getBlockByNumber", &args(&["436"])).is_err());
        assert!(build_params("eth_getBlockByNumber", &args(&["x", "true"])).is_err());
        assert!(build_params("eth_getBlockByNumber", &args(&["1", "yes"])).is_err());
    }

    #[test]
    fn test_uncle_count_params() {
        let params = build_params("eth_getUncleCountByBlockNumber", &args(&["0o17"])).unwrap();
        assert_eq!(encode(&params), json!(["0xf"]));
    }

    #[test]
    fn test_other_methods_pass_strings() {
        let params = build_params(
            "eth_getBalance",
            &args(&["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]),
        )
        .unwrap();
        assert_eq!(
            encode(&params),
            json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"])
        );
        assert_eq!(encode(&build_params("net_version", &[]).unwrap()), json!([]));
    }
}
