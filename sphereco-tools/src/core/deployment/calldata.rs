// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ABI encoding of constructor and method arguments.
//!
//! Arguments are given as strings and coerced to the parameter types declared in the ABI, so
//! `"5"` becomes a `uint256` and `"initial value"` a `string`.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Function, JsonAbi, Param},
    primitives::Bytes,
};

/// Creation code for a contract: its bytecode followed by the encoded constructor arguments.
pub fn creation_code(abi: &JsonAbi, bytecode: &[u8], args: &[String]) -> Result<Bytes, EncodingError> {
    let mut code = bytecode.to_vec();
    match abi.constructor() {
        Some(constructor) => {
            check_arg_count("constructor", constructor.inputs.len(), args.len())?;
            let values = coerce_args(&constructor.inputs, args)?;
            code.extend(constructor.abi_encode_input(&values)?);
        }
        None => check_arg_count("constructor", 0, args.len())?,
    }
    Ok(code.into())
}

/// Calldata for invoking `method` with `args`.
pub fn method_calldata(abi: &JsonAbi, method: &str, args: &[String]) -> Result<Bytes, EncodingError> {
    let function = find_function(abi, method)?;
    check_arg_count(&function.signature(), function.inputs.len(), args.len())?;
    let values = coerce_args(&function.inputs, args)?;
    Ok(function.abi_encode_input(&values)?.into())
}

/// Looks up a function by bare name or by full signature such as `incBy(uint256)`.
///
/// A bare name must not be overloaded.
pub fn find_function<'a>(abi: &'a JsonAbi, method: &str) -> Result<&'a Function, EncodingError> {
    if method.contains('(') {
        return abi
            .functions()
            .find(|function| function.signature() == method)
            .ok_or_else(|| EncodingError::MethodNotFound(method.to_string()));
    }
    match abi.function(method).map(Vec::as_slice) {
        None | Some([]) => Err(EncodingError::MethodNotFound(method.to_string())),
        Some([function]) => Ok(function),
        Some(overloads) => Err(EncodingError::AmbiguousMethod {
            method: method.to_string(),
            candidates: overloads.iter().map(Function::signature).collect(),
        }),
    }
}

fn check_arg_count(target: &str, expected: usize, got: usize) -> Result<(), EncodingError> {
    if expected == got {
        Ok(())
    } else {
        Err(EncodingError::ArgCount {
            target: target.to_string(),
            expected,
            got,
        })
    }
}

fn coerce_args(params: &[Param], args: &[String]) -> Result<Vec<DynSolValue>, EncodingError> {
    params
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param
                .resolve()
                .map_err(|source| EncodingError::UnresolvedType {
                    param: describe(param),
                    source,
                })?;
            ty.coerce_str(arg)
                .map_err(|source| EncodingError::InvalidArgument {
                    param: describe(param),
                    value: arg.clone(),
                    source,
                })
        })
        .collect()
}

fn describe(param: &Param) -> String {
    if param.name.is_empty() {
        param.ty.clone()
    } else {
        format!("{} {}", param.ty, param.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("mismatch number of arguments for {target} (want {expected}; got {got})")]
    ArgCount {
        target: String,
        expected: usize,
        got: usize,
    },
    #[error("could not resolve type of {param}: {source}")]
    UnresolvedType {
        param: String,
        source: alloy::dyn_abi::Error,
    },
    #[error("could not parse {value:?} as {param}: {source}")]
    InvalidArgument {
        param: String,
        value: String,
        source: alloy::dyn_abi::Error,
    },
    #[error("abi encoding failed: {0}")]
    Encode(#[from] alloy::dyn_abi::Error),
    #[error("method {0} not found in contract abi")]
    MethodNotFound(String),
    #[error("method {method} is overloaded, use one of: {}", .candidates.join(", "))]
    AmbiguousMethod {
        method: String,
        candidates: Vec<String>,
    },
}
