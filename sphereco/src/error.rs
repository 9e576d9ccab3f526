// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type SpherecoResult = Result<(), SpherecoError>;

/// Any failure of a command. Every failure exits with status 1.
#[derive(Debug)]
pub struct SpherecoError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl SpherecoError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for SpherecoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for SpherecoError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for SpherecoError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sphereco_tools::Error> for SpherecoError {
    fn from(err: sphereco_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sphereco_tools::ops::deploy::ScriptError> for SpherecoError {
    fn from(err: sphereco_tools::ops::deploy::ScriptError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sphereco_tools::core::module::ModuleError> for SpherecoError {
    fn from(err: sphereco_tools::core::module::ModuleError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
