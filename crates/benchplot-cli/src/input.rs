// benchplot - csParallelTask benchmark log visualizer
//
// Copyright (c) 2026 benchplot contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Input acquisition: a named file or the full standard-input stream.
//!
//! The whole text is materialized before parsing begins; there is no
//! streaming mode. Decoding is lenient UTF-8 (invalid bytes are replaced,
//! never rejected) because the producer's output encoding is not guaranteed.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Read the full input text from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let bytes = match path {
        Some(path) => fs::read(path).map_err(|e| CliError::io_error(path, e))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| CliError::io_error("<stdin>", e))?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
